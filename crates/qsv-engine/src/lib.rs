//! qsv Statevector Engine
//!
//! Holds a dense vector of `2^n` complex amplitudes and evolves it with
//! `k`-qubit operators on arbitrary, possibly non-adjacent qubits. A gate
//! is applied by splitting the basis into groups that share every
//! non-target bit and multiplying each group's `2^k` amplitudes by the
//! gate matrix, which costs `O(2^n · 2^k)` time and `O(2^k)` scratch.
//!
//! # Example
//!
//! ```rust
//! use qsv_engine::StatevectorEngine;
//! use qsv_gates::{cnot, h, z};
//!
//! let mut engine = StatevectorEngine::new(2).unwrap();
//! engine.apply_gate(&h(), &[0]).unwrap();
//! engine.apply_gate(&cnot(), &[0, 1]).unwrap();
//!
//! let probs = engine.probabilities();
//! assert!((probs[0] - 0.5).abs() < 1e-12);
//! assert!((probs[3] - 0.5).abs() < 1e-12);
//!
//! // ⟨Z₀⟩ vanishes on a Bell pair
//! let ez = engine.expectation_value_on(&z(), &[0]).unwrap();
//! assert!(ez.abs() < 1e-12);
//! ```
//!
//! # Kernels
//!
//! All array work goes through [`AmplitudeKernel`]. [`SerialKernel`] runs
//! on the calling thread; [`ParallelKernel`] splits the state into blocks
//! that each own whole groups and hands them to rayon. The kernel is picked
//! from [`EngineConfig::kernel`] when the engine is built.
//!
//! # Measurement
//!
//! [`StatevectorEngine::measure`] draws from an engine-owned `StdRng`
//! (seeded from [`EngineConfig::seed`] when set). Use
//! [`StatevectorEngine::measure_with`] to supply the generator explicitly.

pub mod config;
pub mod engine;
pub mod error;
pub mod kernel;
pub mod plan;

pub use config::{
    DEFAULT_MAX_QUBITS, DEFAULT_PARALLEL_THRESHOLD, EngineConfig, KernelKind, QUBIT_CEILING,
};
pub use engine::{NORM_EPSILON, StatevectorEngine};
pub use error::{EngineError, EngineResult, QubitIndexError};
pub use kernel::{AmplitudeKernel, ParallelKernel, SerialKernel, kernel_for};
pub use plan::{GatePlan, validate_qubits};
