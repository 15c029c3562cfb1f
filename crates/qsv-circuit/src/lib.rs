//! qsv Circuit Builder
//!
//! Records an ordered list of `(gate, qubits)` instructions and replays it
//! on a [`StatevectorEngine`](qsv_engine::StatevectorEngine).
//!
//! # Example
//!
//! ```rust
//! use qsv_circuit::QuantumCircuit;
//!
//! let mut circuit = QuantumCircuit::new(3).unwrap();
//! circuit.h(0).unwrap();
//! circuit.cnot(0, 1).unwrap();
//! circuit.cnot(1, 2).unwrap();
//!
//! let state = circuit.execute().unwrap();
//! assert!((state[0].norm_sqr() - 0.5).abs() < 1e-12);
//! assert!((state[7].norm_sqr() - 0.5).abs() < 1e-12);
//! assert_eq!(circuit.depth(), 3);
//! ```

pub mod circuit;
pub mod error;

pub use circuit::{Instruction, QuantumCircuit};
pub use error::{CircuitError, CircuitResult};
