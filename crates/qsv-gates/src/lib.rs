//! qsv Gate Library
//!
//! Pure constructors for the unitary matrices consumed by the qsv
//! statevector engine. Nothing in this crate holds state: every function
//! returns a fresh [`GateMatrix`].
//!
//! # Conventions
//!
//! Basis states are little-endian at the register level (qubit 0 is the
//! least-significant bit of a basis index). Inside a `2^k × 2^k` gate
//! matrix the *first* listed qubit is the most-significant bit of the
//! local row/column index. For controlled gates the control qubits are
//! listed first.
//!
//! # Example
//!
//! ```rust
//! use qsv_gates::{controlled, h, is_unitary, tensor_product, x};
//!
//! // Toffoli as a doubly-controlled X
//! let ccx = controlled(&x(), 2).unwrap();
//! assert_eq!(ccx.dim(), (8, 8));
//! assert!(is_unitary(&ccx, 1e-12));
//!
//! // H ⊗ H spans two qubits
//! let hh = tensor_product(&[h(), h()]).unwrap();
//! assert_eq!(hh.dim(), (4, 4));
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `i`, `x`, `y`, `z` | 1 | Identity and Pauli gates |
//! | `h` | 1 | Hadamard gate |
//! | `s`, `sdg`, `t`, `tdg` | 1 | Phase (√Z) and π/8 gates with their adjoints |
//! | `sx` | 1 | √X gate |
//! | `rx`, `ry`, `rz` | 1 | Rotations `exp(-iθσ/2)` |
//! | `phase`, `rot` | 1 | Phase shift and general Euler rotation |
//! | `cnot`, `cz`, `swap` | 2 | Fixed two-qubit gates |
//! | `crx`, `cry`, `crz`, `crot` | 2 | Controlled rotations |
//! | `ising_xx`, `ising_yy`, `ising_zz` | 2 | Ising couplings `exp(-iφ P⊗P/2)` |
//! | `multi_rz` | k | `exp(-iθ Z^{⊗k}/2)` |
//! | `toffoli` | 3 | Doubly-controlled X |

pub mod compose;
pub mod error;
pub mod library;
pub mod matrix;
pub mod spec;

pub use compose::{MAX_GATE_QUBITS, controlled, tensor_product};
pub use error::{GateError, GateResult};
pub use library::{
    cnot, crot, crx, cry, crz, cz, h, i, ising_xx, ising_yy, ising_zz, multi_rz, phase, rot, rx,
    ry, rz, s, sdg, swap, sx, t, tdg, toffoli, x, y, z,
};
pub use matrix::{GateMatrix, approx_eq, dagger, identity, is_unitary, num_qubits_of};
pub use spec::GateSpec;
