//! Quantum circuit generators for demos.

pub mod grover;
pub mod qml_kernel;
pub mod vqe;

pub use grover::{grover_circuit, optimal_iterations, success_probability};
pub use qml_kernel::{kernel_circuit, kernel_matrix, quantum_kernel};
pub use vqe::{hardware_efficient_ansatz, num_parameters};
