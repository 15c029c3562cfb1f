//! Error types for the circuit crate.

use qsv_engine::{EngineError, QubitIndexError};
use qsv_gates::GateError;
use thiserror::Error;

/// Errors that can occur while building or running a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CircuitError {
    /// A gate was recorded with bad qubit indices.
    #[error("Gate '{gate_name}': {source}")]
    InvalidQubits {
        /// Name of the gate.
        gate_name: String,
        /// What was wrong with the indices.
        #[source]
        source: QubitIndexError,
    },

    /// Gate requires a different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Qubits the matrix acts on.
        expected: usize,
        /// Qubits provided.
        got: usize,
    },

    /// Gate construction failed.
    #[error("Gate error: {0}")]
    Gate(#[from] GateError),

    /// The engine rejected an operation.
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Result type for circuit operations.
pub type CircuitResult<T> = Result<T, CircuitError>;
