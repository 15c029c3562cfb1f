//! Error types for the engine crate.

use thiserror::Error;

/// Why a list of qubit indices was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QubitIndexError {
    /// Index is not in `0..num_qubits`.
    #[error("qubit {qubit} is out of range for a {num_qubits}-qubit register")]
    OutOfRange {
        /// The offending index.
        qubit: usize,
        /// Register width.
        num_qubits: usize,
    },

    /// The same index appears more than once in one call.
    #[error("qubit {qubit} is listed more than once")]
    Duplicate {
        /// The repeated index.
        qubit: usize,
    },
}

/// Errors produced by the statevector engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Requested register width is outside the supported range.
    #[error("Unsupported qubit count {requested}: must be between 1 and {max}")]
    UnsupportedQubitCount {
        /// Width that was asked for.
        requested: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A qubit index is out of range or repeated.
    #[error("Invalid qubit index: {0}")]
    InvalidQubitIndex(#[from] QubitIndexError),

    /// Matrix shape does not match the qubit list or the state dimension.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Renormalization after a measurement found no surviving amplitude.
    ///
    /// The state has been reset to `|0…0⟩`. This indicates that a
    /// non-unitary operator was applied earlier.
    #[error(
        "State consistency fault: measuring qubit {qubit} as {outcome} left norm {norm:e}; state was reset"
    )]
    StateConsistencyFault {
        /// Qubit being measured.
        qubit: usize,
        /// Outcome that was drawn.
        outcome: u8,
        /// Norm of the surviving amplitudes.
        norm: f64,
    },

    /// Engine configuration is invalid.
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
