//! Error types for the demos.

use qsv_circuit::CircuitError;
use qsv_gates::GateError;
use thiserror::Error;

/// Errors raised while building or running a demo.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DemoError {
    /// A demo argument is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Circuit construction or execution failed.
    #[error(transparent)]
    Circuit(#[from] CircuitError),

    /// Gate composition failed.
    #[error(transparent)]
    Gate(#[from] GateError),
}

/// Result type for demo operations.
pub type DemoResult<T> = Result<T, DemoError>;
