//! Error types for the gates crate.

use thiserror::Error;

/// Errors produced while building or resolving gate matrices.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GateError {
    /// Matrix is not a square, power-of-two sized operator on at least one qubit.
    #[error("Invalid gate matrix: {0}")]
    InvalidMatrix(String),

    /// `tensor_product` was called without factors.
    #[error("Tensor product needs at least one factor")]
    EmptyProduct,

    /// Composed operator would be too large to materialize.
    #[error("Gate spans {requested} qubits but at most {max} are supported")]
    TooManyQubits {
        /// Qubits the composed gate would act on.
        requested: usize,
        /// Largest supported gate width.
        max: usize,
    },

    /// A parametric gate was resolved without an angle.
    #[error("Parametric gate requires an angle")]
    MissingParameter,

    /// A fixed gate was resolved with an angle.
    #[error("Fixed gate does not take an angle (got {0})")]
    UnexpectedParameter(f64),
}

/// Result type for gate construction.
pub type GateResult<T> = Result<T, GateError>;
