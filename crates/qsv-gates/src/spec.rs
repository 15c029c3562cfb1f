//! Gate descriptors that may or may not take an angle.

use std::fmt;

use crate::error::{GateError, GateResult};
use crate::matrix::{GateMatrix, num_qubits_of};

/// A gate that is either a fixed matrix or a one-angle family.
#[derive(Clone)]
pub enum GateSpec {
    /// A fixed operator.
    Fixed(GateMatrix),
    /// A family of operators indexed by a single angle.
    Parametric(fn(f64) -> GateMatrix),
}

impl GateSpec {
    /// Produce the matrix for this gate.
    ///
    /// Parametric gates require `angle`; fixed gates reject it.
    pub fn resolve(&self, angle: Option<f64>) -> GateResult<GateMatrix> {
        match (self, angle) {
            (GateSpec::Fixed(m), None) => Ok(m.clone()),
            (GateSpec::Fixed(_), Some(a)) => Err(GateError::UnexpectedParameter(a)),
            (GateSpec::Parametric(f), Some(a)) => Ok(f(a)),
            (GateSpec::Parametric(_), None) => Err(GateError::MissingParameter),
        }
    }

    /// Whether this gate takes an angle.
    pub fn is_parametric(&self) -> bool {
        matches!(self, GateSpec::Parametric(_))
    }

    /// Number of qubits the gate acts on.
    pub fn num_qubits(&self) -> Option<usize> {
        match self {
            GateSpec::Fixed(m) => num_qubits_of(m),
            GateSpec::Parametric(f) => num_qubits_of(&f(0.0)),
        }
    }
}

impl From<GateMatrix> for GateSpec {
    fn from(matrix: GateMatrix) -> Self {
        GateSpec::Fixed(matrix)
    }
}

impl fmt::Debug for GateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateSpec::Fixed(m) => f.debug_tuple("Fixed").field(&m.dim()).finish(),
            GateSpec::Parametric(_) => f.write_str("Parametric"),
        }
    }
}
