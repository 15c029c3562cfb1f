//! Local matrices for host observables.

use ndarray::Array2;
use num_complex::Complex64;
use qsv_gates::{self as gates, GateMatrix, approx_eq, dagger, num_qubits_of, tensor_product};
use qsv_hal::{HalError, HalResult, Observable};

/// Observable names the simulator accepts.
pub const SUPPORTED_OBSERVABLES: &[&str] = &[
    "PauliX",
    "PauliY",
    "PauliZ",
    "Identity",
    "Hadamard",
    "Hermitian",
    "Projector",
    "Tensor",
];

const HERMITIAN_TOL: f64 = 1e-9;

/// Matrix for `observable` together with the wires it acts on.
///
/// The first wire is the matrix's most-significant local bit. Tensor
/// factors are composed in order, so their wires concatenate.
pub fn observable_matrix(observable: &Observable) -> HalResult<(GateMatrix, Vec<usize>)> {
    let local = match observable {
        Observable::PauliX(_) => gates::x(),
        Observable::PauliY(_) => gates::y(),
        Observable::PauliZ(_) => gates::z(),
        Observable::Identity(_) => gates::i(),
        Observable::Hadamard(_) => gates::h(),
        Observable::Hermitian { matrix, wires } => {
            if num_qubits_of(matrix) != Some(wires.len()) {
                let (rows, cols) = matrix.dim();
                return Err(HalError::InvalidWires(format!(
                    "{rows}x{cols} Hermitian matrix on {} wires",
                    wires.len()
                )));
            }
            if !approx_eq(matrix, &dagger(matrix), HERMITIAN_TOL) {
                return Err(HalError::UnsupportedObservable(
                    "Hermitian matrix is not self-adjoint".into(),
                ));
            }
            matrix.clone()
        }
        Observable::Projector { basis_state, wires } => projector(basis_state, wires)?,
        Observable::Tensor(factors) => {
            if factors.is_empty() {
                return Err(HalError::UnsupportedObservable(
                    "Tensor needs at least one factor".into(),
                ));
            }
            let mut matrices = Vec::with_capacity(factors.len());
            for factor in factors {
                matrices.push(observable_matrix(factor)?.0);
            }
            tensor_product(&matrices).map_err(|e| HalError::InvalidWires(e.to_string()))?
        }
    };
    Ok((local, observable.wires()))
}

fn projector(basis_state: &[u8], wires: &[usize]) -> HalResult<GateMatrix> {
    if basis_state.len() != wires.len() || wires.is_empty() {
        return Err(HalError::InvalidWires(format!(
            "Projector basis state has {} bits for {} wires",
            basis_state.len(),
            wires.len()
        )));
    }
    if wires.len() > gates::MAX_GATE_QUBITS {
        return Err(HalError::InvalidWires(format!(
            "Projector on {} wires exceeds the {}-wire limit",
            wires.len(),
            gates::MAX_GATE_QUBITS
        )));
    }
    let mut index = 0usize;
    for &bit in basis_state {
        if bit > 1 {
            return Err(HalError::InvalidParameters(format!(
                "Projector basis state entries must be 0 or 1, got {bit}"
            )));
        }
        index = (index << 1) | bit as usize;
    }
    let dim = 1usize << wires.len();
    let mut matrix = Array2::<Complex64>::zeros((dim, dim));
    matrix[[index, index]] = Complex64::new(1.0, 0.0);
    Ok(matrix)
}
