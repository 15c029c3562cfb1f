//! Gate composition: controlled embedding and Kronecker products.

use crate::error::{GateError, GateResult};
use crate::matrix::{GateMatrix, identity, num_qubits_of};

/// Widest operator the composition helpers will materialize.
///
/// A 12-qubit operator is already `4096 × 4096` dense complex entries.
pub const MAX_GATE_QUBITS: usize = 12;

fn gate_width(matrix: &GateMatrix) -> GateResult<usize> {
    num_qubits_of(matrix).ok_or_else(|| {
        let (rows, cols) = matrix.dim();
        GateError::InvalidMatrix(format!(
            "{rows}x{cols} is not a square power-of-two operator"
        ))
    })
}

fn check_width(requested: usize) -> GateResult<()> {
    if requested > MAX_GATE_QUBITS {
        return Err(GateError::TooManyQubits {
            requested,
            max: MAX_GATE_QUBITS,
        });
    }
    Ok(())
}

/// Embed `gate` as the all-ones block of an identity on
/// `num_controls + m` qubits.
///
/// The control qubits occupy the high bits of the local index, so they are
/// listed first when the result is applied. Any control pattern other than
/// all ones acts as identity. Zero controls returns `gate` unchanged.
pub fn controlled(gate: &GateMatrix, num_controls: usize) -> GateResult<GateMatrix> {
    let width = gate_width(gate)?;
    check_width(width + num_controls)?;
    Ok(controlled_block(gate, num_controls))
}

/// Unchecked form of [`controlled`] for matrices known to be well-formed.
pub(crate) fn controlled_block(gate: &GateMatrix, num_controls: usize) -> GateMatrix {
    let block = gate.nrows();
    let mut result = identity(block << num_controls);
    let start = ((1usize << num_controls) - 1) * block;
    result
        .slice_mut(ndarray::s![start.., start..])
        .assign(gate);
    result
}

/// Kronecker product of `gates` in order.
///
/// The first factor acts on the most-significant local bit, matching the
/// order in which the qubits are listed when the result is applied.
pub fn tensor_product(gates: &[GateMatrix]) -> GateResult<GateMatrix> {
    let (first, rest) = gates.split_first().ok_or(GateError::EmptyProduct)?;

    let mut width = gate_width(first)?;
    for g in rest {
        width += gate_width(g)?;
    }
    check_width(width)?;

    Ok(rest
        .iter()
        .fold(first.clone(), |acc, g| ndarray::linalg::kron(&acc, g)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{cnot, h, i, x, z};
    use crate::matrix::approx_eq;
    use ndarray::Array2;
    use num_complex::Complex64;

    #[test]
    fn test_controlled_x_is_cnot() {
        let cx = controlled(&x(), 1).unwrap();
        assert!(approx_eq(&cx, &cnot(), 0.0));
    }

    #[test]
    fn test_controlled_zero_controls() {
        let g = controlled(&h(), 0).unwrap();
        assert!(approx_eq(&g, &h(), 0.0));
    }

    #[test]
    fn test_controlled_two_qubit_target() {
        // Controlled-CNOT on 3 qubits is a Toffoli
        let ccx = controlled(&cnot(), 1).unwrap();
        let toffoli = controlled(&x(), 2).unwrap();
        assert!(approx_eq(&ccx, &toffoli, 0.0));
    }

    #[test]
    fn test_controlled_rejects_bad_shape() {
        let bad = Array2::<Complex64>::zeros((3, 3));
        assert!(matches!(
            controlled(&bad, 1),
            Err(GateError::InvalidMatrix(_))
        ));
    }

    #[test]
    fn test_controlled_width_limit() {
        let result = controlled(&x(), MAX_GATE_QUBITS);
        assert!(matches!(
            result,
            Err(GateError::TooManyQubits { requested, .. }) if requested == MAX_GATE_QUBITS + 1
        ));
    }

    #[test]
    fn test_tensor_product_order() {
        // Z ⊗ I: the sign depends on the high local bit only
        let zi = tensor_product(&[z(), i()]).unwrap();
        assert_eq!(zi[[1, 1]], Complex64::new(1.0, 0.0));
        assert_eq!(zi[[2, 2]], Complex64::new(-1.0, 0.0));
    }

    #[test]
    fn test_tensor_product_single_and_empty() {
        let single = tensor_product(&[h()]).unwrap();
        assert!(approx_eq(&single, &h(), 0.0));
        assert!(matches!(tensor_product(&[]), Err(GateError::EmptyProduct)));
    }
}
