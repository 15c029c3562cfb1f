//! Dense gate matrices and the shape checks shared by every consumer.

use ndarray::Array2;
use num_complex::Complex64;

/// A dense `2^k × 2^k` complex operator.
pub type GateMatrix = Array2<Complex64>;

pub(crate) const ZERO: Complex64 = Complex64::new(0.0, 0.0);
pub(crate) const ONE: Complex64 = Complex64::new(1.0, 0.0);
pub(crate) const IMAG: Complex64 = Complex64::new(0.0, 1.0);

/// Build a square matrix from literal rows.
pub(crate) fn square<const N: usize>(rows: [[Complex64; N]; N]) -> GateMatrix {
    Array2::from_shape_fn((N, N), |(r, c)| rows[r][c])
}

/// Build a diagonal matrix.
pub(crate) fn diagonal(entries: &[Complex64]) -> GateMatrix {
    let n = entries.len();
    Array2::from_shape_fn((n, n), |(r, c)| if r == c { entries[r] } else { ZERO })
}

/// Identity operator of the given dimension.
pub fn identity(dim: usize) -> GateMatrix {
    Array2::eye(dim)
}

/// Number of qubits a matrix acts on.
///
/// Returns `None` unless the matrix is square with a power-of-two dimension
/// of at least 2.
pub fn num_qubits_of(matrix: &GateMatrix) -> Option<usize> {
    let (rows, cols) = matrix.dim();
    if rows != cols || rows < 2 || !rows.is_power_of_two() {
        return None;
    }
    Some(rows.trailing_zeros() as usize)
}

/// Conjugate transpose.
pub fn dagger(matrix: &GateMatrix) -> GateMatrix {
    matrix.t().mapv(|z| z.conj())
}

/// Elementwise comparison within `tol`.
pub fn approx_eq(a: &GateMatrix, b: &GateMatrix, tol: f64) -> bool {
    a.dim() == b.dim() && a.iter().zip(b.iter()).all(|(p, q)| (p - q).norm() <= tol)
}

/// Check `U† · U == I` elementwise within `tol`.
pub fn is_unitary(matrix: &GateMatrix, tol: f64) -> bool {
    if num_qubits_of(matrix).is_none() {
        return false;
    }
    let product = dagger(matrix).dot(matrix);
    approx_eq(&product, &identity(matrix.nrows()), tol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_qubits_of() {
        assert_eq!(num_qubits_of(&identity(2)), Some(1));
        assert_eq!(num_qubits_of(&identity(8)), Some(3));
        assert_eq!(num_qubits_of(&identity(1)), None);
        assert_eq!(num_qubits_of(&identity(3)), None);
        assert_eq!(num_qubits_of(&Array2::zeros((2, 4))), None);
    }

    #[test]
    fn test_dagger_conjugates() {
        let m = square([[ONE, IMAG], [ZERO, ONE]]);
        let d = dagger(&m);
        assert_eq!(d[[1, 0]], -IMAG);
        assert_eq!(d[[0, 1]], ZERO);
    }

    #[test]
    fn test_non_unitary_detected() {
        let m = square([[ONE, ONE], [ZERO, ONE]]);
        assert!(!is_unitary(&m, 1e-9));
        assert!(is_unitary(&identity(4), 1e-12));
    }
}
