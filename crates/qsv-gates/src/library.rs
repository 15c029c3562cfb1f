//! Standard gate matrices.
//!
//! Rotations follow the `exp(-iθ·G/2)` convention for a generator `G`
//! with `G² = I`.

use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

use crate::compose::controlled_block;
use crate::matrix::{GateMatrix, IMAG, ONE, ZERO, diagonal, identity, square};

// =============================================================================
// Fixed single-qubit gates
// =============================================================================

/// Identity gate.
pub fn i() -> GateMatrix {
    identity(2)
}

/// Pauli-X (NOT) gate.
pub fn x() -> GateMatrix {
    square([[ZERO, ONE], [ONE, ZERO]])
}

/// Pauli-Y gate.
pub fn y() -> GateMatrix {
    square([[ZERO, -IMAG], [IMAG, ZERO]])
}

/// Pauli-Z gate.
pub fn z() -> GateMatrix {
    square([[ONE, ZERO], [ZERO, -ONE]])
}

/// Hadamard gate.
pub fn h() -> GateMatrix {
    let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
    square([[s, s], [s, -s]])
}

/// S gate (√Z).
pub fn s() -> GateMatrix {
    diagonal(&[ONE, IMAG])
}

/// S-dagger gate.
pub fn sdg() -> GateMatrix {
    diagonal(&[ONE, -IMAG])
}

/// T gate (π/8 gate).
pub fn t() -> GateMatrix {
    diagonal(&[ONE, Complex64::from_polar(1.0, FRAC_PI_4)])
}

/// T-dagger gate.
pub fn tdg() -> GateMatrix {
    diagonal(&[ONE, Complex64::from_polar(1.0, -FRAC_PI_4)])
}

/// √X gate.
pub fn sx() -> GateMatrix {
    let p = Complex64::new(0.5, 0.5);
    let m = Complex64::new(0.5, -0.5);
    square([[p, m], [m, p]])
}

// =============================================================================
// Parameterized single-qubit gates
// =============================================================================

/// Rotation about the X axis.
pub fn rx(theta: f64) -> GateMatrix {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new(0.0, -(theta / 2.0).sin());
    square([[c, s], [s, c]])
}

/// Rotation about the Y axis.
pub fn ry(theta: f64) -> GateMatrix {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new((theta / 2.0).sin(), 0.0);
    square([[c, -s], [s, c]])
}

/// Rotation about the Z axis.
pub fn rz(theta: f64) -> GateMatrix {
    diagonal(&[
        Complex64::from_polar(1.0, -theta / 2.0),
        Complex64::from_polar(1.0, theta / 2.0),
    ])
}

/// Phase shift `diag(1, e^{iφ})`.
pub fn phase(phi: f64) -> GateMatrix {
    diagonal(&[ONE, Complex64::from_polar(1.0, phi)])
}

/// Euler rotation `RZ(ω) · RY(θ) · RZ(φ)`.
pub fn rot(phi: f64, theta: f64, omega: f64) -> GateMatrix {
    rz(omega).dot(&ry(theta)).dot(&rz(phi))
}

// =============================================================================
// Two-qubit gates
// =============================================================================

/// Controlled-NOT, control on the first listed qubit.
pub fn cnot() -> GateMatrix {
    controlled_block(&x(), 1)
}

/// Controlled-Z.
pub fn cz() -> GateMatrix {
    diagonal(&[ONE, ONE, ONE, -ONE])
}

/// SWAP gate.
pub fn swap() -> GateMatrix {
    square([
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ZERO, ONE, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, ZERO, ONE],
    ])
}

/// Controlled RX.
pub fn crx(theta: f64) -> GateMatrix {
    controlled_block(&rx(theta), 1)
}

/// Controlled RY.
pub fn cry(theta: f64) -> GateMatrix {
    controlled_block(&ry(theta), 1)
}

/// Controlled RZ.
pub fn crz(theta: f64) -> GateMatrix {
    controlled_block(&rz(theta), 1)
}

/// Controlled Euler rotation.
pub fn crot(phi: f64, theta: f64, omega: f64) -> GateMatrix {
    controlled_block(&rot(phi, theta, omega), 1)
}

/// `cos(φ/2)·I - i·sin(φ/2)·G` for an involutory generator `G`.
fn involution_exp(generator: &GateMatrix, phi: f64) -> GateMatrix {
    let c = Complex64::new((phi / 2.0).cos(), 0.0);
    let s = Complex64::new(0.0, -(phi / 2.0).sin());
    identity(generator.nrows()).mapv(|v| v * c) + generator.mapv(|v| v * s)
}

/// Ising XX coupling `exp(-iφ X⊗X / 2)`.
pub fn ising_xx(phi: f64) -> GateMatrix {
    involution_exp(&ndarray::linalg::kron(&x(), &x()), phi)
}

/// Ising YY coupling `exp(-iφ Y⊗Y / 2)`.
pub fn ising_yy(phi: f64) -> GateMatrix {
    involution_exp(&ndarray::linalg::kron(&y(), &y()), phi)
}

/// Ising ZZ coupling `exp(-iφ Z⊗Z / 2)`.
pub fn ising_zz(phi: f64) -> GateMatrix {
    multi_rz(phi, 2)
}

// =============================================================================
// Multi-qubit gates
// =============================================================================

/// `exp(-iθ Z^{⊗k} / 2)` on `num_qubits` qubits.
///
/// Diagonal: basis states of even parity pick up `e^{-iθ/2}`, odd parity
/// `e^{iθ/2}`.
pub fn multi_rz(theta: f64, num_qubits: usize) -> GateMatrix {
    let even = Complex64::from_polar(1.0, -theta / 2.0);
    let odd = Complex64::from_polar(1.0, theta / 2.0);
    let entries: Vec<Complex64> = (0..1usize << num_qubits)
        .map(|l| if l.count_ones() % 2 == 0 { even } else { odd })
        .collect();
    diagonal(&entries)
}

/// Toffoli (CCX), controls on the first two listed qubits.
pub fn toffoli() -> GateMatrix {
    controlled_block(&x(), 2)
}
