//! Property-based checks that every library gate is unitary.

use qsv_gates::{
    GateMatrix, cnot, controlled, crot, crx, cry, crz, cz, dagger, h, i, is_unitary, ising_xx,
    ising_yy, ising_zz, multi_rz, phase, rot, rx, ry, rz, s, sdg, swap, sx, t, tdg,
    tensor_product, toffoli, x, y, z,
};
use proptest::prelude::*;
use std::f64::consts::PI;

const TOL: f64 = 1e-9;

fn angle() -> impl Strategy<Value = f64> {
    -4.0 * PI..4.0 * PI
}

#[test]
fn fixed_gates_are_unitary() {
    let gates: Vec<(&str, GateMatrix)> = vec![
        ("i", i()),
        ("x", x()),
        ("y", y()),
        ("z", z()),
        ("h", h()),
        ("s", s()),
        ("sdg", sdg()),
        ("t", t()),
        ("tdg", tdg()),
        ("sx", sx()),
        ("cnot", cnot()),
        ("cz", cz()),
        ("swap", swap()),
        ("toffoli", toffoli()),
    ];
    for (name, g) in gates {
        assert!(is_unitary(&g, TOL), "{name} is not unitary");
    }
}

#[test]
fn self_inverse_gates() {
    for g in [x(), y(), z(), h(), cnot(), cz(), swap(), toffoli()] {
        assert!(is_unitary(&g, TOL));
        let sq = g.dot(&g);
        assert!(qsv_gates::approx_eq(
            &sq,
            &qsv_gates::identity(g.nrows()),
            TOL
        ));
    }
}

proptest! {
    #[test]
    fn single_angle_rotations_are_unitary(theta in angle()) {
        for g in [rx(theta), ry(theta), rz(theta), phase(theta)] {
            prop_assert!(is_unitary(&g, TOL));
        }
    }

    #[test]
    fn two_qubit_families_are_unitary(theta in angle()) {
        for g in [crx(theta), cry(theta), crz(theta), ising_xx(theta), ising_yy(theta), ising_zz(theta)] {
            prop_assert_eq!(g.dim(), (4, 4));
            prop_assert!(is_unitary(&g, TOL));
        }
    }

    #[test]
    fn euler_rotations_are_unitary(phi in angle(), theta in angle(), omega in angle()) {
        prop_assert!(is_unitary(&rot(phi, theta, omega), TOL));
        prop_assert!(is_unitary(&crot(phi, theta, omega), TOL));
    }

    #[test]
    fn multi_rz_is_unitary(theta in angle(), k in 1usize..=5) {
        let g = multi_rz(theta, k);
        prop_assert_eq!(g.nrows(), 1 << k);
        prop_assert!(is_unitary(&g, TOL));
    }

    #[test]
    fn controlled_preserves_unitarity(theta in angle(), controls in 0usize..=3) {
        let g = controlled(&ry(theta), controls).unwrap();
        prop_assert_eq!(g.nrows(), 2 << controls);
        prop_assert!(is_unitary(&g, TOL));
    }

    #[test]
    fn tensor_product_preserves_unitarity(a in angle(), b in angle()) {
        let g = tensor_product(&[rx(a), h(), rz(b)]).unwrap();
        prop_assert_eq!(g.nrows(), 8);
        prop_assert!(is_unitary(&g, TOL));
    }

    #[test]
    fn rotation_inverse_is_negated_angle(theta in angle()) {
        let fwd = ry(theta);
        let back = ry(-theta);
        prop_assert!(qsv_gates::approx_eq(&dagger(&fwd), &back, TOL));
    }
}
