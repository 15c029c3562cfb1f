//! Tests for the simulator device through the HAL traits.

use ndarray::array;
use num_complex::Complex64;
use proptest::prelude::*;
use qsv_adapter_sim::{DEVICE_NAME, SimulatorDevice, register};
use qsv_hal::{
    Device, DeviceConfig, DeviceFactory, DeviceRegistry, ExecutionResult, HalError, Observable,
    Operation,
};

fn bell() -> Vec<Operation> {
    vec![Operation::new("Hadamard", [0]), Operation::new("CNOT", [0, 1])]
}

fn c(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

#[test]
fn test_bell_expectations() {
    let mut device = SimulatorDevice::new(2).unwrap();
    device.apply(&bell()).unwrap();

    let zz = Observable::PauliZ(0).tensor(Observable::PauliZ(1));
    assert!((device.expval(&zz).unwrap() - 1.0).abs() < 1e-12);
    assert!(device.expval(&Observable::PauliZ(0)).unwrap().abs() < 1e-12);
    assert!((device.var(&Observable::PauliZ(1)).unwrap() - 1.0).abs() < 1e-12);
    assert!(device.var(&zz).unwrap().abs() < 1e-12);
}

#[test]
fn test_variance_of_x_on_plus() {
    let mut device = SimulatorDevice::new(1).unwrap();
    device.apply(&[Operation::new("Hadamard", [0])]).unwrap();
    assert!((device.expval(&Observable::PauliX(0)).unwrap() - 1.0).abs() < 1e-12);
    assert!(device.var(&Observable::PauliX(0)).unwrap().abs() < 1e-12);
    assert!((device.var(&Observable::PauliZ(0)).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn test_hermitian_and_projector() {
    let mut device = SimulatorDevice::new(2).unwrap();
    device.apply(&[Operation::new("PauliX", [1])]).unwrap();

    let diag = Observable::Hermitian {
        matrix: array![[c(2.0), c(0.0)], [c(0.0), c(-3.0)]],
        wires: vec![1],
    };
    assert!((device.expval(&diag).unwrap() + 3.0).abs() < 1e-12);

    // wire 1 set, wire 0 clear
    let proj = Observable::Projector {
        basis_state: vec![1, 0],
        wires: vec![1, 0],
    };
    assert!((device.expval(&proj).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn test_marginal_probabilities() {
    let mut device = SimulatorDevice::new(3).unwrap();
    device
        .apply(&[Operation::new("PauliX", [2]), Operation::new("Hadamard", [0])])
        .unwrap();

    let p = device.probability(&[2, 1]).unwrap();
    assert_eq!(p.len(), 4);
    assert!((p[0b10] - 1.0).abs() < 1e-12);

    let p = device.probability(&[0]).unwrap();
    assert!((p[0] - 0.5).abs() < 1e-12);
    assert!((p[1] - 0.5).abs() < 1e-12);

    let full = device.probability(&[]).unwrap();
    assert_eq!(full.len(), 8);
    assert!((full[0b100] - 0.5).abs() < 1e-12);
    assert!((full[0b101] - 0.5).abs() < 1e-12);
}

#[test]
fn test_probability_rejects_bad_wires() {
    let mut device = SimulatorDevice::new(2).unwrap();
    assert!(matches!(
        device.probability(&[0, 0]),
        Err(HalError::InvalidWires(_))
    ));
    assert!(matches!(
        device.probability(&[2]),
        Err(HalError::InvalidWires(_))
    ));
}

#[test]
fn test_analytic_execute_returns_statevector() {
    let mut device = SimulatorDevice::new(2).unwrap();
    device.apply(&bell()).unwrap();
    let result = device.execute().unwrap();
    let sv = result.statevector().unwrap();
    let amp = std::f64::consts::FRAC_1_SQRT_2;
    assert!((sv[0].re - amp).abs() < 1e-12);
    assert!((sv[3].re - amp).abs() < 1e-12);
    assert!(result.counts().is_none());
}

#[test]
fn test_sampled_execute() {
    let config = DeviceConfig::new(DEVICE_NAME, 2).with_shots(500).with_seed(42);
    let mut device = SimulatorDevice::from_config(config).unwrap();
    device.apply(&bell()).unwrap();

    match device.execute().unwrap() {
        ExecutionResult::Samples { samples, counts } => {
            assert_eq!(samples.len(), 500);
            assert_eq!(counts.total_shots(), 500);
            assert_eq!(counts.get("00") + counts.get("11"), 500);
            assert!(counts.get("00") > 150);
            assert!(counts.get("11") > 150);
            assert!(samples.iter().all(|s| s.len() == 2 && s[0] == s[1]));
        }
        other => panic!("expected samples, got {other:?}"),
    }
}

#[test]
fn test_sampled_bit_order() {
    let config = DeviceConfig::new(DEVICE_NAME, 3).with_shots(10);
    let mut device = SimulatorDevice::from_config(config).unwrap();
    device.apply(&[Operation::new("PauliX", [0])]).unwrap();

    let result = device.execute().unwrap();
    assert_eq!(result.counts().unwrap().get("100"), 10);
    assert!(result.samples().unwrap().iter().all(|s| s == &[1, 0, 0]));
}

#[test]
fn test_seeded_sampling_is_reproducible() {
    let run = || {
        let config = DeviceConfig::new(DEVICE_NAME, 3).with_shots(64).with_seed(7);
        let mut device = SimulatorDevice::from_config(config).unwrap();
        device
            .apply(&[
                Operation::new("Hadamard", [0]),
                Operation::new("Hadamard", [1]),
                Operation::new("RY", [2]).with_params([0.9]),
            ])
            .unwrap();
        device.execute().unwrap().samples().unwrap().to_vec()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_invalid_shots() {
    let config = DeviceConfig::new(DEVICE_NAME, 1).with_shots(0);
    let mut device = SimulatorDevice::from_config(config).unwrap();
    assert!(matches!(device.execute(), Err(HalError::InvalidShots(_))));
}

#[test]
fn test_unknown_operation_records_nothing() {
    let mut device = SimulatorDevice::new(2).unwrap();
    let result = device.apply(&[
        Operation::new("Hadamard", [0]),
        Operation::new("QFT", [0, 1]),
    ]);
    assert!(matches!(result, Err(HalError::UnsupportedOperation(_))));
    assert!(device.circuit().is_empty());
    assert!((device.probability(&[]).unwrap()[0] - 1.0).abs() < 1e-12);
}

#[test]
fn test_reset_returns_to_ground() {
    let mut device = SimulatorDevice::new(2).unwrap();
    device.apply(&bell()).unwrap();
    device.execute().unwrap();
    device.reset();
    assert!((device.expval(&Observable::PauliZ(0)).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn test_queries_see_later_operations() {
    let mut device = SimulatorDevice::new(1).unwrap();
    assert!((device.expval(&Observable::PauliZ(0)).unwrap() - 1.0).abs() < 1e-12);
    device.apply(&[Operation::new("PauliX", [0])]).unwrap();
    assert!((device.expval(&Observable::PauliZ(0)).unwrap() + 1.0).abs() < 1e-12);
}

#[test]
fn test_registry_create() {
    let mut registry = DeviceRegistry::new();
    register(&mut registry);
    assert!(registry.has_device(DEVICE_NAME));

    let mut device = registry
        .create(DEVICE_NAME, DeviceConfig::new(DEVICE_NAME, 2))
        .unwrap();
    assert_eq!(device.name(), DEVICE_NAME);
    device.apply(&bell()).unwrap();
    let p = device.probability(&[0, 1]).unwrap();
    assert!((p[0] - 0.5).abs() < 1e-12);
    assert!((p[3] - 0.5).abs() < 1e-12);
}

proptest! {
    #[test]
    fn marginals_sum_to_one(angles in prop::collection::vec(-3.2f64..3.2, 4), w0 in 0usize..4, w1 in 0usize..4) {
        prop_assume!(w0 != w1);
        let mut device = SimulatorDevice::new(4).unwrap();
        let mut ops: Vec<Operation> = angles
            .iter()
            .enumerate()
            .map(|(w, &theta)| Operation::new("RY", [w]).with_params([theta]))
            .collect();
        ops.push(Operation::new("IsingXX", [0, 3]).with_params([0.4]));
        device.apply(&ops).unwrap();

        let total: f64 = device.probability(&[w0, w1]).unwrap().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-10);

        let var = device.var(&Observable::PauliZ(w0)).unwrap();
        let mean = device.expval(&Observable::PauliZ(w0)).unwrap();
        prop_assert!((var - (1.0 - mean * mean)).abs() < 1e-10);
    }
}
