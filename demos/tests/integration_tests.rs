//! Integration tests for the demo suite.
//!
//! These run the demo algorithms end to end on the statevector engine.

use qsv_demos::DemoError;
use qsv_demos::circuits::grover::{grover_circuit, optimal_iterations, success_probability};
use qsv_demos::circuits::qml_kernel::{kernel_matrix, quantum_kernel};
use qsv_demos::circuits::vqe::{hardware_efficient_ansatz, num_parameters};
use qsv_demos::problems::{HeisenbergChain, LabeledData};
use qsv_demos::runners::{KernelClassifier, VqeRunner};
use qsv_engine::{EngineConfig, KernelKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Grover finds the marked state with the theoretical probability.
#[test]
fn test_grover_circuit_scaling() {
    for n_qubits in 3..=7 {
        let iterations = optimal_iterations(n_qubits);
        let marked = (1 << n_qubits) - 2;
        let mut circuit = grover_circuit(n_qubits, marked, iterations).unwrap();
        circuit.execute().unwrap();

        let probs = circuit.probabilities();
        let expected = success_probability(n_qubits, iterations);
        assert!(
            (probs[marked] - expected).abs() < 1e-9,
            "n={n_qubits}: got {}, expected {expected}",
            probs[marked]
        );
        assert!(expected > 0.9);
    }
}

/// Three qubits searching for |101⟩.
#[test]
fn test_grover_three_qubit_target_five() {
    let mut circuit = grover_circuit(3, 5, optimal_iterations(3)).unwrap();
    circuit.execute().unwrap();
    let probs = circuit.probabilities();
    let best = probs
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap();
    assert_eq!(best, 5);
    assert!(probs[5] > 0.94);
}

/// A certain Grover outcome measures the same every time.
#[test]
fn test_grover_measurement_is_marked_state() {
    let mut circuit = grover_circuit(2, 2, 1).unwrap();
    for _ in 0..10 {
        circuit.execute().unwrap();
        assert_eq!(circuit.measure_all().unwrap(), vec![0, 1]);
    }
}

/// Test VQE ansatz parameter counts.
#[test]
fn test_vqe_parameter_counts() {
    for n_qubits in 2..=5 {
        for layers in 1..=3 {
            assert_eq!(num_parameters(n_qubits, layers), 3 * n_qubits * layers);
        }
    }
}

/// Ansatz states agree between kernels.
#[test]
fn test_ansatz_kernels_agree() {
    let params: Vec<f64> = (0..num_parameters(4, 2)).map(|i| 0.37 * i as f64).collect();
    let mut serial = hardware_efficient_ansatz(4, 2, &params, EngineConfig::default()).unwrap();
    let parallel_config = EngineConfig::default()
        .with_kernel(KernelKind::Parallel)
        .with_parallel_threshold(2);
    let mut parallel = hardware_efficient_ansatz(4, 2, &params, parallel_config).unwrap();

    let a = serial.execute().unwrap();
    let b = parallel.execute().unwrap();
    for (x, y) in a.iter().zip(&b) {
        assert!((x - y).norm() < 1e-12);
    }
}

/// Two-spin chain (J = 1, h = 0.5) has ground energy -2 at |00⟩.
#[test]
fn test_vqe_two_spin_ground_state() {
    let chain = HeisenbergChain::new(2, 1.0, 0.5).unwrap();
    let runner = VqeRunner::new(chain).with_layers(2).with_maxiter(3000);
    let initial = vec![0.1; runner.num_parameters()];

    let result = runner.run_with_params(initial).unwrap();
    assert!(result.optimal_energy >= -2.0 - 1e-9);
    assert!(result.optimal_energy < -1.999, "energy {}", result.optimal_energy);
    assert!(result.optimal_energy <= result.initial_energy);
}

/// A random start never beats the ground energy and never gets worse.
#[test]
fn test_vqe_random_start_is_bounded() {
    let chain = HeisenbergChain::new(2, 1.0, 0.5).unwrap();
    let runner = VqeRunner::new(chain).with_maxiter(400).with_seed(7);
    let result = runner.run().unwrap();

    assert!(result.optimal_energy >= -2.0 - 1e-9);
    assert!(result.optimal_energy <= result.initial_energy);
    assert!(result.circuit_evaluations > result.iterations);
    assert_eq!(result.optimal_params.len(), runner.num_parameters());
}

/// The variational energy matches the dense Hamiltonian expectation.
#[test]
fn test_vqe_energy_matches_dense_matrix() {
    let chain = HeisenbergChain::new(3, 0.8, 0.2).unwrap();
    let runner = VqeRunner::new(chain).with_layers(1);
    let params: Vec<f64> = (0..runner.num_parameters()).map(|i| 0.5 - 0.1 * i as f64).collect();

    let mut circuit = hardware_efficient_ansatz(3, 1, &params, EngineConfig::default()).unwrap();
    circuit.execute().unwrap();
    let dense = circuit.expectation_value(&chain.matrix().unwrap()).unwrap();

    assert!((runner.energy(&params).unwrap() - dense).abs() < 1e-10);
}

#[test]
fn test_vqe_rejects_wrong_parameter_count() {
    let chain = HeisenbergChain::new(2, 1.0, 0.0).unwrap();
    let runner = VqeRunner::new(chain);
    assert!(matches!(
        runner.run_with_params(vec![0.0; 3]),
        Err(DemoError::InvalidArgument(_))
    ));
}

/// The kernel matrix is a valid Gram matrix.
#[test]
fn test_quantum_kernel_matrix_properties() {
    let data = LabeledData::two_blobs(5, 3, 0.2, 11).unwrap();
    let kernel = kernel_matrix(&data.features, 3, 2).unwrap();
    let n = kernel.len();
    assert_eq!(n, 10);

    for i in 0..n {
        assert!((kernel[i][i] - 1.0).abs() < 1e-10, "K[{i}][{i}] = {}", kernel[i][i]);
        for j in 0..n {
            assert_eq!(kernel[i][j], kernel[j][i]);
            assert!((-1e-12..=1.0 + 1e-12).contains(&kernel[i][j]));
        }
    }

    // Positive semidefinite: vᵀKv >= 0 for arbitrary v
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let v: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let quad: f64 = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| v[i] * kernel[i][j] * v[j])
            .sum();
        assert!(quad > -1e-9, "vᵀKv = {quad}");
    }
}

/// The kernel is symmetric in its arguments, not only in the matrix fill.
#[test]
fn test_quantum_kernel_swaps_arguments() {
    let a = [0.3, -0.1, 0.25];
    let b = [-0.2, 0.4, 0.05];
    let ab = quantum_kernel(&a, &b, 3, 2).unwrap();
    let ba = quantum_kernel(&b, &a, 3, 2).unwrap();
    assert!((ab - ba).abs() < 1e-12);
    assert!(ab < 1.0);
}

/// Two separated blobs are classified well above chance.
#[test]
fn test_kernel_classifier_accuracy() {
    let train = LabeledData::two_blobs(10, 2, 0.1, 21).unwrap();
    let test = LabeledData::two_blobs(10, 2, 0.1, 22).unwrap();
    let classifier = KernelClassifier::fit(train, 2, 2).unwrap();
    let eval = classifier.evaluate(&test).unwrap();
    assert_eq!(eval.predictions.len(), 20);
    assert!(eval.accuracy >= 0.75, "accuracy {}", eval.accuracy);
}
