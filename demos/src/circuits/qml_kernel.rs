//! Quantum kernel circuits.
//!
//! A data point `x` is encoded by an angle feature map `U(x)`: each layer
//! applies `RY(π·x[i mod len])` to qubit `i`, chained with CNOTs between
//! neighbours. The kernel of two points is the fidelity
//! `|⟨0|U(x2)† U(x1)|0⟩|²`, read as the probability of |0…0⟩ after running
//! `U(x1)` followed by the adjoint of `U(x2)`.

use std::f64::consts::PI;

use qsv_circuit::QuantumCircuit;
use qsv_gates as gates;

use crate::error::{DemoError, DemoResult};

#[derive(Debug, Clone, Copy)]
enum Step {
    Ry(usize, f64),
    Cnot(usize, usize),
}

fn feature_steps(x: &[f64], n_qubits: usize, n_layers: usize) -> Vec<Step> {
    let mut steps = Vec::with_capacity(n_layers * (2 * n_qubits));
    for _ in 0..n_layers {
        for q in 0..n_qubits {
            steps.push(Step::Ry(q, x[q % x.len()] * PI));
            if q + 1 < n_qubits {
                steps.push(Step::Cnot(q, q + 1));
            }
        }
    }
    steps
}

fn validate(x: &[f64], n_qubits: usize, n_layers: usize) -> DemoResult<()> {
    if x.is_empty() {
        return Err(DemoError::InvalidArgument(
            "data point has no features".into(),
        ));
    }
    if n_qubits == 0 || n_qubits > gates::MAX_GATE_QUBITS {
        return Err(DemoError::InvalidArgument(format!(
            "kernel needs between 1 and {} qubits, got {n_qubits}",
            gates::MAX_GATE_QUBITS
        )));
    }
    if n_layers == 0 {
        return Err(DemoError::InvalidArgument(
            "kernel needs at least one encoding layer".into(),
        ));
    }
    Ok(())
}

/// Record the feature map `U(x)` on `circuit`.
pub fn feature_map(
    circuit: &mut QuantumCircuit,
    x: &[f64],
    n_layers: usize,
) -> DemoResult<()> {
    let n_qubits = circuit.num_qubits();
    validate(x, n_qubits, n_layers)?;
    for step in feature_steps(x, n_qubits, n_layers) {
        match step {
            Step::Ry(q, theta) => circuit.ry(theta, q)?,
            Step::Cnot(c, t) => circuit.cnot(c, t)?,
        };
    }
    Ok(())
}

/// Record the adjoint `U(x)†`: the feature map reversed with negated angles.
pub fn feature_map_adjoint(
    circuit: &mut QuantumCircuit,
    x: &[f64],
    n_layers: usize,
) -> DemoResult<()> {
    let n_qubits = circuit.num_qubits();
    validate(x, n_qubits, n_layers)?;
    for step in feature_steps(x, n_qubits, n_layers).into_iter().rev() {
        match step {
            Step::Ry(q, theta) => circuit.ry(-theta, q)?,
            Step::Cnot(c, t) => circuit.cnot(c, t)?,
        };
    }
    Ok(())
}

/// Overlap circuit `U(x2)† U(x1)` on `n_qubits` qubits.
pub fn kernel_circuit(
    x1: &[f64],
    x2: &[f64],
    n_qubits: usize,
    n_layers: usize,
) -> DemoResult<QuantumCircuit> {
    validate(x1, n_qubits, n_layers)?;
    validate(x2, n_qubits, n_layers)?;
    let mut circuit = QuantumCircuit::new(n_qubits)?;
    feature_map(&mut circuit, x1, n_layers)?;
    feature_map_adjoint(&mut circuit, x2, n_layers)?;
    Ok(circuit)
}

/// Kernel value of two data points, in `[0, 1]`.
pub fn quantum_kernel(x1: &[f64], x2: &[f64], n_qubits: usize, n_layers: usize) -> DemoResult<f64> {
    let mut circuit = kernel_circuit(x1, x2, n_qubits, n_layers)?;
    circuit.execute()?;
    Ok(circuit.probabilities()[0])
}

/// Symmetric kernel (Gram) matrix of `data`.
///
/// Only the upper triangle (diagonal included) is simulated.
pub fn kernel_matrix(data: &[Vec<f64>], n_qubits: usize, n_layers: usize) -> DemoResult<Vec<Vec<f64>>> {
    let n = data.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i..n {
            let value = quantum_kernel(&data[i], &data[j], n_qubits, n_layers)?;
            matrix[i][j] = value;
            matrix[j][i] = value;
        }
    }
    Ok(matrix)
}

/// Kernel values between every row of `rows` and every row of `columns`.
pub fn cross_kernel_matrix(
    rows: &[Vec<f64>],
    columns: &[Vec<f64>],
    n_qubits: usize,
    n_layers: usize,
) -> DemoResult<Vec<Vec<f64>>> {
    rows.iter()
        .map(|x| {
            columns
                .iter()
                .map(|y| quantum_kernel(x, y, n_qubits, n_layers))
                .collect()
        })
        .collect()
}
