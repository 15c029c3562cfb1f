//! Variational ansatz circuits for VQE.

use qsv_circuit::QuantumCircuit;
use qsv_engine::EngineConfig;

use crate::error::{DemoError, DemoResult};

/// Number of parameters for the hardware-efficient ansatz.
pub fn num_parameters(n_qubits: usize, layers: usize) -> usize {
    3 * n_qubits * layers
}

/// Hardware-efficient ansatz.
///
/// Each layer applies RY·RZ·RY on every qubit, consuming three parameters
/// per qubit in order; all layers except the last are followed by a CNOT
/// ladder `(0,1), (1,2), …`.
pub fn hardware_efficient_ansatz(
    n_qubits: usize,
    layers: usize,
    params: &[f64],
    config: EngineConfig,
) -> DemoResult<QuantumCircuit> {
    let expected = num_parameters(n_qubits, layers);
    if params.len() != expected {
        return Err(DemoError::InvalidArgument(format!(
            "ansatz on {n_qubits} qubits with {layers} layers takes {expected} parameters, got {}",
            params.len()
        )));
    }

    let mut circuit = QuantumCircuit::with_config(n_qubits, config)?;
    let mut angles = params.chunks_exact(3);
    for layer in 0..layers {
        for q in 0..n_qubits {
            if let Some(&[a, b, c]) = angles.next() {
                circuit.ry(a, q)?.rz(b, q)?.ry(c, q)?;
            }
        }
        if layer + 1 < layers {
            for q in 1..n_qubits {
                circuit.cnot(q - 1, q)?;
            }
        }
    }
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_count() {
        let params = vec![0.1; num_parameters(3, 2)];
        let circuit = hardware_efficient_ansatz(3, 2, &params, EngineConfig::default()).unwrap();
        // 2 layers × 3 qubits × 3 rotations + one ladder of 2 CNOTs
        assert_eq!(circuit.len(), 20);
    }

    #[test]
    fn test_zero_parameters_is_ground() {
        let params = vec![0.0; num_parameters(2, 3)];
        let mut circuit = hardware_efficient_ansatz(2, 3, &params, EngineConfig::default()).unwrap();
        circuit.execute().unwrap();
        assert!((circuit.probabilities()[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_wrong_parameter_count() {
        let result = hardware_efficient_ansatz(2, 2, &[0.0; 5], EngineConfig::default());
        assert!(matches!(result, Err(DemoError::InvalidArgument(_))));
    }
}
