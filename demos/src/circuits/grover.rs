//! Grover's search algorithm circuit generator.
//!
//! Grover's algorithm finds a marked item in an unstructured database
//! with O(sqrt(N)) queries, compared to O(N) classically. Oracle and
//! diffusion both use an exact multi-controlled Z, so the success
//! probability matches the textbook formula.

use std::f64::consts::PI;

use qsv_circuit::QuantumCircuit;
use qsv_gates as gates;

use crate::error::{DemoError, DemoResult};

/// Generate a Grover search circuit.
///
/// # Arguments
/// * `n_qubits` - Number of qubits (search space size = 2^n)
/// * `marked_state` - The state to find (0 to 2^n - 1), qubit 0 as its lowest bit
/// * `iterations` - Number of Grover iterations (optimal ≈ π/4 * sqrt(2^n))
pub fn grover_circuit(
    n_qubits: usize,
    marked_state: usize,
    iterations: usize,
) -> DemoResult<QuantumCircuit> {
    if n_qubits == 0 || n_qubits > gates::MAX_GATE_QUBITS {
        return Err(DemoError::InvalidArgument(format!(
            "Grover needs between 1 and {} qubits, got {n_qubits}",
            gates::MAX_GATE_QUBITS
        )));
    }
    if marked_state >= 1 << n_qubits {
        return Err(DemoError::InvalidArgument(format!(
            "marked state {marked_state} exceeds {} for {n_qubits} qubits",
            (1usize << n_qubits) - 1
        )));
    }

    let mut circuit = QuantumCircuit::new(n_qubits)?;
    let mcz = gates::controlled(&gates::z(), n_qubits - 1)?;
    let all: Vec<usize> = (0..n_qubits).collect();

    // Uniform superposition
    for q in 0..n_qubits {
        circuit.h(q)?;
    }

    for _ in 0..iterations {
        // Oracle: phase flip on the marked state
        flip_zero_bits(&mut circuit, n_qubits, marked_state)?;
        circuit.apply_matrix("mcz", mcz.clone(), &all)?;
        flip_zero_bits(&mut circuit, n_qubits, marked_state)?;

        // Diffusion: 2|s⟩⟨s| - I
        for q in 0..n_qubits {
            circuit.h(q)?;
            circuit.x(q)?;
        }
        circuit.apply_matrix("mcz", mcz.clone(), &all)?;
        for q in 0..n_qubits {
            circuit.x(q)?;
            circuit.h(q)?;
        }
    }

    Ok(circuit)
}

/// X on every qubit whose bit in `state` is zero.
fn flip_zero_bits(circuit: &mut QuantumCircuit, n_qubits: usize, state: usize) -> DemoResult<()> {
    for q in (0..n_qubits).filter(|q| (state >> q) & 1 == 0) {
        circuit.x(q)?;
    }
    Ok(())
}

/// Calculate the optimal number of Grover iterations.
///
/// For a single marked item in a space of size N = 2^n,
/// the optimal number of iterations is approximately π/4 * sqrt(N).
pub fn optimal_iterations(n_qubits: usize) -> usize {
    let n = (1u64 << n_qubits) as f64;
    ((PI / 4.0 * n.sqrt()).round() as usize).max(1)
}

/// Theoretical probability of measuring the marked state.
pub fn success_probability(n_qubits: usize, iterations: usize) -> f64 {
    let theta = (1.0 / ((1u64 << n_qubits) as f64).sqrt()).asin();
    ((2 * iterations + 1) as f64 * theta).sin().powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimal_iterations() {
        assert_eq!(optimal_iterations(2), 2);
        assert_eq!(optimal_iterations(3), 2);
        assert_eq!(optimal_iterations(4), 3);
        assert_eq!(optimal_iterations(6), 6);
    }

    #[test]
    fn test_two_qubit_search_is_exact() {
        // One iteration finds the marked item with certainty for N = 4
        for marked in 0..4 {
            let mut circuit = grover_circuit(2, marked, 1).unwrap();
            circuit.execute().unwrap();
            assert!((circuit.probabilities()[marked] - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_matches_theory() {
        let iterations = optimal_iterations(4);
        let mut circuit = grover_circuit(4, 11, iterations).unwrap();
        circuit.execute().unwrap();
        let expected = success_probability(4, iterations);
        assert!((circuit.probabilities()[11] - expected).abs() < 1e-10);
    }

    #[test]
    fn test_rejects_bad_marked_state() {
        assert!(matches!(
            grover_circuit(3, 8, 1),
            Err(DemoError::InvalidArgument(_))
        ));
    }
}
