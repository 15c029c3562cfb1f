//! Heisenberg spin chain Hamiltonian.
//!
//! ```text
//! H = -J Σᵢ (XᵢXᵢ₊₁ + YᵢYᵢ₊₁ + ZᵢZᵢ₊₁) - h Σᵢ Zᵢ
//! ```

use qsv_circuit::QuantumCircuit;
use qsv_gates::{self as gates, GateMatrix, tensor_product};

use crate::error::{DemoError, DemoResult};

/// One weighted Pauli product of the Hamiltonian.
#[derive(Debug, Clone)]
pub struct PauliTerm {
    /// Weight.
    pub coefficient: f64,
    /// One single-qubit Pauli per entry of `qubits`.
    pub factors: Vec<GateMatrix>,
    /// Qubits the factors act on.
    pub qubits: Vec<usize>,
}

impl PauliTerm {
    /// Local operator, `qubits[0]` as its most-significant bit.
    pub fn operator(&self) -> DemoResult<GateMatrix> {
        Ok(tensor_product(&self.factors)?)
    }
}

/// Open Heisenberg chain with uniform coupling and longitudinal field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeisenbergChain {
    /// Number of spins.
    pub n_qubits: usize,
    /// Coupling strength `J`.
    pub coupling: f64,
    /// Field strength `h`.
    pub field: f64,
}

impl HeisenbergChain {
    /// Create a chain of `n_qubits` spins.
    pub fn new(n_qubits: usize, coupling: f64, field: f64) -> DemoResult<Self> {
        if !(2..=gates::MAX_GATE_QUBITS).contains(&n_qubits) {
            return Err(DemoError::InvalidArgument(format!(
                "a chain needs between 2 and {} spins, got {n_qubits}",
                gates::MAX_GATE_QUBITS
            )));
        }
        Ok(Self {
            n_qubits,
            coupling,
            field,
        })
    }

    /// Pauli terms: XX, YY and ZZ on every bond, then Z on every spin.
    pub fn terms(&self) -> Vec<PauliTerm> {
        let mut terms = Vec::with_capacity(4 * self.n_qubits - 3);
        for i in 0..self.n_qubits - 1 {
            for p in [gates::x(), gates::y(), gates::z()] {
                terms.push(PauliTerm {
                    coefficient: -self.coupling,
                    factors: vec![p.clone(), p],
                    qubits: vec![i, i + 1],
                });
            }
        }
        for i in 0..self.n_qubits {
            terms.push(PauliTerm {
                coefficient: -self.field,
                factors: vec![gates::z()],
                qubits: vec![i],
            });
        }
        terms
    }

    /// Dense `2^n × 2^n` matrix in engine index order (qubit 0 least significant).
    pub fn matrix(&self) -> DemoResult<GateMatrix> {
        let n = self.n_qubits;
        let dim = 1usize << n;
        let mut total = GateMatrix::zeros((dim, dim));
        for term in self.terms() {
            // Kronecker factors run from the most-significant qubit down
            let mut factors = vec![gates::i(); n];
            for (factor, &q) in term.factors.iter().zip(&term.qubits) {
                factors[n - 1 - q] = factor.clone();
            }
            total = total + tensor_product(&factors)? * term.coefficient;
        }
        Ok(total)
    }

    /// Energy `⟨ψ|H|ψ⟩` of the circuit's current state, summed term by term.
    pub fn energy(&self, circuit: &QuantumCircuit) -> DemoResult<f64> {
        let mut energy = 0.0;
        for term in self.terms() {
            energy += term.coefficient * circuit.expectation_value_on(&term.operator()?, &term.qubits)?;
        }
        Ok(energy)
    }
}
