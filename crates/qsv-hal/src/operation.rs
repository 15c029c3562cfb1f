//! Operations and observables requested by a host framework.

use ndarray::Array2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// A named gate on numeric wires with real parameters.
///
/// Names follow the host's conventions (`"PauliX"`, `"CNOT"`, `"RX"` …).
/// The device decides which names it understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation name.
    pub name: String,
    /// Wires in the order the operation lists them.
    pub wires: Vec<usize>,
    /// Real parameters (angles).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<f64>,
}

impl Operation {
    /// Create a parameterless operation.
    pub fn new(name: impl Into<String>, wires: impl Into<Vec<usize>>) -> Self {
        Self {
            name: name.into(),
            wires: wires.into(),
            params: vec![],
        }
    }

    /// Attach parameters.
    pub fn with_params(mut self, params: impl Into<Vec<f64>>) -> Self {
        self.params = params.into();
        self
    }
}

/// A measurable quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Observable {
    /// Pauli-X on one wire.
    PauliX(usize),
    /// Pauli-Y on one wire.
    PauliY(usize),
    /// Pauli-Z on one wire.
    PauliZ(usize),
    /// Identity on one wire.
    Identity(usize),
    /// Hadamard on one wire.
    Hadamard(usize),
    /// Caller-supplied Hermitian matrix; `wires[0]` is its most-significant bit.
    Hermitian {
        /// The `2^k × 2^k` matrix.
        matrix: Array2<Complex64>,
        /// Wires it acts on.
        wires: Vec<usize>,
    },
    /// Projector onto a computational basis state of `wires`.
    Projector {
        /// One bit per wire, in wire order.
        basis_state: Vec<u8>,
        /// Wires it acts on.
        wires: Vec<usize>,
    },
    /// Product of observables on disjoint wires.
    Tensor(Vec<Observable>),
}

impl Observable {
    /// Host-facing name.
    pub fn name(&self) -> &'static str {
        match self {
            Observable::PauliX(_) => "PauliX",
            Observable::PauliY(_) => "PauliY",
            Observable::PauliZ(_) => "PauliZ",
            Observable::Identity(_) => "Identity",
            Observable::Hadamard(_) => "Hadamard",
            Observable::Hermitian { .. } => "Hermitian",
            Observable::Projector { .. } => "Projector",
            Observable::Tensor(_) => "Tensor",
        }
    }

    /// Wires the observable acts on, factors concatenated in order.
    pub fn wires(&self) -> Vec<usize> {
        match self {
            Observable::PauliX(w)
            | Observable::PauliY(w)
            | Observable::PauliZ(w)
            | Observable::Identity(w)
            | Observable::Hadamard(w) => vec![*w],
            Observable::Hermitian { wires, .. } | Observable::Projector { wires, .. } => {
                wires.clone()
            }
            Observable::Tensor(factors) => factors.iter().flat_map(|f| f.wires()).collect(),
        }
    }

    /// Tensor product of `self` and `other`, flattening nested products.
    pub fn tensor(self, other: Observable) -> Observable {
        let mut factors = match self {
            Observable::Tensor(f) => f,
            single => vec![single],
        };
        match other {
            Observable::Tensor(f) => factors.extend(f),
            single => factors.push(single),
        }
        Observable::Tensor(factors)
    }
}
