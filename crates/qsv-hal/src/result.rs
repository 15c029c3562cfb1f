//! Execution results.

use num_complex::Complex64;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Histogram of measured bitstrings.
///
/// Bitstrings list wire 0 first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    counts: FxHashMap<String, u64>,
}

impl Counts {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` observations of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Observations of `bitstring` (0 if never seen).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of observations.
    pub fn total_shots(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct bitstrings.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(bitstring, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.counts.iter()
    }

    /// Most frequent bitstring; ties go to the lexicographically smallest.
    pub fn most_frequent(&self) -> Option<(&String, u64)> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(k, v)| (k, *v))
    }

    /// Pairs sorted by bitstring.
    pub fn sorted(&self) -> Vec<(String, u64)> {
        let mut pairs: Vec<_> = self.counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
        pairs.sort();
        pairs
    }

    /// Relative frequency of `bitstring`.
    pub fn probability(&self, bitstring: &str) -> f64 {
        let total = self.total_shots();
        if total == 0 {
            return 0.0;
        }
        self.get(bitstring) as f64 / total as f64
    }
}

/// Format basis index `index` as a bitstring with wire 0 first.
pub fn index_to_bitstring(index: usize, num_wires: usize) -> String {
    format!("{:0width$b}", index, width = num_wires)
        .chars()
        .rev()
        .collect()
}

/// Output of one device execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionResult {
    /// Exact final state (analytic mode).
    Statevector(Vec<Complex64>),
    /// Sampled measurement outcomes.
    Samples {
        /// One row per shot, one bit per wire.
        samples: Vec<Vec<u8>>,
        /// Aggregated histogram of `samples`.
        counts: Counts,
    },
}

impl ExecutionResult {
    /// The statevector, if the device ran analytically.
    pub fn statevector(&self) -> Option<&[Complex64]> {
        match self {
            ExecutionResult::Statevector(sv) => Some(sv),
            ExecutionResult::Samples { .. } => None,
        }
    }

    /// The histogram, if the device sampled.
    pub fn counts(&self) -> Option<&Counts> {
        match self {
            ExecutionResult::Samples { counts, .. } => Some(counts),
            ExecutionResult::Statevector(_) => None,
        }
    }

    /// Raw samples, if the device sampled.
    pub fn samples(&self) -> Option<&[Vec<u8>]> {
        match self {
            ExecutionResult::Samples { samples, .. } => Some(samples),
            ExecutionResult::Statevector(_) => None,
        }
    }
}
