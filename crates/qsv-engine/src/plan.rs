//! Index layout for applying a `k`-qubit operator to an `n`-qubit state.
//!
//! The `2^n` basis indices split into `2^(n-k)` groups that agree on every
//! bit outside the target set. A group is addressed by its *base* (all
//! target bits cleared) plus one of `2^k` precomputed *offsets*. Offset `l`
//! sets target bit `targets[j]` when bit `k-1-j` of `l` is set, so the first
//! listed qubit is the most-significant bit of the local index.

use crate::error::{EngineResult, QubitIndexError};

/// Validated target layout for one gate or observable application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatePlan {
    targets: Vec<usize>,
    sorted: Vec<usize>,
    offsets: Vec<usize>,
}

impl GatePlan {
    /// Validate `qubits` against a register of `num_qubits` and build the
    /// offset table.
    pub fn new(qubits: &[usize], num_qubits: usize) -> EngineResult<Self> {
        validate_qubits(qubits, num_qubits)?;

        let k = qubits.len();
        let offsets = (0..1usize << k)
            .map(|local| {
                qubits.iter().enumerate().fold(0usize, |acc, (j, &q)| {
                    if (local >> (k - 1 - j)) & 1 == 1 {
                        acc | (1 << q)
                    } else {
                        acc
                    }
                })
            })
            .collect();

        let mut sorted = qubits.to_vec();
        sorted.sort_unstable();

        Ok(Self {
            targets: qubits.to_vec(),
            sorted,
            offsets,
        })
    }

    /// Target qubits in the order they were listed.
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// Number of target qubits.
    pub fn width(&self) -> usize {
        self.targets.len()
    }

    /// Offsets of the `2^k` members of a group relative to its base.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Base index of group `g`: `g` with a zero bit spliced in at every
    /// target position, lowest position first.
    #[inline]
    pub fn group_base(&self, g: usize) -> usize {
        self.sorted.iter().fold(g, |acc, &t| {
            let low = acc & ((1 << t) - 1);
            ((acc >> t) << (t + 1)) | low
        })
    }

    /// Length of the smallest aligned block that contains whole groups.
    ///
    /// Every group lies inside one block of `2^(max_target + 1)` indices.
    pub fn span(&self) -> usize {
        self.sorted.last().map_or(1, |&t| 1 << (t + 1))
    }
}

/// Check that every index is in range and none repeats.
pub fn validate_qubits(qubits: &[usize], num_qubits: usize) -> Result<(), QubitIndexError> {
    for (i, &qubit) in qubits.iter().enumerate() {
        if qubit >= num_qubits {
            return Err(QubitIndexError::OutOfRange { qubit, num_qubits });
        }
        if qubits[..i].contains(&qubit) {
            return Err(QubitIndexError::Duplicate { qubit });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_offsets_follow_listed_order() {
        // First listed qubit is the local MSB
        let plan = GatePlan::new(&[0, 2], 3).unwrap();
        assert_eq!(plan.offsets(), &[0b000, 0b100, 0b001, 0b101]);

        let plan = GatePlan::new(&[2, 0], 3).unwrap();
        assert_eq!(plan.offsets(), &[0b000, 0b001, 0b100, 0b101]);
    }

    #[test]
    fn test_group_bases_cover_state() {
        let plan = GatePlan::new(&[3, 1], 5).unwrap();
        let groups = (1usize << 5) >> plan.width();
        let mut hit = vec![0u8; 32];
        for g in 0..groups {
            let base = plan.group_base(g);
            assert_eq!(base & 0b01010, 0);
            for &off in plan.offsets() {
                hit[base + off] += 1;
            }
        }
        assert!(hit.iter().all(|&c| c == 1));
    }

    #[test]
    fn test_span() {
        assert_eq!(GatePlan::new(&[0], 4).unwrap().span(), 2);
        assert_eq!(GatePlan::new(&[1, 3], 4).unwrap().span(), 16);
    }

    #[test]
    fn test_rejects_bad_indices() {
        assert!(matches!(
            GatePlan::new(&[0, 3], 3),
            Err(EngineError::InvalidQubitIndex(QubitIndexError::OutOfRange {
                qubit: 3,
                num_qubits: 3
            }))
        ));
        assert!(matches!(
            GatePlan::new(&[1, 1], 3),
            Err(EngineError::InvalidQubitIndex(QubitIndexError::Duplicate { qubit: 1 }))
        ));
    }
}
