//! Synthetic labelled data for the kernel classifier.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{DemoError, DemoResult};

/// Feature vectors with a class label each.
#[derive(Debug, Clone, Default)]
pub struct LabeledData {
    /// One row per sample.
    pub features: Vec<Vec<f64>>,
    /// Class of each row, `0` or `1`.
    pub labels: Vec<usize>,
}

impl LabeledData {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Two blobs centred at `-0.35` and `+0.35` in every feature.
    ///
    /// Each coordinate gets uniform noise in `[-spread, spread]`. Class 0
    /// rows come first.
    pub fn two_blobs(per_class: usize, n_features: usize, spread: f64, seed: u64) -> DemoResult<Self> {
        if per_class == 0 || n_features == 0 {
            return Err(DemoError::InvalidArgument(
                "dataset needs at least one sample and one feature".into(),
            ));
        }
        if !(0.0..0.35).contains(&spread) {
            return Err(DemoError::InvalidArgument(format!(
                "spread must be in [0, 0.35), got {spread}"
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut data = Self::default();
        for (label, centre) in [(0usize, -0.35), (1, 0.35)] {
            for _ in 0..per_class {
                let row = (0..n_features)
                    .map(|_| centre + rng.gen_range(-spread..=spread))
                    .collect();
                data.features.push(row);
                data.labels.push(label);
            }
        }
        Ok(data)
    }
}
