//! Classifier on top of the quantum kernel.
//!
//! A sample is assigned the class whose training points it resembles most
//! on average under the kernel (a kernel nearest-centroid rule).

use tracing::debug;

use crate::circuits::qml_kernel::{cross_kernel_matrix, kernel_matrix};
use crate::error::{DemoError, DemoResult};
use crate::problems::LabeledData;

/// Classifier fitted to a training set.
#[derive(Debug, Clone)]
pub struct KernelClassifier {
    n_qubits: usize,
    n_layers: usize,
    train: LabeledData,
    train_kernel: Vec<Vec<f64>>,
    classes: usize,
}

/// Accuracy on a labelled set.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Predicted class per sample.
    pub predictions: Vec<usize>,
    /// Fraction of correct predictions.
    pub accuracy: f64,
}

impl KernelClassifier {
    /// Fit on `train`, computing its kernel matrix.
    pub fn fit(train: LabeledData, n_qubits: usize, n_layers: usize) -> DemoResult<Self> {
        if train.is_empty() || train.features.len() != train.labels.len() {
            return Err(DemoError::InvalidArgument(format!(
                "{} samples with {} labels",
                train.features.len(),
                train.labels.len()
            )));
        }
        let classes = train.labels.iter().max().map_or(0, |m| m + 1);
        let train_kernel = kernel_matrix(&train.features, n_qubits, n_layers)?;
        debug!("Fitted kernel classifier on {} samples", train.len());
        Ok(Self {
            n_qubits,
            n_layers,
            train,
            train_kernel,
            classes,
        })
    }

    /// Kernel matrix of the training set.
    pub fn train_kernel(&self) -> &[Vec<f64>] {
        &self.train_kernel
    }

    /// Pick a class from one row of kernel values against the training set.
    fn decide(&self, row: &[f64]) -> usize {
        let mut sums = vec![0.0; self.classes];
        let mut counts = vec![0usize; self.classes];
        for (&k, &label) in row.iter().zip(&self.train.labels) {
            sums[label] += k;
            counts[label] += 1;
        }
        sums.iter()
            .zip(&counts)
            .map(|(s, &c)| if c == 0 { f64::NEG_INFINITY } else { s / c as f64 })
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map_or(0, |(class, _)| class)
    }

    /// Predict a class for every row of `features`.
    pub fn predict(&self, features: &[Vec<f64>]) -> DemoResult<Vec<usize>> {
        let kernel = cross_kernel_matrix(features, &self.train.features, self.n_qubits, self.n_layers)?;
        Ok(kernel.iter().map(|row| self.decide(row)).collect())
    }

    /// Predict `test` and score against its labels.
    pub fn evaluate(&self, test: &LabeledData) -> DemoResult<Evaluation> {
        let predictions = self.predict(&test.features)?;
        let correct = predictions
            .iter()
            .zip(&test.labels)
            .filter(|(p, l)| p == l)
            .count();
        let accuracy = if test.is_empty() {
            0.0
        } else {
            correct as f64 / test.len() as f64
        };
        Ok(Evaluation {
            predictions,
            accuracy,
        })
    }
}
