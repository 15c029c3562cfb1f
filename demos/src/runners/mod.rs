//! Demo runners for executing quantum algorithms.

pub mod kernel_classifier;
pub mod vqe;

pub use kernel_classifier::{Evaluation, KernelClassifier};
pub use vqe::{VqeResult, VqeRunner};
