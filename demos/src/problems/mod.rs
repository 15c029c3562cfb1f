//! Problem definitions for quantum algorithms.

pub mod dataset;
pub mod heisenberg;

pub use dataset::LabeledData;
pub use heisenberg::HeisenbergChain;
