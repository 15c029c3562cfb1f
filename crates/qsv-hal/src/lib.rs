//! qsv Device Abstraction Layer
//!
//! The interface a host quantum framework uses to drive a qsv simulator as
//! a pluggable device. Hosts describe work as named [`Operation`]s on
//! numeric wires and ask for [`Observable`] expectation values, variances
//! or probabilities; the device translates those into engine calls.
//!
//! # Overview
//!
//! - [`Device`]: the runtime contract (apply, execute, measurement queries)
//! - [`DeviceCapabilities`]: supported operations, observables and limits
//! - [`DeviceConfig`] and [`DeviceFactory`]: construction from configuration
//! - [`DeviceRegistry`]: name → factory lookup, filled by explicit calls
//! - [`ExecutionResult`] and [`Counts`]: statevector or sampled output
//!
//! # Example
//!
//! ```ignore
//! use qsv_hal::{DeviceConfig, DeviceRegistry, Observable, Operation};
//!
//! let mut registry = DeviceRegistry::new();
//! qsv_adapter_sim::register(&mut registry);
//!
//! let mut device = registry.create("qsv.simulator", DeviceConfig::new("qsv.simulator", 2))?;
//! device.apply(&[
//!     Operation::new("Hadamard", [0]),
//!     Operation::new("CNOT", [0, 1]),
//! ])?;
//! let zz = Observable::PauliZ(0).tensor(Observable::PauliZ(1));
//! assert!((device.expval(&zz)? - 1.0).abs() < 1e-12);
//! ```

pub mod capability;
pub mod device;
pub mod error;
pub mod operation;
pub mod registry;
pub mod result;

pub use capability::DeviceCapabilities;
pub use device::{Device, DeviceConfig, DeviceFactory};
pub use error::{HalError, HalResult};
pub use operation::{Observable, Operation};
pub use registry::DeviceRegistry;
pub use result::{Counts, ExecutionResult, index_to_bitstring};
