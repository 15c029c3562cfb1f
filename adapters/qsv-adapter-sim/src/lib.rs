//! qsv Simulator Device
//!
//! Exposes the qsv statevector engine as a [`qsv_hal::Device`] so a host
//! framework can drive it with named operations and observables.
//!
//! # Features
//!
//! - **Exact Results**: `expval`, `var` and `probability` are computed from
//!   the amplitudes, never estimated from samples
//! - **Sampling**: with `shots` configured, `execute` returns per-shot
//!   bits and a histogram
//! - **Engine Settings**: `max_qubits`, `kernel` and `parallel_threshold`
//!   pass through the device configuration's extra fields
//!
//! # Memory
//!
//! | Wires | Statevector |
//! |-------|-------------|
//! | 10 | 16 KB |
//! | 16 | 1 MB |
//! | 20 | 16 MB |
//! | 25 | 512 MB |
//!
//! # Example
//!
//! ```
//! use qsv_adapter_sim::SimulatorDevice;
//! use qsv_hal::{Device, Observable, Operation};
//!
//! let mut device = SimulatorDevice::new(2)?;
//! device.apply(&[
//!     Operation::new("Hadamard", [0]),
//!     Operation::new("CNOT", [0, 1]),
//! ])?;
//!
//! let zz = Observable::PauliZ(0).tensor(Observable::PauliZ(1));
//! assert!((device.expval(&zz)? - 1.0).abs() < 1e-12);
//! # Ok::<(), qsv_hal::HalError>(())
//! ```

mod device;
pub mod observables;
pub mod operations;

pub use device::{DEVICE_NAME, MAX_SHOTS, SimulatorDevice};

use qsv_hal::DeviceRegistry;

/// Register the simulator under [`DEVICE_NAME`].
pub fn register(registry: &mut DeviceRegistry) {
    registry.register::<SimulatorDevice>(DEVICE_NAME);
}
