//! Device trait and configuration.
//!
//! A [`Device`] accepts host operations, executes them and answers
//! measurement queries:
//!
//! ```text
//!   capabilities() ──→ apply() ──→ execute() ──→ expval() / var() / probability()
//!    (sync, &ref)      (record)    (run)         (read, runs first if needed)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::capability::DeviceCapabilities;
use crate::error::HalResult;
use crate::operation::{Observable, Operation};
use crate::result::ExecutionResult;

/// Configuration for a device instance.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Name of the device.
    pub name: String,
    /// Number of wires.
    pub wires: usize,
    /// Shots per execution; `None` means analytic (exact) results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shots: Option<u32>,
    /// Seed for sampling and measurement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Additional device-specific configuration.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DeviceConfig {
    /// Create a new device configuration.
    pub fn new(name: impl Into<String>, wires: usize) -> Self {
        Self {
            name: name.into(),
            wires,
            shots: None,
            seed: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Set the shot count.
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = Some(shots);
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add extra configuration.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl fmt::Debug for DeviceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceConfig")
            .field("name", &self.name)
            .field("wires", &self.wires)
            .field("shots", &self.shots)
            .field("seed", &self.seed)
            .field("extra", &self.extra)
            .finish()
    }
}

/// Trait for devices a host framework can drive.
///
/// # Contract
///
/// - `capabilities()` is synchronous and infallible; implementations cache
///   it at construction.
/// - `apply()` validates every operation before recording any of them.
/// - `execute()` runs everything applied since the last `reset()` from
///   `|0…0⟩`.
/// - Query methods run the program first if it changed since the last
///   execution.
pub trait Device: Send + Sync {
    /// Get the name of this device.
    fn name(&self) -> &str;

    /// Get the capabilities of this device.
    fn capabilities(&self) -> &DeviceCapabilities;

    /// Append operations to the program.
    fn apply(&mut self, operations: &[Operation]) -> HalResult<()>;

    /// Clear the program and return to `|0…0⟩`.
    fn reset(&mut self);

    /// Run the program.
    ///
    /// Returns the statevector in analytic mode, otherwise `shots` samples
    /// and their histogram.
    fn execute(&mut self) -> HalResult<ExecutionResult>;

    /// Expectation value `⟨O⟩`.
    fn expval(&mut self, observable: &Observable) -> HalResult<f64>;

    /// Variance `⟨O²⟩ − ⟨O⟩²`.
    fn var(&mut self, observable: &Observable) -> HalResult<f64>;

    /// Probabilities over `wires`, marginalizing the rest.
    ///
    /// `wires[0]` is the most-significant bit of the returned index. An
    /// empty slice returns the full distribution in engine order, where
    /// wire 0 is the least-significant bit.
    fn probability(&mut self, wires: &[usize]) -> HalResult<Vec<f64>>;
}

/// Trait for creating devices from configuration.
pub trait DeviceFactory: Device + Sized {
    /// Create a device from configuration.
    fn from_config(config: DeviceConfig) -> HalResult<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_config() {
        let config = DeviceConfig::new("qsv.simulator", 4)
            .with_shots(1000)
            .with_seed(7)
            .with_extra("kernel", serde_json::json!("parallel"));

        assert_eq!(config.name, "qsv.simulator");
        assert_eq!(config.wires, 4);
        assert_eq!(config.shots, Some(1000));
        assert_eq!(config.extra.get("kernel"), Some(&serde_json::json!("parallel")));
    }

    #[test]
    fn test_device_config_flattened_json() {
        let config: DeviceConfig = serde_json::from_str(
            r#"{"name": "sim", "wires": 2, "kernel": "serial", "max_qubits": 20}"#,
        )
        .unwrap();
        assert_eq!(config.shots, None);
        assert_eq!(config.extra.len(), 2);
        assert_eq!(config.extra["max_qubits"], serde_json::json!(20));
    }
}
