//! Device capability introspection.

use serde::{Deserialize, Serialize};

/// What a device can do.
///
/// Host frameworks use this to decide which operations to decompose before
/// handing a program to the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCapabilities {
    /// Name of the device.
    pub name: String,
    /// Number of wires (qubits) available.
    pub num_wires: usize,
    /// Supported operation names.
    pub operations: Vec<String>,
    /// Supported observable names.
    pub observables: Vec<String>,
    /// Maximum number of shots per execution.
    pub max_shots: u32,
    /// Whether this is a simulator (`true`) or hardware (`false`).
    pub is_simulator: bool,
    /// Additional capability flags such as `"statevector"` or
    /// `"mid_circuit_measurement"`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl DeviceCapabilities {
    /// Check if an operation name is supported.
    pub fn supports_operation(&self, name: &str) -> bool {
        self.operations.iter().any(|op| op == name)
    }

    /// Check if an observable name is supported.
    pub fn supports_observable(&self, name: &str) -> bool {
        self.observables.iter().any(|obs| obs == name)
    }

    /// Check if a feature flag is present.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}
