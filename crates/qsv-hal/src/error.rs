//! Error types for the HAL crate.

use thiserror::Error;

/// Errors that can occur in device operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// No device registered under the requested name.
    #[error("Device not available: {0}")]
    DeviceUnavailable(String),

    /// Operation name is not supported by the device.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Observable is not supported by the device.
    #[error("Unsupported observable: {0}")]
    UnsupportedObservable(String),

    /// Wrong number of wires, or wires outside the device.
    #[error("Invalid wires: {0}")]
    InvalidWires(String),

    /// Wrong number of parameters for an operation.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Invalid number of shots.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic device error.
    #[error("Device error: {0}")]
    Device(String),
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
