//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default register width limit (65 536 amplitudes).
pub const DEFAULT_MAX_QUBITS: usize = 16;

/// Largest `max_qubits` a configuration may request.
///
/// At 30 qubits the statevector alone occupies 16 GiB.
pub const QUBIT_CEILING: usize = 30;

/// State dimension at which the parallel kernel starts splitting work.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 14;

/// Which amplitude kernel an engine uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelKind {
    /// Single-threaded loops.
    #[default]
    Serial,
    /// Rayon data parallelism over disjoint bit groups.
    Parallel,
}

impl std::fmt::Display for KernelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelKind::Serial => write!(f, "serial"),
            KernelKind::Parallel => write!(f, "parallel"),
        }
    }
}

impl std::str::FromStr for KernelKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "serial" => Ok(KernelKind::Serial),
            "parallel" => Ok(KernelKind::Parallel),
            other => Err(EngineError::InvalidConfig(format!(
                "unknown kernel '{other}' (expected 'serial' or 'parallel')"
            ))),
        }
    }
}

/// Settings fixed for the lifetime of an engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Largest register the engine will allocate.
    pub max_qubits: usize,
    /// Amplitude kernel.
    pub kernel: KernelKind,
    /// Minimum state dimension before the parallel kernel splits work.
    pub parallel_threshold: usize,
    /// Seed for the engine-owned measurement RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
            kernel: KernelKind::Serial,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Set the kernel.
    pub fn with_kernel(mut self, kernel: KernelKind) -> Self {
        self.kernel = kernel;
        self
    }

    /// Set the register width limit.
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Set the parallel split threshold.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Seed the measurement RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_qubits == 0 || self.max_qubits > QUBIT_CEILING {
            return Err(EngineError::InvalidConfig(format!(
                "max_qubits must be between 1 and {QUBIT_CEILING}, got {}",
                self.max_qubits
            )));
        }
        if self.parallel_threshold == 0 {
            return Err(EngineError::InvalidConfig(
                "parallel_threshold must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.max_qubits, 16);
        assert_eq!(config.kernel, KernelKind::Serial);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ceiling_enforced() {
        assert!(EngineConfig::default().with_max_qubits(30).validate().is_ok());
        assert!(matches!(
            EngineConfig::default().with_max_qubits(31).validate(),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(EngineConfig::default().with_max_qubits(0).validate().is_err());
        assert!(
            EngineConfig::default()
                .with_parallel_threshold(0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"kernel": "parallel", "seed": 7}"#).unwrap();
        assert_eq!(config.kernel, KernelKind::Parallel);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_qubits, DEFAULT_MAX_QUBITS);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_kernel_kind_parse() {
        assert_eq!("Parallel".parse::<KernelKind>().unwrap(), KernelKind::Parallel);
        assert_eq!("serial".parse::<KernelKind>().unwrap(), KernelKind::Serial);
        assert!("gpu".parse::<KernelKind>().is_err());
        assert_eq!(KernelKind::Parallel.to_string(), "parallel");
    }
}
