//! Simulator device implementation.

use std::time::Instant;

use qsv_circuit::{CircuitError, QuantumCircuit};
use qsv_engine::{EngineConfig, EngineError, validate_qubits};
use qsv_hal::{
    Counts, Device, DeviceCapabilities, DeviceConfig, DeviceFactory, ExecutionResult, HalError,
    HalResult, Observable, Operation, index_to_bitstring,
};
use rand::SeedableRng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use tracing::{debug, instrument};

use crate::observables::{SUPPORTED_OBSERVABLES, observable_matrix};
use crate::operations::{SUPPORTED_OPERATIONS, operation_matrix};

/// Name the simulator registers under.
pub const DEVICE_NAME: &str = "qsv.simulator";

/// Largest shot count accepted per execution.
pub const MAX_SHOTS: u32 = 1_000_000;

fn engine_error(err: EngineError) -> HalError {
    match err {
        EngineError::InvalidQubitIndex(e) => HalError::InvalidWires(e.to_string()),
        EngineError::UnsupportedQubitCount { .. } | EngineError::InvalidConfig(_) => {
            HalError::Configuration(err.to_string())
        }
        other => HalError::Device(other.to_string()),
    }
}

fn circuit_error(err: CircuitError) -> HalError {
    match err {
        CircuitError::Engine(e) => engine_error(e),
        CircuitError::InvalidQubits { .. } | CircuitError::QubitCountMismatch { .. } => {
            HalError::InvalidWires(err.to_string())
        }
        other => HalError::Device(other.to_string()),
    }
}

/// Statevector simulator device.
///
/// Operations are recorded on a [`QuantumCircuit`]; queries run the
/// circuit first whenever the program changed since the last run.
/// Expectation values, variances and probabilities are always exact;
/// `shots` only affects [`Device::execute`].
pub struct SimulatorDevice {
    config: DeviceConfig,
    capabilities: DeviceCapabilities,
    circuit: QuantumCircuit,
    rng: StdRng,
    stale: bool,
}

impl SimulatorDevice {
    /// Create a device with `wires` qubits in analytic mode.
    pub fn new(wires: usize) -> HalResult<Self> {
        Self::from_config(DeviceConfig::new(DEVICE_NAME, wires))
    }

    fn capabilities_for(config: &DeviceConfig) -> DeviceCapabilities {
        DeviceCapabilities {
            name: config.name.clone(),
            num_wires: config.wires,
            operations: SUPPORTED_OPERATIONS.iter().map(|s| s.to_string()).collect(),
            observables: SUPPORTED_OBSERVABLES.iter().map(|s| s.to_string()).collect(),
            max_shots: MAX_SHOTS,
            is_simulator: true,
            features: vec!["statevector".into(), "analytic".into()],
        }
    }

    /// Device configuration.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// The underlying circuit.
    pub fn circuit(&self) -> &QuantumCircuit {
        &self.circuit
    }

    fn ensure_executed(&mut self) -> HalResult<()> {
        if self.stale {
            self.circuit.execute().map_err(circuit_error)?;
            self.stale = false;
        }
        Ok(())
    }

    fn sample(&mut self, shots: u32) -> HalResult<ExecutionResult> {
        if shots == 0 || shots > MAX_SHOTS {
            return Err(HalError::InvalidShots(format!(
                "shots must be between 1 and {MAX_SHOTS}, got {shots}"
            )));
        }
        let probs = self.circuit.probabilities();
        let dist = WeightedIndex::new(&probs)
            .map_err(|e| HalError::Device(format!("cannot sample state: {e}")))?;

        let wires = self.config.wires;
        let mut counts = Counts::new();
        let mut samples = Vec::with_capacity(shots as usize);
        for _ in 0..shots {
            let outcome = dist.sample(&mut self.rng);
            samples.push((0..wires).map(|w| ((outcome >> w) & 1) as u8).collect());
            counts.insert(index_to_bitstring(outcome, wires), 1);
        }
        debug!("Sampled {} shots into {} outcomes", shots, counts.len());
        Ok(ExecutionResult::Samples { samples, counts })
    }
}

impl DeviceFactory for SimulatorDevice {
    /// Build from `config`.
    ///
    /// Engine settings (`max_qubits`, `kernel`, `parallel_threshold`) are
    /// read from the flattened `extra` map; the device seed also seeds the
    /// engine.
    fn from_config(config: DeviceConfig) -> HalResult<Self> {
        let mut engine_config: EngineConfig =
            serde_json::from_value(serde_json::Value::Object(config.extra.clone()))?;
        engine_config.seed = config.seed;

        let circuit = QuantumCircuit::with_config(config.wires, engine_config).map_err(circuit_error)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let capabilities = Self::capabilities_for(&config);

        debug!(
            "Created {} with {} wires ({} kernel)",
            config.name,
            config.wires,
            circuit.engine().kernel_name()
        );

        Ok(Self {
            config,
            capabilities,
            circuit,
            rng,
            stale: true,
        })
    }
}

impl Device for SimulatorDevice {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &DeviceCapabilities {
        &self.capabilities
    }

    fn apply(&mut self, operations: &[Operation]) -> HalResult<()> {
        // Translate and check everything before recording anything
        let mut translated = Vec::with_capacity(operations.len());
        for op in operations {
            let matrix = operation_matrix(op)?;
            validate_qubits(&op.wires, self.config.wires)
                .map_err(|e| HalError::InvalidWires(format!("{}: {e}", op.name)))?;
            translated.push((op, matrix));
        }
        for (op, matrix) in translated {
            self.circuit
                .apply_matrix(op.name.clone(), matrix, &op.wires)
                .map_err(circuit_error)?;
        }
        self.stale = true;
        Ok(())
    }

    fn reset(&mut self) {
        self.circuit.reset();
        self.stale = true;
    }

    #[instrument(skip(self), fields(device = %self.config.name))]
    fn execute(&mut self) -> HalResult<ExecutionResult> {
        let start = Instant::now();
        let statevector = self.circuit.execute().map_err(circuit_error)?;
        self.stale = false;

        let result = match self.config.shots {
            None => ExecutionResult::Statevector(statevector),
            Some(shots) => self.sample(shots)?,
        };
        debug!("Execution completed in {:?}", start.elapsed());
        Ok(result)
    }

    fn expval(&mut self, observable: &Observable) -> HalResult<f64> {
        self.ensure_executed()?;
        let (matrix, wires) = observable_matrix(observable)?;
        self.circuit
            .expectation_value_on(&matrix, &wires)
            .map_err(circuit_error)
    }

    fn var(&mut self, observable: &Observable) -> HalResult<f64> {
        self.ensure_executed()?;
        let (matrix, wires) = observable_matrix(observable)?;
        let mean = self
            .circuit
            .expectation_value_on(&matrix, &wires)
            .map_err(circuit_error)?;
        let squared = matrix.dot(&matrix);
        let mean_sq = self
            .circuit
            .expectation_value_on(&squared, &wires)
            .map_err(circuit_error)?;
        Ok(mean_sq - mean * mean)
    }

    fn probability(&mut self, wires: &[usize]) -> HalResult<Vec<f64>> {
        self.ensure_executed()?;
        let probs = self.circuit.probabilities();
        if wires.is_empty() {
            return Ok(probs);
        }
        validate_qubits(wires, self.config.wires)
            .map_err(|e| HalError::InvalidWires(e.to_string()))?;

        let k = wires.len();
        let mut marginal = vec![0.0; 1 << k];
        for (index, p) in probs.iter().enumerate() {
            let local = wires
                .iter()
                .fold(0usize, |acc, &w| (acc << 1) | ((index >> w) & 1));
            marginal[local] += p;
        }
        Ok(marginal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities() {
        let device = SimulatorDevice::new(3).unwrap();
        let caps = device.capabilities();
        assert_eq!(caps.num_wires, 3);
        assert!(caps.is_simulator);
        assert!(caps.supports_operation("IsingXX"));
        assert!(caps.supports_observable("Projector"));
        assert!(caps.has_feature("statevector"));
    }

    #[test]
    fn test_apply_is_all_or_nothing() {
        let mut device = SimulatorDevice::new(2).unwrap();
        let result = device.apply(&[
            Operation::new("Hadamard", [0]),
            Operation::new("CNOT", [0, 5]),
        ]);
        assert!(matches!(result, Err(HalError::InvalidWires(_))));
        assert!(device.circuit().is_empty());
    }

    #[test]
    fn test_engine_settings_from_extra() {
        let config = DeviceConfig::new(DEVICE_NAME, 18)
            .with_extra("max_qubits", serde_json::json!(20))
            .with_extra("kernel", serde_json::json!("parallel"));
        let device = SimulatorDevice::from_config(config).unwrap();
        assert_eq!(device.circuit().engine().kernel_name(), "parallel");
        assert_eq!(device.circuit().num_qubits(), 18);
    }

    #[test]
    fn test_too_many_wires() {
        let result = SimulatorDevice::new(17);
        assert!(matches!(result, Err(HalError::Configuration(_))));
    }

    #[test]
    fn test_bad_extra_type() {
        let config = DeviceConfig::new(DEVICE_NAME, 2).with_extra("kernel", serde_json::json!(3));
        assert!(matches!(
            SimulatorDevice::from_config(config),
            Err(HalError::Serialization(_))
        ));
    }
}
