//! Run command implementation.

use std::time::Instant;

use anyhow::Result;
use console::style;
use serde::Serialize;

use qsv_adapter_sim::DEVICE_NAME;
use qsv_engine::EngineConfig;
use qsv_hal::{DeviceRegistry, ExecutionResult};

use super::common::{device_config, preset_operations, print_counts, print_probabilities};

/// JSON report for `--format json`.
#[derive(Debug, Serialize)]
struct RunReport {
    circuit: String,
    qubits: usize,
    kernel: String,
    shots: Option<u32>,
    elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    counts: Option<Vec<(String, u64)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    probabilities: Option<Vec<f64>>,
}

/// Options for one `run` invocation.
#[derive(Debug, Clone)]
pub struct RunOptions<'a> {
    pub circuit: &'a str,
    pub qubits: usize,
    pub shots: u32,
    pub analytic: bool,
    pub seed: Option<u64>,
    pub format: &'a str,
}

/// Execute the run command.
pub fn execute(options: &RunOptions<'_>, engine: &EngineConfig) -> Result<()> {
    let json = match options.format {
        "json" => true,
        "table" => false,
        other => anyhow::bail!("Unknown format: '{other}'. Available: table, json"),
    };

    let operations = preset_operations(options.circuit, options.qubits)?;
    let shots = (!options.analytic).then_some(options.shots);
    let config = device_config(engine, options.qubits, shots, options.seed)?;

    if !json {
        println!(
            "{} Running {} on {} qubits ({}, {} kernel)",
            style("→").cyan().bold(),
            style(options.circuit).green(),
            options.qubits,
            match shots {
                Some(s) => format!("{s} shots"),
                None => "analytic".to_string(),
            },
            style(engine.kernel).yellow()
        );
        println!("  Operations: {}", operations.len());
    }

    let mut registry = DeviceRegistry::new();
    qsv_adapter_sim::register(&mut registry);
    let mut device = registry.create(DEVICE_NAME, config)?;

    let start = Instant::now();
    device.apply(&operations)?;
    let result = device.execute()?;
    let elapsed = start.elapsed();

    let probabilities = match &result {
        ExecutionResult::Statevector(_) => Some(device.probability(&[])?),
        ExecutionResult::Samples { .. } => None,
    };

    if json {
        let report = RunReport {
            circuit: options.circuit.to_string(),
            qubits: options.qubits,
            kernel: engine.kernel.to_string(),
            shots,
            elapsed_ms: elapsed.as_secs_f64() * 1e3,
            counts: result.counts().map(|c| c.sorted()),
            probabilities,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(counts) = result.counts() {
        print_counts(counts);
    }
    if let Some(probabilities) = probabilities {
        print_probabilities(&probabilities, options.qubits);
    }
    println!("\n  Execution time: {}", style(format!("{elapsed:?}")).yellow());

    Ok(())
}
