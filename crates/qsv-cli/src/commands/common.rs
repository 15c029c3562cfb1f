//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qsv_adapter_sim::DEVICE_NAME;
use qsv_engine::{EngineConfig, KernelKind};
use qsv_hal::{Counts, DeviceConfig, Operation};

/// Preset circuit names accepted by `run`.
pub const PRESETS: &[&str] = &["bell", "ghz", "uniform", "ising"];

/// Load an engine configuration from a YAML file, or the defaults.
pub fn load_engine_config(path: Option<&str>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    if !Path::new(path).exists() {
        anyhow::bail!("Config file not found: {path}");
    }
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read config: {path}"))?;
    let config: EngineConfig = serde_yaml_ng::from_str(&source)
        .with_context(|| format!("Invalid engine config in {path}"))?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid engine config in {path}: {e}"))?;
    Ok(config)
}

/// Parse a kernel name given on the command line.
pub fn parse_kernel(name: &str) -> Result<KernelKind> {
    Ok(name.parse()?)
}

/// Default register width for a preset.
pub fn default_qubits(preset: &str) -> usize {
    match preset {
        "bell" => 2,
        "ising" => 4,
        _ => 3,
    }
}

/// Operations for the named preset circuit on `qubits` wires.
pub fn preset_operations(preset: &str, qubits: usize) -> Result<Vec<Operation>> {
    if qubits == 0 {
        anyhow::bail!("A circuit needs at least one qubit");
    }
    let ops = match preset.to_lowercase().as_str() {
        "bell" => {
            if qubits != 2 {
                anyhow::bail!("The bell circuit uses exactly 2 qubits, got {qubits}");
            }
            vec![Operation::new("Hadamard", [0]), Operation::new("CNOT", [0, 1])]
        }
        "ghz" => std::iter::once(Operation::new("Hadamard", [0]))
            .chain((1..qubits).map(|q| Operation::new("CNOT", [q - 1, q])))
            .collect(),
        "uniform" => (0..qubits).map(|q| Operation::new("Hadamard", [q])).collect(),
        "ising" => (0..qubits)
            .map(|q| Operation::new("RX", [q]).with_params([0.4]))
            .chain((1..qubits).map(|q| Operation::new("IsingZZ", [q - 1, q]).with_params([0.8])))
            .collect(),
        other => {
            anyhow::bail!(
                "Unknown circuit: '{other}'. Available: {}",
                PRESETS.join(", ")
            );
        }
    };
    Ok(ops)
}

/// Device configuration carrying `engine` settings in its extra fields.
pub fn device_config(
    engine: &EngineConfig,
    qubits: usize,
    shots: Option<u32>,
    seed: Option<u64>,
) -> Result<DeviceConfig> {
    let mut config = DeviceConfig::new(DEVICE_NAME, qubits);
    config.shots = shots;
    config.seed = seed.or(engine.seed);

    let serde_json::Value::Object(extra) = serde_json::to_value(engine)? else {
        anyhow::bail!("Engine config did not serialize to an object");
    };
    config.extra = extra;
    config.extra.remove("seed");
    Ok(config)
}

/// Print a histogram, most frequent outcomes first.
pub fn print_counts(counts: &Counts) {
    println!(
        "\n{} Results ({} shots):",
        style("✓").green().bold(),
        counts.total_shots()
    );

    let sorted = counts.sorted();
    let total = counts.total_shots() as f64;

    for (bitstring, count) in sorted.iter().take(16) {
        let prob = *count as f64 / total * 100.0;
        let bar: String = "█".repeat((prob / 2.0).round() as usize);
        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(bitstring).cyan(),
            count,
            prob,
            style(bar).green()
        );
    }

    if sorted.len() > 16 {
        println!("  ... and {} more outcomes", sorted.len() - 16);
    }
}

/// Print the non-negligible entries of an exact distribution.
pub fn print_probabilities(probabilities: &[f64], qubits: usize) {
    println!("\n{} Exact probabilities:", style("✓").green().bold());
    for (index, p) in probabilities.iter().enumerate().filter(|(_, p)| **p > 1e-12) {
        let bar: String = "█".repeat((p * 50.0).round() as usize);
        println!(
            "  {}: {:.6} {}",
            style(qsv_hal::index_to_bitstring(index, qubits)).cyan(),
            p,
            style(bar).green()
        );
    }
}
