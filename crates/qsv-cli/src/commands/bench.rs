//! Bench command implementation.
//!
//! Runs a layered circuit (Hadamard layer, RZ layer, CNOT ladder) on each
//! requested kernel and reports wall time per layer.

use std::time::{Duration, Instant};

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use qsv_engine::{EngineConfig, KernelKind, StatevectorEngine};
use qsv_gates as gates;

fn run_layers(
    engine: &mut StatevectorEngine,
    depth: usize,
    progress: &ProgressBar,
) -> Result<Duration> {
    let n = engine.num_qubits();
    let h = gates::h();
    let cnot = gates::cnot();

    let start = Instant::now();
    for layer in 0..depth {
        let rz = gates::rz(0.1 * (layer + 1) as f64);
        for q in 0..n {
            engine.apply_gate(&h, &[q])?;
            engine.apply_gate(&rz, &[q])?;
        }
        for q in 1..n {
            engine.apply_gate(&cnot, &[q - 1, q])?;
        }
        progress.inc(1);
    }
    Ok(start.elapsed())
}

/// Execute the bench command.
pub fn execute(qubits: usize, depth: usize, kernel: &str, engine: &EngineConfig) -> Result<()> {
    let kernels = match kernel.to_lowercase().as_str() {
        "both" | "all" => vec![KernelKind::Serial, KernelKind::Parallel],
        other => vec![other.parse::<KernelKind>()?],
    };
    if depth == 0 {
        anyhow::bail!("Depth must be at least 1");
    }

    println!(
        "{} Benchmarking {} qubits, depth {} ({} gates per run)",
        style("→").cyan().bold(),
        qubits,
        depth,
        depth * (3 * qubits).saturating_sub(1)
    );

    let mut timings = Vec::with_capacity(kernels.len());
    for kind in kernels {
        let config = engine
            .clone()
            .with_kernel(kind)
            .with_max_qubits(engine.max_qubits.max(qubits));
        let mut sim = StatevectorEngine::with_config(qubits, config)?;

        let progress = ProgressBar::new(depth as u64);
        progress.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} {msg:>9} [{bar:40.cyan/blue}] {pos}/{len} layers",
            )?
            .progress_chars("#>-"),
        );
        progress.set_message(kind.to_string());

        let elapsed = run_layers(&mut sim, depth, &progress)?;
        progress.finish_and_clear();

        let drift = (sim.norm_sqr() - 1.0).abs();
        debug!("{} kernel norm drift {:.3e}", kind, drift);
        timings.push((kind, elapsed, drift));
    }

    println!("\n{} Results:", style("✓").green().bold());
    for (kind, elapsed, drift) in &timings {
        println!(
            "  {:>9}: {:>10.3} ms total, {:>8.3} ms/layer, norm drift {:.1e}",
            style(kind).cyan(),
            elapsed.as_secs_f64() * 1e3,
            elapsed.as_secs_f64() * 1e3 / depth as f64,
            drift
        );
    }

    if let [(_, serial, _), (_, parallel, _)] = timings.as_slice() {
        let speedup = serial.as_secs_f64() / parallel.as_secs_f64().max(f64::EPSILON);
        println!("\n  Parallel speedup: {}", style(format!("{speedup:.2}x")).yellow());
    }

    Ok(())
}
