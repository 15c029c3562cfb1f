//! qsv Demo Suite
//!
//! Algorithms driven through [`qsv_circuit::QuantumCircuit`]:
//!
//! - **Grover's Search**: exact multi-controlled oracle and diffusion
//! - **VQE (Variational Quantum Eigensolver)**: Heisenberg chain ground
//!   state with a hardware-efficient ansatz and Nelder-Mead
//! - **Quantum kernel classifier**: fidelity kernel from an angle feature
//!   map and its adjoint
//!
//! ```
//! use qsv_demos::circuits::grover::{grover_circuit, optimal_iterations};
//!
//! let mut circuit = grover_circuit(3, 5, optimal_iterations(3))?;
//! circuit.execute()?;
//! assert!(circuit.probabilities()[5] > 0.9);
//! # Ok::<(), qsv_demos::DemoError>(())
//! ```

pub mod circuits;
pub mod error;
pub mod optimizers;
pub mod problems;
pub mod runners;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

pub use error::{DemoError, DemoResult};

/// Create a progress bar for demo operations.
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
    )
    .map(|s| s.progress_chars("#>-"))
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Install a log subscriber whose level follows `-v` counts.
pub fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_target(false)
        .init();
}

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("!").yellow().bold(), message);
}

/// Print one basis state with its probability and a bar.
pub fn print_probability_bar(index: usize, num_qubits: usize, probability: f64) {
    let bar = "█".repeat((probability * 50.0) as usize);
    println!(
        "  |{:0width$b}⟩: {:.4} {}",
        index,
        probability,
        style(bar).green(),
        width = num_qubits
    );
}
