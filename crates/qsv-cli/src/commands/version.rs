//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - statevector quantum simulation",
        style("qsv").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qsv-gates        Gate matrix library");
    println!("  qsv-engine       Statevector engine and kernels");
    println!("  qsv-circuit      Circuit recording and replay");
    println!("  qsv-hal          Device abstraction layer");
    println!("  qsv-adapter-sim  Simulator device");
    println!("  qsv-cli          Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
