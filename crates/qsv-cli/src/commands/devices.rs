//! Devices command implementation.

use anyhow::Result;
use console::style;

use qsv_hal::{DeviceConfig, DeviceRegistry};

/// Execute the devices command.
pub fn execute() -> Result<()> {
    println!("{} Available devices:\n", style("qsv").cyan().bold());

    let mut registry = DeviceRegistry::new();
    qsv_adapter_sim::register(&mut registry);

    for name in registry.available_devices() {
        let device = registry.create(&name, DeviceConfig::new(&name, 1))?;
        let caps = device.capabilities();

        println!(
            "  {} {} {}",
            style("●").green(),
            style(&name).bold(),
            if caps.is_simulator { "(local)" } else { "" }
        );
        println!("    Max shots: {}", caps.max_shots);
        println!("    Operations: {}", caps.operations.join(", "));
        println!("    Observables: {}", caps.observables.join(", "));
        if !caps.features.is_empty() {
            println!("    Features: {}", caps.features.join(", "));
        }
        println!();
    }

    Ok(())
}
