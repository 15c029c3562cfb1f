//! qsv Command-Line Interface
//!
//! Runs preset circuits on the simulator device, benchmarks the amplitude
//! kernels and lists registered devices.
//!
//! ```text
//! qsv run -c ghz -n 5 --shots 2000
//! qsv run -c ising --analytic --format json
//! qsv bench -n 20 --depth 8 --kernel both
//! QSV_CONFIG=engine.yaml qsv devices
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{bench, common, devices, run, version};

/// qsv - statevector quantum simulator
#[derive(Parser)]
#[command(name = "qsv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Engine configuration file (YAML)
    #[arg(long, env = "QSV_CONFIG", global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a preset circuit on the simulator
    Run {
        /// Circuit (bell, ghz, uniform, ising)
        #[arg(short, long, default_value = "bell")]
        circuit: String,

        /// Number of qubits (defaults per circuit)
        #[arg(short = 'n', long)]
        qubits: Option<usize>,

        /// Number of shots
        #[arg(short, long, default_value = "1024")]
        shots: u32,

        /// Report exact probabilities instead of sampling
        #[arg(long)]
        analytic: bool,

        /// Amplitude kernel (serial, parallel)
        #[arg(short, long)]
        kernel: Option<String>,

        /// Seed for sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Time the amplitude kernels on a layered circuit
    Bench {
        /// Number of qubits
        #[arg(short = 'n', long, default_value = "16")]
        qubits: usize,

        /// Number of layers
        #[arg(short, long, default_value = "10")]
        depth: usize,

        /// Kernel to time (serial, parallel, both)
        #[arg(short, long, default_value = "both")]
        kernel: String,
    },

    /// List available devices
    Devices,

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let config_path = cli.config.as_deref();

    // Execute command
    let result = match cli.command {
        Commands::Run {
            circuit,
            qubits,
            shots,
            analytic,
            kernel,
            seed,
            format,
        } => {
            let options = run::RunOptions {
                qubits: qubits.unwrap_or_else(|| common::default_qubits(&circuit)),
                circuit: &circuit,
                shots,
                analytic,
                seed,
                format: &format,
            };
            common::load_engine_config(config_path)
                .and_then(|engine| match kernel {
                    Some(k) => Ok(engine.with_kernel(common::parse_kernel(&k)?)),
                    None => Ok(engine),
                })
                .and_then(|engine| run::execute(&options, &engine))
        }

        Commands::Bench {
            qubits,
            depth,
            kernel,
        } => common::load_engine_config(config_path)
            .and_then(|engine| bench::execute(qubits, depth, &kernel, &engine)),

        Commands::Devices => devices::execute(),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
