//! VQE (Variational Quantum Eigensolver) Demo
//!
//! Finds the ground state energy of a Heisenberg spin chain with a
//! hardware-efficient ansatz and a Nelder-Mead outer loop.

use clap::Parser;

use qsv_demos::problems::HeisenbergChain;
use qsv_demos::runners::VqeRunner;
use qsv_demos::{
    create_progress_bar, init_logging, print_header, print_info, print_result, print_section,
    print_success,
};
use qsv_engine::{EngineConfig, KernelKind};

#[derive(Parser, Debug)]
#[command(name = "demo-vqe")]
#[command(about = "Demonstrate VQE on a Heisenberg spin chain")]
struct Args {
    /// Number of spins
    #[arg(short = 'n', long, default_value = "2")]
    qubits: usize,

    /// Coupling strength J
    #[arg(short = 'j', long, default_value = "1.0")]
    coupling: f64,

    /// Field strength h
    #[arg(long, default_value = "0.5")]
    field: f64,

    /// Number of ansatz layers
    #[arg(short, long, default_value = "2")]
    layers: usize,

    /// Maximum optimization iterations
    #[arg(short, long, default_value = "2000")]
    iterations: usize,

    /// Seed for the initial parameters
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Amplitude kernel (serial, parallel)
    #[arg(short, long, default_value = "serial")]
    kernel: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    print_header("VQE Heisenberg Chain Demo");

    let chain = HeisenbergChain::new(args.qubits, args.coupling, args.field)?;
    let kernel: KernelKind = args.kernel.parse()?;

    print_section("Problem Setup");
    print_result("Spins", chain.n_qubits);
    print_result("Coupling J", chain.coupling);
    print_result("Field h", chain.field);
    print_result("Hamiltonian terms", chain.terms().len());
    print_result("Ansatz layers", args.layers);
    print_result("Kernel", kernel);

    let runner = VqeRunner::new(chain)
        .with_layers(args.layers)
        .with_maxiter(args.iterations)
        .with_seed(args.seed)
        .with_engine(EngineConfig::default().with_kernel(kernel));
    print_result("Parameters", runner.num_parameters());

    print_section("Running VQE Optimization");
    let pb = create_progress_bar(args.iterations as u64, "Optimizing...");
    let result = runner.run()?;
    pb.set_position(result.iterations as u64);
    pb.finish_with_message("Optimization complete");

    print_section("Results");
    print_result("Initial energy", format!("{:.6}", result.initial_energy));
    print_result("Optimal energy", format!("{:.6}", result.optimal_energy));
    print_result("Iterations", result.iterations);
    print_result("Circuit evaluations", result.circuit_evaluations);
    print_result("Converged", if result.converged { "Yes" } else { "No" });

    print_section("Energy Convergence");
    let history = &result.energy_history;
    let step = (history.len() / 10).max(1);
    for (i, energy) in history.iter().enumerate().step_by(step) {
        println!("  Iteration {i:4}: {energy:.6}");
    }

    print_section("Final State");
    let mut circuit = qsv_demos::circuits::hardware_efficient_ansatz(
        chain.n_qubits,
        args.layers,
        &result.optimal_params,
        EngineConfig::default(),
    )?;
    let state = circuit.execute()?;
    for (i, amp) in state.iter().enumerate().filter(|(_, a)| a.norm_sqr() > 1e-6) {
        println!(
            "  |{:0width$b}⟩: {:+.4}{:+.4}i",
            i,
            amp.re,
            amp.im,
            width = chain.n_qubits
        );
    }

    println!();
    print_success("VQE demo complete!");
    if chain.n_qubits == 2 && chain.coupling > 0.0 {
        print_info(&format!(
            "Exact ground energy for two spins: {:.6}",
            -chain.coupling - 2.0 * chain.field.abs()
        ));
    }

    Ok(())
}
