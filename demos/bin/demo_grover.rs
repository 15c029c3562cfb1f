//! Grover's Search Algorithm Demo
//!
//! Searches for a marked basis state and compares the simulated success
//! probability with theory.

use clap::Parser;

use qsv_demos::circuits::grover::{grover_circuit, optimal_iterations, success_probability};
use qsv_demos::{
    init_logging, print_header, print_probability_bar, print_result, print_section,
    print_success, print_warning,
};

#[derive(Parser, Debug)]
#[command(name = "demo-grover")]
#[command(about = "Demonstrate Grover's search algorithm")]
struct Args {
    /// Number of qubits (search space size = 2^n)
    #[arg(short = 'n', long, default_value = "3")]
    qubits: usize,

    /// Marked state to search for (0 to 2^n - 1)
    #[arg(short, long, default_value = "5")]
    marked: usize,

    /// Number of Grover iterations (0 = optimal)
    #[arg(short, long, default_value = "0")]
    iterations: usize,

    /// Measure the register this many times
    #[arg(short, long, default_value = "0")]
    shots: usize,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    print_header("Grover's Search Algorithm Demo");

    let iterations = if args.iterations == 0 {
        optimal_iterations(args.qubits)
    } else {
        args.iterations
    };

    print_section("Problem Setup");
    print_result("Qubits", args.qubits);
    print_result("Search space size", 1usize << args.qubits);
    print_result(
        "Marked state",
        format!(
            "|{}⟩ = |{:0width$b}⟩",
            args.marked,
            args.marked,
            width = args.qubits
        ),
    );
    print_result("Grover iterations", iterations);

    print_section("Circuit");
    let mut circuit = grover_circuit(args.qubits, args.marked, iterations)?;
    print_result("Gates", circuit.len());
    print_result("Depth", circuit.depth());

    circuit.execute()?;
    let probabilities = circuit.probabilities();

    print_section("Final State Probabilities");
    for (index, &p) in probabilities.iter().enumerate().take(32) {
        print_probability_bar(index, args.qubits, p);
    }
    if probabilities.len() > 32 {
        println!("  ... and {} more states", probabilities.len() - 32);
    }

    let (best, best_p) = probabilities
        .iter()
        .copied()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap_or((0, 0.0));

    print_section("Results");
    print_result(
        "Most probable",
        format!("|{:0width$b}⟩ ({best_p:.4})", best, width = args.qubits),
    );
    print_result(
        "Theoretical success",
        format!("{:.4}", success_probability(args.qubits, iterations)),
    );

    if args.shots > 0 {
        let mut hits = 0;
        for _ in 0..args.shots {
            circuit.execute()?;
            let bits = circuit.measure_all()?;
            let outcome = bits
                .iter()
                .enumerate()
                .fold(0usize, |acc, (q, &b)| acc | (usize::from(b) << q));
            if outcome == args.marked {
                hits += 1;
            }
        }
        print_result(
            "Measured success",
            format!("{hits}/{} ({:.1}%)", args.shots, 100.0 * hits as f64 / args.shots as f64),
        );
    }

    println!();
    if best == args.marked {
        print_success("Found the marked state!");
    } else {
        print_warning(&format!("Most probable state is {best}, not {}", args.marked));
    }

    Ok(())
}
