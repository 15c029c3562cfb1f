//! Benchmarks for statevector gate application
//!
//! Run with: cargo bench -p qsv-engine

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qsv_engine::{EngineConfig, KernelKind, StatevectorEngine};
use qsv_gates::{cnot, h, rx, toffoli, z};

fn engine(num_qubits: usize, kernel: KernelKind) -> StatevectorEngine {
    let config = EngineConfig::default()
        .with_max_qubits(20)
        .with_kernel(kernel)
        .with_seed(0);
    StatevectorEngine::with_config(num_qubits, config).unwrap()
}

/// Single-qubit gate on the lowest and highest qubit
fn bench_single_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit_gate");
    let gate = h();

    for num_qubits in [8usize, 12, 16, 20] {
        for kernel in [KernelKind::Serial, KernelKind::Parallel] {
            let mut e = engine(num_qubits, kernel);
            let low = [0usize];
            group.bench_with_input(
                BenchmarkId::new(format!("h_low/{kernel}"), num_qubits),
                &num_qubits,
                |b, _| b.iter(|| e.apply_gate(black_box(&gate), black_box(&low)).unwrap()),
            );
            let high = [num_qubits - 1];
            group.bench_with_input(
                BenchmarkId::new(format!("h_high/{kernel}"), num_qubits),
                &num_qubits,
                |b, _| b.iter(|| e.apply_gate(black_box(&gate), black_box(&high)).unwrap()),
            );
        }
    }

    group.finish();
}

/// Two- and three-qubit gates on scattered qubits
fn bench_multi_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_qubit_gate");
    let cx = cnot();
    let ccx = toffoli();

    for num_qubits in [10usize, 16] {
        for kernel in [KernelKind::Serial, KernelKind::Parallel] {
            let mut e = engine(num_qubits, kernel);
            let qubits = [num_qubits - 1, 0];
            group.bench_with_input(
                BenchmarkId::new(format!("cnot/{kernel}"), num_qubits),
                &num_qubits,
                |b, _| b.iter(|| e.apply_gate(black_box(&cx), black_box(&qubits)).unwrap()),
            );
            let qubits = [2, num_qubits - 1, 0];
            group.bench_with_input(
                BenchmarkId::new(format!("toffoli/{kernel}"), num_qubits),
                &num_qubits,
                |b, _| b.iter(|| e.apply_gate(black_box(&ccx), black_box(&qubits)).unwrap()),
            );
        }
    }

    group.finish();
}

/// Layered rotation circuit followed by an expectation value
fn bench_layered_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("layered_circuit");
    group.sample_size(20);
    let cx = cnot();

    for num_qubits in [8usize, 12, 16] {
        group.bench_with_input(
            BenchmarkId::new("rx_cnot_layers", num_qubits),
            &num_qubits,
            |b, &n| {
                b.iter(|| {
                    let mut e = engine(n, KernelKind::Serial);
                    for layer in 0..4 {
                        for q in 0..n {
                            e.apply_gate(&rx(0.1 * (layer + q) as f64), &[q]).unwrap();
                        }
                        for q in 0..n - 1 {
                            e.apply_gate(&cx, &[q, q + 1]).unwrap();
                        }
                    }
                    black_box(e.expectation_value_on(&z(), &[0]).unwrap())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_qubit,
    bench_multi_qubit,
    bench_layered_circuit
);
criterion_main!(benches);
