//! Amplitude kernels.
//!
//! The engine expresses every state operation through [`AmplitudeKernel`].
//! The kernel is chosen once when the engine is built and never switched
//! per call.

use std::fmt;

use num_complex::Complex64;
use qsv_gates::GateMatrix;
use rayon::prelude::*;

use crate::config::{EngineConfig, KernelKind};
use crate::plan::GatePlan;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Array operations the engine needs from a numeric backend.
pub trait AmplitudeKernel: Send + Sync + fmt::Debug {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Multiply every bit group described by `plan` by `matrix` in place.
    ///
    /// `matrix` must be `2^k × 2^k` where `k = plan.width()`.
    fn apply_grouped(&self, amps: &mut [Complex64], plan: &GatePlan, matrix: &GateMatrix);

    /// `Σ |a_i|²` over indices with `i & mask == value`.
    fn partial_norm_sqr(&self, amps: &[Complex64], mask: usize, value: usize) -> f64;

    /// Zero indices with `i & mask != value` and scale the rest by `scale`.
    fn project(&self, amps: &mut [Complex64], mask: usize, value: usize, scale: f64);

    /// `Σ conj(a_i) · b_i`.
    fn inner_product(&self, a: &[Complex64], b: &[Complex64]) -> Complex64;

    /// Dense `matrix · v`.
    fn mat_vec(&self, matrix: &GateMatrix, v: &[Complex64]) -> Vec<Complex64>;

    /// `|a_i|²` for every index.
    fn probabilities(&self, amps: &[Complex64]) -> Vec<f64>;
}

/// Build the kernel named by `config`.
pub fn kernel_for(config: &EngineConfig) -> Box<dyn AmplitudeKernel> {
    match config.kernel {
        KernelKind::Serial => Box::new(SerialKernel),
        KernelKind::Parallel => Box::new(ParallelKernel::new(config.parallel_threshold)),
    }
}

/// Gather, multiply and scatter every group whose members all fall
/// inside `block`. `scratch` must hold `2^k` entries.
fn apply_block(block: &mut [Complex64], plan: &GatePlan, matrix: &GateMatrix, scratch: &mut [Complex64]) {
    let offsets = plan.offsets();
    let groups = block.len() >> plan.width();

    for g in 0..groups {
        let base = plan.group_base(g);
        for (slot, &off) in scratch.iter_mut().zip(offsets) {
            *slot = block[base + off];
        }
        for (row, &off) in offsets.iter().enumerate() {
            block[base + off] = matrix
                .row(row)
                .iter()
                .zip(scratch.iter())
                .fold(ZERO, |acc, (m, a)| acc + m * a);
        }
    }
}

fn dense_row(matrix: &GateMatrix, row: usize, v: &[Complex64]) -> Complex64 {
    matrix
        .row(row)
        .iter()
        .zip(v)
        .fold(ZERO, |acc, (m, a)| acc + m * a)
}

// =============================================================================
// Serial
// =============================================================================

/// Single-threaded kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialKernel;

impl AmplitudeKernel for SerialKernel {
    fn name(&self) -> &'static str {
        "serial"
    }

    fn apply_grouped(&self, amps: &mut [Complex64], plan: &GatePlan, matrix: &GateMatrix) {
        let mut scratch = vec![ZERO; plan.offsets().len()];
        apply_block(amps, plan, matrix, &mut scratch);
    }

    fn partial_norm_sqr(&self, amps: &[Complex64], mask: usize, value: usize) -> f64 {
        amps.iter()
            .enumerate()
            .filter(|(i, _)| i & mask == value)
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }

    fn project(&self, amps: &mut [Complex64], mask: usize, value: usize, scale: f64) {
        for (i, a) in amps.iter_mut().enumerate() {
            if i & mask == value {
                *a *= scale;
            } else {
                *a = ZERO;
            }
        }
    }

    fn inner_product(&self, a: &[Complex64], b: &[Complex64]) -> Complex64 {
        a.iter().zip(b).map(|(x, y)| x.conj() * y).sum()
    }

    fn mat_vec(&self, matrix: &GateMatrix, v: &[Complex64]) -> Vec<Complex64> {
        (0..matrix.nrows()).map(|r| dense_row(matrix, r, v)).collect()
    }

    fn probabilities(&self, amps: &[Complex64]) -> Vec<f64> {
        amps.iter().map(|a| a.norm_sqr()).collect()
    }
}

// =============================================================================
// Parallel
// =============================================================================

/// Rayon kernel.
///
/// Gate application splits the state into aligned blocks of
/// [`GatePlan::span`] amplitudes. Each block holds whole groups, so blocks
/// are processed independently. States smaller than `threshold` fall back
/// to the serial path.
#[derive(Debug, Clone, Copy)]
pub struct ParallelKernel {
    threshold: usize,
}

impl ParallelKernel {
    /// Create a kernel that parallelizes states of at least `threshold`
    /// amplitudes.
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    fn is_small(&self, len: usize) -> bool {
        len < self.threshold
    }
}

impl AmplitudeKernel for ParallelKernel {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn apply_grouped(&self, amps: &mut [Complex64], plan: &GatePlan, matrix: &GateMatrix) {
        let span = plan.span();
        // Need at least two blocks to gain anything
        if self.is_small(amps.len()) || span >= amps.len() {
            return SerialKernel.apply_grouped(amps, plan, matrix);
        }
        let local = plan.offsets().len();
        amps.par_chunks_mut(span).for_each_init(
            || vec![ZERO; local],
            |scratch, block| apply_block(block, plan, matrix, scratch),
        );
    }

    fn partial_norm_sqr(&self, amps: &[Complex64], mask: usize, value: usize) -> f64 {
        if self.is_small(amps.len()) {
            return SerialKernel.partial_norm_sqr(amps, mask, value);
        }
        amps.par_iter()
            .enumerate()
            .filter(|(i, _)| i & mask == value)
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }

    fn project(&self, amps: &mut [Complex64], mask: usize, value: usize, scale: f64) {
        if self.is_small(amps.len()) {
            return SerialKernel.project(amps, mask, value, scale);
        }
        amps.par_iter_mut().enumerate().for_each(|(i, a)| {
            if i & mask == value {
                *a *= scale;
            } else {
                *a = ZERO;
            }
        });
    }

    fn inner_product(&self, a: &[Complex64], b: &[Complex64]) -> Complex64 {
        if self.is_small(a.len()) {
            return SerialKernel.inner_product(a, b);
        }
        a.par_iter().zip(b.par_iter()).map(|(x, y)| x.conj() * y).sum()
    }

    fn mat_vec(&self, matrix: &GateMatrix, v: &[Complex64]) -> Vec<Complex64> {
        if self.is_small(v.len()) {
            return SerialKernel.mat_vec(matrix, v);
        }
        (0..matrix.nrows())
            .into_par_iter()
            .map(|r| dense_row(matrix, r, v))
            .collect()
    }

    fn probabilities(&self, amps: &[Complex64]) -> Vec<f64> {
        if self.is_small(amps.len()) {
            return SerialKernel.probabilities(amps);
        }
        amps.par_iter().map(|a| a.norm_sqr()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsv_gates::{cnot, h, ry, toffoli};

    fn random_state(n: usize, seed: u64) -> Vec<Complex64> {
        use rand::{Rng, SeedableRng, rngs::StdRng};
        let mut rng = StdRng::seed_from_u64(seed);
        let mut v: Vec<Complex64> = (0..1usize << n)
            .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();
        let norm = v.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
        v.iter_mut().for_each(|a| *a /= norm);
        v
    }

    fn assert_close(a: &[Complex64], b: &[Complex64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).norm() < 1e-12, "{x} != {y}");
        }
    }

    #[test]
    fn test_kernels_agree_on_gates() {
        let serial = SerialKernel;
        // Threshold of 1 forces the parallel path even for small states
        let parallel = ParallelKernel::new(1);
        let n = 8;

        let cases: Vec<(GateMatrix, Vec<usize>)> = vec![
            (h(), vec![0]),
            (ry(0.37), vec![5]),
            (cnot(), vec![6, 1]),
            (cnot(), vec![2, 7]),
            (toffoli(), vec![4, 0, 3]),
        ];

        for (matrix, qubits) in cases {
            let plan = GatePlan::new(&qubits, n).unwrap();
            let mut a = random_state(n, 11);
            let mut b = a.clone();
            serial.apply_grouped(&mut a, &plan, &matrix);
            parallel.apply_grouped(&mut b, &plan, &matrix);
            assert_close(&a, &b);
        }
    }

    #[test]
    fn test_kernels_agree_on_reductions() {
        let serial = SerialKernel;
        let parallel = ParallelKernel::new(1);
        let state = random_state(6, 3);

        let p_serial = serial.partial_norm_sqr(&state, 1 << 2, 0);
        let p_parallel = parallel.partial_norm_sqr(&state, 1 << 2, 0);
        assert!((p_serial - p_parallel).abs() < 1e-12);

        let ip_serial = serial.inner_product(&state, &state);
        let ip_parallel = parallel.inner_product(&state, &state);
        assert!((ip_serial - ip_parallel).norm() < 1e-12);
        assert!((ip_serial.re - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_project_masks_and_scales() {
        let mut amps = vec![Complex64::new(0.5, 0.0); 4];
        SerialKernel.project(&mut amps, 0b10, 0b10, 2.0);
        assert_eq!(amps[0], ZERO);
        assert_eq!(amps[1], ZERO);
        assert_eq!(amps[2], Complex64::new(1.0, 0.0));
        assert_eq!(amps[3], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_kernel_selection() {
        let config = EngineConfig::default().with_kernel(KernelKind::Parallel);
        assert_eq!(kernel_for(&config).name(), "parallel");
        assert_eq!(kernel_for(&EngineConfig::default()).name(), "serial");
    }
}
