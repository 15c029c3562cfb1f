//! The statevector engine.

use std::fmt;

use num_complex::Complex64;
use qsv_gates::{GateMatrix, num_qubits_of};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, instrument, trace};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult, QubitIndexError};
use crate::kernel::{AmplitudeKernel, kernel_for};
use crate::plan::GatePlan;

/// Surviving norm below which a measurement is treated as a consistency
/// fault rather than renormalized.
pub const NORM_EPSILON: f64 = 1e-10;

/// Dense `n`-qubit state evolved in place by `k`-qubit operators.
///
/// Basis index `i` stores qubit `q` in bit `q` (qubit 0 is the least
/// significant). The engine never builds a `2^n × 2^n` operator for a gate;
/// each call touches `2^n / 2^k` groups of `2^k` amplitudes.
pub struct StatevectorEngine {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
    kernel: Box<dyn AmplitudeKernel>,
    rng: StdRng,
    config: EngineConfig,
}

impl StatevectorEngine {
    /// Create an `n`-qubit engine with the default configuration.
    pub fn new(num_qubits: usize) -> EngineResult<Self> {
        Self::with_config(num_qubits, EngineConfig::default())
    }

    /// Create an `n`-qubit engine in `|0…0⟩`.
    pub fn with_config(num_qubits: usize, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        if num_qubits == 0 || num_qubits > config.max_qubits {
            return Err(EngineError::UnsupportedQubitCount {
                requested: num_qubits,
                max: config.max_qubits,
            });
        }

        let kernel = kernel_for(&config);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let dimension = 1usize << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        debug!(
            "Created {}-qubit engine ({} amplitudes, {} kernel)",
            num_qubits,
            dimension,
            kernel.name()
        );

        Ok(Self {
            num_qubits,
            amplitudes,
            kernel,
            rng,
            config,
        })
    }

    /// Register width.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// State dimension `2^n`.
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Name of the active kernel.
    pub fn kernel_name(&self) -> &'static str {
        self.kernel.name()
    }

    /// Return to `|0…0⟩`.
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Check an operator against a qubit list and build its layout.
    ///
    /// Nothing is mutated, so a failure here leaves the state untouched.
    fn plan_for(&self, matrix: &GateMatrix, qubits: &[usize]) -> EngineResult<GatePlan> {
        let (rows, cols) = matrix.dim();
        let k = num_qubits_of(matrix).ok_or_else(|| {
            EngineError::DimensionMismatch(format!(
                "{rows}x{cols} matrix is not a square power-of-two operator"
            ))
        })?;
        if qubits.len() != k {
            return Err(EngineError::DimensionMismatch(format!(
                "{rows}x{rows} matrix acts on {k} qubits but {} were given",
                qubits.len()
            )));
        }
        GatePlan::new(qubits, self.num_qubits)
    }

    /// Apply `matrix` to `qubits`.
    ///
    /// `qubits[0]` is the most-significant bit of the matrix's local
    /// row/column index. Unitarity is the caller's responsibility; shape
    /// and indices are checked before any amplitude changes.
    pub fn apply_gate(&mut self, matrix: &GateMatrix, qubits: &[usize]) -> EngineResult<()> {
        let plan = self.plan_for(matrix, qubits)?;
        trace!(qubits = ?qubits, "apply_gate");
        self.kernel
            .apply_grouped(&mut self.amplitudes, &plan, matrix);
        Ok(())
    }

    fn check_qubit(&self, qubit: usize) -> EngineResult<()> {
        if qubit >= self.num_qubits {
            return Err(QubitIndexError::OutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            }
            .into());
        }
        Ok(())
    }

    /// Measure `qubit` using the engine's own RNG.
    pub fn measure(&mut self, qubit: usize) -> EngineResult<u8> {
        self.check_qubit(qubit)?;
        let u: f64 = self.rng.r#gen();
        self.collapse(qubit, u)
    }

    /// Measure `qubit` drawing from `rng`.
    ///
    /// Outcome 0 is chosen when a uniform draw in `[0, 1)` falls below the
    /// probability of 0. The state is then projected and renormalized.
    pub fn measure_with<R: Rng + ?Sized>(&mut self, qubit: usize, rng: &mut R) -> EngineResult<u8> {
        self.check_qubit(qubit)?;
        let u: f64 = rng.r#gen();
        self.collapse(qubit, u)
    }

    #[instrument(level = "debug", skip(self))]
    fn collapse(&mut self, qubit: usize, u: f64) -> EngineResult<u8> {
        let mask = 1usize << qubit;
        let p0 = self.kernel.partial_norm_sqr(&self.amplitudes, mask, 0);
        let (outcome, value) = if u < p0 { (0u8, 0) } else { (1u8, mask) };

        let kept = if outcome == 0 {
            p0
        } else {
            self.kernel.partial_norm_sqr(&self.amplitudes, mask, mask)
        };
        let norm = kept.sqrt();

        if !norm.is_finite() || norm < NORM_EPSILON {
            error!(
                qubit,
                outcome, norm, "measurement left no amplitude; resetting state"
            );
            self.reset();
            return Err(EngineError::StateConsistencyFault {
                qubit,
                outcome,
                norm,
            });
        }

        self.kernel
            .project(&mut self.amplitudes, mask, value, 1.0 / norm);
        debug!(p0, outcome, "collapsed");
        Ok(outcome)
    }

    /// Measure every qubit in increasing order with the engine's RNG.
    ///
    /// Each measurement sees the state left by the previous one.
    pub fn measure_all(&mut self) -> EngineResult<Vec<u8>> {
        (0..self.num_qubits).map(|q| self.measure(q)).collect()
    }

    /// [`measure_all`](Self::measure_all) drawing from `rng`.
    pub fn measure_all_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> EngineResult<Vec<u8>> {
        (0..self.num_qubits)
            .map(|q| self.measure_with(q, rng))
            .collect()
    }

    /// `|a_i|²` for every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.kernel.probabilities(&self.amplitudes)
    }

    /// Probability that measuring `qubit` yields 1.
    pub fn probability_of_one(&self, qubit: usize) -> EngineResult<f64> {
        self.check_qubit(qubit)?;
        let mask = 1usize << qubit;
        Ok(self.kernel.partial_norm_sqr(&self.amplitudes, mask, mask))
    }

    /// `Σ |a_i|²`; 1 up to rounding for any unitary history.
    pub fn norm_sqr(&self) -> f64 {
        self.kernel.partial_norm_sqr(&self.amplitudes, 0, 0)
    }

    /// `Re ⟨ψ|O|ψ⟩` for a full `2^n × 2^n` observable.
    ///
    /// Hermiticity is not checked.
    pub fn expectation_value(&self, observable: &GateMatrix) -> EngineResult<f64> {
        let dim = self.dimension();
        if observable.dim() != (dim, dim) {
            let (rows, cols) = observable.dim();
            return Err(EngineError::DimensionMismatch(format!(
                "observable is {rows}x{cols} but the state dimension is {dim}"
            )));
        }
        let applied = self.kernel.mat_vec(observable, &self.amplitudes);
        Ok(self.kernel.inner_product(&self.amplitudes, &applied).re)
    }

    /// `Re ⟨ψ|O|ψ⟩` for a `2^k × 2^k` observable on `qubits`.
    ///
    /// The observable is embedded exactly like a gate, with `qubits[0]` as
    /// the local most-significant bit.
    pub fn expectation_value_on(&self, observable: &GateMatrix, qubits: &[usize]) -> EngineResult<f64> {
        let plan = self.plan_for(observable, qubits)?;
        let mut applied = self.amplitudes.clone();
        self.kernel.apply_grouped(&mut applied, &plan, observable);
        Ok(self.kernel.inner_product(&self.amplitudes, &applied).re)
    }

    /// Independent copy of the amplitudes.
    pub fn statevector(&self) -> Vec<Complex64> {
        self.amplitudes.clone()
    }

    /// Borrowed read-only view of the amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }
}

impl fmt::Debug for StatevectorEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatevectorEngine")
            .field("num_qubits", &self.num_qubits)
            .field("kernel", &self.kernel.name())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
