//! VQE (Variational Quantum Eigensolver) runner.
//!
//! VQE is a hybrid classical-quantum algorithm for finding ground state
//! energies of quantum systems. Every energy evaluation rebuilds the ansatz
//! circuit, runs it on the statevector engine and sums the Hamiltonian's
//! local expectation values.

use std::f64::consts::PI;

use qsv_engine::EngineConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::circuits::vqe::{hardware_efficient_ansatz, num_parameters};
use crate::error::{DemoError, DemoResult};
use crate::optimizers::{NelderMead, Optimizer};
use crate::problems::HeisenbergChain;

/// Result of a VQE run.
#[derive(Debug, Clone)]
pub struct VqeResult {
    /// Optimal energy found.
    pub optimal_energy: f64,
    /// Optimal parameters.
    pub optimal_params: Vec<f64>,
    /// Energy at the initial parameters.
    pub initial_energy: f64,
    /// Number of iterations.
    pub iterations: usize,
    /// Number of circuit evaluations.
    pub circuit_evaluations: usize,
    /// Best energy after each iteration.
    pub energy_history: Vec<f64>,
    /// Whether optimization converged.
    pub converged: bool,
}

/// VQE runner configuration.
#[derive(Debug, Clone)]
pub struct VqeRunner {
    /// The Hamiltonian to minimize.
    pub hamiltonian: HeisenbergChain,
    /// Number of ansatz layers.
    pub layers: usize,
    /// Maximum optimization iterations.
    pub maxiter: usize,
    /// Seed for the initial parameters.
    pub seed: u64,
    /// Engine settings for every evaluation.
    pub engine: EngineConfig,
}

impl VqeRunner {
    /// Create a new VQE runner.
    pub fn new(hamiltonian: HeisenbergChain) -> Self {
        Self {
            hamiltonian,
            layers: 2,
            maxiter: 1000,
            seed: 42,
            engine: EngineConfig::default(),
        }
    }

    /// Set the number of ansatz layers.
    pub fn with_layers(mut self, layers: usize) -> Self {
        self.layers = layers;
        self
    }

    /// Set maximum iterations.
    pub fn with_maxiter(mut self, maxiter: usize) -> Self {
        self.maxiter = maxiter;
        self
    }

    /// Set the seed for the initial parameters.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the engine configuration.
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Get the number of parameters needed.
    pub fn num_parameters(&self) -> usize {
        num_parameters(self.hamiltonian.n_qubits, self.layers)
    }

    /// Run VQE from parameters drawn uniformly from `[0, 2π)`.
    pub fn run(&self) -> DemoResult<VqeResult> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let initial_params = (0..self.num_parameters())
            .map(|_| rng.gen_range(0.0..2.0 * PI))
            .collect();
        self.run_with_params(initial_params)
    }

    /// Energy of the ansatz state for `params`.
    pub fn energy(&self, params: &[f64]) -> DemoResult<f64> {
        let mut circuit = hardware_efficient_ansatz(
            self.hamiltonian.n_qubits,
            self.layers,
            params,
            self.engine.clone(),
        )?;
        circuit.execute()?;
        self.hamiltonian.energy(&circuit)
    }

    /// Run VQE with specified initial parameters.
    pub fn run_with_params(&self, initial_params: Vec<f64>) -> DemoResult<VqeResult> {
        if initial_params.len() != self.num_parameters() {
            return Err(DemoError::InvalidArgument(format!(
                "expected {} parameters, got {}",
                self.num_parameters(),
                initial_params.len()
            )));
        }
        let initial_energy = self.energy(&initial_params)?;
        debug!(
            "VQE start: {} parameters, initial energy {:.6}",
            initial_params.len(),
            initial_energy
        );

        let optimizer = NelderMead::new().with_maxiter(self.maxiter);
        let mut failure = None;
        let objective = |params: &[f64]| match self.energy(params) {
            Ok(energy) => {
                trace!("energy {:.8}", energy);
                energy
            }
            Err(e) => {
                if failure.is_none() {
                    failure = Some(e);
                }
                f64::INFINITY
            }
        };

        let result = optimizer.minimize(objective, initial_params);
        if let Some(e) = failure {
            return Err(e);
        }

        debug!(
            "VQE finished after {} iterations: energy {:.6}",
            result.num_iterations, result.optimal_value
        );

        Ok(VqeResult {
            optimal_energy: result.optimal_value,
            optimal_params: result.optimal_params,
            initial_energy,
            iterations: result.num_iterations,
            circuit_evaluations: result.num_evaluations,
            energy_history: result.history,
            converged: result.converged,
        })
    }
}
