//! Nelder-Mead simplex optimizer.
//!
//! A derivative-free optimizer that keeps a simplex of n+1 points in n
//! dimensions and moves it by reflection, expansion, contraction and
//! shrinking.

use super::{OptimizationResult, Optimizer};

const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Nelder-Mead optimizer configuration.
#[derive(Debug, Clone)]
pub struct NelderMead {
    /// Maximum number of iterations.
    pub maxiter: usize,
    /// Convergence tolerance on the cost spread and simplex size.
    pub tol: f64,
    /// Offset of the initial simplex vertices from the start point.
    pub initial_step: f64,
}

impl Default for NelderMead {
    fn default() -> Self {
        Self {
            maxiter: 1000,
            tol: 1e-8,
            initial_step: 0.5,
        }
    }
}

impl NelderMead {
    /// Create a new optimizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum iterations.
    pub fn with_maxiter(mut self, maxiter: usize) -> Self {
        self.maxiter = maxiter;
        self
    }

    /// Set convergence tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set the initial simplex size.
    pub fn with_initial_step(mut self, step: f64) -> Self {
        self.initial_step = step;
        self
    }
}

/// `a + coeff * (b - a)`, element-wise.
fn towards(a: &[f64], b: &[f64], coeff: f64) -> Vec<f64> {
    a.iter().zip(b).map(|(&a, &b)| a + coeff * (b - a)).collect()
}

impl Optimizer for NelderMead {
    fn minimize<F>(&self, mut objective: F, initial_params: Vec<f64>) -> OptimizationResult
    where
        F: FnMut(&[f64]) -> f64,
    {
        let n = initial_params.len();
        let mut num_evaluations = 0;
        let mut eval = |x: &[f64], count: &mut usize| {
            *count += 1;
            objective(x)
        };

        // Vertices paired with their costs
        let mut simplex: Vec<(Vec<f64>, f64)> = Vec::with_capacity(n + 1);
        let f0 = eval(&initial_params, &mut num_evaluations);
        simplex.push((initial_params.clone(), f0));
        for i in 0..n {
            let mut point = initial_params.clone();
            point[i] += self.initial_step;
            let f = eval(&point, &mut num_evaluations);
            simplex.push((point, f));
        }

        let mut history = Vec::new();
        let mut converged = n == 0;
        let mut num_iterations = 0;

        while !converged && num_iterations < self.maxiter {
            num_iterations += 1;
            simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
            history.push(simplex[0].1);

            let spread = simplex[n].1 - simplex[0].1;
            let size = simplex[1..]
                .iter()
                .map(|(p, _)| {
                    p.iter()
                        .zip(&simplex[0].0)
                        .map(|(a, b)| (a - b).abs())
                        .fold(0.0, f64::max)
                })
                .fold(0.0, f64::max);
            if spread < self.tol && size < self.tol.sqrt() {
                converged = true;
                break;
            }

            // Centroid of all but the worst vertex
            let mut centroid = vec![0.0; n];
            for (point, _) in &simplex[..n] {
                for (c, p) in centroid.iter_mut().zip(point) {
                    *c += p / n as f64;
                }
            }

            let worst = simplex[n].0.clone();
            let reflected = towards(&centroid, &worst, -REFLECTION);
            let f_reflected = eval(&reflected, &mut num_evaluations);

            if f_reflected < simplex[0].1 {
                let expanded = towards(&centroid, &reflected, EXPANSION);
                let f_expanded = eval(&expanded, &mut num_evaluations);
                simplex[n] = if f_expanded < f_reflected {
                    (expanded, f_expanded)
                } else {
                    (reflected, f_reflected)
                };
                continue;
            }

            if f_reflected < simplex[n - 1].1 {
                simplex[n] = (reflected, f_reflected);
                continue;
            }

            // Outside contraction if the reflection beat the worst point, inside otherwise
            let (anchor, f_anchor) = if f_reflected < simplex[n].1 {
                (reflected, f_reflected)
            } else {
                (worst, simplex[n].1)
            };
            let contracted = towards(&centroid, &anchor, CONTRACTION);
            let f_contracted = eval(&contracted, &mut num_evaluations);
            if f_contracted < f_anchor {
                simplex[n] = (contracted, f_contracted);
                continue;
            }

            // Shrink towards the best vertex
            let best = simplex[0].0.clone();
            for vertex in simplex.iter_mut().skip(1) {
                let point = towards(&best, &vertex.0, SHRINK);
                let f = eval(&point, &mut num_evaluations);
                *vertex = (point, f);
            }
        }

        simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
        let (optimal_params, optimal_value) = simplex.swap_remove(0);

        OptimizationResult {
            optimal_params,
            optimal_value,
            num_evaluations,
            num_iterations,
            history,
            converged,
        }
    }
}
