//! Spectral integrality cost.
//!
//! The objective driven toward zero by every strategy: the sum over all
//! adjacency eigenvalues of the distance to the nearest integer. A graph
//! is integral exactly when this is zero; in floating point even a truly
//! integral graph evaluates to a small positive value, so callers compare
//! against a tolerance rather than zero.

use nalgebra::DMatrix;

use crate::graph::AdjacencyMatrix;

/// Eigenvalue-based integrality cost evaluator.
///
/// A pure function of the adjacency matrix: builds the real symmetric
/// matrix, decomposes it, and sums `|λ − round(λ)|` over the spectrum.
/// If the decomposition fails to converge the candidate is scored
/// `f64::INFINITY` so the search rejects it and moves on; one bad
/// candidate never aborts a run.
#[derive(Debug, Clone)]
pub struct EigenCost {
    /// Convergence threshold handed to the eigensolver.
    pub convergence_eps: f64,
    /// Iteration cap for the eigensolver; exceeded means non-convergence.
    pub max_sweeps: usize,
}

impl Default for EigenCost {
    fn default() -> Self {
        Self {
            convergence_eps: 1e-12,
            max_sweeps: 200,
        }
    }
}

impl EigenCost {
    /// Integrality cost of `matrix`, `>= 0`, or `f64::INFINITY` when the
    /// eigen-decomposition does not converge.
    pub fn cost(&self, matrix: &AdjacencyMatrix) -> f64 {
        let n = matrix.n();
        if n == 0 {
            return 0.0;
        }
        let dense = DMatrix::from_fn(n, n, |i, j| {
            if matrix.has_edge(i, j) {
                1.0
            } else {
                0.0
            }
        });
        match dense.try_symmetric_eigen(self.convergence_eps, self.max_sweeps) {
            Some(decomp) => decomp
                .eigenvalues
                .iter()
                .map(|ev: &f64| (ev - ev.round()).abs())
                .sum(),
            None => f64::INFINITY,
        }
    }
}
