//! Learned edge weights.

use crate::graph::AdjacencyMatrix;

/// Symmetric matrix of non-negative edge desirability weights.
///
/// Initialized to all ones on the off-diagonal entries, zero on the
/// diagonal (self-loops are never sampled). Mutated once per generation
/// by evaporation, elite deposit, and clamping; reset to uniform on
/// success or stagnation.
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    n: usize,
    weights: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates the uniform all-ones matrix.
    pub fn new(n: usize) -> Self {
        let mut m = Self {
            n,
            weights: vec![0.0; n * n],
        };
        m.reset();
        m
    }

    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Weight of the pair `{u, v}`.
    pub fn weight(&self, u: usize, v: usize) -> f64 {
        self.weights[u * self.n + v]
    }

    /// Resets every off-diagonal entry to 1.0.
    pub fn reset(&mut self) {
        for u in 0..self.n {
            for v in 0..self.n {
                self.weights[u * self.n + v] = if u == v { 0.0 } else { 1.0 };
            }
        }
    }

    /// Multiplies every entry by `1 - rate`.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for w in &mut self.weights {
            *w *= keep;
        }
    }

    /// Adds `amount` to the weight of every edge present in `used`.
    pub fn deposit(&mut self, used: &AdjacencyMatrix, amount: f64) {
        for (u, v) in used.edges() {
            self.weights[u * self.n + v] += amount;
            self.weights[v * self.n + u] += amount;
        }
    }

    /// Clamps every off-diagonal entry into `[min, max]`; the diagonal
    /// stays zero.
    pub fn clamp(&mut self, min: f64, max: f64) {
        for u in 0..self.n {
            for v in 0..self.n {
                if u != v {
                    let w = &mut self.weights[u * self.n + v];
                    *w = w.clamp(min, max);
                }
            }
        }
    }
}
