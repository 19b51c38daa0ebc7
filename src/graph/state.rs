//! Graph plus evaluated cost.

use rand::Rng;

use super::AdjacencyMatrix;
use crate::cost::EigenCost;

/// A candidate graph together with its evaluated cost.
///
/// The cost is computed at construction and whenever the matrix is
/// replaced through [`GraphState::replace`], so a state in hand is always
/// consistent. Strategies that probe candidate matrices evaluate them
/// separately and only build a `GraphState` for the one they keep.
#[derive(Debug, Clone)]
pub struct GraphState {
    /// The adjacency matrix. Exclusively owned; clone before mutating a
    /// candidate copy.
    pub matrix: AdjacencyMatrix,
    /// Cost of `matrix` under the evaluator that built this state.
    pub cost: f64,
}

impl GraphState {
    /// Builds a state from a matrix, evaluating its cost.
    pub fn from_matrix(matrix: AdjacencyMatrix, eval: &EigenCost) -> Self {
        let cost = eval.cost(&matrix);
        Self { matrix, cost }
    }

    /// Builds a state from a fresh uniformly random graph with `k` edges.
    pub fn random<R: Rng + ?Sized>(n: usize, k: usize, eval: &EigenCost, rng: &mut R) -> Self {
        Self::from_matrix(AdjacencyMatrix::gnm_random(n, k, rng), eval)
    }

    /// Replaces the matrix and re-evaluates the cost.
    pub fn replace(&mut self, matrix: AdjacencyMatrix, eval: &EigenCost) {
        self.cost = eval.cost(&matrix);
        self.matrix = matrix;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_cost_tracks_matrix() {
        let eval = EigenCost::default();
        let mut rng = create_rng(3);
        let mut state = GraphState::random(5, 4, &eval, &mut rng);
        let recomputed = eval.cost(&state.matrix);
        assert!((state.cost - recomputed).abs() < 1e-12);

        let other = AdjacencyMatrix::gnm_random(5, 7, &mut rng);
        let expected = eval.cost(&other);
        state.replace(other, &eval);
        assert!((state.cost - expected).abs() < 1e-12);
    }
}
