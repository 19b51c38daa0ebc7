//! Greedy hill-climbing stepping logic.

use rand::rngs::StdRng;

use super::config::GreedyConfig;
use crate::cost::EigenCost;
use crate::driver::{StepOutcome, Strategy};
use crate::graph::GraphState;
use crate::neighborhood::swap_random_edge;
use crate::random::create_rng_opt;

/// Strict hill climbing: best of N sampled swap neighbors, accepted only
/// on strict improvement.
///
/// When no sampled neighbor improves the current cost, or the attempt's
/// step cap is reached, the step reports [`StepOutcome::Stuck`] and the
/// driver restarts the strategy on a fresh random graph.
pub struct GreedyStrategy {
    config: GreedyConfig,
    eval: EigenCost,
    rng: StdRng,
    state: GraphState,
    steps_in_attempt: usize,
    best_cost: f64,
}

impl GreedyStrategy {
    /// Builds a strategy with a fresh random starting graph.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`GreedyConfig::validate`] first to get a descriptive error).
    pub fn new(config: GreedyConfig) -> Self {
        config.validate().expect("invalid GreedyConfig");
        let eval = EigenCost::default();
        let mut rng = create_rng_opt(config.seed);
        let state = GraphState::random(config.n, config.k, &eval, &mut rng);
        let best_cost = state.cost;
        Self {
            config,
            eval,
            rng,
            state,
            steps_in_attempt: 0,
            best_cost,
        }
    }

    fn new_attempt(&mut self) {
        self.state = GraphState::random(self.config.n, self.config.k, &self.eval, &mut self.rng);
        self.steps_in_attempt = 0;
    }
}

impl Strategy for GreedyStrategy {
    fn step(&mut self) -> StepOutcome {
        if self.state.cost < self.config.success_tolerance {
            let found = self.state.matrix.clone();
            self.new_attempt();
            return StepOutcome::Found(vec![found]);
        }

        if self.steps_in_attempt >= self.config.max_steps {
            return StepOutcome::Stuck;
        }
        self.steps_in_attempt += 1;

        let mut best_neighbor = None;
        let mut best_neighbor_cost = f64::INFINITY;
        for _ in 0..self.config.neighbors_to_check {
            let candidate = swap_random_edge(&self.state.matrix, &mut self.rng);
            let cost = self.eval.cost(&candidate);
            if cost < best_neighbor_cost {
                best_neighbor_cost = cost;
                best_neighbor = Some(candidate);
            }
        }

        // Strict improvement only; a sideways or uphill best neighbor
        // ends the attempt.
        if best_neighbor_cost < self.state.cost {
            self.state = GraphState {
                matrix: best_neighbor.expect("neighbors_to_check >= 1"),
                cost: best_neighbor_cost,
            };
            if self.state.cost < self.best_cost {
                self.best_cost = self.state.cost;
            }
            StepOutcome::Continue
        } else {
            StepOutcome::Stuck
        }
    }

    fn restart(&mut self) {
        self.new_attempt();
    }

    fn best_cost(&self) -> f64 {
        self.best_cost
    }
}
