//! Simulated Annealing stepping logic.

use rand::rngs::StdRng;
use rand::Rng;

use super::config::AnnealingConfig;
use super::temperature::Temperature;
use crate::cost::EigenCost;
use crate::driver::{StepOutcome, Strategy};
use crate::graph::GraphState;
use crate::neighborhood::swap_random_edge;
use crate::random::create_rng_opt;

/// Simulated annealing over edge-count-preserving swaps.
///
/// One step proposes a single swap neighbor and applies Metropolis
/// acceptance at the current temperature. A state below the tolerance is
/// emitted as soon as it is seen; otherwise the attempt runs its step
/// budget out, re-checks the final state, and restarts from a fresh
/// random graph with the temperature reset.
pub struct AnnealingStrategy {
    config: AnnealingConfig,
    eval: EigenCost,
    rng: StdRng,
    state: GraphState,
    temperature: Temperature,
    steps_in_attempt: usize,
    best_cost: f64,
}

impl AnnealingStrategy {
    /// Builds a strategy with a fresh random starting graph.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`AnnealingConfig::validate`] first to get a descriptive error).
    pub fn new(config: AnnealingConfig) -> Self {
        config.validate().expect("invalid AnnealingConfig");
        let eval = EigenCost::default();
        let mut rng = create_rng_opt(config.seed);
        let state = GraphState::random(config.n, config.k, &eval, &mut rng);
        let best_cost = state.cost;
        let temperature = Temperature::new(
            config.initial_temperature,
            config.decay,
            config.reheat_floor,
        );
        Self {
            config,
            eval,
            rng,
            state,
            temperature,
            steps_in_attempt: 0,
            best_cost,
        }
    }

    fn new_attempt(&mut self) {
        self.state = GraphState::random(self.config.n, self.config.k, &self.eval, &mut self.rng);
        self.temperature.reset();
        self.steps_in_attempt = 0;
    }

    fn take_success(&mut self) -> StepOutcome {
        let found = self.state.matrix.clone();
        self.new_attempt();
        StepOutcome::Found(vec![found])
    }
}

impl Strategy for AnnealingStrategy {
    fn step(&mut self) -> StepOutcome {
        if self.state.cost < self.config.success_tolerance {
            return self.take_success();
        }

        let neighbor = swap_random_edge(&self.state.matrix, &mut self.rng);
        let neighbor_cost = self.eval.cost(&neighbor);
        let delta = neighbor_cost - self.state.cost;

        let accept = delta < 0.0
            || self.rng.random_range(0.0..1.0) < (-delta / self.temperature.current()).exp();
        if accept {
            self.state = GraphState {
                matrix: neighbor,
                cost: neighbor_cost,
            };
            if self.state.cost < self.best_cost {
                self.best_cost = self.state.cost;
            }
        }

        self.temperature.step();
        self.steps_in_attempt += 1;

        if self.steps_in_attempt >= self.config.attempt_steps {
            // Attempt budget spent: re-check before giving up on it.
            if self.state.cost < self.config.success_tolerance {
                return self.take_success();
            }
            self.new_attempt();
        }
        StepOutcome::Continue
    }

    fn restart(&mut self) {
        self.new_attempt();
        self.best_cost = self.state.cost;
    }

    fn best_cost(&self) -> f64 {
        self.best_cost
    }
}
