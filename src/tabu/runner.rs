//! Tabu Search stepping logic.

use rand::rngs::StdRng;

use super::config::TabuConfig;
use super::memory::TabuMemory;
use crate::cost::EigenCost;
use crate::driver::{StepOutcome, Strategy};
use crate::graph::GraphState;
use crate::neighborhood::sample_pairs;
use crate::random::create_rng_opt;

/// Tabu search over edge flips.
///
/// Each iteration scores a batch of candidate flips and accepts the
/// lowest-cost one that is either not tabu or beats the best cost seen
/// by more than the aspiration margin. The accepted move is always
/// recorded in the tabu memory, aspiration admissions included. If no
/// candidate is admissible the iteration is a no-op. Restarts happen on
/// success (so one solution is not re-emitted over and over) and
/// unconditionally every `restart_interval` iterations.
pub struct TabuStrategy {
    config: TabuConfig,
    eval: EigenCost,
    rng: StdRng,
    state: GraphState,
    memory: TabuMemory,
    /// Aspiration reference: best cost seen since the last success.
    best_cost: f64,
    iteration: usize,
}

impl TabuStrategy {
    /// Builds a strategy with a fresh random starting graph.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`TabuConfig::validate`] first to get a descriptive error).
    pub fn new(config: TabuConfig) -> Self {
        config.validate().expect("invalid TabuConfig");
        let eval = EigenCost::default();
        let mut rng = create_rng_opt(config.seed);
        let state = GraphState::random(config.n, config.k, &eval, &mut rng);
        let best_cost = state.cost;
        let memory = TabuMemory::new(config.tabu_tenure);
        Self {
            config,
            eval,
            rng,
            state,
            memory,
            best_cost,
            iteration: 0,
        }
    }

    /// Fresh random state and empty memory. The aspiration reference is
    /// kept across periodic restarts and reset on success.
    fn reinitialize(&mut self, reset_best: bool) {
        self.state = GraphState::random(self.config.n, self.config.k, &self.eval, &mut self.rng);
        self.memory.clear();
        if reset_best {
            self.best_cost = self.state.cost;
        }
    }
}

impl Strategy for TabuStrategy {
    fn step(&mut self) -> StepOutcome {
        self.iteration += 1;

        // Periodic unconditional restart, progress or not.
        if self.iteration % self.config.restart_interval == 0 {
            self.reinitialize(false);
            return StepOutcome::Continue;
        }

        let moves = sample_pairs(self.config.n, self.config.batch_size, &mut self.rng);

        // Score the whole batch, then pick the lowest-cost admissible move.
        let mut accepted = None;
        let mut accepted_cost = f64::INFINITY;
        for mv in moves {
            let mut candidate = self.state.matrix.clone();
            candidate.toggle(mv.u(), mv.v());
            let cost = self.eval.cost(&candidate);

            let admissible = !self.memory.contains(mv)
                || cost < self.best_cost - self.config.aspiration_margin;
            if admissible && cost < accepted_cost {
                accepted_cost = cost;
                accepted = Some((mv, candidate));
            }
        }

        // All candidates tabu without aspiration: no-op, no tabu update.
        let Some((mv, matrix)) = accepted else {
            return StepOutcome::Continue;
        };

        self.memory.push(mv);
        self.state = GraphState {
            matrix,
            cost: accepted_cost,
        };

        if accepted_cost < self.config.success_tolerance {
            let found = self.state.matrix.clone();
            self.reinitialize(true);
            return StepOutcome::Found(vec![found]);
        }

        if accepted_cost < self.best_cost {
            self.best_cost = accepted_cost;
        }
        StepOutcome::Continue
    }

    fn restart(&mut self) {
        self.reinitialize(true);
    }

    fn best_cost(&self) -> f64 {
        self.best_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::StepOutcome;

    #[test]
    fn test_memory_stays_within_tenure() {
        let mut strategy = TabuStrategy::new(
            TabuConfig::new(6, 7)
                .with_tabu_tenure(5)
                .with_seed(42),
        );
        for _ in 0..300 {
            strategy.step();
            assert!(strategy.memory.len() <= 5);
        }
    }

    #[test]
    fn test_accepted_moves_are_recorded() {
        let mut strategy = TabuStrategy::new(TabuConfig::new(8, 10).with_seed(7));
        for _ in 0..50 {
            strategy.step();
        }
        assert!(!strategy.memory.is_empty());
    }

    #[test]
    fn test_periodic_restart_clears_memory() {
        let mut strategy = TabuStrategy::new(
            TabuConfig::new(6, 7)
                .with_restart_interval(10)
                .with_seed(3),
        );
        for _ in 0..10 {
            strategy.step();
        }
        // Iteration 10 is the unconditional restart.
        assert!(strategy.memory.is_empty());
    }

    #[test]
    fn test_periodic_restart_keeps_aspiration_reference() {
        let mut strategy = TabuStrategy::new(
            TabuConfig::new(6, 7)
                .with_restart_interval(10)
                .with_seed(3),
        );
        for _ in 0..9 {
            strategy.step();
        }
        let best_before = strategy.best_cost;
        strategy.step();
        assert_eq!(strategy.best_cost, best_before);
    }

    #[test]
    fn test_finds_k4_from_one_edge_away() {
        // Every 5-edge graph on 4 vertices is K4 minus one edge; flipping
        // the missing pair yields the integral K4. With a generous batch
        // the improving flip is sampled almost immediately.
        let mut strategy = TabuStrategy::new(
            TabuConfig::new(4, 5)
                .with_batch_size(30)
                .with_seed(11),
        );
        let mut found = None;
        for _ in 0..200 {
            if let StepOutcome::Found(graphs) = strategy.step() {
                found = Some(graphs);
                break;
            }
        }
        let graphs = found.expect("tabu search should reach K4");
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].edge_count(), 6);
        assert!(EigenCost::default().cost(&graphs[0]) < 1e-7);
    }

    #[test]
    fn test_success_resets_state_and_memory() {
        let mut strategy = TabuStrategy::new(
            TabuConfig::new(4, 5)
                .with_batch_size(30)
                .with_seed(11),
        );
        for _ in 0..200 {
            if let StepOutcome::Found(_) = strategy.step() {
                assert!(strategy.memory.is_empty());
                assert_eq!(strategy.state.matrix.edge_count(), 5);
                return;
            }
        }
        panic!("expected a discovery");
    }

    #[test]
    fn test_best_cost_never_regresses_between_restarts() {
        let mut strategy = TabuStrategy::new(TabuConfig::new(7, 10).with_seed(19));
        let mut previous = strategy.best_cost();
        for _ in 0..500 {
            match strategy.step() {
                StepOutcome::Found(_) => previous = strategy.best_cost(),
                _ => {
                    assert!(strategy.best_cost() <= previous + 1e-12);
                    previous = strategy.best_cost();
                }
            }
        }
    }
}
