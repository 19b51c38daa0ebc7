//! The shared search loop.
//!
//! One budget-bounded, single-threaded loop serves all four strategies:
//! each iteration asks the strategy for one step, emits whatever the step
//! discovered, and restarts the strategy when it reports itself stuck.
//! Cancellation is cooperative, checked between steps only — never in the
//! middle of a candidate evaluation — so an interrupted run terminates
//! cleanly without partial output.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::emit::{EmitOutcome, ResultEmitter};
use crate::graph::AdjacencyMatrix;

/// What a single strategy step produced.
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// Nothing to report; keep stepping.
    Continue,
    /// One or more graphs scored below the success tolerance. The
    /// strategy has already reset itself, so emitting and stepping on
    /// cannot rediscover the same basin immediately.
    Found(Vec<AdjacencyMatrix>),
    /// The current attempt cannot make progress (e.g. greedy local
    /// optimum); the driver restarts the strategy and keeps going.
    Stuck,
}

/// One acceptance behavior plugged into [`SearchRunner`].
///
/// A strategy owns its complete run context — current state, RNG, move
/// memory or pheromones, best record — and exposes exactly one stepping
/// capability. The driver loop is identical across implementations.
pub trait Strategy {
    /// Advances the search by one iteration (or generation).
    fn step(&mut self) -> StepOutcome;

    /// Reinitializes the working state from a fresh random construction
    /// and clears any move memory or learned weights. Does not touch the
    /// driver's iteration budget.
    fn restart(&mut self);

    /// Best cost observed so far.
    fn best_cost(&self) -> f64;
}

/// Driver configuration.
///
/// # Examples
///
/// ```
/// use integraph::driver::SearchConfig;
///
/// let config = SearchConfig::default().with_max_iterations(5000);
/// assert_eq!(config.max_iterations, 5000);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Iteration (or generation) budget for the whole run. Restarts
    /// consume iterations from this same budget.
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
        }
    }
}

impl SearchConfig {
    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".into());
        }
        Ok(())
    }
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Iterations actually executed.
    pub iterations: usize,
    /// Graphs emitted.
    pub discovered: usize,
    /// Best cost the strategy observed.
    pub best_cost: f64,
    /// Whether the run was cancelled externally.
    pub cancelled: bool,
    /// Whether the downstream consumer closed the output stream.
    pub output_closed: bool,
}

/// Executes a strategy against an output stream.
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search to its budget.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`SearchConfig::validate`] first to get a descriptive error).
    pub fn run<S: Strategy, W: Write>(
        strategy: &mut S,
        config: &SearchConfig,
        writer: W,
    ) -> io::Result<SearchResult> {
        Self::run_with_cancel(strategy, config, writer, None)
    }

    /// Runs the search with an optional cancellation token, checked
    /// between iterations.
    pub fn run_with_cancel<S: Strategy, W: Write>(
        strategy: &mut S,
        config: &SearchConfig,
        writer: W,
        cancel: Option<Arc<AtomicBool>>,
    ) -> io::Result<SearchResult> {
        config.validate().expect("invalid SearchConfig");

        let mut emitter = ResultEmitter::new(writer);
        let mut iterations = 0;
        let mut cancelled = false;
        let mut output_closed = false;

        'search: for _ in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let outcome = strategy.step();
            iterations += 1;

            match outcome {
                StepOutcome::Continue => {}
                StepOutcome::Found(matrices) => {
                    for matrix in &matrices {
                        if emitter.emit(matrix)? == EmitOutcome::Closed {
                            output_closed = true;
                            break 'search;
                        }
                    }
                }
                StepOutcome::Stuck => strategy.restart(),
            }
        }

        Ok(SearchResult {
            iterations,
            discovered: emitter.emitted(),
            best_cost: strategy.best_cost(),
            cancelled,
            output_closed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::EigenCost;
    use crate::graph6;
    use crate::tabu::{TabuConfig, TabuStrategy};
    use std::io::ErrorKind;

    struct ScriptedStrategy {
        script: Vec<StepOutcome>,
        at: usize,
        restarts: usize,
    }

    impl ScriptedStrategy {
        fn new(script: Vec<StepOutcome>) -> Self {
            Self {
                script,
                at: 0,
                restarts: 0,
            }
        }
    }

    impl Strategy for ScriptedStrategy {
        fn step(&mut self) -> StepOutcome {
            let outcome = self.script.get(self.at).cloned();
            self.at += 1;
            outcome.unwrap_or(StepOutcome::Continue)
        }
        fn restart(&mut self) {
            self.restarts += 1;
        }
        fn best_cost(&self) -> f64 {
            0.0
        }
    }

    fn k4() -> AdjacencyMatrix {
        let mut m = AdjacencyMatrix::new(4);
        for (u, v) in AdjacencyMatrix::all_pairs(4) {
            m.set_edge(u, v, true);
        }
        m
    }

    #[test]
    fn test_budget_is_honored() {
        let mut strategy = ScriptedStrategy::new(vec![]);
        let config = SearchConfig::default().with_max_iterations(37);
        let result = SearchRunner::run(&mut strategy, &config, Vec::new()).unwrap();
        assert_eq!(result.iterations, 37);
        assert_eq!(result.discovered, 0);
    }

    #[test]
    fn test_found_graphs_are_emitted_in_order() {
        let mut strategy = ScriptedStrategy::new(vec![
            StepOutcome::Found(vec![k4()]),
            StepOutcome::Continue,
            StepOutcome::Found(vec![AdjacencyMatrix::new(4), k4()]),
        ]);
        let config = SearchConfig::default().with_max_iterations(5);
        let mut out = Vec::new();
        let result = SearchRunner::run(&mut strategy, &config, &mut out).unwrap();
        assert_eq!(result.discovered, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "C~\nC?\nC~\n");
    }

    #[test]
    fn test_stuck_triggers_restart() {
        let mut strategy = ScriptedStrategy::new(vec![
            StepOutcome::Stuck,
            StepOutcome::Stuck,
            StepOutcome::Continue,
        ]);
        let config = SearchConfig::default().with_max_iterations(3);
        SearchRunner::run(&mut strategy, &config, Vec::new()).unwrap();
        assert_eq!(strategy.restarts, 2);
    }

    #[test]
    fn test_cancellation_between_iterations() {
        let mut strategy = ScriptedStrategy::new(vec![]);
        let config = SearchConfig::default().with_max_iterations(1_000_000);
        // Flag set before running: deterministic cancellation on the
        // first check regardless of strategy speed.
        let cancel = Arc::new(AtomicBool::new(true));
        let result =
            SearchRunner::run_with_cancel(&mut strategy, &config, Vec::new(), Some(cancel))
                .unwrap();
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_closed_pipe_stops_run_orderly() {
        let mut strategy = ScriptedStrategy::new(vec![StepOutcome::Found(vec![k4()])]);
        let config = SearchConfig::default().with_max_iterations(100);
        let result = SearchRunner::run(&mut strategy, &config, ClosedPipe).unwrap();
        assert!(result.output_closed);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.discovered, 0);
    }

    #[test]
    #[should_panic]
    fn test_zero_budget_panics() {
        let mut strategy = ScriptedStrategy::new(vec![]);
        let config = SearchConfig { max_iterations: 0 };
        let _ = SearchRunner::run(&mut strategy, &config, Vec::new());
    }

    #[test]
    fn test_tabu_end_to_end_emits_only_verified_graphs() {
        // n=6, k=9, budget 5000, fixed seed: the run must stay in budget
        // and every emitted line must re-evaluate below 1e-6.
        let tabu_config = TabuConfig::new(6, 9).with_seed(1234);
        let mut strategy = TabuStrategy::new(tabu_config);
        let config = SearchConfig::default().with_max_iterations(5000);

        let mut out = Vec::new();
        let result = SearchRunner::run(&mut strategy, &config, &mut out).unwrap();
        assert!(result.iterations <= 5000);

        let eval = EigenCost::default();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), result.discovered);
        for line in lines {
            let matrix = graph6::decode(line).unwrap();
            assert_eq!(matrix.n(), 6);
            assert!(eval.cost(&matrix) < 1e-6);
        }
    }
}
