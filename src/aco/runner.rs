//! Ant-colony stepping logic.

use rand::rngs::StdRng;
use rand::Rng;

use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use crate::cost::EigenCost;
use crate::driver::{StepOutcome, Strategy};
use crate::graph::AdjacencyMatrix;
use crate::random::create_rng_opt;

/// Pheromone-guided population construction.
///
/// One step is one generation: every ant samples exactly `k` distinct
/// pairs weighted by pheromone (roulette without replacement, uniform
/// fallback when the open weight mass is zero), successes are collected
/// and trigger an immediate pheromone reset, then the matrix is
/// evaporated, reinforced by the elite ants, and clamped. Stagnation —
/// too many generations without a new global best — also resets the
/// pheromones.
pub struct AcoStrategy {
    config: AcoConfig,
    eval: EigenCost,
    rng: StdRng,
    pheromones: PheromoneMatrix,
    pairs: Vec<(usize, usize)>,
    best_cost: f64,
    stagnation: usize,
}

impl AcoStrategy {
    /// Builds a strategy with uniform pheromones.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`AcoConfig::validate`] first to get a descriptive error).
    pub fn new(config: AcoConfig) -> Self {
        config.validate().expect("invalid AcoConfig");
        let rng = create_rng_opt(config.seed);
        let pheromones = PheromoneMatrix::new(config.n);
        let pairs = AdjacencyMatrix::all_pairs(config.n);
        Self {
            config,
            eval: EigenCost::default(),
            rng,
            pheromones,
            pairs,
            best_cost: f64::INFINITY,
            stagnation: 0,
        }
    }

    /// One ant: `k` pairs drawn without replacement, pheromone-weighted.
    fn construct_ant(&mut self) -> AdjacencyMatrix {
        let mut weights: Vec<f64> = self
            .pairs
            .iter()
            .map(|&(u, v)| self.pheromones.weight(u, v))
            .collect();
        let mut taken = vec![false; self.pairs.len()];
        let mut adj = AdjacencyMatrix::new(self.config.n);

        for _ in 0..self.config.k {
            let open_mass: f64 = weights
                .iter()
                .zip(&taken)
                .filter(|&(_, &t)| !t)
                .map(|(w, _)| *w)
                .sum();

            let pick = if open_mass > 0.0 {
                let mut draw = self.rng.random_range(0.0..open_mass);
                let mut pick = None;
                for i in 0..self.pairs.len() {
                    if taken[i] {
                        continue;
                    }
                    draw -= weights[i];
                    if draw <= 0.0 {
                        pick = Some(i);
                        break;
                    }
                }
                // Rounding can leave a sliver of mass unassigned; fall
                // back to the last open pair.
                pick.unwrap_or_else(|| {
                    (0..self.pairs.len())
                        .rev()
                        .find(|&i| !taken[i])
                        .expect("k <= pair count leaves an open pair")
                })
            } else {
                // Degenerate weights: uniform over the open pairs.
                let open: Vec<usize> = (0..self.pairs.len()).filter(|&i| !taken[i]).collect();
                open[self.rng.random_range(0..open.len())]
            };

            taken[pick] = true;
            weights[pick] = 0.0;
            let (u, v) = self.pairs[pick];
            adj.set_edge(u, v, true);
        }
        adj
    }

    fn reset_learning(&mut self) {
        self.pheromones.reset();
        self.best_cost = f64::INFINITY;
        self.stagnation = 0;
    }
}

impl Strategy for AcoStrategy {
    fn step(&mut self) -> StepOutcome {
        let mut found = Vec::new();
        let mut ants: Vec<(AdjacencyMatrix, f64)> =
            Vec::with_capacity(self.config.ants_per_generation);

        for _ in 0..self.config.ants_per_generation {
            let adj = self.construct_ant();
            let cost = self.eval.cost(&adj);
            if cost < self.config.success_tolerance {
                found.push(adj.clone());
                self.reset_learning();
            }
            ants.push((adj, cost));
        }

        ants.sort_by(|a, b| a.1.total_cmp(&b.1));
        let generation_best = ants[0].1;
        if generation_best < self.best_cost {
            self.best_cost = generation_best;
            self.stagnation = 0;
        } else {
            self.stagnation += 1;
        }

        self.pheromones.evaporate(self.config.evaporation_rate);
        for (adj, cost) in ants.iter().take(self.config.elite_count) {
            if cost.is_finite() {
                let deposit = self.config.deposit_scale / (cost + 0.5);
                self.pheromones.deposit(adj, deposit);
            }
        }
        self.pheromones
            .clamp(self.config.pheromone_min, self.config.pheromone_max);

        if self.stagnation > self.config.stagnation_limit {
            self.reset_learning();
        }

        if found.is_empty() {
            StepOutcome::Continue
        } else {
            StepOutcome::Found(found)
        }
    }

    fn restart(&mut self) {
        self.reset_learning();
    }

    fn best_cost(&self) -> f64 {
        self.best_cost
    }
}
