//! Simulated Annealing configuration.

/// Configuration parameters for simulated annealing over edge swaps.
///
/// # Examples
///
/// ```
/// use integraph::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::new(10, 15)
///     .with_initial_temperature(2.0)
///     .with_attempt_steps(5000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealingConfig {
    /// Vertex count.
    pub n: usize,
    /// Edge count of the initial random graphs; edge swaps preserve it.
    pub k: usize,
    /// Starting temperature of each attempt.
    pub initial_temperature: f64,
    /// Geometric decay factor per step.
    pub decay: f64,
    /// Below this the temperature reheats to half the initial value.
    pub reheat_floor: f64,
    /// Step budget per attempt; the attempt's final state is re-checked
    /// against the tolerance when it runs out.
    pub attempt_steps: usize,
    /// Costs below this are treated as integral and emitted.
    pub success_tolerance: f64,
    /// Random seed (None for entropy).
    pub seed: Option<u64>,
}

impl AnnealingConfig {
    /// Creates a configuration for graphs on `n` vertices with `k` edges.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            initial_temperature: 1.5,
            decay: 0.99,
            reheat_floor: 1e-3,
            attempt_steps: 2500,
            success_tolerance: 1e-7,
            seed: None,
        }
    }

    /// Sets the initial temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the geometric decay factor.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Sets the reheat floor.
    pub fn with_reheat_floor(mut self, floor: f64) -> Self {
        self.reheat_floor = floor;
        self
    }

    /// Sets the per-attempt step budget.
    pub fn with_attempt_steps(mut self, steps: usize) -> Self {
        self.attempt_steps = steps;
        self
    }

    /// Sets the success tolerance.
    pub fn with_success_tolerance(mut self, tol: f64) -> Self {
        self.success_tolerance = tol;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.n < 2 {
            return Err("n must be at least 2".into());
        }
        let pairs = self.n * (self.n - 1) / 2;
        if self.k > pairs {
            return Err(format!("k = {} exceeds the {pairs} vertex pairs", self.k));
        }
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.decay <= 0.0 || self.decay >= 1.0 {
            return Err(format!("decay must be in (0, 1), got {}", self.decay));
        }
        if self.reheat_floor <= 0.0 || self.reheat_floor >= self.initial_temperature {
            return Err("reheat_floor must be in (0, initial_temperature)".into());
        }
        if self.attempt_steps == 0 {
            return Err("attempt_steps must be positive".into());
        }
        if self.success_tolerance <= 0.0 {
            return Err("success_tolerance must be positive".into());
        }
        Ok(())
    }
}
