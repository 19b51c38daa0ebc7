//! Ant-colony configuration.

/// Configuration parameters for ant-colony construction.
///
/// # Examples
///
/// ```
/// use integraph::aco::AcoConfig;
///
/// let config = AcoConfig::new(9, 14).with_ants_per_generation(30);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AcoConfig {
    /// Vertex count.
    pub n: usize,
    /// Edges each ant selects.
    pub k: usize,
    /// Ants constructed per generation.
    pub ants_per_generation: usize,
    /// Fraction of pheromone lost per generation.
    pub evaporation_rate: f64,
    /// Learning rate scaling each elite deposit.
    pub deposit_scale: f64,
    /// How many of the generation's best ants deposit.
    pub elite_count: usize,
    /// Lower clamp for pheromone entries.
    pub pheromone_min: f64,
    /// Upper clamp for pheromone entries.
    pub pheromone_max: f64,
    /// Generations without a new global best before the pheromones reset.
    pub stagnation_limit: usize,
    /// Costs below this are treated as integral and emitted.
    pub success_tolerance: f64,
    /// Random seed (None for entropy).
    pub seed: Option<u64>,
}

impl AcoConfig {
    /// Creates a configuration for ants building `k`-edge graphs on `n`
    /// vertices.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            ants_per_generation: 20,
            evaporation_rate: 0.1,
            deposit_scale: 0.1,
            elite_count: 3,
            pheromone_min: 0.01,
            pheromone_max: 100.0,
            stagnation_limit: 150,
            success_tolerance: 1e-7,
            seed: None,
        }
    }

    /// Sets the number of ants per generation.
    pub fn with_ants_per_generation(mut self, ants: usize) -> Self {
        self.ants_per_generation = ants;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    /// Sets the deposit learning rate.
    pub fn with_deposit_scale(mut self, scale: f64) -> Self {
        self.deposit_scale = scale;
        self
    }

    /// Sets how many elite ants deposit.
    pub fn with_elite_count(mut self, count: usize) -> Self {
        self.elite_count = count;
        self
    }

    /// Sets the pheromone clamp range.
    pub fn with_pheromone_range(mut self, min: f64, max: f64) -> Self {
        self.pheromone_min = min;
        self.pheromone_max = max;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_stagnation_limit(mut self, generations: usize) -> Self {
        self.stagnation_limit = generations;
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
        if self.ants_per_generation == 0 {
            return Err("ants_per_generation must be positive".into());
        }
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(format!(
                "evaporation_rate must be in [0, 1), got {}",
                self.evaporation_rate
            ));
        }
        if self.deposit_scale <= 0.0 {
            return Err("deposit_scale must be positive".into());
        }
        if self.elite_count == 0 {
            return Err("elite_count must be positive".into());
        }
        if self.pheromone_min <= 0.0 || self.pheromone_min >= self.pheromone_max {
            return Err("pheromone range must satisfy 0 < min < max".into());
        }
        if self.stagnation_limit == 0 {
            return Err("stagnation_limit must be positive".into());
        }
        if self.success_tolerance <= 0.0 {
            return Err("success_tolerance must be positive".into());
        }
        Ok(())
    }
}
