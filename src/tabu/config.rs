//! Tabu Search configuration.

/// Configuration parameters for tabu search over edge flips.
///
/// # Examples
///
/// ```
/// use integraph::tabu::TabuConfig;
///
/// let config = TabuConfig::new(8, 12)
///     .with_tabu_tenure(10)
///     .with_batch_size(16);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TabuConfig {
    /// Vertex count.
    pub n: usize,
    /// Edge count of the initial random graphs.
    pub k: usize,
    /// How many accepted moves stay forbidden.
    pub tabu_tenure: usize,
    /// Candidate flip moves scored per iteration (before deduplication).
    pub batch_size: usize,
    /// A tabu move is admitted anyway when its cost beats the best seen
    /// by more than this margin.
    pub aspiration_margin: f64,
    /// Unconditional restart every this many iterations.
    pub restart_interval: usize,
    /// Costs below this are treated as integral and emitted.
    pub success_tolerance: f64,
    /// Random seed (None for entropy).
    pub seed: Option<u64>,
}

impl TabuConfig {
    /// Creates a configuration for graphs on `n` vertices with `k`-edge
    /// initial states.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            tabu_tenure: 15,
            batch_size: 8,
            aspiration_margin: 1e-3,
            restart_interval: 2000,
            success_tolerance: 1e-7,
            seed: None,
        }
    }

    /// Sets the tabu tenure.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the candidate batch size.
    pub fn with_batch_size(mut self, s: usize) -> Self {
        self.batch_size = s;
        self
    }

    /// Sets the aspiration margin.
    pub fn with_aspiration_margin(mut self, margin: f64) -> Self {
        self.aspiration_margin = margin;
        self
    }

    /// Sets the unconditional restart interval.
    pub fn with_restart_interval(mut self, interval: usize) -> Self {
        self.restart_interval = interval;
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
        if self.tabu_tenure == 0 {
            return Err("tabu_tenure must be positive".into());
        }
        if self.batch_size == 0 {
            return Err("batch_size must be positive".into());
        }
        if self.restart_interval == 0 {
            return Err("restart_interval must be positive".into());
        }
        if self.aspiration_margin < 0.0 {
            return Err("aspiration_margin must be non-negative".into());
        }
        if self.success_tolerance <= 0.0 {
            return Err("success_tolerance must be positive".into());
        }
        Ok(())
    }
}
