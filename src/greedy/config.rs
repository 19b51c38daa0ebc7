//! Greedy hill-climbing configuration.

/// Configuration parameters for greedy hill-climbing.
///
/// # Examples
///
/// ```
/// use integraph::greedy::GreedyConfig;
///
/// let config = GreedyConfig::new(9, 14).with_neighbors_to_check(40);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GreedyConfig {
    /// Vertex count.
    pub n: usize,
    /// Edge count of the initial random graphs; edge swaps preserve it.
    pub k: usize,
    /// Swap neighbors sampled per step; the cheapest is considered.
    pub neighbors_to_check: usize,
    /// Step cap per attempt before it is abandoned.
    pub max_steps: usize,
    /// Costs below this are treated as integral and emitted.
    pub success_tolerance: f64,
    /// Random seed (None for entropy).
    pub seed: Option<u64>,
}

impl GreedyConfig {
    /// Creates a configuration for graphs on `n` vertices with `k` edges.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            neighbors_to_check: 20,
            max_steps: 100,
            success_tolerance: 1e-7,
            seed: None,
        }
    }

    /// Sets the number of neighbors sampled per step.
    pub fn with_neighbors_to_check(mut self, count: usize) -> Self {
        self.neighbors_to_check = count;
        self
    }

    /// Sets the per-attempt step cap.
    pub fn with_max_steps(mut self, steps: usize) -> Self {
        self.max_steps = steps;
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
        if self.neighbors_to_check == 0 {
            return Err("neighbors_to_check must be positive".into());
        }
        if self.max_steps == 0 {
            return Err("max_steps must be positive".into());
        }
        if self.success_tolerance <= 0.0 {
            return Err("success_tolerance must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GreedyConfig::new(8, 11);
        assert_eq!(config.neighbors_to_check, 20);
        assert_eq!(config.max_steps, 100);
        assert!((config.success_tolerance - 1e-7).abs() < 1e-15);
    }

    #[test]
    fn test_validate() {
        assert!(GreedyConfig::new(6, 9).validate().is_ok());
        assert!(GreedyConfig::new(1, 0).validate().is_err());
        assert!(GreedyConfig::new(4, 7).validate().is_err());
        assert!(GreedyConfig::new(6, 9)
            .with_neighbors_to_check(0)
            .validate()
            .is_err());
        assert!(GreedyConfig::new(6, 9).with_max_steps(0).validate().is_err());
    }
}
