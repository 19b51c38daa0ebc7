//! Ant-colony construction.
//!
//! A population strategy: each generation a fixed number of ants
//! independently build candidate graphs by sampling exactly `k` edges
//! without replacement, weighted by a learned pheromone matrix. After the
//! generation the pheromones evaporate, the best few ants reinforce the
//! edges they used, and the matrix is clamped into a fixed range. A
//! stagnation counter forces a full pheromone reset when the global best
//! stops improving, as does every success.
//!
//! # References
//!
//! - Dorigo, M. & Stützle, T. (2004). *Ant Colony Optimization*, MIT Press.

mod config;
mod pheromone;
mod runner;

pub use config::AcoConfig;
pub use pheromone::PheromoneMatrix;
pub use runner::AcoStrategy;
