//! Simulated Annealing over edge swaps.
//!
//! A single-solution trajectory strategy with Metropolis acceptance: an
//! improving neighbor is always taken, a worsening one with probability
//! `exp(-Δcost / T)`. The temperature decays geometrically and reheats to
//! half the initial value when it hits the floor, so a long attempt never
//! freezes completely. Attempts run on a fixed step budget; the final
//! state is re-checked against the tolerance before anything is emitted.
//!
//! # References
//!
//! - Kirkpatrick, S., Gelatt, C. D. & Vecchi, M. P. (1983). "Optimization
//!   by Simulated Annealing", *Science* 220(4598), 671-680.

mod config;
mod runner;
mod temperature;

pub use config::AnnealingConfig;
pub use runner::AnnealingStrategy;
pub use temperature::Temperature;
