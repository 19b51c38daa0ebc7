//! Tabu Search over edge flips.
//!
//! A single-solution trajectory strategy with short-term memory: each
//! iteration scores a batch of random edge flips and takes the best one
//! that is not tabu, unless the move beats the best cost seen so far
//! (aspiration). Accepted moves are always recorded in the tabu memory —
//! aspiration admissions included, so a structurally similar move is
//! still disincentivized right after. Periodic unconditional restarts
//! escape basins that have gone stale.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;

pub use config::TabuConfig;
pub use memory::TabuMemory;
pub use runner::TabuStrategy;
