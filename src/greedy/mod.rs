//! Greedy hill-climbing over edge swaps.
//!
//! Best-of-N sampling with strict improvement only: each step draws a
//! fixed number of swap neighbors, keeps the cheapest, and accepts it
//! only if it is strictly better than the current state. A step with no
//! improving neighbor abandons the attempt rather than moving sideways —
//! the driver restarts fresh attempts cheaply, which beats grinding in a
//! local minimum.

mod config;
mod runner;

pub use config::GreedyConfig;
pub use runner::GreedyStrategy;
