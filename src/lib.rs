//! Metaheuristic search for integral graphs.
//!
//! An *integral graph* is a simple undirected graph whose adjacency-matrix
//! eigenvalues are all integers. This crate searches the space of graphs on
//! a fixed vertex count for such graphs by driving a continuous cost — the
//! total distance of the spectrum from the nearest integers — toward zero
//! with one of four interchangeable local-search strategies:
//!
//! - **Tabu Search**: batch candidate moves with short-term move memory
//!   (tabu list) and an aspiration override.
//! - **Simulated Annealing**: Metropolis acceptance under a geometric
//!   cooling schedule with reheating.
//! - **Greedy Hill-Climbing**: best-of-N neighbor sampling with strict
//!   improvement only; stuck attempts are abandoned and restarted.
//! - **Ant Colony**: population construction by pheromone-weighted edge
//!   sampling with evaporation, elite reinforcement, and stagnation resets.
//!
//! # Architecture
//!
//! All strategies share one scaffold: [`graph::GraphState`] (adjacency
//! matrix plus cached cost), [`cost::EigenCost`] (the spectral objective),
//! [`neighborhood`] (edge flips, bounded edge swaps, batch pair sampling),
//! and the [`driver::Strategy`] trait consumed by [`driver::SearchRunner`],
//! a single budget-bounded loop that emits every discovery as a headerless
//! graph6 line through [`emit::ResultEmitter`] and restarts strategies that
//! report themselves stuck. The driver is identical across strategies; only
//! the acceptance behavior differs.
//!
//! The search is heuristic: a cost below the configured tolerance is
//! treated as success, not proven integrality. Downstream consumers are
//! expected to re-verify emitted graphs.

pub mod aco;
pub mod annealing;
pub mod cost;
pub mod driver;
pub mod emit;
pub mod graph;
pub mod graph6;
pub mod greedy;
pub mod neighborhood;
pub mod random;
pub mod tabu;
