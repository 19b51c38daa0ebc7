//! Candidate graph representation.
//!
//! [`AdjacencyMatrix`] stores a simple undirected graph as a dense,
//! symmetric 0/1 matrix with a zero diagonal; every mutation goes through
//! [`AdjacencyMatrix::set_edge`] or [`AdjacencyMatrix::toggle`], which keep
//! both triangles in sync. [`GraphState`] pairs a matrix with its evaluated
//! cost so strategies never carry a stale cache.

mod adjacency;
mod state;

pub use adjacency::AdjacencyMatrix;
pub use state::GraphState;
