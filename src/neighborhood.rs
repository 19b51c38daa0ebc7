//! Neighborhood generation: edge flips, bounded edge swaps, batch pair
//! sampling.
//!
//! Two mutation modes feed the strategies: a plain flip of one random
//! pair's edge status (tabu neighborhood, not degree-preserving) and an
//! edge swap that removes a present edge and adds a missing one
//! (annealing and greedy neighborhoods, edge-count preserving). The swap's
//! "find a non-edge" search is bounded so it terminates even on
//! near-complete graphs.

use std::collections::HashSet;

use rand::Rng;

use crate::graph::AdjacencyMatrix;

/// Attempt cap for the non-edge search inside [`swap_random_edge`].
pub const SWAP_ATTEMPTS: usize = 50;

/// An unordered pair of distinct vertices, the unit of mutation.
///
/// Normalized so `u() < v()`, making `flip(3, 7)` and `flip(7, 3)` the
/// same move for tabu-memory purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    a: usize,
    b: usize,
}

impl Move {
    /// Creates a move on the pair `{u, v}`. Panics if `u == v`.
    pub fn new(u: usize, v: usize) -> Self {
        assert_ne!(u, v, "a move needs two distinct vertices");
        Self {
            a: u.min(v),
            b: u.max(v),
        }
    }

    /// Smaller endpoint.
    pub fn u(&self) -> usize {
        self.a
    }

    /// Larger endpoint.
    pub fn v(&self) -> usize {
        self.b
    }
}

/// Draws one uniformly random pair of distinct vertices.
pub fn random_pair<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Move {
    assert!(n >= 2, "need at least two vertices to form a pair");
    let u = rng.random_range(0..n);
    let mut v = rng.random_range(0..n);
    while v == u {
        v = rng.random_range(0..n);
    }
    Move::new(u, v)
}

/// Flips the edge status of one random pair in place and returns the move.
pub fn flip_random_pair<R: Rng + ?Sized>(matrix: &mut AdjacencyMatrix, rng: &mut R) -> Move {
    let mv = random_pair(matrix.n(), rng);
    matrix.toggle(mv.u(), mv.v());
    mv
}

/// Returns a copy with one random present edge moved to a random non-edge.
///
/// Removes a uniformly random edge, then draws random pairs up to
/// [`SWAP_ATTEMPTS`] times looking for a missing edge to add. If the graph
/// has no edges, or no non-edge is found within the cap, the input is
/// returned unchanged — a no-op step, never an invalid state.
pub fn swap_random_edge<R: Rng + ?Sized>(matrix: &AdjacencyMatrix, rng: &mut R) -> AdjacencyMatrix {
    let mut out = matrix.clone();
    let edges = out.edges();
    let Some(&(u, v)) = pick(&edges, rng) else {
        return out;
    };
    out.set_edge(u, v, false);

    for _ in 0..SWAP_ATTEMPTS {
        let mv = random_pair(out.n(), rng);
        if !out.has_edge(mv.u(), mv.v()) {
            out.set_edge(mv.u(), mv.v(), true);
            return out;
        }
    }

    // Exhausted: put the removed edge back.
    out.set_edge(u, v, true);
    out
}

/// Draws `s` random unordered pairs with duplicates removed.
///
/// Used by tabu search to propose a batch of flip moves per iteration.
/// Near the full pair count deduplication can shrink the batch below `s`;
/// accepted, not corrected.
pub fn sample_pairs<R: Rng + ?Sized>(n: usize, s: usize, rng: &mut R) -> Vec<Move> {
    let mut seen = HashSet::with_capacity(s);
    let mut out = Vec::with_capacity(s);
    for _ in 0..s {
        let mv = random_pair(n, rng);
        if seen.insert(mv) {
            out.push(mv);
        }
    }
    out
}

fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.random_range(0..items.len())])
    }
}
