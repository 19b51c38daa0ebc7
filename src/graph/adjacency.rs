//! Dense symmetric adjacency matrix.

use rand::seq::index;
use rand::Rng;

/// Adjacency matrix of a simple undirected graph on `n` vertices.
///
/// Entries are 0/1, the diagonal is always zero, and `M[u][v] == M[v][u]`
/// is maintained by construction: the only mutators are [`set_edge`] and
/// [`toggle`], which write both triangles.
///
/// [`set_edge`]: AdjacencyMatrix::set_edge
/// [`toggle`]: AdjacencyMatrix::toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    bits: Vec<u8>,
}

impl AdjacencyMatrix {
    /// Creates the empty graph on `n` vertices.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            bits: vec![0; n * n],
        }
    }

    /// Creates a uniformly random graph with exactly `k` edges.
    ///
    /// Vertex pairs are drawn without replacement from all `n(n-1)/2`
    /// unordered pairs. Panics if `k` exceeds the pair count; configs
    /// validate this before any state is built.
    pub fn gnm_random<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Self {
        let pairs = Self::all_pairs(n);
        assert!(
            k <= pairs.len(),
            "k = {k} exceeds the {} unordered pairs on {n} vertices",
            pairs.len()
        );
        let mut m = Self::new(n);
        for idx in index::sample(rng, pairs.len(), k) {
            let (u, v) = pairs[idx];
            m.set_edge(u, v, true);
        }
        m
    }

    /// All unordered vertex pairs `(u, v)` with `u < v`.
    pub fn all_pairs(n: usize) -> Vec<(usize, usize)> {
        let mut pairs = Vec::with_capacity(n * (n.saturating_sub(1)) / 2);
        for u in 0..n {
            for v in (u + 1)..n {
                pairs.push((u, v));
            }
        }
        pairs
    }

    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Whether the edge `{u, v}` is present. The diagonal is never set.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.bits[u * self.n + v] != 0
    }

    /// Adds or removes the edge `{u, v}`, writing both triangles.
    pub fn set_edge(&mut self, u: usize, v: usize, present: bool) {
        assert_ne!(u, v, "self-loops are not representable");
        let bit = u8::from(present);
        self.bits[u * self.n + v] = bit;
        self.bits[v * self.n + u] = bit;
    }

    /// Flips the edge status of `{u, v}` and returns the new status.
    pub fn toggle(&mut self, u: usize, v: usize) -> bool {
        let now = !self.has_edge(u, v);
        self.set_edge(u, v, now);
        now
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        let mut count = 0;
        for u in 0..self.n {
            for v in (u + 1)..self.n {
                count += usize::from(self.has_edge(u, v));
            }
        }
        count
    }

    /// All present edges as `(u, v)` with `u < v`.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(self.edge_count());
        for u in 0..self.n {
            for v in (u + 1)..self.n {
                if self.has_edge(u, v) {
                    out.push((u, v));
                }
            }
        }
        out
    }

    /// Returns a copy with vertices relabeled by `perm` (vertex `i` maps
    /// to `perm[i]`).
    pub fn relabel(&self, perm: &[usize]) -> Self {
        assert_eq!(perm.len(), self.n);
        let mut out = Self::new(self.n);
        for (u, v) in self.edges() {
            out.set_edge(perm[u], perm[v], true);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use rand::Rng;

    #[test]
    fn test_empty_matrix() {
        let m = AdjacencyMatrix::new(5);
        assert_eq!(m.n(), 5);
        assert_eq!(m.edge_count(), 0);
        assert!(m.edges().is_empty());
    }

    #[test]
    fn test_set_and_toggle_symmetric() {
        let mut m = AdjacencyMatrix::new(4);
        m.set_edge(1, 3, true);
        assert!(m.has_edge(1, 3));
        assert!(m.has_edge(3, 1));
        assert!(!m.toggle(3, 1));
        assert!(!m.has_edge(1, 3));
    }

    #[test]
    #[should_panic]
    fn test_self_loop_rejected() {
        let mut m = AdjacencyMatrix::new(4);
        m.set_edge(2, 2, true);
    }

    #[test]
    fn test_gnm_exact_edge_count() {
        let mut rng = create_rng(42);
        for k in [0, 1, 5, 10] {
            let m = AdjacencyMatrix::gnm_random(5, k, &mut rng);
            assert_eq!(m.edge_count(), k);
        }
    }

    #[test]
    #[should_panic]
    fn test_gnm_too_many_edges() {
        let mut rng = create_rng(42);
        AdjacencyMatrix::gnm_random(4, 7, &mut rng);
    }

    #[test]
    fn test_all_pairs_count() {
        assert_eq!(AdjacencyMatrix::all_pairs(6).len(), 15);
        assert!(AdjacencyMatrix::all_pairs(1).is_empty());
    }

    #[test]
    fn test_relabel_preserves_edge_count() {
        let mut rng = create_rng(7);
        let m = AdjacencyMatrix::gnm_random(6, 8, &mut rng);
        let relabeled = m.relabel(&[5, 4, 3, 2, 1, 0]);
        assert_eq!(relabeled.edge_count(), 8);
    }

    fn is_valid(m: &AdjacencyMatrix) -> bool {
        for u in 0..m.n() {
            if m.has_edge(u, u) {
                return false;
            }
            for v in 0..m.n() {
                if m.has_edge(u, v) != m.has_edge(v, u) {
                    return false;
                }
            }
        }
        true
    }

    proptest! {
        #[test]
        fn prop_gnm_symmetric_zero_diagonal(n in 2usize..12, seed in any::<u64>()) {
            let pairs = n * (n - 1) / 2;
            let mut rng = create_rng(seed);
            let k = (seed as usize) % (pairs + 1);
            let m = AdjacencyMatrix::gnm_random(n, k, &mut rng);
            prop_assert!(is_valid(&m));
            prop_assert_eq!(m.edge_count(), k);
        }

        #[test]
        fn prop_toggle_keeps_invariants(n in 2usize..10, seed in any::<u64>(), flips in 1usize..32) {
            let mut rng = create_rng(seed);
            let mut m = AdjacencyMatrix::new(n);
            for _ in 0..flips {
                let u = rng.random_range(0..n);
                let mut v = rng.random_range(0..n);
                while v == u {
                    v = rng.random_range(0..n);
                }
                m.toggle(u, v);
                prop_assert!(is_valid(&m));
            }
        }
    }
}
