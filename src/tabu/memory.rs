//! Short-term move memory.

use std::collections::{HashSet, VecDeque};

use crate::neighborhood::Move;

/// Bounded FIFO of recently forbidden moves.
///
/// A queue preserves recency order for eviction; a set gives O(1)
/// membership tests. Length never exceeds the tenure: pushing past
/// capacity evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct TabuMemory {
    tenure: usize,
    queue: VecDeque<Move>,
    set: HashSet<Move>,
}

impl TabuMemory {
    /// Creates an empty memory with the given tenure.
    pub fn new(tenure: usize) -> Self {
        Self {
            tenure,
            queue: VecDeque::with_capacity(tenure),
            set: HashSet::with_capacity(tenure),
        }
    }

    /// Whether `mv` is currently forbidden.
    pub fn contains(&self, mv: Move) -> bool {
        self.set.contains(&mv)
    }

    /// Records an accepted move, evicting the oldest past capacity.
    pub fn push(&mut self, mv: Move) {
        if self.queue.len() >= self.tenure {
            if let Some(oldest) = self.queue.pop_front() {
                self.set.remove(&oldest);
            }
        }
        self.queue.push_back(mv);
        self.set.insert(mv);
    }

    /// Forgets everything (restart).
    pub fn clear(&mut self) {
        self.queue.clear();
        self.set.clear();
    }

    /// Number of forbidden moves.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the memory is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
