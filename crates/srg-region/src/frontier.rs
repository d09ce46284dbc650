//! Frontier priority queue
//!
//! The frontier holds candidate cells at the boundary of the growing
//! regions, ordered by ascending dissimilarity score. Ties are broken
//! by insertion order (FIFO) via a monotonically increasing sequence
//! number, so the pop order is fully deterministic regardless of how
//! the underlying heap arranges equal keys.
//!
//! Entries are never updated in place: a cell reached from several
//! regions simply has several entries, and the engine discards stale
//! ones lazily when popped (the committed check replaces decrease-key).

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// One pending growth proposal
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    /// Dissimilarity of the candidate cell to the proposing region
    pub score: f64,
    /// Insertion sequence number (tie-break key)
    pub seq: u64,
    /// Candidate cell coordinate
    pub cell: (u32, u32, u32),
    /// Proposed region label
    pub label: u32,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Scores are |a - b| of finite inputs, but total_cmp keeps the
        // ordering total even if a NaN ever slipped through.
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue of frontier entries
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a proposal for `cell` to join the region `label`.
    ///
    /// The sequence number is assigned here, so pushes made earlier
    /// always win score ties against later ones.
    pub fn push(&mut self, cell: (u32, u32, u32), label: u32, score: f64) {
        let entry = FrontierEntry {
            score,
            seq: self.next_seq,
            cell,
            label,
        };
        self.next_seq += 1;
        self.heap.push(Reverse(entry));
    }

    /// Pop the entry with the lowest `(score, seq)` key.
    ///
    /// `None` signals an exhausted frontier, which is the normal loop
    /// termination condition.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Number of pending entries (including stale ones).
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no entries remain.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_min_score() {
        let mut frontier = Frontier::new();
        frontier.push((0, 0, 0), 1, 5.0);
        frontier.push((1, 0, 0), 2, 1.0);
        frontier.push((2, 0, 0), 1, 3.0);

        assert_eq!(frontier.pop().unwrap().cell, (1, 0, 0));
        assert_eq!(frontier.pop().unwrap().cell, (2, 0, 0));
        assert_eq!(frontier.pop().unwrap().cell, (0, 0, 0));
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn test_fifo_tie_break() {
        let mut frontier = Frontier::new();
        frontier.push((0, 0, 0), 1, 2.0);
        frontier.push((1, 0, 0), 2, 2.0);
        frontier.push((2, 0, 0), 3, 2.0);

        assert_eq!(frontier.pop().unwrap().label, 1);
        assert_eq!(frontier.pop().unwrap().label, 2);
        assert_eq!(frontier.pop().unwrap().label, 3);
    }

    #[test]
    fn test_pop_order_monotonic() {
        // Pop scores from a fixed entry set must be non-decreasing.
        let mut frontier = Frontier::new();
        let scores = [4.0, 0.5, 2.5, 2.5, 9.0, 0.0, 7.25];
        for (i, &s) in scores.iter().enumerate() {
            frontier.push((i as u32, 0, 0), 1, s);
        }

        let mut last = f64::NEG_INFINITY;
        while let Some(entry) = frontier.pop() {
            assert!(entry.score >= last);
            last = entry.score;
        }
    }

    #[test]
    fn test_duplicate_cells_allowed() {
        let mut frontier = Frontier::new();
        frontier.push((1, 1, 0), 1, 3.0);
        frontier.push((1, 1, 0), 2, 1.0);

        let first = frontier.pop().unwrap();
        assert_eq!(first.label, 2);
        let second = frontier.pop().unwrap();
        assert_eq!(second.label, 1);
        assert_eq!(first.cell, second.cell);
    }

    #[test]
    fn test_len_and_empty() {
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());
        frontier.push((0, 0, 0), 1, 0.0);
        assert_eq!(frontier.len(), 1);
        frontier.pop();
        assert!(frontier.is_empty());
    }
}
