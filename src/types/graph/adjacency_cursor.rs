//! Single-source, single-thread iterator over a sorted target-id slice.
//!
//! Targets within one source are always stored and emitted in ascending
//! order; `advance`/`skip_until`/`exists` all rely on that ordering to do a
//! linear scan rather than a full re-sort.

use crate::types::id_map::MappedNodeId;

/// Sentinel returned by [`AdjacencyCursor::advance`] when no target
/// satisfies the predicate.
pub const NOT_FOUND: i64 = -1;

/// Single-pass cursor over one source node's sorted target list.
#[derive(Debug, Clone)]
pub struct AdjacencyCursor<'a> {
    targets: &'a [MappedNodeId],
    position: usize,
}

impl<'a> AdjacencyCursor<'a> {
    /// An empty, already-exhausted cursor — used when a source has no
    /// recorded adjacency (e.g. `rawAdjacencyCursor` before `init`).
    pub fn empty() -> Self {
        Self {
            targets: &[],
            position: 0,
        }
    }

    /// Positions a cursor at the start of `targets`.
    pub fn new(targets: &'a [MappedNodeId]) -> Self {
        Self {
            targets,
            position: 0,
        }
    }

    /// Re-initializes an unbound cursor over a new target slice.
    pub fn init(&mut self, targets: &'a [MappedNodeId]) {
        self.targets = targets;
        self.position = 0;
    }

    /// Total number of targets this cursor was created over, independent of
    /// how many have already been consumed.
    pub fn size(&self) -> usize {
        self.targets.len()
    }

    /// Number of targets not yet consumed.
    pub fn remaining(&self) -> usize {
        self.targets.len() - self.position
    }

    pub fn has_next(&self) -> bool {
        self.position < self.targets.len()
    }

    /// Consumes and returns the next target.
    ///
    /// Panics if the cursor is exhausted — callers are expected to guard
    /// with [`Self::has_next`], matching the teacher's cursor contracts
    /// elsewhere in the collections layer.
    pub fn next(&mut self) -> MappedNodeId {
        let target = self.targets[self.position];
        self.position += 1;
        target
    }

    /// Returns the next target without consuming it.
    pub fn peek(&self) -> Option<MappedNodeId> {
        self.targets.get(self.position).copied()
    }

    /// Skips all targets strictly less than `target`; returns the first
    /// target `>= target`, or [`NOT_FOUND`] if the cursor is exhausted
    /// first.
    pub fn advance(&mut self, target: MappedNodeId) -> i64 {
        while self.position < self.targets.len() && self.targets[self.position] < target {
            self.position += 1;
        }
        if self.position < self.targets.len() {
            self.targets[self.position] as i64
        } else {
            NOT_FOUND
        }
    }

    /// Skips all targets `<= target`; returns the first target strictly
    /// greater, or [`NOT_FOUND`].
    pub fn skip_until(&mut self, target: MappedNodeId) -> i64 {
        while self.position < self.targets.len() && self.targets[self.position] <= target {
            self.position += 1;
        }
        if self.position < self.targets.len() {
            self.targets[self.position] as i64
        } else {
            NOT_FOUND
        }
    }

    /// Skips `n` targets and returns the target after, or [`NOT_FOUND`] if
    /// fewer than `n + 1` targets remain.
    pub fn advance_by(&mut self, n: usize) -> i64 {
        self.position = (self.position + n).min(self.targets.len());
        if self.position < self.targets.len() {
            let target = self.targets[self.position] as i64;
            self.position += 1;
            target
        } else {
            NOT_FOUND
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_order() {
        let targets = vec![2, 5, 7];
        let mut cursor = AdjacencyCursor::new(&targets);
        assert_eq!(cursor.size(), 3);
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), 2);
        assert_eq!(cursor.peek(), Some(5));
        assert_eq!(cursor.next(), 5);
        assert_eq!(cursor.next(), 7);
        assert!(!cursor.has_next());
    }

    #[test]
    fn advance_skips_strictly_less_targets() {
        let targets = vec![2, 5, 7, 9];
        let mut cursor = AdjacencyCursor::new(&targets);
        assert_eq!(cursor.advance(6), 7);
        assert_eq!(cursor.next(), 9);
    }

    #[test]
    fn advance_past_the_end_returns_not_found() {
        let targets = vec![2, 5];
        let mut cursor = AdjacencyCursor::new(&targets);
        assert_eq!(cursor.advance(10), NOT_FOUND);
    }

    #[test]
    fn skip_until_skips_through_equal_targets() {
        let targets = vec![2, 5, 5, 8];
        let mut cursor = AdjacencyCursor::new(&targets);
        assert_eq!(cursor.skip_until(5), 8);
    }

    #[test]
    fn advance_by_skips_n_and_returns_the_next() {
        let targets = vec![1, 2, 3, 4, 5];
        let mut cursor = AdjacencyCursor::new(&targets);
        assert_eq!(cursor.advance_by(2), 4);
        assert_eq!(cursor.remaining(), 1);
    }
}
