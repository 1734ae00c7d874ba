//! Merges several sorted [`AdjacencyCursor`]s into one globally sorted
//! interleaving, by always emitting the smallest head target.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::types::id_map::MappedNodeId;

use super::adjacency_cursor::{AdjacencyCursor, NOT_FOUND};

/// Min-heap entry: ordered by ascending target (reversed so `BinaryHeap`,
/// which is a max-heap, surfaces the smallest target first).
struct HeapEntry<'a> {
    next_target: MappedNodeId,
    cursor: AdjacencyCursor<'a>,
}

impl<'a> PartialEq for HeapEntry<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.next_target == other.next_target
    }
}
impl<'a> Eq for HeapEntry<'a> {}
impl<'a> PartialOrd for HeapEntry<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<'a> Ord for HeapEntry<'a> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.next_target.cmp(&self.next_target)
    }
}

/// K-way merge over `k` member cursors, yielding their combined target
/// stream in ascending order.
pub struct CompositeAdjacencyCursor<'a> {
    heap: BinaryHeap<HeapEntry<'a>>,
}

impl<'a> CompositeAdjacencyCursor<'a> {
    /// Builds a composite cursor from member cursors. Exhausted members are
    /// dropped immediately; a fully-exhausted input set yields an empty
    /// composite cursor.
    pub fn new(cursors: Vec<AdjacencyCursor<'a>>) -> Self {
        let mut heap = BinaryHeap::with_capacity(cursors.len());
        for mut cursor in cursors {
            if let Some(next_target) = cursor.peek() {
                heap.push(HeapEntry { next_target, cursor });
            }
        }
        Self { heap }
    }

    pub fn has_next(&self) -> bool {
        !self.heap.is_empty()
    }

    /// Pops the head cursor, emits its next target, and re-heaps it if it
    /// still has more targets.
    pub fn next(&mut self) -> MappedNodeId {
        let mut entry = self.heap.pop().expect("composite cursor exhausted");
        let target = entry.cursor.next();
        if let Some(next_target) = entry.cursor.peek() {
            entry.next_target = next_target;
            self.heap.push(entry);
        }
        target
    }

    /// Applies `advance` to every member cursor and rebuilds the heap from
    /// their resulting positions.
    pub fn advance(&mut self, target: MappedNodeId) -> i64 {
        let members: Vec<HeapEntry<'a>> = self.heap.drain().collect();
        for mut entry in members {
            entry.cursor.advance(target);
            if let Some(next_target) = entry.cursor.peek() {
                entry.next_target = next_target;
                self.heap.push(entry);
            }
        }
        self.heap
            .peek()
            .map(|e| e.next_target as i64)
            .unwrap_or(NOT_FOUND)
    }

    /// Applies `skip_until` to every member cursor and rebuilds the heap.
    pub fn skip_until(&mut self, target: MappedNodeId) -> i64 {
        let members: Vec<HeapEntry<'a>> = self.heap.drain().collect();
        for mut entry in members {
            entry.cursor.skip_until(target);
            if let Some(next_target) = entry.cursor.peek() {
                entry.next_target = next_target;
                self.heap.push(entry);
            }
        }
        self.heap
            .peek()
            .map(|e| e.next_target as i64)
            .unwrap_or(NOT_FOUND)
    }
}
