//! Cursor factory over a [`Topology`]'s packed CSR storage.

use crate::types::id_map::MappedNodeId;

use super::adjacency_cursor::AdjacencyCursor;
use super::topology::Topology;

/// Read-only view producing [`AdjacencyCursor`]s over a shared [`Topology`].
///
/// Mirrors the spec's `AdjacencyList` contract: `degree` is O(1),
/// `adjacency_cursor` positions a cursor at a source's neighbour list, and
/// `raw_adjacency_cursor` hands back an unbound cursor a caller can
/// `init()` repeatedly without reallocating.
pub struct AdjacencyList<'a> {
    topology: &'a Topology,
}

impl<'a> AdjacencyList<'a> {
    pub fn new(topology: &'a Topology) -> Self {
        Self { topology }
    }

    pub fn degree(&self, source: MappedNodeId) -> usize {
        self.topology.degree(source)
    }

    /// Positions a cursor at `source`'s neighbour list. `source` out of
    /// range yields an empty, already-exhausted cursor rather than
    /// panicking, matching the spec's "fallback value" allowance.
    pub fn adjacency_cursor(&self, source: MappedNodeId) -> AdjacencyCursor<'a> {
        match self.topology.targets(source) {
            Some(targets) => AdjacencyCursor::new(targets),
            None => AdjacencyCursor::empty(),
        }
    }

    /// Unbound cursor for later re-init via [`AdjacencyCursor::init`].
    pub fn raw_adjacency_cursor(&self) -> AdjacencyCursor<'a> {
        AdjacencyCursor::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_cursor_is_positioned_at_source() {
        let topology = Topology::from_sorted_adjacency(vec![vec![1, 2], vec![0]]);
        let list = AdjacencyList::new(&topology);

        assert_eq!(list.degree(0), 2);
        let mut cursor = list.adjacency_cursor(0);
        assert_eq!(cursor.next(), 1);
        assert_eq!(cursor.next(), 2);
    }

    #[test]
    fn out_of_range_source_yields_empty_cursor() {
        let topology = Topology::from_sorted_adjacency(vec![vec![1]]);
        let list = AdjacencyList::new(&topology);
        let cursor = list.adjacency_cursor(99);
        assert!(!cursor.has_next());
    }

    #[test]
    fn raw_cursor_can_be_reinitialized() {
        let topology = Topology::from_sorted_adjacency(vec![vec![1, 2]]);
        let list = AdjacencyList::new(&topology);
        let mut cursor = list.raw_adjacency_cursor();
        assert!(!cursor.has_next());
        cursor.init(topology.targets(0).unwrap());
        assert_eq!(cursor.next(), 1);
    }
}
