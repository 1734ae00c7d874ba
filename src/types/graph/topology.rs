//! Packed compressed-sparse-row relationship layout.
//!
//! Generalizes the simpler per-source `Vec<Vec<MappedNodeId>>` adjacency
//! representation into a single flat `targets` array addressed by a
//! `node_count + 1`-length `offsets` array, so `degree(source)` and
//! `adjacency_cursor(source)` are O(1) slice operations instead of a
//! `Vec` indirection per node.

use crate::types::id_map::MappedNodeId;

/// `(AdjacencyList, relationshipCount, isMultiGraph)` per spec — here
/// folded into the CSR storage itself rather than kept as a separate
/// wrapper, since the flat layout makes `relationship_count` and
/// `is_multi_graph` properties of the offsets/targets pair.
#[derive(Debug, Clone)]
pub struct Topology {
    offsets: Vec<usize>,
    targets: Vec<MappedNodeId>,
    has_parallel_edges: bool,
}

impl Topology {
    /// Builds a topology from per-source sorted target lists. `adjacency[i]`
    /// must already be sorted ascending — this constructor does not sort.
    pub fn from_sorted_adjacency(adjacency: Vec<Vec<MappedNodeId>>) -> Self {
        let node_count = adjacency.len();
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();
        let mut has_parallel_edges = false;

        offsets.push(0);
        for neighbours in &adjacency {
            for window in neighbours.windows(2) {
                if window[0] == window[1] {
                    has_parallel_edges = true;
                }
            }
            targets.extend_from_slice(neighbours);
            offsets.push(targets.len());
        }

        Self {
            offsets,
            targets,
            has_parallel_edges,
        }
    }

    /// Builds directly from pre-packed `offsets`/`targets`, trusting the
    /// caller that `offsets` is `node_count + 1` long, monotonic, and that
    /// each `targets[offsets[i]..offsets[i+1]]` span is already sorted.
    pub fn from_packed(offsets: Vec<usize>, targets: Vec<MappedNodeId>) -> Self {
        let has_parallel_edges = offsets.windows(2).any(|w| {
            targets[w[0]..w[1]].windows(2).any(|t| t[0] == t[1])
        });
        Self {
            offsets,
            targets,
            has_parallel_edges,
        }
    }

    pub fn node_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    pub fn relationship_count(&self) -> usize {
        self.targets.len()
    }

    pub fn has_parallel_edges(&self) -> bool {
        self.has_parallel_edges
    }

    pub fn degree(&self, source: MappedNodeId) -> usize {
        let i = source as usize;
        self.offsets[i + 1] - self.offsets[i]
    }

    /// Returns the sorted target slice for `source`, or `None` if `source`
    /// is out of range.
    pub fn targets(&self, source: MappedNodeId) -> Option<&[MappedNodeId]> {
        let i = source as usize;
        if i + 1 >= self.offsets.len() {
            return None;
        }
        Some(&self.targets[self.offsets[i]..self.offsets[i + 1]])
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn flat_targets(&self) -> &[MappedNodeId] {
        &self.targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_and_targets_are_o1_slice_lookups() {
        let topology = Topology::from_sorted_adjacency(vec![vec![1, 2], vec![0], vec![]]);
        assert_eq!(topology.node_count(), 3);
        assert_eq!(topology.relationship_count(), 3);
        assert_eq!(topology.degree(0), 2);
        assert_eq!(topology.targets(0), Some(&[1, 2][..]));
        assert_eq!(topology.targets(2), Some(&[][..]));
    }

    #[test]
    fn detects_parallel_edges() {
        let topology = Topology::from_sorted_adjacency(vec![vec![1, 1], vec![]]);
        assert!(topology.has_parallel_edges());
    }

    #[test]
    fn from_packed_trusts_caller_layout() {
        let topology = Topology::from_packed(vec![0, 2, 3], vec![1, 2, 0]);
        assert_eq!(topology.degree(0), 2);
        assert_eq!(topology.degree(1), 1);
    }
}
