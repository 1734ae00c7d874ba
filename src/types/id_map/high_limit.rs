//! Id map variant for original-id spaces that vastly exceed the actual
//! node count.
//!
//! Composes two mappings: an `intermediate` map from the huge, sparse
//! original-id space down to a dense intermediate space, and a `root` map
//! from that dense intermediate space to the final compact mapped-id
//! space. Node-property builders key their storage by the intermediate
//! space (via [`IdMap::root_id_map`], which for this type returns `root`
//! rather than `self`), so storage stays proportional to `nodeCount`
//! rather than to the original id space.

use std::collections::HashSet;

use crate::concurrency::Concurrency;
use crate::types::schema::NodeLabel;

use super::batch_node_iterable::{BatchNodeIterable, NodeIdBatch};
use super::id_map::{IdMap, NodeLabelConsumer};
use super::node_iterator::{NodeConsumer, NodeIdIterator, NodeIterator};
use super::partial_id_map::PartialIdMap;
use super::{FilteredIdMap, MappedNodeId, OriginalNodeId};

pub struct HighLimitIdMap {
    intermediate: Box<dyn IdMap>,
    root: Box<dyn IdMap>,
}

impl HighLimitIdMap {
    /// `intermediate` maps original (huge, sparse) ids to dense intermediate
    /// ids; `root` maps those dense intermediate ids (as its own "original"
    /// space) down to the final compact mapped-id space.
    pub fn new(intermediate: Box<dyn IdMap>, root: Box<dyn IdMap>) -> Self {
        Self { intermediate, root }
    }
}

impl PartialIdMap for HighLimitIdMap {
    fn to_mapped_node_id(&self, original_node_id: OriginalNodeId) -> Option<MappedNodeId> {
        let intermediate_id = self.intermediate.to_mapped_node_id(original_node_id)?;
        self.root.to_mapped_node_id(intermediate_id as OriginalNodeId)
    }

    fn root_node_count(&self) -> Option<usize> {
        self.root.root_node_count()
    }
}

impl NodeIterator for HighLimitIdMap {
    fn for_each_node(&self, consumer: &mut dyn NodeConsumer) {
        self.root.for_each_node(consumer);
    }

    fn iter(&self) -> NodeIdIterator<'_> {
        self.root.iter()
    }

    fn iter_with_labels<'a>(&'a self, labels: &'a HashSet<NodeLabel>) -> NodeIdIterator<'a> {
        self.root.iter_with_labels(labels)
    }
}

impl BatchNodeIterable for HighLimitIdMap {
    fn batch_iterables(&self, batch_size: usize) -> Vec<NodeIdBatch> {
        self.root.batch_iterables(batch_size)
    }
}

impl IdMap for HighLimitIdMap {
    fn type_id(&self) -> &str {
        "highlimit"
    }

    fn to_original_node_id(&self, mapped_node_id: MappedNodeId) -> Option<OriginalNodeId> {
        let intermediate_id = self.root.to_original_node_id(mapped_node_id)?;
        self.intermediate
            .to_original_node_id(intermediate_id as MappedNodeId)
    }

    fn node_count(&self) -> usize {
        self.root.node_count()
    }

    fn node_count_for_label(&self, node_label: &NodeLabel) -> usize {
        self.root.node_count_for_label(node_label)
    }

    fn highest_original_id(&self) -> Option<OriginalNodeId> {
        self.intermediate.highest_original_id()
    }

    fn node_labels(&self, mapped_node_id: MappedNodeId) -> HashSet<NodeLabel> {
        self.root.node_labels(mapped_node_id)
    }

    fn for_each_node_label(
        &self,
        mapped_node_id: MappedNodeId,
        consumer: &mut dyn NodeLabelConsumer,
    ) {
        self.root.for_each_node_label(mapped_node_id, consumer);
    }

    fn available_node_labels(&self) -> HashSet<NodeLabel> {
        self.root.available_node_labels()
    }

    fn has_label(&self, mapped_node_id: MappedNodeId, label: &NodeLabel) -> bool {
        self.root.has_label(mapped_node_id, label)
    }

    fn add_node_label(&mut self, node_label: NodeLabel) {
        self.root.add_node_label(node_label);
    }

    fn add_node_id_to_label(&mut self, node_id: MappedNodeId, node_label: NodeLabel) {
        self.root.add_node_id_to_label(node_id, node_label);
    }

    /// Returns the dense intermediate-id-keyed map, not `self`: node-property
    /// storage should be sized and indexed by the intermediate space.
    fn root_id_map(&self) -> &dyn IdMap {
        self.root.as_ref()
    }

    fn with_filtered_labels(
        &self,
        _node_labels: &HashSet<NodeLabel>,
        _concurrency: Concurrency,
    ) -> Option<Box<dyn FilteredIdMap>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::id_map::SimpleIdMap;

    #[test]
    fn translates_original_ids_through_the_intermediate_space() {
        // Sparse original ids 1_000_000 / 5_000_000 / 9_000_000 compact down
        // to dense intermediate ids 0/1/2, which the root map further
        // compacts to mapped ids 0/1/2 (identity here, but the indirection
        // is exercised all the same).
        let intermediate = SimpleIdMap::from_original_ids([1_000_000, 5_000_000, 9_000_000]);
        let root = SimpleIdMap::from_original_ids([0, 1, 2]);
        let high_limit = HighLimitIdMap::new(Box::new(intermediate), Box::new(root));

        assert_eq!(high_limit.to_mapped_node_id(5_000_000), Some(1));
        assert_eq!(high_limit.to_original_node_id(1), Some(5_000_000));
        assert_eq!(high_limit.node_count(), 3);
        assert_eq!(high_limit.highest_original_id(), Some(9_000_000));
    }

    #[test]
    fn root_id_map_exposes_the_intermediate_keyed_map() {
        let intermediate = SimpleIdMap::from_original_ids([1_000_000, 5_000_000]);
        let root = SimpleIdMap::from_original_ids([0, 1]);
        let high_limit = HighLimitIdMap::new(Box::new(intermediate), Box::new(root));

        assert_eq!(high_limit.root_id_map().node_count(), 2);
    }

    #[test]
    fn unknown_original_id_does_not_resolve() {
        let intermediate = SimpleIdMap::from_original_ids([1_000_000]);
        let root = SimpleIdMap::from_original_ids([0]);
        let high_limit = HighLimitIdMap::new(Box::new(intermediate), Box::new(root));

        assert_eq!(high_limit.to_mapped_node_id(42), None);
    }
}
