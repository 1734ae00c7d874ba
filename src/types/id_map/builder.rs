//! Concurrent id-map construction pipeline.
//!
//! `allocate` reserves a contiguous batch of the final mapped-id space and
//! is safe to call from many threads at once; each returned
//! [`IdMapAllocator`] is then filled by a single thread. `build` finalizes
//! the accumulated original-to-mapped mapping and hands the re-mapping
//! function to a [`LabelInformationBuilder`], producing the most specific
//! label representation available (see [`super::label_info`]).

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::concurrency::Concurrency;
use crate::types::schema::NodeLabel;

use super::allocator::IdMapAllocator;
use super::batch_node_iterable::{BatchNodeIterable, NodeIdBatch};
use super::id_map::{IdMap, NodeLabelConsumer, NOT_FOUND};
use super::label_info::{LabelInformation, LabelInformationBuilder};
use super::node_iterator::{NodeConsumer, NodeIdIterator, NodeIterator};
use super::partial_id_map::PartialIdMap;
use super::{FilteredIdMap, MappedNodeId, OriginalNodeId};

/// Accumulates original-id batches concurrently, then finalizes into an
/// [`IdMap`].
pub struct IdMapBuilder {
    next_id: AtomicU64,
    forward: Mutex<HashMap<OriginalNodeId, MappedNodeId>>,
}

impl Default for IdMapBuilder {
    fn default() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            forward: Mutex::new(HashMap::new()),
        }
    }
}

impl IdMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves `batch_length` slots in the final mapped-id space.
    /// Zero-length requests are a no-op, still returning a valid allocator.
    pub fn allocate(&self, batch_length: usize) -> IdMapAllocator {
        let start = self.next_id.fetch_add(batch_length as u64, Ordering::SeqCst);
        IdMapAllocator::new(start, batch_length)
    }

    /// Records a filled batch (as produced by [`IdMapAllocator::insert`])
    /// into the shared forward mapping.
    pub fn record(&self, mapped_to_original: Vec<(MappedNodeId, OriginalNodeId)>) {
        let mut forward = self.forward.lock();
        for (mapped, original) in mapped_to_original {
            forward.insert(original, mapped);
        }
    }

    /// Finalizes the mapping. `highest_original_id` is recorded verbatim
    /// (the caller may know a tighter bound than the accumulated inserts
    /// reveal); `concurrency` is accepted for parity with the build
    /// contract but this reference implementation builds single-threaded.
    pub fn build(
        self,
        label_info_builder: LabelInformationBuilder,
        highest_original_id: Option<OriginalNodeId>,
        _concurrency: Concurrency,
    ) -> BuiltIdMap {
        let forward = self.forward.into_inner();
        let node_count = self.next_id.load(Ordering::SeqCst) as usize;

        let mut reverse = vec![NOT_FOUND; node_count];
        for (&original, &mapped) in forward.iter() {
            reverse[mapped as usize] = original;
        }

        let label_info = label_info_builder.build(node_count);

        BuiltIdMap {
            forward,
            reverse,
            highest_original_id,
            label_info,
            label_overlay: HashMap::new(),
            available_overlay: HashSet::new(),
        }
    }
}

/// Result of [`IdMapBuilder::build`]: a bidirectional mapping backed by a
/// chosen [`LabelInformation`] representation.
pub struct BuiltIdMap {
    forward: HashMap<OriginalNodeId, MappedNodeId>,
    reverse: Vec<OriginalNodeId>,
    highest_original_id: Option<OriginalNodeId>,
    label_info: Box<dyn LabelInformation>,
    label_overlay: HashMap<MappedNodeId, HashSet<NodeLabel>>,
    available_overlay: HashSet<NodeLabel>,
}

impl BuiltIdMap {
    fn mapped_range(&self) -> std::ops::Range<MappedNodeId> {
        0..self.reverse.len() as MappedNodeId
    }
}

impl PartialIdMap for BuiltIdMap {
    fn to_mapped_node_id(&self, original_node_id: OriginalNodeId) -> Option<MappedNodeId> {
        self.forward.get(&original_node_id).copied()
    }

    fn root_node_count(&self) -> Option<usize> {
        Some(self.reverse.len())
    }
}

impl NodeIterator for BuiltIdMap {
    fn for_each_node(&self, consumer: &mut dyn NodeConsumer) {
        for mapped in self.mapped_range() {
            if !consumer.accept(mapped) {
                break;
            }
        }
    }

    fn iter(&self) -> NodeIdIterator<'_> {
        Box::new(self.mapped_range())
    }

    fn iter_with_labels<'a>(&'a self, labels: &'a HashSet<NodeLabel>) -> NodeIdIterator<'a> {
        if labels.is_empty() {
            return self.iter();
        }
        Box::new(
            self.label_info
                .iterate_nodes(labels)
                .into_iter()
                .filter(move |node| (*node as usize) < self.reverse.len()),
        )
    }
}

impl BatchNodeIterable for BuiltIdMap {
    fn batch_iterables(&self, batch_size: usize) -> Vec<NodeIdBatch> {
        if batch_size == 0 {
            return vec![];
        }
        let mut batches = Vec::new();
        let mut start = 0u64;
        let total = self.node_count() as u64;
        while start < total {
            let remaining = total - start;
            let length = usize::min(batch_size, remaining as usize);
            batches.push(NodeIdBatch::new(start, length));
            start += length as u64;
        }
        batches
    }
}

impl IdMap for BuiltIdMap {
    fn type_id(&self) -> &str {
        "built"
    }

    fn to_original_node_id(&self, mapped_node_id: MappedNodeId) -> Option<OriginalNodeId> {
        self.reverse.get(mapped_node_id as usize).copied()
    }

    fn node_count(&self) -> usize {
        self.reverse.len()
    }

    fn node_count_for_label(&self, node_label: &NodeLabel) -> usize {
        self.label_info.count_for(node_label)
            + self
                .label_overlay
                .values()
                .filter(|labels| labels.contains(node_label))
                .count()
    }

    fn highest_original_id(&self) -> Option<OriginalNodeId> {
        self.highest_original_id
            .or_else(|| self.forward.keys().copied().max())
    }

    fn node_labels(&self, mapped_node_id: MappedNodeId) -> HashSet<NodeLabel> {
        let mut labels = self.label_info.labels_of(mapped_node_id);
        if let Some(extra) = self.label_overlay.get(&mapped_node_id) {
            labels.extend(extra.iter().cloned());
        }
        labels
    }

    fn for_each_node_label(
        &self,
        mapped_node_id: MappedNodeId,
        consumer: &mut dyn NodeLabelConsumer,
    ) {
        for label in self.node_labels(mapped_node_id) {
            if !consumer.accept(&label) {
                break;
            }
        }
    }

    fn available_node_labels(&self) -> HashSet<NodeLabel> {
        let mut labels = self.label_info.labels_available();
        labels.extend(self.available_overlay.iter().cloned());
        labels
    }

    fn has_label(&self, mapped_node_id: MappedNodeId, label: &NodeLabel) -> bool {
        self.label_info.has(mapped_node_id, label)
            || self
                .label_overlay
                .get(&mapped_node_id)
                .map(|labels| labels.contains(label))
                .unwrap_or(false)
    }

    fn add_node_label(&mut self, node_label: NodeLabel) {
        self.available_overlay.insert(node_label);
    }

    fn add_node_id_to_label(&mut self, node_id: MappedNodeId, node_label: NodeLabel) {
        self.available_overlay.insert(node_label.clone());
        self.label_overlay.entry(node_id).or_default().insert(node_label);
    }

    fn root_id_map(&self) -> &dyn IdMap {
        self
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

    #[test]
    fn zero_length_allocate_is_a_no_op() {
        let builder = IdMapBuilder::new();
        let allocator = builder.allocate(0);
        assert_eq!(allocator.batch_length(), 0);
    }

    #[test]
    fn concurrent_batches_reserve_disjoint_ranges() {
        let builder = IdMapBuilder::new();
        let a = builder.allocate(3);
        let b = builder.allocate(2);
        assert_eq!(a.start(), 0);
        assert_eq!(b.start(), 3);
    }

    #[test]
    fn build_produces_a_working_bidirectional_map() {
        let builder = IdMapBuilder::new();
        let allocator = builder.allocate(3);
        let pairs = allocator.insert(&[100, 200, 300]).unwrap();
        builder.record(pairs);

        let label_builder = LabelInformationBuilder::new();
        let id_map = builder.build(label_builder, Some(300), Concurrency::single_threaded());

        assert_eq!(id_map.node_count(), 3);
        assert_eq!(id_map.to_mapped_node_id(200), Some(1));
        assert_eq!(id_map.to_original_node_id(1), Some(200));
        assert_eq!(id_map.safe_to_mapped_or_not_found(999), NOT_FOUND);
    }

    #[test]
    fn unknown_original_id_maps_to_not_found_sentinel() {
        let builder = IdMapBuilder::new();
        let label_builder = LabelInformationBuilder::new();
        let id_map = builder.build(label_builder, None, Concurrency::single_threaded());
        assert_eq!(id_map.safe_to_mapped_or_not_found(42), NOT_FOUND);
    }
}
