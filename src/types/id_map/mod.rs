mod allocator;
mod batch_node_iterable;
mod builder;
mod filtered_id_map;
mod high_limit;
mod id_map;
mod label_info;
mod node_iterator;
mod partial_id_map;
mod simple;

pub use allocator::IdMapAllocator;
pub use batch_node_iterable::{BatchNodeIterable, NodeIdBatch, NodeIdBatchIter};
pub use builder::{BuiltIdMap, IdMapBuilder};
pub use filtered_id_map::FilteredIdMap;
pub use high_limit::HighLimitIdMap;
pub use id_map::{IdMap, NodeLabelConsumer, NOT_FOUND, NO_TYPE, START_NODE_ID};
pub use label_info::{
    AllNodesLabelInformation, LabelInformation, LabelInformationBuilder, MultiLabelInformation,
    SingleLabelInformation,
};
pub use node_iterator::{NodeConsumer, NodeIdIterator, NodeIterator, NodeIteratorExt};
pub use partial_id_map::{EmptyPartialIdMap, PartialIdMap};
pub use simple::SimpleIdMap;

pub use crate::concurrency::Concurrency;

pub type MappedNodeId = u64;
pub type OriginalNodeId = i64;
