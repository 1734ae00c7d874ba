//! Read-only graph traversal substrate: packed CSR topology, single-pass
//! cursors over it, and the `HugeGraph` facade composing topology, schema,
//! id map, and node properties into one queryable view.

pub mod adjacency_cursor;
pub mod adjacency_list;
pub mod composite_cursor;
pub mod huge_graph;
pub mod property_cursor;
pub mod topology;

pub use adjacency_cursor::{AdjacencyCursor, NOT_FOUND};
pub use adjacency_list::AdjacencyList;
pub use composite_cursor::CompositeAdjacencyCursor;
pub use huge_graph::{FilteredHugeGraphView, HugeGraph, RelationshipTypeStore};
pub use property_cursor::PropertyCursor;
pub use topology::Topology;
