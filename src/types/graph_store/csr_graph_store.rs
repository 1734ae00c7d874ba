//! Top-level composition of a built [`HugeGraph`] with the metadata the
//! catalog needs to treat it as an opaque [`GraphStoreHandle`].

use crate::core::catalog::GraphStoreHandle;
use crate::types::graph::HugeGraph;
use crate::types::properties::NodePropertyValues;

/// A graph store ready for catalog registration: the queryable
/// [`HugeGraph`] facade plus the database it was loaded into.
///
/// Memory accounting is approximate — it sums node-property storage and
/// per-relationship-type target/property arrays, which dominate resident
/// size for graphs at the scale this engine targets.
pub struct CsrGraphStore {
    database_id: String,
    graph: HugeGraph,
}

impl CsrGraphStore {
    pub fn new(database_id: impl Into<String>, graph: HugeGraph) -> Self {
        Self {
            database_id: database_id.into(),
            graph,
        }
    }

    pub fn graph(&self) -> &HugeGraph {
        &self.graph
    }

    fn estimate_memory_bytes(&self) -> usize {
        let property_bytes: usize = self
            .graph
            .node_properties()
            .map(|(_, values)| node_property_bytes(values))
            .sum();

        // 8 bytes per target id (this crate's mapped-id width) plus, when a
        // relationship type carries properties, another 8 bytes per edge
        // for the parallel property-word array.
        let relationship_bytes: usize = self
            .graph
            .relationship_types()
            .map(|rel_type| {
                let edge_count = self
                    .graph
                    .topology_for(rel_type)
                    .map(|t| t.relationship_count())
                    .unwrap_or(0);
                let words_per_edge = if self.graph.has_relationship_property(rel_type) { 2 } else { 1 };
                edge_count * words_per_edge * 8
            })
            .sum();

        property_bytes + relationship_bytes
    }
}

fn node_property_bytes(values: &NodePropertyValues) -> usize {
    match values {
        NodePropertyValues::Long(v) => v.len() * 8,
        NodePropertyValues::Double(v) => v.len() * 8,
        NodePropertyValues::LongArray(v) => v.iter().map(|a| a.len() * 8).sum(),
        NodePropertyValues::FloatArray(v) => v.iter().map(|a| a.len() * 4).sum(),
        NodePropertyValues::DoubleArray(v) => v.iter().map(|a| a.len() * 8).sum(),
    }
}

impl GraphStoreHandle for CsrGraphStore {
    fn database_id(&self) -> &str {
        &self.database_id
    }

    fn memory_in_bytes(&self) -> usize {
        self.estimate_memory_bytes()
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn relationship_count(&self) -> usize {
        self.graph.relationship_count()
    }
}
