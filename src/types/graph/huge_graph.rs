//! Read-only graph facade composing an id map, schema, node properties,
//! and one or more typed CSR topologies.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::GdsError;
use crate::types::id_map::{IdMap, MappedNodeId, NOT_FOUND};
use crate::types::properties::NodePropertyValues;
use crate::types::schema::{GraphSchema, RelationshipType};

use super::adjacency_list::AdjacencyList;
use super::property_cursor::PropertyCursor;
use super::topology::Topology;

/// Per-relationship-type storage: the CSR topology plus, optionally, a
/// parallel property-word array laid out 1:1 against `topology`'s flat
/// target array, and the inverse of both.
pub struct RelationshipTypeStore {
    topology: Topology,
    inverse_topology: Option<Topology>,
    property_words: Option<Vec<i64>>,
    inverse_property_words: Option<Vec<i64>>,
}

impl RelationshipTypeStore {
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            inverse_topology: None,
            property_words: None,
            inverse_property_words: None,
        }
    }

    pub fn with_inverse(mut self, inverse_topology: Topology) -> Self {
        self.inverse_topology = Some(inverse_topology);
        self
    }

    pub fn with_property_words(mut self, words: Vec<i64>) -> Self {
        self.property_words = Some(words);
        self
    }

    pub fn with_inverse_property_words(mut self, words: Vec<i64>) -> Self {
        self.inverse_property_words = Some(words);
        self
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn inverse_topology(&self) -> Option<&Topology> {
        self.inverse_topology.as_ref()
    }
}

/// Composes an [`IdMap`], a [`GraphSchema`], a node-property map, and one
/// typed [`RelationshipTypeStore`] per relationship type into a single
/// read-only graph view.
///
/// Node indices across every topology lie in `[0, id_map.node_count())`;
/// the relationship-type sets named by `schema` and `topologies` must
/// agree (checked at construction).
pub struct HugeGraph {
    id_map: Arc<dyn IdMap>,
    schema: Arc<GraphSchema>,
    node_properties: Arc<HashMap<String, NodePropertyValues>>,
    topologies: Arc<HashMap<RelationshipType, RelationshipTypeStore>>,
}

impl HugeGraph {
    pub fn new(
        id_map: Arc<dyn IdMap>,
        schema: GraphSchema,
        node_properties: HashMap<String, NodePropertyValues>,
        topologies: HashMap<RelationshipType, RelationshipTypeStore>,
    ) -> Result<Self, GdsError> {
        for (rel_type, store) in &topologies {
            if store.topology.node_count() > id_map.node_count() {
                return Err(GdsError::InvalidConfig(format!(
                    "topology for relationship type '{}' covers {} nodes, exceeding id map's {}",
                    rel_type.name(),
                    store.topology.node_count(),
                    id_map.node_count()
                )));
            }
        }
        Ok(Self {
            id_map,
            schema: Arc::new(schema),
            node_properties: Arc::new(node_properties),
            topologies: Arc::new(topologies),
        })
    }

    /// Returns a new facade sharing this graph's underlying topology and
    /// property storage, safe to use from a different algorithm thread
    /// than the one holding `self`. Since this facade creates cursors
    /// on demand rather than caching them on `self`, the clone carries no
    /// mutable state beyond fresh `Arc` handles.
    pub fn concurrent_copy(&self) -> Self {
        Self {
            id_map: Arc::clone(&self.id_map),
            schema: Arc::clone(&self.schema),
            node_properties: Arc::clone(&self.node_properties),
            topologies: Arc::clone(&self.topologies),
        }
    }

    pub fn node_count(&self) -> usize {
        self.id_map.node_count()
    }

    pub fn relationship_count(&self) -> usize {
        self.topologies.values().map(|s| s.topology.relationship_count()).sum()
    }

    pub fn schema(&self) -> &GraphSchema {
        &self.schema
    }

    pub fn node_property(&self, key: &str) -> Option<&NodePropertyValues> {
        self.node_properties.get(key)
    }

    pub fn node_properties(&self) -> impl Iterator<Item = (&String, &NodePropertyValues)> {
        self.node_properties.iter()
    }

    pub fn topology_for(&self, rel_type: &RelationshipType) -> Option<&Topology> {
        self.topologies.get(rel_type).map(|s| s.topology())
    }

    pub fn has_relationship_property(&self, rel_type: &RelationshipType) -> bool {
        self.topologies
            .get(rel_type)
            .map(|s| s.property_words.is_some())
            .unwrap_or(false)
    }

    pub fn is_multi_graph(&self) -> bool {
        self.topologies.values().any(|s| s.topology.has_parallel_edges())
    }

    fn adjacency_list<'a>(&'a self, rel_type: &RelationshipType) -> Option<AdjacencyList<'a>> {
        self.topologies.get(rel_type).map(|s| AdjacencyList::new(&s.topology))
    }

    fn inverse_adjacency_list<'a>(&'a self, rel_type: &RelationshipType) -> Option<AdjacencyList<'a>> {
        self.topologies
            .get(rel_type)
            .and_then(|s| s.inverse_topology.as_ref())
            .map(AdjacencyList::new)
    }

    /// Whether `rel_type` carries an inverse topology, i.e. whether
    /// [`Self::degree_inverse`] and [`Self::inverse_adjacency_cursor`] have
    /// anything to report for it.
    pub fn has_inverse_topology(&self, rel_type: &RelationshipType) -> bool {
        self.topologies
            .get(rel_type)
            .map(|s| s.inverse_topology.is_some())
            .unwrap_or(false)
    }

    /// Degree in the inverse topology (reversed edges). `None` when
    /// `rel_type` carries no inverse topology.
    pub fn degree_inverse(&self, rel_type: &RelationshipType, source: MappedNodeId) -> Option<usize> {
        self.inverse_adjacency_list(rel_type).map(|list| list.degree(source))
    }

    /// A cursor over `source`'s neighbours in the inverse topology.
    /// `None` when `rel_type` carries no inverse topology.
    pub fn inverse_adjacency_cursor(
        &self,
        rel_type: &RelationshipType,
        source: MappedNodeId,
    ) -> Option<super::adjacency_cursor::AdjacencyCursor<'_>> {
        self.inverse_adjacency_list(rel_type)
            .map(|list| list.adjacency_cursor(source))
    }

    /// `existsInverse(source, target) = inverseAdjacencyCursor(source).advance(target) == target`.
    /// `false` when `rel_type` carries no inverse topology.
    pub fn exists_inverse(&self, rel_type: &RelationshipType, source: MappedNodeId, target: MappedNodeId) -> bool {
        match self.inverse_adjacency_cursor(rel_type, source) {
            Some(mut cursor) => cursor.advance(target) == target as i64,
            None => false,
        }
    }

    /// `exists(source, target) = adjacencyCursor(source).advance(target) == target`.
    pub fn exists(&self, rel_type: &RelationshipType, source: MappedNodeId, target: MappedNodeId) -> bool {
        match self.adjacency_list(rel_type) {
            Some(list) => list.adjacency_cursor(source).advance(target) == target as i64,
            None => false,
        }
    }

    /// `nthTarget(source, offset) = cursor.advanceBy(offset)`.
    pub fn nth_target(&self, rel_type: &RelationshipType, source: MappedNodeId, offset: usize) -> i64 {
        match self.adjacency_list(rel_type) {
            Some(list) => list.adjacency_cursor(source).advance_by(offset),
            None => NOT_FOUND,
        }
    }

    /// Linear search through the adjacency cursor in lock-step with the
    /// property cursor; returns the property on first match, else
    /// `default`.
    pub fn relationship_property(
        &self,
        rel_type: &RelationshipType,
        source: MappedNodeId,
        target: MappedNodeId,
        default: f64,
    ) -> f64 {
        let store = match self.topologies.get(rel_type) {
            Some(store) => store,
            None => return default,
        };
        let words = match &store.property_words {
            Some(words) => words,
            None => return default,
        };
        let targets = match store.topology.targets(source) {
            Some(targets) => targets,
            None => return default,
        };
        let base = store.topology.offsets()[source as usize];
        let mut adjacency = super::adjacency_cursor::AdjacencyCursor::new(targets);
        let mut properties = PropertyCursor::new(&words[base..base + targets.len()]);
        while adjacency.has_next() {
            let candidate = adjacency.next();
            let value = properties.next_double();
            if candidate == target {
                return value;
            }
        }
        default
    }

    /// Scans the full sorted target list once, counting distinct values by
    /// comparing each target to the previous one.
    pub fn degree_without_parallel_relationships(&self, rel_type: &RelationshipType, source: MappedNodeId) -> usize {
        let list = match self.adjacency_list(rel_type) {
            Some(list) => list,
            None => return 0,
        };
        let mut cursor = list.adjacency_cursor(source);
        let mut distinct = 0usize;
        let mut previous: Option<MappedNodeId> = None;
        while cursor.has_next() {
            let target = cursor.next();
            if previous != Some(target) {
                distinct += 1;
            }
            previous = Some(target);
        }
        distinct
    }

    /// Relationship types this graph carries a topology for.
    pub fn relationship_types(&self) -> impl Iterator<Item = &RelationshipType> {
        self.topologies.keys()
    }

    /// Restricts the graph to the named relationship types; fails if any
    /// requested type has no topology.
    pub fn relationship_type_filtered_graph(
        &self,
        types: &[RelationshipType],
    ) -> Result<FilteredHugeGraphView<'_>, GdsError> {
        let unsupported: Vec<String> = types
            .iter()
            .filter(|t| !self.topologies.contains_key(t))
            .map(|t| t.name().to_string())
            .collect();
        if !unsupported.is_empty() {
            return Err(GdsError::UnsupportedRelationshipType(unsupported));
        }
        Ok(FilteredHugeGraphView {
            graph: self,
            types: types.to_vec(),
        })
    }
}

/// A read-only view over a subset of a [`HugeGraph`]'s relationship types,
/// sharing its underlying topology storage by reference.
///
/// Corresponds to the spec's `concurrentCopy()` requirement in the sense
/// that it shares storage with its parent; unlike `concurrentCopy`, it
/// also narrows the visible relationship types.
pub struct FilteredHugeGraphView<'a> {
    graph: &'a HugeGraph,
    types: Vec<RelationshipType>,
}

impl<'a> FilteredHugeGraphView<'a> {
    pub fn relationship_types(&self) -> &[RelationshipType] {
        &self.types
    }

    pub fn exists(&self, rel_type: &RelationshipType, source: MappedNodeId, target: MappedNodeId) -> bool {
        if !self.types.contains(rel_type) {
            return false;
        }
        self.graph.exists(rel_type, source, target)
    }
}
