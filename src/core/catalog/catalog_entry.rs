//! A single registered graph in the catalog.

use std::sync::Arc;

use super::degree_distribution::DegreeDistribution;
use super::graph_store_handle::GraphStoreHandle;
use super::result_store_handle::{EmptyResultStore, ResultStoreHandle};
use crate::config::GraphProjectConfig;

/// Triple of `(graph store, project config, result store)`, plus an
/// optional degree distribution computed lazily by callers that need it.
///
/// The entry's graph name equals `config.graph_name`; the graph's database
/// equals `config.database_id`.
#[derive(Clone)]
pub struct CatalogEntry {
    graph_store: Arc<dyn GraphStoreHandle>,
    config: GraphProjectConfig,
    result_store: Arc<dyn ResultStoreHandle>,
    degree_distribution: Option<DegreeDistribution>,
}

impl CatalogEntry {
    pub fn new(graph_store: Arc<dyn GraphStoreHandle>, config: GraphProjectConfig) -> Self {
        Self {
            graph_store,
            config,
            result_store: Arc::new(EmptyResultStore),
            degree_distribution: None,
        }
    }

    /// Attaches a result store other than the default empty one.
    pub fn with_result_store(mut self, result_store: Arc<dyn ResultStoreHandle>) -> Self {
        self.result_store = result_store;
        self
    }

    pub fn graph_store(&self) -> &Arc<dyn GraphStoreHandle> {
        &self.graph_store
    }

    pub fn config(&self) -> &GraphProjectConfig {
        &self.config
    }

    pub fn result_store(&self) -> &Arc<dyn ResultStoreHandle> {
        &self.result_store
    }

    pub fn graph_name(&self) -> &str {
        &self.config.graph_name
    }

    pub fn database_id(&self) -> &str {
        &self.config.database_id
    }

    pub fn memory_in_bytes(&self) -> usize {
        self.graph_store.memory_in_bytes() + self.result_store.memory_in_bytes()
    }

    pub fn degree_distribution(&self) -> Option<&DegreeDistribution> {
        self.degree_distribution.as_ref()
    }

    pub fn set_degree_distribution(&mut self, distribution: DegreeDistribution) {
        self.degree_distribution = Some(distribution);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeGraphStore {
        database_id: String,
        memory: usize,
    }

    impl GraphStoreHandle for FakeGraphStore {
        fn database_id(&self) -> &str {
            &self.database_id
        }
        fn memory_in_bytes(&self) -> usize {
            self.memory
        }
        fn node_count(&self) -> usize {
            0
        }
        fn relationship_count(&self) -> usize {
            0
        }
    }

    #[test]
    fn entry_derives_name_and_database_from_config() {
        let config = GraphProjectConfig::new("g", "neo4j");
        let entry = CatalogEntry::new(
            Arc::new(FakeGraphStore {
                database_id: "neo4j".to_string(),
                memory: 2048,
            }),
            config,
        );

        assert_eq!(entry.graph_name(), "g");
        assert_eq!(entry.database_id(), "neo4j");
        assert_eq!(entry.memory_in_bytes(), 2048);
        assert!(entry.degree_distribution().is_none());
    }

    #[test]
    fn degree_distribution_can_be_attached() {
        let config = GraphProjectConfig::new("g", "neo4j");
        let mut entry = CatalogEntry::new(
            Arc::new(FakeGraphStore {
                database_id: "neo4j".to_string(),
                memory: 0,
            }),
            config,
        );

        let dist = DegreeDistribution::compute([1, 2, 3]).unwrap();
        entry.set_degree_distribution(dist);
        assert!(entry.degree_distribution().is_some());
    }

    #[test]
    fn default_result_store_is_empty_and_contributes_no_memory() {
        let config = GraphProjectConfig::new("g", "neo4j");
        let entry = CatalogEntry::new(
            Arc::new(FakeGraphStore {
                database_id: "neo4j".to_string(),
                memory: 100,
            }),
            config,
        );

        assert_eq!(entry.result_store().memory_in_bytes(), 0);
        assert_eq!(entry.memory_in_bytes(), 100);
    }

    #[test]
    fn attached_result_store_memory_is_included_in_the_total() {
        struct FixedResultStore;
        impl ResultStoreHandle for FixedResultStore {
            fn memory_in_bytes(&self) -> usize {
                500
            }
        }

        let config = GraphProjectConfig::new("g", "neo4j");
        let entry = CatalogEntry::new(
            Arc::new(FakeGraphStore {
                database_id: "neo4j".to_string(),
                memory: 100,
            }),
            config,
        )
        .with_result_store(Arc::new(FixedResultStore));

        assert_eq!(entry.memory_in_bytes(), 600);
    }
}
