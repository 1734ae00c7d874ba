//! A single user's slice of the graph catalog.

use std::collections::HashMap;
use std::sync::RwLock;

use super::catalog_entry::CatalogEntry;
use super::degree_distribution::DegreeDistribution;
use crate::errors::GdsError;

/// Maps `(database name, graph name)` to a registered graph for one user.
#[derive(Default)]
pub struct UserGraphCatalog {
    entries: RwLock<HashMap<(String, String), CatalogEntry>>,
}

impl UserGraphCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, database_name: &str, graph_name: &str, entry: CatalogEntry) -> Result<(), GdsError> {
        let key = (database_name.to_string(), graph_name.to_string());
        let mut entries = self.entries.write().expect("catalog lock poisoned");
        if entries.contains_key(&key) {
            return Err(GdsError::DuplicateGraph {
                user: "".to_string(),
                database_name: database_name.to_string(),
                graph_name: graph_name.to_string(),
            });
        }
        entries.insert(key, entry);
        Ok(())
    }

    pub fn get(&self, database_name: &str, graph_name: &str) -> Option<CatalogEntry> {
        let key = (database_name.to_string(), graph_name.to_string());
        self.entries
            .read()
            .expect("catalog lock poisoned")
            .get(&key)
            .cloned()
    }

    pub fn remove(&self, database_name: &str, graph_name: &str) -> Option<CatalogEntry> {
        let key = (database_name.to_string(), graph_name.to_string());
        self.entries.write().expect("catalog lock poisoned").remove(&key)
    }

    /// Removes an entry, invoking `consumer` on it first so a caller can
    /// release its resources atomically with deregistration: the lookup,
    /// the consumer call, and the removal all happen under one write-lock
    /// acquisition, so no other thread can observe the entry in between.
    pub fn remove_with(
        &self,
        database_name: &str,
        graph_name: &str,
        consumer: impl FnOnce(&CatalogEntry),
    ) -> Option<CatalogEntry> {
        let key = (database_name.to_string(), graph_name.to_string());
        let mut entries = self.entries.write().expect("catalog lock poisoned");
        if let Some(entry) = entries.get(&key) {
            consumer(entry);
        } else {
            return None;
        }
        entries.remove(&key)
    }

    pub fn exists(&self, database_name: &str, graph_name: &str) -> bool {
        let key = (database_name.to_string(), graph_name.to_string());
        self.entries
            .read()
            .expect("catalog lock poisoned")
            .contains_key(&key)
    }

    pub fn count(&self) -> usize {
        self.entries.read().expect("catalog lock poisoned").len()
    }

    pub fn count_for_database(&self, database_name: &str) -> usize {
        self.entries
            .read()
            .expect("catalog lock poisoned")
            .keys()
            .filter(|(db, _)| db == database_name)
            .count()
    }

    pub fn drop_all(&self) -> Vec<CatalogEntry> {
        self.entries
            .write()
            .expect("catalog lock poisoned")
            .drain()
            .map(|(_, entry)| entry)
            .collect()
    }

    pub fn drop_all_for_database(&self, database_name: &str) -> Vec<CatalogEntry> {
        let mut entries = self.entries.write().expect("catalog lock poisoned");
        let keys: Vec<_> = entries
            .keys()
            .filter(|(db, _)| db == database_name)
            .cloned()
            .collect();
        keys.into_iter()
            .filter_map(|key| entries.remove(&key))
            .collect()
    }

    pub fn set_degree_distribution(
        &self,
        database_name: &str,
        graph_name: &str,
        distribution: DegreeDistribution,
    ) -> Result<(), GdsError> {
        let key = (database_name.to_string(), graph_name.to_string());
        let mut entries = self.entries.write().expect("catalog lock poisoned");
        let entry = entries.get_mut(&key).ok_or_else(|| GdsError::NotFound {
            user: "".to_string(),
            graph_name: graph_name.to_string(),
        })?;
        entry.set_degree_distribution(distribution);
        Ok(())
    }

    pub fn get_degree_distribution(
        &self,
        database_name: &str,
        graph_name: &str,
    ) -> Option<DegreeDistribution> {
        self.get(database_name, graph_name)
            .and_then(|entry| entry.degree_distribution().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GraphProjectConfig;
    use crate::core::catalog::graph_store_handle::GraphStoreHandle;
    use std::sync::Arc;

    struct FakeGraphStore;
    impl GraphStoreHandle for FakeGraphStore {
        fn database_id(&self) -> &str {
            "neo4j"
        }
        fn memory_in_bytes(&self) -> usize {
            0
        }
        fn node_count(&self) -> usize {
            0
        }
        fn relationship_count(&self) -> usize {
            0
        }
    }

    fn entry() -> CatalogEntry {
        CatalogEntry::new(Arc::new(FakeGraphStore), GraphProjectConfig::new("g", "neo4j"))
    }

    #[test]
    fn set_get_remove_round_trip() {
        let catalog = UserGraphCatalog::new();
        catalog.set("neo4j", "g", entry()).unwrap();
        assert!(catalog.exists("neo4j", "g"));
        assert_eq!(catalog.count(), 1);
        assert!(catalog.get("neo4j", "g").is_some());
        assert!(catalog.remove("neo4j", "g").is_some());
        assert!(!catalog.exists("neo4j", "g"));
    }

    #[test]
    fn remove_with_invokes_consumer_before_the_entry_is_gone() {
        let catalog = UserGraphCatalog::new();
        catalog.set("neo4j", "g", entry()).unwrap();

        let mut consumed_name = None;
        let removed = catalog.remove_with("neo4j", "g", |entry| {
            consumed_name = Some(entry.graph_name().to_string());
        });

        assert_eq!(consumed_name.as_deref(), Some("g"));
        assert!(removed.is_some());
        assert!(!catalog.exists("neo4j", "g"));
    }

    #[test]
    fn remove_with_on_a_miss_never_calls_the_consumer() {
        let catalog = UserGraphCatalog::new();
        let mut called = false;
        let removed = catalog.remove_with("neo4j", "missing", |_| called = true);
        assert!(removed.is_none());
        assert!(!called);
    }

    #[test]
    fn duplicate_set_is_rejected() {
        let catalog = UserGraphCatalog::new();
        catalog.set("neo4j", "g", entry()).unwrap();
        let result = catalog.set("neo4j", "g", entry());
        assert!(matches!(result, Err(GdsError::DuplicateGraph { .. })));
    }

    #[test]
    fn drop_all_for_database_only_touches_that_database() {
        let catalog = UserGraphCatalog::new();
        catalog.set("neo4j", "g1", entry()).unwrap();
        catalog.set("other", "g2", entry()).unwrap();

        let dropped = catalog.drop_all_for_database("neo4j");
        assert_eq!(dropped.len(), 1);
        assert!(!catalog.exists("neo4j", "g1"));
        assert!(catalog.exists("other", "g2"));
    }
}
