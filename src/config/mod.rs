//! Graph project configuration.
//!
//! A small typed configuration carried alongside each catalog entry,
//! mirroring the teacher's `GraphCreateConfig`/builder pattern but scoped
//! to what a single in-memory graph project needs to record.

use crate::concurrency::Concurrency;
use crate::errors::GdsError;

/// Configuration recorded when a graph is projected into the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphProjectConfig {
    pub graph_name: String,
    pub database_id: String,
    pub read_concurrency: Concurrency,
}

impl GraphProjectConfig {
    pub fn new(graph_name: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            graph_name: graph_name.into(),
            database_id: database_id.into(),
            read_concurrency: Concurrency::default(),
        }
    }

    pub fn builder(
        graph_name: impl Into<String>,
        database_id: impl Into<String>,
    ) -> GraphProjectConfigBuilder {
        GraphProjectConfigBuilder::new(graph_name, database_id)
    }

    pub fn validate(&self) -> Result<(), GdsError> {
        if self.graph_name.trim().is_empty() {
            return Err(GdsError::InvalidConfig(
                "graphName must not be blank".to_string(),
            ));
        }
        if self.database_id.trim().is_empty() {
            return Err(GdsError::InvalidConfig(
                "databaseId must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`GraphProjectConfig`].
#[derive(Debug)]
pub struct GraphProjectConfigBuilder {
    graph_name: String,
    database_id: String,
    read_concurrency: Option<Concurrency>,
}

impl GraphProjectConfigBuilder {
    pub fn new(graph_name: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            graph_name: graph_name.into(),
            database_id: database_id.into(),
            read_concurrency: None,
        }
    }

    pub fn read_concurrency(mut self, concurrency: Concurrency) -> Self {
        self.read_concurrency = Some(concurrency);
        self
    }

    pub fn build(self) -> Result<GraphProjectConfig, GdsError> {
        let config = GraphProjectConfig {
            graph_name: self.graph_name,
            database_id: self.database_id,
            read_concurrency: self.read_concurrency.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_single_threaded_concurrency() {
        let config = GraphProjectConfig::new("graph", "neo4j");
        assert_eq!(config.read_concurrency, Concurrency::single_threaded());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_sets_read_concurrency() {
        let config = GraphProjectConfig::builder("graph", "neo4j")
            .read_concurrency(Concurrency::of(4))
            .build()
            .unwrap();

        assert_eq!(config.read_concurrency.value(), 4);
    }

    #[test]
    fn blank_graph_name_fails_validation() {
        let err = GraphProjectConfig::builder("  ", "neo4j").build();
        assert!(err.is_err());
    }

    #[test]
    fn blank_database_id_fails_validation() {
        let err = GraphProjectConfig::builder("graph", "").build();
        assert!(err.is_err());
    }
}
