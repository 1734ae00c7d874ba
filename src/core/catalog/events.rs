//! In-process catalog events fired by [`GraphCatalog`](super::GraphCatalog)
//! mutations.

/// Fired after a graph store is registered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStoreAddedEvent {
    user: String,
    database_name: String,
    graph_name: String,
    memory_bytes: usize,
}

impl GraphStoreAddedEvent {
    pub fn new(
        user: impl Into<String>,
        database_name: impl Into<String>,
        graph_name: impl Into<String>,
        memory_bytes: usize,
    ) -> Self {
        Self {
            user: user.into(),
            database_name: database_name.into(),
            graph_name: graph_name.into(),
            memory_bytes,
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn graph_name(&self) -> &str {
        &self.graph_name
    }

    pub fn memory_bytes(&self) -> usize {
        self.memory_bytes
    }
}

/// Fired after a graph store is removed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStoreRemovedEvent {
    user: String,
    database_name: String,
    graph_name: String,
    memory_bytes: usize,
}

impl GraphStoreRemovedEvent {
    pub fn new(
        user: impl Into<String>,
        database_name: impl Into<String>,
        graph_name: impl Into<String>,
        memory_bytes: usize,
    ) -> Self {
        Self {
            user: user.into(),
            database_name: database_name.into(),
            graph_name: graph_name.into(),
            memory_bytes,
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn graph_name(&self) -> &str {
        &self.graph_name
    }

    pub fn memory_bytes(&self) -> usize {
        self.memory_bytes
    }
}
