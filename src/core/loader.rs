//! Collaborator interfaces injected into the core from its host: a
//! `GraphLoaderContext` carrying per-request plumbing, and a
//! `GraphStoreFactorySupplierProvider` registry resolving a project config
//! to the factory that can build it.
//!
//! The core never constructs either on its own — both are supplied by
//! whatever embeds it, mirroring the teacher's
//! `graph_store_catalog::loaders` split between "what the loader needs"
//! and "who builds the graph store".

use std::sync::Arc;

use crate::errors::GdsError;
use crate::termination::TerminationFlag;
use crate::util::log::{Log, NoOpLog};

/// Task-registry and user-log-registry factories are themselves injected
/// collaborators in the teacher's application layer (per-request task
/// tracking and per-user log scoping); this core only needs to be able to
/// hand one to a loader, not to implement either, so both are opaque
/// no-op markers here.
pub trait TaskRegistryFactory: Send + Sync {
    fn name(&self) -> &str {
        "no-op"
    }
}

pub trait UserLogRegistryFactory: Send + Sync {
    fn name(&self) -> &str {
        "no-op"
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct NoOpTaskRegistryFactory;
impl TaskRegistryFactory for NoOpTaskRegistryFactory {}

#[derive(Debug, Clone, Copy, Default)]
struct NoOpUserLogRegistryFactory;
impl UserLogRegistryFactory for NoOpUserLogRegistryFactory {}

/// Everything a graph loader needs from its host, bundled into one value
/// so constructing a loader never requires more than a single parameter.
#[derive(Clone)]
pub struct GraphLoaderContext {
    database_id: String,
    log: Arc<dyn Log>,
    termination_flag: TerminationFlag,
    task_registry_factory: Arc<dyn TaskRegistryFactory>,
    user_log_registry_factory: Arc<dyn UserLogRegistryFactory>,
}

impl GraphLoaderContext {
    pub fn new(
        database_id: impl Into<String>,
        log: Arc<dyn Log>,
        termination_flag: TerminationFlag,
        task_registry_factory: Arc<dyn TaskRegistryFactory>,
        user_log_registry_factory: Arc<dyn UserLogRegistryFactory>,
    ) -> Self {
        Self {
            database_id: database_id.into(),
            log,
            termination_flag,
            task_registry_factory,
            user_log_registry_factory,
        }
    }

    /// A context with every collaborator wired to its no-op form. Safe to
    /// use wherever the host has nothing real to inject (tests, a loader
    /// that doesn't need cancellation or logging).
    pub fn null_context() -> Self {
        Self {
            database_id: String::new(),
            log: Arc::new(NoOpLog),
            termination_flag: TerminationFlag::default(),
            task_registry_factory: Arc::new(NoOpTaskRegistryFactory),
            user_log_registry_factory: Arc::new(NoOpUserLogRegistryFactory),
        }
    }

    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    pub fn log(&self) -> &Arc<dyn Log> {
        &self.log
    }

    pub fn termination_flag(&self) -> &TerminationFlag {
        &self.termination_flag
    }

    pub fn task_registry_factory(&self) -> &Arc<dyn TaskRegistryFactory> {
        &self.task_registry_factory
    }

    pub fn user_log_registry_factory(&self) -> &Arc<dyn UserLogRegistryFactory> {
        &self.user_log_registry_factory
    }
}

/// A `NULL_CONTEXT`-equivalent constructed once and shared, matching the
/// teacher's preference for a ready-made no-op collaborator over making
/// every caller build one.
pub fn null_context() -> GraphLoaderContext {
    GraphLoaderContext::null_context()
}

/// Something capable of building a graph store for a given config type,
/// keyed by an opaque config-type tag supplied by the caller.
pub trait GraphStoreFactorySupplier: Send + Sync {
    fn can_supply_factory_for(&self, config_type: &str) -> bool;
    fn config_type(&self) -> &str;
}

/// Linear registry of providers, resolved by asking each in registration
/// order whether it can handle the requested config type.
#[derive(Default)]
pub struct GraphStoreFactorySupplierProvider {
    suppliers: Vec<Arc<dyn GraphStoreFactorySupplier>>,
}

impl GraphStoreFactorySupplierProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, supplier: Arc<dyn GraphStoreFactorySupplier>) {
        self.suppliers.push(supplier);
    }

    pub fn supplier(
        &self,
        config_type: &str,
    ) -> Result<Arc<dyn GraphStoreFactorySupplier>, GdsError> {
        self.suppliers
            .iter()
            .find(|supplier| supplier.can_supply_factory_for(config_type))
            .cloned()
            .ok_or_else(|| GdsError::NoFactory(config_type.to_string()))
    }
}
