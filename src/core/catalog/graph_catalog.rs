//! Top-level, multi-tenant graph catalog.

use std::collections::HashMap;
use std::sync::RwLock;

use super::catalog_entry::CatalogEntry;
use super::catalog_request::CatalogRequest;
use super::events::{GraphStoreAddedEvent, GraphStoreRemovedEvent};
use super::listener::{CatalogListener, ListenerDispatch};
use super::user_graph_catalog::UserGraphCatalog;
use crate::errors::GdsError;

/// Registers graphs across every user, dispatching to each user's own
/// [`UserGraphCatalog`].
#[derive(Default)]
pub struct GraphCatalog {
    by_user: RwLock<HashMap<String, UserGraphCatalog>>,
    listeners: ListenerDispatch,
}

impl GraphCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_listener(&mut self, listener: Box<dyn CatalogListener>) {
        self.listeners.register(listener);
    }

    pub fn set(&self, user: &str, entry: CatalogEntry) -> Result<(), GdsError> {
        let database_name = entry.database_id().to_string();
        let graph_name = entry.graph_name().to_string();
        let memory_bytes = entry.memory_in_bytes();

        {
            let mut by_user = self.by_user.write().expect("catalog lock poisoned");
            let user_catalog = by_user.entry(user.to_string()).or_default();
            user_catalog.set(&database_name, &graph_name, entry)?;
        }

        self.listeners.fire_added(&GraphStoreAddedEvent::new(
            user,
            database_name,
            graph_name,
            memory_bytes,
        ));
        Ok(())
    }

    /// Users whose catalog holds `graph_name` in `request`'s database,
    /// honoring the request's username scope: a single effective user when
    /// restricted, every user otherwise. Shared by `get` and `remove` so
    /// both apply exactly the same admin/ambiguous-match search.
    fn matching_users(&self, request: &CatalogRequest, graph_name: &str) -> Vec<String> {
        let by_user = self.by_user.read().expect("catalog lock poisoned");

        if request.restrict_search_to_username_catalog() {
            let user = request.effective_user();
            return by_user
                .get(user)
                .filter(|catalog| catalog.exists(request.database_name(), graph_name))
                .map(|_| user.to_string())
                .into_iter()
                .collect();
        }

        by_user
            .iter()
            .filter(|(_, catalog)| catalog.exists(request.database_name(), graph_name))
            .map(|(user, _)| user.clone())
            .collect()
    }

    /// Resolves `request`/`graph_name` to the single owning user, or fails
    /// with [`GdsError::NotFound`] (no owner) or
    /// [`GdsError::AmbiguousMatch`] (more than one owner, only possible for
    /// an unrestricted admin search).
    fn resolve_owner(&self, request: &CatalogRequest, graph_name: &str) -> Result<String, GdsError> {
        let mut users = self.matching_users(request, graph_name);
        match users.len() {
            0 => Err(GdsError::NotFound {
                user: request.effective_user().to_string(),
                graph_name: graph_name.to_string(),
            }),
            1 => Ok(users.pop().unwrap()),
            _ => Err(GdsError::AmbiguousMatch {
                graph_name: graph_name.to_string(),
                users,
            }),
        }
    }

    /// Looks up a graph according to the request's username scope.
    ///
    /// When the request is restricted to a single user, the lookup never
    /// returns an entry owned by a different user. Otherwise (an admin
    /// request with no override) it searches every user's catalog, failing
    /// with [`GdsError::AmbiguousMatch`] if more than one user owns a graph
    /// by that name.
    pub fn get(&self, request: &CatalogRequest, graph_name: &str) -> Result<CatalogEntry, GdsError> {
        let user = self.resolve_owner(request, graph_name)?;
        let by_user = self.by_user.read().expect("catalog lock poisoned");
        by_user
            .get(&user)
            .and_then(|catalog| catalog.get(request.database_name(), graph_name))
            .ok_or(GdsError::NotFound {
                user,
                graph_name: graph_name.to_string(),
            })
    }

    /// Removes a graph according to the request's username scope, applying
    /// the same admin/ambiguous-match search as [`Self::get`].
    ///
    /// `consumer` is invoked on the entry before it is dropped from the
    /// catalog — atomically with deregistration, so a caller can
    /// `release()` the underlying graph store without a window where
    /// another thread could still look it up after release. When no
    /// matching graph exists, `fail_on_missing` selects whether that is an
    /// error (`GdsError::NotFound`) or a silent no-op (`Ok(None)`, no event
    /// fired). An ambiguous match (admin search spanning more than one
    /// owning user) always fails, regardless of `fail_on_missing`.
    pub fn remove(
        &self,
        request: &CatalogRequest,
        graph_name: &str,
        consumer: impl FnOnce(&CatalogEntry),
        fail_on_missing: bool,
    ) -> Result<Option<CatalogEntry>, GdsError> {
        let user = match self.resolve_owner(request, graph_name) {
            Ok(user) => user,
            Err(GdsError::NotFound { .. }) if !fail_on_missing => return Ok(None),
            Err(err) => return Err(err),
        };

        let removed = {
            let by_user = self.by_user.read().expect("catalog lock poisoned");
            by_user
                .get(&user)
                .and_then(|catalog| catalog.remove_with(request.database_name(), graph_name, consumer))
        };

        match removed {
            Some(entry) => {
                self.listeners.fire_removed(&GraphStoreRemovedEvent::new(
                    &user,
                    request.database_name(),
                    graph_name,
                    entry.memory_in_bytes(),
                ));
                Ok(Some(entry))
            }
            None if fail_on_missing => Err(GdsError::NotFound {
                user,
                graph_name: graph_name.to_string(),
            }),
            None => Ok(None),
        }
    }

    pub fn exists(&self, user: &str, database_name: &str, graph_name: &str) -> bool {
        self.by_user
            .read()
            .expect("catalog lock poisoned")
            .get(user)
            .map(|catalog| catalog.exists(database_name, graph_name))
            .unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.by_user
            .read()
            .expect("catalog lock poisoned")
            .values()
            .map(|catalog| catalog.count())
            .sum()
    }

    pub fn count_for_database(&self, database_name: &str) -> usize {
        self.by_user
            .read()
            .expect("catalog lock poisoned")
            .values()
            .map(|catalog| catalog.count_for_database(database_name))
            .sum()
    }

    pub fn drop_all(&self, user: &str) -> Vec<CatalogEntry> {
        let dropped = self
            .by_user
            .read()
            .expect("catalog lock poisoned")
            .get(user)
            .map(|catalog| catalog.drop_all())
            .unwrap_or_default();

        for entry in &dropped {
            self.listeners.fire_removed(&GraphStoreRemovedEvent::new(
                user,
                entry.database_id(),
                entry.graph_name(),
                entry.memory_in_bytes(),
            ));
        }
        dropped
    }

    pub fn drop_all_for_database(&self, user: &str, database_name: &str) -> Vec<CatalogEntry> {
        let dropped = self
            .by_user
            .read()
            .expect("catalog lock poisoned")
            .get(user)
            .map(|catalog| catalog.drop_all_for_database(database_name))
            .unwrap_or_default();

        for entry in &dropped {
            self.listeners.fire_removed(&GraphStoreRemovedEvent::new(
                user,
                entry.database_id(),
                entry.graph_name(),
                entry.memory_in_bytes(),
            ));
        }
        dropped
    }
}
