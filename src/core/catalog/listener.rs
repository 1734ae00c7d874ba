//! Catalog listener dispatch.
//!
//! Listeners are invoked synchronously, on the caller's thread, inside the
//! triggering catalog operation. A failing listener must never affect the
//! operation itself or prevent other listeners from running.

use super::events::{GraphStoreAddedEvent, GraphStoreRemovedEvent};

/// Observes graph registration/removal in a [`GraphCatalog`](super::GraphCatalog).
pub trait CatalogListener: Send + Sync {
    fn on_graph_added(&self, _event: &GraphStoreAddedEvent) {}
    fn on_graph_removed(&self, _event: &GraphStoreRemovedEvent) {}
}

/// Dispatches events to a list of listeners, isolating panics per listener.
#[derive(Default)]
pub struct ListenerDispatch {
    listeners: Vec<Box<dyn CatalogListener>>,
}

impl ListenerDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, listener: Box<dyn CatalogListener>) {
        self.listeners.push(listener);
    }

    pub fn fire_added(&self, event: &GraphStoreAddedEvent) {
        for listener in &self.listeners {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                listener.on_graph_added(event);
            }));
            if result.is_err() {
                log::warn!(
                    "catalog listener panicked while handling GraphStoreAddedEvent for '{}'",
                    event.graph_name()
                );
            }
        }
    }

    pub fn fire_removed(&self, event: &GraphStoreRemovedEvent) {
        for listener in &self.listeners {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                listener.on_graph_removed(event);
            }));
            if result.is_err() {
                log::warn!(
                    "catalog listener panicked while handling GraphStoreRemovedEvent for '{}'",
                    event.graph_name()
                );
            }
        }
    }
}
