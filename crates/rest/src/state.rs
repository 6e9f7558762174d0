//! Application state for the REST API.

use std::sync::Arc;

use thingd_store::ThingStore;

use crate::config::ServerConfig;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The entity store.
    store: Arc<ThingStore>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: Arc<ThingStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the entity store.
    pub fn store(&self) -> &ThingStore {
        &self.store
    }

    /// Returns a clone of the store Arc.
    pub fn store_arc(&self) -> Arc<ThingStore> {
        Arc::clone(&self.store)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns whether relation reads with a missing parent should 404
    /// instead of answering an empty 200.
    pub fn strict_relation_reads(&self) -> bool {
        self.config.strict_relation_reads
    }
}
