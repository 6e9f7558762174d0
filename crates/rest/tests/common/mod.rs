//! Shared helpers for REST API tests.

use std::sync::Arc;

use axum_test::TestServer;
use thingd_rest::{ServerConfig, create_app_with_config};
use thingd_store::ThingStore;

/// Creates a test server over an empty store.
pub fn empty_server() -> (TestServer, Arc<ThingStore>) {
    server_with(ThingStore::new())
}

/// Creates a test server pre-loaded with the demo fixture: todos 1 and 2
/// filed as tasks of project 1, categories 1 ("Office") and 2 ("Home"),
/// and both todos filed under category 1.
pub fn seeded_server() -> (TestServer, Arc<ThingStore>) {
    let store = ThingStore::new();
    store.seed_demo_data().expect("Failed to seed demo data");
    server_with(store)
}

fn server_with(store: ThingStore) -> (TestServer, Arc<ThingStore>) {
    let store = Arc::new(store);
    let app = create_app_with_config(Arc::clone(&store), ServerConfig::for_testing());
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, store)
}
