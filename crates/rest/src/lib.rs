//! # thingd-rest - REST API for the thingd entity/relationship service
//!
//! This crate exposes the [`thingd_store::ThingStore`] over HTTP: a small
//! REST dispatcher managing projects, todos and categories plus the named
//! many-to-many relationships between them.
//!
//! ## API Endpoints
//!
//! For each entity family `X` in `projects`, `todos`, `categories`:
//!
//! | Path | GET | POST | PUT | DELETE |
//! |------|-----|------|-----|--------|
//! | `/X` | list | create | 405 | 405 |
//! | `/X/:id` | read | amend (merge) | replace | delete |
//! | `/X/:id/rel` | list related | link | 405 | 405 |
//! | `/X/:id/rel/:id2` | 404 | 404 | 405 | unlink |
//!
//! Relationship routes: `projects/:id/tasks`, `projects/:id/categories`,
//! `todos/:id/categories` and `todos/:id/tasksof` (the inverse of `tasks`).
//! `GET /gui` answers 200 and doubles as the liveness probe.
//!
//! HEAD mirrors GET with an empty body; OPTIONS answers 200 with an `Allow`
//! header; PATCH is 405 everywhere.
//!
//! ## Wire Format
//!
//! - Collection and item reads are wrapped in a type-pluralized envelope:
//!   `{"todos": [...]}`. Item reads return an array of exactly one.
//! - Create and update responses are the bare entity object.
//! - Relationship listings are keyed by the target type's plural name
//!   (`/todos/:id/tasksof` returns `{"projects": [...]}`).
//! - Errors are `{"errorMessages": ["...", ...]}` with 400/404 status.
//! - Project flags (`completed`, `active`) travel as the strings
//!   `"true"`/`"false"`; a todo's `doneStatus` is a native JSON boolean.
//!   External clients depend on the inconsistency, so it is preserved.
//!
//! ## Preserved Quirks
//!
//! Two observed behaviors of the original service are reproduced rather than
//! fixed (see [`ServerConfig::strict_relation_reads`] for the first):
//!
//! - `GET /X/:id/rel` with an invalid or unknown parent id answers 200 with
//!   an empty collection instead of 404.
//! - `DELETE /X/:id/rel/:id2` with a structurally non-numeric parent id
//!   answers 400 with a diagnostic message (an internal null-parent fault
//!   surfaced as a client error).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use thingd_rest::{create_app, ServerConfig};
//! use thingd_store::ThingStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(ThingStore::new());
//!     let app = create_app(store);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:4567").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`error`] - Error types and the `errorMessages` envelope
//! - [`config`] - Server configuration
//! - [`state`] - Application state (store, configuration)
//! - [`handlers`] - HTTP request handlers per interaction
//! - [`extractors`] - Request body extraction
//! - [`responses`] - Envelopes and the per-type wire-format policy
//! - [`routing`] - Route configuration and per-path method tables

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use thingd_store::ThingStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app(store: Arc<ThingStore>) -> Router {
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up all routes, the trace and timeout layers, and CORS if enabled.
pub fn create_app_with_config(store: Arc<ThingStore>, config: ServerConfig) -> Router {
    info!("Creating REST API server");

    let request_timeout = config.request_timeout;
    let enable_cors = config.enable_cors;
    let cors = build_cors_layer(&config);

    let state = AppState::new(store, config);
    let router = routing::routes::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            request_timeout,
        )));

    let router = if enable_cors { router.layer(cors) } else { router };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "thingd={level},thingd_rest={level},thingd_store={level},tower_http={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
