//! Route configuration and per-path method tables.
//!
//! Entity families share one set of dynamic routes; the entity segment is
//! validated in the handlers, so unknown families are unmapped (404).
//!
//! The method table per path shape:
//!
//! | Path shape | GET | POST | PUT | DELETE | HEAD | OPTIONS | PATCH |
//! |---|---|---|---|---|---|---|---|
//! | `/X` | list | create | 405 | 405 | mirror | 200 | 405 |
//! | `/X/:id` | read | amend | replace | delete | mirror | 200 | 405 |
//! | `/X/:id/rel` | related | link | 405 | 405 | mirror | 200 | 405 |
//! | `/X/:id/rel/:id2` | **404** | **404** | 405 | unlink | **404** | 200 | 405 |
//!
//! Axum answers 405 itself for verbs missing from a route's method router
//! and mirrors GET for HEAD. The single-edge path is the exception: its
//! unmapped verbs must answer 404, so it carries an explicit fallback, with
//! PUT and PATCH pinned back to 405.

use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get},
};

use crate::handlers::{self, options};
use crate::state::AppState;

/// Creates all thingd REST API routes.
///
/// # Routes
///
/// - `GET /gui` - liveness page
/// - `GET|POST /{entity}` - list / create
/// - `GET|POST|PUT|DELETE /{entity}/{id}` - read / amend / replace / delete
/// - `GET|POST /{entity}/{id}/{relation}` - list related / link
/// - `DELETE /{entity}/{id}/{relation}/{child_id}` - unlink
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/gui",
            get(handlers::gui_handler).options(options::gui_options),
        )
        .route(
            "/{entity}",
            get(handlers::list_handler)
                .post(handlers::create_handler)
                .options(options::collection_options),
        )
        .route(
            "/{entity}/{id}",
            get(handlers::read_handler)
                .post(handlers::amend_handler)
                .put(handlers::replace_handler)
                .delete(handlers::delete_handler)
                .options(options::item_options),
        )
        .route(
            "/{entity}/{id}/{relation}",
            get(handlers::related_handler)
                .post(handlers::link_handler)
                .options(options::relation_options),
        )
        .route(
            "/{entity}/{id}/{relation}/{child_id}",
            delete(handlers::unlink_handler)
                .put(edge_method_not_allowed)
                .patch(edge_method_not_allowed)
                .options(options::edge_options)
                .fallback(handlers::edge_unmapped_handler),
        )
        .with_state(state)
}

/// 405 for PUT/PATCH on the single-edge path, which only maps DELETE.
async fn edge_method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "DELETE, OPTIONS")],
    )
        .into_response()
}
