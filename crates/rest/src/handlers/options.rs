//! OPTIONS handlers.
//!
//! Every mapped path shape answers OPTIONS with 200 and an `Allow` header
//! listing its method table. Unknown entity families and unknown relation
//! names are unmapped routes here as for every other verb, so the segments
//! are validated before answering.

use axum::{
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::RestResult;
use crate::handlers::{parse_entity, parse_relation};

fn allow(methods: &'static str) -> Response {
    (StatusCode::OK, [(header::ALLOW, methods)]).into_response()
}

/// OPTIONS for collection paths (`/X`).
pub async fn collection_options(Path(entity): Path<String>) -> RestResult<Response> {
    parse_entity(&entity)?;
    Ok(allow("GET, POST, HEAD, OPTIONS"))
}

/// OPTIONS for item paths (`/X/:id`).
///
/// The id segment is not checked; the method table is a property of the
/// path shape, not of any particular instance.
pub async fn item_options(Path((entity, _id)): Path<(String, String)>) -> RestResult<Response> {
    parse_entity(&entity)?;
    Ok(allow("GET, POST, PUT, DELETE, HEAD, OPTIONS"))
}

/// OPTIONS for relation collection paths (`/X/:id/rel`).
pub async fn relation_options(
    Path((entity, _id, relation)): Path<(String, String, String)>,
) -> RestResult<Response> {
    let ty = parse_entity(&entity)?;
    parse_relation(ty, &relation)?;
    Ok(allow("GET, POST, HEAD, OPTIONS"))
}

/// OPTIONS for single-edge paths (`/X/:id/rel/:id2`).
pub async fn edge_options(
    Path((entity, _id, relation, _child_id)): Path<(String, String, String, String)>,
) -> RestResult<Response> {
    let ty = parse_entity(&entity)?;
    parse_relation(ty, &relation)?;
    Ok(allow("DELETE, OPTIONS"))
}

/// OPTIONS for the `/gui` page.
pub async fn gui_options() -> Response {
    allow("GET, HEAD, OPTIONS")
}
