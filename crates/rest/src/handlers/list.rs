//! Collection listing handler.
//!
//! `GET /<plural>`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::RestResult;
use crate::handlers::{parse_entity, render};
use crate::responses::wire;
use crate::state::AppState;

/// Handler for the collection listing.
///
/// Returns every instance of the family wrapped in the type-pluralized
/// envelope. Ordering is not part of the contract.
///
/// # HTTP Request
///
/// `GET [base]/[plural]`
///
/// # Response
///
/// - `200 OK` - `{"<plural>": [...]}`
/// - `404 Not Found` - unknown entity family
pub async fn list_handler(
    State(state): State<AppState>,
    Path(entity): Path<String>,
) -> RestResult<Response> {
    let ty = parse_entity(&entity)?;

    debug!(entity = ty.plural(), "Processing list request");

    let items = state
        .store()
        .list(ty)
        .iter()
        .map(|instance| render(&state, ty, instance))
        .collect();

    Ok((StatusCode::OK, Json(wire::collection_envelope(ty, items))).into_response())
}
