//! Read interaction handler.
//!
//! `GET /<plural>/:id`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::{Lookup, RestError, RestResult};
use crate::handlers::{parse_entity, render};
use crate::responses::wire;
use crate::state::AppState;

/// Handler for the read interaction.
///
/// # HTTP Request
///
/// `GET [base]/[plural]/[id]`
///
/// # Response
///
/// - `200 OK` - `{"<plural>": [ <the instance> ]}` (array of exactly one)
/// - `404 Not Found` - `Could not find an instance with <plural>/<id>`
pub async fn read_handler(
    State(state): State<AppState>,
    Path((entity, id)): Path<(String, String)>,
) -> RestResult<Response> {
    let ty = parse_entity(&entity)?;

    debug!(entity = ty.plural(), id = %id, "Processing read request");

    let instance = state
        .store()
        .get(ty, &id)
        .map_err(|e| RestError::from_store(e, Lookup::Get))?;

    let body = wire::item_envelope(ty, render(&state, ty, &instance));
    Ok((StatusCode::OK, Json(body)).into_response())
}
