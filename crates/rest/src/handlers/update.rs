//! Amend and replace interaction handlers.
//!
//! `POST /<plural>/:id` (merge) and `PUT /<plural>/:id` (replace).
//!
//! The two verbs are deliberately asymmetric: a merge only overwrites the
//! supplied fields, while a replace re-requires every mandatory field and
//! resets omitted optional fields to their defaults. A PUT lacking `title`
//! fails where a POST to the same id would have succeeded by leaving the old
//! title intact.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::{Lookup, RestError, RestResult};
use crate::extractors::JsonBody;
use crate::handlers::{parse_entity, render};
use crate::state::AppState;

/// Handler for the amend interaction (merge update).
///
/// # HTTP Request
///
/// `POST [base]/[plural]/[id]`
///
/// # Response
///
/// - `200 OK` - the bare entity object after the merge
/// - `400 Bad Request` - validation failure
/// - `404 Not Found` - `No such <singular> entity instance with GUID or ID
///   <id> found`
pub async fn amend_handler(
    State(state): State<AppState>,
    Path((entity, id)): Path<(String, String)>,
    JsonBody(payload): JsonBody,
) -> RestResult<Response> {
    let ty = parse_entity(&entity)?;

    debug!(entity = ty.plural(), id = %id, "Processing amend request");

    let instance = state
        .store()
        .amend(ty, &id, &payload)
        .map_err(|e| RestError::from_store(e, Lookup::Amend))?;

    debug!(entity = ty.plural(), id = instance.id, "Instance amended");

    Ok((StatusCode::OK, Json(render(&state, ty, &instance))).into_response())
}

/// Handler for the replace interaction (full update).
///
/// # HTTP Request
///
/// `PUT [base]/[plural]/[id]`
///
/// # Response
///
/// - `200 OK` - the bare entity object after the replace
/// - `400 Bad Request` - validation failure (mandatory fields re-required)
/// - `404 Not Found` - same wording as the amend family
pub async fn replace_handler(
    State(state): State<AppState>,
    Path((entity, id)): Path<(String, String)>,
    JsonBody(payload): JsonBody,
) -> RestResult<Response> {
    let ty = parse_entity(&entity)?;

    debug!(entity = ty.plural(), id = %id, "Processing replace request");

    let instance = state
        .store()
        .replace(ty, &id, &payload)
        .map_err(|e| RestError::from_store(e, Lookup::Amend))?;

    debug!(entity = ty.plural(), id = instance.id, "Instance replaced");

    Ok((StatusCode::OK, Json(render(&state, ty, &instance))).into_response())
}
