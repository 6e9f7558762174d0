//! Delete interaction handler.
//!
//! `DELETE /<plural>/:id`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::{Lookup, RestError, RestResult};
use crate::handlers::parse_entity;
use crate::state::AppState;

/// Handler for the delete interaction.
///
/// Removes the instance and cascades removal of every relationship edge
/// incident to it. The id is never reused.
///
/// # HTTP Request
///
/// `DELETE [base]/[plural]/[id]`
///
/// # Response
///
/// - `200 OK` - instance deleted
/// - `404 Not Found` - `Could not find any instances with <plural>/<id>`
///   (also the answer to a second delete of the same id)
pub async fn delete_handler(
    State(state): State<AppState>,
    Path((entity, id)): Path<(String, String)>,
) -> RestResult<Response> {
    let ty = parse_entity(&entity)?;

    debug!(entity = ty.plural(), id = %id, "Processing delete request");

    state
        .store()
        .delete(ty, &id)
        .map_err(|e| RestError::from_store(e, Lookup::Delete))?;

    debug!(entity = ty.plural(), id = %id, "Instance deleted");

    Ok(StatusCode::OK.into_response())
}
