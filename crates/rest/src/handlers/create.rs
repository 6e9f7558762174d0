//! Create interaction handler.
//!
//! `POST /<plural>`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::{Lookup, RestError, RestResult};
use crate::extractors::JsonBody;
use crate::handlers::parse_entity;
use crate::responses::wire;
use crate::state::AppState;

/// Handler for the create interaction.
///
/// Creates a new instance; the server assigns the id. Content is never
/// deduplicated: two creates with identical field values both succeed with
/// distinct ids.
///
/// # HTTP Request
///
/// `POST [base]/[plural]`
///
/// # Response
///
/// - `201 Created` - the bare entity object, no envelope
/// - `400 Bad Request` - validation failure, all violations aggregated in
///   `errorMessages`
pub async fn create_handler(
    State(state): State<AppState>,
    Path(entity): Path<String>,
    JsonBody(payload): JsonBody,
) -> RestResult<Response> {
    let ty = parse_entity(&entity)?;

    debug!(entity = ty.plural(), "Processing create request");

    let instance = state
        .store()
        .create(ty, &payload)
        .map_err(|e| RestError::from_store(e, Lookup::Get))?;

    debug!(entity = ty.plural(), id = instance.id, "Instance created");

    // A fresh instance has no relationship edges yet.
    let body = wire::entity_json(ty, &instance, &[]);
    Ok((StatusCode::CREATED, Json(body)).into_response())
}
