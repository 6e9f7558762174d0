//! Relationship interaction handlers.
//!
//! Relation collection path (`/<plural>/:id/<relation>`): GET lists, POST
//! links. Single-edge path (`/<plural>/:id/<relation>/:child`): DELETE
//! unlinks; GET/HEAD/POST are deliberately unmapped routes (404), unlike
//! PUT/PATCH which are 405.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thingd_store::StoreError;
use tracing::debug;

use crate::error::{Lookup, RestError, RestResult};
use crate::extractors::JsonBody;
use crate::handlers::{parse_entity, parse_relation, render};
use crate::responses::wire;
use crate::state::AppState;

/// Handler for the relation listing.
///
/// Answers inside an envelope keyed by the **target type's plural name**,
/// not the relation name: `/todos/:id/tasksof` answers `{"projects": [...]}`.
///
/// # HTTP Request
///
/// `GET [base]/[plural]/[id]/[relation]`
///
/// # Response
///
/// - `200 OK` - the related instances; also answered with an **empty**
///   collection when the parent id is invalid or unknown (a preserved quirk
///   of the original service, see `ServerConfig::strict_relation_reads`)
/// - `404 Not Found` - unknown relation name, or a missing parent under
///   strict relation reads
pub async fn related_handler(
    State(state): State<AppState>,
    Path((entity, id, relation)): Path<(String, String, String)>,
) -> RestResult<Response> {
    let ty = parse_entity(&entity)?;
    let def = parse_relation(ty, &relation)?;

    debug!(
        parent = ty.plural(),
        id = %id,
        relation = def.name,
        "Processing relation listing request"
    );

    let instances = match state.store().related(ty, &id, def) {
        Ok(instances) => instances,
        Err(StoreError::ParentNotFound { .. }) if !state.strict_relation_reads() => {
            debug!(
                parent = ty.plural(),
                id = %id,
                "Parent missing; answering empty listing"
            );
            Vec::new()
        }
        Err(e) => return Err(RestError::from_store(e, Lookup::Get)),
    };

    let items = instances
        .iter()
        .map(|instance| render(&state, def.child, instance))
        .collect();

    Ok((StatusCode::OK, Json(wire::relation_envelope(def, items))).into_response())
}

/// Handler for creating a relationship edge.
///
/// The body is `{"id": "<childId>"}`; a full child object carrying its own
/// `id` is equally accepted — only the `id` member is consulted. Linking an
/// already-linked pair still answers 201.
///
/// # HTTP Request
///
/// `POST [base]/[plural]/[id]/[relation]`
///
/// # Response
///
/// - `201 Created` - edge created
/// - `400 Bad Request` - no usable `id` member in the body
/// - `404 Not Found` - `Could not find parent thing for relationship
///   <plural>/<id>/<relation>`, or no instance matching the body's id
pub async fn link_handler(
    State(state): State<AppState>,
    Path((entity, id, relation)): Path<(String, String, String)>,
    JsonBody(payload): JsonBody,
) -> RestResult<Response> {
    let ty = parse_entity(&entity)?;
    let def = parse_relation(ty, &relation)?;

    let child_id = match payload.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => {
            return Err(RestError::Validation {
                messages: vec!["Could not find thing matching value for id".to_string()],
            });
        }
    };

    debug!(
        parent = ty.plural(),
        id = %id,
        relation = def.name,
        child_id = %child_id,
        "Processing link request"
    );

    state
        .store()
        .link(ty, &id, def, &child_id)
        .map_err(|e| RestError::from_store(e, Lookup::Get))?;

    Ok(StatusCode::CREATED.into_response())
}

/// Handler for removing one relationship edge.
///
/// # HTTP Request
///
/// `DELETE [base]/[plural]/[id]/[relation]/[childId]`
///
/// # Response
///
/// - `200 OK` - edge removed
/// - `404 Not Found` - `Could not find any instances with
///   <plural>/<id>/<relation>/<childId>`
/// - `400 Bad Request` - structurally non-numeric parent id (the original
///   service surfaces an internal null-parent fault as a client error;
///   preserved as-is)
pub async fn unlink_handler(
    State(state): State<AppState>,
    Path((entity, id, relation, child_id)): Path<(String, String, String, String)>,
) -> RestResult<Response> {
    let ty = parse_entity(&entity)?;
    let def = parse_relation(ty, &relation)?;

    debug!(
        parent = ty.plural(),
        id = %id,
        relation = def.name,
        child_id = %child_id,
        "Processing unlink request"
    );

    state
        .store()
        .unlink(ty, &id, def, &child_id)
        .map_err(|e| RestError::from_store(e, Lookup::Delete))?;

    Ok(StatusCode::OK.into_response())
}

/// Fallback for the methods the single-edge path does not map.
///
/// GET and HEAD (and any other verb outside DELETE/PUT/PATCH/OPTIONS) on
/// `/<plural>/:id/<relation>/:childId` are unmapped routes in this API, so
/// they answer 404 rather than 405.
pub async fn edge_unmapped_handler() -> RestError {
    RestError::NotMapped
}
