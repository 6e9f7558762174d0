//! Error types for the REST API layer.
//!
//! All failures surface as an HTTP response carrying the
//! `{"errorMessages": ["...", ...]}` envelope. The exact message wordings
//! are part of the external contract; in particular the same missing-instance
//! condition is reported with **three different wordings** depending on the
//! verb, so the texts live in a per-operation template table
//! ([`Lookup::message`]) rather than a single shared constructor.
//!
//! # Error Mapping
//!
//! | Condition | HTTP Status |
//! |-----------|-------------|
//! | Instance/parent/child/edge missing | 404 |
//! | Field validation failure | 400 |
//! | Malformed JSON payload | 400 |
//! | Malformed parent id on unlink | 400 (preserved quirk) |
//! | Unmapped route or verb on a mapped path | 404 / 405 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use thingd_store::{EntityType, StoreError};

/// Which verb family triggered an instance lookup.
///
/// The wording of the not-found message differs per verb in the original
/// service; reproduce it rather than collapsing to one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// GET/HEAD on an item path.
    Get,
    /// POST or PUT on an item path (the amend/replace family).
    Amend,
    /// DELETE on an item path.
    Delete,
}

impl Lookup {
    /// Renders the verb-specific not-found message.
    pub fn message(self, entity: EntityType, id: &str) -> String {
        match self {
            Lookup::Get => {
                format!("Could not find an instance with {}/{}", entity.plural(), id)
            }
            Lookup::Amend => format!(
                "No such {} entity instance with GUID or ID {} found",
                entity.singular(),
                id
            ),
            Lookup::Delete => {
                format!("Could not find any instances with {}/{}", entity.plural(), id)
            }
        }
    }
}

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Instance missing on an item path (HTTP 404, verb-specific wording).
    InstanceNotFound {
        /// The entity family.
        entity: EntityType,
        /// The id segment as supplied by the client.
        id: String,
        /// Which wording to use.
        lookup: Lookup,
    },

    /// Relationship parent missing on a link (HTTP 404).
    ParentNotFound {
        /// The parent entity family.
        entity: EntityType,
        /// The parent id segment.
        id: String,
        /// The relation name.
        relation: String,
    },

    /// The id in a link request body names no instance (HTTP 404).
    ChildNotFound,

    /// Relationship edge missing on an unlink (HTTP 404).
    EdgeNotFound {
        /// The parent entity family.
        entity: EntityType,
        /// The parent id segment.
        id: String,
        /// The relation name.
        relation: String,
        /// The child id segment.
        child_id: String,
    },

    /// Structurally non-numeric parent id on an unlink (HTTP 400).
    ///
    /// The original service surfaces an internal null-parent fault as a
    /// client error here instead of crashing; preserved as-is.
    MalformedParentId {
        /// The parent entity family.
        entity: EntityType,
        /// The malformed parent id segment.
        id: String,
        /// The relation name.
        relation: String,
        /// The child id segment.
        child_id: String,
    },

    /// One or more field-level validation failures (HTTP 400).
    Validation {
        /// One message per violation.
        messages: Vec<String>,
    },

    /// Structurally broken request body (HTTP 400).
    MalformedJson {
        /// Parser detail.
        detail: String,
    },

    /// A path shape the API deliberately does not map (HTTP 404).
    ///
    /// Covers unknown entity families, unknown relation names, and GET/HEAD/
    /// POST on a fully-qualified single-edge path.
    NotMapped,
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::InstanceNotFound { entity, id, lookup } => {
                write!(f, "{}", lookup.message(*entity, id))
            }
            RestError::ParentNotFound {
                entity,
                id,
                relation,
            } => write!(
                f,
                "Could not find parent thing for relationship {}/{}/{}",
                entity.plural(),
                id,
                relation
            ),
            RestError::ChildNotFound => {
                write!(f, "Could not find thing matching value for id")
            }
            RestError::EdgeNotFound {
                entity,
                id,
                relation,
                child_id,
            } => write!(
                f,
                "Could not find any instances with {}/{}/{}/{}",
                entity.plural(),
                id,
                relation,
                child_id
            ),
            RestError::MalformedParentId {
                entity,
                id,
                relation,
                child_id,
            } => write!(
                f,
                "Could not resolve parent thing for {}/{}/{}/{}",
                entity.plural(),
                id,
                relation,
                child_id
            ),
            RestError::Validation { messages } => write!(f, "{}", messages.join("; ")),
            RestError::MalformedJson { detail } => {
                write!(f, "Malformed JSON payload: {}", detail)
            }
            RestError::NotMapped => write!(f, "route not mapped"),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = match &self {
            RestError::Validation { .. }
            | RestError::MalformedJson { .. }
            | RestError::MalformedParentId { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::NOT_FOUND,
        };

        // An unmapped route answers a bare 404, no envelope.
        if matches!(self, RestError::NotMapped) {
            return status.into_response();
        }

        let messages = match &self {
            RestError::Validation { messages } => messages.clone(),
            other => vec![other.to_string()],
        };

        (status, Json(json!({ "errorMessages": messages }))).into_response()
    }
}

impl RestError {
    /// Maps a store error, supplying the verb context that picks the
    /// not-found wording.
    pub fn from_store(err: StoreError, lookup: Lookup) -> RestError {
        match err {
            StoreError::NotFound { entity, id } => {
                RestError::InstanceNotFound { entity, id, lookup }
            }
            StoreError::Validation { messages } => RestError::Validation { messages },
            StoreError::ParentNotFound {
                entity,
                id,
                relation,
            } => RestError::ParentNotFound {
                entity,
                id,
                relation,
            },
            StoreError::ChildNotFound { .. } => RestError::ChildNotFound,
            StoreError::EdgeNotFound {
                entity,
                id,
                relation,
                child_id,
            } => RestError::EdgeNotFound {
                entity,
                id,
                relation,
                child_id,
            },
            StoreError::MalformedParentId {
                entity,
                id,
                relation,
                child_id,
            } => RestError::MalformedParentId {
                entity,
                id,
                relation,
                child_id,
            },
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
