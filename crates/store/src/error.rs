//! Error types for the storage layer.
//!
//! Variants carry structured context (entity type, ids, relation names); the
//! REST layer owns the exact response wording, which differs per HTTP verb
//! for the same condition.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::schema::EntityType;

/// The primary error type for store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No instance with the given id exists (or the id is not numeric).
    #[error("instance not found: {}/{id}", entity.plural())]
    NotFound { entity: EntityType, id: String },

    /// One or more field-level validation failures, aggregated.
    #[error("validation failed: {}", messages.join("; "))]
    Validation { messages: Vec<String> },

    /// The relationship parent instance does not exist.
    #[error("parent not found for relationship {}/{id}/{relation}", entity.plural())]
    ParentNotFound {
        entity: EntityType,
        id: String,
        relation: String,
    },

    /// The instance referenced by a link request body does not exist.
    #[error("no thing matching value for id {id}")]
    ChildNotFound { id: String },

    /// The relationship edge to remove does not exist.
    #[error("edge not found: {}/{id}/{relation}/{child_id}", entity.plural())]
    EdgeNotFound {
        entity: EntityType,
        id: String,
        relation: String,
        child_id: String,
    },

    /// A structurally non-numeric parent id on an edge removal.
    ///
    /// The original service fails to resolve the parent internally and
    /// reports the fault as a client error instead of crashing; callers map
    /// this to 400.
    #[error("malformed parent id in {}/{id}/{relation}/{child_id}", entity.plural())]
    MalformedParentId {
        entity: EntityType,
        id: String,
        relation: String,
        child_id: String,
    },
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::NotFound {
            entity: EntityType::Todo,
            id: "17".to_string(),
        };
        assert_eq!(err.to_string(), "instance not found: todos/17");
    }

    #[test]
    fn test_validation_display_joins_messages() {
        let err = StoreError::Validation {
            messages: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(err.to_string(), "validation failed: a; b");
    }

    #[test]
    fn test_parent_not_found_display() {
        let err = StoreError::ParentNotFound {
            entity: EntityType::Todo,
            id: "5".to_string(),
            relation: "tasksof".to_string(),
        };
        assert!(err.to_string().contains("todos/5/tasksof"));
    }
}
