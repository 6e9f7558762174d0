//! # thingd-store - In-Memory Entity and Relationship Store
//!
//! This crate implements the storage layer of the thingd service: a small
//! entity graph holding projects, todos and categories, plus the named
//! many-to-many relationships between them.
//!
//! ## Data Model
//!
//! Entity types are defined statically in [`schema`] as an ordered list of
//! field schemas (name, kind, mandatory flag, wire representation). Instances
//! are loosely typed field maps validated against that schema on every write.
//!
//! IDs are numeric, allocated from a monotonically increasing per-type
//! counter, and never reused after deletion.
//!
//! ## Relationships
//!
//! Three canonical edge sets connect the entity families:
//!
//! | Canonical relation | Visible as |
//! |--------------------|------------|
//! | project ⇄ todo     | `projects/:id/tasks`, `todos/:id/tasksof` |
//! | project ⇄ category | `projects/:id/categories` |
//! | todo ⇄ category    | `todos/:id/categories` |
//!
//! Deleting an instance removes every edge incident to it.
//!
//! ## Concurrency
//!
//! All state lives behind a single `RwLock`; the store is shared via `Arc`.
//! Operations on disjoint ids are independent, and id allocation stays unique
//! under interleaved requests. No transactional guarantees beyond that.
//!
//! ## Example
//!
//! ```rust
//! use thingd_store::{EntityType, ThingStore};
//!
//! let store = ThingStore::new();
//! let payload = serde_json::json!({"title": "file taxes"});
//! let todo = store
//!     .create(EntityType::Todo, payload.as_object().unwrap())
//!     .unwrap();
//! assert_eq!(store.list(EntityType::Todo).len(), 1);
//! assert!(store.get(EntityType::Todo, &todo.id.to_string()).is_ok());
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod schema;
pub mod store;
pub mod types;
mod validate;

pub use error::{StoreError, StoreResult};
pub use schema::{EntityType, FieldKind, FieldSchema, RelationDef, RelationKey, WireForm};
pub use store::ThingStore;
pub use types::{FieldValue, Instance};
