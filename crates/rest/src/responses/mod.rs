//! Response formatting for the thingd REST API.
//!
//! - [`wire`] - entity serialization and the per-type wire-format policy,
//!   plus the type-pluralized list envelopes

pub mod wire;

pub use wire::{collection_envelope, entity_json, item_envelope, relation_envelope};
