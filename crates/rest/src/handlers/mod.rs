//! HTTP request handlers for the thingd REST API.
//!
//! One module per interaction family, mirroring the per-path method table:
//!
//! - [`list`] / [`create`] - collection paths (`/X`)
//! - [`read`] / [`update`] / [`delete`] - item paths (`/X/:id`)
//! - [`relations`] - relation collection and single-edge paths
//! - [`options`] - OPTIONS responses with per-shape `Allow` headers
//! - [`gui`] - the `/gui` liveness page

pub mod create;
pub mod delete;
pub mod gui;
pub mod list;
pub mod options;
pub mod read;
pub mod relations;
pub mod update;

pub use create::create_handler;
pub use delete::delete_handler;
pub use gui::gui_handler;
pub use list::list_handler;
pub use read::read_handler;
pub use relations::{edge_unmapped_handler, link_handler, related_handler, unlink_handler};
pub use update::{amend_handler, replace_handler};

use serde_json::Value;
use thingd_store::{EntityType, Instance, RelationDef, schema};

use crate::error::{RestError, RestResult};
use crate::responses::wire;
use crate::state::AppState;

/// Resolves an entity route segment, or reports an unmapped route.
pub(crate) fn parse_entity(segment: &str) -> RestResult<EntityType> {
    EntityType::from_plural(segment).ok_or(RestError::NotMapped)
}

/// Resolves a relation route segment, or reports an unmapped route.
pub(crate) fn parse_relation(ty: EntityType, name: &str) -> RestResult<&'static RelationDef> {
    schema::relation(ty, name).ok_or(RestError::NotMapped)
}

/// Serializes an instance with its current relationship memberships.
pub(crate) fn render(state: &AppState, ty: EntityType, instance: &Instance) -> Value {
    let links = state.store().memberships(ty, instance.id);
    wire::entity_json(ty, instance, &links)
}
