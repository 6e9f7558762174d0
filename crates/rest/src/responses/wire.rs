//! Entity serialization and envelopes.
//!
//! The wire representation follows the per-field table in the store schema:
//! project flags travel as the strings `"true"`/`"false"` while a todo's
//! `doneStatus` is a native JSON boolean, and ids are always strings. The
//! inconsistency across families is an external-compatibility requirement;
//! a single normalized serializer would break existing clients.

use serde_json::{Map, Value, json};
use thingd_store::{EntityType, FieldValue, Instance, RelationDef, WireForm};

/// Relationship memberships of one instance: for each relation route owned
/// by its type, the linked ids.
pub type Memberships = [(&'static RelationDef, Vec<u64>)];

/// Serializes one instance as a bare JSON object.
///
/// Fields appear in schema order; non-empty relationship memberships are
/// embedded as arrays of `{"id": "<id>"}` stubs under the route-visible
/// relation name.
pub fn entity_json(ty: EntityType, instance: &Instance, links: &Memberships) -> Value {
    let mut object = Map::new();
    object.insert("id".to_string(), Value::String(instance.id.to_string()));

    for field in ty.fields() {
        let Some(value) = instance.value(field.name) else {
            continue;
        };
        object.insert(field.name.to_string(), field_json(field.wire, value));
    }

    for (relation, ids) in links {
        let stubs: Vec<Value> = ids.iter().map(|id| json!({ "id": id.to_string() })).collect();
        object.insert(relation.name.to_string(), Value::Array(stubs));
    }

    Value::Object(object)
}

fn field_json(wire: WireForm, value: &FieldValue) -> Value {
    match (wire, value) {
        (WireForm::Bool, FieldValue::Flag(b)) => Value::Bool(*b),
        (WireForm::Text, FieldValue::Flag(b)) => Value::String(b.to_string()),
        (_, FieldValue::Text(s)) => Value::String(s.clone()),
    }
}

/// Wraps serialized entities in the collection envelope:
/// `{"<plural>": [...]}`.
pub fn collection_envelope(ty: EntityType, items: Vec<Value>) -> Value {
    keyed(ty.plural(), items)
}

/// Wraps a single serialized entity in the item envelope: an array of
/// exactly one under the type-pluralized key.
pub fn item_envelope(ty: EntityType, item: Value) -> Value {
    keyed(ty.plural(), vec![item])
}

/// Wraps related entities in an envelope keyed by the **target type's**
/// plural name, not the relation name: `/todos/:id/tasksof` answers
/// `{"projects": [...]}`.
pub fn relation_envelope(relation: &RelationDef, items: Vec<Value>) -> Value {
    keyed(relation.child.plural(), items)
}

fn keyed(key: &str, items: Vec<Value>) -> Value {
    let mut object = Map::new();
    object.insert(key.to_string(), Value::Array(items));
    Value::Object(object)
}
