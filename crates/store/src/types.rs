//! Stored entity instances and field values.

use std::collections::BTreeMap;

use crate::schema::EntityType;

/// A typed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free-form text.
    Text(String),
    /// A boolean flag.
    Flag(bool),
}

impl FieldValue {
    /// Returns the text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }

    /// Returns the flag state, if this is a flag value.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

/// A stored entity instance.
///
/// The id is immutable once assigned and unique within the type's namespace.
/// Values are keyed by the schema's static field names; every schema field is
/// always present (defaults are applied on create).
#[derive(Debug, Clone)]
pub struct Instance {
    /// Server-generated numeric identifier.
    pub id: u64,
    values: BTreeMap<&'static str, FieldValue>,
}

impl Instance {
    /// Creates an instance with every field set to its schema default.
    pub fn with_defaults(ty: EntityType, id: u64) -> Instance {
        let values = ty
            .fields()
            .iter()
            .map(|f| (f.name, default_for(f)))
            .collect();
        Instance { id, values }
    }

    /// Returns the value of a field, if it exists.
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Overwrites a field value. The name must come from the schema.
    pub(crate) fn set(&mut self, name: &'static str, value: FieldValue) {
        self.values.insert(name, value);
    }
}

fn default_for(field: &crate::schema::FieldSchema) -> FieldValue {
    match field.kind {
        crate::schema::FieldKind::Text => FieldValue::Text(String::new()),
        crate::schema::FieldKind::Flag => FieldValue::Flag(false),
    }
}
