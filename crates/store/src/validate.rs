//! Payload validation against entity schemas.
//!
//! Validation is not fail-fast: every problem in a well-formed payload is
//! collected and reported together, one message per violation. The message
//! templates are part of the external contract and must not be reworded.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};
use crate::schema::{EntityType, FieldKind, FieldSchema};
use crate::types::FieldValue;

/// How a payload's `id` member is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdPolicy {
    /// Reject `id` as an unknown field (create: the server assigns ids).
    Reject,
    /// Silently skip `id` (amend/replace: clients echo back what they read).
    Ignore,
}

/// Validates a full document: mandatory fields must be present, everything
/// else falls back to its default. Used for create and replace.
pub(crate) fn document(
    ty: EntityType,
    payload: &Map<String, Value>,
    id_policy: IdPolicy,
) -> StoreResult<BTreeMap<&'static str, FieldValue>> {
    let mut messages = Vec::new();
    let mut values = BTreeMap::new();

    collect_supplied(ty, payload, id_policy, &mut values, &mut messages);

    for field in ty.fields() {
        if field.mandatory && !payload.contains_key(field.name) {
            messages.push(format!("{} : field is mandatory", field.name));
        }
    }

    if messages.is_empty() {
        Ok(values)
    } else {
        Err(StoreError::Validation { messages })
    }
}

/// Validates a partial document: only supplied fields are checked and
/// returned. Used for amend (merge) updates.
pub(crate) fn partial(
    ty: EntityType,
    payload: &Map<String, Value>,
) -> StoreResult<BTreeMap<&'static str, FieldValue>> {
    let mut messages = Vec::new();
    let mut values = BTreeMap::new();

    collect_supplied(ty, payload, IdPolicy::Ignore, &mut values, &mut messages);

    if messages.is_empty() {
        Ok(values)
    } else {
        Err(StoreError::Validation { messages })
    }
}

fn collect_supplied(
    ty: EntityType,
    payload: &Map<String, Value>,
    id_policy: IdPolicy,
    values: &mut BTreeMap<&'static str, FieldValue>,
    messages: &mut Vec<String>,
) {
    for (name, raw) in payload {
        if name == "id" && id_policy == IdPolicy::Ignore {
            continue;
        }
        let Some(field) = ty.field(name) else {
            messages.push(format!("Could not find field: {}", name));
            continue;
        };
        match coerce(field, raw) {
            Ok(value) => {
                if field.mandatory
                    && let Some(text) = value.as_text()
                    && text.is_empty()
                {
                    messages.push(format!(
                        "Failed Validation: {} : can not be empty",
                        field.name
                    ));
                    continue;
                }
                values.insert(field.name, value);
            }
            Err(message) => messages.push(message),
        }
    }
}

/// Coerces one raw JSON value to the field's kind.
///
/// Booleans and numbers are often transported as their string representation
/// in this protocol, so flags accept `"true"`/`"false"` (any case) and text
/// fields accept scalar numbers and booleans.
fn coerce(field: &FieldSchema, raw: &Value) -> Result<FieldValue, String> {
    match field.kind {
        FieldKind::Flag => match raw {
            Value::Bool(b) => Ok(FieldValue::Flag(*b)),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(FieldValue::Flag(true)),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(FieldValue::Flag(false)),
            _ => Err(format!("Failed Validation: {} should be BOOLEAN", field.name)),
        },
        FieldKind::Text => match raw {
            Value::String(s) => Ok(FieldValue::Text(s.clone())),
            Value::Number(n) => Ok(FieldValue::Text(n.to_string())),
            Value::Bool(b) => Ok(FieldValue::Text(b.to_string())),
            _ => Err(format!("Failed Validation: {} should be STRING", field.name)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().expect("object literal").clone()
    }

    #[test]
    fn test_missing_mandatory_title() {
        let err = document(EntityType::Todo, &obj(json!({})), IdPolicy::Reject).unwrap_err();
        let StoreError::Validation { messages } = err else {
            panic!("expected validation error");
        };
        assert_eq!(messages, vec!["title : field is mandatory"]);
    }

    #[test]
    fn test_empty_mandatory_title() {
        let err =
            document(EntityType::Todo, &obj(json!({"title": ""})), IdPolicy::Reject).unwrap_err();
        let StoreError::Validation { messages } = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            messages,
            vec!["Failed Validation: title : can not be empty"]
        );
    }

    #[test]
    fn test_unknown_field() {
        let payload = obj(json!({"title": "x", "priority": "high"}));
        let err = document(EntityType::Todo, &payload, IdPolicy::Reject).unwrap_err();
        let StoreError::Validation { messages } = err else {
            panic!("expected validation error");
        };
        assert_eq!(messages, vec!["Could not find field: priority"]);
    }

    #[test]
    fn test_errors_aggregate() {
        let payload = obj(json!({"doneStatus": "maybe", "priority": 1}));
        let err = document(EntityType::Todo, &payload, IdPolicy::Reject).unwrap_err();
        let StoreError::Validation { messages } = err else {
            panic!("expected validation error");
        };
        assert_eq!(messages.len(), 3);
        assert!(messages.contains(&"Failed Validation: doneStatus should be BOOLEAN".to_string()));
        assert!(messages.contains(&"Could not find field: priority".to_string()));
        assert!(messages.contains(&"title : field is mandatory".to_string()));
    }

    #[test]
    fn test_flag_accepts_string_booleans() {
        let payload = obj(json!({"title": "x", "doneStatus": "TRUE"}));
        let values = document(EntityType::Todo, &payload, IdPolicy::Reject).unwrap();
        assert_eq!(values.get("doneStatus"), Some(&FieldValue::Flag(true)));
    }

    #[test]
    fn test_text_accepts_scalars() {
        let payload = obj(json!({"title": 42}));
        let values = document(EntityType::Todo, &payload, IdPolicy::Reject).unwrap();
        assert_eq!(
            values.get("title"),
            Some(&FieldValue::Text("42".to_string()))
        );
    }

    #[test]
    fn test_id_rejected_on_create() {
        let payload = obj(json!({"title": "x", "id": "9"}));
        let err = document(EntityType::Todo, &payload, IdPolicy::Reject).unwrap_err();
        let StoreError::Validation { messages } = err else {
            panic!("expected validation error");
        };
        assert_eq!(messages, vec!["Could not find field: id"]);
    }

    #[test]
    fn test_id_ignored_on_partial() {
        let payload = obj(json!({"id": "9", "description": "later"}));
        let values = partial(EntityType::Todo, &payload).unwrap();
        assert_eq!(values.len(), 1);
        assert!(values.contains_key("description"));
    }

    #[test]
    fn test_partial_skips_mandatory_check() {
        let payload = obj(json!({"description": "no title supplied"}));
        assert!(partial(EntityType::Todo, &payload).is_ok());
    }
}
