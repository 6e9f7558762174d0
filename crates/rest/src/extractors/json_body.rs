//! Request body extractor.
//!
//! Extracts a JSON object from the request body without requiring a
//! Content-Type header (clients of the original service routinely omit it).
//! A structurally broken body is a distinct failure class from field
//! validation and is reported with a malformed-JSON marker.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::error::RestError;

/// Axum extractor for a JSON object payload.
///
/// An empty body extracts as an empty object, which then fails mandatory
/// field validation downstream rather than parsing.
///
/// # Example
///
/// ```rust,ignore
/// use thingd_rest::extractors::JsonBody;
///
/// async fn create_handler(JsonBody(payload): JsonBody) {
///     println!("supplied fields: {}", payload.len());
/// }
/// ```
#[derive(Debug)]
pub struct JsonBody(pub Map<String, Value>);

impl JsonBody {
    /// Consumes the extractor and returns the inner object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| malformed(e.to_string()))?;

        if bytes.is_empty() {
            return Ok(JsonBody(Map::new()));
        }

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| malformed(e.to_string()))?;

        match value {
            Value::Object(map) => Ok(JsonBody(map)),
            other => Err(malformed(format!(
                "expected a JSON object, got {}",
                type_name(&other)
            ))),
        }
    }
}

fn malformed(detail: String) -> Response {
    RestError::MalformedJson { detail }.into_response()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
