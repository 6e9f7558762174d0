//! Axum extractors for the thingd API.

pub mod json_body;

pub use json_body::JsonBody;
