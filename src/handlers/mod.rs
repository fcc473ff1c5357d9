//! Thin HTTP adapters. Business logic lives in the aggregator, token
//! provider, placeholder and screenshot modules.

pub mod auth;
pub mod placeholder;
pub mod profile;
pub mod screenshot;

use axum::Json;
use serde_json::{json, Value};

/// First value of `key` in a raw query string. Duplicate keys and
/// undecodable pairs never fail the request.
pub(crate) fn first_query_value(query: Option<&str>, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query.unwrap_or_default().as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
