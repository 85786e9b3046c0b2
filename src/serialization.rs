//! JSON rendering helpers.
//!
//! Query nodes already render to `serde_json::Value`. These helpers produce
//! the text sent to the search engine and keep formatting in one place.

use crate::error::DslResult;
use crate::query::Query;

/// Wraps a query in the top-level search request body, `{"query": ...}`.
#[must_use]
pub fn search_body(query: &impl Query) -> serde_json::Value {
    let mut body = serde_json::Map::with_capacity(1);
    body.insert("query".to_string(), query.to_value());
    serde_json::Value::Object(body)
}

/// Renders a query node to compact JSON.
pub fn to_json(query: &impl Query) -> DslResult<String> {
    Ok(serde_json::to_string(&query.to_value())?)
}

/// Renders a query node to pretty JSON.
pub fn to_json_pretty(query: &impl Query) -> DslResult<String> {
    Ok(serde_json::to_string_pretty(&query.to_value())?)
}
