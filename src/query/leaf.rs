//! Leaf query kinds.
//!
//! Each leaf targets one field and renders as `{ <type>: { <field>: ... } }`.
//! With no extra parameters the field maps straight to the value
//! (`{"term":{"age":5}}`); with parameters the value moves under its own key
//! next to them (`{"term":{"age":{"value":5,"boost":2.0}}}`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::Query;
use crate::value::{Params, Value};

fn field_object(field: &str, body: serde_json::Value) -> serde_json::Value {
    let mut outer = serde_json::Map::new();
    outer.insert(field.to_string(), body);
    serde_json::Value::Object(outer)
}

fn field_body(field: &str, value_key: &str, value: &Value, params: &Params) -> serde_json::Value {
    if params.is_empty() {
        return field_object(field, value.to_json());
    }

    let mut inner = serde_json::Map::with_capacity(params.len() + 1);
    inner.insert(value_key.to_string(), value.to_json());
    for (k, v) in params {
        inner.insert(k.clone(), v.clone());
    }
    field_object(field, serde_json::Value::Object(inner))
}

/// Exact-value match on a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct TermQuery {
    /// Target field.
    pub field: String,
    /// Value compared against.
    pub value: Value,
    /// Extra parameters merged next to the value.
    pub params: Params,
}

impl TermQuery {
    /// Creates the query with no extra parameters.
    #[must_use]
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            params: Params::new(),
        }
    }

    /// Replaces the extra parameters.
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }
}

impl Query for TermQuery {
    fn query_type(&self) -> &'static str {
        "term"
    }

    fn output(&self) -> serde_json::Value {
        field_body(&self.field, "value", &self.value, &self.params)
    }
}

/// Analyzed full-text match on a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchQuery {
    /// Target field.
    pub field: String,
    /// Value compared against.
    pub value: Value,
    /// Extra parameters merged next to the value.
    pub params: Params,
}

impl MatchQuery {
    /// Creates the query with no extra parameters.
    #[must_use]
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            params: Params::new(),
        }
    }

    /// Replaces the extra parameters.
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }
}

impl Query for MatchQuery {
    fn query_type(&self) -> &'static str {
        "match"
    }

    fn output(&self) -> serde_json::Value {
        field_body(&self.field, "query", &self.value, &self.params)
    }
}

/// Glob-style pattern match (`*` and `?`) on a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct WildcardQuery {
    /// Target field.
    pub field: String,
    /// Value compared against.
    pub value: Value,
    /// Extra parameters merged next to the value.
    pub params: Params,
}

impl WildcardQuery {
    /// Creates the query with no extra parameters.
    #[must_use]
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            params: Params::new(),
        }
    }

    /// Replaces the extra parameters.
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }
}

impl Query for WildcardQuery {
    fn query_type(&self) -> &'static str {
        "wildcard"
    }

    fn output(&self) -> serde_json::Value {
        field_body(&self.field, "value", &self.value, &self.params)
    }
}

/// One side of a range comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeBound {
    /// Strictly greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Strictly less than.
    Lt,
    /// Less than or equal.
    Lte,
}

impl RangeBound {
    /// Wire key for this bound.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
        }
    }
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Range comparison on a single field.
///
/// Bounds render in the order they were first set; setting a bound again
/// replaces its value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeQuery {
    /// Target field.
    pub field: String,
    bounds: Vec<(RangeBound, Value)>,
    /// Extra parameters rendered after the bounds.
    pub params: Params,
}

impl RangeQuery {
    /// Creates an unbounded range on `field`.
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            bounds: Vec::new(),
            params: Params::new(),
        }
    }

    /// Sets one bound.
    #[must_use]
    pub fn bound(mut self, bound: RangeBound, value: impl Into<Value>) -> Self {
        let value = value.into();
        match self.bounds.iter_mut().find(|(b, _)| *b == bound) {
            Some(slot) => slot.1 = value,
            None => self.bounds.push((bound, value)),
        }
        self
    }

    /// Sets the `gt` (greater than) bound.
    #[must_use]
    pub fn gt(self, value: impl Into<Value>) -> Self {
        self.bound(RangeBound::Gt, value)
    }

    /// Sets the `gte` (greater than or equal) bound.
    #[must_use]
    pub fn gte(self, value: impl Into<Value>) -> Self {
        self.bound(RangeBound::Gte, value)
    }

    /// Sets the `lt` (less than) bound.
    #[must_use]
    pub fn lt(self, value: impl Into<Value>) -> Self {
        self.bound(RangeBound::Lt, value)
    }

    /// Sets the `lte` (less than or equal) bound.
    #[must_use]
    pub fn lte(self, value: impl Into<Value>) -> Self {
        self.bound(RangeBound::Lte, value)
    }

    /// Replaces the extra parameters (`format`, `time_zone`, `boost`, ...).
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Returns the value set for `bound`, if any.
    #[must_use]
    pub fn get(&self, bound: RangeBound) -> Option<&Value> {
        self.bounds
            .iter()
            .find(|(b, _)| *b == bound)
            .map(|(_, v)| v)
    }
}

impl Query for RangeQuery {
    fn query_type(&self) -> &'static str {
        "range"
    }

    fn output(&self) -> serde_json::Value {
        let mut inner = serde_json::Map::with_capacity(self.bounds.len() + self.params.len());
        for (bound, value) in &self.bounds {
            inner.insert(bound.as_str().to_string(), value.to_json());
        }
        for (k, v) in &self.params {
            inner.insert(k.clone(), v.clone());
        }
        field_object(&self.field, serde_json::Value::Object(inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: serde_json::Value) -> Params {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("params must be an object"),
        }
    }

    #[test]
    fn test_term_without_params() {
        let q = TermQuery::new("age", 5);
        assert_eq!(q.to_value(), json!({"term": {"age": 5}}));
    }

    #[test]
    fn test_term_with_params() {
        let q = TermQuery::new("status", "active").with_params(params(json!({"boost": 2.0})));
        assert_eq!(
            q.to_value(),
            json!({"term": {"status": {"value": "active", "boost": 2.0}}})
        );
    }

    #[test]
    fn test_match_uses_query_key() {
        let q = MatchQuery::new("title", "golang").with_params(params(json!({"operator": "and"})));
        assert_eq!(
            q.to_value(),
            json!({"match": {"title": {"query": "golang", "operator": "and"}}})
        );
        assert_eq!(
            MatchQuery::new("title", "golang").to_value(),
            json!({"match": {"title": "golang"}})
        );
    }

    #[test]
    fn test_wildcard() {
        let q = WildcardQuery::new("name", "jo*");
        assert_eq!(q.to_value(), json!({"wildcard": {"name": "jo*"}}));
    }

    #[test]
    fn test_range_bounds() {
        let q = RangeQuery::new("age").gte(18).lt(65);
        assert_eq!(q.to_value(), json!({"range": {"age": {"gte": 18, "lt": 65}}}));
        assert_eq!(q.get(RangeBound::Gte), Some(&Value::Int(18)));
        assert!(q.get(RangeBound::Gt).is_none());
    }

    #[test]
    fn test_range_bound_replaced_in_place() {
        let q = RangeQuery::new("age").gt(1).lt(10).gt(2);
        let rendered = serde_json::to_string(&q.to_value()).unwrap();
        assert_eq!(rendered, r#"{"range":{"age":{"gt":2,"lt":10}}}"#);
    }

    #[test]
    fn test_range_params_follow_bounds() {
        let q = RangeQuery::new("created_at")
            .gte("2024-01-01")
            .with_params(params(json!({"format": "yyyy-MM-dd"})));
        assert_eq!(
            q.to_value(),
            json!({"range": {"created_at": {"gte": "2024-01-01", "format": "yyyy-MM-dd"}}})
        );
    }

    #[test]
    fn test_range_bound_display() {
        assert_eq!(RangeBound::Gte.to_string(), "gte");
        assert_eq!(serde_json::to_string(&RangeBound::Lt).unwrap(), "\"lt\"");
    }
}
