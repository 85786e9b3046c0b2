//! Query nodes.
//!
//! Every node renders itself to the search engine's wire structure,
//! `{ <query type>: <body> }`. Leaf kinds compare one field against a value;
//! [`BoolQuery`] combines other nodes, itself included, into must / must_not /
//! should / filter buckets.

mod bool_query;
mod clause;
mod leaf;
mod operator;

use serde::{Serialize, Serializer};

pub use bool_query::{BoolQuery, ClauseList};
pub use clause::ClauseKind;
pub use leaf::{MatchQuery, RangeBound, RangeQuery, TermQuery, WildcardQuery};
pub use operator::Operator;

/// Anything that renders to a query wire structure.
pub trait Query {
    /// Key the body is nested under (`term`, `range`, `bool`, ...).
    fn query_type(&self) -> &'static str;

    /// The body of the query, without the type key.
    fn output(&self) -> serde_json::Value;

    /// The full node: `{ query_type: output }`.
    fn to_value(&self) -> serde_json::Value {
        let mut map = serde_json::Map::with_capacity(1);
        map.insert(self.query_type().to_string(), self.output());
        serde_json::Value::Object(map)
    }
}

/// A clause stored in a bool bucket.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryNode {
    /// `term` leaf.
    Term(TermQuery),
    /// `range` leaf.
    Range(RangeQuery),
    /// `match` leaf.
    Match(MatchQuery),
    /// `wildcard` leaf.
    Wildcard(WildcardQuery),
    /// Nested bool query.
    Bool(BoolQuery),
    /// A complete wire fragment built elsewhere, embedded as-is.
    Raw(serde_json::Value),
}

impl QueryNode {
    /// Renders the node to its wire structure.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            Self::Term(q) => q.to_value(),
            Self::Range(q) => q.to_value(),
            Self::Match(q) => q.to_value(),
            Self::Wildcard(q) => q.to_value(),
            Self::Bool(q) => q.to_value(),
            Self::Raw(v) => v.clone(),
        }
    }

    /// Returns the nested builder if this node is a bool query.
    #[must_use]
    pub const fn as_bool(&self) -> Option<&BoolQuery> {
        match self {
            Self::Bool(q) => Some(q),
            _ => None,
        }
    }
}

impl Serialize for QueryNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl From<TermQuery> for QueryNode {
    fn from(q: TermQuery) -> Self {
        Self::Term(q)
    }
}

impl From<RangeQuery> for QueryNode {
    fn from(q: RangeQuery) -> Self {
        Self::Range(q)
    }
}

impl From<MatchQuery> for QueryNode {
    fn from(q: MatchQuery) -> Self {
        Self::Match(q)
    }
}

impl From<WildcardQuery> for QueryNode {
    fn from(q: WildcardQuery) -> Self {
        Self::Wildcard(q)
    }
}

impl From<BoolQuery> for QueryNode {
    fn from(q: BoolQuery) -> Self {
        Self::Bool(q)
    }
}

impl From<serde_json::Value> for QueryNode {
    fn from(v: serde_json::Value) -> Self {
        Self::Raw(v)
    }
}
