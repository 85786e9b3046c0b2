//! # elastiq - bool query builder for document search engines
//!
//! elastiq assembles nested boolean search queries (must / must_not /
//! should / filter) and renders them to the nested-object wire format a
//! search engine's query API expects. It builds and serializes; it does not
//! send requests or parse results.
//!
//! ## Core Concepts
//!
//! - **BoolQuery**: fluent builder that collects clauses into four buckets
//! - **Leaf queries**: term, range, match and wildcard, each on one field
//! - **Operator**: `=`, `!=`, `>`, `match`, `like`, ... mapped to leaf queries by
//!   the `where` helpers
//! - **Relation**: optional field prefix scoping conditions to a nested object
//!
//! ## Usage
//!
//! ```rust
//! use elastiq::{BoolQuery, MatchQuery};
//! use serde_json::json;
//!
//! let mut query = BoolQuery::new();
//! query
//!     .and_where("age", "=", 5)
//!     .should(MatchQuery::new("title", "golang"));
//!
//! assert_eq!(
//!     query.output(),
//!     json!({
//!         "must": [{"term": {"age": 5}}],
//!         "should": [{"match": {"title": "golang"}}],
//!     })
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod query;
pub mod serialization;
pub mod value;

// Re-export primary types at crate root for convenience
pub use error::{DslError, DslResult};
pub use query::{
    BoolQuery, ClauseKind, ClauseList, MatchQuery, Operator, Query, QueryNode, RangeBound,
    RangeQuery, TermQuery, WildcardQuery,
};
pub use serialization::{search_body, to_json, to_json_pretty};
pub use value::{Params, Value};
