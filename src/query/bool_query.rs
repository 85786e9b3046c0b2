//! Bool query builder.
//!
//! Clauses accumulate into must / must_not / should / filter buckets and
//! render as `{ "must": [...], "should": [...], ... }`. The builder is
//! permissive: an unknown clause kind in [`BoolQuery::from_containers`] or an
//! unrecognized operator in the `where` helpers adds nothing and reports
//! nothing beyond a debug log line.

use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::query::{ClauseKind, Operator, Query, QueryNode};
use crate::value::{Params, Value};

/// One or more nodes destined for a single bucket.
///
/// Lets [`BoolQuery::from_containers`] take either a lone node or a list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClauseList(Vec<QueryNode>);

impl From<QueryNode> for ClauseList {
    fn from(node: QueryNode) -> Self {
        Self(vec![node])
    }
}

impl From<Vec<QueryNode>> for ClauseList {
    fn from(nodes: Vec<QueryNode>) -> Self {
        Self(nodes)
    }
}

impl<const N: usize> From<[QueryNode; N]> for ClauseList {
    fn from(nodes: [QueryNode; N]) -> Self {
        Self(nodes.into())
    }
}

impl FromIterator<QueryNode> for ClauseList {
    fn from_iter<I: IntoIterator<Item = QueryNode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy)]
enum Connective {
    And,
    Or,
}

/// Builder for a bool query.
///
/// Mutators take `&mut self` and return it, so calls chain and nested groups
/// can be filled in place from a callback.
///
/// # Example
/// ```
/// use elastiq::{BoolQuery, MatchQuery, Query};
///
/// let mut query = BoolQuery::new();
/// query
///     .and_where_eq("age", 5)
///     .should(MatchQuery::new("title", "golang"))
///     .and_where_group(|q| {
///         q.or_where("status", "=", "draft").or_where("status", "=", "review");
///     });
///
/// let body = query.to_value();
/// assert!(body["bool"]["must"].is_array());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolQuery {
    /// Buckets in order of first use. A kind is present only once a clause
    /// of that kind was added.
    buckets: Vec<(ClauseKind, Vec<QueryNode>)>,
    /// Field prefix including the trailing `.`.
    relation: Option<String>,
    minimum_should_match: Option<Value>,
    boost: Option<f64>,
}

impl BoolQuery {
    /// Creates an empty bool query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bool query pre-seeded from `kind -> clauses` entries.
    ///
    /// Entries whose key is not one of `must`, `must_not`, `should` or
    /// `filter` are skipped.
    pub fn from_containers<I, K, C>(containers: I) -> Self
    where
        I: IntoIterator<Item = (K, C)>,
        K: AsRef<str>,
        C: Into<ClauseList>,
    {
        let mut query = Self::new();
        for (key, clauses) in containers {
            let key = key.as_ref();
            let Some(kind) = ClauseKind::parse(key) else {
                debug!(kind = key, "ignoring unknown clause kind");
                continue;
            };
            for node in clauses.into().0 {
                query.add(node, kind);
            }
        }
        query
    }

    /// Appends `node` to the end of the `kind` bucket.
    pub fn add(&mut self, node: impl Into<QueryNode>, kind: ClauseKind) -> &mut Self {
        let node = node.into();
        match self.buckets.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, nodes)) => nodes.push(node),
            None => self.buckets.push((kind, vec![node])),
        }
        self
    }

    /// Adds `node` to `must`.
    pub fn must(&mut self, node: impl Into<QueryNode>) -> &mut Self {
        self.add(node, ClauseKind::Must)
    }

    /// Adds `node` to `must_not`.
    pub fn must_not(&mut self, node: impl Into<QueryNode>) -> &mut Self {
        self.add(node, ClauseKind::MustNot)
    }

    /// Adds `node` to `should`.
    pub fn should(&mut self, node: impl Into<QueryNode>) -> &mut Self {
        self.add(node, ClauseKind::Should)
    }

    /// Adds `node` to `filter`.
    pub fn filter(&mut self, node: impl Into<QueryNode>) -> &mut Self {
        self.add(node, ClauseKind::Filter)
    }

    /// Adds an AND condition on `field`.
    ///
    /// `=`, the range operators, `match`, `like` and `wildcard` go to `must`;
    /// `!=` and `<>` go to `must_not`. Any other operator adds nothing.
    pub fn and_where(
        &mut self,
        field: impl AsRef<str>,
        operator: impl AsRef<str>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.and_where_with(field, operator, value, Params::new())
    }

    /// [`and_where`](Self::and_where) with extra leaf parameters.
    pub fn and_where_with(
        &mut self,
        field: impl AsRef<str>,
        operator: impl AsRef<str>,
        value: impl Into<Value>,
        params: Params,
    ) -> &mut Self {
        self.push_condition(
            Connective::And,
            field.as_ref(),
            operator.as_ref(),
            value.into(),
            params,
        )
    }

    /// Operator-less form: equality.
    pub fn and_where_eq(&mut self, field: impl AsRef<str>, value: impl Into<Value>) -> &mut Self {
        self.and_where(field, Operator::Eq, value)
    }

    /// Builds a parenthesized group in a fresh bool query and adds it to `must`.
    ///
    /// The nested query starts empty and does not inherit the relation prefix.
    pub fn and_where_group<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut BoolQuery),
    {
        let mut nested = Self::new();
        build(&mut nested);
        self.must(nested)
    }

    /// Adds an OR condition on `field` to `should`.
    ///
    /// Same operators as [`and_where`](Self::and_where) except the negations:
    /// `!=` and `<>` add nothing here.
    pub fn or_where(
        &mut self,
        field: impl AsRef<str>,
        operator: impl AsRef<str>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.or_where_with(field, operator, value, Params::new())
    }

    /// [`or_where`](Self::or_where) with extra leaf parameters.
    pub fn or_where_with(
        &mut self,
        field: impl AsRef<str>,
        operator: impl AsRef<str>,
        value: impl Into<Value>,
        params: Params,
    ) -> &mut Self {
        self.push_condition(
            Connective::Or,
            field.as_ref(),
            operator.as_ref(),
            value.into(),
            params,
        )
    }

    /// Operator-less OR form: equality.
    pub fn or_where_eq(&mut self, field: impl AsRef<str>, value: impl Into<Value>) -> &mut Self {
        self.or_where(field, Operator::Eq, value)
    }

    /// Builds a group in a fresh bool query and adds it to `should`.
    pub fn or_where_group<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut BoolQuery),
    {
        let mut nested = Self::new();
        build(&mut nested);
        self.should(nested)
    }

    /// Shorthand for `and_where(field, "like", value)`.
    pub fn where_like(&mut self, field: impl AsRef<str>, value: impl Into<Value>) -> &mut Self {
        self.and_where(field, Operator::Like, value)
    }

    /// Shorthand for `and_where(field, "match", value)`.
    pub fn where_match(&mut self, field: impl AsRef<str>, value: impl Into<Value>) -> &mut Self {
        self.and_where(field, Operator::Match, value)
    }

    /// Shorthand for `or_where(field, "like", value)`.
    pub fn or_where_like(&mut self, field: impl AsRef<str>, value: impl Into<Value>) -> &mut Self {
        self.or_where(field, Operator::Like, value)
    }

    /// Shorthand for `or_where(field, "match", value)`.
    pub fn or_where_match(&mut self, field: impl AsRef<str>, value: impl Into<Value>) -> &mut Self {
        self.or_where(field, Operator::Match, value)
    }

    /// Scopes field names passed to the `where` helpers under `relation`.
    ///
    /// `Some("user")` makes `name` resolve to `user.name`. `None` or an empty
    /// string clears the prefix.
    pub fn set_relation(&mut self, relation: Option<&str>) -> &mut Self {
        self.relation = relation
            .filter(|r| !r.is_empty())
            .map(|r| format!("{r}."));
        self
    }

    /// Current relation, without the trailing separator.
    #[must_use]
    pub fn relation(&self) -> Option<&str> {
        self.relation
            .as_deref()
            .map(|prefix| prefix.strip_suffix('.').unwrap_or(prefix))
    }

    /// Sets `minimum_should_match` (a count like `1` or a ratio like `"75%"`).
    pub fn minimum_should_match(&mut self, value: impl Into<Value>) -> &mut Self {
        self.minimum_should_match = Some(value.into());
        self
    }

    /// Sets the query-level `boost`.
    pub fn boost(&mut self, boost: f64) -> &mut Self {
        self.boost = Some(boost);
        self
    }

    /// Clauses added under `kind`, in insertion order.
    #[must_use]
    pub fn clauses(&self, kind: ClauseKind) -> &[QueryNode] {
        self.buckets
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, nodes)| nodes.as_slice())
            .unwrap_or_default()
    }

    /// Total number of clauses across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|(_, nodes)| nodes.len()).sum()
    }

    /// True when no clause has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the bool body.
    ///
    /// Every non-empty bucket becomes an array keyed by its wire name, in
    /// order of first use, followed by `minimum_should_match` and `boost`
    /// when set. A query with nothing in it renders as `{}`.
    #[must_use]
    pub fn output(&self) -> serde_json::Value {
        let mut output = serde_json::Map::new();
        for (kind, nodes) in &self.buckets {
            if nodes.is_empty() {
                continue;
            }
            let rendered = nodes.iter().map(QueryNode::to_value).collect();
            output.insert(kind.as_str().to_string(), serde_json::Value::Array(rendered));
        }
        if let Some(msm) = &self.minimum_should_match {
            output.insert("minimum_should_match".to_string(), msm.to_json());
        }
        if let Some(boost) = self.boost {
            output.insert("boost".to_string(), Value::Float(boost).to_json());
        }
        trace!(keys = output.len(), clauses = self.len(), "rendered bool query");
        serde_json::Value::Object(output)
    }

    /// Prefixes `field` with the relation unless it already carries it.
    fn prepare_field(&self, field: &str) -> String {
        match &self.relation {
            Some(prefix) if !field.starts_with(prefix.as_str()) => format!("{prefix}{field}"),
            _ => field.to_string(),
        }
    }

    fn push_condition(
        &mut self,
        connective: Connective,
        field: &str,
        operator: &str,
        value: Value,
        params: Params,
    ) -> &mut Self {
        let Some(op) = Operator::parse(operator) else {
            debug!(
                operator,
                field,
                value_type = value.type_name(),
                "ignoring unsupported operator"
            );
            return self;
        };

        let kind = match (connective, op.is_negation()) {
            (Connective::And, false) => ClauseKind::Must,
            (Connective::And, true) => ClauseKind::MustNot,
            (Connective::Or, false) => ClauseKind::Should,
            (Connective::Or, true) => {
                debug!(
                    operator,
                    field,
                    value_type = value.type_name(),
                    "negation has no OR form; clause dropped"
                );
                return self;
            }
        };

        let field = self.prepare_field(field);
        let node = op.build_leaf(field, value, params);
        self.add(node, kind)
    }
}

impl Query for BoolQuery {
    fn query_type(&self) -> &'static str {
        "bool"
    }

    fn output(&self) -> serde_json::Value {
        BoolQuery::output(self)
    }
}

impl Serialize for BoolQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.output().serialize(serializer)
    }
}
