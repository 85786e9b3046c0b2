//! Comparison operators accepted by the `where`-style clause helpers.
//!
//! Only the operators below are recognized. Anything else is not a parse
//! failure on the builder path: `Operator::parse` returns `None` and the
//! caller adds no clause.

use std::fmt;
use std::str::FromStr;

use crate::error::DslError;
use crate::query::{MatchQuery, QueryNode, RangeQuery, TermQuery, WildcardQuery};
use crate::value::{Params, Value};

/// A recognized clause operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`
    Eq,
    /// `!=` or `<>`
    NotEq,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `match`
    Match,
    /// `like`
    Like,
    /// `wildcard`
    Wildcard,
}

impl Operator {
    /// Parses an operator token, returning `None` for anything unrecognized.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let op = match s {
            "=" => Self::Eq,
            "!=" | "<>" => Self::NotEq,
            ">" => Self::Gt,
            "<" => Self::Lt,
            ">=" => Self::Gte,
            "<=" => Self::Lte,
            "match" => Self::Match,
            "like" => Self::Like,
            "wildcard" => Self::Wildcard,
            _ => return None,
        };
        Some(op)
    }

    /// Canonical token for this operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::Match => "match",
            Self::Like => "like",
            Self::Wildcard => "wildcard",
        }
    }

    /// True for `!=` / `<>`, which negate an equality term.
    #[must_use]
    pub const fn is_negation(&self) -> bool {
        matches!(self, Self::NotEq)
    }

    /// Builds the leaf node this operator selects.
    ///
    /// Negation builds the same term node as equality; the caller decides the
    /// bucket. Range comparisons carry no extra parameters.
    #[must_use]
    pub fn build_leaf(self, field: String, value: Value, params: Params) -> QueryNode {
        match self {
            Self::Eq | Self::NotEq => TermQuery::new(field, value).with_params(params).into(),
            Self::Gt => RangeQuery::new(field).gt(value).into(),
            Self::Lt => RangeQuery::new(field).lt(value).into(),
            Self::Gte => RangeQuery::new(field).gte(value).into(),
            Self::Lte => RangeQuery::new(field).lte(value).into(),
            Self::Match => MatchQuery::new(field, value).with_params(params).into(),
            Self::Like | Self::Wildcard => {
                WildcardQuery::new(field, value).with_params(params).into()
            }
        }
    }
}

impl AsRef<str> for Operator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = DslError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DslError::UnknownOperator {
            operator: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_recognized() {
        assert_eq!(Operator::parse("="), Some(Operator::Eq));
        assert_eq!(Operator::parse("<>"), Some(Operator::NotEq));
        assert_eq!(Operator::parse("!="), Some(Operator::NotEq));
        assert_eq!(Operator::parse(">="), Some(Operator::Gte));
        assert_eq!(Operator::parse("like"), Some(Operator::Like));
    }

    #[test]
    fn test_parse_unrecognized() {
        assert_eq!(Operator::parse("=="), None);
        assert_eq!(Operator::parse("LIKE"), None);
        assert_eq!(Operator::parse(""), None);
        assert!("in".parse::<Operator>().unwrap_err().is_parse());
    }

    #[test]
    fn test_tokens_round_trip() {
        for op in [
            Operator::Eq,
            Operator::NotEq,
            Operator::Gt,
            Operator::Lt,
            Operator::Gte,
            Operator::Lte,
            Operator::Match,
            Operator::Like,
            Operator::Wildcard,
        ] {
            assert_eq!(op.as_str().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_build_leaf_kinds() {
        let node = Operator::Lte.build_leaf("price".into(), 10.into(), Params::new());
        assert_eq!(node.to_value(), json!({"range": {"price": {"lte": 10}}}));

        let node = Operator::Like.build_leaf("name".into(), "a*".into(), Params::new());
        assert_eq!(node.to_value(), json!({"wildcard": {"name": "a*"}}));

        let node = Operator::NotEq.build_leaf("state".into(), "gone".into(), Params::new());
        assert_eq!(node.to_value(), json!({"term": {"state": "gone"}}));
    }

    #[test]
    fn test_range_ignores_params() {
        let mut params = Params::new();
        params.insert("boost".into(), json!(3));
        let node = Operator::Gt.build_leaf("age".into(), 1.into(), params);
        assert_eq!(node.to_value(), json!({"range": {"age": {"gt": 1}}}));
    }
}
