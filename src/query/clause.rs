//! Bool clause kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DslError;

/// The four buckets of a bool query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseKind {
    /// AND: every clause must match, contributes to scoring.
    Must,
    /// NOT: no clause may match.
    MustNot,
    /// OR: at least one (or `minimum_should_match`) should match.
    Should,
    /// AND without scoring.
    Filter,
}

impl ClauseKind {
    /// Every clause kind, in wire order.
    pub const ALL: [Self; 4] = [Self::Must, Self::MustNot, Self::Should, Self::Filter];

    /// Wire name of this clause kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Must => "must",
            Self::MustNot => "must_not",
            Self::Should => "should",
            Self::Filter => "filter",
        }
    }

    /// Lenient parse used where unknown kinds are dropped rather than reported.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClauseKind {
    type Err = DslError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DslError::UnknownClauseKind {
            kind: s.to_string(),
        })
    }
}
