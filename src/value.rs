//! Values carried by leaf queries.
//!
//! Term, match, wildcard and range queries all compare a field against a
//! scalar. `Value` covers the scalars the search engine accepts, plus a
//! structured escape hatch for anything already in wire form.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Extra per-leaf parameters (`boost`, `operator`, `fuzziness`, ...).
///
/// Merged verbatim into the leaf's field object when non-empty.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// A value a leaf query compares against.
///
/// # Examples
///
/// ```
/// use elastiq::Value;
///
/// let age: Value = 5.into();
/// let title: Value = "golang".into();
///
/// assert_eq!(age.type_name(), "int");
/// assert_eq!(title.to_json(), serde_json::json!("golang"));
/// ```
///
/// Values are write-only: they serialize to the plain JSON scalar (see
/// [`Value::to_json`]) and have no `Deserialize` impl, since a scalar alone
/// cannot tell a date from a string or `null` from structured data.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating point; non-finite values render as `null`.
    Float(f64),
    /// String.
    String(String),
    /// Timestamp, rendered as RFC 3339.
    Date(DateTime<Utc>),
    /// Pre-built JSON, embedded as-is.
    Structured(serde_json::Value),
    /// JSON `null`.
    Null,
}

impl Value {
    /// Returns a human-readable type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Date(_) => "date",
            Self::Structured(_) => "structured",
            Self::Null => "null",
        }
    }

    /// Renders the value as a JSON scalar.
    ///
    /// Dates use RFC 3339 with a `Z` suffix. Non-finite floats have no JSON
    /// form and render as `null`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Bool(v) => serde_json::Value::Bool(*v),
            Self::Int(v) => serde_json::Value::from(*v),
            Self::Float(v) => serde_json::Number::from_f64(*v)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::String(v) => serde_json::Value::String(v.clone()),
            Self::Date(v) => {
                serde_json::Value::String(v.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Self::Structured(v) => v.clone(),
            Self::Null => serde_json::Value::Null,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::Date(v) => write!(f, "{}", v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Self::Structured(v) => write!(f, "{v}"),
            Self::Null => write!(f, "null"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Date(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Self::Structured(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
