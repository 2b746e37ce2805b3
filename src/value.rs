//! Scalar values and row-shaped records.
//!
//! A [`Value`] is the smallest unit the statistics engine looks at: a scalar
//! drawn from one column of one record, possibly absent. A [`Row`] maps column
//! names to values; a missing key and an explicit [`Value::Null`] are treated
//! the same everywhere in the crate.
//!
//! Floats are stored as [`OrderedFloat`] so that `Value` is `Eq + Ord + Hash`
//! and can be used directly as a group-key component.

use anyhow::{Result, bail};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A row-like record: column name to scalar value.
pub type Row = HashMap<String, Value>;

/// A scalar column value, possibly absent.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent / missing marker. Excluded from all counts and aggregates.
    Null,
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    Text(String),
}

impl Value {
    /// Convenience constructor for float values.
    #[must_use]
    pub fn float(v: f64) -> Self {
        Self::Float(OrderedFloat(v))
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Lenient boolean view: native booleans, plus case-insensitive
    /// `"true"`/`"false"` text literals.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(s) => {
                let s = s.trim();
                if s.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if s.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Lenient numeric view: native integers and floats, plus text that
    /// parses as a decimal number. Non-finite text (`inf`, `NaN`) does not
    /// count as numeric.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(f.0),
            Self::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return None;
                }
                s.parse::<f64>().ok().filter(|f| f.is_finite())
            }
            _ => None,
        }
    }

    /// Coerce to a number for aggregation: booleans become 0/1, numerics
    /// their value. `None` for nulls and non-numeric text.
    #[must_use]
    pub fn coerce_numeric(&self) -> Option<f64> {
        if let Some(b) = self.as_bool() {
            return Some(if b { 1.0 } else { 0.0 });
        }
        self.as_f64()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{}", x.0),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        // Counts routinely travel through Value; saturate rather than wrap.
        Self::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = anyhow::Error;

    fn try_from(v: serde_json::Value) -> Result<Self> {
        match v {
            serde_json::Value::Null => Ok(Self::Null),
            serde_json::Value::Bool(b) => Ok(Self::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Self::float(f))
                } else {
                    bail!("unrepresentable JSON number: {n}")
                }
            }
            serde_json::Value::String(s) => Ok(Self::Text(s)),
            other => bail!("expected a JSON scalar, got: {other}"),
        }
    }
}

/// Convert a JSON array of flat objects into [`Row`]s.
///
/// Fails on non-array input, non-object elements, and nested (non-scalar)
/// field values.
pub fn rows_from_json(json: serde_json::Value) -> Result<Vec<Row>> {
    let serde_json::Value::Array(items) = json else {
        bail!("expected a JSON array of objects");
    };
    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let serde_json::Value::Object(fields) = item else {
            bail!("expected a JSON object row, got: {item}");
        };
        let mut row = Row::with_capacity(fields.len());
        for (name, value) in fields {
            row.insert(name, Value::try_from(value)?);
        }
        rows.push(row);
    }
    Ok(rows)
}
