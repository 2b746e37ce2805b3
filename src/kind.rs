//! Per-column type classification.
//!
//! Columns arrive untyped; their statistical kind is inferred from the
//! non-null values actually observed. Classification is incremental and
//! merge-compatible: merging the classifications of two batches yields the
//! classification of the union of their values, which is what lets
//! [`ColumnStats`](crate::ColumnStats) accumulators merge in any tree shape.

use crate::value::Value;
use serde::{Deserialize, Serialize};

/// The statistical kind of a column, decided purely from observed values.
///
/// The merge lattice: [`Generic`](ColumnKind::Generic) absorbs everything
/// (one non-parseable value anywhere demotes the column), and a column seen
/// as booleans in one batch and numbers in another is
/// [`Numeric`](ColumnKind::Numeric) overall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Every non-null value is a boolean literal; coerced to 0/1 for
    /// arithmetic.
    Boolean,
    /// Every non-null value parses as an integer or float.
    Numeric,
    /// Anything else; only `count` is meaningful.
    Generic,
}

impl ColumnKind {
    /// Classify a single value. Nulls carry no type information.
    #[must_use]
    pub fn of(value: &Value) -> Option<Self> {
        if value.is_null() {
            return None;
        }
        if value.as_bool().is_some() {
            Some(Self::Boolean)
        } else if value.as_f64().is_some() {
            Some(Self::Numeric)
        } else {
            Some(Self::Generic)
        }
    }

    /// Combine two classifications; total, commutative, associative.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Generic, _) | (_, Self::Generic) => Self::Generic,
            (Self::Numeric, _) | (_, Self::Numeric) => Self::Numeric,
            (Self::Boolean, Self::Boolean) => Self::Boolean,
        }
    }

    /// Merge with `None` as the identity (the not-yet-observed state).
    #[must_use]
    pub fn merge_opt(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.merge(b)),
            (some, None) | (None, some) => some,
        }
    }

    /// Whether values of this kind participate in sums, extrema, and
    /// zero/non-zero splits.
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        !matches!(self, Self::Generic)
    }
}

/// Classify a whole sequence of values. `None` when no non-null value was
/// seen.
pub fn classify<'a, I>(values: I) -> Option<ColumnKind>
where
    I: IntoIterator<Item = &'a Value>,
{
    values
        .into_iter()
        .fold(None, |acc, v| ColumnKind::merge_opt(acc, ColumnKind::of(v)))
}
