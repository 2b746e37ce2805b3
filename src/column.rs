//! The per-column statistics accumulator.
//!
//! [`ColumnStats`] holds only associative partial sums, so two accumulators
//! over disjoint batches merge into exactly the accumulator the union of the
//! batches would have produced. Derived statistics (mean, mean of non-zero
//! values) are computed lazily in [`ColumnStats::summary`], never stored.

use crate::kind::ColumnKind;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Mergeable aggregation state for one column within one group.
///
/// The default (empty) accumulator is the identity element of
/// [`merge`](ColumnStats::merge).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    kind: Option<ColumnKind>,
    count: u64,
    count_zero: u64,
    count_non_zero: u64,
    sum: f64,
    sum_non_zero: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl ColumnStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The classification of all values observed so far; `None` before the
    /// first non-null value.
    #[must_use]
    pub const fn kind(&self) -> Option<ColumnKind> {
        self.kind
    }

    /// Number of non-null observations.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Fold one value into the accumulator. Nulls are ignored entirely; a
    /// value that fails boolean/numeric coercion bumps `count` and demotes
    /// the kind, never errors.
    pub fn add(&mut self, value: &Value) {
        let Some(kind) = ColumnKind::of(value) else {
            return;
        };
        self.count += 1;
        self.kind = ColumnKind::merge_opt(self.kind, Some(kind));
        if let Some(x) = value.coerce_numeric() {
            self.sum += x;
            if x == 0.0 {
                self.count_zero += 1;
            } else {
                self.count_non_zero += 1;
                self.sum_non_zero += x;
            }
            self.min = Some(self.min.map_or(x, |m| m.min(x)));
            self.max = Some(self.max.map_or(x, |m| m.max(x)));
        }
    }

    /// Field-wise merge: counts and sums add, extrema combine, kinds merge.
    /// Merging with an empty accumulator is a no-op.
    pub fn merge(&mut self, other: Self) {
        self.kind = ColumnKind::merge_opt(self.kind, other.kind);
        self.count += other.count;
        self.count_zero += other.count_zero;
        self.count_non_zero += other.count_non_zero;
        self.sum += other.sum;
        self.sum_non_zero += other.sum_non_zero;
        self.min = match (self.min, other.min) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (some, None) | (None, some) => some,
        };
        self.max = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (some, None) | (None, some) => some,
        };
    }

    /// Compute the derived statistics.
    ///
    /// For `Generic` columns (and columns that never saw a non-null value)
    /// only `count` is populated. Means with a zero denominator are `None`,
    /// never a fabricated number.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn summary(&self) -> ColumnSummary {
        let arithmetic = self.kind.is_some_and(ColumnKind::is_arithmetic);
        if !arithmetic {
            return ColumnSummary {
                count: self.count,
                ..ColumnSummary::default()
            };
        }
        ColumnSummary {
            count: self.count,
            count_zero: Some(self.count_zero),
            count_non_zero: Some(self.count_non_zero),
            min: self.min,
            max: self.max,
            sum: Some(self.sum),
            mean: (self.count > 0).then(|| self.sum / self.count as f64),
            mean_non_zero: (self.count_non_zero > 0)
                .then(|| self.sum_non_zero / self.count_non_zero as f64),
        }
    }
}

/// The derived statistics of one column, as read out of a final accumulator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub count: u64,
    pub count_zero: Option<u64>,
    pub count_non_zero: Option<u64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub sum: Option<f64>,
    pub mean: Option<f64>,
    pub mean_non_zero: Option<f64>,
}
