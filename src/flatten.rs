//! Output shaping: accumulator state to flat tabular rows.
//!
//! These are pure functions; they do not mutate the accumulators and never
//! fail (configuration mistakes were already rejected at construction time).
//! Statistics that are undefined for a column, such as the mean over zero
//! observations or anything beyond `count` for a `Generic` column, are
//! emitted as [`Value::Null`], not as a fabricated number.

use crate::column::ColumnSummary;
use crate::counter::TypedCounterWithExamples;
use crate::grouped::{GroupedStats, StatsConfig};
use crate::value::{Row, Value};

/// The derived statistics, in output order. Output field names are formed as
/// `<column>_<suffix>`.
pub const STATISTIC_SUFFIXES: [&str; 8] = [
    "count",
    "count_zero",
    "count_non_zero",
    "min",
    "max",
    "sum",
    "mean",
    "mean_non_zero",
];

/// The full output header for a statistics run: grouping columns first, then
/// every `<column>_<statistic>` combination in declaration order.
#[must_use]
pub fn stats_column_names(config: &StatsConfig) -> Vec<String> {
    let mut names: Vec<String> = config.groupby().to_vec();
    for column in config.value_columns() {
        for suffix in STATISTIC_SUFFIXES {
            names.push(format!("{column}_{suffix}"));
        }
    }
    names
}

/// The output header for a counter snapshot with the given reservoir
/// capacity: `label`, `count`, then `example_1..example_K`.
#[must_use]
pub fn counter_column_names(capacity: usize) -> Vec<String> {
    let mut names = vec!["label".to_string(), "count".to_string()];
    for i in 1..=capacity {
        names.push(format!("example_{i}"));
    }
    names
}

/// Flatten grouped statistics into one output row per group key, sorted by
/// key. Each row holds the grouping-column values plus the eight statistics
/// of every value column under `<column>_<statistic>` field names.
#[must_use]
pub fn flatten_stats(stats: &GroupedStats) -> Vec<Row> {
    let config = stats.config();
    let mut rows = Vec::with_capacity(stats.len());
    for (key, columns) in stats.groups() {
        let mut row = Row::new();
        for (name, value) in config.groupby().iter().zip(key) {
            row.insert(name.clone(), value.clone());
        }
        for (column, acc) in config.value_columns().iter().zip(columns) {
            insert_summary(&mut row, column, &acc.summary());
        }
        rows.push(row);
    }
    rows
}

fn insert_summary(row: &mut Row, column: &str, summary: &ColumnSummary) {
    row.insert(format!("{column}_count"), Value::from(summary.count));
    row.insert(format!("{column}_count_zero"), opt_count(summary.count_zero));
    row.insert(
        format!("{column}_count_non_zero"),
        opt_count(summary.count_non_zero),
    );
    row.insert(format!("{column}_min"), opt_float(summary.min));
    row.insert(format!("{column}_max"), opt_float(summary.max));
    row.insert(format!("{column}_sum"), opt_float(summary.sum));
    row.insert(format!("{column}_mean"), opt_float(summary.mean));
    row.insert(
        format!("{column}_mean_non_zero"),
        opt_float(summary.mean_non_zero),
    );
}

fn opt_count(v: Option<u64>) -> Value {
    v.map_or(Value::Null, Value::from)
}

fn opt_float(v: Option<f64>) -> Value {
    v.map_or(Value::Null, Value::from)
}

/// Flatten a counter into one output row per label, sorted by label. Every
/// row carries the full `example_1..example_K` field set; reservoirs shorter
/// than `K` are padded with [`Value::Null`].
#[must_use]
pub fn counter_rows(counter: &TypedCounterWithExamples) -> Vec<Row> {
    let capacity = counter.capacity();
    let mut rows = Vec::with_capacity(counter.len());
    for (label, entry) in counter.labels() {
        let mut row = Row::new();
        row.insert("label".to_string(), Value::from(label));
        row.insert("count".to_string(), Value::from(entry.count));
        for i in 1..=capacity {
            let example = entry.examples.get(i - 1).cloned().unwrap_or(Value::Null);
            row.insert(format!("example_{i}"), example);
        }
        rows.push(row);
    }
    rows
}
