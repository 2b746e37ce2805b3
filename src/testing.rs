//! Testing utilities for statistics pipelines.
//!
//! Row builders and assertion helpers used by this crate's own integration
//! tests and available to downstream users testing their combine trees.

use crate::value::{Row, Value};
use std::collections::BTreeMap;

/// Build a [`Row`] from `(column, value)` pairs.
///
/// # Example
///
/// ```
/// use colstats::Value;
/// use colstats::testing::row;
///
/// let r = row(&[("a", Value::Int(1)), ("b", Value::from("x"))]);
/// assert_eq!(r["a"], Value::Int(1));
/// ```
#[must_use]
pub fn row(pairs: &[(&str, Value)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

/// Build a batch of single-column rows, one per value. Handy for the
/// column-statistics test vectors.
#[must_use]
pub fn column_batch(column: &str, values: &[Value]) -> Vec<Row> {
    values.iter().map(|v| row(&[(column, v.clone())])).collect()
}

/// Assert that two row collections are equal element-by-element, panicking
/// with a readable per-index diff.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
pub fn assert_rows_equal(actual: &[Row], expected: &[Row]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Row count mismatch:\n  Expected: {}\n  Actual: {}",
        expected.len(),
        actual.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        if a != e {
            // BTreeMap renders fields in a stable order for the diff
            let a: BTreeMap<_, _> = a.iter().collect();
            let e: BTreeMap<_, _> = e.iter().collect();
            panic!("Row mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}");
        }
    }
}

/// Assert that a row field holds a float within `1e-9` of `expected`.
///
/// # Panics
///
/// Panics if the field is missing, non-float, or out of tolerance.
pub fn assert_field_close(row: &Row, field: &str, expected: f64) {
    match row.get(field) {
        Some(Value::Float(f)) => assert!(
            (f.0 - expected).abs() < 1e-9,
            "field {field:?}: expected {expected}, got {}",
            f.0
        ),
        other => panic!("field {field:?}: expected a float close to {expected}, got {other:?}"),
    }
}
