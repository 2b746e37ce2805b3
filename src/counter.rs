//! Bounded-example categorical counting.
//!
//! [`TypedCounterWithExamples`] counts occurrences of a discrete label (such
//! as a reference-type tag) and keeps up to `K` example values per label for
//! inspection. Counts are exact and independent of how the input was
//! partitioned; the retained examples are a best-effort first-K sample whose
//! membership may depend on merge order, not a "first K in global input
//! order" guarantee.

use crate::value::{Row, Value};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-label state: total occurrences plus the retained examples.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub count: u64,
    pub examples: Vec<Value>,
}

/// A mergeable counter of labels with a bounded example reservoir per label.
///
/// A freshly constructed counter is the identity element of
/// [`merge`](TypedCounterWithExamples::merge).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypedCounterWithExamples {
    capacity: usize,
    labels: BTreeMap<String, LabelEntry>,
}

impl TypedCounterWithExamples {
    /// Create an empty counter retaining at most `capacity` examples per
    /// label. A zero capacity is a configuration error.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            bail!("example reservoir capacity must be positive");
        }
        Ok(Self {
            capacity,
            labels: BTreeMap::new(),
        })
    }

    /// Maximum number of examples retained per label.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of distinct labels seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Count one occurrence of `label`, retaining `example` if the label's
    /// reservoir still has room. Unseen labels are created on the fly.
    pub fn add(&mut self, label: impl Into<String>, example: Value) {
        let entry = self.labels.entry(label.into()).or_default();
        entry.count += 1;
        if entry.examples.len() < self.capacity {
            entry.examples.push(example);
        }
    }

    /// Merge another counter: counts add; examples concatenate in the
    /// caller-visible merge order and are truncated to capacity.
    pub fn merge(&mut self, other: Self) {
        self.capacity = self.capacity.max(other.capacity);
        for (label, incoming) in other.labels {
            let entry = self.labels.entry(label).or_default();
            entry.count += incoming.count;
            for example in incoming.examples {
                if entry.examples.len() >= self.capacity {
                    break;
                }
                entry.examples.push(example);
            }
        }
    }

    /// Iterate labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = (&str, &LabelEntry)> {
        self.labels.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The final label-to-state mapping as a plain map.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, LabelEntry> {
        self.labels.clone()
    }

    /// Shape the counter into flat output rows, one per label in sorted
    /// order, with `label`, `count`, and `example_1..example_K` fields
    /// (missing examples are [`Value::Null`]).
    #[must_use]
    pub fn to_rows(&self) -> Vec<Row> {
        crate::flatten::counter_rows(self)
    }
}
