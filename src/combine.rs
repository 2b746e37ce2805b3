//! The combine contract and the adapters that expose the two engines
//! through it.
//!
//! [`CombineFn`] is the narrow interface a distributed combine runner (a
//! tree-reduce combiner in the MapReduce mould) drives: `create` an empty
//! accumulator per partition, `add_input` each element, `merge` partial
//! accumulators in any tree shape, and `finish` the final one exactly once.
//! Correctness under arbitrary partitioning follows from every accumulator
//! here having an identity element and an associative, commutative merge.

use crate::counter::TypedCounterWithExamples;
use crate::flatten::{counter_rows, flatten_stats};
use crate::grouped::{GroupedStats, StatsConfig};
use crate::value::{Row, Value};
use anyhow::Result;

/// A combiner over values `V` with accumulator `A` and output `O`.
pub trait CombineFn<V, A, O>: Send + Sync + 'static {
    /// A fresh identity accumulator.
    fn create(&self) -> A;
    /// Fold one input element into an accumulator.
    fn add_input(&self, acc: &mut A, v: V);
    /// Merge a partial accumulator into another.
    fn merge(&self, acc: &mut A, other: A);
    /// Convert the final accumulator into the output value.
    fn finish(&self, acc: A) -> O;
}

/// [`CombineFn`] adapter for [`GroupedStats`]: rows in, flattened statistic
/// rows out.
///
/// Configuration is validated here, at construction, so `create` is
/// infallible.
#[derive(Clone, Debug)]
pub struct GroupedStatsFn {
    proto: GroupedStats,
}

impl GroupedStatsFn {
    /// Build an adapter tracking `columns`, grouped by `groupby` (which must
    /// be a subset of `columns`).
    pub fn new<C, G>(columns: C, groupby: G) -> Result<Self>
    where
        C: IntoIterator,
        C::Item: Into<String>,
        G: IntoIterator,
        G::Item: Into<String>,
    {
        Ok(Self::from_config(StatsConfig::new(columns, groupby)?))
    }

    #[must_use]
    pub fn from_config(config: StatsConfig) -> Self {
        Self {
            proto: GroupedStats::new(config),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &StatsConfig {
        self.proto.config()
    }
}

impl CombineFn<Row, GroupedStats, Vec<Row>> for GroupedStatsFn {
    fn create(&self) -> GroupedStats {
        self.proto.clone()
    }

    fn add_input(&self, acc: &mut GroupedStats, row: Row) {
        acc.add_row(&row);
    }

    fn merge(&self, acc: &mut GroupedStats, other: GroupedStats) {
        acc.merge(other);
    }

    fn finish(&self, acc: GroupedStats) -> Vec<Row> {
        flatten_stats(&acc)
    }
}

/// [`CombineFn`] adapter for [`TypedCounterWithExamples`]: `(label, example)`
/// pairs in, one flattened row per label out.
#[derive(Clone, Debug)]
pub struct LabelCounterFn {
    proto: TypedCounterWithExamples,
}

impl LabelCounterFn {
    /// Build an adapter retaining at most `capacity` examples per label.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            proto: TypedCounterWithExamples::new(capacity)?,
        })
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.proto.capacity()
    }
}

impl CombineFn<(String, Value), TypedCounterWithExamples, Vec<Row>> for LabelCounterFn {
    fn create(&self) -> TypedCounterWithExamples {
        self.proto.clone()
    }

    fn add_input(&self, acc: &mut TypedCounterWithExamples, (label, example): (String, Value)) {
        acc.add(label, example);
    }

    fn merge(&self, acc: &mut TypedCounterWithExamples, other: TypedCounterWithExamples) {
        acc.merge(other);
    }

    fn finish(&self, acc: TypedCounterWithExamples) -> Vec<Row> {
        counter_rows(&acc)
    }
}
