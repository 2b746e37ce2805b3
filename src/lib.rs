//! # Colstats
//!
//! Mergeable per-column statistics and bounded-example categorical counters
//! for partitioned batch pipelines.
//!
//! The crate ingests batches of row-like records and produces aggregate
//! statistics per column (count, min, max, sum, mean, and zero/non-zero
//! variants), optionally grouped by key columns, plus a categorical counter
//! that retains a small sample of example values per label for data-quality
//! auditing. The defining property is correctness under arbitrary
//! partitioning: the same input, split into any number of batches and
//! combined in any order or tree shape, yields identical aggregate output to
//! computing over the whole input at once. Every statistic, including ones
//! that are not naturally associative such as means, is decomposed into
//! associative partial sums with an identity element and an explicit merge.
//!
//! The engine is a pure, side-effect-free aggregation library. It performs
//! no I/O and does not decide how batches are produced; the encompassing
//! pipeline owns extraction, file formats, and orchestration, and hands
//! already-materialized batches in.
//!
//! ## Quick Start
//!
//! ```
//! use colstats::{GroupedStats, StatsConfig, Value, flatten_stats};
//! use colstats::testing::row;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = StatsConfig::ungrouped(["citations"])?;
//!
//! // Two workers, one batch each.
//! let mut a = GroupedStats::new(config.clone());
//! a.add_batch(&[
//!     row(&[("citations", Value::Int(1))]),
//!     row(&[("citations", Value::Int(2))]),
//! ]);
//! let mut b = GroupedStats::new(config);
//! b.add_batch(&[
//!     row(&[("citations", Value::Int(10))]),
//!     row(&[("citations", Value::Int(11))]),
//! ]);
//!
//! // Merge the partials, then flatten once.
//! a.merge(b);
//! let rows = flatten_stats(&a);
//! assert_eq!(rows[0]["citations_count"], Value::Int(4));
//! assert_eq!(rows[0]["citations_mean"], Value::float(6.0));
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Values and rows
//!
//! Input records are [`Row`] mappings from column name to [`Value`], a scalar
//! that may be absent ([`Value::Null`]). Nulls are excluded from every count
//! and aggregate.
//!
//! ### Column kinds
//!
//! A column's statistical kind ([`ColumnKind`]) is inferred from the values
//! observed: all boolean literals make it `Boolean` (coerced 0/1 for
//! arithmetic), all numbers make it `Numeric`, anything else demotes it to
//! `Generic`, for which only `count` is meaningful. Classification itself is
//! mergeable, so it stays consistent across any batch split.
//!
//! ### Accumulators
//!
//! [`ColumnStats`] aggregates one column; [`GroupedStats`] keeps one
//! `ColumnStats` per non-grouping column per group key;
//! [`TypedCounterWithExamples`] counts labels with a bounded first-K example
//! reservoir. All three are created empty, mutated only through
//! `add`/`merge`, and read out exactly once at the end of a combine tree.
//!
//! ### Combiners and the runner
//!
//! [`CombineFn`] is the Beam-style `create`/`add_input`/`merge`/`finish`
//! contract; [`GroupedStatsFn`] and [`LabelCounterFn`] expose the two engines
//! through it. [`Runner`] drives a combiner over pre-partitioned batches,
//! sequentially or on a rayon pool; both modes produce identical output.
//!
//! ## Error Handling
//!
//! The only fallible operations are constructors: a grouping column that is
//! not tracked, or a zero example-reservoir capacity, fail with
//! `anyhow::Error`. Value coercion never errors; a non-parseable value
//! demotes its column's kind instead of aborting the batch.
//!
//! ## Module Overview
//!
//! - [`value`] - scalar values, rows, and JSON interop
//! - [`kind`] - column type classification and its merge lattice
//! - [`column`] - the per-column statistics accumulator
//! - [`grouped`] - grouped statistics over row batches
//! - [`counter`] - the bounded-example categorical counter
//! - [`flatten`] - output shaping into flat tabular rows
//! - [`combine`] - the `CombineFn` contract and engine adapters
//! - [`runner`] - sequential and parallel tree-reduce execution
//! - [`testing`] - row builders and assertions for tests

pub mod column;
pub mod combine;
pub mod counter;
pub mod flatten;
pub mod grouped;
pub mod kind;
pub mod runner;
pub mod testing;
pub mod value;

pub use column::{ColumnStats, ColumnSummary};
pub use combine::{CombineFn, GroupedStatsFn, LabelCounterFn};
pub use counter::{LabelEntry, TypedCounterWithExamples};
pub use flatten::{
    STATISTIC_SUFFIXES, counter_column_names, counter_rows, flatten_stats, stats_column_names,
};
pub use grouped::{GroupKey, GroupedStats, StatsConfig};
pub use kind::{ColumnKind, classify};
pub use runner::{ExecMode, Runner, partition};
pub use value::{Row, Value, rows_from_json};
