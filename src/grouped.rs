//! Grouped per-column statistics over row batches.
//!
//! [`GroupedStats`] maps a group key (the tuple of grouping-column values, or
//! the empty tuple when ungrouped) to one [`ColumnStats`] per non-grouping
//! column. Groups live in a `BTreeMap` so iteration order, and therefore
//! flattened output order, is deterministic (sorted by key) regardless of
//! insertion order.

use crate::column::ColumnStats;
use crate::value::{Row, Value};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// One group's identity: the grouping-column values in declaration order.
/// Missing grouping values appear as [`Value::Null`], they are never dropped.
pub type GroupKey = Vec<Value>;

/// Validated configuration for [`GroupedStats`]: which columns are tracked
/// and which of them partition the output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    columns: Vec<String>,
    groupby: Vec<String>,
    value_columns: Vec<String>,
}

impl StatsConfig {
    /// Build a configuration, checking that every grouping column is among
    /// the tracked columns. This is the only place a grouping mistake can
    /// surface; aggregation and merging are infallible afterwards.
    pub fn new<C, G>(columns: C, groupby: G) -> Result<Self>
    where
        C: IntoIterator,
        C::Item: Into<String>,
        G: IntoIterator,
        G::Item: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let groupby: Vec<String> = groupby.into_iter().map(Into::into).collect();
        for g in &groupby {
            if !columns.contains(g) {
                bail!("grouping column {g:?} is not among the tracked columns {columns:?}");
            }
        }
        let value_columns = columns
            .iter()
            .filter(|c| !groupby.contains(c))
            .cloned()
            .collect();
        Ok(Self {
            columns,
            groupby,
            value_columns,
        })
    }

    /// Ungrouped configuration: a single implicit global group.
    pub fn ungrouped<C>(columns: C) -> Result<Self>
    where
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self::new(columns, Vec::<String>::new())
    }

    /// All tracked columns, in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The grouping columns; empty when ungrouped.
    #[must_use]
    pub fn groupby(&self) -> &[String] {
        &self.groupby
    }

    /// Tracked columns that are not grouping columns; these are the ones
    /// statistics are computed for.
    #[must_use]
    pub fn value_columns(&self) -> &[String] {
        &self.value_columns
    }
}

/// The grouped statistics accumulator.
///
/// Every present group key maps to a full, equal-shaped set of
/// [`ColumnStats`] (one per value column), so two accumulators with the same
/// configuration always merge cleanly. A freshly created instance is the
/// identity element of [`merge`](GroupedStats::merge).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupedStats {
    config: StatsConfig,
    groups: BTreeMap<GroupKey, Vec<ColumnStats>>,
}

impl GroupedStats {
    #[must_use]
    pub fn new(config: StatsConfig) -> Self {
        let mut groups = BTreeMap::new();
        if config.groupby.is_empty() {
            // The implicit global group exists even before any rows arrive,
            // so zero input still yields a (zero-count) output row.
            groups.insert(
                GroupKey::new(),
                vec![ColumnStats::new(); config.value_columns.len()],
            );
        }
        Self { config, groups }
    }

    #[must_use]
    pub const fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Number of group keys present. Ungrouped accumulators always hold the
    /// implicit global group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Fold one row into the accumulator.
    pub fn add_row(&mut self, row: &Row) {
        let key: GroupKey = self
            .config
            .groupby
            .iter()
            .map(|c| row.get(c).cloned().unwrap_or(Value::Null))
            .collect();
        let stats = self
            .groups
            .entry(key)
            .or_insert_with(|| vec![ColumnStats::new(); self.config.value_columns.len()]);
        for (column, acc) in self.config.value_columns.iter().zip(stats.iter_mut()) {
            acc.add(row.get(column).unwrap_or(&Value::Null));
        }
    }

    /// Fold a batch of rows. An empty batch contributes no group keys and is
    /// a valid identity input.
    pub fn add_batch(&mut self, rows: &[Row]) {
        for row in rows {
            self.add_row(row);
        }
    }

    /// Merge another accumulator built with an equal configuration: union
    /// over group keys, field-wise [`ColumnStats::merge`] on keys present in
    /// both.
    pub fn merge(&mut self, other: Self) {
        debug_assert_eq!(self.config, other.config, "merging differently configured stats");
        for (key, other_stats) in other.groups {
            match self.groups.entry(key) {
                Entry::Occupied(mut e) => {
                    for (acc, incoming) in e.get_mut().iter_mut().zip(other_stats) {
                        acc.merge(incoming);
                    }
                }
                Entry::Vacant(e) => {
                    e.insert(other_stats);
                }
            }
        }
    }

    /// Iterate groups in sorted key order. Each entry carries one
    /// [`ColumnStats`] per [`StatsConfig::value_columns`] entry, positionally
    /// aligned.
    pub fn groups(&self) -> impl Iterator<Item = (&GroupKey, &[ColumnStats])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }
}
