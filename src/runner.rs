//! Tree-reduce execution of a [`CombineFn`] over pre-partitioned batches.
//!
//! The accumulators themselves are single-threaded; parallelism is purely
//! structural. Each batch gets its own exclusively owned accumulator, and
//! partials are merged pairwise. Because every accumulator in this crate has
//! an identity element and an associative, commutative merge, the sequential
//! and parallel paths (and any rayon reduce tree shape) produce identical
//! aggregate output for the same input.

use crate::combine::CombineFn;
use rayon::prelude::*;

#[derive(Clone, Copy, Debug)]
pub enum ExecMode {
    /// One batch accumulator at a time, merged in a left fold.
    Sequential,
    /// Batch accumulators built on a rayon pool and merged in an arbitrary
    /// reduce tree.
    Parallel { threads: Option<usize> },
}

pub struct Runner {
    pub mode: ExecMode,
    /// Fanout used by [`run_partitioned`](Runner::run_partitioned) when the
    /// caller hands over unpartitioned input.
    pub default_partitions: usize,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            mode: ExecMode::Parallel { threads: None },
            default_partitions: 2 * num_cpus::get().max(2),
        }
    }
}

impl Runner {
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            mode: ExecMode::Sequential,
            ..Self::default()
        }
    }

    /// Combine already-partitioned batches and extract the output. `finish`
    /// is called exactly once, on the root of the merge tree.
    pub fn run<C, V, A, O>(&self, comb: &C, batches: Vec<Vec<V>>) -> O
    where
        C: CombineFn<V, A, O>,
        V: Send,
        A: Send,
    {
        match self.mode {
            ExecMode::Sequential => {
                let mut acc = comb.create();
                for batch in batches {
                    comb.merge(&mut acc, batch_accumulator(comb, batch));
                }
                comb.finish(acc)
            }
            ExecMode::Parallel { threads } => {
                if let Some(t) = threads {
                    // ok() to ignore "already built" on repeated calls in tests
                    rayon::ThreadPoolBuilder::new()
                        .num_threads(t)
                        .build_global()
                        .ok();
                }
                let acc = batches
                    .into_par_iter()
                    .map(|batch| batch_accumulator(comb, batch))
                    .reduce(
                        || comb.create(),
                        |mut a, b| {
                            comb.merge(&mut a, b);
                            a
                        },
                    );
                comb.finish(acc)
            }
        }
    }

    /// Split flat input into [`default_partitions`](Runner::default_partitions)
    /// batches and run.
    pub fn run_partitioned<C, V, A, O>(&self, comb: &C, data: Vec<V>) -> O
    where
        C: CombineFn<V, A, O>,
        V: Send,
        A: Send,
    {
        self.run(comb, partition(data, self.default_partitions))
    }
}

fn batch_accumulator<C, V, A, O>(comb: &C, batch: Vec<V>) -> A
where
    C: CombineFn<V, A, O>,
{
    let mut acc = comb.create();
    for v in batch {
        comb.add_input(&mut acc, v);
    }
    acc
}

/// Split a vector into at most `n` contiguous batches.
#[must_use]
pub fn partition<V>(data: Vec<V>, n: usize) -> Vec<Vec<V>> {
    let len = data.len();
    if n <= 1 || len <= 1 {
        return vec![data];
    }
    let chunk = len.div_ceil(n);
    let mut out = Vec::with_capacity(n);
    let mut rest = data;
    while rest.len() > chunk {
        let tail = rest.split_off(chunk);
        out.push(rest);
        rest = tail;
    }
    out.push(rest);
    out
}
