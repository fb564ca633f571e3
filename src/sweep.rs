//! Dispatch of sweep ops over their flat index range.
//!
//! The kernels in this crate only define what happens for one flat index;
//! driving the full range is the job of an external parallel-for engine.
//! This module is a minimal such engine, enough to exercise and test the
//! per-index contract: sequential in-order dispatch plus a rayon-backed
//! parallel dispatch behind the default `rayon` feature. Any dispatcher that
//! invokes [`SweepOp::execute`](crate::core::traits::SweepOp::execute) for
//! every index in `[0, num_tasks())` may stand in for it.

use crate::core::traits::SweepOp;

/// Execution discipline for one sweep.
#[derive(Copy, Clone, Debug, Default)]
pub enum Parallelism {
    /// Single execution unit, strictly increasing index order. This is the
    /// discipline that makes the Gauss-Seidel op textbook Gauss-Seidel.
    #[default]
    None,
    /// Rayon work-stealing dispatch on the given number of threads, `0`
    /// meaning the current pool size. Index order is unspecified.
    #[cfg(feature = "rayon")]
    Rayon(usize),
}

/// Invoke `op.execute(i)` for every `i` in `[0, op.num_tasks())`.
///
/// The op itself decides whether concurrent dispatch is exact (diagonal
/// extraction, Jacobi) or relaxed (hybrid Gauss-Seidel); see each op's
/// documentation.
pub fn run<O: SweepOp + Sync>(op: &O, parallelism: Parallelism) {
    let n_tasks = op.num_tasks();
    match parallelism {
        Parallelism::None => (0..n_tasks).for_each(|i| op.execute(i)),
        #[cfg(feature = "rayon")]
        Parallelism::Rayon(n_threads) => {
            use rayon::prelude::*;
            let n_threads = if n_threads > 0 {
                n_threads
            } else {
                rayon::current_num_threads()
            };
            let min_len = (n_tasks / n_threads).max(1);
            (0..n_tasks)
                .into_par_iter()
                .with_min_len(min_len)
                .for_each(|i| op.execute(i));
        }
    }
}
