//! Core traits for rowrelax: row access over sparse storage and the
//! per-index execution contract shared by every kernel.

/// Read-only access to the entries of one matrix row.
///
/// The relaxation math is written once against this trait; each sparse
/// storage layout implements it separately. Entries within a row are not
/// assumed sorted by column, and a row may or may not contain a diagonal
/// entry.
pub trait RowView<S> {
    /// Number of rows.
    fn num_rows(&self) -> usize;
    /// Yield the (column, value) pairs of row `r`, in storage order.
    fn row(&self, r: usize) -> impl Iterator<Item = (usize, S)> + '_;
}

impl<S, V: RowView<S>> RowView<S> for &V {
    fn num_rows(&self) -> usize {
        (**self).num_rows()
    }
    fn row(&self, r: usize) -> impl Iterator<Item = (usize, S)> + '_ {
        (**self).row(r)
    }
}

/// One relaxation kernel, viewed as a flat collection of constant-work tasks.
///
/// A dispatcher invokes [`execute`](SweepOp::execute) for every flat index in
/// `[0, num_tasks())`, in an order and concurrency degree of its choosing. A
/// sweep is complete only once every index has been processed; providing that
/// guarantee is the dispatcher's job, not the op's. Each op documents which
/// execution disciplines it supports (all of them for diagonal extraction and
/// Jacobi, with a relaxed-consistency caveat for Gauss-Seidel).
pub trait SweepOp {
    /// Number of flat indices in this op's range.
    fn num_tasks(&self) -> usize;
    /// Perform the update for one flat index. Constant work: no internal
    /// iteration over rows, no allocation, no synchronization.
    fn execute(&self, i: usize);
}
