//! Damped Jacobi sweep: one relaxation pass reading a fixed previous iterate.

use num_traits::Float;

use crate::core::traits::{RowView, SweepOp};
use crate::error::RelaxError;
use crate::sweep::{self, Parallelism};
use crate::utils::shared::SharedSliceMut;
use crate::vector::{MultiVector, MultiVectorMut, split_flat};

/// Per-(row, rhs) damped Jacobi op.
///
/// Task `i` decomposes as `(row, rhs)` per [`split_flat`] and computes
///
/// ```text
/// tmp        = b[row, rhs] - Σ v · x0[c, rhs]   over entries (c, v) of the row
/// x[row, rhs] = x0[row, rhs] + ω · tmp / diag[row]
/// ```
///
/// `x0` is never written during the sweep and `x` is a distinct mutable
/// borrow (the borrow checker rules out aliasing them), so every task reads
/// only immutable inputs and writes one disjoint slot: any execution order or
/// concurrency degree yields bit-identical results.
///
/// `diag` must hold a nonzero value for every row; see
/// [`extract_diagonal`](crate::kernel::extract_diagonal).
pub struct JacobiOp<'a, S, M> {
    a: M,
    diag: &'a [S],
    x: SharedSliceMut<'a, S>,
    x0: MultiVector<'a, S>,
    b: MultiVector<'a, S>,
    omega: S,
    num_rows: usize,
    num_rhs: usize,
    x_stride: usize,
}

impl<'a, S, M> JacobiOp<'a, S, M>
where
    S: Float,
    M: RowView<S>,
{
    /// Build the op, validating shapes once. Row iteration during the sweep
    /// performs no checks beyond slice bounds.
    pub fn try_new(
        a: M,
        diag: &'a [S],
        x: MultiVectorMut<'a, S>,
        x0: MultiVector<'a, S>,
        b: MultiVector<'a, S>,
        omega: S,
    ) -> Result<Self, RelaxError> {
        let n = a.num_rows();
        if diag.len() != n
            || x.num_rows() != n
            || x0.num_rows() != n
            || b.num_rows() != n
        {
            return Err(RelaxError::ShapeMismatch(format!(
                "matrix has {} rows; diag/x/x0/b have {}/{}/{}/{}",
                n,
                diag.len(),
                x.num_rows(),
                x0.num_rows(),
                b.num_rows()
            )));
        }
        let num_rhs = x.num_cols();
        if x0.num_cols() != num_rhs || b.num_cols() != num_rhs {
            return Err(RelaxError::ShapeMismatch(format!(
                "x has {} columns; x0/b have {}/{}",
                num_rhs,
                x0.num_cols(),
                b.num_cols()
            )));
        }
        let x_stride = x.stride();
        Ok(Self {
            a,
            diag,
            x: x.into_shared(),
            x0,
            b,
            omega,
            num_rows: n,
            num_rhs,
            x_stride,
        })
    }
}

impl<S, M> SweepOp for JacobiOp<'_, S, M>
where
    S: Float,
    M: RowView<S>,
{
    fn num_tasks(&self) -> usize {
        self.num_rows * self.num_rhs
    }

    fn execute(&self, i: usize) {
        let (row, rhs) = split_flat(i, self.num_rows);
        let x0j = self.x0.col(rhs);
        let bj = self.b.col(rhs);
        let mut tmp = bj[row];
        for (c, v) in self.a.row(row) {
            tmp = tmp - v * x0j[c];
        }
        let xi = x0j[row] + self.omega * tmp / self.diag[row];
        // SAFETY: rhs * x_stride + row is within the buffer per the layout
        // check in MultiVectorMut::try_new, and task `i` is the only writer
        // of this slot.
        unsafe { self.x.write(rhs * self.x_stride + row, xi) };
    }
}

/// One damped Jacobi sweep: validate shapes, build the op, dispatch it.
pub fn jacobi_sweep<S, M>(
    a: M,
    diag: &[S],
    x: MultiVectorMut<'_, S>,
    x0: MultiVector<'_, S>,
    b: MultiVector<'_, S>,
    omega: S,
    parallelism: Parallelism,
) -> Result<(), RelaxError>
where
    S: Float + Send + Sync,
    M: RowView<S> + Sync,
{
    let op = JacobiOp::try_new(a, diag, x, x0, b, omega)?;
    sweep::run(&op, parallelism);
    Ok(())
}
