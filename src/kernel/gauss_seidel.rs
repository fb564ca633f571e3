//! Fine-grain "hybrid" Gauss-Seidel sweep: in-place relaxation whose
//! character depends on the dispatch discipline.

use num_traits::Float;

use crate::core::traits::{RowView, SweepOp};
use crate::error::RelaxError;
use crate::sweep::{self, Parallelism};
use crate::utils::shared::SharedSliceMut;
use crate::vector::{MultiVector, MultiVectorMut, split_flat};

/// Per-(row, rhs) in-place Gauss-Seidel op.
///
/// Task `i` decomposes as `(row, rhs)` per [`split_flat`] and computes
///
/// ```text
/// tmp         = b[row, rhs] - Σ v · x[c, rhs]   over all entries (c, v) of the row
/// x[row, rhs] += ω · tmp / diag[row]
/// ```
///
/// The residual sum includes the diagonal term, so with `ω = 1` and rows
/// dispatched in increasing order on one execution unit this is textbook
/// Gauss-Seidel, and for general `ω` textbook SOR.
///
/// Unlike [`JacobiOp`](crate::kernel::JacobiOp), the sweep reads and writes
/// the same buffer: the value seen for a neighbor column depends on whether
/// that row has already been updated. Dispatching out of order or
/// concurrently therefore yields a relaxed "hybrid" blend of Jacobi and
/// Gauss-Seidel — still a convergent relaxation, but execution-order
/// dependent and not bit-reproducible. That trade-off is deliberate and the
/// dispatcher selects it; no locks or atomics are involved, on the assumption
/// that individual scalar reads and writes are not torn.
///
/// `diag` must hold a nonzero value for every row; see
/// [`extract_diagonal`](crate::kernel::extract_diagonal).
pub struct GaussSeidelOp<'a, S, M> {
    a: M,
    diag: &'a [S],
    x: SharedSliceMut<'a, S>,
    b: MultiVector<'a, S>,
    omega: S,
    num_rows: usize,
    num_rhs: usize,
    x_stride: usize,
}

impl<'a, S, M> GaussSeidelOp<'a, S, M>
where
    S: Float,
    M: RowView<S>,
{
    /// Build the op, validating shapes and column indices once so the
    /// per-index updates can run check-free.
    pub fn try_new(
        a: M,
        diag: &'a [S],
        x: MultiVectorMut<'a, S>,
        b: MultiVector<'a, S>,
        omega: S,
    ) -> Result<Self, RelaxError> {
        let n = a.num_rows();
        if diag.len() != n || x.num_rows() != n || b.num_rows() != n {
            return Err(RelaxError::ShapeMismatch(format!(
                "matrix has {} rows; diag/x/b have {}/{}/{}",
                n,
                diag.len(),
                x.num_rows(),
                b.num_rows()
            )));
        }
        let num_rhs = x.num_cols();
        if b.num_cols() != num_rhs {
            return Err(RelaxError::ShapeMismatch(format!(
                "x has {} columns; b has {}",
                num_rhs,
                b.num_cols()
            )));
        }
        // The in-place update reads x through shared access, so every column
        // index must be in range before dispatch.
        for r in 0..n {
            for (c, _) in a.row(r) {
                if c >= n {
                    return Err(RelaxError::ShapeMismatch(format!(
                        "column index {} out of range in row {}",
                        c, r
                    )));
                }
            }
        }
        let x_stride = x.stride();
        Ok(Self {
            a,
            diag,
            x: x.into_shared(),
            b,
            omega,
            num_rows: n,
            num_rhs,
            x_stride,
        })
    }
}

impl<S, M> SweepOp for GaussSeidelOp<'_, S, M>
where
    S: Float,
    M: RowView<S>,
{
    fn num_tasks(&self) -> usize {
        self.num_rows * self.num_rhs
    }

    fn execute(&self, i: usize) {
        let (row, rhs) = split_flat(i, self.num_rows);
        let bj = self.b.col(rhs);
        let base = rhs * self.x_stride;
        let mut tmp = bj[row];
        for (c, v) in self.a.row(row) {
            // SAFETY: base + c is in bounds (columns validated in try_new,
            // layout in MultiVectorMut::try_new). Under concurrent dispatch
            // the read may see a neighbor's value from before or after its
            // update in this sweep; that is the hybrid discipline.
            let xc = unsafe { self.x.read(base + c) };
            tmp = tmp - v * xc;
        }
        // SAFETY: task `i` is the only writer of slot (row, rhs).
        unsafe {
            let xr = self.x.read(base + row);
            self.x.write(base + row, xr + self.omega * tmp / self.diag[row]);
        }
    }
}

/// One in-place Gauss-Seidel sweep: validate shapes, build the op, dispatch.
///
/// With [`Parallelism::None`] this is textbook Gauss-Seidel/SOR; with
/// parallel dispatch it is the relaxed hybrid variant described on
/// [`GaussSeidelOp`].
pub fn gauss_seidel_sweep<S, M>(
    a: M,
    diag: &[S],
    x: MultiVectorMut<'_, S>,
    b: MultiVector<'_, S>,
    omega: S,
    parallelism: Parallelism,
) -> Result<(), RelaxError>
where
    S: Float + Send + Sync,
    M: RowView<S> + Sync,
{
    let op = GaussSeidelOp::try_new(a, diag, x, b, omega)?;
    sweep::run(&op, parallelism);
    Ok(())
}
