//! Diagonal extraction: one scan per row, recording the entry whose column
//! index equals the row index.

use num_traits::Float;

use crate::core::traits::{RowView, SweepOp};
use crate::error::RelaxError;
use crate::utils::shared::SharedSliceMut;

/// Per-row diagonal extraction op.
///
/// Task `row` scans that row's entries in storage order; the first entry with
/// column == row is written to `diag[row]` and the scan stops. A row with no
/// diagonal entry leaves its slot untouched, so callers dispatching this op
/// directly must either pre-fill `diag` or know every row has a diagonal.
/// [`extract_diagonal`] is the checked alternative.
///
/// Safe under any execution order or concurrency: each task reads immutable
/// matrix data and writes only its own `diag` slot.
pub struct ExtractDiagonalOp<'a, S, M> {
    a: M,
    diag: SharedSliceMut<'a, S>,
}

impl<'a, S, M> ExtractDiagonalOp<'a, S, M>
where
    S: Copy,
    M: RowView<S>,
{
    pub fn try_new(a: M, diag: &'a mut [S]) -> Result<Self, RelaxError> {
        if diag.len() != a.num_rows() {
            return Err(RelaxError::ShapeMismatch(format!(
                "diagonal buffer has {} slots for {} rows",
                diag.len(),
                a.num_rows()
            )));
        }
        Ok(Self { a, diag: SharedSliceMut::new(diag) })
    }
}

impl<S, M> SweepOp for ExtractDiagonalOp<'_, S, M>
where
    S: Copy,
    M: RowView<S>,
{
    fn num_tasks(&self) -> usize {
        self.a.num_rows()
    }

    fn execute(&self, row: usize) {
        for (c, v) in self.a.row(row) {
            if c == row {
                // SAFETY: row < num_tasks() == diag.len() (checked in
                // try_new), and task `row` is the only writer of this slot.
                unsafe { self.diag.write(row, v) };
                break;
            }
        }
    }
}

/// Extract the diagonal of `a` into `diag`, failing fast on rows that would
/// poison a later sweep.
///
/// Returns [`RelaxError::MissingDiagonal`] for a row with no diagonal entry
/// and [`RelaxError::ZeroPivot`] for an exactly-zero one, so the Jacobi and
/// Gauss-Seidel sweeps never divide by unset or zero memory.
pub fn extract_diagonal<S, M>(a: M, diag: &mut [S]) -> Result<(), RelaxError>
where
    S: Float,
    M: RowView<S>,
{
    let n = a.num_rows();
    if diag.len() != n {
        return Err(RelaxError::ShapeMismatch(format!(
            "diagonal buffer has {} slots for {} rows",
            diag.len(),
            n
        )));
    }
    for row in 0..n {
        let mut found = false;
        for (c, v) in a.row(row) {
            if c == row {
                if v == S::zero() {
                    return Err(RelaxError::ZeroPivot(row));
                }
                diag[row] = v;
                found = true;
                break;
            }
        }
        if !found {
            return Err(RelaxError::MissingDiagonal(row));
        }
    }
    Ok(())
}
