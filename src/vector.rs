//! Strided block-vector (multivector) views.
//!
//! A multivector is a logically 2-D block of `num_rows` rows by `num_cols`
//! right-hand-side columns, stored in one flat buffer with `stride` scalars
//! between consecutive columns. Kernels address it through the flat-index
//! decomposition of [`split_flat`].

use crate::error::RelaxError;
use crate::utils::shared::SharedSliceMut;

/// Decompose a flat sweep index into `(row, rhs)`:
/// `row = i % num_rows`, `rhs = (i - row) / num_rows`.
#[inline]
pub fn split_flat(i: usize, num_rows: usize) -> (usize, usize) {
    let row = i % num_rows;
    (row, (i - row) / num_rows)
}

fn check_layout(
    len: usize,
    num_rows: usize,
    num_cols: usize,
    stride: usize,
) -> Result<(), RelaxError> {
    if num_cols > 1 && stride < num_rows {
        return Err(RelaxError::ShapeMismatch(format!(
            "stride {} smaller than column height {}",
            stride, num_rows
        )));
    }
    let required = if num_rows == 0 || num_cols == 0 {
        0
    } else {
        (num_cols - 1) * stride + num_rows
    };
    if len < required {
        return Err(RelaxError::ShapeMismatch(format!(
            "buffer of length {} cannot hold {} columns of {} rows at stride {}",
            len, num_cols, num_rows, stride
        )));
    }
    Ok(())
}

/// Read-only multivector view.
#[derive(Clone, Copy)]
pub struct MultiVector<'a, S> {
    data: &'a [S],
    num_rows: usize,
    num_cols: usize,
    stride: usize,
}

impl<'a, S> MultiVector<'a, S> {
    /// Build a view, validating the layout once.
    pub fn try_new(
        data: &'a [S],
        num_rows: usize,
        num_cols: usize,
        stride: usize,
    ) -> Result<Self, RelaxError> {
        check_layout(data.len(), num_rows, num_cols, stride)?;
        Ok(Self { data, num_rows, num_cols, stride })
    }

    /// View a plain vector as a single-column multivector.
    pub fn from_column(data: &'a [S]) -> Self {
        let num_rows = data.len();
        Self { data, num_rows, num_cols: 1, stride: num_rows }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Column `j` as a contiguous slice of `num_rows` scalars.
    #[inline]
    pub fn col(&self, j: usize) -> &'a [S] {
        let base = j * self.stride;
        &self.data[base..base + self.num_rows]
    }
}

/// Mutable multivector view.
pub struct MultiVectorMut<'a, S> {
    data: &'a mut [S],
    num_rows: usize,
    num_cols: usize,
    stride: usize,
}

impl<'a, S> MultiVectorMut<'a, S> {
    /// Build a view, validating the layout once.
    pub fn try_new(
        data: &'a mut [S],
        num_rows: usize,
        num_cols: usize,
        stride: usize,
    ) -> Result<Self, RelaxError> {
        check_layout(data.len(), num_rows, num_cols, stride)?;
        Ok(Self { data, num_rows, num_cols, stride })
    }

    /// View a plain vector as a single-column multivector.
    pub fn from_column(data: &'a mut [S]) -> Self {
        let num_rows = data.len();
        Self { data, num_rows, num_cols: 1, stride: num_rows }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Column `j` as a contiguous mutable slice of `num_rows` scalars.
    #[inline]
    pub fn col_mut(&mut self, j: usize) -> &mut [S] {
        let base = j * self.stride;
        &mut self.data[base..base + self.num_rows]
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> MultiVector<'_, S> {
        MultiVector {
            data: self.data,
            num_rows: self.num_rows,
            num_cols: self.num_cols,
            stride: self.stride,
        }
    }

    /// Consume the view, yielding shared write access to the flat buffer for
    /// a concurrently dispatched sweep.
    pub(crate) fn into_shared(self) -> SharedSliceMut<'a, S> {
        SharedSliceMut::new(self.data)
    }
}
