//! Compressed row storage ("offset/index/value") matrix view.

use num_traits::{AsPrimitive, PrimInt};

use crate::core::traits::RowView;
use crate::error::RelaxError;

/// Non-owning view over a row-major compressed sparse matrix.
///
/// `offsets` has `num_rows + 1` non-decreasing entries; row `r` owns the
/// half-open entry range `offsets[r]..offsets[r+1]` of `inds`/`vals`.
/// Entries within a row need not be sorted by column.
#[derive(Clone, Copy)]
pub struct CsrView<'a, S, O> {
    offsets: &'a [usize],
    inds: &'a [O],
    vals: &'a [S],
}

impl<'a, S, O> CsrView<'a, S, O> {
    /// Build a view, validating the structural invariants once: `offsets` is
    /// non-empty and non-decreasing, and its last entry equals the length of
    /// both `inds` and `vals`. Row iteration itself performs no checks.
    pub fn try_new(
        offsets: &'a [usize],
        inds: &'a [O],
        vals: &'a [S],
    ) -> Result<Self, RelaxError> {
        if offsets.is_empty() {
            return Err(RelaxError::ShapeMismatch(
                "offsets must have num_rows + 1 entries".into(),
            ));
        }
        if offsets.windows(2).any(|w| w[0] > w[1]) {
            return Err(RelaxError::ShapeMismatch(
                "offsets must be non-decreasing".into(),
            ));
        }
        let nnz = offsets[offsets.len() - 1];
        if inds.len() != nnz || vals.len() != nnz {
            return Err(RelaxError::ShapeMismatch(format!(
                "expected {} entries, got {} column indices and {} values",
                nnz,
                inds.len(),
                vals.len()
            )));
        }
        Ok(Self { offsets, inds, vals })
    }

    /// Total number of stored entries.
    pub fn num_entries(&self) -> usize {
        self.offsets[self.offsets.len() - 1]
    }
}

impl<S, O> RowView<S> for CsrView<'_, S, O>
where
    S: Copy,
    O: PrimInt + AsPrimitive<usize>,
{
    fn num_rows(&self) -> usize {
        self.offsets.len() - 1
    }

    fn row(&self, r: usize) -> impl Iterator<Item = (usize, S)> + '_ {
        let lo = self.offsets[r];
        let hi = self.offsets[r + 1];
        self.inds[lo..hi]
            .iter()
            .zip(&self.vals[lo..hi])
            .map(|(&c, &v)| (c.as_(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::RowView;

    #[test]
    fn row_iteration_unsorted() {
        // 2×3 matrix [[1,2,0],[4,0,3]] with row 1 stored out of column order
        let offsets = [0usize, 2, 4];
        let inds = [0u32, 1, 2, 0];
        let vals = [1.0, 2.0, 3.0, 4.0];
        let a = CsrView::try_new(&offsets, &inds, &vals).unwrap();
        assert_eq!(a.num_rows(), 2);
        assert_eq!(a.num_entries(), 4);
        let r1: Vec<_> = a.row(1).collect();
        assert_eq!(r1, vec![(2, 3.0), (0, 4.0)]);
    }

    #[test]
    fn rejects_bad_offsets() {
        let offsets = [0usize, 3, 2];
        let inds = [0u32, 1];
        let vals = [1.0, 2.0];
        assert!(CsrView::try_new(&offsets, &inds, &vals).is_err());
    }

    #[test]
    fn rejects_length_mismatch() {
        let offsets = [0usize, 2];
        let inds = [0u32];
        let vals = [1.0, 2.0];
        assert!(CsrView::try_new(&offsets, &inds, &vals).is_err());
    }
}
