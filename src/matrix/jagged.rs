//! Row-pointer jagged matrix view: one independent slice pair per row.

use num_traits::{AsPrimitive, PrimInt};

use crate::core::traits::RowView;
use crate::error::RelaxError;

/// Non-owning view over a jagged sparse matrix.
///
/// Row `r` consists of the first `num_entries[r]` elements of `inds[r]` and
/// `vals[r]`; the backing slices may be longer, and no two rows need be
/// contiguous in memory.
#[derive(Clone, Copy)]
pub struct JaggedView<'a, S, O> {
    inds: &'a [&'a [O]],
    vals: &'a [&'a [S]],
    num_entries: &'a [usize],
}

impl<'a, S, O> JaggedView<'a, S, O> {
    /// Build a view, validating once that the three arrays agree on the row
    /// count and that every row's slices hold at least `num_entries[r]`
    /// elements.
    pub fn try_new(
        inds: &'a [&'a [O]],
        vals: &'a [&'a [S]],
        num_entries: &'a [usize],
    ) -> Result<Self, RelaxError> {
        if inds.len() != num_entries.len() || vals.len() != num_entries.len() {
            return Err(RelaxError::ShapeMismatch(format!(
                "row counts disagree: {} index rows, {} value rows, {} entry counts",
                inds.len(),
                vals.len(),
                num_entries.len()
            )));
        }
        for (r, &n) in num_entries.iter().enumerate() {
            if inds[r].len() < n || vals[r].len() < n {
                return Err(RelaxError::ShapeMismatch(format!(
                    "row {} declares {} entries but holds {} indices and {} values",
                    r,
                    n,
                    inds[r].len(),
                    vals[r].len()
                )));
            }
        }
        Ok(Self { inds, vals, num_entries })
    }

    /// Total number of stored entries.
    pub fn num_entries(&self) -> usize {
        self.num_entries.iter().sum()
    }
}

impl<S, O> RowView<S> for JaggedView<'_, S, O>
where
    S: Copy,
    O: PrimInt + AsPrimitive<usize>,
{
    fn num_rows(&self) -> usize {
        self.num_entries.len()
    }

    fn row(&self, r: usize) -> impl Iterator<Item = (usize, S)> + '_ {
        let n = self.num_entries[r];
        self.inds[r][..n]
            .iter()
            .zip(&self.vals[r][..n])
            .map(|(&c, &v)| (c.as_(), v))
    }
}
