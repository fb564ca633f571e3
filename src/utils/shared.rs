//! Shared mutable slice access for concurrently dispatched kernel ops.

use std::marker::PhantomData;

/// A `Send + Sync` view over a `&mut [T]` that lets concurrently dispatched
/// tasks write disjoint slots without synchronization.
///
/// This is the crate's only unsafe surface. The aliasing rules it replaces
/// are pushed into the contracts of [`read`](SharedSliceMut::read) and
/// [`write`](SharedSliceMut::write): each task of a sweep must write only the
/// slot(s) it owns, and cross-task reads of slots another task may write are
/// permitted only under the hybrid Gauss-Seidel discipline, where an
/// execution-order-dependent value is acceptable and scalar accesses are
/// assumed non-torn.
pub struct SharedSliceMut<'a, T> {
    ptr: *mut T,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

unsafe impl<T: Send + Sync> Send for SharedSliceMut<'_, T> {}
unsafe impl<T: Send + Sync> Sync for SharedSliceMut<'_, T> {}

impl<'a, T> SharedSliceMut<'a, T> {
    pub fn new(slice: &'a mut [T]) -> Self {
        Self {
            ptr: slice.as_mut_ptr(),
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read slot `i`.
    ///
    /// # Safety
    ///
    /// `i < self.len()`, and either no other task writes slot `i` during this
    /// sweep, or the caller accepts an execution-order-dependent value
    /// (hybrid Gauss-Seidel discipline).
    #[inline]
    pub unsafe fn read(&self, i: usize) -> T
    where
        T: Copy,
    {
        debug_assert!(i < self.len);
        unsafe { *self.ptr.add(i) }
    }

    /// Write `value` into slot `i`.
    ///
    /// # Safety
    ///
    /// `i < self.len()`, and slot `i` is written by at most one task per
    /// sweep.
    #[inline]
    pub unsafe fn write(&self, i: usize, value: T) {
        debug_assert!(i < self.len);
        unsafe { *self.ptr.add(i) = value }
    }
}
