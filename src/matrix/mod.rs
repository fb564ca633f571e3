//! Sparse matrix views: the two storage layouts the kernels operate on.
//!
//! Both are non-owning; construction validates structural invariants once,
//! and the [`RowView`](crate::core::traits::RowView) impls perform no further
//! checks.

pub mod csr;
pub mod jagged;

pub use csr::CsrView;
pub use jagged::JaggedView;
