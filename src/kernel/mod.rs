//! Relaxation kernels: diagonal extraction plus one-sweep Jacobi and
//! fine-grain hybrid Gauss-Seidel updates.
//!
//! Each kernel exists in two layers: a per-index op implementing
//! [`SweepOp`](crate::core::traits::SweepOp), for callers that bring their
//! own dispatcher, and a checked driver function that validates shapes once
//! and runs the op through [`sweep::run`](crate::sweep::run).

pub mod diagonal;
pub mod gauss_seidel;
pub mod jacobi;

pub use diagonal::{ExtractDiagonalOp, extract_diagonal};
pub use gauss_seidel::{GaussSeidelOp, gauss_seidel_sweep};
pub use jacobi::{JacobiOp, jacobi_sweep};
