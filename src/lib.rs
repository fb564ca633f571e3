//! rowrelax: row-parallel relaxation kernels for sparse linear systems.
//!
//! This crate provides the per-row building blocks of iterative relaxation:
//! diagonal extraction plus one-sweep damped Jacobi and fine-grain "hybrid"
//! Gauss-Seidel updates, over two sparse storage layouts and a strided
//! multi-right-hand-side vector layout. Each kernel is a constant-work
//! per-index op meant to be driven by a parallel-for dispatcher; a minimal
//! sequential/rayon dispatcher is included for convenience and testing.
//! There is no solver loop, convergence control, or matrix assembly here.

pub mod core;
pub mod error;
pub mod kernel;
pub mod matrix;
pub mod sweep;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use crate::core::*;
pub use error::*;
pub use kernel::*;
pub use matrix::*;
pub use sweep::*;
pub use utils::*;
pub use vector::*;
