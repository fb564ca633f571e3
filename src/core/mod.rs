//! Core traits shared by every kernel.

pub mod traits;

pub use traits::{RowView, SweepOp};
