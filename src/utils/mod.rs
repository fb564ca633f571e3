//! Small support utilities.

pub mod shared;

pub use shared::SharedSliceMut;
