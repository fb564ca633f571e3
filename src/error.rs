use thiserror::Error;

// Unified error type for rowrelax.
//
// The per-index kernel ops never raise errors (they may be invoked billions
// of times); everything here comes from the checked constructors and drivers
// that validate inputs once, before dispatch.

#[derive(Error, Debug)]
pub enum RelaxError {
    #[error("no diagonal entry in row {0}")]
    MissingDiagonal(usize),
    #[error("zero pivot at row {0}")]
    ZeroPivot(usize),
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
}
