//! Common types and utilities.

/// CircleCI API error type.
pub use crate::error::Error;

/// CircleCI API result type.
pub type Result<T> = core::result::Result<T, Error>;
