//! Common types and utilities.

/// SDK error type.
pub use crate::error::Error;

/// SDK result type.
pub type Result<T> = core::result::Result<T, Error>;
