//! SDK error types.

/// SDK errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The underlying API call failed.
    #[error(transparent)]
    Api(#[from] circle_api::Error),

    /// A response did not have the expected shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
