//! Core error type.

use thiserror::Error;

/// Errors surfaced by the domain layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Catalog API failure, passed through from the client.
    #[error(transparent)]
    Api(#[from] storelight_api::Error),

    /// The backend capability probe itself failed.
    #[error("backend probe failed: {message}")]
    Probe { message: String },
}
