//! Error types for the catalog API client.

use thiserror::Error;

/// Errors produced by [`CatalogClient`](crate::CatalogClient).
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure (DNS, TLS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API key was rejected.
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// The catalog API returned an error response.
    #[error("catalog API error: {message}")]
    Api { message: String },

    /// The response body could not be decoded.
    #[error("failed to deserialize response: {message}")]
    Deserialization { message: String },
}
