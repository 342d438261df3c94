//! Async client for the hosted catalog backend.
//!
//! [`CatalogClient`] wraps `reqwest::Client` with catalog-specific URL
//! construction, bearer authentication, and `{ data: [...] }` envelope
//! unwrapping. Wire types live in [`model`]; consumers convert them into
//! their own domain representation.

pub mod client;
pub mod error;
pub mod model;

pub use client::CatalogClient;
pub use error::Error;
pub use model::ProductRecord;
