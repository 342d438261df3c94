//! Wire types for the catalog API.
//!
//! These mirror the JSON the service actually sends. Domain conversion is
//! the consumer's job — nothing here is meant to be user-facing.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Response envelope: every collection endpoint wraps its payload in
/// `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse<T> {
    pub data: Vec<T>,
}

/// In-band error shape: `{ "error": { "code": N, "message": "..." } }`,
/// sometimes returned with HTTP 200.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: Option<ApiErrorInner>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorInner {
    pub code: u16,
    pub message: Option<String>,
}

/// A product as stored in the hosted catalog.
///
/// Remote records carry server-generated identifiers and a creation
/// timestamp; records seeded from demo data may lack both.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_cents: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    pub created_at: Option<DateTime<Utc>>,
}

fn default_in_stock() -> bool {
    true
}
