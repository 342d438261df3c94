// ── Product domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier. Server-generated for remote records; short
    /// fixed slugs (e.g. `demo-1`) for the local demo catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    pub description: String,
    /// Price in cents, to keep arithmetic exact.
    pub price_cents: u32,
    pub category: String,
    pub in_stock: bool,
    /// Set by the backend when the record was created. Absent on demo data.
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Whether this record looks like a genuine remote record: a long
    /// server-generated identifier plus a creation timestamp. Used only
    /// for diagnostic logging — never for classification.
    pub fn looks_remote(&self) -> bool {
        self.id.len() > 10 && self.created_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: &str, created_at: Option<DateTime<Utc>>) -> Product {
        Product {
            id: id.into(),
            name: "Test".into(),
            description: String::new(),
            price_cents: 100,
            category: "test".into(),
            in_stock: true,
            created_at,
        }
    }

    #[test]
    fn long_id_with_timestamp_looks_remote() {
        assert!(product("prd_9f8e7d6c5b4a", Some(Utc::now())).looks_remote());
    }

    #[test]
    fn ten_char_id_is_not_long_enough() {
        // Heuristic is strictly greater than 10.
        assert!(!product("0123456789", Some(Utc::now())).looks_remote());
        assert!(product("0123456789a", Some(Utc::now())).looks_remote());
    }

    #[test]
    fn missing_timestamp_is_not_remote() {
        assert!(!product("prd_9f8e7d6c5b4a", None).looks_remote());
    }
}
