//! Product access with demo fallback.
//!
//! [`CatalogService`] is the one place that decides between live and demo
//! data: a fetch error from the hosted catalog is absorbed here and the
//! demo catalog is served instead. Callers higher up (the status probe)
//! only see a failure when something truly unanticipated happens.

use tracing::{debug, warn};

use storelight_api::CatalogClient;

use crate::demo::demo_products;
use crate::error::CoreError;
use crate::model::Product;

/// Source of the product list. Implemented by [`CatalogService`] in
/// production and by fixed-response stubs in tests.
pub trait ProductSource {
    /// Fetch the full product list.
    fn all_products(&self) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;
}

/// Product access facade over the hosted catalog.
///
/// With a client: fetches live data, falling back to the demo catalog on
/// any API error. Without one: serves the demo catalog directly.
pub struct CatalogService {
    client: Option<CatalogClient>,
}

impl CatalogService {
    /// Service backed by the hosted catalog.
    pub fn live(client: CatalogClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Service that only ever serves the demo catalog.
    pub fn demo_only() -> Self {
        Self { client: None }
    }

    /// Whether a live client is attached.
    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }
}

impl ProductSource for CatalogService {
    async fn all_products(&self) -> Result<Vec<Product>, CoreError> {
        let Some(client) = &self.client else {
            debug!("no catalog client; serving demo catalog");
            return Ok(demo_products());
        };

        match client.list_products().await {
            Ok(records) => {
                debug!(count = records.len(), "fetched live product list");
                Ok(records.into_iter().map(Product::from).collect())
            }
            Err(e) => {
                warn!(error = %e, "catalog fetch failed; falling back to demo catalog");
                Ok(demo_products())
            }
        }
    }
}
