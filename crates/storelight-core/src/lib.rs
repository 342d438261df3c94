//! Domain layer between `storelight-api` and UI consumers.
//!
//! This crate owns the business logic for the storelight workspace:
//!
//! - **[`StatusProbe`]** — One-shot backend status check. Classifies the
//!   outcome of a capability probe plus a catalog fetch into a
//!   [`ConnectivityState`], resolving a [`StatusCell`] exactly once.
//!
//! - **[`CatalogService`]** — Product access with a built-in fallback: when
//!   the hosted catalog errors, it absorbs the failure and serves the local
//!   demo catalog instead.
//!
//! - **Capability seams** — [`BackendProbe`] and [`ProductSource`] traits so
//!   the probe can be exercised against fixed responses without a real
//!   backend.
//!
//! - **Domain model** ([`model`]) — the canonical [`Product`] type, converted
//!   from `storelight-api` wire records in [`convert`].

pub mod backend;
pub mod catalog;
pub mod convert;
pub mod demo;
pub mod error;
pub mod model;
pub mod probe;

// ── Primary re-exports ──────────────────────────────────────────────
pub use backend::{BackendProbe, LiveBackend};
pub use catalog::{CatalogService, ProductSource};
pub use error::CoreError;
pub use model::Product;
pub use probe::{
    BackendStatus, ConnectivityState, FALLBACK_PRODUCT_COUNT, StatusCell, StatusProbe,
    probe_status,
};
