//! Backend status probe — one-shot connectivity classification.
//!
//! Runs exactly once per invocation: asks the [`BackendProbe`] capability
//! questions, fetches the product list, and classifies the outcome into a
//! [`ConnectivityState`]. Every failure is contained here; callers only
//! ever see a resolved [`BackendStatus`].

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::backend::BackendProbe;
use crate::catalog::ProductSource;
use crate::error::CoreError;

/// Product count shown when the probe fails outside the anticipated
/// branches. Matches the size of the demo catalog.
pub const FALLBACK_PRODUCT_COUNT: usize = 6;

// ── Status model ────────────────────────────────────────────────────

/// Connectivity classification for the hosted backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityState {
    /// Probe has not resolved yet.
    #[default]
    Checking,
    /// Backend available and the fetch succeeded.
    Connected,
    /// Backend not configured; serving demo data.
    Demo,
    /// Backend configured but unreachable or failing; serving demo data.
    Error,
}

/// Resolved probe outcome: classification plus the last known product count.
/// The two are always set together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendStatus {
    pub state: ConnectivityState,
    pub product_count: usize,
}

impl BackendStatus {
    /// The initial, unresolved status.
    pub fn checking() -> Self {
        Self {
            state: ConnectivityState::Checking,
            product_count: 0,
        }
    }

    pub fn new(state: ConnectivityState, product_count: usize) -> Self {
        Self {
            state,
            product_count,
        }
    }

    /// Whether the probe has reached a terminal state.
    pub fn is_resolved(&self) -> bool {
        self.state != ConnectivityState::Checking
    }
}

impl Default for BackendStatus {
    fn default() -> Self {
        Self::checking()
    }
}

// ── Classification ──────────────────────────────────────────────────

/// Run the probe sequence once and classify the outcome.
///
/// Never fails: anything the branches below don't anticipate collapses to
/// [`ConnectivityState::Error`] with [`FALLBACK_PRODUCT_COUNT`].
pub async fn probe_status<B, S>(backend: &B, catalog: &S) -> BackendStatus
where
    B: BackendProbe,
    S: ProductSource,
{
    match classify(backend, catalog).await {
        Ok(status) => status,
        Err(e) => {
            warn!(error = %e, "status probe failed unexpectedly");
            BackendStatus::new(ConnectivityState::Error, FALLBACK_PRODUCT_COUNT)
        }
    }
}

/// The anticipated branches. Each arm is terminal. An `Err` from here is
/// an unanticipated failure and is mapped by [`probe_status`].
async fn classify<B, S>(backend: &B, catalog: &S) -> Result<BackendStatus, CoreError>
where
    B: BackendProbe,
    S: ProductSource,
{
    debug!("checking backend status");

    if backend.is_available()? {
        match catalog.all_products().await {
            Ok(products) => {
                let count = products.len();
                // Remote-record heuristic: diagnostic only. Both branches
                // classify as Connected.
                if products.iter().any(|p| p.looks_remote()) {
                    debug!(count, "connected; catalog serving remote records");
                } else {
                    debug!(count, "connected; catalog serving seeded demo records");
                }
                Ok(BackendStatus::new(ConnectivityState::Connected, count))
            }
            Err(e) => {
                warn!(error = %e, "catalog fetch failed with backend available");
                // Second fetch is expected to succeed via the service's
                // demo fallback. If it fails too, the outer handler takes
                // over.
                let products = catalog.all_products().await?;
                Ok(BackendStatus::new(
                    ConnectivityState::Error,
                    products.len(),
                ))
            }
        }
    } else if backend.is_configured() {
        warn!("backend configured but not available");
        let products = catalog.all_products().await?;
        Ok(BackendStatus::new(
            ConnectivityState::Error,
            products.len(),
        ))
    } else {
        debug!("backend not configured; demo mode");
        let products = catalog.all_products().await?;
        Ok(BackendStatus::new(ConnectivityState::Demo, products.len()))
    }
}

// ── State holder ────────────────────────────────────────────────────

/// Explicit status holder, resolved at most once per probe run.
///
/// Built on `tokio::sync::watch` so consumers observe the single
/// `Checking → terminal` transition. Late resolutions after all receivers
/// are gone are silently discarded.
pub struct StatusCell {
    tx: watch::Sender<BackendStatus>,
}

impl StatusCell {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(BackendStatus::checking());
        Self { tx }
    }

    /// Subscribe to status updates. The receiver starts at `Checking`
    /// (or the terminal value, if already resolved).
    pub fn subscribe(&self) -> watch::Receiver<BackendStatus> {
        self.tx.subscribe()
    }

    /// Snapshot of the current status.
    pub fn current(&self) -> BackendStatus {
        self.tx.borrow().clone()
    }

    /// Resolve the cell. Only the first terminal value sticks; resolving
    /// again, or with an unresolved status, is a no-op. Returns whether
    /// the value was accepted.
    pub fn resolve(&self, status: BackendStatus) -> bool {
        if !status.is_resolved() {
            return false;
        }
        self.tx.send_if_modified(|current| {
            if current.is_resolved() {
                false
            } else {
                *current = status;
                true
            }
        })
    }
}

impl Default for StatusCell {
    fn default() -> Self {
        Self::new()
    }
}

// ── StatusProbe ─────────────────────────────────────────────────────

/// One-shot probe bound to a capability probe and a product source,
/// publishing its result through a [`StatusCell`].
pub struct StatusProbe<B, S> {
    backend: B,
    catalog: S,
    cell: StatusCell,
}

impl<B, S> StatusProbe<B, S>
where
    B: BackendProbe,
    S: ProductSource,
{
    pub fn new(backend: B, catalog: S) -> Self {
        Self {
            backend,
            catalog,
            cell: StatusCell::new(),
        }
    }

    /// Subscribe to the probe's status cell.
    pub fn subscribe(&self) -> watch::Receiver<BackendStatus> {
        self.cell.subscribe()
    }

    /// Run the probe once, resolve the cell, and return the outcome.
    pub async fn run(&self) -> BackendStatus {
        let status = probe_status(&self.backend, &self.catalog).await;
        self.cell.resolve(status.clone());
        status
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Product;

    // ── Stubs ───────────────────────────────────────────────────────

    struct StubBackend {
        configured: bool,
        /// `None` makes `is_available` fail, exercising the outer handler.
        available: Option<bool>,
    }

    impl BackendProbe for StubBackend {
        fn is_configured(&self) -> bool {
            self.configured
        }

        fn is_available(&self) -> Result<bool, CoreError> {
            self.available.ok_or_else(|| CoreError::Probe {
                message: "sdk singleton poisoned".into(),
            })
        }
    }

    /// Scripted product source: pops one response per call.
    struct StubCatalog {
        responses: Mutex<VecDeque<Result<Vec<Product>, CoreError>>>,
    }

    impl StubCatalog {
        fn new(responses: Vec<Result<Vec<Product>, CoreError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().collect()),
            }
        }

        fn remaining(&self) -> usize {
            self.responses.lock().unwrap().len()
        }
    }

    impl ProductSource for StubCatalog {
        async fn all_products(&self) -> Result<Vec<Product>, CoreError> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| {
                    Err(CoreError::Probe {
                        message: "unexpected extra fetch".into(),
                    })
                })
        }
    }

    fn fetch_error() -> CoreError {
        CoreError::Probe {
            message: "fetch failed".into(),
        }
    }

    fn remote_products(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| Product {
                id: format!("prd_9f8e7d6c5b4a32{i:02}"),
                name: format!("Product {i}"),
                description: String::new(),
                price_cents: 1000,
                category: "test".into(),
                in_stock: true,
                created_at: Some(Utc::now()),
            })
            .collect()
    }

    fn demo_looking_products(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| Product {
                id: format!("demo-{i}"),
                name: format!("Demo {i}"),
                description: String::new(),
                price_cents: 1000,
                category: "test".into(),
                in_stock: true,
                created_at: None,
            })
            .collect()
    }

    // ── Classification ──────────────────────────────────────────────

    #[tokio::test]
    async fn available_with_remote_products_is_connected() {
        let backend = StubBackend {
            configured: true,
            available: Some(true),
        };
        let catalog = StubCatalog::new(vec![Ok(remote_products(6))]);

        let status = probe_status(&backend, &catalog).await;

        assert_eq!(status, BackendStatus::new(ConnectivityState::Connected, 6));
        assert_eq!(catalog.remaining(), 0);
    }

    #[tokio::test]
    async fn heuristic_does_not_change_outcome() {
        // Seeded demo-looking records with the backend available still
        // classify as Connected.
        let backend = StubBackend {
            configured: true,
            available: Some(true),
        };
        let catalog = StubCatalog::new(vec![Ok(demo_looking_products(3))]);

        let status = probe_status(&backend, &catalog).await;

        assert_eq!(status, BackendStatus::new(ConnectivityState::Connected, 3));
    }

    #[tokio::test]
    async fn available_with_empty_list_is_connected() {
        let backend = StubBackend {
            configured: true,
            available: Some(true),
        };
        let catalog = StubCatalog::new(vec![Ok(vec![])]);

        let status = probe_status(&backend, &catalog).await;

        assert_eq!(status, BackendStatus::new(ConnectivityState::Connected, 0));
    }

    #[tokio::test]
    async fn fetch_failure_refetches_and_reports_error() {
        let backend = StubBackend {
            configured: true,
            available: Some(true),
        };
        let catalog = StubCatalog::new(vec![Err(fetch_error()), Ok(demo_looking_products(6))]);

        let status = probe_status(&backend, &catalog).await;

        assert_eq!(status, BackendStatus::new(ConnectivityState::Error, 6));
        assert_eq!(catalog.remaining(), 0);
    }

    #[tokio::test]
    async fn double_fetch_failure_uses_fallback_count() {
        let backend = StubBackend {
            configured: true,
            available: Some(true),
        };
        let catalog = StubCatalog::new(vec![Err(fetch_error()), Err(fetch_error())]);

        let status = probe_status(&backend, &catalog).await;

        assert_eq!(
            status,
            BackendStatus::new(ConnectivityState::Error, FALLBACK_PRODUCT_COUNT)
        );
    }

    #[tokio::test]
    async fn probe_failure_before_any_fetch_uses_fallback_count() {
        let backend = StubBackend {
            configured: true,
            available: None,
        };
        let catalog = StubCatalog::new(vec![]);

        let status = probe_status(&backend, &catalog).await;

        assert_eq!(
            status,
            BackendStatus::new(ConnectivityState::Error, FALLBACK_PRODUCT_COUNT)
        );
        assert_eq!(catalog.remaining(), 0);
    }

    #[tokio::test]
    async fn configured_but_unavailable_is_error() {
        let backend = StubBackend {
            configured: true,
            available: Some(false),
        };
        let catalog = StubCatalog::new(vec![Ok(demo_looking_products(6))]);

        let status = probe_status(&backend, &catalog).await;

        assert_eq!(status, BackendStatus::new(ConnectivityState::Error, 6));
        assert_eq!(catalog.remaining(), 0, "exactly one fetch expected");
    }

    #[tokio::test]
    async fn unconfigured_is_demo() {
        let backend = StubBackend {
            configured: false,
            available: Some(false),
        };
        let catalog = StubCatalog::new(vec![Ok(demo_looking_products(6))]);

        let status = probe_status(&backend, &catalog).await;

        assert_eq!(status, BackendStatus::new(ConnectivityState::Demo, 6));
    }

    #[tokio::test]
    async fn demo_branch_fetch_failure_uses_fallback_count() {
        let backend = StubBackend {
            configured: false,
            available: Some(false),
        };
        let catalog = StubCatalog::new(vec![Err(fetch_error())]);

        let status = probe_status(&backend, &catalog).await;

        assert_eq!(
            status,
            BackendStatus::new(ConnectivityState::Error, FALLBACK_PRODUCT_COUNT)
        );
    }

    // ── StatusCell ──────────────────────────────────────────────────

    #[test]
    fn cell_starts_checking() {
        let cell = StatusCell::new();
        assert_eq!(cell.current(), BackendStatus::checking());
        assert!(!cell.current().is_resolved());
    }

    #[test]
    fn cell_resolves_once() {
        let cell = StatusCell::new();
        let first = BackendStatus::new(ConnectivityState::Connected, 6);
        let second = BackendStatus::new(ConnectivityState::Error, 0);

        assert!(cell.resolve(first.clone()));
        assert!(!cell.resolve(second));
        assert_eq!(cell.current(), first);
    }

    #[test]
    fn cell_rejects_unresolved_value() {
        let cell = StatusCell::new();
        assert!(!cell.resolve(BackendStatus::checking()));
        assert_eq!(cell.current(), BackendStatus::checking());
    }

    #[test]
    fn cell_notifies_subscriber() {
        let cell = StatusCell::new();
        let mut rx = cell.subscribe();
        assert_eq!(*rx.borrow_and_update(), BackendStatus::checking());

        cell.resolve(BackendStatus::new(ConnectivityState::Demo, 6));

        assert!(rx.has_changed().unwrap());
        assert_eq!(
            *rx.borrow_and_update(),
            BackendStatus::new(ConnectivityState::Demo, 6)
        );
    }

    // ── StatusProbe ─────────────────────────────────────────────────

    #[tokio::test]
    async fn probe_run_resolves_cell() {
        let probe = StatusProbe::new(
            StubBackend {
                configured: false,
                available: Some(false),
            },
            StubCatalog::new(vec![Ok(demo_looking_products(6))]),
        );
        let mut rx = probe.subscribe();

        let status = probe.run().await;

        assert_eq!(status, BackendStatus::new(ConnectivityState::Demo, 6));
        assert_eq!(*rx.borrow_and_update(), status);
    }
}
