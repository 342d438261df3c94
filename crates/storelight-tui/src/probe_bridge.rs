//! Probe bridge — connects the one-shot [`StatusProbe`] to the TUI.
//!
//! Spawned once on startup (the display's "mount"). Runs the probe to
//! completion and forwards the resolved [`storelight_core::BackendStatus`]
//! as an [`Action`].
//! No retries, no polling: a run sees at most one resolution. If the app
//! quits first, the task is cancelled and the late result is discarded.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use storelight_core::{CatalogService, LiveBackend, StatusProbe};

use crate::action::Action;

/// Spawn the status probe and forward its resolution to the action channel.
pub fn spawn_probe_bridge(
    backend: LiveBackend,
    catalog: CatalogService,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let _task = tokio::spawn(async move {
        let probe = StatusProbe::new(backend, catalog);
        let mut status_rx = probe.subscribe();

        tokio::select! {
            () = cancel.cancelled() => {
                debug!("probe bridge cancelled before resolution");
                return;
            }
            _ = probe.run() => {}
        }

        let status = status_rx.borrow_and_update().clone();
        debug!(state = ?status.state, count = status.product_count, "probe resolved");
        let _ = action_tx.send(Action::StatusResolved(status));
    });
}
