//! Actions dispatched through the app loop.

use storelight_core::BackendStatus;

/// Everything the app loop can be asked to do.
#[derive(Debug, Clone)]
pub enum Action {
    /// Exit the application.
    Quit,
    /// Terminal was resized to (cols, rows).
    Resize(u16, u16),
    /// Periodic tick (animation).
    Tick,
    /// Redraw the frame.
    Render,
    /// The one-shot status probe resolved.
    StatusResolved(BackendStatus),
}
