//! Port traits between the demo loop and the outside world.
//!
//! ```text
//!   Demo ──▶ EventSink ──▶ Adapter (console log, test recorder)
//! ```
//!
//! Hardware does not need a port here: every driver is already generic
//! over the `embedded-hal` traits, so tests inject mock buses directly.

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The demo emits structured [`AppEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn emit(&mut self, event: &AppEvent) {
        (**self).emit(event);
    }
}
