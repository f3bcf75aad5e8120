//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the `log`
//! facade. On the board that ends up on RTT through
//! [`defmt_log`](super::defmt_log). Button and acceleration lines keep the
//! exact format of the board's test procedure so existing capture scripts
//! keep working.

use log::{debug, error, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::ButtonsSampled(levels) => {
                let [b1, b2, b3, b4] = levels.0;
                info!("button1: {}, button2: {}, button3: {}, button4: {}", b1, b2, b3, b4);
            }
            AppEvent::SwitchesSampled(byte) => {
                debug!("switches: 0b{:08b}", byte);
            }
            AppEvent::Acceleration(a) => {
                info!("X: {:.3}g, Y: {:.3}g, Z: {:.3}g", a.x, a.y, a.z);
            }
            AppEvent::AccelReadFailed(e) => {
                error!("Failed to read accelerometer data.");
                debug!("  cause: {}", e);
            }
            AppEvent::DisplayInitFailed(e) => {
                error!("Display unavailable: {}", e);
            }
            AppEvent::Halted(e) => {
                error!("HALT | {}", e);
            }
            AppEvent::Started => {
                info!("START | entering main loop");
            }
        }
    }
}
