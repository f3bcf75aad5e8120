//! Outbound application events.
//!
//! The [`Demo`](super::demo::Demo) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them: print to the console, record them in a
//! test, and so on.

use crate::drivers::inputs::ButtonLevels;
use crate::drivers::mma8451q::Acceleration;
use crate::error::Error;

/// Structured events emitted by the demo loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// Start-up finished, the loop is about to run.
    Started,

    /// The display did not initialise; the demo carries on without it.
    DisplayInitFailed(Error),

    /// Raw button levels for this iteration (1 = released).
    ButtonsSampled(ButtonLevels),

    /// Switch byte latched onto the shift-register chain.
    SwitchesSampled(u8),

    /// Fresh accelerometer sample.
    Acceleration(Acceleration),

    /// The accelerometer read failed this iteration.
    AccelReadFailed(Error),

    /// A fatal error stopped the demo.
    Halted(Error),
}
