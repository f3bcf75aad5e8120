//! Application core: the demo sequence, free of board specifics.
//!
//! [`demo::Demo`] owns the drivers and runs start-up and one loop
//! iteration at a time. Sleeping between iterations is left to the
//! caller. Everything it has to say goes out through the
//! [`ports::EventSink`] port, keeping this layer testable on the host.

pub mod demo;
pub mod events;
pub mod ports;
