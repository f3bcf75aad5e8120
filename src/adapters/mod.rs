//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter     | Implements | Connects to                 |
//! |-------------|------------|-----------------------------|
//! | `log_sink`  | EventSink  | `log` facade                |
//! | `defmt_log` | log::Log   | defmt over RTT (board only) |

#[cfg(feature = "rp2350")]
pub mod defmt_log;
pub mod log_sink;
