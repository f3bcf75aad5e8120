//! `log` → `defmt` bridge.
//!
//! The library logs through the `log` facade so it stays testable on the
//! host. On the board this backend formats each record into a fixed
//! buffer and hands the text to defmt, which ships it over RTT.

use core::fmt::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Longest rendered record; the rest of an overlong line is dropped.
const LINE_CAPACITY: usize = 128;

struct DefmtLogger;

static LOGGER: DefmtLogger = DefmtLogger;

impl Log for DefmtLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut line: heapless::String<LINE_CAPACITY> = heapless::String::new();
        // A full buffer ends the write early; what fitted is still sent.
        let _ = write!(line, "{}", record.args());
        let text = line.as_str();
        match record.level() {
            Level::Error => defmt::error!("{=str}", text),
            Level::Warn => defmt::warn!("{=str}", text),
            Level::Info => defmt::info!("{=str}", text),
            Level::Debug => defmt::debug!("{=str}", text),
            Level::Trace => defmt::trace!("{=str}", text),
        }
    }

    fn flush(&self) {}
}

/// Install the bridge. Safe to call more than once; later calls are no-ops.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
