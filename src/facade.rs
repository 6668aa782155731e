//! Process-wide dispatch: an optional active logger and per-severity
//! entry points
//!
//! The core never touches this state; loggers are explicit handles
//! everywhere else. This module is the application-boundary convenience
//! layer: free functions forward to whichever logger is currently
//! active and degrade to no-ops when none is. The reference swap itself
//! is lock-guarded; reassigning it concurrently with logging is
//! last-write-wins and left to the caller to coordinate.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::core::level::Level;
use crate::core::logger::{Logger, TextLogger};
use crate::core::metadata::Metadata;
use crate::sinks::Sink;

static ACTIVE: RwLock<Option<Arc<dyn Logger>>> = RwLock::new(None);

/// Constructs a default console logger filtering below `threshold` and
/// installs it as the active logger. Console output is flushed per line
/// from that point on, so it interleaves immediately and in order with
/// other writers.
pub fn activate(threshold: Level) {
    install(Arc::new(TextLogger::with_threshold(threshold)));
}

/// Generic activation for a preconfigured logger.
///
/// Refuses a logger bound to anything but the standard-output sink:
/// prints a usage diagnostic to standard error and leaves the currently
/// active logger (or the lack of one) untouched. Redirected loggers go
/// through [`activate_with_sink`].
pub fn activate_logger(logger: TextLogger) {
    if !logger.sink().is_standard_output() {
        eprintln!(
            "textlog: activate_logger expects the standard-output sink; \
             use activate_with_sink for redirected output. Logger not installed."
        );
        return;
    }
    install(Arc::new(logger));
}

/// Constructs a logger bound to the given sink and installs it.
pub fn activate_with_sink<S: Sink + 'static>(threshold: Level, sink: S) {
    install(Arc::new(TextLogger::with_sink(threshold, Box::new(sink))));
}

/// Installs an already-built logger handle.
pub fn install(logger: Arc<dyn Logger>) {
    *ACTIVE.write() = Some(logger);
}

/// Clears the active logger; subsequent facade calls become no-ops.
pub fn deactivate() {
    *ACTIVE.write() = None;
}

fn active() -> Option<Arc<dyn Logger>> {
    ACTIVE.read().clone()
}

/// Forwards one event to the active logger; no-op when none is active.
pub fn log(level: Level, msg: &str, function: &str, line: u32, file: &str) {
    if let Some(logger) = active() {
        logger.log(level, msg, function, line, file, None);
    }
}

/// As [`log`], with call-site metadata attached.
pub fn log_with_metadata(
    level: Level,
    msg: &str,
    function: &str,
    line: u32,
    file: &str,
    metadata: &Metadata,
) {
    if let Some(logger) = active() {
        logger.log(level, msg, function, line, file, Some(metadata));
    }
}

/// Whether the active logger would accept `level`; `false` when no
/// logger is active.
pub fn is_logging(level: Level) -> bool {
    active().is_some_and(|logger| logger.is_logging(level))
}

pub fn entry(msg: &str, function: &str, line: u32, file: &str) {
    log(Level::Entry, msg, function, line, file);
}

pub fn exit(msg: &str, function: &str, line: u32, file: &str) {
    log(Level::Exit, msg, function, line, file);
}

pub fn debug(msg: &str, function: &str, line: u32, file: &str) {
    log(Level::Debug, msg, function, line, file);
}

pub fn verbose(msg: &str, function: &str, line: u32, file: &str) {
    log(Level::Verbose, msg, function, line, file);
}

pub fn info(msg: &str, function: &str, line: u32, file: &str) {
    log(Level::Info, msg, function, line, file);
}

pub fn notice(msg: &str, function: &str, line: u32, file: &str) {
    log(Level::Notice, msg, function, line, file);
}

pub fn warning(msg: &str, function: &str, line: u32, file: &str) {
    log(Level::Warning, msg, function, line, file);
}

pub fn error(msg: &str, function: &str, line: u32, file: &str) {
    log(Level::Error, msg, function, line, file);
}

pub fn critical(msg: &str, function: &str, line: u32, file: &str) {
    log(Level::Critical, msg, function, line, file);
}
