//! # textlog
//!
//! A pluggable text-formatting logging backend: structured log events
//! (severity, message, source location, metadata) are rendered into
//! human-readable lines and written to a replaceable output sink.
//!
//! ## Features
//!
//! - **Format templates**: `(%date) (%type): (%msg)` style templates,
//!   compiled once per assignment; unknown placeholders pass through
//!   as literal text
//! - **Severity filtering**: ordered levels from function entry/exit
//!   markers up to critical, filtered before any formatting work
//! - **Colorized output**: per-severity ANSI colors, off by default
//! - **Replaceable sinks**: standard output by default, any writer on
//!   request
//! - **Dispatch facade**: per-severity macros with automatic call-site
//!   capture, forwarding to an optional process-wide active logger

pub mod core;
pub mod facade;
pub mod handler;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        DateFormatter, FormatEntry, FormatKey, FormatRecord, FormatTemplate, Level, Logger,
        LoggerError, Metadata, Result, Segment, TerminalColor, TextLogger, TimeZoneSpec,
        DEFAULT_DATE_FORMAT,
    };
    pub use crate::handler::Handler;
    pub use crate::sinks::{ConsoleSink, Sink, StreamSink};
}

pub use crate::core::{
    DateFormatter, FormatEntry, FormatKey, FormatRecord, FormatTemplate, Level, Logger,
    LoggerError, Metadata, Result, Segment, TerminalColor, TextLogger, TimeZoneSpec,
    DEFAULT_DATE_FORMAT,
};
pub use crate::handler::Handler;
pub use crate::sinks::{ConsoleSink, Sink, StreamSink};
