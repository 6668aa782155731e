//! Output sinks for rendered log lines

pub mod console;
pub mod stream;

pub use console::ConsoleSink;
pub use stream::StreamSink;

use crate::core::error::Result;

/// Destination a formatted line is written to.
///
/// Implementations flush every line so output survives abnormal
/// termination; `write_line` blocks until the sink accepts the data.
pub trait Sink: Send + Sync {
    fn write_line(&self, line: &str) -> Result<()>;

    /// Whether this sink is the process's standard output stream. The
    /// generic activation entry point only accepts such sinks.
    fn is_standard_output(&self) -> bool {
        false
    }
}
