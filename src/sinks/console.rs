//! Standard-output sink

use super::Sink;
use crate::core::error::Result;
use std::io::Write;

/// Writes to standard output, holding the stream lock for the whole
/// line and flushing before releasing it, so lines interleave whole
/// with other writers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(())
    }

    fn is_standard_output(&self) -> bool {
        true
    }
}
