//! Writer-backed sink for redirected output

use super::Sink;
use crate::core::error::Result;
use parking_lot::Mutex;
use std::io::Write;

/// Wraps any writer (standard error, a file, an in-memory buffer)
/// behind a lock so a logger shared through `Arc` can write from
/// `&self`. Every line is flushed on write.
pub struct StreamSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl StreamSink<std::io::Stderr> {
    /// Sink over the process's standard error stream.
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> Sink for StreamSink<W> {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
