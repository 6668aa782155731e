//! Adapter binding this backend into a structured-logging front end
//!
//! A front end hands each of its named loggers a [`Handler`]; the
//! handler carries its own severity floor and sticky metadata, and
//! funnels accepted events through the owning logger's formatting
//! engine and sink.

use std::borrow::Cow;
use std::sync::Arc;

use crate::core::level::Level;
use crate::core::logger::TextLogger;
use crate::core::metadata::Metadata;

impl TextLogger {
    /// Creates a handler labeled `label` that renders and writes
    /// through this logger.
    pub fn make_handler(self: Arc<Self>, label: impl Into<String>) -> Handler {
        Handler::new(self, label)
    }
}

/// Per-front-end-logger state: a label, a severity floor, and metadata
/// merged into every event.
///
/// The pretty rendering of the handler metadata is recomputed when the
/// metadata is set, so calls with no call-site metadata reuse it
/// without re-rendering.
pub struct Handler {
    logger: Arc<TextLogger>,
    label: String,
    level: Level,
    metadata: Metadata,
    pretty_metadata: Option<String>,
}

impl Handler {
    pub fn new(logger: Arc<TextLogger>, label: impl Into<String>) -> Self {
        Self {
            logger,
            label: label.into(),
            level: Level::Info,
            metadata: Metadata::new(),
            pretty_metadata: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Sets this handler's severity floor, independent of the owning
    /// logger's threshold.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn set_metadata(&mut self, metadata: Metadata) {
        self.pretty_metadata = metadata.prettify();
        self.metadata = metadata;
    }

    pub fn insert_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key, value);
        self.pretty_metadata = self.metadata.prettify();
    }

    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key)
    }

    /// Renders and writes one event.
    ///
    /// Empty or absent call-site metadata reuses the cached handler
    /// rendering; otherwise the handler and call-site maps merge fresh
    /// with call-site values winning per key.
    pub fn log(
        &self,
        level: Level,
        message: &str,
        metadata: Option<&Metadata>,
        file: &str,
        function: &str,
        line: u32,
    ) {
        if !level.is_enabled(self.level) {
            return;
        }

        let pretty = match metadata {
            Some(call_site) if !call_site.is_empty() => {
                self.metadata.merged_with(call_site).prettify()
            }
            _ => self.pretty_metadata.clone(),
        };

        let message: Cow<'_, str> = if self.label.is_empty() {
            Cow::Borrowed(message)
        } else {
            Cow::Owned(format!("{}: {}", self.label, message))
        };

        let rendered =
            self.logger
                .format_entry(level, &message, function, line, file, pretty.as_deref());
        self.logger.write_rendered(&rendered);
    }

    /// Whether this handler would currently accept `level`.
    pub fn is_logging(&self, level: Level) -> bool {
        level.is_enabled(self.level)
    }
}
