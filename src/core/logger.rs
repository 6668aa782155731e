//! The text logger: per-instance configuration, the substitution
//! engine, and the capability trait consumed by the dispatch facade.

use std::borrow::Cow;

use chrono::Utc;

use crate::core::date_format::{DateFormatter, TimeZoneSpec};
use crate::core::formatter::{FormatEntry, FormatRecord};
use crate::core::level::{Level, TerminalColor};
use crate::core::metadata::Metadata;
use crate::core::template::{FormatKey, FormatTemplate, Segment};
use crate::sinks::{ConsoleSink, Sink};

/// Capability implemented by this backend and consumed by the dispatch
/// facade and handler adapters.
pub trait Logger: Send + Sync {
    /// Formats and writes one event. Below-threshold events must not be
    /// formatted or written at all.
    fn log(
        &self,
        level: Level,
        msg: &str,
        function: &str,
        line: u32,
        file: &str,
        metadata: Option<&Metadata>,
    );

    /// Whether an event at `level` would currently be written.
    fn is_logging(&self, level: Level) -> bool;
}

/// Which rendering path an entry takes, resolved once per log call.
enum RenderMode<'a> {
    Custom(&'a dyn FormatEntry),
    Template(&'a FormatTemplate),
    Builtin { detailed: bool },
}

/// A text-formatting logger bound to an output sink.
///
/// Configuration is intended to be set before concurrent use begins;
/// mutating it while other threads log through a shared handle is
/// caller-synchronized.
pub struct TextLogger {
    threshold: Level,
    colored: bool,
    details: bool,
    full_file_path: bool,
    format: Option<String>,
    template: Option<FormatTemplate>,
    formatter: Option<Box<dyn FormatEntry>>,
    date_formatter: DateFormatter,
    sink: Box<dyn Sink>,
}

impl Default for TextLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLogger {
    /// Console logger accepting everything from `Verbose` up.
    pub fn new() -> Self {
        Self::with_sink(Level::default(), Box::new(ConsoleSink::new()))
    }

    /// Console logger filtering below `threshold`.
    pub fn with_threshold(threshold: Level) -> Self {
        Self::with_sink(threshold, Box::new(ConsoleSink::new()))
    }

    /// Logger writing to an arbitrary sink.
    pub fn with_sink(threshold: Level, sink: Box<dyn Sink>) -> Self {
        Self {
            threshold,
            colored: false,
            details: true,
            full_file_path: false,
            format: None,
            template: None,
            formatter: None,
            date_formatter: DateFormatter::new(),
            sink,
        }
    }

    #[must_use]
    pub fn with_colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    #[must_use]
    pub fn with_full_file_path(mut self, full: bool) -> Self {
        self.full_file_path = full;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: &str) -> Self {
        self.set_format(Some(format));
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Box<dyn FormatEntry>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, pattern: &str) -> Self {
        self.set_date_format(Some(pattern));
        self
    }

    #[must_use]
    pub fn with_time_zone(mut self, zone: TimeZoneSpec) -> Self {
        self.set_time_zone(zone);
        self
    }

    pub fn set_threshold(&mut self, threshold: Level) {
        self.threshold = threshold;
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub fn set_colored(&mut self, colored: bool) {
        self.colored = colored;
    }

    pub fn set_details(&mut self, details: bool) {
        self.details = details;
    }

    pub fn set_full_file_path(&mut self, full: bool) {
        self.full_file_path = full;
    }

    /// Assigns or clears the format template. The template is compiled
    /// here, once per assignment, never on the log path.
    pub fn set_format(&mut self, format: Option<&str>) {
        match format {
            Some(text) => {
                self.template = Some(FormatTemplate::parse(text));
                self.format = Some(text.to_string());
            }
            None => {
                self.template = None;
                self.format = None;
            }
        }
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn template(&self) -> Option<&FormatTemplate> {
        self.template.as_ref()
    }

    /// Assigns or clears the custom rendering strategy, which takes
    /// precedence over template and built-in layouts.
    pub fn set_formatter(&mut self, formatter: Option<Box<dyn FormatEntry>>) {
        self.formatter = formatter;
    }

    /// Assigns the date pattern (`None` restores the default). Returns
    /// `false`, keeping the previous pattern, when it fails to parse.
    pub fn set_date_format(&mut self, pattern: Option<&str>) -> bool {
        match pattern {
            Some(pattern) => self.date_formatter.set_pattern(pattern),
            None => {
                let zone = self.date_formatter.time_zone();
                self.date_formatter = DateFormatter::new();
                self.date_formatter.set_time_zone(zone);
                true
            }
        }
    }

    pub fn set_time_zone(&mut self, zone: TimeZoneSpec) {
        self.date_formatter.set_time_zone(zone);
    }

    pub fn date_formatter(&self) -> &DateFormatter {
        &self.date_formatter
    }

    pub(crate) fn sink(&self) -> &dyn Sink {
        self.sink.as_ref()
    }

    /// Writes an already-rendered line, reporting (not propagating) a
    /// failed sink write.
    pub(crate) fn write_rendered(&self, line: &str) {
        if let Err(err) = self.sink.write_line(line) {
            eprintln!("[LOGGER ERROR] sink write failed: {}", err);
        }
    }

    /// Reduces a path to the text after its last `/` separator unless
    /// full-path mode is on; paths with no separator pass unchanged.
    pub fn file_display<'a>(&self, file: &'a str) -> &'a str {
        if self.full_file_path {
            file
        } else {
            file.rsplit('/').next().unwrap_or(file)
        }
    }

    fn render_mode(&self) -> RenderMode<'_> {
        if let Some(ref formatter) = self.formatter {
            RenderMode::Custom(formatter.as_ref())
        } else if let Some(ref template) = self.template {
            RenderMode::Template(template)
        } else {
            RenderMode::Builtin {
                detailed: self.details,
            }
        }
    }

    /// Renders one entry to its final text line. The timestamp is
    /// captured here, at format time, and rendered at most once even if
    /// the template repeats `(%date)`.
    pub fn format_entry(
        &self,
        level: Level,
        msg: &str,
        function: &str,
        line: u32,
        file: &str,
        metadata: Option<&str>,
    ) -> String {
        let file = self.file_display(file);
        let message: Cow<'_, str> = match metadata {
            Some(pretty) if !pretty.is_empty() => Cow::Owned(format!("{} {}", msg, pretty)),
            _ => Cow::Borrowed(msg),
        };

        let rendered = match self.render_mode() {
            RenderMode::Custom(formatter) => {
                let date = self.date_formatter.format(Utc::now());
                formatter.format(&FormatRecord {
                    date: &date,
                    level,
                    file,
                    line,
                    function,
                    message: &message,
                })
            }
            RenderMode::Template(template) => {
                let mut out = String::new();
                let mut date: Option<String> = None;
                for segment in template.segments() {
                    match segment {
                        Segment::Literal(text) => out.push_str(text),
                        Segment::Token(FormatKey::Message) => out.push_str(&message),
                        Segment::Token(FormatKey::Function) => out.push_str(function),
                        Segment::Token(FormatKey::Line) => out.push_str(&line.to_string()),
                        Segment::Token(FormatKey::File) => out.push_str(file),
                        Segment::Token(FormatKey::LogType) => out.push_str(level.description()),
                        Segment::Token(FormatKey::Date) => {
                            let date = date
                                .get_or_insert_with(|| self.date_formatter.format(Utc::now()));
                            out.push_str(date);
                        }
                    }
                }
                out
            }
            RenderMode::Builtin { detailed } => {
                let date = self.date_formatter.format(Utc::now());
                if detailed {
                    format!(
                        "{} [{}] [{}:{} {}] {}",
                        date,
                        level.description(),
                        file,
                        line,
                        function,
                        message
                    )
                } else {
                    format!("{} [{}] {}", date, level.description(), message)
                }
            }
        };

        if self.colored {
            format!(
                "{}{}{}",
                level.color().code(),
                rendered,
                TerminalColor::Foreground.code()
            )
        } else {
            rendered
        }
    }
}

impl Logger for TextLogger {
    fn log(
        &self,
        level: Level,
        msg: &str,
        function: &str,
        line: u32,
        file: &str,
        metadata: Option<&Metadata>,
    ) {
        if !level.is_enabled(self.threshold) {
            return;
        }
        let pretty = metadata.and_then(Metadata::prettify);
        let rendered = self.format_entry(level, msg, function, line, file, pretty.as_deref());
        self.write_rendered(&rendered);
    }

    fn is_logging(&self, level: Level) -> bool {
        level.is_enabled(self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A pattern with no `%` specifier renders as itself, making date
    // output deterministic.
    fn stamped() -> TextLogger {
        let mut logger = TextLogger::new();
        assert!(logger.set_date_format(Some("STAMP")));
        logger
    }

    #[test]
    fn test_template_rendering() {
        let mut logger = stamped();
        logger.set_format(Some("[(%date)] (%type): (%msg) ((%file):(%line) (%func))"));

        let line = logger.format_entry(Level::Info, "hello", "serve", 42, "/srv/app/main.rs", None);
        assert_eq!(line, "[STAMP] INFO: hello (main.rs:42 serve)");
    }

    #[test]
    fn test_repeated_date_token_renders_identically() {
        let mut logger = stamped();
        logger.set_format(Some("(%date)|(%date)"));
        let line = logger.format_entry(Level::Info, "x", "f", 1, "a.rs", None);
        assert_eq!(line, "STAMP|STAMP");
    }

    #[test]
    fn test_unknown_token_stays_literal_in_output() {
        let mut logger = stamped();
        logger.set_format(Some("(%noSoupForYou) (%msg)"));
        let line = logger.format_entry(Level::Info, "order", "f", 1, "a.rs", None);
        assert_eq!(line, "(%noSoupForYou) order");
    }

    #[test]
    fn test_builtin_detailed_layout() {
        let mut logger = stamped();
        logger.set_details(true);
        let line = logger.format_entry(Level::Warning, "careful", "serve", 7, "dir/app.rs", None);
        assert_eq!(line, "STAMP [WARNING] [app.rs:7 serve] careful");
    }

    #[test]
    fn test_builtin_short_layout() {
        let mut logger = stamped();
        logger.set_details(false);
        let line = logger.format_entry(Level::Warning, "careful", "serve", 7, "dir/app.rs", None);
        assert_eq!(line, "STAMP [WARNING] careful");
    }

    #[test]
    fn test_clearing_format_restores_builtin() {
        let mut logger = stamped();
        logger.set_format(Some("(%msg)"));
        assert_eq!(
            logger.format_entry(Level::Info, "m", "f", 1, "a.rs", None),
            "m"
        );
        logger.set_format(None);
        assert_eq!(
            logger.format_entry(Level::Info, "m", "f", 1, "a.rs", None),
            "STAMP [INFO] [a.rs:1 f] m"
        );
        logger.set_details(false);
        assert_eq!(
            logger.format_entry(Level::Info, "m", "f", 1, "a.rs", None),
            "STAMP [INFO] m"
        );
    }

    #[test]
    fn test_custom_formatter_bypasses_template() {
        let mut logger = stamped();
        logger.set_format(Some("(%type)"));
        logger.set_formatter(Some(Box::new(|record: &FormatRecord<'_>| {
            format!("{}!{}", record.message, record.line)
        })));
        let line = logger.format_entry(Level::Error, "boom", "f", 3, "a.rs", None);
        assert_eq!(line, "boom!3");
    }

    #[test]
    fn test_custom_formatter_sees_reduced_file() {
        let mut logger = stamped();
        logger.set_formatter(Some(Box::new(|record: &FormatRecord<'_>| {
            record.file.to_string()
        })));
        assert_eq!(
            logger.format_entry(Level::Info, "m", "f", 1, "/a/b/c.rs", None),
            "c.rs"
        );
        logger.set_full_file_path(true);
        assert_eq!(
            logger.format_entry(Level::Info, "m", "f", 1, "/a/b/c.rs", None),
            "/a/b/c.rs"
        );
    }

    #[test]
    fn test_file_display() {
        let mut logger = TextLogger::new();
        assert_eq!(logger.file_display("/path/to/file.rs"), "file.rs");
        assert_eq!(logger.file_display("file_with_no_separator"), "file_with_no_separator");
        assert_eq!(logger.file_display("trailing/"), "");
        logger.set_full_file_path(true);
        assert_eq!(logger.file_display("/path/to/file.rs"), "/path/to/file.rs");
    }

    #[test]
    fn test_colorization_wraps_whole_line() {
        let mut logger = stamped();
        logger.set_format(Some("(%msg)"));
        logger.set_colored(true);
        let line = logger.format_entry(Level::Warning, "careful", "f", 1, "a.rs", None);
        assert_eq!(line, "\u{001B}[0;33mcareful\u{001B}[0;39m");
        let line = logger.format_entry(Level::Critical, "down", "f", 1, "a.rs", None);
        assert_eq!(line, "\u{001B}[0;31mdown\u{001B}[0;39m");
    }

    #[test]
    fn test_uncolored_output_identical_across_severities() {
        let mut logger = stamped();
        logger.set_format(Some("(%msg) @(%file)"));
        let warning = logger.format_entry(Level::Warning, "m", "f", 1, "a.rs", None);
        let info = logger.format_entry(Level::Info, "m", "f", 1, "a.rs", None);
        let error = logger.format_entry(Level::Error, "m", "f", 1, "a.rs", None);
        assert_eq!(warning, info);
        assert_eq!(info, error);
    }

    #[test]
    fn test_colored_type_token_differs_across_severities() {
        let mut logger = stamped();
        logger.set_format(Some("(%type): (%msg)"));
        logger.set_colored(true);
        let warning = logger.format_entry(Level::Warning, "m", "f", 1, "a.rs", None);
        let error = logger.format_entry(Level::Error, "m", "f", 1, "a.rs", None);
        assert_ne!(warning, error);
    }

    #[test]
    fn test_metadata_appended_to_message() {
        let mut logger = stamped();
        logger.set_format(Some("(%msg)"));
        let line = logger.format_entry(Level::Info, "request done", "f", 1, "a.rs", Some("status=200"));
        assert_eq!(line, "request done status=200");
    }

    #[test]
    fn test_is_logging_tracks_threshold() {
        let logger = TextLogger::with_threshold(Level::Warning);
        assert!(logger.is_logging(Level::Warning));
        assert!(logger.is_logging(Level::Critical));
        assert!(!logger.is_logging(Level::Info));
        assert!(!logger.is_logging(Level::Entry));
    }
}
