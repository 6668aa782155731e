//! Timestamp rendering for log entries
//!
//! Wraps a strftime pattern and a timezone into a reusable formatter.
//! The pattern is parsed once per reconfiguration and the resulting item
//! sequence cached, so rendering a timestamp never re-scans the pattern
//! and never fails.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, Utc};

/// Default pattern: ISO-8601-like with millisecond precision and offset,
/// e.g. `2025-01-08T10:30:45.123+0000`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Where rendered timestamps are anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZoneSpec {
    /// System local timezone
    #[default]
    Local,
    Utc,
    /// Fixed offset from UTC, e.g. `+09:00`
    Fixed(FixedOffset),
}

impl TimeZoneSpec {
    /// Parses `local`, `utc`/`z`, or a fixed offset like `+09:00` or
    /// `-0530`. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<TimeZoneSpec> {
        match s.to_ascii_lowercase().as_str() {
            "local" => return Some(TimeZoneSpec::Local),
            "utc" | "z" => return Some(TimeZoneSpec::Utc),
            _ => {}
        }
        parse_fixed_offset(s).map(TimeZoneSpec::Fixed)
    }
}

fn parse_fixed_offset(s: &str) -> Option<FixedOffset> {
    if !s.is_ascii() {
        return None;
    }
    let sign = match s.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let rest = &s[1..];
    let (hours, minutes) = match rest.len() {
        // +HH:MM
        5 if rest.as_bytes()[2] == b':' => (&rest[..2], &rest[3..]),
        // +HHMM
        4 => (&rest[..2], &rest[2..]),
        _ => return None,
    };
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Formats instants with a configurable pattern and timezone.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    pattern: String,
    time_zone: TimeZoneSpec,
    items: Vec<Item<'static>>,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DateFormatter {
    pub fn new() -> Self {
        let items = StrftimeItems::new(DEFAULT_DATE_FORMAT)
            .parse_to_owned()
            .expect("default date pattern is valid");
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
            time_zone: TimeZoneSpec::default(),
            items,
        }
    }

    /// Swaps the pattern, rebuilding the cached item sequence. Keeps the
    /// previous pattern and returns `false` when the new one fails to
    /// parse, so `format` stays infallible.
    pub fn set_pattern(&mut self, pattern: &str) -> bool {
        match StrftimeItems::new(pattern).parse_to_owned() {
            Ok(items) => {
                self.pattern = pattern.to_string();
                self.items = items;
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_time_zone(&mut self, zone: TimeZoneSpec) {
        self.time_zone = zone;
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn time_zone(&self) -> TimeZoneSpec {
        self.time_zone
    }

    /// Renders an instant in the configured pattern and timezone.
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        match self.time_zone {
            TimeZoneSpec::Local => instant
                .with_timezone(&Local)
                .format_with_items(self.items.iter())
                .to_string(),
            TimeZoneSpec::Utc => instant.format_with_items(self.items.iter()).to_string(),
            TimeZoneSpec::Fixed(offset) => instant
                .with_timezone(&offset)
                .format_with_items(self.items.iter())
                .to_string(),
        }
    }
}
