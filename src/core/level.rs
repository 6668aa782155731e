//! Log severity definitions and terminal colors

use crate::core::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ANSI escape sequences used when colorizing rendered lines.
///
/// Colorized output is wrapped in a severity color prefix and reset to
/// the default foreground (`ESC[0;39m`) rather than a full attribute
/// reset, so surrounding terminal state is left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColor {
    Red,
    Yellow,
    /// Default foreground color
    Foreground,
}

impl TerminalColor {
    pub const fn code(self) -> &'static str {
        match self {
            TerminalColor::Red => "\u{001B}[0;31m",
            TerminalColor::Yellow => "\u{001B}[0;33m",
            TerminalColor::Foreground => "\u{001B}[0;39m",
        }
    }
}

/// Log severity with a fixed total order used for threshold filtering.
///
/// `Entry` and `Exit` mark function entry and exit and rank below every
/// diagnostic level, so a logger must opt all the way down to see them.
/// The ordinal is part of the contract: a message is written when its
/// rank is at least the configured threshold's rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Level {
    Entry = 1,
    Exit = 2,
    Debug = 3,
    #[default]
    Verbose = 4,
    Info = 5,
    Notice = 6,
    Warning = 7,
    Error = 8,
    Critical = 9,
}

impl Level {
    /// Numeric rank backing the total order.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Uppercase human label, as rendered by the `(%type)` placeholder.
    pub const fn description(self) -> &'static str {
        match self {
            Level::Entry => "ENTRY",
            Level::Exit => "EXIT",
            Level::Debug => "DEBUG",
            Level::Verbose => "VERBOSE",
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    /// Terminal color for lines at this severity.
    pub const fn color(self) -> TerminalColor {
        match self {
            Level::Warning => TerminalColor::Yellow,
            Level::Error | Level::Critical => TerminalColor::Red,
            _ => TerminalColor::Foreground,
        }
    }

    /// Whether a message at this level passes the given threshold.
    pub const fn is_enabled(self, threshold: Level) -> bool {
        self.rank() >= threshold.rank()
    }

    /// Every level in rank order.
    pub const fn all() -> [Level; 9] {
        [
            Level::Entry,
            Level::Exit,
            Level::Debug,
            Level::Verbose,
            Level::Info,
            Level::Notice,
            Level::Warning,
            Level::Error,
            Level::Critical,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ENTRY" => Ok(Level::Entry),
            "EXIT" => Ok(Level::Exit),
            "DEBUG" => Ok(Level::Debug),
            "VERBOSE" | "TRACE" => Ok(Level::Verbose),
            "INFO" => Ok(Level::Info),
            "NOTICE" => Ok(Level::Notice),
            "WARNING" | "WARN" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "CRITICAL" => Ok(Level::Critical),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}
