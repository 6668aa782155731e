//! Format template compilation
//!
//! User-supplied templates such as `"[(%date)] (%type): (%msg)"` are
//! compiled into a segment sequence once, when the template is assigned,
//! and walked per log entry. Unrecognized `(%name)` placeholders are not
//! errors: they pass through as literal text, so templates written for a
//! different token vocabulary keep rendering.

use regex::Regex;
use std::sync::OnceLock;

/// Fields a template placeholder can substitute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKey {
    Message,
    Function,
    Line,
    File,
    LogType,
    Date,
}

impl FormatKey {
    /// The exact placeholder spelling, `(%msg)` style.
    pub const fn token(self) -> &'static str {
        match self {
            FormatKey::Message => "(%msg)",
            FormatKey::Function => "(%func)",
            FormatKey::Line => "(%line)",
            FormatKey::File => "(%file)",
            FormatKey::LogType => "(%type)",
            FormatKey::Date => "(%date)",
        }
    }

    fn from_token(token: &str) -> Option<FormatKey> {
        match token {
            "(%msg)" => Some(FormatKey::Message),
            "(%func)" => Some(FormatKey::Function),
            "(%line)" => Some(FormatKey::Line),
            "(%file)" => Some(FormatKey::File),
            "(%type)" => Some(FormatKey::LogType),
            "(%date)" => Some(FormatKey::Date),
            _ => None,
        }
    }
}

/// A parsed template fragment: literal text or a substitution token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Token(FormatKey),
}

impl Segment {
    /// The textual form; concatenating every segment in order
    /// reconstructs the template string.
    pub fn text(&self) -> &str {
        match self {
            Segment::Literal(text) => text,
            Segment::Token(key) => key.token(),
        }
    }
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\(%\w+\)").expect("token pattern is valid"))
}

/// A template compiled once at assignment time and reused for every
/// subsequent entry until reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatTemplate {
    segments: Vec<Segment>,
}

impl FormatTemplate {
    /// Compiles a template string into segments with a single scan over
    /// all `(%word)` occurrences. Never fails: unknown placeholders and
    /// anything that merely resembles one stay literal.
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for found in token_pattern().find_iter(template) {
            if found.start() > cursor {
                segments.push(Segment::Literal(template[cursor..found.start()].to_string()));
            }
            match FormatKey::from_token(found.as_str()) {
                Some(key) => segments.push(Segment::Token(key)),
                None => segments.push(Segment::Literal(found.as_str().to_string())),
            }
            cursor = found.end();
        }
        if cursor < template.len() {
            segments.push(Segment::Literal(template[cursor..].to_string()));
        }

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Reconstructs the template string this sequence was parsed from.
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }
}
