//! Property-based tests for textlog using proptest

use proptest::prelude::*;
use textlog::{FormatKey, FormatTemplate, Level, Segment};

// ============================================================================
// Template round-trip
// ============================================================================

fn key_strategy() -> impl Strategy<Value = FormatKey> {
    prop_oneof![
        Just(FormatKey::Message),
        Just(FormatKey::Function),
        Just(FormatKey::Line),
        Just(FormatKey::File),
        Just(FormatKey::LogType),
        Just(FormatKey::Date),
    ]
}

// Literal text for generated templates. `(` is excluded so generated
// literals can never combine into something that lexically reads as a
// placeholder; everything else, including multi-byte text, is fair game.
fn literal_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9 .,:;%)_=\u{e9}\u{65e5}\u{672c}\u{1f37a}-]{0,10}")
        .expect("valid literal regex")
}

fn segment_strategy() -> impl Strategy<Value = Segment> {
    prop_oneof![
        literal_strategy().prop_map(Segment::Literal),
        key_strategy().prop_map(Segment::Token),
    ]
}

/// Parsing never splits or merges tokens, so the parsed form of any
/// generated sequence equals its canonical form: empty literals dropped,
/// adjacent literals coalesced.
fn canonicalize(segments: &[Segment]) -> Vec<Segment> {
    let mut canonical: Vec<Segment> = Vec::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) if text.is_empty() => {}
            Segment::Literal(text) => {
                if let Some(Segment::Literal(previous)) = canonical.last_mut() {
                    previous.push_str(text);
                } else {
                    canonical.push(Segment::Literal(text.clone()));
                }
            }
            token => canonical.push(token.clone()),
        }
    }
    canonical
}

proptest! {
    #[test]
    fn test_parse_round_trips_segment_sequences(segments in proptest::collection::vec(segment_strategy(), 0..12)) {
        let template: String = segments.iter().map(Segment::text).collect();
        let parsed = FormatTemplate::parse(&template);
        let canonical = canonicalize(&segments);
        prop_assert_eq!(parsed.segments(), canonical.as_slice());
        prop_assert_eq!(parsed.text(), template);
    }

    /// Parsing is idempotent: re-parsing a parsed template's textual
    /// form reproduces the same segments.
    #[test]
    fn test_parse_is_idempotent(template in "[a-zA-Z0-9 ().%]{0,40}") {
        let first = FormatTemplate::parse(&template);
        let second = FormatTemplate::parse(&first.text());
        prop_assert_eq!(first.segments(), second.segments());
    }
}

// ============================================================================
// Level ordering
// ============================================================================

fn level_strategy() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Entry),
        Just(Level::Exit),
        Just(Level::Debug),
        Just(Level::Verbose),
        Just(Level::Info),
        Just(Level::Notice),
        Just(Level::Warning),
        Just(Level::Error),
        Just(Level::Critical),
    ]
}

proptest! {
    /// A severity passes a threshold exactly when its rank is at least
    /// the threshold's rank.
    #[test]
    fn test_filtering_matches_rank_order(level in level_strategy(), threshold in level_strategy()) {
        prop_assert_eq!(level.is_enabled(threshold), level.rank() >= threshold.rank());
    }

    #[test]
    fn test_comparison_matches_rank(a in level_strategy(), b in level_strategy()) {
        prop_assert_eq!(a < b, a.rank() < b.rank());
        prop_assert_eq!(a == b, a.rank() == b.rank());
    }

    #[test]
    fn test_description_parse_round_trip(level in level_strategy()) {
        let parsed: Level = level.description().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }
}
