use chrono::NaiveDate;

use super::content_type::{type_label, DEFAULT_CONTENT_TYPE};
use super::country::country_name;
use super::score::parse_score;
use super::severity::{level_color, DEFAULT_LEVEL};

/// Country name shown when no country code was supplied.
pub const GLOBAL_COUNTRY_NAME: &str = "Global";

/// Raw story parameters as they arrive on the query string.
///
/// Empty values are kept here and treated as absent during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryParams {
    /// `c`: country code, any case
    pub country: Option<String>,
    /// `t`: content type key
    pub content_type: Option<String>,
    /// `s`: score as a string
    pub score: Option<String>,
    /// `l`: severity level key
    pub level: Option<String>,
}

impl StoryParams {
    /// Collect parameters from decoded query pairs.
    ///
    /// The first occurrence of a key wins; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "c" => &mut params.country,
                "t" => &mut params.content_type,
                "s" => &mut params.score,
                "l" => &mut params.level,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

/// A story with every parameter resolved to its display value.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    /// Upper-cased country code; empty when none was given
    pub country_code: String,
    pub country_name: String,
    pub type_label: &'static str,
    /// Level key as supplied (or the default), shown upper-cased in the badge
    pub level: String,
    pub level_color: &'static str,
    pub score: Option<i64>,
    /// Date printed in the footer
    pub date: NaiveDate,
}

impl Story {
    /// Resolve raw parameters against the static tables.
    ///
    /// Never fails: every missing or unknown value falls back to a default.
    pub fn resolve(params: &StoryParams, date: NaiveDate) -> Self {
        let country_code = non_empty(params.country.as_deref())
            .map(|code| replace_xml_illegal(&code.to_uppercase()))
            .unwrap_or_default();

        let display_name = match country_name(&country_code) {
            Some(name) => name.to_string(),
            None if !country_code.is_empty() => country_code.clone(),
            None => GLOBAL_COUNTRY_NAME.to_string(),
        };

        let content_type =
            non_empty(params.content_type.as_deref()).unwrap_or(DEFAULT_CONTENT_TYPE);
        let level = non_empty(params.level.as_deref()).unwrap_or(DEFAULT_LEVEL);

        Self {
            country_name: display_name,
            country_code,
            type_label: type_label(content_type),
            level: replace_xml_illegal(level),
            level_color: level_color(level),
            score: parse_score(params.score.as_deref()),
            date,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Replace characters XML 1.0 forbids with U+FFFD.
///
/// Forbidden are C0 controls other than tab, newline and carriage return,
/// plus U+FFFE and U+FFFF.
fn replace_xml_illegal(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\t' | '\n' | '\r' => c,
            '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => char::REPLACEMENT_CHARACTER,
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::severity::FALLBACK_LEVEL_COLOR;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn params(pairs: &[(&str, &str)]) -> StoryParams {
        StoryParams::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_from_pairs_first_occurrence_wins() {
        let p = params(&[("c", "UA"), ("c", "RU"), ("x", "ignored")]);
        assert_eq!(p.country.as_deref(), Some("UA"));
        assert_eq!(p.content_type, None);
    }

    #[test]
    fn test_resolve_defaults() {
        let story = Story::resolve(&StoryParams::default(), date());

        assert_eq!(story.country_code, "");
        assert_eq!(story.country_name, "Global");
        assert_eq!(story.type_label, "Intelligence Brief");
        assert_eq!(story.level, "elevated");
        assert_eq!(story.level_color, "#eab308");
        assert_eq!(story.score, None);
    }

    #[test]
    fn test_resolve_full_story() {
        let story = Story::resolve(
            &params(&[("c", "ua"), ("t", "crisisalert"), ("s", "78"), ("l", "high")]),
            date(),
        );

        assert_eq!(story.country_code, "UA");
        assert_eq!(story.country_name, "Ukraine");
        assert_eq!(story.type_label, "Crisis Alert");
        assert_eq!(story.level, "high");
        assert_eq!(story.level_color, "#f97316");
        assert_eq!(story.score, Some(78));
    }

    #[test]
    fn test_resolve_unmapped_country_uses_code() {
        let story = Story::resolve(&params(&[("c", "xy")]), date());
        assert_eq!(story.country_code, "XY");
        assert_eq!(story.country_name, "XY");
    }

    #[test]
    fn test_resolve_empty_values_use_defaults() {
        let story = Story::resolve(
            &params(&[("c", ""), ("t", ""), ("s", ""), ("l", "")]),
            date(),
        );
        assert_eq!(story.country_name, "Global");
        assert_eq!(story.type_label, "Intelligence Brief");
        assert_eq!(story.level, "elevated");
        assert_eq!(story.score, None);
    }

    #[test]
    fn test_resolve_unknown_level_keeps_text() {
        let story = Story::resolve(&params(&[("l", "extreme")]), date());
        assert_eq!(story.level, "extreme");
        assert_eq!(story.level_color, FALLBACK_LEVEL_COLOR);
    }

    #[test]
    fn test_resolve_replaces_xml_illegal_characters() {
        let story = Story::resolve(
            &params(&[("c", "a\u{0}\u{1}"), ("l", "hi\u{FFFE}gh\u{1F}"), ("s", "1")]),
            date(),
        );
        assert_eq!(story.country_code, "A\u{FFFD}\u{FFFD}");
        assert_eq!(story.country_name, "A\u{FFFD}\u{FFFD}");
        assert_eq!(story.level, "hi\u{FFFD}gh\u{FFFD}");
    }

    #[test]
    fn test_replace_xml_illegal_keeps_allowed_whitespace() {
        assert_eq!(replace_xml_illegal("a\tb\nc\rd"), "a\tb\nc\rd");
        assert_eq!(replace_xml_illegal("\u{B}\u{C}\u{FFFF}"), "\u{FFFD}\u{FFFD}\u{FFFD}");
        assert_eq!(replace_xml_illegal("Ünïcödé 🔥"), "Ünïcödé 🔥");
    }

    #[test]
    fn test_resolve_unparsable_score_is_absent() {
        let story = Story::resolve(&params(&[("s", "lots")]), date());
        assert_eq!(story.score, None);
    }
}
