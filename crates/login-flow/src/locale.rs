//! The closed set of UI languages and the mapping between their codes and labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::EnumIter;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// A UI language, identified by its short tag.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, EnumIter, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Hi,
    Pa,
    Ta,
}

/// One row of the language table.
#[derive(Debug, Eq, PartialEq)]
pub struct LanguageEntry {
    pub code: LanguageCode,
    /// The tag stored under the preference key and used to pick a translation.
    pub tag: &'static str,
    /// The name of the language, written in that language.
    pub label: &'static str,
}

/// Every supported language, in selector order.
pub static LANGUAGES: [LanguageEntry; 4] = [
    LanguageEntry {
        code: LanguageCode::En,
        tag: "en",
        label: "English",
    },
    LanguageEntry {
        code: LanguageCode::Hi,
        tag: "hi",
        label: "हिंदी",
    },
    LanguageEntry {
        code: LanguageCode::Pa,
        tag: "pa",
        label: "ਪੰਜਾਬੀ",
    },
    LanguageEntry {
        code: LanguageCode::Ta,
        tag: "ta",
        label: "தமிழ்",
    },
];

#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unknown language '{0}', expected one of: en, hi, pa, ta")]
pub struct UnknownLanguage(pub String);

impl LanguageCode {
    /// Position of this code in [`LANGUAGES`].
    pub const fn index(self) -> usize {
        match self {
            LanguageCode::En => 0,
            LanguageCode::Hi => 1,
            LanguageCode::Pa => 2,
            LanguageCode::Ta => 3,
        }
    }

    pub fn entry(self) -> &'static LanguageEntry {
        &LANGUAGES[self.index()]
    }

    pub fn as_str(self) -> &'static str {
        self.entry().tag
    }

    pub fn language_identifier(self) -> LanguageIdentifier {
        // Every tag in the table is a bare ISO 639-1 code.
        LanguageIdentifier::from_str(self.as_str()).unwrap_or_default()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LANGUAGES
            .iter()
            .find(|entry| entry.tag.eq_ignore_ascii_case(s.trim()))
            .map(|entry| entry.code)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// The display name of a language.
///
/// Only obtainable from [`LANGUAGES`], so a label always has a matching code.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct LanguageLabel(&'static LanguageEntry);

impl LanguageLabel {
    /// Looks a label up by its display text.
    pub fn from_display(text: &str) -> Option<Self> {
        LANGUAGES
            .iter()
            .find(|entry| entry.label == text.trim())
            .map(LanguageLabel)
    }

    pub fn as_str(self) -> &'static str {
        self.0.label
    }

    /// All labels, in selector order.
    pub fn all() -> impl Iterator<Item = LanguageLabel> {
        LANGUAGES.iter().map(LanguageLabel)
    }
}

impl Default for LanguageLabel {
    fn default() -> Self {
        code_to_label(LanguageCode::default())
    }
}

impl fmt::Debug for LanguageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LanguageLabel").field(&self.0.label).finish()
    }
}

impl fmt::Display for LanguageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn code_to_label(code: LanguageCode) -> LanguageLabel {
    LanguageLabel(code.entry())
}

pub fn label_to_code(label: LanguageLabel) -> LanguageCode {
    label.0.code
}

/// Parses either a tag (`hi`) or a display label (`हिंदी`).
pub fn parse_language(input: &str) -> Result<LanguageCode, UnknownLanguage> {
    input
        .parse::<LanguageCode>()
        .or_else(|err| LanguageLabel::from_display(input).map(label_to_code).ok_or(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator as _;

    #[test]
    fn round_trip_is_identity_for_every_code() {
        for code in LanguageCode::iter() {
            assert_eq!(label_to_code(code_to_label(code)), code);
        }
    }

    #[test]
    fn table_order_matches_code_index() {
        for (index, entry) in LANGUAGES.iter().enumerate() {
            assert_eq!(entry.code.index(), index);
        }
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<_> = LanguageLabel::all().map(LanguageLabel::as_str).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), LANGUAGES.len());
    }

    #[rstest]
    #[case(LanguageCode::En, "English")]
    #[case(LanguageCode::Hi, "हिंदी")]
    #[case(LanguageCode::Pa, "ਪੰਜਾਬੀ")]
    #[case(LanguageCode::Ta, "தமிழ்")]
    fn code_maps_to_label(#[case] code: LanguageCode, #[case] label: &str) {
        assert_eq!(code_to_label(code).as_str(), label);
        assert_eq!(LanguageLabel::from_display(label), Some(code_to_label(code)));
    }

    #[test]
    fn default_is_english() {
        assert_eq!(LanguageCode::default(), LanguageCode::En);
        assert_eq!(LanguageLabel::default().as_str(), "English");
    }

    #[rstest]
    #[case("en", LanguageCode::En)]
    #[case("HI", LanguageCode::Hi)]
    #[case(" pa ", LanguageCode::Pa)]
    #[case("தமிழ்", LanguageCode::Ta)]
    fn parse_language_accepts_tags_and_labels(#[case] input: &str, #[case] expected: LanguageCode) {
        assert_eq!(parse_language(input), Ok(expected));
    }

    #[test]
    fn parse_language_rejects_unknown() {
        assert_eq!(
            parse_language("fr"),
            Err(UnknownLanguage("fr".to_string()))
        );
    }

    #[test]
    fn language_identifier_uses_tag() {
        assert_eq!(LanguageCode::Pa.language_identifier().to_string(), "pa");
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        #[derive(Deserialize, Serialize)]
        struct Wrapper {
            lang: LanguageCode,
        }

        let encoded = toml::to_string(&Wrapper {
            lang: LanguageCode::Ta,
        })
        .unwrap();
        assert_eq!(encoded.trim(), r#"lang = "ta""#);
    }
}
