//! Locale identifiers supported by the converter.

use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// Language locales with a configured lexicon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Polish
    #[default]
    #[serde(rename = "pl-PL")]
    Polish,
    /// US English
    #[serde(rename = "en-US")]
    English,
    /// German
    #[serde(rename = "de-DE")]
    German,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Self; 3] = [Self::Polish, Self::English, Self::German];

    /// Returns the BCP 47 tag for this locale.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Polish => "pl-PL",
            Self::English => "en-US",
            Self::German => "de-DE",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Locale {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('_', "-").to_lowercase().as_str() {
            "pl-pl" => Ok(Self::Polish),
            "en-us" => Ok(Self::English),
            "de-de" => Ok(Self::German),
            _ => Err(ConversionError::UnsupportedLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn test_default_locale_is_polish() {
        assert_eq!(Locale::default(), Locale::Polish);
    }

    #[test]
    fn test_locale_display() {
        assert_eq!(Locale::Polish.to_string(), "pl-PL");
        assert_eq!(Locale::English.to_string(), "en-US");
        assert_eq!(Locale::German.to_string(), "de-DE");
    }

    #[rstest]
    #[case("pl-PL", Locale::Polish)]
    #[case("pl_PL", Locale::Polish)]
    #[case("PL-pl", Locale::Polish)]
    #[case("en-US", Locale::English)]
    #[case("en-us", Locale::English)]
    #[case("de-DE", Locale::German)]
    fn test_locale_from_str(#[case] tag: &str, #[case] expected: Locale) {
        assert_eq!(Locale::from_str(tag).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("pl")]
    #[case("en-GB")]
    #[case("fr-FR")]
    fn test_unknown_locale_rejected(#[case] tag: &str) {
        assert_eq!(
            Locale::from_str(tag),
            Err(ConversionError::UnsupportedLocale(tag.to_string()))
        );
    }

    #[test]
    fn test_locale_serde_uses_tags() {
        assert_eq!(
            serde_json::to_string(&Locale::German).unwrap(),
            "\"de-DE\""
        );
        let parsed: Locale = serde_json::from_str("\"en-US\"").unwrap();
        assert_eq!(parsed, Locale::English);
    }

    #[test]
    fn test_tags_round_trip_through_from_str() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_str(locale.tag()).unwrap(), locale);
        }
    }
}
