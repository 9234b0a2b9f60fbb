use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

use crate::Locale;

/// BCP 47 language subtags whose catalog identifier is the legacy JVM code.
const LEGACY_ALIASES: &[(&str, &str)] = &[("he", "iw"), ("id", "in")];

fn to_legacy(subtag: &str) -> &str {
    LEGACY_ALIASES
        .iter()
        .find(|(bcp47, _)| *bcp47 == subtag)
        .map_or(subtag, |&(_, legacy)| legacy)
}

fn to_bcp47(identifier: &str) -> &str {
    LEGACY_ALIASES
        .iter()
        .find(|(_, legacy)| *legacy == identifier)
        .map_or(identifier, |&(bcp47, _)| bcp47)
}

impl Locale {
    /// Resolve a [`LanguageIdentifier`] (e.g. from a Fluent bundle).
    ///
    /// Script subtags are ignored: `zh-Hant-TW` -> `zh-TW`. The standard
    /// `he` and `id` subtags map to Hebrew and Indonesian.
    pub fn from_language_identifier(
        langid: &LanguageIdentifier,
        infer_default_country: bool,
    ) -> Option<Self> {
        let tag = langid.to_string();
        let (language, rest) = tag.split_once('-').unwrap_or((tag.as_str(), ""));
        let tag = match rest {
            "" => to_legacy(language).to_string(),
            _ => format!("{}-{rest}", to_legacy(language)),
        };
        Self::parse_or_none(Some(&tag), infer_default_country)
    }
}

/// Uses the standard `he` and `id` subtags rather than the legacy codes.
impl TryFrom<Locale> for LanguageIdentifier {
    type Error = LanguageIdentifierError;

    fn try_from(locale: Locale) -> Result<Self, Self::Error> {
        let language = to_bcp47(locale.language().identifier());
        match locale.country() {
            Some(country) => format!("{language}-{country}").parse(),
            None => language.parse(),
        }
    }
}
