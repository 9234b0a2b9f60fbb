use std::fmt::{Display, Formatter};
use std::str::FromStr;

use tracing::debug;

use crate::{Country, Language, LocaleError};

/// A language with an optional country, e.g. `en`, `en-US`, `zh-TW`.
///
/// Plain value type: construct it with [`Locale::new`] or parse it from one
/// of the loosely formatted strings platforms hand out (`en_US`, `en-US`,
/// `values-en-rUS`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Locale {
    language: Language,
    country: Option<Country>,
}

impl Locale {
    pub const fn new(language: Language, country: Option<Country>) -> Self {
        Self { language, country }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn country(&self) -> Option<Country> {
        self.country
    }

    /// Parse a locale string, failing if no language can be found.
    ///
    /// Language and country are resolved independently from the `-` or `_`
    /// separated components. Without an explicit country, the language's
    /// default country is used when `infer_default_country` is set.
    pub fn parse(locale: &str, infer_default_country: bool) -> Result<Self, LocaleError> {
        Self::parse_or_none(Some(locale), infer_default_country).ok_or_else(|| {
            debug!(locale = %locale, "Locale::parse: no language found");
            LocaleError::UnresolvableLocale(locale.to_string())
        })
    }

    /// Same as [`Locale::parse`], returning `None` instead of an error.
    pub fn parse_or_none(locale: Option<&str>, infer_default_country: bool) -> Option<Self> {
        let language = Language::from_locale(locale)?;
        let country = Country::from_locale(locale)
            .or_else(|| infer_default_country.then(|| language.default_country()));
        Some(Self::new(language, country))
    }

    /// Fill an absent country with the language's default.
    pub fn with_default_country(self) -> Self {
        Self {
            country: self.country.or(Some(self.language.default_country())),
            ..self
        }
    }

    pub fn without_country(self) -> Self {
        Self {
            country: None,
            ..self
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.country {
            Some(country) => write!(f, "{}-{}", self.language, country),
            None => f.write_str(self.language.identifier()),
        }
    }
}

/// Strict parse without default country inference, so that
/// `locale.to_string().parse()` gives back `locale`.
impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, false)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

impl From<Language> for Locale {
    fn from(language: Language) -> Self {
        Self::new(language, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display() {
        assert_eq!(Locale::new(Language::English, None).to_string(), "en");
        assert_eq!(
            Locale::new(Language::English, Some(Country::UnitedStates)).to_string(),
            "en-US"
        );
        assert_eq!(
            Locale::new(Language::Spanish, Some(Country::LatinAmerica)).to_string(),
            "es-419"
        );
    }

    #[test]
    fn parse_with_and_without_inference() {
        assert_eq!(
            Locale::parse("de", false),
            Ok(Locale::new(Language::German, None))
        );
        assert_eq!(
            Locale::parse("de", true),
            Ok(Locale::new(Language::German, Some(Country::Germany)))
        );
        assert_eq!(
            Locale::parse("de-AT", true),
            Ok(Locale::new(Language::German, Some(Country::Austria)))
        );
    }

    #[test]
    fn separators_are_equivalent() {
        for infer in [false, true] {
            assert_eq!(
                Locale::parse_or_none(Some("en_GB"), infer),
                Locale::parse_or_none(Some("en-GB"), infer)
            );
        }
    }

    #[test]
    fn country_alone_is_not_a_locale() {
        assert_eq!(Locale::parse_or_none(Some("US"), true), None);
        assert_eq!(
            Locale::parse("US", false),
            Err(LocaleError::UnresolvableLocale("US".to_string()))
        );
    }

    #[test]
    fn country_is_found_before_language() {
        assert_eq!(
            Locale::parse("TW-zh", false),
            Ok(Locale::new(Language::Chinese, Some(Country::Taiwan)))
        );
    }

    #[test]
    fn garbage() {
        assert_eq!(Locale::parse_or_none(None, true), None);
        assert_eq!(Locale::parse_or_none(Some(""), true), None);
        assert!(matches!(
            Locale::parse("klingon", true),
            Err(LocaleError::UnresolvableLocale(_))
        ));
    }

    #[test]
    fn from_str_does_not_infer() {
        assert_eq!("fr".parse::<Locale>(), Ok(Locale::new(Language::French, None)));
        assert_eq!(
            "fr-CA".parse::<Locale>(),
            Ok(Locale::new(Language::French, Some(Country::Canada)))
        );
    }

    #[test]
    fn default_country_helpers() {
        let pt = Locale::from(Language::Portuguese);
        assert_eq!(pt.country(), None);
        assert_eq!(pt.with_default_country().country(), Some(Country::Brazil));

        let pt_pt = Locale::new(Language::Portuguese, Some(Country::Portugal));
        assert_eq!(pt_pt.with_default_country(), pt_pt);
        assert_eq!(pt_pt.without_country(), pt);
    }
}
