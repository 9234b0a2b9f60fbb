//! Language catalog.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::split::locale_split;
use crate::{Country, LocaleError};

macro_rules! languages {
    ($($variant:ident => ($id:literal, $name:literal, $country:ident)),* $(,)?) => {
        /// A language, identified by its lowercase ISO 639 code.
        ///
        /// Hebrew and Indonesian use the legacy codes `iw` and `in`, matching
        /// what Android and the JVM report.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(try_from = "String", into = "String")
        )]
        pub enum Language {
            $($variant,)*
        }

        impl Language {
            /// Identifier as it appears in locale strings (`en`, `iw`).
            pub fn identifier(self) -> &'static str {
                match self {
                    $(Self::$variant => $id,)*
                }
            }

            /// English name.
            pub fn display_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Country assumed when a locale names only the language.
            pub fn default_country(self) -> Country {
                match self {
                    $(Self::$variant => Country::$country,)*
                }
            }

            /// Full catalog, in enumeration order.
            pub fn all() -> &'static [Language] {
                &[$(Language::$variant,)*]
            }
        }
    };
}

languages! {
    Afrikaans => ("af", "Afrikaans", SouthAfrica),
    Albanian => ("sq", "Albanian", Albania),
    Amharic => ("am", "Amharic", Ethiopia),
    Arabic => ("ar", "Arabic", SaudiArabia),
    Armenian => ("hy", "Armenian", Armenia),
    Azerbaijani => ("az", "Azerbaijani", Azerbaijan),
    Basque => ("eu", "Basque", Spain),
    Belarusian => ("be", "Belarusian", Belarus),
    Bengali => ("bn", "Bengali", Bangladesh),
    Bosnian => ("bs", "Bosnian", BosniaAndHerzegovina),
    Bulgarian => ("bg", "Bulgarian", Bulgaria),
    Burmese => ("my", "Burmese", Myanmar),
    Catalan => ("ca", "Catalan", Spain),
    Chinese => ("zh", "Chinese", China),
    Croatian => ("hr", "Croatian", Croatia),
    Czech => ("cs", "Czech", Czechia),
    Danish => ("da", "Danish", Denmark),
    Dutch => ("nl", "Dutch", Netherlands),
    English => ("en", "English", UnitedStates),
    Estonian => ("et", "Estonian", Estonia),
    Filipino => ("fil", "Filipino", Philippines),
    Finnish => ("fi", "Finnish", Finland),
    French => ("fr", "French", France),
    Galician => ("gl", "Galician", Spain),
    Georgian => ("ka", "Georgian", Georgia),
    German => ("de", "German", Germany),
    Greek => ("el", "Greek", Greece),
    Gujarati => ("gu", "Gujarati", India),
    Hebrew => ("iw", "Hebrew", Israel),
    Hindi => ("hi", "Hindi", India),
    Hungarian => ("hu", "Hungarian", Hungary),
    Icelandic => ("is", "Icelandic", Iceland),
    Indonesian => ("in", "Indonesian", Indonesia),
    Irish => ("ga", "Irish", Ireland),
    Italian => ("it", "Italian", Italy),
    Japanese => ("ja", "Japanese", Japan),
    Kannada => ("kn", "Kannada", India),
    Kazakh => ("kk", "Kazakh", Kazakhstan),
    Khmer => ("km", "Khmer", Cambodia),
    Korean => ("ko", "Korean", SouthKorea),
    Kyrgyz => ("ky", "Kyrgyz", Kyrgyzstan),
    Lao => ("lo", "Lao", Laos),
    Latvian => ("lv", "Latvian", Latvia),
    Lithuanian => ("lt", "Lithuanian", Lithuania),
    Luxembourgish => ("lb", "Luxembourgish", Luxembourg),
    Macedonian => ("mk", "Macedonian", NorthMacedonia),
    Malay => ("ms", "Malay", Malaysia),
    Malayalam => ("ml", "Malayalam", India),
    Maltese => ("mt", "Maltese", Malta),
    Marathi => ("mr", "Marathi", India),
    Mongolian => ("mn", "Mongolian", Mongolia),
    Nepali => ("ne", "Nepali", Nepal),
    Norwegian => ("no", "Norwegian", Norway),
    Persian => ("fa", "Persian", Iran),
    Polish => ("pl", "Polish", Poland),
    Portuguese => ("pt", "Portuguese", Brazil),
    Punjabi => ("pa", "Punjabi", India),
    Romanian => ("ro", "Romanian", Romania),
    Romansh => ("rm", "Romansh", Switzerland),
    Russian => ("ru", "Russian", Russia),
    Serbian => ("sr", "Serbian", Serbia),
    Sinhala => ("si", "Sinhala", SriLanka),
    Slovak => ("sk", "Slovak", Slovakia),
    Slovenian => ("sl", "Slovenian", Slovenia),
    Spanish => ("es", "Spanish", Spain),
    Swahili => ("sw", "Swahili", Tanzania),
    Swedish => ("sv", "Swedish", Sweden),
    Tamil => ("ta", "Tamil", India),
    Telugu => ("te", "Telugu", India),
    Thai => ("th", "Thai", Thailand),
    Turkish => ("tr", "Turkish", Turkey),
    Ukrainian => ("uk", "Ukrainian", Ukraine),
    Urdu => ("ur", "Urdu", Pakistan),
    Uzbek => ("uz", "Uzbek", Uzbekistan),
    Vietnamese => ("vi", "Vietnamese", Vietnam),
    Welsh => ("cy", "Welsh", UnitedKingdom),
    Yoruba => ("yo", "Yoruba", Nigeria),
    Zulu => ("zu", "Zulu", SouthAfrica),
}

impl Language {
    /// Exact (case-sensitive) identifier lookup.
    pub fn from_identifier(identifier: &str) -> Option<Language> {
        Self::all()
            .iter()
            .copied()
            .find(|l| l.identifier() == identifier)
    }

    /// First component of a locale string that names a language.
    ///
    /// `en-US` -> `English`, `zh_Hant` -> `Chinese`, `US` -> `None`.
    pub fn from_locale(locale: Option<&str>) -> Option<Language> {
        locale_split(locale)
            .into_iter()
            .find_map(Self::from_identifier)
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Language {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s).ok_or_else(|| LocaleError::UnknownLanguage(s.to_string()))
    }
}

impl TryFrom<String> for Language {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(l: Language) -> Self {
        l.identifier().to_string()
    }
}
