//! App store listing locales.
//!
//! Both stores publish a fixed list of locale codes for store listings. Most
//! of them resolve through the normal [`Locale`] parsing rules. The rest use
//! codes the language catalog doesn't know (`id` and `he` instead of the
//! legacy `in` and `iw`, script subtags like `zh_Hant`) and are matched by
//! hand.

use std::fmt::{Display, Formatter};

use tracing::trace;

use crate::{Country, Language, Locale};

macro_rules! store_locales {
    ($(#[$meta:meta])* $store:ident { $($variant:ident => $name:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $store {
            $(
                #[cfg_attr(feature = "serde", serde(rename = $name))]
                $variant,
            )*
        }

        impl $store {
            /// Code as used by the store (`en_US`, `zh_Hant`).
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Full catalog, in the order matching is attempted.
            pub fn all() -> &'static [$store] {
                &[$($store::$variant,)*]
            }

            /// Locale this code stands for under the normal parsing rules.
            pub fn locale(self) -> Option<Locale> {
                Locale::parse_or_none(Some(self.name()), true)
            }

            /// First code in catalog order that resolves to `locale`, or whose
            /// hand-written exception covers it.
            fn find_for(locale: &Locale) -> Option<Self> {
                Self::all().iter().copied().find(|code| {
                    if code.locale().as_ref() == Some(locale) {
                        return true;
                    }
                    let exception = code.is_exception_for(locale);
                    if exception {
                        trace!(
                            store = stringify!($store),
                            locale = %locale,
                            code = %code,
                            "store locale exception"
                        );
                    }
                    exception
                })
            }
        }

        impl Display for $store {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

store_locales! {
    /// Google Play Store listing locale.
    GooglePlayStoreLocale {
        Af => "af",
        Sq => "sq",
        Am => "am",
        Ar => "ar",
        HyAm => "hy_AM",
        AzAz => "az_AZ",
        EuEs => "eu_ES",
        Be => "be",
        BnBd => "bn_BD",
        Bg => "bg",
        MyMm => "my_MM",
        Ca => "ca",
        ZhHk => "zh_HK",
        ZhCn => "zh_CN",
        ZhTw => "zh_TW",
        Hr => "hr",
        CsCz => "cs_CZ",
        DaDk => "da_DK",
        NlNl => "nl_NL",
        EnAu => "en_AU",
        EnCa => "en_CA",
        EnIn => "en_IN",
        EnSg => "en_SG",
        EnZa => "en_ZA",
        EnGb => "en_GB",
        EnUs => "en_US",
        Et => "et",
        Fil => "fil",
        FiFi => "fi_FI",
        FrCa => "fr_CA",
        FrFr => "fr_FR",
        GlEs => "gl_ES",
        KaGe => "ka_GE",
        DeDe => "de_DE",
        ElGr => "el_GR",
        Gu => "gu",
        IwIl => "iw_IL",
        HiIn => "hi_IN",
        HuHu => "hu_HU",
        IsIs => "is_IS",
        Id => "id",
        ItIt => "it_IT",
        JaJp => "ja_JP",
        KnIn => "kn_IN",
        Kk => "kk",
        KmKh => "km_KH",
        KoKr => "ko_KR",
        KyKg => "ky_KG",
        LoLa => "lo_LA",
        Lv => "lv",
        Lt => "lt",
        MkMk => "mk_MK",
        Ms => "ms",
        MsMy => "ms_MY",
        MlIn => "ml_IN",
        MrIn => "mr_IN",
        MnMn => "mn_MN",
        NeNp => "ne_NP",
        NoNo => "no_NO",
        Fa => "fa",
        PlPl => "pl_PL",
        PtBr => "pt_BR",
        PtPt => "pt_PT",
        Pa => "pa",
        Ro => "ro",
        Rm => "rm",
        RuRu => "ru_RU",
        Sr => "sr",
        SiLk => "si_LK",
        Sk => "sk",
        Sl => "sl",
        Es419 => "es_419",
        EsEs => "es_ES",
        EsUs => "es_US",
        Sw => "sw",
        SvSe => "sv_SE",
        TaIn => "ta_IN",
        TeIn => "te_IN",
        Th => "th",
        TrTr => "tr_TR",
        Uk => "uk",
        Ur => "ur",
        Vi => "vi",
        Zu => "zu",
    }
}

store_locales! {
    /// Apple App Store listing locale.
    AppleAppStoreLocale {
        ArSa => "ar_SA",
        Ca => "ca",
        ZhHans => "zh_Hans",
        ZhHant => "zh_Hant",
        Hr => "hr",
        Cs => "cs",
        Da => "da",
        NlNl => "nl_NL",
        EnAu => "en_AU",
        EnCa => "en_CA",
        EnGb => "en_GB",
        EnUs => "en_US",
        Fi => "fi",
        FrFr => "fr_FR",
        FrCa => "fr_CA",
        DeDe => "de_DE",
        El => "el",
        He => "he",
        Hi => "hi",
        Hu => "hu",
        Id => "id",
        It => "it",
        Ja => "ja",
        Ko => "ko",
        Ms => "ms",
        No => "no",
        Pl => "pl",
        PtBr => "pt_BR",
        PtPt => "pt_PT",
        Ro => "ro",
        Ru => "ru",
        Sk => "sk",
        EsMx => "es_MX",
        EsEs => "es_ES",
        Sv => "sv",
        Th => "th",
        Tr => "tr",
        Uk => "uk",
        Vi => "vi",
    }
}

impl GooglePlayStoreLocale {
    fn is_exception_for(self, locale: &Locale) -> bool {
        self == Self::Id && locale.language() == Language::Indonesian
    }
}

impl AppleAppStoreLocale {
    fn is_exception_for(self, locale: &Locale) -> bool {
        match self {
            Self::Id => locale.language() == Language::Indonesian,
            Self::He => locale.language() == Language::Hebrew,
            Self::ZhHant => {
                locale.language() == Language::Chinese && locale.country() == Some(Country::Taiwan)
            }
            _ => false,
        }
    }
}

impl Locale {
    /// Google Play Store listing locale to use for this locale, if any.
    ///
    /// The first code in catalog order that resolves to `self` wins.
    pub fn google_play_store_locale(&self) -> Option<GooglePlayStoreLocale> {
        GooglePlayStoreLocale::find_for(self)
    }

    /// Apple App Store listing locale to use for this locale, if any.
    ///
    /// The first code in catalog order that resolves to `self` wins.
    pub fn apple_app_store_locale(&self) -> Option<AppleAppStoreLocale> {
        AppleAppStoreLocale::find_for(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let google: HashSet<_> = GooglePlayStoreLocale::all().iter().map(|c| c.name()).collect();
        assert_eq!(google.len(), GooglePlayStoreLocale::all().len());

        let apple: HashSet<_> = AppleAppStoreLocale::all().iter().map(|c| c.name()).collect();
        assert_eq!(apple.len(), AppleAppStoreLocale::all().len());
    }

    #[test]
    fn exception_codes_do_not_resolve_on_their_own() {
        assert_eq!(GooglePlayStoreLocale::Id.locale(), None);
        assert_eq!(AppleAppStoreLocale::Id.locale(), None);
        assert_eq!(AppleAppStoreLocale::He.locale(), None);
        assert_eq!(
            AppleAppStoreLocale::ZhHant.locale(),
            Some(Locale::new(Language::Chinese, Some(Country::China)))
        );
    }

    #[test]
    fn general_rule() {
        let en_us = Locale::new(Language::English, Some(Country::UnitedStates));
        assert_eq!(en_us.google_play_store_locale(), Some(GooglePlayStoreLocale::EnUs));
        assert_eq!(en_us.apple_app_store_locale(), Some(AppleAppStoreLocale::EnUs));

        let es_latam = Locale::new(Language::Spanish, Some(Country::LatinAmerica));
        assert_eq!(es_latam.google_play_store_locale(), Some(GooglePlayStoreLocale::Es419));
        assert_eq!(es_latam.apple_app_store_locale(), None);
    }

    #[test]
    fn language_only_locale_needs_an_exception() {
        // Store codes always resolve with a country.
        let en = Locale::new(Language::English, None);
        assert_eq!(en.google_play_store_locale(), None);
        assert_eq!(en.apple_app_store_locale(), None);
    }

    #[test]
    fn simplified_chinese_wins_tie() {
        let zh_cn = Locale::new(Language::Chinese, Some(Country::China));
        assert_eq!(zh_cn.apple_app_store_locale(), Some(AppleAppStoreLocale::ZhHans));
        assert_eq!(zh_cn.google_play_store_locale(), Some(GooglePlayStoreLocale::ZhCn));
    }

    #[test]
    fn earlier_code_wins_tie() {
        let ms_my = Locale::new(Language::Malay, Some(Country::Malaysia));
        assert_eq!(GooglePlayStoreLocale::Ms.locale(), Some(ms_my));
        assert_eq!(GooglePlayStoreLocale::MsMy.locale(), Some(ms_my));
        assert_eq!(ms_my.google_play_store_locale(), Some(GooglePlayStoreLocale::Ms));
    }

    #[test]
    fn exceptions_apply_per_store() {
        let he = Locale::new(Language::Hebrew, None);
        assert_eq!(GooglePlayStoreLocale::find_for(&he), None);
        assert_eq!(AppleAppStoreLocale::find_for(&he), Some(AppleAppStoreLocale::He));

        let id = Locale::new(Language::Indonesian, Some(Country::India));
        assert_eq!(GooglePlayStoreLocale::find_for(&id), Some(GooglePlayStoreLocale::Id));
        assert_eq!(AppleAppStoreLocale::find_for(&id), Some(AppleAppStoreLocale::Id));
    }

    #[test]
    fn display_uses_store_name() {
        assert_eq!(GooglePlayStoreLocale::Es419.to_string(), "es_419");
        assert_eq!(AppleAppStoreLocale::ZhHant.to_string(), "zh_Hant");
    }
}
