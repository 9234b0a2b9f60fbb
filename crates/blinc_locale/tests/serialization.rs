#![cfg(feature = "serde")]

use blinc_locale::{AppleAppStoreLocale, Country, GooglePlayStoreLocale, Language, Locale};
use pretty_assertions::assert_eq;

#[test]
fn locale_serializes_as_string() {
    let locale = Locale::new(Language::English, Some(Country::UnitedStates));
    assert_eq!(serde_json::to_string(&locale).unwrap(), r#""en-US""#);
    assert_eq!(
        serde_json::from_str::<Locale>(r#""en_US""#).unwrap(),
        locale
    );
}

#[test]
fn locale_deserialize_is_strict() {
    assert!(serde_json::from_str::<Locale>(r#""xx""#).is_err());
    assert_eq!(
        serde_json::from_str::<Locale>(r#""de""#).unwrap(),
        Locale::new(Language::German, None)
    );
}

#[test]
fn catalog_entries_use_identifiers() {
    assert_eq!(serde_json::to_string(&Language::Hebrew).unwrap(), r#""iw""#);
    assert_eq!(serde_json::to_string(&Country::LatinAmerica).unwrap(), r#""419""#);
    assert!(serde_json::from_str::<Country>(r#""us""#).is_err());
}

#[test]
fn store_locales_use_store_names() {
    assert_eq!(
        serde_json::to_string(&AppleAppStoreLocale::ZhHant).unwrap(),
        r#""zh_Hant""#
    );
    assert_eq!(
        serde_json::from_str::<GooglePlayStoreLocale>(r#""es_419""#).unwrap(),
        GooglePlayStoreLocale::Es419
    );
}
