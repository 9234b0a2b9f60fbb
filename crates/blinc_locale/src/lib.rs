//! Blinc locale identifiers
//!
//! A [`Locale`] is a [`Language`] plus an optional [`Country`], parsed from
//! the loosely formatted strings platforms report:
//! - `en-US`, `en_US`, `en` via [`Locale::parse`] / [`Locale::parse_or_none`]
//! - Android resource directories (`values-en-rUS`) via
//!   [`Locale::from_android_values_directory_name`]
//!
//! Locales map onto store listing locales for the Google Play Store and the
//! Apple App Store ([`Locale::google_play_store_locale`],
//! [`Locale::apple_app_store_locale`]).
//!
//! Optional features:
//! - `serde`: string (de)serialization for all public types
//! - `unic-langid`: conversions to/from `unic_langid::LanguageIdentifier`

mod android;
mod country;
mod error;
mod language;
mod locale;
mod split;
mod storefront;

#[cfg(feature = "unic-langid")]
mod langid;

pub use country::Country;
pub use error::LocaleError;
pub use language::Language;
pub use locale::Locale;
pub use split::locale_split;
pub use storefront::{AppleAppStoreLocale, GooglePlayStoreLocale};
