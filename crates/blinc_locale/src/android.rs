//! Android resource directory names (`values`, `values-de`, `values-en-rUS`).

use tracing::debug;

use crate::{Language, Locale, LocaleError};

const VALUES_PREFIX: &str = "values";

impl Locale {
    /// Parse the locale qualifier of an Android `values*` resource directory.
    ///
    /// The unqualified `values` directory holds the default resources, which
    /// are treated as English. Region qualifiers carry an `r` prefix on
    /// Android (`-rUS`); it is dropped before the usual resolution.
    ///
    /// Returns `Ok(None)` for qualifiers that don't name a language
    /// (`values-night`, `values-v21`).
    pub fn from_android_values_directory_name(
        name: &str,
        infer_default_country: bool,
    ) -> Result<Option<Self>, LocaleError> {
        let Some(rest) = name.strip_prefix(VALUES_PREFIX) else {
            debug!(name = %name, "rejecting android directory without `values` prefix");
            return Err(LocaleError::InvalidDirectoryName(name.to_string()));
        };
        let qualifier = rest.strip_prefix('-').unwrap_or(rest);

        if qualifier.trim().is_empty() {
            return Ok(Some(Self::new(Language::English, None)));
        }

        let qualifier = qualifier.replace("-r", "-");
        Ok(Self::parse_or_none(Some(&qualifier), infer_default_country))
    }

    /// Android `values*` directory holding resources for this locale.
    ///
    /// `en` -> `values-en`, `en-US` -> `values-en-rUS`.
    pub fn android_values_directory_name(&self) -> String {
        match self.country() {
            Some(country) => format!("{VALUES_PREFIX}-{}-r{}", self.language(), country),
            None => format!("{VALUES_PREFIX}-{}", self.language()),
        }
    }
}
