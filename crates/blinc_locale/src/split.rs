/// Split a locale string into its components.
///
/// Platforms disagree on the separator (`en-US` vs `en_US`), so `-` is tried
/// first, then `_`. A string with neither is a single component.
///
/// - `None` -> `[]`
/// - `en-US` -> `["en", "US"]`
/// - `zh_Hant` -> `["zh", "Hant"]`
/// - `de` -> `["de"]`
pub fn locale_split(locale: Option<&str>) -> Vec<&str> {
    match locale {
        None => Vec::new(),
        Some(s) if s.contains('-') => s.split('-').collect(),
        Some(s) if s.contains('_') => s.split('_').collect(),
        Some(s) => vec![s],
    }
}
