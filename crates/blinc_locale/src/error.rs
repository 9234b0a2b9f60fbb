use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// No language identifier could be found in the input.
    #[error("can't get locale for `{0}`")]
    UnresolvableLocale(String),

    /// Android resource directory names must start with `values`.
    #[error("invalid android values directory name `{0}` (expected `values` prefix)")]
    InvalidDirectoryName(String),

    /// Strict lookup of a single language identifier (`en`, `iw`) failed.
    #[error("unknown language identifier `{0}`")]
    UnknownLanguage(String),

    /// Strict lookup of a single country identifier (`US`, `419`) failed.
    #[error("unknown country identifier `{0}`")]
    UnknownCountry(String),
}
