//! Error types for rule registration and locale loading.
//!
//! Inflecting a word never fails. Errors only come out of the operations
//! that change the registry: registering a rule whose pattern does not
//! compile, or loading a locale that cannot be resolved.

use std::path::PathBuf;

use crate::config::SettingsError;

/// Result type for registry operations.
pub type InflectionResult<T> = Result<T, InflectionError>;

/// Error type for the inflection registry.
#[derive(Debug, thiserror::Error)]
pub enum InflectionError {
    /// No built-in bundle, bundle file or usable source for the locale.
    #[error("unable to load the `{locale}` locale")]
    UnknownLocale { locale: String },

    /// A rule pattern was rejected by the regex compiler.
    #[error("invalid rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A locale bundle is not valid TOML or does not match the bundle format.
    #[error("invalid bundle for the `{locale}` locale: {source}")]
    BundleParse {
        locale: String,
        #[source]
        source: toml::de::Error,
    },

    /// A bundle file could not be read.
    #[error("failed to read bundle file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings could not be applied to the registry.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl InflectionError {
    pub(crate) fn unknown_locale(locale: &str) -> Self {
        Self::UnknownLocale {
            locale: locale.to_string(),
        }
    }
}
