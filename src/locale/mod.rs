//! Locale loading.
//!
//! A locale is populated from one of:
//! - a built-in bundle (`default`/`auto`/`en`, `fr`, `es`)
//! - a `<locale>.toml` bundle file found in a bundle directory
//! - an explicit [`LocaleSource`] passed to the loader
//!
//! Loading happens into a scratch [`RuleStore`] first and is merged only when
//! every rule compiled, so a failed load never leaves a partial locale.

mod bundle;

pub use bundle::{Bundle, RuleDef};

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{InflectionError, InflectionResult};
use crate::rules::RuleStore;

const EN_TOML: &str = include_str!("bundles/en.toml");
const FR_TOML: &str = include_str!("bundles/fr.toml");
const ES_TOML: &str = include_str!("bundles/es.toml");

/// Text of the built-in bundle for `locale`, if there is one.
pub fn builtin(locale: &str) -> Option<&'static str> {
    match locale {
        "default" | "auto" | "en" => Some(EN_TOML),
        "fr" => Some(FR_TOML),
        "es" => Some(ES_TOML),
        _ => None,
    }
}

/// Names accepted by [`builtin`].
pub const BUILTIN_LOCALES: &[&str] = &["default", "auto", "en", "fr", "es"];

/// Registration callback: receives the store and the locale being loaded.
pub type LoadFn = dyn FnOnce(&mut RuleStore, &str) -> InflectionResult<()> + Send;

/// Where a locale's rules come from when the caller provides them.
pub enum LocaleSource {
    /// Run a registration callback.
    Callback(Box<LoadFn>),
    /// Parse inline bundle text.
    Toml(String),
    /// Read a bundle file.
    File(PathBuf),
}

impl LocaleSource {
    pub fn callback<F>(f: F) -> Self
    where
        F: FnOnce(&mut RuleStore, &str) -> InflectionResult<()> + Send + 'static,
    {
        LocaleSource::Callback(Box::new(f))
    }
}

impl fmt::Debug for LocaleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleSource::Callback(_) => f.write_str("Callback(..)"),
            LocaleSource::Toml(text) => f.debug_tuple("Toml").field(&text.len()).finish(),
            LocaleSource::File(path) => f.debug_tuple("File").field(path).finish(),
        }
    }
}

/// Build the rules of `locale` into a fresh store.
///
/// Without a source, the built-in table is consulted first, then
/// `<dir>/<locale>.toml` in each of `bundle_dirs`.
pub fn load(
    locale: &str,
    source: Option<LocaleSource>,
    bundle_dirs: &[PathBuf],
) -> InflectionResult<RuleStore> {
    let mut scratch = RuleStore::new();
    match source {
        Some(LocaleSource::Callback(register)) => {
            debug!(locale, "loading locale from callback");
            register(&mut scratch, locale)?;
        }
        Some(LocaleSource::Toml(content)) => {
            debug!(locale, "loading locale from inline bundle");
            Bundle::parse(locale, &content)?.register(&mut scratch, locale)?;
        }
        Some(LocaleSource::File(path)) => {
            if !path.is_file() {
                return Err(InflectionError::unknown_locale(locale));
            }
            load_file(&mut scratch, locale, &path)?;
        }
        None => {
            if let Some(content) = builtin(locale) {
                debug!(locale, "loading built-in locale");
                Bundle::parse(locale, content)?.register(&mut scratch, locale)?;
            } else {
                let path = find_bundle(locale, bundle_dirs)
                    .ok_or_else(|| InflectionError::unknown_locale(locale))?;
                load_file(&mut scratch, locale, &path)?;
            }
        }
    }
    Ok(scratch)
}

fn load_file(store: &mut RuleStore, locale: &str, path: &Path) -> InflectionResult<()> {
    debug!(locale, path = %path.display(), "loading locale from file");
    let content = fs::read_to_string(path).map_err(|source| InflectionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Bundle::parse(locale, &content)?.register(store, locale)
}

/// First `<dir>/<locale>.toml` that exists.
///
/// Locale tokens that could escape the directory are never resolved.
fn find_bundle(locale: &str, bundle_dirs: &[PathBuf]) -> Option<PathBuf> {
    if locale.is_empty() || locale.contains(['/', '\\']) || locale.starts_with('.') {
        return None;
    }
    bundle_dirs
        .iter()
        .map(|dir| dir.join(format!("{locale}.toml")))
        .find(|path| path.is_file())
}
