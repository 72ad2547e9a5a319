//! The inflection registry.
//!
//! [`Inflector`] owns a [`RuleStore`] behind a reader-writer lock: inflecting
//! words only takes the read lock, while registering rules, loading and
//! resetting locales take the write lock.

use std::path::PathBuf;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::InflectionResult;
use crate::locale::{self, LocaleSource};
use crate::rules::{Direction, Rule, RuleStore};

/// Locale used when none is given.
pub const DEFAULT_LOCALE: &str = "default";

static GLOBAL: LazyLock<Inflector> = LazyLock::new(Inflector::with_defaults);

/// Locale-scoped pluralization and singularization rules.
#[derive(Debug, Default)]
pub struct Inflector {
    store: RwLock<RuleStore>,
    bundle_dirs: RwLock<Vec<PathBuf>>,
}

impl Inflector {
    /// An inflector without any rule. Every word inflects to itself until a
    /// locale is loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// An inflector with the English rules loaded under [`DEFAULT_LOCALE`].
    pub fn with_defaults() -> Self {
        let inflector = Self::new();
        if let Err(e) = inflector.load(DEFAULT_LOCALE, None) {
            // The built-in bundle is validated by the build script.
            warn!(error = %e, "failed to load the built-in English rules");
        }
        inflector
    }

    /// An inflector configured from `settings`: bundle directories are
    /// registered, then the default locale and every preloaded locale are
    /// loaded.
    pub fn from_settings(settings: &Settings) -> InflectionResult<Self> {
        let inflector = Self::new();
        for dir in settings.resolved_bundle_dirs()? {
            inflector.add_bundle_dir(dir);
        }
        inflector.load(&settings.default_locale, None)?;
        for locale in &settings.preload {
            inflector.load(locale, None)?;
        }
        Ok(inflector)
    }

    /// The process-wide inflector.
    ///
    /// Created on first use with the English rules loaded under
    /// [`DEFAULT_LOCALE`]. It lives for the rest of the process; [`reset`]
    /// clears it without reloading anything.
    ///
    /// [`reset`]: Inflector::reset
    pub fn global() -> &'static Inflector {
        &GLOBAL
    }

    fn read(&self) -> RwLockReadGuard<'_, RuleStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RuleStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Change a word from singular to plural.
    pub fn pluralize(&self, word: &str, locale: &str) -> String {
        self.read().pluralize(word, locale)
    }

    /// Change a word from plural to singular.
    pub fn singularize(&self, word: &str, locale: &str) -> String {
        self.read().singularize(word, locale)
    }

    /// Register a pluralization rule, tried before every existing one.
    pub fn plural(&self, pattern: &str, replacement: &str, locale: &str) -> InflectionResult<()> {
        self.write().plural(pattern, replacement, locale)
    }

    /// Register a singularization rule, tried before every existing one.
    pub fn singular(&self, pattern: &str, replacement: &str, locale: &str) -> InflectionResult<()> {
        self.write().singular(pattern, replacement, locale)
    }

    /// Register an irregular singular/plural pair.
    pub fn irregular(&self, singular: &str, plural: &str, locale: &str) -> InflectionResult<()> {
        self.write().irregular(singular, plural, locale)
    }

    /// Load the rules of `locale`, from `source` when given or from the
    /// built-in table and bundle directories otherwise.
    ///
    /// The loaded rules take priority over rules already registered for the
    /// locale. On error nothing is registered.
    pub fn load(&self, locale: &str, source: Option<LocaleSource>) -> InflectionResult<()> {
        let dirs = self
            .bundle_dirs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let loaded = locale::load(locale, source, &dirs)?;
        debug!(
            locale,
            plural = loaded.len(Direction::Plural, locale),
            singular = loaded.len(Direction::Singular, locale),
            "loaded locale"
        );
        self.write().merge(loaded);
        Ok(())
    }

    /// Clear one locale, or every locale when `locale` is `None`.
    pub fn reset(&self, locale: Option<&str>) {
        self.write().clear(locale);
    }

    /// Add a directory searched for `<locale>.toml` bundle files.
    pub fn add_bundle_dir(&self, dir: impl Into<PathBuf>) {
        self.bundle_dirs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(dir.into());
    }

    /// Locales currently holding rules, sorted.
    pub fn locales(&self) -> Vec<String> {
        self.read().locales()
    }

    /// Snapshot of the rules of `locale` + `direction`, in priority order.
    pub fn rules(&self, direction: Direction, locale: &str) -> Vec<Rule> {
        self.read().rules(direction, locale).cloned().collect()
    }
}
