//! # Inflection
//!
//! Locale-aware word inflection, casing conversion and transliteration.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │          Locale bundles (built-in TOML, files,           │
//! │          callbacks)                                      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [locale::load]
//! ┌─────────────────────────────────────────────────────────┐
//! │    RuleStore (locale → plural / singular rule sets)      │
//! │    + irregular pairs compiled into four rules each       │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [Inflector: RwLock<RuleStore>]
//! ┌─────────────────────────────────────────────────────────┐
//! │         pluralize / singularize (first match wins)       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The casing helpers in [`casing`] are independent of the rule registry.
//!
//! ## Example
//!
//! ```
//! use inflection::{Inflector, DEFAULT_LOCALE};
//!
//! let inflector = Inflector::with_defaults();
//! assert_eq!(inflector.pluralize("ContactPerson", DEFAULT_LOCALE), "ContactPeople");
//! assert_eq!(inflector.singularize("taxes", DEFAULT_LOCALE), "tax");
//!
//! inflector.load("fr", None).unwrap();
//! assert_eq!(inflector.pluralize("bateau", "fr"), "bateaux");
//! ```

pub mod casing;
pub mod config;
pub mod error;
pub mod inflector;
pub mod locale;
pub mod rules;
pub mod transliterate;

pub use casing::{
    camelback, camelize, dasherize, humanize, humanize_with, parameterize, parameterize_with,
    slug, slug_with, titleize, titleize_with, underscore,
};
pub use error::{InflectionError, InflectionResult};
pub use inflector::{Inflector, DEFAULT_LOCALE};
pub use locale::LocaleSource;
pub use rules::{Direction, Rule, RuleStore};
pub use transliterate::{transliterate, transliterate_with, AsciiTransliterator, Transliterator};

/// Pluralize `word` with the global inflector's default locale.
pub fn pluralize(word: &str) -> String {
    Inflector::global().pluralize(word, DEFAULT_LOCALE)
}

/// Singularize `word` with the global inflector's default locale.
pub fn singularize(word: &str) -> String {
    Inflector::global().singularize(word, DEFAULT_LOCALE)
}

/// Register a pluralization rule on the global inflector's default locale.
pub fn plural(pattern: &str, replacement: &str) -> InflectionResult<()> {
    Inflector::global().plural(pattern, replacement, DEFAULT_LOCALE)
}

/// Register a singularization rule on the global inflector's default locale.
pub fn singular(pattern: &str, replacement: &str) -> InflectionResult<()> {
    Inflector::global().singular(pattern, replacement, DEFAULT_LOCALE)
}

/// Register an irregular pair on the global inflector's default locale.
pub fn irregular(singular: &str, plural: &str) -> InflectionResult<()> {
    Inflector::global().irregular(singular, plural, DEFAULT_LOCALE)
}

/// Load a locale into the global inflector.
pub fn load(locale: &str, source: Option<LocaleSource>) -> InflectionResult<()> {
    Inflector::global().load(locale, source)
}

/// Clear one locale, or all of them, from the global inflector.
pub fn reset(locale: Option<&str>) {
    Inflector::global().reset(locale)
}

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::casing::*;
    pub use crate::error::{InflectionError, InflectionResult};
    pub use crate::inflector::{Inflector, DEFAULT_LOCALE};
    pub use crate::locale::LocaleSource;
    pub use crate::rules::Direction;
    pub use crate::transliterate::{transliterate, Transliterator};
}
