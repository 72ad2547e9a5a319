//! TOML locale bundles.
//!
//! ```toml
//! [[rules]]
//! kind = "plural"
//! pattern = '([^s])$'
//! replacement = '${1}s'
//!
//! [[rules]]
//! kind = "irregular"
//! singular = "person"
//! plural = "people"
//! ```
//!
//! Entries are registered in document order.

use serde::Deserialize;

use crate::error::{InflectionError, InflectionResult};
use crate::rules::RuleStore;

/// One entry of a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RuleDef {
    Plural { pattern: String, replacement: String },
    Singular { pattern: String, replacement: String },
    Irregular { singular: String, plural: String },
}

/// A parsed locale bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Bundle {
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

impl Bundle {
    /// Parse bundle text. `locale` is only used for error reporting.
    pub fn parse(locale: &str, content: &str) -> InflectionResult<Self> {
        toml::from_str(content).map_err(|source| InflectionError::BundleParse {
            locale: locale.to_string(),
            source,
        })
    }

    /// Register every entry into `store` under `locale`.
    pub fn register(&self, store: &mut RuleStore, locale: &str) -> InflectionResult<()> {
        for def in &self.rules {
            match def {
                RuleDef::Plural {
                    pattern,
                    replacement,
                } => store.plural(pattern, replacement, locale)?,
                RuleDef::Singular {
                    pattern,
                    replacement,
                } => store.singular(pattern, replacement, locale)?,
                RuleDef::Irregular { singular, plural } => {
                    store.irregular(singular, plural, locale)?
                }
            }
        }
        Ok(())
    }
}
