//! Inflection rules.
//!
//! A [`Rule`] is a compiled, case-insensitive pattern paired with a
//! replacement template. Rules live in a [`RuleStore`], grouped by locale and
//! by [`Direction`], and are tried most-recently-registered first:
//!
//! ```text
//! locale ──► Plural   ──► [rule N, rule N-1, ..., rule 1]
//!        └─► Singular ──► [rule M, rule M-1, ..., rule 1]
//! ```
//!
//! The first rule whose pattern matches the word wins.

mod engine;
mod irregular;
mod store;

pub use irregular::IrregularPair;
pub use store::RuleStore;

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::{InflectionError, InflectionResult};

/// Which way a word is being inflected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// singular → plural
    Plural,
    /// plural → singular
    Singular,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Plural => "plural",
            Direction::Singular => "singular",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pattern/replacement pair.
///
/// The pattern uses `regex` crate syntax and is always matched
/// case-insensitively. The replacement may reference capture groups with
/// `$1` or `${1}`; write `$$` for a literal dollar sign.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    /// Compile a rule. Fails if the pattern is not a valid regex.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> InflectionResult<Self> {
        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| InflectionError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            pattern: compiled,
            replacement: replacement.into(),
        })
    }

    /// The pattern as written at registration.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The replacement template as written at registration.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply the rule to `word`.
    ///
    /// Returns `None` when the pattern does not match. A match always yields
    /// `Some`, even when the substitution leaves the word unchanged.
    pub fn apply(&self, word: &str) -> Option<String> {
        if !self.pattern.is_match(word) {
            return None;
        }
        Some(
            self.pattern
                .replace_all(word, self.replacement.as_str())
                .into_owned(),
        )
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/i -> '{}'", self.pattern(), self.replacement())
    }
}
