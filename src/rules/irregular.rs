//! Irregular singular/plural pairs.
//!
//! An irregular pair is never stored. It is split on its longest common
//! prefix and compiled into four rules:
//!
//! ```text
//! irregular("person", "people")   prefix = "pe", "rson" / "ople"
//!
//! singular  (person)$     -> ${1}        already singular
//! singular  (pe)ople$     -> ${1}rson    "ContactPeople" -> "ContactPerson"
//! plural    (people)$     -> ${1}        already plural
//! plural    (pe)rson$     -> ${1}ople    "ContactPerson" -> "ContactPeople"
//! ```
//!
//! The prefix is compared `char` by `char`, so a multi-byte character is
//! never split between prefix and suffix.

use tracing::debug;

use super::{Direction, Rule, RuleStore};
use crate::error::InflectionResult;

/// A singular/plural pair split on its common prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrregularPair<'a> {
    pub singular: &'a str,
    pub plural: &'a str,
    /// Longest common leading substring of both words.
    pub prefix: &'a str,
    /// `singular` without the prefix.
    pub singular_suffix: &'a str,
    /// `plural` without the prefix.
    pub plural_suffix: &'a str,
}

impl<'a> IrregularPair<'a> {
    pub fn new(singular: &'a str, plural: &'a str) -> Self {
        let split = singular
            .char_indices()
            .zip(plural.chars())
            .find(|((_, s), p)| s != p)
            .map_or(singular.len().min(plural.len()), |((index, _), _)| index);

        Self {
            singular,
            plural,
            prefix: &singular[..split],
            singular_suffix: &singular[split..],
            plural_suffix: &plural[split..],
        }
    }

    /// The four derived rules, in registration order.
    pub fn rules(&self) -> InflectionResult<[(Direction, Rule); 4]> {
        let prefix = regex::escape(self.prefix);
        Ok([
            (
                Direction::Singular,
                Rule::new(&format!("({})$", regex::escape(self.singular)), "${1}")?,
            ),
            (
                Direction::Singular,
                Rule::new(
                    &format!("({prefix}){}$", regex::escape(self.plural_suffix)),
                    format!("${{1}}{}", escape_template(self.singular_suffix)),
                )?,
            ),
            (
                Direction::Plural,
                Rule::new(&format!("({})$", regex::escape(self.plural)), "${1}")?,
            ),
            (
                Direction::Plural,
                Rule::new(
                    &format!("({prefix}){}$", regex::escape(self.singular_suffix)),
                    format!("${{1}}{}", escape_template(self.plural_suffix)),
                )?,
            ),
        ])
    }
}

/// Make `literal` safe to embed in a replacement template.
fn escape_template(literal: &str) -> String {
    literal.replace('$', "$$")
}

impl RuleStore {
    /// Register an irregular singular/plural pair for `locale`.
    ///
    /// The derived rules take priority over every rule already registered
    /// for the locale. Nothing is registered if any of them fails to compile.
    pub fn irregular(&mut self, singular: &str, plural: &str, locale: &str) -> InflectionResult<()> {
        let pair = IrregularPair::new(singular, plural);
        let rules = pair.rules()?;
        debug!(
            locale,
            singular,
            plural,
            prefix = pair.prefix,
            "registered irregular pair"
        );
        for (direction, rule) in rules {
            self.push(direction, rule, locale);
        }
        Ok(())
    }
}
