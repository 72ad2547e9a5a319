//! Per-locale rule storage.

use std::collections::HashMap;

use tracing::debug;

use super::{Direction, Rule};
use crate::error::InflectionResult;

/// Both rule sets of a single locale.
///
/// Rules are pushed to the back of each vector and read back to front, so
/// the most recently registered rule is always tried first.
#[derive(Debug, Clone, Default)]
struct LocaleRules {
    plural: Vec<Rule>,
    singular: Vec<Rule>,
}

impl LocaleRules {
    fn get(&self, direction: Direction) -> &Vec<Rule> {
        match direction {
            Direction::Plural => &self.plural,
            Direction::Singular => &self.singular,
        }
    }

    fn get_mut(&mut self, direction: Direction) -> &mut Vec<Rule> {
        match direction {
            Direction::Plural => &mut self.plural,
            Direction::Singular => &mut self.singular,
        }
    }
}

/// Ordered inflection rules, keyed by locale and direction.
///
/// Locales are never declared up front: registering a rule creates the
/// locale, and looking up an unknown locale finds no rules.
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    locales: HashMap<String, LocaleRules>,
}

impl RuleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule ahead of every rule already present for
    /// `locale` + `direction`.
    pub fn add_rule(
        &mut self,
        direction: Direction,
        pattern: &str,
        replacement: &str,
        locale: &str,
    ) -> InflectionResult<()> {
        let rule = Rule::new(pattern, replacement)?;
        debug!(%direction, locale, pattern, replacement, "registered rule");
        self.push(direction, rule, locale);
        Ok(())
    }

    /// Register a pluralization rule.
    pub fn plural(&mut self, pattern: &str, replacement: &str, locale: &str) -> InflectionResult<()> {
        self.add_rule(Direction::Plural, pattern, replacement, locale)
    }

    /// Register a singularization rule.
    pub fn singular(
        &mut self,
        pattern: &str,
        replacement: &str,
        locale: &str,
    ) -> InflectionResult<()> {
        self.add_rule(Direction::Singular, pattern, replacement, locale)
    }

    pub(crate) fn push(&mut self, direction: Direction, rule: Rule, locale: &str) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .get_mut(direction)
            .push(rule);
    }

    /// Remove the rules of one locale, or of every locale when `locale` is
    /// `None`. Defaults are not reloaded.
    pub fn clear(&mut self, locale: Option<&str>) {
        match locale {
            Some(locale) => {
                self.locales.remove(locale);
                debug!(locale, "cleared locale rules");
            }
            None => {
                self.locales.clear();
                debug!("cleared all rules");
            }
        }
    }

    /// Rules for `locale` + `direction` in priority order.
    pub fn rules<'a>(
        &'a self,
        direction: Direction,
        locale: &str,
    ) -> impl Iterator<Item = &'a Rule> + 'a {
        self.locales
            .get(locale)
            .map(|rules| rules.get(direction).as_slice())
            .unwrap_or_default()
            .iter()
            .rev()
    }

    /// Number of rules registered for `locale` + `direction`.
    pub fn len(&self, direction: Direction, locale: &str) -> usize {
        self.locales
            .get(locale)
            .map_or(0, |rules| rules.get(direction).len())
    }

    /// Whether the store holds no rules at all.
    pub fn is_empty(&self) -> bool {
        self.locales
            .values()
            .all(|rules| rules.plural.is_empty() && rules.singular.is_empty())
    }

    /// Names of the locales holding rules, sorted.
    pub fn locales(&self) -> Vec<String> {
        let mut names: Vec<String> = self.locales.keys().cloned().collect();
        names.sort();
        names
    }

    /// Move every rule of `other` into this store, keeping `other`'s rules
    /// ahead of the rules already present.
    pub(crate) fn merge(&mut self, other: RuleStore) {
        for (locale, rules) in other.locales {
            let target = self.locales.entry(locale).or_default();
            target.plural.extend(rules.plural);
            target.singular.extend(rules.singular);
        }
    }
}
