//! Rule application.

use tracing::trace;

use super::{Direction, RuleStore};

impl RuleStore {
    /// Inflect `word` with the rules of `locale` + `direction`.
    ///
    /// The first rule whose pattern matches decides the result. An empty word,
    /// an unknown locale, or a word no rule matches is returned unchanged.
    pub fn apply(&self, direction: Direction, word: &str, locale: &str) -> String {
        if word.is_empty() {
            return String::new();
        }
        for rule in self.rules(direction, locale) {
            if let Some(result) = rule.apply(word) {
                trace!(%direction, locale, word, pattern = rule.pattern(), %result, "rule matched");
                return result;
            }
        }
        word.to_string()
    }

    pub fn pluralize(&self, word: &str, locale: &str) -> String {
        self.apply(Direction::Plural, word, locale)
    }

    pub fn singularize(&self, word: &str, locale: &str) -> String {
        self.apply(Direction::Singular, word, locale)
    }
}
