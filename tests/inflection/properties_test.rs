//! Property tests over generated regular words.

use inflection::{Inflector, DEFAULT_LOCALE};
use proptest::prelude::*;

/// Lowercase words that only the generic "add s" rules apply to: they end in
/// a consonant other than s/x/z/y/h.
fn regular_word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}[bdfgklmnprtvw]"
}

/// Endings claimed by the English irregular pairs ("new" + "s" is "news").
fn has_irregular_tail(word: &str) -> bool {
    const TAILS: &[&str] = &[
        "man", "men", "child", "children", "person", "information", "equipment", "new",
    ];
    TAILS.iter().any(|tail| word.ends_with(tail))
}

/// Words of any shape.
fn any_word() -> impl Strategy<Value = String> {
    "[a-zA-Z]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn pluralize_is_idempotent(word in any_word()) {
        let inflector = Inflector::with_defaults();
        let once = inflector.pluralize(&word, DEFAULT_LOCALE);
        prop_assert_eq!(inflector.pluralize(&once, DEFAULT_LOCALE), once);
    }

    #[test]
    fn regular_words_round_trip(word in regular_word()) {
        let inflector = Inflector::with_defaults();
        prop_assume!(!has_irregular_tail(&word));
        let plural = inflector.pluralize(&word, DEFAULT_LOCALE);
        prop_assert_eq!(plural.clone(), format!("{word}s"));
        prop_assert_eq!(inflector.singularize(&plural, DEFAULT_LOCALE), word);
    }

    #[test]
    fn unknown_locale_is_identity(word in any_word()) {
        let inflector = Inflector::with_defaults();
        prop_assert_eq!(inflector.pluralize(&word, "xx"), word.clone());
        prop_assert_eq!(inflector.singularize(&word, "xx"), word);
    }

    #[test]
    fn uppercase_prefix_is_preserved(word in regular_word()) {
        let inflector = Inflector::with_defaults();
        prop_assume!(!has_irregular_tail(&word));
        let upper = word.to_uppercase();
        prop_assert_eq!(inflector.pluralize(&upper, DEFAULT_LOCALE), format!("{upper}s"));
    }
}

#[test]
fn singularize_is_idempotent_on_samples() {
    let inflector = Inflector::with_defaults();
    for word in [
        "posts", "taxes", "ponies", "people", "children", "men", "news", "ImageMETA",
    ] {
        let once = inflector.singularize(word, DEFAULT_LOCALE);
        assert_eq!(inflector.singularize(&once, DEFAULT_LOCALE), once, "{word}");
    }
}
