//! Casing and presentation helpers.
//!
//! Conversions between `under_scored`, `dashed-words`, `CamelCase`,
//! human-readable labels and URL slugs. All functions are total: any input,
//! including the empty string, produces a string.

use std::sync::LazyLock;

use regex::Regex;

use crate::transliterate::transliterate;

static LOWER_UPPER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static TRAILING_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_id$").unwrap());
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Turn an under_scored or dashed word into a camel-cased one.
///
/// `'red_bike'` → `'RedBike'`. A segment following a `\` is capitalized and
/// the backslash kept: `'my_name\space'` → `'MyName\Space'`.
pub fn camelize(word: &str) -> String {
    let split = LOWER_UPPER.replace_all(word, "${1}_${2}");
    let spaced = split.to_lowercase().replace(['_', '-'], " ");
    let joined: String = ucwords(&spaced).chars().filter(|&c| c != ' ').collect();

    let mut result = String::with_capacity(joined.len());
    let mut after_backslash = false;
    for c in joined.chars() {
        if after_backslash && c.is_ascii_lowercase() {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
        after_backslash = c == '\\';
    }
    result
}

/// Like [`camelize`] with a lowercase first letter: `'red_bike'` → `'redBike'`.
pub fn camelback(word: &str) -> String {
    lcfirst(&camelize(word))
}

/// Turn a camel-cased word into an under_scored one: `'RedBike'` → `'red_bike'`.
pub fn underscore(word: &str) -> String {
    let mut underscored = String::with_capacity(word.len() + 4);
    let mut prev: Option<char> = None;
    for c in word.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(is_word_char) {
            underscored.push('_');
        }
        underscored.push(if c == '-' { '_' } else { c });
        prev = Some(c);
    }
    transliterate(&underscored).to_lowercase()
}

/// Replace underscores with dashes: `'red_bike'` → `'red-bike'`.
pub fn dasherize(word: &str) -> String {
    word.replace('_', "-")
}

/// [`humanize_with`] using `_` as the separator.
pub fn humanize(word: &str) -> String {
    humanize_with(word, '_')
}

/// Turn a separated word into a sentence-cased label.
///
/// A trailing `_id` is dropped: `'post_id'` → `'Post'`,
/// `'posts_tags'` → `'Posts tags'`.
pub fn humanize_with(word: &str, separator: char) -> String {
    let stripped = TRAILING_ID.replace(word, "");
    let spaced: String = stripped
        .chars()
        .map(|c| if c == separator { ' ' } else { c })
        .collect();
    ucfirst(&spaced)
}

/// [`titleize_with`] using `_` as the separator.
pub fn titleize(word: &str) -> String {
    titleize_with(word, '_')
}

/// Like [`humanize_with`] with every word capitalized: `'posts_tags'` → `'Posts Tags'`.
pub fn titleize_with(word: &str, separator: char) -> String {
    ucwords(&humanize_with(word, separator))
}

/// [`slug_with`] using `-` as the replacement.
pub fn slug(string: &str) -> String {
    slug_with(string, "-")
}

/// Transliterate `string`, drop punctuation and join the remaining words
/// with `replacement`: `'Foo:Bar & Cie'` → `'Foo-Bar-Cie'`.
pub fn slug_with(string: &str, replacement: &str) -> String {
    let transliterated = transliterate(string);
    let spaced = NON_WORD.replace_all(&transliterated, " ");
    WHITESPACE
        .replace_all(spaced.trim(), regex::NoExpand(replacement))
        .into_owned()
}

/// [`parameterize_with`] using `-` as the replacement.
pub fn parameterize(string: &str) -> String {
    parameterize_with(string, "-")
}

/// Lowercased [`slug_with`]: `'Foo:Bar & Cie'` → `'foo-bar-cie'`.
pub fn parameterize_with(string: &str, replacement: &str) -> String {
    slug_with(string, replacement).to_lowercase()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lcfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first letter of every whitespace-delimited word.
fn ucwords(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    result
}
