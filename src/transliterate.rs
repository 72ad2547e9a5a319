//! Unicode to ASCII transliteration.
//!
//! The casing helpers only need text that is safe to lowercase, split and
//! join as ASCII. How each script is romanized is left to a
//! [`Transliterator`]; the default one is backed by `deunicode`.

use deunicode::deunicode_with_tofu;

/// Maps arbitrary Unicode text to a best-effort ASCII approximation.
pub trait Transliterator: Send + Sync {
    fn transliterate(&self, input: &str) -> String;
}

/// Maps every script to Latin, strips diacritics and drops code points
/// without an ASCII approximation.
#[derive(Debug, Clone, Default)]
pub struct AsciiTransliterator {
    placeholder: String,
}

impl AsciiTransliterator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace unmappable code points with `placeholder` instead of
    /// dropping them.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }
}

impl Transliterator for AsciiTransliterator {
    fn transliterate(&self, input: &str) -> String {
        if input.is_ascii() {
            return input.to_string();
        }
        deunicode_with_tofu(input, &self.placeholder)
    }
}

/// Transliterate with the default [`AsciiTransliterator`].
pub fn transliterate(input: &str) -> String {
    AsciiTransliterator::new().transliterate(input)
}

/// Transliterate with a caller-provided transform.
pub fn transliterate_with(input: &str, transliterator: &dyn Transliterator) -> String {
    transliterator.transliterate(input)
}
