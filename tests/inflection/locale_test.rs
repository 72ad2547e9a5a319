//! Locale loading, isolation and reset.

use std::fs;

use inflection::{Direction, InflectionError, Inflector, LocaleSource, DEFAULT_LOCALE};

fn english() -> Inflector {
    let inflector = Inflector::new();
    inflector.load(DEFAULT_LOCALE, None).unwrap();
    inflector
}

#[test]
fn test_load_english() {
    let inflector = Inflector::new();
    inflector.load(DEFAULT_LOCALE, None).unwrap();
    assert_eq!(inflector.singularize("posts", DEFAULT_LOCALE), "post");
    assert_eq!(inflector.pluralize("post", DEFAULT_LOCALE), "posts");
}

#[test]
fn test_load_french() {
    let inflector = Inflector::new();
    inflector.load("fr", None).unwrap();
    assert_eq!(inflector.singularize("bateaux", "fr"), "bateau");
    assert_eq!(inflector.pluralize("bateau", "fr"), "bateaux");
    assert_eq!(inflector.pluralize("monsieur", "fr"), "messieurs");
    assert_eq!(inflector.singularize("mesdemoiselles", "fr"), "mademoiselle");
}

#[test]
fn test_load_spanish() {
    let inflector = Inflector::new();
    inflector.load("es", None).unwrap();
    assert_eq!(inflector.singularize("ediciones", "es"), "edición");
    assert_eq!(inflector.pluralize("edición", "es"), "ediciones");
    assert_eq!(inflector.pluralize("carácter", "es"), "caracteres");
    assert_eq!(inflector.singularize("caracteres", "es"), "carácter");
    assert_eq!(inflector.pluralize("luz", "es"), "luces");
}

#[test]
fn test_load_from_callback() {
    let inflector = Inflector::new();
    let source = LocaleSource::callback(|store, locale| {
        store.singular("x$", "", locale)?;
        store.plural("([^x])$", "${1}x", locale)
    });
    inflector.load("zz", Some(source)).unwrap();
    assert_eq!(inflector.singularize("abcdefx", "zz"), "abcdef");
    assert_eq!(inflector.pluralize("abcdef", "zz"), "abcdefx");
}

#[test]
fn test_load_all_builtin_locales() {
    let inflector = Inflector::new();
    inflector.load(DEFAULT_LOCALE, None).unwrap();
    inflector.load("fr", None).unwrap();
    inflector.load("es", None).unwrap();

    assert_eq!(inflector.singularize("taxes", DEFAULT_LOCALE), "tax");
    assert_eq!(inflector.pluralize("tax", DEFAULT_LOCALE), "taxes");
    assert_eq!(inflector.singularize("bateaux", "fr"), "bateau");
    assert_eq!(inflector.pluralize("bateau", "fr"), "bateaux");
    assert_eq!(inflector.singularize("ediciones", "es"), "edición");
    assert_eq!(inflector.pluralize("edición", "es"), "ediciones");
    assert_eq!(inflector.locales(), vec!["default", "es", "fr"]);
}

#[test]
fn test_load_invalid_locale() {
    let err = Inflector::new().load("goa'uld", None).unwrap_err();
    assert!(matches!(err, InflectionError::UnknownLocale { ref locale } if locale == "goa'uld"));
    assert_eq!(err.to_string(), "unable to load the `goa'uld` locale");
}

#[test]
fn test_load_invalid_source() {
    let inflector = Inflector::new();
    let err = inflector
        .load("auto", Some(LocaleSource::File("not/a/closure".into())))
        .unwrap_err();
    assert_eq!(err.to_string(), "unable to load the `auto` locale");
    assert!(inflector.locales().is_empty());
}

#[test]
fn test_load_malformed_inline_bundle() {
    let inflector = Inflector::new();
    let err = inflector
        .load("zz", Some(LocaleSource::Toml("[[rules]]\nkind = 3\n".to_string())))
        .unwrap_err();
    assert!(matches!(err, InflectionError::BundleParse { .. }));
    assert!(inflector.locales().is_empty());
}

#[test]
fn test_load_from_bundle_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("pt.toml"),
        r#"
[[rules]]
kind = "singular"
pattern = 's$'
replacement = ''

[[rules]]
kind = "plural"
pattern = '([aeiou])$'
replacement = '${1}s'

[[rules]]
kind = "plural"
pattern = 'ão$'
replacement = 'ões'
"#,
    )
    .unwrap();

    let inflector = Inflector::new();
    inflector.add_bundle_dir(dir.path());
    inflector.load("pt", None).unwrap();

    assert_eq!(inflector.pluralize("casa", "pt"), "casas");
    assert_eq!(inflector.pluralize("canção", "pt"), "canções");
    assert_eq!(inflector.singularize("casas", "pt"), "casa");
}

#[test]
fn test_load_from_file_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        "[[rules]]\nkind = \"irregular\"\nsinglar = \"a\"\nplural = \"b\"\n",
    )
    .unwrap();

    // Misspelled field: the bundle is rejected.
    let inflector = Inflector::new();
    let err = inflector.load("zz", Some(LocaleSource::File(path.clone()))).unwrap_err();
    assert!(matches!(err, InflectionError::BundleParse { .. }));

    fs::write(
        &path,
        "[[rules]]\nkind = \"irregular\"\nsingular = \"foot\"\nplural = \"feet\"\n",
    )
    .unwrap();
    inflector.load("zz", Some(LocaleSource::File(path))).unwrap();
    assert_eq!(inflector.pluralize("BigFoot", "zz"), "BigFeet");
    assert_eq!(inflector.singularize("feet", "zz"), "foot");
}

#[test]
fn test_plural_rule_is_locale_scoped() {
    let inflector = english();
    inflector.plural("(bye)$", "Good ${1}", "fr").unwrap();
    assert_ne!(inflector.pluralize("bye", DEFAULT_LOCALE), "Good bye");
    assert_eq!(inflector.pluralize("bye", "fr"), "Good bye");
    assert_eq!(inflector.pluralize("bye", "es"), "bye");
}

#[test]
fn test_singular_rule_is_locale_scoped() {
    let inflector = english();
    inflector.singular("(bye)$", "Good ${1}", "fr").unwrap();
    assert_ne!(inflector.singularize("bye", DEFAULT_LOCALE), "Good bye");
    assert_eq!(inflector.singularize("bye", "fr"), "Good bye");
}

#[test]
fn test_reset_clears_everything() {
    let inflector = english();
    inflector.load("fr", None).unwrap();
    inflector.reset(None);

    assert_eq!(inflector.singularize("posts", DEFAULT_LOCALE), "posts");
    assert_eq!(inflector.pluralize("post", DEFAULT_LOCALE), "post");
    assert_eq!(inflector.pluralize("bateau", "fr"), "bateau");
    assert!(inflector.locales().is_empty());
}

#[test]
fn test_reset_one_locale() {
    let inflector = english();
    inflector.load("fr", None).unwrap();
    inflector.reset(Some("fr"));

    assert_eq!(inflector.pluralize("bateau", "fr"), "bateau");
    assert_eq!(inflector.pluralize("post", DEFAULT_LOCALE), "posts");
    assert_eq!(inflector.rules(Direction::Plural, "fr").len(), 0);
}

#[test]
fn test_reset_then_reload() {
    let inflector = english();
    inflector.reset(None);
    inflector.load(DEFAULT_LOCALE, None).unwrap();
    assert_eq!(inflector.pluralize("child", DEFAULT_LOCALE), "children");
}

#[test]
fn test_auto_alias_loads_english_under_its_own_name() {
    let inflector = Inflector::new();
    inflector.load("auto", None).unwrap();
    assert_eq!(inflector.pluralize("person", "auto"), "people");
    assert_eq!(inflector.pluralize("person", DEFAULT_LOCALE), "person");
}
