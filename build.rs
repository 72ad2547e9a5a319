//! Build script for inflection.
//!
//! Validates the embedded locale bundles so a malformed TOML file fails the
//! build instead of the first `load()` call.

const BUNDLES: &[(&str, &str)] = &[
    ("src/locale/bundles/en.toml", include_str!("src/locale/bundles/en.toml")),
    ("src/locale/bundles/fr.toml", include_str!("src/locale/bundles/fr.toml")),
    ("src/locale/bundles/es.toml", include_str!("src/locale/bundles/es.toml")),
];

fn main() {
    for (path, content) in BUNDLES {
        validate_bundle(path, content);
        println!("cargo:rerun-if-changed={path}");
    }
    println!("cargo:rerun-if-changed=build.rs");
}

fn validate_bundle(path: &str, content: &str) {
    let value = match toml::from_str::<toml::Table>(content) {
        Ok(value) => value,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    match value.get("rules") {
        Some(toml::Value::Array(rules)) if !rules.is_empty() => {}
        _ => panic!("{path} must define a non-empty [[rules]] array"),
    }
}
