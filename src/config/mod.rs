//! Configuration for the inflection registry.
//!
//! Handles the settings file and environment variable expansion.

mod settings;

pub use settings::{expand_env_vars, search_paths, Settings, SettingsError, CONFIG_ENV};
