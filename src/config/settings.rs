//! TOML-based configuration.
//!
//! Supports a config file (inflection.toml) with environment variable
//! expansion in bundle directories.
//!
//! Example configuration:
//! ```toml
//! # Locale used by the CLI when --locale is not given.
//! default_locale = "default"
//!
//! # Locales loaded on startup, in addition to the default one.
//! preload = ["fr", "es"]
//!
//! # Directories searched for <locale>.toml bundle files.
//! bundle_dirs = ["${HOME}/.inflection/locales", "./locales"]
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::inflector::DEFAULT_LOCALE;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "INFLECTION_CONFIG";

/// Config files tried when `INFLECTION_CONFIG` is unset: `./inflection.toml`,
/// then `inflection/config.toml` under the user config directory.
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("inflection.toml")];
    paths.extend(dirs::config_dir().map(|dir| dir.join("inflection").join("config.toml")));
    paths
}

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Locale used when none is given.
    pub default_locale: String,

    /// Locales loaded on startup.
    pub preload: Vec<String>,

    /// Directories searched for bundle files (supports ${ENV_VAR} expansion).
    pub bundle_dirs: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            preload: Vec::new(),
            bundle_dirs: Vec::new(),
        }
    }
}

impl Settings {
    /// Parse settings from the TOML file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => SettingsError::FileNotFound(path.to_path_buf()),
            _ => SettingsError::ReadError(err),
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Settings from the first config file found, or the defaults.
    ///
    /// A file named by `INFLECTION_CONFIG` must exist. Without it, the
    /// [`search_paths`] are tried in order.
    pub fn load() -> Result<Self, SettingsError> {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Self::from_file(PathBuf::from(path));
        }
        match search_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Bundle directories with environment variables expanded.
    pub fn resolved_bundle_dirs(&self) -> Result<Vec<PathBuf>, SettingsError> {
        self.bundle_dirs
            .iter()
            .map(|dir| expand_env_vars(dir).map(PathBuf::from))
            .collect()
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }
        let var_name: String = if chars.peek() == Some(&'{') {
            chars.next(); // consume '{'
            chars.by_ref().take_while(|&ch| ch != '}').collect()
        } else {
            let mut name = String::new();
            while let Some(&ch) = chars.peek() {
                if !(ch.is_alphanumeric() || ch == '_') {
                    break;
                }
                name.push(ch);
                chars.next();
            }
            if name.is_empty() {
                // Just a lone $, keep it
                result.push('$');
                continue;
            }
            name
        };
        let value =
            env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
        result.push_str(&value);
    }

    Ok(result)
}
