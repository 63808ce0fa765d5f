//! TOML-based application configuration.
//!
//! Stores the backend base URLs and UI preferences at
//! `~/.config/studywell/config.toml`. Loading falls back to defaults on any
//! error so a missing or corrupt file never blocks the app; dotted-path
//! `get`/`set` back the CLI's `config` subcommand.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;

/// Backend endpoints. The subjects and habits services listen on separate
/// ports; profile submission goes to the subjects service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_subjects_url")]
    pub subjects_url: String,
    #[serde(default = "default_habits_url")]
    pub habits_url: String,
}

/// UI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studywell/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

// Default functions
fn default_subjects_url() -> String {
    "http://127.0.0.1:5000".to_string()
}
fn default_habits_url() -> String {
    "http://127.0.0.1:5001".to_string()
}
fn default_accent_color() -> String {
    "#4CAF50".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            subjects_url: default_subjects_url(),
            habits_url: default_habits_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            accent_color: default_accent_color(),
        }
    }
}

impl Config {
    fn path() -> std::io::Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::path()
            .ok()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::SaveFailed {
            path: PathBuf::from("~/.config/studywell/config.toml"),
            message: e.to_string(),
        })?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read a value by dotted path, e.g. `api.subjects_url`.
    pub fn get(&self, key: &str) -> Option<String> {
        let root = serde_json::to_value(self).ok()?;
        let mut current = &root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(match current {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Set a value by dotted path, coercing to the key's existing type.
    /// Does not save; the caller decides when to persist.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut root = serde_json::to_value(&self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        let leaf = lookup_mut(&mut root, key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        let coerced = coerce(leaf, key, value)?;
        *leaf = coerced;

        *self = serde_json::from_value(root).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

fn lookup_mut<'a>(
    root: &'a mut serde_json::Value,
    key: &str,
) -> Option<&'a mut serde_json::Value> {
    let mut current = root;
    for part in key.split('.') {
        current = current.get_mut(part)?;
    }
    Some(current)
}

/// Parse `value` with the same JSON type the key currently holds.
fn coerce(
    existing: &serde_json::Value,
    key: &str,
    value: &str,
) -> Result<serde_json::Value, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    };
    match existing {
        serde_json::Value::Bool(_) => value
            .parse::<bool>()
            .map(serde_json::Value::Bool)
            .map_err(|e| invalid(e.to_string())),
        serde_json::Value::Number(_) => {
            if let Ok(n) = value.parse::<i64>() {
                Ok(serde_json::Value::Number(n.into()))
            } else if let Ok(n) = value.parse::<f64>() {
                serde_json::Number::from_f64(n)
                    .map(serde_json::Value::Number)
                    .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))
            } else {
                Err(invalid(format!("cannot parse '{value}' as number")))
            }
        }
        serde_json::Value::String(_) => Ok(serde_json::Value::String(value.to_string())),
        _ => Err(invalid("key does not hold a settable value".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.api.subjects_url, "http://127.0.0.1:5000");
        assert_eq!(config.api.habits_url, "http://127.0.0.1:5001");
        assert!(!config.ui.dark_mode);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.ui.dark_mode = true;
        config.api.habits_url = "http://localhost:9001".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::LoadFailed { .. })));
    }

    #[test]
    fn dotted_get() {
        let config = Config::default();
        assert_eq!(
            config.get("api.subjects_url").as_deref(),
            Some("http://127.0.0.1:5000")
        );
        assert_eq!(config.get("ui.dark_mode").as_deref(), Some("false"));
        assert_eq!(config.get("no.such.key"), None);
    }

    #[test]
    fn dotted_set_coerces_types() {
        let mut config = Config::default();
        config.set("ui.dark_mode", "true").unwrap();
        assert!(config.ui.dark_mode);

        config.set("api.habits_url", "http://localhost:9001").unwrap();
        assert_eq!(config.api.habits_url, "http://localhost:9001");

        assert!(matches!(
            config.set("ui.dark_mode", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("ui.missing", "x"),
            Err(ConfigError::UnknownKey(_))
        ));
    }
}
