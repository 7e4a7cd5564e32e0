//! TOML-based application configuration.
//!
//! Stores:
//! - Location of the date store
//! - Polling interval of the live display
//! - Notification preferences (on/off, sound file)
//!
//! Configuration is stored at `~/.config/goaltracker/config.toml` unless a
//! path is given explicitly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;

/// Notification configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Media file handed to the system opener when a goal is reached.
    #[serde(default = "default_sound")]
    pub sound: String,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Relative paths resolve against the working directory.
    #[serde(default = "default_dates_file")]
    pub dates_file: String,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

fn default_true() -> bool {
    true
}
fn default_sound() -> String {
    "music.mp3".into()
}
fn default_dates_file() -> String {
    "dates.txt".into()
}
fn default_tick_interval_ms() -> u64 {
    1000
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sound: default_sound(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dates_file: default_dates_file(),
            tick_interval_ms: default_tick_interval_ms(),
            notifications: NotificationsConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => value
                        .parse::<bool>()
                        .map(serde_json::Value::Bool)
                        .map_err(|e| invalid(e.to_string()))?,
                    serde_json::Value::Number(_) => value
                        .parse::<u64>()
                        .map(|n| serde_json::Value::Number(n.into()))
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?,
                    serde_json::Value::Object(_) => return Err(unknown()),
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Default location, `<data dir>/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from `path`, writing defaults there if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                tracing::info!(path = %path.display(), "wrote default configuration");
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };

        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Every leaf key with its value, in dot-path form.
    pub fn entries(&self) -> Vec<(String, String)> {
        fn walk(prefix: &str, value: &serde_json::Value, out: &mut Vec<(String, String)>) {
            match value {
                serde_json::Value::Object(map) => {
                    for (k, v) in map {
                        let key = if prefix.is_empty() {
                            k.clone()
                        } else {
                            format!("{prefix}.{k}")
                        };
                        walk(&key, v, out);
                    }
                }
                serde_json::Value::String(s) => out.push((prefix.to_string(), s.clone())),
                other => out.push((prefix.to_string(), other.to_string())),
            }
        }

        let mut out = Vec::new();
        if let Ok(json) = serde_json::to_value(self) {
            walk("", &json, &mut out);
        }
        out
    }

    /// Set a config value by key, keeping the existing value's type.
    ///
    /// Does not persist; call [`Config::save_to`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let mut json = serde_json::to_value(&*self).map_err(|e| invalid(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        Ok(())
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let parsed: Config = toml::from_str("dates_file = \"goals.txt\"").unwrap();
        assert_eq!(parsed.dates_file, "goals.txt");
        assert_eq!(parsed.tick_interval_ms, 1000);
        assert_eq!(parsed.notifications.sound, "music.mp3");
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("notifications.enabled").as_deref(), Some("true"));
        assert_eq!(cfg.get("tick_interval_ms").as_deref(), Some("1000"));
        assert_eq!(cfg.get("dates_file").as_deref(), Some("dates.txt"));
        assert!(cfg.get("notifications.missing_key").is_none());
        assert!(cfg.get("notifications").is_none());
    }

    #[test]
    fn set_updates_typed_values() {
        let mut cfg = Config::default();
        cfg.set("notifications.enabled", "false").unwrap();
        cfg.set("tick_interval_ms", "250").unwrap();
        cfg.set("notifications.sound", "chime.wav").unwrap();
        assert!(!cfg.notifications.enabled);
        assert_eq!(cfg.tick_interval_ms, 250);
        assert_eq!(cfg.notifications.sound, "chime.wav");
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("notifications.volume", "5"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(cfg.set("", "5"), Err(ConfigError::UnknownKey(_))));
        assert!(matches!(
            cfg.set("notifications", "5"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("notifications.enabled", "not_a_bool"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(cfg.set("tick_interval_ms", "-5").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.set("dates_file", "/tmp/goals.txt").unwrap();
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn load_from_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_interval_ms = \"fast\"").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }

    #[test]
    fn entries_lists_leaf_keys() {
        let keys: Vec<String> = Config::default().entries().into_iter().map(|(k, _)| k).collect();
        assert!(keys.contains(&"dates_file".to_string()));
        assert!(keys.contains(&"notifications.sound".to_string()));
        assert!(!keys.contains(&"notifications".to_string()));
    }
}
