//! Configuration handling

use crate::error::{ConfigError, Result};
use crate::state::{FormData, FormVariant};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormLiteConfig {
    /// Controller surface to expose
    pub variant: Option<FormVariant>,
    /// Values the form starts with and resets to
    pub initial_state: Option<FormData>,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: Option<String>,
}

impl FormLiteConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "form-lite", "form-lite")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)?;
        Ok(())
    }

    pub fn variant(&self) -> FormVariant {
        self.variant.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = FormLiteConfig::default();
        assert!(config.variant.is_none());
        assert!(config.initial_state.is_none());
        assert!(config.log_filter.is_none());
        assert_eq!(config.variant(), FormVariant::Full);
    }

    #[test]
    fn test_load_from_parses_initial_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"variant": "basic", "initial_state": {"name": "", "tags": ["a"], "age": 3}}"#,
        )
        .unwrap();

        let config = FormLiteConfig::load_from(&path).unwrap();
        assert_eq!(config.variant(), FormVariant::Basic);
        let state = config.initial_state.unwrap();
        assert_eq!(state.get("name"), Some(&FieldValue::from("")));
        assert_eq!(state.get("tags"), Some(&FieldValue::from(vec!["a"])));
        assert_eq!(state.get("age"), Some(&FieldValue::Number(3.0)));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = FormLiteConfig {
            log_filter: Some("form_lite=debug".to_string()),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(FormLiteConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FormLiteConfig::load_from(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = FormLiteConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }
}
