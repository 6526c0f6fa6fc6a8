//! Contact book configuration (`config.toml`)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Key the contact snapshot is stored under
pub const DEFAULT_STORAGE_KEY: &str = "contactsList";

/// Errors loading or saving the configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Contact book configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactBookConfig {
    /// File backing the blob store
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,

    /// Blob key holding the serialized contact list
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Pretty-print the persisted JSON
    #[serde(default)]
    pub pretty: bool,
}

fn default_storage_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("contactbook")
        .join("contacts.json")
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for ContactBookConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            storage_key: default_storage_key(),
            pretty: false,
        }
    }
}

impl ContactBookConfig {
    /// Default location of `config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("contactbook")
            .join("config.toml")
    }

    /// Load config from a TOML file, falling back to defaults if it is missing
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: ContactBookConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a TOML file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = ContactBookConfig::load(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config.storage_key, "contactsList");
        assert!(!config.pretty);
        assert!(config.storage_path.ends_with("contactbook/contacts.json"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "pretty = true\n").unwrap();

        let config = ContactBookConfig::load(&path).unwrap();
        assert!(config.pretty);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/config.toml");

        let config = ContactBookConfig {
            storage_path: temp_dir.path().join("book.json"),
            storage_key: "work".to_string(),
            pretty: true,
        };
        config.save(&path).unwrap();

        let loaded = ContactBookConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "pretty = [").unwrap();

        let err = ContactBookConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
