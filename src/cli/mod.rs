pub mod add;
pub mod check;
pub mod edit;
pub mod list;
pub mod remove;

use crate::models::{ContactBookConfig, FieldMarkers};
use crate::services::ContactBook;
use crate::store::FileBlobStore;
use crate::Result;
use anyhow::Context;
use colored::Colorize;
use std::path::PathBuf;

/// Global options shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Config file (defaults to the platform config dir)
    pub config: Option<PathBuf>,
    /// Overrides `storage_path` from the config file
    pub store: Option<PathBuf>,
    /// Back up a malformed snapshot and start empty instead of failing
    pub reset_corrupt: bool,
}

impl Settings {
    /// Resolve the effective configuration
    pub fn resolve(&self) -> Result<ContactBookConfig> {
        let config_path = self
            .config
            .clone()
            .unwrap_or_else(ContactBookConfig::default_path);
        let mut config = ContactBookConfig::load(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;

        if let Some(store) = &self.store {
            config.storage_path = store.clone();
        }
        Ok(config)
    }

    /// Open the contact book described by these settings
    pub fn open_book(&self) -> Result<ContactBook<FileBlobStore>> {
        let config = self.resolve()?;
        let blobs = FileBlobStore::new(&config.storage_path);
        let book = if self.reset_corrupt {
            ContactBook::open_or_reset(blobs, &config.storage_key)?
        } else {
            ContactBook::open(blobs, &config.storage_key)
                .context("Run again with --reset-corrupt to back up the data and start empty")?
        };
        let book = book.with_pretty(config.pretty);

        if !book.invalid_on_load().is_empty() {
            eprintln!(
                "{}",
                format!(
                    "⚠️  {} stored contact(s) do not match the name/phone format",
                    book.invalid_on_load().len()
                )
                .yellow()
            );
        }
        if !book.duplicates_on_load().is_empty() {
            eprintln!(
                "{}",
                format!(
                    "⚠️  stored contacts repeat id(s): {}",
                    book.duplicates_on_load().join(", ")
                )
                .yellow()
            );
        }
        Ok(book)
    }
}

/// Print one line per failing field
pub(crate) fn report_markers(markers: &FieldMarkers) {
    for field in markers.failing() {
        println!(
            "   {} {}: expected {}",
            "✗".red(),
            field.name(),
            field.hint()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn settings(temp_dir: &TempDir, reset_corrupt: bool) -> Settings {
        Settings {
            config: Some(temp_dir.path().join("config.toml")),
            store: Some(temp_dir.path().join("contacts.json")),
            reset_corrupt,
        }
    }

    #[test]
    fn test_store_flag_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = settings(&temp_dir, false).resolve().unwrap();
        assert_eq!(config.storage_path, temp_dir.path().join("contacts.json"));
        assert_eq!(config.storage_key, "contactsList");
    }

    #[test]
    fn test_corrupt_store_needs_reset_flag() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("contacts.json"), "{ truncated").unwrap();

        let err = settings(&temp_dir, false).open_book().err().unwrap();
        assert!(format!("{:#}", err).contains("--reset-corrupt"));
        assert!(temp_dir.path().join("contacts.json").exists());

        let book = settings(&temp_dir, true).open_book().unwrap();
        assert!(book.contacts().is_empty());
        assert!(temp_dir.path().join("contacts.json.bak").exists());
    }
}
