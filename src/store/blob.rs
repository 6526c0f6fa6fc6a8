//! Key-value blob stores backing persistence
//!
//! A blob store holds opaque strings under string keys, like browser
//! `localStorage`. The contact book uses a single key for its snapshot.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::warn;

use super::snapshot::PersistenceError;

/// Abstract key-value blob store
pub trait BlobStore {
    /// Read the blob stored under `key`, `None` if nothing is stored
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Store `value` under `key`, replacing any previous blob
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Move an unreadable container aside so the store can start empty
    ///
    /// Returns whether anything was moved. Stores that cannot be corrupt as
    /// a whole keep the default.
    fn discard_corrupt(&mut self) -> Result<bool, PersistenceError> {
        Ok(false)
    }
}

/// Volatile blob store (tests and throwaway sessions)
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Blob store backed by a single JSON file mapping keys to strings
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    path: PathBuf,
}

impl FileBlobStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where [`BlobStore::discard_corrupt`] moves a corrupt file
    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }

    fn read_all(&self) -> Result<HashMap<String, String>, PersistenceError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(PersistenceError::Read)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }

        serde_json::from_str(&content).map_err(|e| PersistenceError::Parse {
            key: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Write the whole map atomically: temp file in the same directory,
    /// then persist over the target.
    fn write_all(&self, blobs: &HashMap<String, String>) -> Result<(), PersistenceError> {
        let content = serde_json::to_string_pretty(blobs)?;

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(PersistenceError::Write)?;

        let mut temp_file = NamedTempFile::new_in(parent).map_err(PersistenceError::Write)?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(PersistenceError::Write)?;
        temp_file.flush().map_err(PersistenceError::Write)?;

        temp_file
            .persist(&self.path)
            .map_err(|e| PersistenceError::Write(e.error))?;

        Ok(())
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut blobs = self.read_all()?;
        blobs.insert(key.to_string(), value.to_string());
        self.write_all(&blobs)
    }

    /// Rename a file that is not a key-to-string JSON object to
    /// `<file>.json.bak`
    fn discard_corrupt(&mut self) -> Result<bool, PersistenceError> {
        match self.read_all() {
            Err(PersistenceError::Parse { message, .. }) => {
                let backup_path = self.backup_path();
                warn!(
                    path = %self.path.display(),
                    backup = %backup_path.display(),
                    error = %message,
                    "blob store file is corrupt, moving it aside"
                );
                fs::rename(&self.path, &backup_path).map_err(PersistenceError::Write)?;
                Ok(true)
            }
            Err(e) => Err(e),
            Ok(_) => Ok(false),
        }
    }
}
