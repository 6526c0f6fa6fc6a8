//! Snapshot persistence: the contact list as a JSON array in a blob store

use std::collections::HashSet;

use tracing::{debug, warn};

use super::blob::BlobStore;
use crate::models::Contact;

/// Errors reading or writing the persisted snapshot
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Failed to read blob store: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write blob store: {0}")]
    Write(#[source] std::io::Error),

    #[error("Malformed data under '{key}': {message}")]
    Parse { key: String, message: String },

    #[error("Failed to serialize contacts: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// What was found when loading a snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Contacts in persisted order
    pub contacts: Vec<Contact>,

    /// Whether a blob existed under the key
    pub found: bool,

    /// IDs of loaded records whose name or phone fails validation
    ///
    /// Such records are kept as-is; this only surfaces them.
    pub invalid_ids: Vec<String>,

    /// IDs that occur more than once, each listed once in first-seen order
    pub duplicate_ids: Vec<String>,
}

/// Load the contact list stored under `key`
///
/// A missing blob (or a JSON `null`) yields an empty list. Structurally
/// malformed data is a [`PersistenceError::Parse`].
pub fn load_snapshot<B: BlobStore + ?Sized>(
    blobs: &B,
    key: &str,
) -> Result<LoadReport, PersistenceError> {
    let Some(raw) = blobs.get(key)? else {
        debug!(key, "no persisted snapshot, starting empty");
        return Ok(LoadReport::default());
    };

    let contacts = serde_json::from_str::<Option<Vec<Contact>>>(&raw)
        .map_err(|e| PersistenceError::Parse {
            key: key.to_string(),
            message: e.to_string(),
        })?
        .unwrap_or_default();

    let invalid_ids: Vec<String> = contacts
        .iter()
        .filter(|c| !c.is_valid())
        .map(|c| c.id.clone())
        .collect();

    if !invalid_ids.is_empty() {
        warn!(
            key,
            count = invalid_ids.len(),
            "persisted snapshot contains contacts that fail validation; keeping them as-is"
        );
    }

    let duplicate_ids = repeated_ids(&contacts);

    if !duplicate_ids.is_empty() {
        warn!(
            key,
            ids = ?duplicate_ids,
            "persisted snapshot repeats contact ids; edits reach only the first, removal drops all"
        );
    }

    debug!(key, count = contacts.len(), "loaded persisted snapshot");

    Ok(LoadReport {
        contacts,
        found: true,
        invalid_ids,
        duplicate_ids,
    })
}

fn repeated_ids(contacts: &[Contact]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut repeated: Vec<String> = Vec::new();
    for contact in contacts {
        if !seen.insert(contact.id.as_str()) && !repeated.contains(&contact.id) {
            repeated.push(contact.id.clone());
        }
    }
    repeated
}

/// Serialize `contacts` and store them under `key`
pub fn save_snapshot<B: BlobStore + ?Sized>(
    blobs: &mut B,
    key: &str,
    contacts: &[Contact],
    pretty: bool,
) -> Result<(), PersistenceError> {
    let content = if pretty {
        serde_json::to_string_pretty(contacts)?
    } else {
        serde_json::to_string(contacts)?
    };

    blobs.set(key, &content)?;
    debug!(key, count = contacts.len(), "saved snapshot");
    Ok(())
}
