//! Contact book service - the adapter between user actions and the core
//!
//! Each user action follows the same path: validate, mutate the store,
//! persist the snapshot, re-render. Re-rendering discards every open edit
//! session, so a mutation on one row abandons edits on the others.

use std::collections::HashMap;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::models::{Contact, FieldMarkers};
use crate::session::{EditSession, EntryForm, ToggleOutcome};
use crate::store::{
    load_snapshot, save_snapshot, BlobStore, ContactStore, LoadReport, PersistenceError,
};
use crate::ui::{project, ListView};

/// Result of an add attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Stored under the new ID
    Added(String),
    /// One or both fields failed validation; nothing was stored
    Rejected(FieldMarkers),
}

/// Which working field an edit targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    Phone(String),
}

/// Persistent contact book
pub struct ContactBook<B: BlobStore> {
    store: ContactStore,
    blobs: B,
    key: String,
    pretty: bool,
    sessions: HashMap<String, EditSession>,
    invalid_on_load: Vec<String>,
    duplicates_on_load: Vec<String>,
}

impl<B: BlobStore> ContactBook<B> {
    /// Load the persisted snapshot under `key` and install it
    ///
    /// Malformed data is returned as an error and left untouched.
    pub fn open(blobs: B, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let report = load_snapshot(&blobs, &key)
            .with_context(|| format!("Failed to load contacts from '{}'", key))?;
        Ok(Self::from_report(blobs, key, report))
    }

    /// Like [`ContactBook::open`], but recovers from a malformed snapshot
    ///
    /// If the blob store's own container is unreadable it is moved aside by
    /// [`BlobStore::discard_corrupt`]; otherwise the bad blob is copied to
    /// `<key>.bak`. Either way the book starts empty.
    pub fn open_or_reset(mut blobs: B, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let report = match load_snapshot(&blobs, &key) {
            Ok(report) => report,
            Err(PersistenceError::Parse { message, .. }) => {
                warn!(key = %key, error = %message, "malformed snapshot, backing up and starting fresh");
                let discarded = blobs
                    .discard_corrupt()
                    .with_context(|| format!("Failed to back up corrupt store for '{}'", key))?;
                if !discarded {
                    let backup_key = format!("{}.bak", key);
                    if let Some(raw) = blobs.get(&key)? {
                        blobs
                            .set(&backup_key, &raw)
                            .with_context(|| format!("Failed to back up '{}'", key))?;
                    }
                }
                save_snapshot(&mut blobs, &key, &[], false)
                    .with_context(|| format!("Failed to reset '{}'", key))?;
                LoadReport::default()
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to load contacts from '{}'", key))
            }
        };
        Ok(Self::from_report(blobs, key, report))
    }

    fn from_report(blobs: B, key: String, report: LoadReport) -> Self {
        let mut store = ContactStore::new();
        store.replace_all(report.contacts);
        Self {
            store,
            blobs,
            key,
            pretty: false,
            sessions: HashMap::new(),
            invalid_on_load: report.invalid_ids,
            duplicates_on_load: report.duplicate_ids,
        }
    }

    /// Pretty-print persisted JSON
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Current contacts in display order
    pub fn contacts(&self) -> &[Contact] {
        self.store.list()
    }

    pub fn find(&self, id: &str) -> Option<&Contact> {
        self.store.find(id)
    }

    /// IDs of persisted records that failed validation when loaded
    pub fn invalid_on_load(&self) -> &[String] {
        &self.invalid_on_load
    }

    /// IDs that appeared more than once in the persisted snapshot
    pub fn duplicates_on_load(&self) -> &[String] {
        &self.duplicates_on_load
    }

    /// Underlying blob store
    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    /// Validate and add a new contact
    ///
    /// The values go through an [`EntryForm`]; nothing is stored unless the
    /// form accepts the submission.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<AddOutcome> {
        let mut form = EntryForm::new();
        form.set_name(name);
        form.set_phone(phone);
        self.submit(&mut form)
    }

    /// Submit an entry form, clearing it on success
    pub fn submit(&mut self, form: &mut EntryForm) -> Result<AddOutcome> {
        let markers = form.markers();
        let Some(contact) = form.submit() else {
            return Ok(AddOutcome::Rejected(markers));
        };

        let id = contact.id.clone();
        self.store.add(contact);
        info!(id = %id, "contact added");

        self.sync()?;
        Ok(AddOutcome::Added(id))
    }

    /// Delete a contact; unknown IDs are ignored
    ///
    /// Returns whether a contact was removed.
    pub fn delete_contact(&mut self, id: &str) -> Result<bool> {
        let before = self.store.len();
        self.store.remove(id);
        let removed = self.store.len() != before;
        if removed {
            info!(id, "contact removed");
        } else {
            debug!(id, "no contact to remove");
        }
        self.sync()?;
        Ok(removed)
    }

    /// Press the row's edit control
    ///
    /// Opens the row for editing, or attempts to commit it. A successful
    /// commit persists and re-renders. Returns `None` if the row is not in
    /// the list.
    pub fn toggle_edit(&mut self, id: &str) -> Result<Option<ToggleOutcome>> {
        let Some(contact) = self.store.find(id) else {
            return Ok(None);
        };

        let session = self
            .sessions
            .entry(id.to_string())
            .or_insert_with(|| EditSession::new(contact));

        let outcome = session.toggle(&mut self.store);
        if let ToggleOutcome::Committed { .. } = outcome {
            self.sync()?;
        }
        Ok(Some(outcome))
    }

    /// Type into a row being edited; returns whether the change was applied
    pub fn edit_field(&mut self, id: &str, edit: FieldEdit) -> bool {
        let Some(session) = self.sessions.get_mut(id) else {
            return false;
        };
        match edit {
            FieldEdit::Name(value) => session.set_name(value),
            FieldEdit::Phone(value) => session.set_phone(value),
        }
    }

    /// Open edit session for a row, if any
    pub fn session(&self, id: &str) -> Option<&EditSession> {
        self.sessions.get(id)
    }

    /// Current view of the list
    pub fn rows(&self) -> ListView {
        project(self.store.list(), &self.sessions)
    }

    /// Persist the snapshot, then rebuild the view from scratch
    ///
    /// The re-render runs even when the write fails; the error is returned
    /// and the in-memory change is kept.
    fn sync(&mut self) -> Result<()> {
        let saved = save_snapshot(&mut self.blobs, &self.key, self.store.list(), self.pretty)
            .with_context(|| format!("Failed to save contacts to '{}'", self.key));
        self.rerender();
        saved
    }

    fn rerender(&mut self) {
        self.sessions.clear();
    }
}
