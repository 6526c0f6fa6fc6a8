//! Inline edit state machine for a single list row
//!
//! A row is either displayed read-only or being edited. One trigger,
//! [`EditSession::toggle`], drives both phases: from `Display` it opens the
//! row for editing; from `Editing` it attempts a commit, which only succeeds
//! (and returns to `Display`) when both fields validate.

use tracing::{debug, info};

use crate::models::{Contact, FieldMarkers};
use crate::store::ContactStore;

/// Row mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Read-only display (initial state)
    #[default]
    Display,
    /// Fields are mutable
    Editing,
}

/// Result of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// `Display` -> `Editing`
    Opened,
    /// Commit attempted with invalid content; still `Editing`
    Rejected(FieldMarkers),
    /// Commit succeeded; back in `Display`
    ///
    /// `applied` is false when the contact vanished from the store and the
    /// edit was dropped.
    Committed { applied: bool },
}

/// Editing state for one row, keyed by contact ID
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    contact_id: String,
    original: Contact,
    name: String,
    phone: String,
    mode: EditMode,
    markers: FieldMarkers,
}

impl EditSession {
    /// Start a session for `contact` in `Display` mode
    pub fn new(contact: &Contact) -> Self {
        Self {
            contact_id: contact.id.clone(),
            original: contact.clone(),
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            mode: EditMode::Display,
            markers: FieldMarkers::default(),
        }
    }

    pub fn contact_id(&self) -> &str {
        &self.contact_id
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    /// Working copy of the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Working copy of the phone
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Markers from the last rejected commit (empty otherwise)
    pub fn markers(&self) -> FieldMarkers {
        self.markers
    }

    /// Working copies differ from the record the session started from
    pub fn is_dirty(&self) -> bool {
        self.name != self.original.name || self.phone != self.original.phone
    }

    /// Change the working name. Ignored unless editing; returns whether it
    /// was applied.
    pub fn set_name(&mut self, value: impl Into<String>) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.name = value.into();
        true
    }

    /// Change the working phone. Ignored unless editing; returns whether it
    /// was applied.
    pub fn set_phone(&mut self, value: impl Into<String>) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.phone = value.into();
        true
    }

    /// Open the row for editing, or attempt to commit it
    pub fn toggle(&mut self, store: &mut ContactStore) -> ToggleOutcome {
        match self.mode {
            EditMode::Display => {
                self.mode = EditMode::Editing;
                self.markers = FieldMarkers::default();
                debug!(id = %self.contact_id, "row opened for editing");
                ToggleOutcome::Opened
            }
            EditMode::Editing => {
                let markers = FieldMarkers::strict(&self.name, &self.phone);
                if !markers.all_valid() {
                    self.markers = markers;
                    debug!(
                        id = %self.contact_id,
                        failing = ?markers.failing(),
                        "edit rejected, row stays editable"
                    );
                    return ToggleOutcome::Rejected(markers);
                }

                let edited = Contact::with_id(&self.contact_id, &self.name, &self.phone);
                let applied = store.update(edited.clone());
                if applied {
                    info!(id = %self.contact_id, "contact updated");
                } else {
                    debug!(id = %self.contact_id, "edited contact no longer exists, dropping edit");
                }

                self.original = edited;
                self.mode = EditMode::Display;
                self.markers = FieldMarkers::default();
                ToggleOutcome::Committed { applied }
            }
        }
    }
}
