//! Contact record
//!
//! A contact is the unit stored in the book. Its serialized form is the
//! snapshot format persisted in the blob store: `{id, name, phone}`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validator::{is_valid_name, is_valid_phone};

/// A stored contact
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier (UUID v4), stable for the record's lifetime
    pub id: String,

    /// Full name, e.g. "Jane Doe"
    pub name: String,

    /// Phone number, e.g. "04141234567"
    pub phone: String,
}

impl Contact {
    /// Create a new contact with a freshly generated ID
    ///
    /// Does not validate; callers check the fields first.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, phone)
    }

    /// Create a contact with a known ID (edits and snapshot loading)
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Whether both fields currently satisfy the format rules
    pub fn is_valid(&self) -> bool {
        is_valid_name(&self.name) && is_valid_phone(&self.phone)
    }
}
