// Contactbook - validated contact list with inline editing
// Contacts persist as a JSON snapshot in a key-value blob store

pub mod cli;
pub mod models;
pub mod services;
pub mod session;
pub mod store;
pub mod ui;
pub mod validator;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{Contact, ContactBookConfig, FieldMarkers, FieldState};
pub use services::{AddOutcome, ContactBook, FieldEdit};
pub use session::{EditMode, EditSession, EntryForm, ToggleOutcome};
pub use store::{BlobStore, ContactStore, FileBlobStore, MemoryBlobStore, PersistenceError};
pub use validator::{is_valid_name, is_valid_phone};
