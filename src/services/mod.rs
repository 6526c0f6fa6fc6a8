//! Service layer for contactbook
//!
//! Services sequence the core operations for a user action and are shared
//! by every front end (the CLI today).

pub mod contact_book;

pub use contact_book::{AddOutcome, ContactBook, FieldEdit};
