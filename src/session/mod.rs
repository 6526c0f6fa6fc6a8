//! Interactive editing state: the per-row edit machine and the entry form

mod edit;
mod form;

pub use edit::{EditMode, EditSession, ToggleOutcome};
pub use form::EntryForm;
