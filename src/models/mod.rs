pub mod config;
pub mod contact;
pub mod validation;

pub use config::{ConfigError, ContactBookConfig, DEFAULT_STORAGE_KEY};
pub use contact::Contact;
pub use validation::{FieldMarkers, FieldState};
