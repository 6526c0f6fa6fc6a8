pub mod format;

pub use format::{is_valid_name, is_valid_phone, Field, PHONE_PREFIXES};
