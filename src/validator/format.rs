//! Format rules for contact fields
//!
//! Names are two capitalised words separated by a single space. Phones are an
//! 11-digit number starting with one of the accepted carrier prefixes.

use regex::Regex;
use std::sync::LazyLock;

/// Carrier and area prefixes accepted at the start of a phone number
pub const PHONE_PREFIXES: &[&str] = &["0212", "0412", "0424", "0414", "0426", "0416"];

/// Number of digits that follow the prefix
pub const PHONE_SUBSCRIBER_DIGITS: usize = 7;

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]* [A-Z][a-z]*$").expect("name pattern is a valid regex")
});

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(?:{})[0-9]{{{}}}$",
        PHONE_PREFIXES.join("|"),
        PHONE_SUBSCRIBER_DIGITS
    );
    Regex::new(&pattern).expect("phone pattern is a valid regex")
});

/// Check a full name: exactly two words, each one uppercase ASCII letter
/// followed by zero or more lowercase ASCII letters.
pub fn is_valid_name(s: &str) -> bool {
    NAME_REGEX.is_match(s)
}

/// Check a phone number: one of [`PHONE_PREFIXES`] followed by exactly seven
/// ASCII digits.
pub fn is_valid_phone(s: &str) -> bool {
    PHONE_REGEX.is_match(s)
}

/// Which contact field a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
}

impl Field {
    /// Get display name for the field
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
        }
    }

    /// Human-readable description of the expected format
    pub fn hint(&self) -> &'static str {
        match self {
            Field::Name => "two words, each capitalised (e.g. \"Jane Doe\")",
            Field::Phone => "0212/0412/0424/0414/0426/0416 followed by 7 digits",
        }
    }

    /// Run the rule for this field
    pub fn check(&self, value: &str) -> bool {
        match self {
            Field::Name => is_valid_name(value),
            Field::Phone => is_valid_phone(value),
        }
    }
}
