use serde::{Deserialize, Serialize};

use crate::validator::Field;

/// Visual state of a single input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FieldState {
    /// Nothing typed yet - no marker shown
    #[default]
    Empty,
    /// Value matches the format rule
    Valid,
    /// Value does not match the format rule
    Invalid,
}

impl FieldState {
    /// Evaluate a raw field value against its rule
    pub fn evaluate(field: Field, value: &str) -> Self {
        if value.is_empty() {
            FieldState::Empty
        } else if field.check(value) {
            FieldState::Valid
        } else {
            FieldState::Invalid
        }
    }

    /// Evaluate without the empty case: an empty value is invalid
    pub fn strict(field: Field, value: &str) -> Self {
        if field.check(value) {
            FieldState::Valid
        } else {
            FieldState::Invalid
        }
    }

    /// Get display symbol for the state
    pub fn symbol(&self) -> &'static str {
        match self {
            FieldState::Empty => " ",
            FieldState::Valid => "✓",
            FieldState::Invalid => "✗",
        }
    }

    /// CSS class used by the HTML renderer
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            FieldState::Empty => None,
            FieldState::Valid => Some("valid"),
            FieldState::Invalid => Some("invalid"),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, FieldState::Valid)
    }
}

/// Marker pair for a row or form: one state per field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldMarkers {
    pub name: FieldState,
    pub phone: FieldState,
}

impl FieldMarkers {
    /// Markers for a name/phone pair
    pub fn evaluate(name: &str, phone: &str) -> Self {
        Self {
            name: FieldState::evaluate(Field::Name, name),
            phone: FieldState::evaluate(Field::Phone, phone),
        }
    }

    /// Strict markers, used when a row commit is attempted
    pub fn strict(name: &str, phone: &str) -> Self {
        Self {
            name: FieldState::strict(Field::Name, name),
            phone: FieldState::strict(Field::Phone, phone),
        }
    }

    /// Both fields pass
    pub fn all_valid(&self) -> bool {
        self.name.is_valid() && self.phone.is_valid()
    }

    /// Fields that did not pass (empty counts as failing)
    pub fn failing(&self) -> Vec<Field> {
        let mut fields = Vec::new();
        if !self.name.is_valid() {
            fields.push(Field::Name);
        }
        if !self.phone.is_valid() {
            fields.push(Field::Phone);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_has_no_marker() {
        assert_eq!(FieldState::evaluate(Field::Name, ""), FieldState::Empty);
        assert_eq!(FieldState::Empty.css_class(), None);
    }

    #[test]
    fn test_evaluate_valid_and_invalid() {
        assert_eq!(
            FieldState::evaluate(Field::Name, "Jane Doe"),
            FieldState::Valid
        );
        assert_eq!(
            FieldState::evaluate(Field::Phone, "0414"),
            FieldState::Invalid
        );
    }

    #[test]
    fn test_strict_treats_empty_as_invalid() {
        assert_eq!(FieldState::strict(Field::Phone, ""), FieldState::Invalid);
        let markers = FieldMarkers::strict("", "04141234567");
        assert_eq!(markers.name, FieldState::Invalid);
        assert_eq!(markers.phone, FieldState::Valid);
    }

    #[test]
    fn test_markers_failing_fields() {
        let markers = FieldMarkers::evaluate("bob x", "04141234567");
        assert!(!markers.all_valid());
        assert_eq!(markers.failing(), vec![Field::Name]);

        let markers = FieldMarkers::evaluate("", "");
        assert_eq!(markers.failing(), vec![Field::Name, Field::Phone]);

        let markers = FieldMarkers::evaluate("Bob Ruiz", "04141234567");
        assert!(markers.all_valid());
        assert!(markers.failing().is_empty());
    }
}
