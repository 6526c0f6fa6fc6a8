//! New-contact entry form
//!
//! Mirrors the add form: each field is checked as it changes and submission
//! is only possible once both are valid.

use crate::models::{Contact, FieldMarkers, FieldState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryForm {
    name: String,
    phone: String,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> FieldState {
        self.name = value.into();
        self.name_state()
    }

    pub fn set_phone(&mut self, value: impl Into<String>) -> FieldState {
        self.phone = value.into();
        self.phone_state()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn markers(&self) -> FieldMarkers {
        FieldMarkers::evaluate(&self.name, &self.phone)
    }

    pub fn name_state(&self) -> FieldState {
        self.markers().name
    }

    pub fn phone_state(&self) -> FieldState {
        self.markers().phone
    }

    /// Submit button enabled
    pub fn can_submit(&self) -> bool {
        self.markers().all_valid()
    }

    /// Build a contact with a fresh ID and clear the form
    ///
    /// Returns `None`, leaving the form untouched, when either field is
    /// invalid.
    pub fn submit(&mut self) -> Option<Contact> {
        if !self.can_submit() {
            return None;
        }
        let form = std::mem::take(self);
        Some(Contact::new(form.name, form.phone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_shows_no_markers() {
        let form = EntryForm::new();
        assert_eq!(form.name_state(), FieldState::Empty);
        assert_eq!(form.phone_state(), FieldState::Empty);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_live_field_states() {
        let mut form = EntryForm::new();
        assert_eq!(form.set_name("Jan"), FieldState::Invalid);
        assert_eq!(form.set_name("Jane Doe"), FieldState::Valid);
        assert_eq!(form.set_phone("0414"), FieldState::Invalid);
        assert!(!form.can_submit());
        assert_eq!(form.set_phone(""), FieldState::Empty);
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut form = EntryForm::new();
        form.set_name("Jane Doe");
        assert_eq!(form.submit(), None);
        assert_eq!(form.name(), "Jane Doe");
    }

    #[test]
    fn test_submit_builds_contact_and_clears() {
        let mut form = EntryForm::new();
        form.set_name("Jane Doe");
        form.set_phone("04161234567");
        assert!(form.can_submit());

        let contact = form.submit().unwrap();
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.phone, "04161234567");
        assert!(!contact.id.is_empty());

        assert_eq!(form, EntryForm::new());
    }
}
