//! In-memory ordered contact collection

use crate::models::Contact;

/// Ordered sequence of contacts; insertion order is display order
///
/// The store trusts its boundary: fields are validated before a contact
/// reaches `add` or `update`, and IDs are generated by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot in display order
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    /// Find a contact by ID
    pub fn find(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Append a contact to the end
    pub fn add(&mut self, contact: Contact) {
        debug_assert!(
            self.find(&contact.id).is_none(),
            "duplicate contact id {}",
            contact.id
        );
        self.contacts.push(contact);
    }

    /// Remove the contact with `id`; no-op if absent
    pub fn remove(&mut self, id: &str) {
        self.contacts.retain(|c| c.id != id);
    }

    /// Replace the contact sharing `contact.id`; no-op if absent
    ///
    /// Returns whether a record was replaced.
    pub fn update(&mut self, contact: Contact) -> bool {
        match self.contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(slot) => {
                *slot = contact;
                true
            }
            None => false,
        }
    }

    /// Discard the current sequence and install `contacts` verbatim
    pub fn replace_all(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }

    /// Get the number of contacts
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Check if store is empty
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContactStore {
        let mut store = ContactStore::new();
        store.add(Contact::with_id("a", "Ana Ruiz", "04141234567"));
        store.add(Contact::with_id("b", "Bob Diaz", "04241234567"));
        store.add(Contact::with_id("c", "Cid Lopez", "02121234567"));
        store
    }

    #[test]
    fn test_add_appends_last() {
        let mut store = sample();
        let before = store.len();

        let contact = Contact::new("Dora Vale", "04161234567");
        store.add(contact.clone());

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.list().last(), Some(&contact));
    }

    #[test]
    fn test_remove_existing() {
        let mut store = sample();
        store.remove("b");

        let ids: Vec<_> = store.list().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = sample();
        let before = store.clone();

        store.remove("missing");
        store.remove("missing");

        assert_eq!(store, before);
    }

    #[test]
    fn test_update_replaces_only_target() {
        let mut store = sample();
        let original = store.list().to_vec();

        let replaced = store.update(Contact::with_id("b", "Bob Ruiz", "04261234567"));
        assert!(replaced);

        let list = store.list();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0], original[0]);
        assert_eq!(list[1], Contact::with_id("b", "Bob Ruiz", "04261234567"));
        assert_eq!(list[2], original[2]);
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut store = sample();
        let before = store.clone();

        let replaced = store.update(Contact::with_id("zzz", "Zed Zulu", "04141234567"));

        assert!(!replaced);
        assert_eq!(store, before);
    }

    #[test]
    fn test_replace_all_with_own_list_is_noop() {
        let mut store = sample();
        let before = store.clone();

        let snapshot = store.list().to_vec();
        store.replace_all(snapshot);

        assert_eq!(store, before);
    }

    #[test]
    fn test_replace_all_discards_previous() {
        let mut store = sample();
        store.replace_all(vec![Contact::with_id("x", "Xia Yu", "04121234567")]);

        assert_eq!(store.len(), 1);
        assert!(store.find("a").is_none());
        assert!(store.find("x").is_some());
    }
}
