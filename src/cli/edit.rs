use super::{report_markers, Settings};
use crate::services::{ContactBook, FieldEdit};
use crate::session::ToggleOutcome;
use crate::store::BlobStore;
use crate::Result;
use colored::Colorize;

pub fn run(settings: &Settings, id: &str, name: Option<&str>, phone: Option<&str>) -> Result<()> {
    let mut book = settings.open_book()?;
    run_impl(&mut book, id, name, phone)
}

/// Drive one edit session: open the row, type the new values, commit.
/// Fields not given keep their current value.
fn run_impl<B: BlobStore>(
    book: &mut ContactBook<B>,
    id: &str,
    name: Option<&str>,
    phone: Option<&str>,
) -> Result<()> {
    let Some(ToggleOutcome::Opened) = book.toggle_edit(id)? else {
        anyhow::bail!("Contact '{}' not found", id);
    };

    if let Some(name) = name {
        book.edit_field(id, FieldEdit::Name(name.to_string()));
    }
    if let Some(phone) = phone {
        book.edit_field(id, FieldEdit::Phone(phone.to_string()));
    }

    match book.toggle_edit(id)? {
        Some(ToggleOutcome::Committed { applied: true }) => {
            println!("{}", "✅ Contact updated".green());
            Ok(())
        }
        Some(ToggleOutcome::Rejected(markers)) => {
            println!("{}", "Contact not updated:".red().bold());
            report_markers(&markers);
            anyhow::bail!("invalid contact details")
        }
        _ => anyhow::bail!("Contact '{}' not found", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::AddOutcome;
    use crate::store::MemoryBlobStore;

    fn book_with_one() -> (ContactBook<MemoryBlobStore>, String) {
        let mut book = ContactBook::open(MemoryBlobStore::new(), "contactsList").unwrap();
        let AddOutcome::Added(id) = book.add_contact("Jane Doe", "04141234567").unwrap() else {
            panic!("add failed");
        };
        (book, id)
    }

    #[test]
    fn test_edit_single_field() {
        let (mut book, id) = book_with_one();
        run_impl(&mut book, &id, None, Some("02129876543")).unwrap();

        let contact = book.find(&id).unwrap();
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.phone, "02129876543");
    }

    #[test]
    fn test_edit_invalid_keeps_record() {
        let (mut book, id) = book_with_one();
        assert!(run_impl(&mut book, &id, Some("bob x"), None).is_err());
        assert_eq!(book.find(&id).unwrap().name, "Jane Doe");
    }

    #[test]
    fn test_edit_unknown_id() {
        let (mut book, _) = book_with_one();
        assert!(run_impl(&mut book, "missing", Some("Bob Ruiz"), None).is_err());
    }
}
