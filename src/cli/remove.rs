use super::Settings;
use crate::services::ContactBook;
use crate::store::BlobStore;
use crate::Result;
use colored::Colorize;

pub fn run(settings: &Settings, id: &str) -> Result<()> {
    let mut book = settings.open_book()?;
    run_impl(&mut book, id)?;
    Ok(())
}

/// Internal implementation that accepts a book for testability.
/// Returns whether a contact was removed.
fn run_impl<B: BlobStore>(book: &mut ContactBook<B>, id: &str) -> Result<bool> {
    let removed = book.delete_contact(id)?;
    if removed {
        println!("{}", "🗑  Contact removed".green());
    } else {
        println!("{}", format!("No contact with id '{}'", id).yellow());
    }
    Ok(removed)
}
