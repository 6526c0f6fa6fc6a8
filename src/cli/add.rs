use super::{report_markers, Settings};
use crate::services::{AddOutcome, ContactBook};
use crate::store::BlobStore;
use crate::Result;
use colored::Colorize;

pub fn run(settings: &Settings, name: &str, phone: &str) -> Result<()> {
    let mut book = settings.open_book()?;
    run_impl(&mut book, name, phone)
}

/// Internal implementation that accepts a book for testability.
fn run_impl<B: BlobStore>(book: &mut ContactBook<B>, name: &str, phone: &str) -> Result<()> {
    match book.add_contact(name, phone)? {
        AddOutcome::Added(id) => {
            println!("{}", "✅ Contact saved".green());
            println!("   {}", id.dimmed());
            Ok(())
        }
        AddOutcome::Rejected(markers) => {
            println!("{}", "Contact not saved:".red().bold());
            report_markers(&markers);
            anyhow::bail!("invalid contact details")
        }
    }
}
