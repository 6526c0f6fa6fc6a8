use super::Settings;
use crate::services::ContactBook;
use crate::store::BlobStore;
use crate::ui::{render_html, render_text};
use crate::Result;
use colored::Colorize;

pub fn run(settings: &Settings, json: bool, html: bool) -> Result<()> {
    let book = settings.open_book()?;
    print!("{}", run_impl(&book, json, html)?);
    Ok(())
}

/// Internal implementation that accepts a book for testability.
/// Returns the text to print.
fn run_impl<B: BlobStore>(book: &ContactBook<B>, json: bool, html: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(book.contacts())?;
        out.push('\n');
        return Ok(out);
    }

    let view = book.rows();
    if html {
        return Ok(render_html(&view));
    }

    let mut out = format!("{}\n\n", "📇 Contacts".cyan().bold());
    out.push_str(&render_text(&view));
    if view.is_visible() {
        out.push_str(&format!(
            "\n{}\n",
            format!("{} contact(s)", view.rows.len()).dimmed()
        ));
    } else {
        out.push_str("\n\n");
    }

    Ok(out)
}
