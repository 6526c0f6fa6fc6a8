//! List rendering
//!
//! Rendering is a pure projection of the store snapshot plus any open edit
//! sessions. Every mutation rebuilds the whole view; nothing is diffed.

use std::collections::HashMap;

use colored::Colorize;

use crate::models::{Contact, FieldMarkers, FieldState};
use crate::session::{EditMode, EditSession};

/// One displayed row, keyed by contact ID
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub mode: EditMode,
    pub markers: FieldMarkers,
}

/// Full list view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListView {
    pub rows: Vec<RowView>,
}

impl ListView {
    /// The list container is hidden when there is nothing to show
    pub fn is_visible(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn row(&self, id: &str) -> Option<&RowView> {
        self.rows.iter().find(|r| r.id == id)
    }
}

/// Build the view for `contacts`, overlaying open edit sessions
///
/// Rows being edited show the session's working values and markers.
pub fn project(contacts: &[Contact], sessions: &HashMap<String, EditSession>) -> ListView {
    let rows = contacts
        .iter()
        .map(|contact| match sessions.get(&contact.id) {
            Some(session) if session.is_editing() => RowView {
                id: contact.id.clone(),
                name: session.name().to_string(),
                phone: session.phone().to_string(),
                mode: EditMode::Editing,
                markers: session.markers(),
            },
            _ => RowView {
                id: contact.id.clone(),
                name: contact.name.clone(),
                phone: contact.phone.clone(),
                mode: EditMode::Display,
                markers: FieldMarkers::default(),
            },
        })
        .collect();

    ListView { rows }
}

/// Render the view as a terminal table
pub fn render_text(view: &ListView) -> String {
    if !view.is_visible() {
        return "No contacts yet.".dimmed().to_string();
    }

    let name_width = view
        .rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = String::new();
    // Pad before styling: ANSI escapes count toward `{:<width$}`.
    out.push_str(&format!(
        "{}  {}  {}\n",
        format!("{:<36}", "ID").bold(),
        format!("{:<width$}", "NAME", width = name_width).bold(),
        "PHONE".bold()
    ));

    for row in &view.rows {
        let editing = if row.mode == EditMode::Editing {
            format!("  {}", "(editing)".yellow())
        } else {
            String::new()
        };
        out.push_str(&format!(
            "{}  {}  {}{}\n",
            format!("{:<36}", row.id).dimmed(),
            mark_text(&format!("{:<width$}", row.name, width = name_width), row.markers.name),
            mark_text(&row.phone, row.markers.phone),
            editing
        ));
    }

    out
}

fn mark_text(value: &str, state: FieldState) -> String {
    match state {
        FieldState::Empty => value.to_string(),
        FieldState::Valid => value.green().to_string(),
        FieldState::Invalid => value.red().to_string(),
    }
}

/// Render the view as list markup
pub fn render_html(view: &ListView) -> String {
    let display = if view.is_visible() { "flex" } else { "none" };
    let mut out = format!(
        "<ul id=\"contacts-list\" style=\"display: {}\">\n",
        display
    );

    for row in &view.rows {
        let editing = row.mode == EditMode::Editing;
        out.push_str(&format!(
            r#"  <li class="contacts-list-item" id="{id}">
    <div class="inputs-container">
      <input class="{name_class}" type="text" value="{name}"{readonly}>
      <input class="{phone_class}" type="text" value="{phone}"{readonly}>
    </div>
    <div class="btns-container">
      <button class="{edit_class}">Edit</button>
      <button class="delete-btn">Delete</button>
    </div>
  </li>
"#,
            id = html_escape(&row.id),
            name = html_escape(&row.name),
            phone = html_escape(&row.phone),
            name_class = input_class("contacts-list-item-name-input", row.markers.name),
            phone_class = input_class("contacts-list-item-phone-input", row.markers.phone),
            readonly = if editing { "" } else { " readonly" },
            edit_class = if editing { "edit-btn editing" } else { "edit-btn" },
        ));
    }

    out.push_str("</ul>\n");
    out
}

fn input_class(base: &str, state: FieldState) -> String {
    match state {
        FieldState::Empty => base.to_string(),
        FieldState::Valid => format!("{} validEdit", base),
        FieldState::Invalid => format!("{} invalidEdit", base),
    }
}

/// Escape HTML special characters
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
