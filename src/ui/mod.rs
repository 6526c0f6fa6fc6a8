pub mod render;

pub use render::{project, render_html, render_text, ListView, RowView};
