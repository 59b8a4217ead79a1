//! Terminal rendering for namedays types.
//!
//! Extension traits that add colored output to namedays-core types using owo_colors.

use namedays_core::NameEntry;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for NameEntry {
    fn render(&self) -> String {
        let date = format!("({})", self.date_key());
        format!("{} {}", self.name().bold(), date.dimmed())
    }
}

/// Comma-separated names, or a dimmed placeholder when there are none.
pub fn render_names(names: &[&str]) -> String {
    if names.is_empty() {
        return "No namedays".dimmed().to_string();
    }

    names.join(", ")
}

/// Numbered listing, one entry per line (`1. Ján (24.6)`).
pub fn render_numbered<'a>(entries: impl IntoIterator<Item = &'a NameEntry>) -> Vec<String> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| format!("{:>3}. {}", i + 1, entry.render()))
        .collect()
}
