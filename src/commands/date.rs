use anyhow::Result;
use namedays_core::{DateKey, NamedayIndex};
use owo_colors::OwoColorize;

use crate::render::render_names;

pub fn run(index: &NamedayIndex, date: DateKey) -> Result<()> {
    println!(
        "{} {}",
        format!("{date}:").bold(),
        render_names(&index.names_on(date))
    );
    Ok(())
}
