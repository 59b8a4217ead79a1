use anyhow::{Context, Result};
use namedays_core::NamedayIndex;
use owo_colors::OwoColorize;

use crate::render::render_numbered;

pub fn run(index: &NamedayIndex, pattern: &str) -> Result<()> {
    let matches = index
        .search(pattern)
        .with_context(|| format!("Could not search for '{pattern}'"))?;

    let lines = render_numbered(matches);
    if lines.is_empty() {
        println!("{}", "No names match".dimmed());
        return Ok(());
    }

    for line in lines {
        println!("{line}");
    }

    Ok(())
}
