use std::path::Path;

use anyhow::{Context, Result};
use namedays_core::NamedayIndex;
use owo_colors::OwoColorize;

pub fn run(index: &mut NamedayIndex, name: &str, target: &Path) -> Result<()> {
    if !index.remove(name) {
        anyhow::bail!("'{name}' is not in the calendar");
    }

    index
        .save(target)
        .with_context(|| format!("Could not save calendar to {}", target.display()))?;

    println!("{} {}", "Removed".red(), name);
    Ok(())
}
