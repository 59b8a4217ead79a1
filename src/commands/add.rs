use std::path::Path;

use anyhow::{Context, Result};
use namedays_core::{DateKey, NamedayIndex};
use owo_colors::OwoColorize;

pub fn run(
    index: &mut NamedayIndex,
    date: DateKey,
    names: &[String],
    create: bool,
    target: &Path,
) -> Result<()> {
    let added = if create {
        index.upsert(date, names)?
    } else {
        index.add(date, names)?
    };

    if added == 0 {
        if !create && index.names_on(date).is_empty() {
            anyhow::bail!("{date} has no names yet. Use --create to start a new date");
        }
        println!("{}", "Nothing to add".dimmed());
        return Ok(());
    }

    index
        .save(target)
        .with_context(|| format!("Could not save calendar to {}", target.display()))?;

    println!(
        "{} {} {} {}",
        "Added".green(),
        names.join(", "),
        "to".dimmed(),
        date
    );
    Ok(())
}
