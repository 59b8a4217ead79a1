use anyhow::Result;
use namedays_core::NamedayIndex;
use owo_colors::OwoColorize;

pub fn run(index: &NamedayIndex, name: &str) -> Result<()> {
    match index.date_of(name) {
        Some(date) => println!("{} {}", name.bold(), date),
        None => anyhow::bail!("'{name}' is not in the calendar (names are case-sensitive, try `search`)"),
    }
    Ok(())
}
