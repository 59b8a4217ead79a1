use anyhow::Result;
use chrono::{Duration, Local};
use namedays_core::NamedayIndex;
use owo_colors::OwoColorize;

use crate::render::render_names;

pub fn run(index: &NamedayIndex) -> Result<()> {
    if index.is_empty() {
        println!("{}", "The calendar has no names".dimmed());
        return Ok(());
    }

    let today = Local::now().date_naive();
    let tomorrow = today + Duration::days(1);

    println!(
        "{} {}",
        format!("Today ({}):", today.format("%-d.%-m.%Y")).bold(),
        render_names(&index.names_on_date(&today))
    );
    println!(
        "{} {}",
        "Tomorrow:".bold(),
        render_names(&index.names_on_date(&tomorrow))
    );

    Ok(())
}
