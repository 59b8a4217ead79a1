use anyhow::Result;
use chrono::Month;
use namedays_core::NamedayIndex;
use namedays_core::config::NamedaysConfig;
use owo_colors::OwoColorize;

pub fn run(index: &NamedayIndex, config: &NamedaysConfig, json: bool) -> Result<()> {
    let stats = index.statistics();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Statistics".bold());
    println!("  Names:            {}", stats.total_names);
    println!("  Days with names:  {}", stats.days_with_names);

    println!();
    println!("{}", "Names per month".bold());
    for (month, count) in (1..=12u8).zip(stats.per_month) {
        let name = Month::try_from(month).map(|m| m.name()).unwrap_or("?");
        println!("  {:<10} {}", name, count);
    }

    println!();
    println!("{}", "Names per first letter".bold());
    for (letter, count) in stats.letters_in_order(&config.alphabet) {
        println!("  {letter}: {count}");
    }

    println!();
    println!("{}", "Names per length".bold());
    for (length, count) in &stats.per_name_length {
        println!("  {length:>2}: {count}");
    }

    Ok(())
}
