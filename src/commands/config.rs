use std::path::Path;

use anyhow::Result;
use namedays_core::config::NamedaysConfig;
use owo_colors::OwoColorize;

pub fn run(config: &NamedaysConfig, file_override: Option<&Path>) -> Result<()> {
    let config_path = NamedaysConfig::config_path()?;

    let calendar = file_override
        .map(Path::to_path_buf)
        .or_else(|| config.calendar_path())
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string());

    println!("{}", "Paths".bold());
    println!("  Config:    {}", config_path.display());
    println!("  Calendar:  {}", calendar);
    println!("  Alphabet:  {}", config.alphabet);

    Ok(())
}
