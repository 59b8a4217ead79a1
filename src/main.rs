mod commands;
mod logging;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use namedays_core::DateKey;
use namedays_core::NamedayIndex;
use namedays_core::config::NamedaysConfig;
use tracing::debug;

#[derive(Parser)]
#[command(name = "namedays", version)]
#[command(about = "Look up, search and edit namedays in a calendar file")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Calendar file (defaults to calendar_file from the config)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show who celebrates today and tomorrow
    Today,
    /// Show the names celebrated on a date
    Date {
        /// Date as D.M (e.g. 24.6)
        date: DateKey,
    },
    /// Show the date a name is celebrated on
    Name { name: String },
    /// Search names with a regular expression (case-insensitive)
    Search { pattern: String },
    /// Show a month as a calendar
    Month {
        /// Month number (defaults to the current month)
        month: Option<u32>,

        /// Year used to lay out the month (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Show statistics about the calendar
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add names to a date and save the calendar
    Add {
        /// Date as D.M (e.g. 24.6)
        date: DateKey,

        #[arg(required = true)]
        names: Vec<String>,

        /// Create the date if it has no names yet
        #[arg(long)]
        create: bool,

        /// Save to this file instead of the calendar file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Remove a name and save the calendar
    Remove {
        name: String,

        /// Save to this file instead of the calendar file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show configuration paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = NamedaysConfig::load()?;
    let file = cli.file;
    let open = || -> Result<(PathBuf, NamedayIndex)> {
        let path = resolve_calendar_file(file.clone(), &config)?;
        debug!(path = %path.display(), "Using calendar file");
        let index = load_index(&path)?;
        Ok((path, index))
    };

    match cli.command {
        Commands::Today => commands::today::run(&open()?.1),
        Commands::Date { date } => commands::date::run(&open()?.1, date),
        Commands::Name { name } => commands::name::run(&open()?.1, &name),
        Commands::Search { pattern } => commands::search::run(&open()?.1, &pattern),
        Commands::Month { month, year } => commands::month::run(&open()?.1, month, year),
        Commands::Stats { json } => commands::stats::run(&open()?.1, &config, json),
        Commands::Add {
            date,
            names,
            create,
            output,
        } => {
            let (path, mut index) = open()?;
            let target = output.unwrap_or(path);
            commands::add::run(&mut index, date, &names, create, &target)
        }
        Commands::Remove { name, output } => {
            let (path, mut index) = open()?;
            let target = output.unwrap_or(path);
            commands::remove::run(&mut index, &name, &target)
        }
        Commands::Config => commands::config::run(&config, file.as_deref()),
    }
}

fn resolve_calendar_file(file: Option<PathBuf>, config: &NamedaysConfig) -> Result<PathBuf> {
    if let Some(file) = file.or_else(|| config.calendar_path()) {
        return Ok(file);
    }

    anyhow::bail!(
        "No calendar file given.\n\n\
        Pass one with:\n  \
        namedays --file <path> <command>\n\n\
        or set calendar_file in:\n  \
        {}",
        NamedaysConfig::config_path()?.display()
    );
}

fn load_index(path: &Path) -> Result<NamedayIndex> {
    NamedayIndex::from_file(path)
        .with_context(|| format!("Could not load calendar {}", path.display()))
}
