//! Nameday calendar file parsing and generation.
//!
//! One line per date: `<day>.<month>;<name1>;<name2>;...`

mod generate;
mod parse;

pub use generate::generate_calendar;
pub use parse::parse_calendar;

/// Separator between the date field and the name fields.
pub const FIELD_SEPARATOR: char = ';';
