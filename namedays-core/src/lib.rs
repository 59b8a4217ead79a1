//! Core types for the namedays calendar.
//!
//! - `DateKey`: a validated, year-independent (day, month) pair
//! - `NameEntry`: a name registered under a `DateKey`
//! - `NamedayIndex`: the calendar itself, with lookups, pattern search,
//!   statistics, mutations and load/save
//! - `csv`: the `<day>.<month>;<name>;...` file format

pub mod config;
pub mod csv;
pub mod date_key;
pub mod error;
pub mod index;
pub mod name_entry;
pub mod statistics;

pub use date_key::DateKey;
pub use error::{NamedayError, NamedayResult};
pub use index::NamedayIndex;
pub use name_entry::NameEntry;
pub use statistics::Statistics;
