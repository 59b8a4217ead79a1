pub mod add;
pub mod config;
pub mod date;
pub mod month;
pub mod name;
pub mod remove;
pub mod search;
pub mod stats;
pub mod today;
