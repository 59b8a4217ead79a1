//! A single name registered under a date.

use std::fmt;

use serde::Serialize;

use crate::csv::FIELD_SEPARATOR;
use crate::date_key::DateKey;
use crate::error::{NamedayError, NamedayResult};

/// Placeholder used in source data for "no name on this day".
pub const NO_NAME_PLACEHOLDER: &str = " -";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NameEntry {
    name: String,
    date_key: DateKey,
}

impl NameEntry {
    /// Build an entry from a trimmed name.
    ///
    /// Names that would not survive a save (blank, or containing the field
    /// separator or a line break) are rejected.
    pub fn new(name: &str, date_key: DateKey) -> NamedayResult<Self> {
        let name = name.trim();

        let reason = if name.is_empty() {
            Some("name is blank")
        } else if name.contains(FIELD_SEPARATOR) {
            Some("name contains the field separator ';'")
        } else if name.contains(['\n', '\r']) {
            Some("name contains a line break")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(NamedayError::InvalidName {
                name: name.to_string(),
                reason,
            });
        }

        Ok(NameEntry {
            name: name.to_string(),
            date_key,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date_key(&self) -> DateKey {
        self.date_key
    }
}

impl fmt::Display for NameEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.date_key)
    }
}

/// Whether a raw field stands for "no name" and should be skipped.
pub fn is_placeholder(raw: &str) -> bool {
    raw == NO_NAME_PLACEHOLDER || raw.trim().is_empty() || raw.trim() == "-"
}
