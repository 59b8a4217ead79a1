//! Calendar file parsing.

use std::collections::BTreeMap;

use tracing::debug;

use super::FIELD_SEPARATOR;
use crate::date_key::{DateKey, split_day_month};
use crate::error::{NamedayError, NamedayResult};
use crate::index::EntryMap;
use crate::name_entry::{NameEntry, is_placeholder};

/// Parse calendar file content into a fresh entry map.
///
/// Lines repeating a date append to that date's list. Nothing is returned
/// unless every line parses.
pub fn parse_calendar(content: &str) -> NamedayResult<EntryMap> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut entries: EntryMap = BTreeMap::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let line_number = index + 1;
        let mut fields = line.split(FIELD_SEPARATOR);
        let date_field = fields.next().unwrap_or_default();

        let (day, month) = split_day_month(date_field).map_err(|reason| NamedayError::Parse {
            line: line_number,
            reason,
        })?;
        let key = DateKey::new(day, month)?;

        let names = entries.entry(key).or_default();
        for raw in fields.filter(|raw| !is_placeholder(raw)) {
            let entry = NameEntry::new(raw, key).map_err(|e| NamedayError::Parse {
                line: line_number,
                reason: e.to_string(),
            })?;
            names.push(entry);
        }
    }

    debug!(days = entries.len(), "Parsed calendar content");

    Ok(entries)
}
