//! Calendar file generation.

use super::FIELD_SEPARATOR;
use crate::index::EntryMap;

/// Render entries as calendar file content, one line per date in key order.
///
/// A date without names is written as the bare date.
pub fn generate_calendar(entries: &EntryMap) -> String {
    let mut out = String::new();

    for (key, names) in entries {
        out.push_str(&key.to_string());
        for entry in names {
            out.push(FIELD_SEPARATOR);
            out.push_str(entry.name());
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::parse_calendar;

    #[test]
    fn writes_one_line_per_date_in_calendar_order() {
        let entries = parse_calendar("24.6;Ján;Jana\n1.1;Nový Rok\n1.5\n").unwrap();

        assert_eq!(
            generate_calendar(&entries),
            "1.1;Nový Rok\n1.5\n24.6;Ján;Jana\n"
        );
    }

    #[test]
    fn empty_map_is_empty_content() {
        assert_eq!(generate_calendar(&EntryMap::new()), "");
    }

    #[test]
    fn generated_content_parses_back_to_the_same_entries() {
        let original = parse_calendar("29.2;Horymír\n6.1;Gašpar;Melichar;Baltazár\n").unwrap();
        let reparsed = parse_calendar(&generate_calendar(&original)).unwrap();
        assert_eq!(original, reparsed);
    }
}
