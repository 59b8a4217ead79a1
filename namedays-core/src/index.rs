//! The nameday index: dates mapped to the names celebrated on them.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use chrono::Datelike;
use regex::RegexBuilder;
use tracing::{debug, info};

use crate::csv::{generate_calendar, parse_calendar};
use crate::date_key::DateKey;
use crate::error::{NamedayError, NamedayResult};
use crate::name_entry::{NameEntry, is_placeholder};
use crate::statistics::Statistics;

/// Backing map of the index, kept in calendar order.
pub type EntryMap = BTreeMap<DateKey, Vec<NameEntry>>;

/// In-memory nameday calendar.
///
/// Every scan (name lookup, month listing, pattern search, iteration) walks the
/// dates in calendar order and each date's names in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedayIndex {
    entries: EntryMap,
}

impl NamedayIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a calendar file into a new index.
    pub fn from_file(path: impl AsRef<Path>) -> NamedayResult<Self> {
        let mut index = Self::new();
        index.load(path)?;
        Ok(index)
    }

    /// Replace the whole index with the contents of a calendar file.
    ///
    /// On any error the index is left untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> NamedayResult<()> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(NamedayError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        self.entries = parse_calendar(&content)?;

        info!(
            path = %path.display(),
            names = self.name_count(),
            days = self.day_count(),
            "Loaded nameday calendar"
        );

        Ok(())
    }

    /// Write the index to `path` in calendar file format, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> NamedayResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, generate_calendar(&self.entries))?;

        info!(
            path = %path.display(),
            names = self.name_count(),
            "Saved nameday calendar"
        );

        Ok(())
    }

    // =========================================================================
    // Counts
    // =========================================================================

    pub fn name_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Number of dates with at least one name.
    pub fn day_count(&self) -> usize {
        self.entries.values().filter(|list| !list.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.name_count() == 0
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Names celebrated on `key`, in insertion order. Empty if there are none.
    pub fn names_on(&self, key: DateKey) -> Vec<&str> {
        self.entries
            .get(&key)
            .map(|list| list.iter().map(NameEntry::name).collect())
            .unwrap_or_default()
    }

    pub fn names_on_day(&self, day: i32, month: i32) -> NamedayResult<Vec<&str>> {
        Ok(self.names_on(DateKey::new(day, month)?))
    }

    /// Names celebrated on a concrete date, whatever its year.
    pub fn names_on_date(&self, date: &impl Datelike) -> Vec<&str> {
        self.names_on(DateKey::from_date(date))
    }

    /// Date of the first entry named exactly `name` (case-sensitive).
    pub fn date_of(&self, name: &str) -> Option<DateKey> {
        self.iter()
            .find(|entry| entry.name() == name)
            .map(NameEntry::date_key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.date_of(name).is_some()
    }

    /// Every entry in `month` (1-12). Other values yield nothing.
    pub fn in_month(&self, month: u32) -> impl Iterator<Item = &NameEntry> {
        self.iter()
            .filter(move |entry| entry.date_key().month() == month)
    }

    /// Entries whose name matches the regular expression `pattern`.
    ///
    /// Matching is case-insensitive and also tried against the name with
    /// diacritics removed, so `jan` finds `Ján`.
    pub fn search(&self, pattern: &str) -> NamedayResult<impl Iterator<Item = &NameEntry>> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        debug!(pattern, "Searching names");

        Ok(self.iter().filter(move |entry| {
            let name = entry.name().to_lowercase();
            regex.is_match(&name) || regex.is_match(&deunicode::deunicode(&name))
        }))
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::collect(self)
    }

    /// Every entry, date by date.
    pub fn iter(&self) -> impl Iterator<Item = &NameEntry> {
        self.entries.values().flatten()
    }

    /// Dates present in the index, including those whose names were all removed.
    pub fn keys(&self) -> impl Iterator<Item = DateKey> + '_ {
        self.entries.keys().copied()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append names to a date that already has names.
    ///
    /// Does nothing when `key` has no entries yet; use [`NamedayIndex::upsert`]
    /// to create a date. Placeholders are skipped. Returns how many names were added.
    pub fn add<I, S>(&mut self, key: DateKey, names: I) -> NamedayResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let new_entries = build_entries(key, names)?;

        let Some(list) = self.entries.get_mut(&key).filter(|list| !list.is_empty()) else {
            debug!(%key, "No names on date yet, nothing added");
            return Ok(0);
        };

        let added = new_entries.len();
        list.extend(new_entries);
        Ok(added)
    }

    /// Append names to a date, creating the date if needed.
    pub fn upsert<I, S>(&mut self, key: DateKey, names: I) -> NamedayResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let new_entries = build_entries(key, names)?;
        let added = new_entries.len();

        if added > 0 {
            self.entries.entry(key).or_default().extend(new_entries);
        }

        Ok(added)
    }

    /// Remove every entry named `name` from the first date that has one.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(list) = self
            .entries
            .values_mut()
            .find(|list| list.iter().any(|entry| entry.name() == name))
        else {
            return false;
        };

        list.retain(|entry| entry.name() != name);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn build_entries<I, S>(key: DateKey, names: I) -> NamedayResult<Vec<NameEntry>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter(|name| !is_placeholder(name.as_ref()))
        .map(|name| NameEntry::new(name.as_ref(), key))
        .collect()
}

impl FromStr for NamedayIndex {
    type Err = NamedayError;

    /// Parse calendar file content.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(NamedayIndex {
            entries: parse_calendar(content)?,
        })
    }
}

impl<'a> IntoIterator for &'a NamedayIndex {
    type Item = &'a NameEntry;
    type IntoIter = std::iter::Flatten<std::collections::btree_map::Values<'a, DateKey, Vec<NameEntry>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SAMPLE: &str = "\
1.1;Nový Rok; -
2.1;Karina
24.6;Ján
25.6;Ivan
29.2;Horymír
7.5;Janka
";

    fn sample() -> NamedayIndex {
        SAMPLE.parse().unwrap()
    }

    fn key(day: i32, month: i32) -> DateKey {
        DateKey::new(day, month).unwrap()
    }

    #[test]
    fn counts_names_and_days() {
        let index = sample();
        assert_eq!(index.name_count(), 6);
        assert_eq!(index.day_count(), 6);
        assert!(!index.is_empty());
    }

    #[test]
    fn day_count_ignores_dates_without_names() {
        let index: NamedayIndex = "1.1;Nový Rok\n2.1; -\n3.1".parse().unwrap();
        assert_eq!(index.keys().count(), 3);
        assert_eq!(index.day_count(), 1);
    }

    #[test]
    fn names_on_returns_names_or_nothing() {
        let index = sample();
        assert_eq!(index.names_on(key(1, 1)), vec!["Nový Rok"]);
        assert!(index.names_on(key(3, 3)).is_empty());
        assert!(index.names_on_day(31, 4).is_err());
    }

    #[test]
    fn leap_day_lookup_works_in_any_year() {
        let index = sample();
        assert_eq!(index.names_on_day(29, 2).unwrap(), vec!["Horymír"]);

        let leap = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(index.names_on_date(&leap), vec!["Horymír"]);
    }

    #[test]
    fn date_of_is_exact_and_case_sensitive() {
        let index = sample();
        assert_eq!(index.date_of("Ján"), Some(key(24, 6)));
        assert_eq!(index.date_of("ján"), None);
        assert!(index.contains("Karina"));
        assert!(!index.contains("Kar"));
    }

    #[test]
    fn date_of_returns_the_earliest_duplicate() {
        let index: NamedayIndex = "5.5;Eva\n24.12;Adam;Eva".parse().unwrap();
        assert_eq!(index.date_of("Eva"), Some(key(5, 5)));
    }

    #[test]
    fn in_month_lists_entries_in_calendar_order() {
        let index = sample();
        let june: Vec<&str> = index.in_month(6).map(NameEntry::name).collect();
        assert_eq!(june, vec!["Ján", "Ivan"]);

        let january: Vec<&str> = index.in_month(1).map(NameEntry::name).collect();
        assert_eq!(january, vec!["Nový Rok", "Karina"]);

        assert_eq!(index.in_month(13).count(), 0);
    }

    #[test]
    fn search_ignores_case_and_diacritics() {
        let index = sample();

        let found: Vec<&str> = index.search("jan").unwrap().map(NameEntry::name).collect();
        assert_eq!(found, vec!["Janka", "Ján"]);

        let found: Vec<&str> = index.search("^JÁN$").unwrap().map(NameEntry::name).collect();
        assert_eq!(found, vec!["Ján"]);

        assert_eq!(index.search("xyz123").unwrap().count(), 0);
    }

    #[test]
    fn empty_pattern_matches_everything() {
        let index = sample();
        assert_eq!(index.search("").unwrap().count(), index.name_count());
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let index = sample();
        assert!(matches!(index.search("(unclosed"), Err(NamedayError::Pattern(_))));
    }

    #[test]
    fn add_only_appends_to_dates_that_already_have_names() {
        let mut index = sample();

        assert_eq!(index.add(key(24, 6), ["Janko", " -"]).unwrap(), 1);
        assert_eq!(index.names_on(key(24, 6)), vec!["Ján", "Janko"]);

        assert_eq!(index.add(key(3, 3), ["Nikto"]).unwrap(), 0);
        assert!(index.names_on(key(3, 3)).is_empty());
        assert!(!index.contains("Nikto"));
    }

    #[test]
    fn add_rejects_unsaveable_names_without_touching_the_index() {
        let mut index = sample();
        let before = index.clone();

        assert!(matches!(
            index.add(key(24, 6), ["Jano", "Ján;Jana"]),
            Err(NamedayError::InvalidName { .. })
        ));
        assert_eq!(index, before);
    }

    #[test]
    fn upsert_creates_missing_dates() {
        let mut index = sample();

        assert_eq!(index.upsert(key(3, 3), ["Bohuslav"]).unwrap(), 1);
        assert_eq!(index.names_on(key(3, 3)), vec!["Bohuslav"]);
        assert_eq!(index.date_of("Bohuslav"), Some(key(3, 3)));

        assert_eq!(index.upsert(key(4, 3), [" -"]).unwrap(), 0);
        assert_eq!(index.keys().filter(|k| *k == key(4, 3)).count(), 0);
    }

    #[test]
    fn remove_drops_every_copy_from_the_first_matching_date() {
        let mut index: NamedayIndex = "5.5;Eva;Adam;Eva\n24.12;Eva".parse().unwrap();

        assert!(index.remove("Eva"));
        assert_eq!(index.names_on(key(5, 5)), vec!["Adam"]);
        assert_eq!(index.names_on(key(24, 12)), vec!["Eva"]);
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let mut index = sample();

        assert!(index.remove("Ján"));
        assert_eq!(index.date_of("Ján"), None);

        let before = index.clone();
        assert!(!index.remove("NoSuchName"));
        assert_eq!(index, before);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut index = sample();
        index.clear();
        index.clear();
        assert_eq!(index.name_count(), 0);
        assert_eq!(index.day_count(), 0);
        assert!(index.is_empty());
    }

    #[test]
    fn iterates_all_entries_date_by_date() {
        let index = sample();
        let all: Vec<String> = index.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            all,
            vec![
                "Nový Rok (1.1)",
                "Karina (2.1)",
                "Horymír (29.2)",
                "Janka (7.5)",
                "Ján (24.6)",
                "Ivan (25.6)",
            ]
        );
        assert_eq!((&index).into_iter().count(), 6);
    }
}
