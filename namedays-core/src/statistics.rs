//! Aggregate counts over a nameday index.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::index::NamedayIndex;

/// Letters of the Slovak alphabet in collation order.
pub const SLOVAK_ALPHABET: &str = "AÁBCČDĎEÉFGHIÍJKLMNŇOÓÔPQRŔSŠTŤUÚVWXYÝZŽ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_names: usize,
    pub days_with_names: usize,
    /// Names per month, January first.
    pub per_month: [usize; 12],
    /// Names per first character.
    pub per_first_letter: BTreeMap<char, usize>,
    /// Names per length in characters.
    pub per_name_length: BTreeMap<usize, usize>,
}

impl Statistics {
    pub fn collect(index: &NamedayIndex) -> Self {
        let mut stats = Statistics {
            days_with_names: index.day_count(),
            ..Default::default()
        };

        for entry in index {
            let name = entry.name();
            stats.total_names += 1;
            stats.per_month[entry.date_key().month() as usize - 1] += 1;

            if let Some(first) = name.chars().next() {
                *stats.per_first_letter.entry(first).or_default() += 1;
            }
            *stats.per_name_length.entry(name.chars().count()).or_default() += 1;
        }

        stats
    }

    /// Count for `month` (1-12), zero for anything else.
    pub fn in_month(&self, month: u32) -> usize {
        month
            .checked_sub(1)
            .and_then(|i| self.per_month.get(i as usize))
            .copied()
            .unwrap_or(0)
    }

    /// First-letter counts ordered by `alphabet`, then any letters outside it in
    /// character order. Letters with no names are left out.
    pub fn letters_in_order(&self, alphabet: &str) -> Vec<(char, usize)> {
        let mut ordered: Vec<(char, usize)> = alphabet
            .chars()
            .filter_map(|c| self.per_first_letter.get(&c).map(|&n| (c, n)))
            .collect();

        ordered.extend(
            self.per_first_letter
                .iter()
                .filter(|(c, _)| !alphabet.contains(**c))
                .map(|(&c, &n)| (c, n)),
        );

        ordered
    }
}
