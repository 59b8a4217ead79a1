//! Year-independent calendar date used as the index key.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{NamedayError, NamedayResult};

/// Leap year every key is validated against, so that 29.2 is a valid key.
pub const REFERENCE_LEAP_YEAR: i32 = 2020;

/// Separator between day and month in the textual form (`24.12`).
pub const DATE_SEPARATOR: char = '.';

/// A recurring (day, month) date, independent of year.
///
/// Construction guarantees the pair exists in [`REFERENCE_LEAP_YEAR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateKey", into = "RawDateKey")]
pub struct DateKey {
    day: u32,
    month: u32,
}

impl DateKey {
    pub fn new(day: i32, month: i32) -> NamedayResult<Self> {
        let date = in_reference_year(day, month).ok_or(NamedayError::OutOfRange { day, month })?;

        Ok(DateKey {
            day: date.day(),
            month: date.month(),
        })
    }

    /// Key of a concrete date (the year is dropped).
    pub fn from_date(date: &impl Datelike) -> Self {
        DateKey {
            day: date.day(),
            month: date.month(),
        }
    }

    pub fn day(self) -> u32 {
        self.day
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// Project the key onto `year`.
    ///
    /// Fails for 29.2 when `year` is not a leap year.
    pub fn to_date(self, year: i32) -> NamedayResult<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day).ok_or(NamedayError::OutOfRange {
            day: self.day as i32,
            month: self.month as i32,
        })
    }

    /// Project the key onto [`REFERENCE_LEAP_YEAR`], where it always exists.
    pub fn reference_date(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(REFERENCE_LEAP_YEAR, self.month, self.day)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Every key of `month` as the month is laid out in `year`
    /// (28 or 29 days for February).
    pub fn month_days(month: i32, year: i32) -> NamedayResult<impl Iterator<Item = DateKey>> {
        let first = u32::try_from(month)
            .ok()
            .and_then(|m| NaiveDate::from_ymd_opt(year, m, 1))
            .ok_or(NamedayError::OutOfRange { day: 1, month })?;

        Ok(first
            .iter_days()
            .take_while(move |d| d.month() == first.month())
            .map(|d| DateKey::from_date(&d)))
    }
}

fn in_reference_year(day: i32, month: i32) -> Option<NaiveDate> {
    let day = u32::try_from(day).ok()?;
    let month = u32::try_from(month).ok()?;
    NaiveDate::from_ymd_opt(REFERENCE_LEAP_YEAR, month, day)
}

/// Split `D.M` into its two integer parts.
///
/// Returns a human-readable reason on failure; range checks are left to [`DateKey::new`].
pub(crate) fn split_day_month(s: &str) -> Result<(i32, i32), String> {
    let mut parts = s.split(DATE_SEPARATOR);

    let (Some(day), Some(month), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected <day>{DATE_SEPARATOR}<month>, got '{s}'"));
    };

    let day = day
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("day '{}' is not a number", day.trim()))?;
    let month = month
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("month '{}' is not a number", month.trim()))?;

    Ok((day, month))
}

impl FromStr for DateKey {
    type Err = NamedayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, month) = split_day_month(s).map_err(|reason| NamedayError::DateFormat {
            input: s.to_string(),
            reason,
        })?;

        DateKey::new(day, month)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.day, DATE_SEPARATOR, self.month)
    }
}

impl PartialOrd for DateKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateKey {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.month, self.day).cmp(&(other.month, other.day))
    }
}

/// Unvalidated wire form; deserialization goes through [`DateKey::new`].
#[derive(Serialize, Deserialize)]
struct RawDateKey {
    day: i32,
    month: i32,
}

impl TryFrom<RawDateKey> for DateKey {
    type Error = NamedayError;

    fn try_from(raw: RawDateKey) -> Result<Self, Self::Error> {
        DateKey::new(raw.day, raw.month)
    }
}

impl From<DateKey> for RawDateKey {
    fn from(key: DateKey) -> Self {
        RawDateKey {
            day: key.day as i32,
            month: key.month as i32,
        }
    }
}
