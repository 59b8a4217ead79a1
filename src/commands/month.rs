use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use namedays_core::{DateKey, NamedayIndex};
use owo_colors::OwoColorize;

/// How a day of the month view is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Highlight {
    Today,
    Weekend,
    Workday,
}

struct DayLine {
    date: NaiveDate,
    names: String,
    highlight: Highlight,
}

pub fn run(index: &NamedayIndex, month: Option<u32>, year: Option<i32>) -> Result<()> {
    let today = Local::now().date_naive();
    let month = month.unwrap_or_else(|| today.month());
    let year = year.unwrap_or_else(|| today.year());

    let lines = month_lines(index, month, year, today)?;

    if let Some(first) = lines.first() {
        println!("{}", first.date.format("%B %Y").bold());
    }

    for line in lines {
        let text = format!(
            "{:>6} {} {}",
            DateKey::from_date(&line.date).to_string(),
            line.date.format("%a"),
            line.names
        );
        match line.highlight {
            Highlight::Today => println!("{}", text.green()),
            Highlight::Weekend => println!("{}", text.red()),
            Highlight::Workday => println!("{text}"),
        }
    }

    Ok(())
}

fn month_lines(
    index: &NamedayIndex,
    month: u32,
    year: i32,
    today: NaiveDate,
) -> Result<Vec<DayLine>> {
    let month = i32::try_from(month)?;

    DateKey::month_days(month, year)?
        .map(|key| -> Result<DayLine> {
            let date = key.to_date(year)?;
            let highlight = if date == today {
                Highlight::Today
            } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                Highlight::Weekend
            } else {
                Highlight::Workday
            };

            Ok(DayLine {
                date,
                names: index.names_on(key).join(", "),
                highlight,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> NamedayIndex {
        "29.2;Horymír\n1.2;Tatiana\n3.2;Blažej".parse().unwrap()
    }

    #[test]
    fn february_follows_the_year() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let leap = month_lines(&index(), 2, 2024, today).unwrap();
        assert_eq!(leap.len(), 29);
        assert_eq!(leap[28].names, "Horymír");

        let common = month_lines(&index(), 2, 2023, today).unwrap();
        assert_eq!(common.len(), 28);
        assert!(common.iter().all(|line| line.names != "Horymír"));
    }

    #[test]
    fn highlights_today_and_weekends() {
        // 2024-02-03 is a Saturday, 2024-02-05 a Monday.
        let today = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        let lines = month_lines(&index(), 2, 2024, today).unwrap();

        assert_eq!(lines[2].highlight, Highlight::Weekend);
        assert_eq!(lines[2].names, "Blažej");
        assert_eq!(lines[3].highlight, Highlight::Weekend);
        assert_eq!(lines[4].highlight, Highlight::Today);
        assert_eq!(lines[5].highlight, Highlight::Workday);
    }

    #[test]
    fn invalid_month_is_an_error() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        assert!(month_lines(&index(), 13, 2024, today).is_err());
    }
}
