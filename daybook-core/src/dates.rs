//! Date parsing for entry date lines and month folders, plus every date-derived
//! string the output needs (file names, weights, titles).
use crate::errors::{ConvertError, ConvertResult};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Built-in date formats, tried in order after the configured ones.
///
/// `%B` and `%A` accept full and abbreviated English names, case-insensitively.
/// The two-digit-year forms come last so that `%Y` gets the first chance at a year.
pub const DATE_FORMATS: &[&str] = &[
    "%d %B %Y",
    "%d %B, %Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%A, %d %B %Y",
    "%A %d %B %Y",
    "%A, %B %d, %Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%Y%m%d",
    "%d %B %y",
    "%B %d, %y",
    "%d/%m/%y",
    "%d.%m.%y",
];

/// Date-time forms with a UTC offset, tried after RFC 3339. The date is taken in that offset.
pub const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S %z",
];

/// Date-time forms; the time of day is dropped.
pub const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Month-and-year forms (`March 2021`); they resolve to the first of the month.
pub const MONTH_YEAR_FORMATS: &[&str] = &["%B %Y", "%B, %Y"];

/// `%Y` reads any number of digits, so `March 2021` fits `%B %d %Y` as day 20 of year 21.
/// Dates before this year are treated as a format mismatch.
const MIN_YEAR: i32 = 1000;

fn plausible(date: NaiveDate) -> Option<NaiveDate> {
    (date.year() >= MIN_YEAR).then_some(date)
}

/// Drops an optional time-of-day clause: `5 March 2021 at 10:30pm` → `5 March 2021`.
pub fn strip_time_clause(raw: &str) -> &str {
    match raw.find(" at ") {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}

/// Removes ordinal suffixes (`5th` → `5`), collapses whitespace and drops a trailing comma.
fn normalize(s: &str) -> String {
    static ORDINAL: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b").unwrap());
    let s = ORDINAL.replace_all(s.trim(), "${1}");
    let s = s.split_whitespace().collect::<Vec<_>>().join(" ");
    s.trim_end_matches(',').trim_end().to_string()
}

/// Parses the date line of an entry into a calendar date.
///
/// # Arguments
///
/// * `raw` - The date text as written in the export (e.g. `5 March 2021 at 10:30pm`).
/// * `extra_formats` - `chrono` format strings tried before [`DATE_FORMATS`].
///
/// # Returns
///
/// The parsed date, or [`ConvertError::DateParse`] carrying `raw` if no format matched.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use daybook_core::dates::parse_entry_date;
/// let expected = NaiveDate::from_ymd_opt(2021, 3, 5).unwrap();
/// assert_eq!(parse_entry_date("5 March 2021 at 10:30pm", &[]).unwrap(), expected);
/// assert_eq!(parse_entry_date("March 5, 2021", &[]).unwrap(), expected);
/// assert!(parse_entry_date("someday", &[]).is_err());
/// ```
pub fn parse_entry_date(raw: &str, extra_formats: &[String]) -> ConvertResult<NaiveDate> {
    let text = normalize(strip_time_clause(raw));

    let date = extra_formats
        .iter()
        .map(String::as_str)
        .chain(DATE_FORMATS.iter().copied())
        .find_map(|fmt| NaiveDate::parse_from_str(&text, fmt).ok().and_then(plausible))
        .or_else(|| {
            DateTime::parse_from_rfc3339(&text)
                .ok()
                .or_else(|| {
                    ZONED_FORMATS
                        .iter()
                        .find_map(|fmt| DateTime::parse_from_str(&text, fmt).ok())
                })
                .and_then(|dt| plausible(dt.date_naive()))
        })
        .or_else(|| {
            DATETIME_FORMATS.iter().find_map(|fmt| {
                NaiveDateTime::parse_from_str(&text, fmt)
                    .ok()
                    .and_then(|dt| plausible(dt.date()))
            })
        })
        .or_else(|| {
            let first_of_month = format!("{text} 1");
            MONTH_YEAR_FORMATS.iter().find_map(|fmt| {
                NaiveDate::parse_from_str(&first_of_month, &format!("{fmt} %d"))
                    .ok()
                    .and_then(plausible)
            })
        });

    match date {
        Some(d) => {
            log::debug!("parsed date `{raw}` as {d}");
            Ok(d)
        }
        None => Err(ConvertError::DateParse {
            raw: raw.to_string(),
        }),
    }
}

/// An entry's calendar day, with every string derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryDate(NaiveDate);

impl EntryDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// `2021-03-05`
    pub fn iso_date(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// `5 March 2021`
    pub fn display_date(&self) -> String {
        self.0.format("%-d %B %Y").to_string()
    }

    /// `210305`, used as the page weight.
    pub fn sort_weight(&self) -> String {
        self.0.format("%y%m%d").to_string()
    }

    pub fn day_of_month(&self) -> u32 {
        self.0.day()
    }

    /// `2021-03`
    pub fn month_folder(&self) -> String {
        self.0.format("%Y-%m").to_string()
    }

    /// `20210305.md`
    pub fn file_name(&self) -> String {
        format!("{}.md", self.0.format("%Y%m%d"))
    }
}

/// A month folder (`yyyy-MM`) and the section metadata derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthFolder {
    first_day: NaiveDate,
}

impl MonthFolder {
    /// Parses a folder name of the exact form `yyyy-MM`.
    pub fn parse(folder: &str) -> ConvertResult<Self> {
        static FOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})$").unwrap());
        let err = || ConvertError::FolderDateParse {
            folder: folder.to_string(),
        };

        let caps = FOLDER.captures(folder).ok_or_else(err)?;
        let year: i32 = caps[1].parse().map_err(|_| err())?;
        let month: u32 = caps[2].parse().map_err(|_| err())?;
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(err)?;

        Ok(Self { first_day })
    }

    /// `March 2021`
    pub fn month_title(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }

    /// `2103`
    pub fn month_weight(&self) -> String {
        self.first_day.format("%y%m").to_string()
    }
}
