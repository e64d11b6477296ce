use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{ForecastError, Result};

const MONTHS_PER_YEAR: i64 = 12;

/// A calendar month key. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Accepts the years `chrono::NaiveDate` can represent.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let years = NaiveDate::MIN.year()..=NaiveDate::MAX.year();
        if !(1..=12).contains(&month) || !years.contains(&year) {
            return Err(ForecastError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month that follows this one.
    pub fn succ(&self) -> Self {
        self.offset(1)
    }

    /// The month that precedes this one.
    pub fn pred(&self) -> Self {
        self.offset(-1)
    }

    /// Saturates at the first and last month of the supported calendar.
    pub fn offset(&self, months: i32) -> Self {
        Self::from_index(self.index() + i64::from(months))
    }

    /// Signed number of months from `self` to `other`.
    pub fn months_until(&self, other: YearMonth) -> i32 {
        let span = other.index() - self.index();
        i32::try_from(span).unwrap_or(if span < 0 { i32::MIN } else { i32::MAX })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Human readable title, e.g. `March 2024`.
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }

    fn index(&self) -> i64 {
        i64::from(self.year) * MONTHS_PER_YEAR + i64::from(self.month) - 1
    }

    fn from_index(index: i64) -> Self {
        let first = Self::from_date(NaiveDate::MIN).index();
        let last = Self::from_date(NaiveDate::MAX).index();
        let index = index.clamp(first, last);
        Self {
            year: index.div_euclid(MONTHS_PER_YEAR) as i32,
            month: index.rem_euclid(MONTHS_PER_YEAR) as u32 + 1,
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ForecastError::Validation(format!("`{s}` is not a YYYY-MM month"));
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ForecastError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

/// An explicit, chronologically ordered set of months to forecast.
///
/// The engine never consults the clock; callers anchor windows themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMonthWindow")]
pub struct MonthWindow {
    months: Vec<YearMonth>,
}

#[derive(Deserialize)]
struct RawMonthWindow {
    months: Vec<YearMonth>,
}

impl From<RawMonthWindow> for MonthWindow {
    fn from(raw: RawMonthWindow) -> Self {
        Self::from_months(raw.months)
    }
}

impl MonthWindow {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Inclusive range from `start` to `end`.
    pub fn range(start: YearMonth, end: YearMonth) -> Result<Self> {
        if end < start {
            return Err(ForecastError::InvalidWindow(format!(
                "window end {end} is before start {start}"
            )));
        }
        Ok(Self {
            months: span(start, end),
        })
    }

    /// Builds a window from an arbitrary list, sorted and de-duplicated.
    pub fn from_months<I>(months: I) -> Self
    where
        I: IntoIterator<Item = YearMonth>,
    {
        let mut months: Vec<YearMonth> = months.into_iter().collect();
        months.sort();
        months.dedup();
        Self { months }
    }

    /// `anchor` and the `count - 1` months after it, stopping at the end of
    /// the calendar.
    pub fn leading(anchor: YearMonth, count: u32) -> Self {
        if count == 0 {
            return Self::empty();
        }
        let end = anchor.offset(saturating_count(count) - 1);
        Self {
            months: span(anchor, end),
        }
    }

    /// The `count` months immediately before `anchor`, oldest first.
    pub fn trailing(anchor: YearMonth, count: u32) -> Self {
        if count == 0 {
            return Self::empty();
        }
        let start = anchor.offset(-saturating_count(count));
        let mut months = span(start, anchor.pred());
        months.retain(|month| *month < anchor);
        Self { months }
    }

    pub fn iter(&self) -> impl Iterator<Item = YearMonth> + '_ {
        self.months.iter().copied()
    }

    pub fn months(&self) -> &[YearMonth] {
        &self.months
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn contains(&self, month: YearMonth) -> bool {
        self.months.binary_search(&month).is_ok()
    }

    pub fn first(&self) -> Option<YearMonth> {
        self.months.first().copied()
    }

    pub fn last(&self) -> Option<YearMonth> {
        self.months.last().copied()
    }
}

fn span(start: YearMonth, end: YearMonth) -> Vec<YearMonth> {
    (0..=start.months_until(end))
        .map(|step| start.offset(step))
        .collect()
}

fn saturating_count(count: u32) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}
