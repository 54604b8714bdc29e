//! Month identifiers
//!
//! A month is identified by a `YYYY-MM` string. Navigation goes through
//! calendar-date arithmetic on the first day of the month, so year
//! boundaries roll over without hand-written modulo math.

use chrono::{Datelike, FixedOffset, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FormatError, FormatResult};

/// Years a canonical `YYYY-MM` identifier can carry
const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// A calendar month, e.g. "2025-01"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthId {
    /// Always the first day of the month
    first_day: NaiveDate,
}

impl MonthId {
    /// Create a month from a year and a 1-based month number
    pub fn new(year: i32, month: u32) -> FormatResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(Self::from_first_day)
            .ok_or_else(|| FormatError::invalid_month(format!("{}-{}", year, month)))
    }

    /// The month a given date falls in
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date - chrono::Duration::days(i64::from(date.day0())),
        }
    }

    /// The current month as seen from the given UTC offset
    pub fn current(timezone: &FixedOffset) -> Self {
        Self::containing(Utc::now().with_timezone(timezone).date_naive())
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The following month; `None` after `9999-12`
    pub fn next(&self) -> Option<Self> {
        self.first_day
            .checked_add_months(Months::new(1))
            .and_then(Self::from_first_day)
    }

    /// The preceding month; `None` before `0000-01`
    pub fn prev(&self) -> Option<Self> {
        self.first_day
            .checked_sub_months(Months::new(1))
            .and_then(Self::from_first_day)
    }

    fn from_first_day(first_day: NaiveDate) -> Option<Self> {
        YEARS
            .contains(&first_day.year())
            .then_some(Self { first_day })
    }

    /// `count` consecutive months starting at `self`
    pub fn range(self, count: usize) -> impl Iterator<Item = MonthId> {
        std::iter::successors(Some(self), MonthId::next).take(count)
    }

    /// Parse a canonical `YYYY-MM` identifier
    ///
    /// The year must be four digits and the month two zero-padded digits
    /// in `01`..=`12`; anything else is rejected.
    pub fn parse(s: &str) -> FormatResult<Self> {
        let invalid = || FormatError::invalid_month(s);

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4
            || month.len() != 2
            || !year.bytes().all(|b| b.is_ascii_digit())
            || !month.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Self::new(year, month)
    }
}

impl fmt::Display for MonthId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthId {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MonthId {
    type Error = FormatError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<MonthId> for String {
    fn from(month: MonthId) -> Self {
        month.to_string()
    }
}

/// Current month as a `YYYY-MM` string
pub fn current_month(timezone: &FixedOffset) -> String {
    MonthId::current(timezone).to_string()
}

/// Month before `month`, as a `YYYY-MM` string
pub fn previous_month(month: &str) -> FormatResult<String> {
    MonthId::parse(month)?
        .prev()
        .map(|m| m.to_string())
        .ok_or_else(|| FormatError::invalid_month(month))
}

/// Month after `month`, as a `YYYY-MM` string
pub fn next_month(month: &str) -> FormatResult<String> {
    MonthId::parse(month)?
        .next()
        .map(|m| m.to_string())
        .ok_or_else(|| FormatError::invalid_month(month))
}
