//! Date and month display formatting
//!
//! Backend timestamps are matched against a strict `YYYY-MM-DD[THH:MM[:SS]]`
//! shape first and re-rendered digit for digit, so a bare date never shifts
//! across a timezone boundary. Anything else goes through generic parsing,
//! where offset-carrying timestamps are converted into the context
//! timezone. Unparseable input degrades to a fallback string.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::formatter::FormatContext;
use crate::models::{Locale, MonthId};

/// Output of [`format_date`] for input that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

static STRICT_DATE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})(?:[T ]([0-9]{2}):([0-9]{2})(?::[0-9]{2})?)?$")
        .expect("valid date-time regex")
});

const NAIVE_DATE_TIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M",
];

const NAIVE_DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%m/%d/%Y"];

/// Render a date as a long localized calendar date ("May 3, 2024")
pub fn format_date(input: &str, ctx: &FormatContext) -> String {
    let normalized = input.trim();
    let parsed = match STRICT_DATE_TIME.captures(normalized) {
        Some(caps) => strict_date(&caps),
        None => parse_generic(normalized, ctx).map(|dt| dt.date()),
    };

    match parsed {
        Some(date) => long_date(date, ctx.locale),
        None => {
            tracing::debug!(input, "unparseable date");
            INVALID_DATE.to_string()
        }
    }
}

/// Render a timestamp as `DD.MM.YY`, or `DD.MM.YY - HH:MM` when it has a time
///
/// Empty input and unparseable input are returned unchanged.
pub fn format_date_time(input: &str, ctx: &FormatContext) -> String {
    let normalized = input.trim();
    if normalized.is_empty() {
        return input.to_string();
    }

    if let Some(caps) = STRICT_DATE_TIME.captures(normalized) {
        let short = format!("{}.{}.{}", &caps[3], &caps[2], &caps[1][2..]);
        return match (caps.get(4), caps.get(5)) {
            (Some(hours), Some(minutes)) => {
                format!("{} - {}:{}", short, hours.as_str(), minutes.as_str())
            }
            _ => short,
        };
    }

    match parse_generic(normalized, ctx) {
        Some(dt) => format!(
            "{:02}.{:02}.{:02} - {:02}:{:02}",
            dt.day(),
            dt.month(),
            dt.year().rem_euclid(100),
            dt.hour(),
            dt.minute()
        ),
        None => {
            tracing::debug!(input, "unparseable date-time left as is");
            input.to_string()
        }
    }
}

/// Render a `YYYY-MM` identifier as a localized "Month YYYY" label
///
/// Non-canonical input is returned unchanged.
pub fn format_month(input: &str, ctx: &FormatContext) -> String {
    match MonthId::parse(input.trim()) {
        Ok(month) => month_label(month, ctx.locale),
        Err(err) => {
            tracing::debug!(input, %err, "month label left as is");
            input.to_string()
        }
    }
}

/// Localized "Month YYYY" label for a month
pub fn month_label(month: MonthId, locale: Locale) -> String {
    let name = locale.month_name(month.month()).unwrap_or_default();
    match locale {
        Locale::Ru => format!("{} {} г.", name, month.year()),
        Locale::Az | Locale::En => format!("{} {}", name, month.year()),
    }
}

/// Localized long calendar date
pub fn long_date(date: NaiveDate, locale: Locale) -> String {
    let name = locale.month_name_in_date(date.month()).unwrap_or_default();
    match locale {
        Locale::Ru => format!("{} {} {} г.", date.day(), name, date.year()),
        Locale::Az => format!("{} {} {}", date.day(), name, date.year()),
        Locale::En => format!("{} {}, {}", name, date.day(), date.year()),
    }
}

/// Calendar date of a strict match; `None` if the date or the time of day
/// does not exist
fn strict_date(caps: &Captures<'_>) -> Option<NaiveDate> {
    if let (Some(hours), Some(minutes)) = (caps.get(4), caps.get(5)) {
        NaiveTime::from_hms_opt(hours.as_str().parse().ok()?, minutes.as_str().parse().ok()?, 0)?;
    }
    NaiveDate::from_ymd_opt(caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?)
}

/// Generic timestamp parsing, in the context timezone's wall-clock time
fn parse_generic(input: &str, ctx: &FormatContext) -> Option<NaiveDateTime> {
    let with_offset = DateTime::parse_from_rfc3339(input)
        .or_else(|_| DateTime::parse_from_rfc2822(input))
        .or_else(|_| DateTime::parse_from_str(input, "%Y-%m-%dT%H:%M%#z"));
    if let Ok(dt) = with_offset {
        return Some(dt.with_timezone(&ctx.timezone).naive_local());
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NAIVE_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}
