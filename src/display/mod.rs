//! Display formatting
//!
//! Turns minor-unit amounts, backend timestamps and month identifiers into
//! user-facing strings for a given locale and timezone.

pub mod currency;
pub mod datetime;
pub mod formatter;
pub mod number;

pub use currency::{format_currency, format_currency_parts, CurrencyParts, DEFAULT_CURRENCY_SYMBOL};
pub use datetime::{format_date, format_date_time, format_month, long_date, month_label, INVALID_DATE};
pub use formatter::{FormatContext, Formatter};
pub use number::{NumberFormatter, NumberPart, PartKind};
