//! Formatting entry point
//!
//! `Formatter` owns the per-locale number formatter cache and the fixed
//! currency symbol. Locale and timezone are not ambient: every call takes a
//! [`FormatContext`].

use chrono::{FixedOffset, Offset, Utc};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::currency::{self, CurrencyParts, DEFAULT_CURRENCY_SYMBOL};
use super::datetime;
use super::number::NumberFormatter;
use crate::models::{Locale, Money, MonthId};

/// The explicit inputs of a formatting call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatContext {
    pub locale: Locale,
    /// Offset used to convert zoned timestamps and to read the clock
    pub timezone: FixedOffset,
}

impl FormatContext {
    pub fn new(locale: Locale, timezone: FixedOffset) -> Self {
        Self { locale, timezone }
    }

    /// Context pinned to UTC
    pub fn utc(locale: Locale) -> Self {
        Self {
            locale,
            timezone: utc(),
        }
    }
}

impl Default for FormatContext {
    fn default() -> Self {
        Self::utc(Locale::default())
    }
}

pub(crate) fn utc() -> FixedOffset {
    Utc.fix()
}

/// Currency, date and month formatter
///
/// Number formatters are built lazily, one per locale, and reused for the
/// lifetime of the `Formatter`. The cache is not synchronized; share a
/// `Formatter` within one thread only.
#[derive(Debug)]
pub struct Formatter {
    symbol: String,
    numbers: RefCell<HashMap<Locale, Rc<NumberFormatter>>>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    /// Formatter using the manat sign
    pub fn new() -> Self {
        Self::with_symbol(DEFAULT_CURRENCY_SYMBOL)
    }

    /// Formatter using a custom currency symbol; an empty symbol is omitted
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            numbers: RefCell::new(HashMap::new()),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Cached two-fraction-digit number formatter for `locale`
    pub fn number_formatter(&self, locale: Locale) -> Rc<NumberFormatter> {
        if let Some(existing) = self.numbers.borrow().get(&locale) {
            return Rc::clone(existing);
        }

        tracing::debug!(locale = locale.tag(), "creating number formatter");
        let created = Rc::new(NumberFormatter::new(locale));
        self.numbers
            .borrow_mut()
            .insert(locale, Rc::clone(&created));
        created
    }

    /// Number of locales with a cached number formatter
    pub fn cached_locales(&self) -> usize {
        self.numbers.borrow().len()
    }

    pub fn currency_parts(&self, amount_minor: i64, ctx: &FormatContext) -> CurrencyParts {
        let numbers = self.number_formatter(ctx.locale);
        currency::format_currency_parts(&numbers, Money::from_minor(amount_minor), &self.symbol)
    }

    /// Format a minor-unit amount, e.g. `150` as `"1,50 ₼"` in Russian
    pub fn currency(&self, amount_minor: i64, ctx: &FormatContext) -> String {
        self.currency_parts(amount_minor, ctx).to_string()
    }

    pub fn date(&self, input: &str, ctx: &FormatContext) -> String {
        datetime::format_date(input, ctx)
    }

    pub fn date_time(&self, input: &str, ctx: &FormatContext) -> String {
        datetime::format_date_time(input, ctx)
    }

    pub fn month(&self, input: &str, ctx: &FormatContext) -> String {
        datetime::format_month(input, ctx)
    }

    pub fn current_month(&self, ctx: &FormatContext) -> MonthId {
        MonthId::current(&ctx.timezone)
    }
}
