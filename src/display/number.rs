//! Locale-aware decimal number formatting
//!
//! `NumberFormatter` renders a minor-unit amount as a sequence of typed
//! parts (sign, integer groups, decimal separator, fraction) so callers can
//! style or rearrange them individually.

use serde::Serialize;

use crate::models::{Locale, Money};

/// Kind of a formatted number fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PartKind {
    MinusSign,
    Integer,
    Group,
    Decimal,
    Fraction,
}

/// A single fragment of a formatted number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberPart {
    pub kind: PartKind,
    pub value: String,
}

impl NumberPart {
    fn new(kind: PartKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Most fraction digits a minor-unit amount can carry
const MAX_SCALE: u32 = 2;

/// Decimal formatter bound to one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormatter {
    locale: Locale,
    min_fraction_digits: u32,
    max_fraction_digits: u32,
    grouping: bool,
}

impl NumberFormatter {
    /// Formatter with exactly two fraction digits and digit grouping
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            min_fraction_digits: MAX_SCALE,
            max_fraction_digits: MAX_SCALE,
            grouping: true,
        }
    }

    /// Set the fraction digit bounds, clamped to `0..=2` with `min <= max`
    pub fn with_fraction_digits(mut self, min: u32, max: u32) -> Self {
        self.max_fraction_digits = max.min(MAX_SCALE);
        self.min_fraction_digits = min.min(self.max_fraction_digits);
        self
    }

    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Format `amount` (minor units) as typed parts
    ///
    /// Dropped digits are rounded half away from zero. Trailing fraction
    /// zeros are trimmed down to the minimum; with a minimum of zero the
    /// fraction and decimal parts may be omitted entirely.
    pub fn format_to_parts(&self, amount: Money) -> Vec<NumberPart> {
        let dropped = 10u64.pow(MAX_SCALE - self.max_fraction_digits);
        let mut scaled = amount.unsigned_minor() / dropped;
        if dropped > 1 && (amount.unsigned_minor() % dropped) * 2 >= dropped {
            scaled += 1;
        }

        let unit = 10u64.pow(self.max_fraction_digits);
        let integer = scaled / unit;
        let mut fraction = if self.max_fraction_digits > 0 {
            format!(
                "{:0width$}",
                scaled % unit,
                width = self.max_fraction_digits as usize
            )
        } else {
            String::new()
        };
        while fraction.len() > self.min_fraction_digits as usize && fraction.ends_with('0') {
            fraction.pop();
        }

        let mut parts = Vec::with_capacity(8);
        if amount.is_negative() {
            parts.push(NumberPart::new(PartKind::MinusSign, self.locale.minus_sign()));
        }
        self.push_integer_parts(&mut parts, &integer.to_string());
        if !fraction.is_empty() {
            parts.push(NumberPart::new(
                PartKind::Decimal,
                self.locale.decimal_separator(),
            ));
            parts.push(NumberPart::new(PartKind::Fraction, fraction));
        }
        parts
    }

    /// Format `amount` (minor units) as a plain string
    pub fn format(&self, amount: Money) -> String {
        self.format_to_parts(amount)
            .into_iter()
            .map(|part| part.value)
            .collect()
    }

    fn push_integer_parts(&self, parts: &mut Vec<NumberPart>, digits: &str) {
        if !self.grouping || digits.len() <= 3 {
            parts.push(NumberPart::new(PartKind::Integer, digits));
            return;
        }

        let head = match digits.len() % 3 {
            0 => 3,
            n => n,
        };
        parts.push(NumberPart::new(PartKind::Integer, &digits[..head]));
        for start in (head..digits.len()).step_by(3) {
            parts.push(NumberPart::new(
                PartKind::Group,
                self.locale.group_separator(),
            ));
            parts.push(NumberPart::new(PartKind::Integer, &digits[start..start + 3]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(parts: &[NumberPart]) -> Vec<PartKind> {
        parts.iter().map(|p| p.kind).collect()
    }

    #[test]
    fn test_two_fraction_digits() {
        let f = NumberFormatter::new(Locale::Ru);
        assert_eq!(f.format(Money::from_minor(0)), "0,00");
        assert_eq!(f.format(Money::from_minor(5)), "0,05");
        assert_eq!(f.format(Money::from_minor(150)), "1,50");
    }

    #[test]
    fn test_grouping_by_locale() {
        let amount = Money::from_minor(123_456_789);
        assert_eq!(
            NumberFormatter::new(Locale::Ru).format(amount),
            "1\u{a0}234\u{a0}567,89"
        );
        assert_eq!(NumberFormatter::new(Locale::Az).format(amount), "1.234.567,89");
        assert_eq!(NumberFormatter::new(Locale::En).format(amount), "1,234,567.89");
    }

    #[test]
    fn test_grouping_disabled() {
        let f = NumberFormatter::new(Locale::En).with_grouping(false);
        assert_eq!(f.format(Money::from_minor(123_456_789)), "1234567.89");
    }

    #[test]
    fn test_part_sequence() {
        let parts = NumberFormatter::new(Locale::En).format_to_parts(Money::from_minor(-123_456));
        assert_eq!(
            kinds(&parts),
            vec![
                PartKind::MinusSign,
                PartKind::Integer,
                PartKind::Group,
                PartKind::Integer,
                PartKind::Decimal,
                PartKind::Fraction,
            ]
        );
        assert_eq!(parts[1].value, "1");
        assert_eq!(parts[3].value, "234");
        assert_eq!(parts[5].value, "56");
    }

    #[test]
    fn test_exact_group_multiple() {
        let f = NumberFormatter::new(Locale::En);
        assert_eq!(f.format(Money::from_minor(100_000_00)), "100,000.00");
    }

    #[test]
    fn test_zero_fraction_digits_omits_fraction() {
        let f = NumberFormatter::new(Locale::Ru).with_fraction_digits(0, 0);
        let parts = f.format_to_parts(Money::from_minor(12_345));
        assert!(!kinds(&parts).contains(&PartKind::Fraction));
        assert!(!kinds(&parts).contains(&PartKind::Decimal));
        assert_eq!(f.format(Money::from_minor(12_345)), "123");
        assert_eq!(f.format(Money::from_minor(12_350)), "124");
        assert_eq!(f.format(Money::from_minor(-12_350)), "-124");
    }

    #[test]
    fn test_trailing_zeros_trimmed_to_minimum() {
        let f = NumberFormatter::new(Locale::En).with_fraction_digits(0, 2);
        assert_eq!(f.format(Money::from_minor(150)), "1.5");
        assert_eq!(f.format(Money::from_minor(100)), "1");
        assert_eq!(f.format(Money::from_minor(105)), "1.05");
    }

    #[test]
    fn test_extremes() {
        let f = NumberFormatter::new(Locale::En);
        assert_eq!(
            f.format(Money::from_minor(i64::MIN)),
            "-92,233,720,368,547,758.08"
        );
        assert_eq!(
            f.format(Money::from_minor(i64::MAX)),
            "92,233,720,368,547,758.07"
        );
    }
}
