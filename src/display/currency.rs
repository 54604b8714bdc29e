//! Currency display formatting
//!
//! Amounts are rendered with the locale's number conventions and a fixed
//! currency symbol that does not depend on the locale.

use serde::Serialize;
use std::fmt;

use super::number::{NumberFormatter, PartKind};
use crate::models::Money;

/// Azerbaijani manat sign
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₼";

/// A formatted amount split into displayable pieces
///
/// `fraction` is always two digits. `integer` includes any group
/// separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyParts {
    pub sign: String,
    pub integer: String,
    pub fraction: String,
    pub decimal: String,
    pub symbol: String,
}

/// `sign + integer + decimal + fraction`, then `" " + symbol` when a symbol is set
impl fmt::Display for CurrencyParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.sign, self.integer, self.decimal, self.fraction
        )?;
        if !self.symbol.is_empty() {
            write!(f, " {}", self.symbol)?;
        }
        Ok(())
    }
}

/// Decompose `amount` into currency parts using `formatter`
pub fn format_currency_parts(
    formatter: &NumberFormatter,
    amount: Money,
    symbol: &str,
) -> CurrencyParts {
    let mut sign = String::new();
    let mut integer = String::new();
    let mut fraction = String::new();
    let mut decimal = formatter.locale().decimal_separator().to_string();

    for part in formatter.format_to_parts(amount) {
        match part.kind {
            PartKind::MinusSign => sign = part.value,
            PartKind::Integer | PartKind::Group => integer.push_str(&part.value),
            PartKind::Fraction => fraction = part.value,
            PartKind::Decimal => decimal = part.value,
        }
    }

    if fraction.is_empty() {
        fraction = "00".to_string();
    }

    CurrencyParts {
        sign,
        integer,
        fraction,
        decimal,
        symbol: symbol.to_string(),
    }
}

/// Format `amount` as a single display string
pub fn format_currency(formatter: &NumberFormatter, amount: Money, symbol: &str) -> String {
    format_currency_parts(formatter, amount, symbol).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Locale;

    fn ru() -> NumberFormatter {
        NumberFormatter::new(Locale::Ru)
    }

    #[test]
    fn test_known_values() {
        let f = ru();
        assert_eq!(format_currency(&f, Money::from_minor(0), "₼"), "0,00 ₼");
        assert_eq!(format_currency(&f, Money::from_minor(150), "₼"), "1,50 ₼");
        assert_eq!(format_currency(&f, Money::from_minor(-150), "₼"), "-1,50 ₼");
    }

    #[test]
    fn test_parts() {
        let parts = format_currency_parts(&ru(), Money::from_minor(-123_456), "₼");
        assert_eq!(parts.sign, "-");
        assert_eq!(parts.integer, "1\u{a0}234");
        assert_eq!(parts.decimal, ",");
        assert_eq!(parts.fraction, "56");
        assert_eq!(parts.symbol, "₼");
    }

    #[test]
    fn test_empty_symbol_is_omitted() {
        assert_eq!(format_currency(&ru(), Money::from_minor(150), ""), "1,50");
    }

    #[test]
    fn test_missing_fraction_defaults_to_zeros() {
        let f = ru().with_fraction_digits(0, 0);
        let parts = format_currency_parts(&f, Money::from_minor(1_234), "₼");
        assert_eq!(parts.fraction, "00");
        assert_eq!(parts.decimal, ",");
        assert_eq!(parts.to_string(), "12,00 ₼");
    }

    #[test]
    fn test_shape_holds_for_many_amounts() {
        let f = ru();
        let samples = [
            i64::MIN,
            -1_000_000_001,
            -100,
            -1,
            0,
            1,
            99,
            100,
            12_345_678,
            i64::MAX,
        ];
        for minor in samples {
            let text = format_currency(&f, Money::from_minor(minor), "₼");
            assert!(text.ends_with(" ₼"), "{}", text);
            assert_eq!(text.matches(',').count(), 1, "{}", text);
            let after = text.split(',').nth(1).unwrap();
            let digits: String = after.chars().take_while(|c| c.is_ascii_digit()).collect();
            assert_eq!(digits.len(), 2, "{}", text);
            assert_eq!(text.starts_with('-'), minor < 0, "{}", text);
        }
    }

    #[test]
    fn test_json_shape() {
        let parts = format_currency_parts(&ru(), Money::from_minor(150), "₼");
        let json = serde_json::to_value(&parts).unwrap();
        assert_eq!(json["integer"], "1");
        assert_eq!(json["fraction"], "50");
    }
}
