//! Money type for representing currency amounts
//!
//! Amounts travel as integers in minor units (hundredths of the currency
//! unit). Splitting into whole and fractional parts is done with integer
//! arithmetic so that every `i64`, `i64::MIN` included, formats exactly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of minor units in one major unit
pub const MINOR_PER_MAJOR: u64 = 100;

/// Represents a monetary amount stored in minor units (e.g. qəpik, cents)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use manat_format::models::Money;
    /// let amount = Money::from_minor(150); // 1.50
    /// assert_eq!(amount.whole(), 1);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Absolute amount in minor units, without overflow on `i64::MIN`
    pub const fn unsigned_minor(&self) -> u64 {
        self.0.unsigned_abs()
    }

    /// Whole major units of the absolute amount
    pub const fn whole(&self) -> u64 {
        self.unsigned_minor() / MINOR_PER_MAJOR
    }

    /// Minor-unit remainder of the absolute amount (0-99)
    pub const fn fraction(&self) -> u64 {
        self.unsigned_minor() % MINOR_PER_MAJOR
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Money {
    fn from(minor: i64) -> Self {
        Self(minor)
    }
}

/// Plain `-1234.50` rendering, independent of any locale
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.whole(), self.fraction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let m = Money::from_minor(1050);
        assert_eq!(m.minor(), 1050);
        assert_eq!(m.whole(), 10);
        assert_eq!(m.fraction(), 50);
    }

    #[test]
    fn test_negative_parts_are_absolute() {
        let m = Money::from_minor(-1005);
        assert!(m.is_negative());
        assert_eq!(m.whole(), 10);
        assert_eq!(m.fraction(), 5);
    }

    #[test]
    fn test_min_value_does_not_overflow() {
        let m = Money::from_minor(i64::MIN);
        assert_eq!(m.unsigned_minor(), 9_223_372_036_854_775_808);
        assert_eq!(m.whole(), 92_233_720_368_547_758);
        assert_eq!(m.fraction(), 8);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(1050).to_string(), "10.50");
        assert_eq!(Money::from_minor(0).to_string(), "0.00");
        assert_eq!(Money::from_minor(-5).to_string(), "-0.05");
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
