//! Supported display locales
//!
//! The application ships three UI languages. Each one carries the number
//! conventions and month names needed to render amounts, long dates and
//! month labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// A display locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Russian (ru-RU)
    #[default]
    Ru,
    /// Azerbaijani (az-AZ)
    Az,
    /// English (en-US)
    En,
}

const RU_MONTHS: [&str; 12] = [
    "январь", "февраль", "март", "апрель", "май", "июнь",
    "июль", "август", "сентябрь", "октябрь", "ноябрь", "декабрь",
];

const RU_MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня",
    "июля", "августа", "сентября", "октября", "ноября", "декабря",
];

const AZ_MONTHS: [&str; 12] = [
    "yanvar", "fevral", "mart", "aprel", "may", "iyun",
    "iyul", "avqust", "sentyabr", "oktyabr", "noyabr", "dekabr",
];

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Ru, Locale::Az, Locale::En];

    /// Full BCP 47 tag
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Ru => "ru-RU",
            Self::Az => "az-AZ",
            Self::En => "en-US",
        }
    }

    pub fn decimal_separator(&self) -> &'static str {
        match self {
            Self::Ru | Self::Az => ",",
            Self::En => ".",
        }
    }

    /// Digit group separator (ru uses a no-break space)
    pub fn group_separator(&self) -> &'static str {
        match self {
            Self::Ru => "\u{a0}",
            Self::Az => ".",
            Self::En => ",",
        }
    }

    pub fn minus_sign(&self) -> &'static str {
        "-"
    }

    /// Standalone month name, as used in "Month YYYY" labels
    ///
    /// `month` is 1-based; out-of-range values yield `None`.
    pub fn month_name(&self, month: u32) -> Option<&'static str> {
        let table = match self {
            Self::Ru => &RU_MONTHS,
            Self::Az => &AZ_MONTHS,
            Self::En => &EN_MONTHS,
        };
        month_index(month).map(|i| table[i])
    }

    /// Month name as inflected inside a full date ("3 мая")
    pub fn month_name_in_date(&self, month: u32) -> Option<&'static str> {
        match self {
            Self::Ru => month_index(month).map(|i| RU_MONTHS_GENITIVE[i]),
            _ => self.month_name(month),
        }
    }

    /// Parse a locale tag such as `ru`, `az_AZ` or `en-US`
    ///
    /// Only the language subtag is significant; matching is case-insensitive.
    pub fn parse(tag: &str) -> Result<Self, FormatError> {
        let language = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "ru" => Ok(Self::Ru),
            "az" => Ok(Self::Az),
            "en" => Ok(Self::En),
            _ => Err(FormatError::InvalidLocale(tag.to_string())),
        }
    }
}

fn month_index(month: u32) -> Option<usize> {
    (1..=12).contains(&month).then(|| month as usize - 1)
}

impl FromStr for Locale {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(Locale::parse("ru").unwrap(), Locale::Ru);
        assert_eq!(Locale::parse("ru-RU").unwrap(), Locale::Ru);
        assert_eq!(Locale::parse("AZ_az").unwrap(), Locale::Az);
        assert_eq!(Locale::parse(" en-US ").unwrap(), Locale::En);
    }

    #[test]
    fn test_parse_unsupported() {
        let err = Locale::parse("de-DE").unwrap_err();
        assert!(matches!(err, FormatError::InvalidLocale(_)));
        assert!(Locale::parse("").is_err());
    }

    #[test]
    fn test_month_names() {
        assert_eq!(Locale::En.month_name(5), Some("May"));
        assert_eq!(Locale::Ru.month_name(5), Some("май"));
        assert_eq!(Locale::Ru.month_name_in_date(5), Some("мая"));
        assert_eq!(Locale::Az.month_name_in_date(8), Some("avqust"));
        assert_eq!(Locale::En.month_name(0), None);
        assert_eq!(Locale::En.month_name(13), None);
    }

    #[test]
    fn test_separators() {
        assert_eq!(Locale::Ru.decimal_separator(), ",");
        assert_eq!(Locale::Ru.group_separator(), "\u{a0}");
        assert_eq!(Locale::En.decimal_separator(), ".");
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Locale::Az).unwrap(), "\"az\"");
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn test_display() {
        assert_eq!(Locale::Ru.to_string(), "ru-RU");
    }
}
