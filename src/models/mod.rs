//! Core data models for manat-format
//!
//! Amounts in minor units, display locales, and month identifiers.

pub mod locale;
pub mod money;
pub mod month;

pub use locale::Locale;
pub use money::Money;
pub use month::{current_month, next_month, previous_month, MonthId};
