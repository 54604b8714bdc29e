//! manat-format - currency and date display formatting for household finance
//!
//! Converts integer minor-unit amounts and backend timestamps into
//! locale-formatted display strings, and navigates `YYYY-MM` months.
//!
//! # Architecture
//!
//! - `models`: amounts, locales and month identifiers
//! - `display`: number, currency and date formatting, plus the per-locale
//!   formatter cache
//! - `config`: path resolution and persisted display settings
//! - `cli`: handlers behind the `manat` binary
//! - `error`: custom error types
//!
//! # Example
//!
//! ```
//! use manat_format::display::{FormatContext, Formatter};
//! use manat_format::models::Locale;
//!
//! let formatter = Formatter::new();
//! let ctx = FormatContext::utc(Locale::Ru);
//! assert_eq!(formatter.currency(150, &ctx), "1,50 ₼");
//! assert_eq!(formatter.date_time("2024-05-03T14:30", &ctx), "03.05.24 - 14:30");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;

pub use display::{FormatContext, Formatter};
pub use error::{FormatError, FormatResult};
