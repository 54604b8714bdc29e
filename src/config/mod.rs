//! Configuration module for manat-format
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Display settings persistence (locale, currency symbol, UTC offset)

pub mod paths;
pub mod settings;

pub use paths::FormatPaths;
pub use settings::Settings;
