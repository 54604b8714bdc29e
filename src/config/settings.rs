//! User settings for manat-format
//!
//! Persisted as JSON. Every field has a serde default so older or partial
//! files keep loading.

use chrono::{FixedOffset, Local, Offset};
use serde::{Deserialize, Serialize};

use super::paths::FormatPaths;
use crate::display::{FormatContext, Formatter, DEFAULT_CURRENCY_SYMBOL};
use crate::error::FormatError;
use crate::models::Locale;

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// UI language used for numbers, dates and month labels
    #[serde(default)]
    pub locale: Locale,

    /// Currency symbol appended to amounts (empty to omit)
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Offset from UTC in minutes, used for zoned timestamps and "today";
    /// the system zone when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
}

/// Newest settings layout this build understands
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            locale: Locale::default(),
            currency_symbol: default_currency(),
            utc_offset_minutes: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FormatPaths) -> Result<Self, FormatError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FormatError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.schema_version > CURRENT_SCHEMA_VERSION {
                return Err(FormatError::Config(format!(
                    "Settings schema version {} is newer than supported version {}",
                    settings.schema_version, CURRENT_SCHEMA_VERSION
                )));
            }

            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FormatPaths) -> Result<(), FormatError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, contents)?;

        tracing::info!(path = %settings_path.display(), "saved settings");
        Ok(())
    }

    /// The configured UTC offset, or the system zone's current offset
    ///
    /// # Errors
    ///
    /// Returns a config error when the configured offset is a day or more.
    pub fn timezone(&self) -> Result<FixedOffset, FormatError> {
        let Some(minutes) = self.utc_offset_minutes else {
            return Ok(Local::now().offset().fix());
        };

        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                FormatError::Config(format!("UTC offset out of range: {} minutes", minutes))
            })
    }

    /// Formatting context for the configured locale and offset
    pub fn context(&self) -> Result<FormatContext, FormatError> {
        Ok(FormatContext::new(self.locale, self.timezone()?))
    }

    /// Formatter using the configured currency symbol
    pub fn formatter(&self) -> Formatter {
        Formatter::with_symbol(self.currency_symbol.clone())
    }
}
