//! Application settings configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// Default welcome overlay auto-dismiss delay.
pub const DEFAULT_WELCOME_DELAY_MS: u64 = 3000;

/// Default event loop tick rate.
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Longest accepted welcome delay.
const MAX_WELCOME_DELAY_MS: u64 = 60_000;

/// Optional screen regions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeatureFlags {
    /// Show the search bar.
    pub search: bool,
    /// Show the category chips.
    pub categories: bool,
    /// Show the stats row.
    pub stats: bool,
    /// Show "new" badges on cards.
    pub new_badges: bool,
    /// Show the welcome overlay at startup.
    pub welcome: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            search: true,
            categories: true,
            stats: true,
            new_badges: true,
            welcome: true,
        }
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Delay before the welcome overlay hides itself.
    pub welcome_delay_ms: u64,
    /// Event loop tick rate.
    pub tick_rate_ms: u64,
    /// Interests data file; the built-in list is used when unset.
    pub data_file: Option<PathBuf>,
    /// Explicit category chips; derived from the data when unset.
    pub categories: Option<Vec<String>>,
    /// Optional screen regions.
    pub features: FeatureFlags,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            welcome_delay_ms: DEFAULT_WELCOME_DELAY_MS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            data_file: None,
            categories: None,
            features: FeatureFlags::default(),
        }
    }
}

impl Settings {
    /// The welcome delay as a duration.
    pub fn welcome_delay(&self) -> Duration {
        Duration::from_millis(self.welcome_delay_ms)
    }

    /// Validate these settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` if the tick rate is zero or
    /// the welcome delay exceeds one minute.
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError(
                "tick_rate_ms must be greater than zero".to_string(),
            ));
        }

        if self.welcome_delay_ms > MAX_WELCOME_DELAY_MS {
            return Err(ConfigError::ValidationError(format!(
                "welcome_delay_ms must be at most {} (got {})",
                MAX_WELCOME_DELAY_MS, self.welcome_delay_ms
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.welcome_delay(), Duration::from_secs(3));
        assert_eq!(settings.tick_rate_ms, 100);
        assert!(settings.data_file.is_none());
        assert!(settings.categories.is_none());
        assert_eq!(settings.features, FeatureFlags::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_all_features_enabled_by_default() {
        let features = FeatureFlags::default();
        assert!(features.search);
        assert!(features.categories);
        assert!(features.stats);
        assert!(features.new_badges);
        assert!(features.welcome);
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let settings = Settings {
            tick_rate_ms: 0,
            ..Default::default()
        };
        let result = settings.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("tick_rate_ms"));
    }

    #[test]
    fn test_long_welcome_delay_rejected() {
        let settings = Settings {
            welcome_delay_ms: 120_000,
            ..Default::default()
        };
        let result = settings.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("at most"));
    }

    #[test]
    fn test_zero_welcome_delay_accepted() {
        let settings = Settings {
            welcome_delay_ms: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_serialization() {
        let settings = Settings {
            data_file: Some(PathBuf::from("/tmp/interests.toml")),
            ..Default::default()
        };
        let toml_str = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, settings);
    }
}
