// ABOUTME: TOML configuration persisted under the user's home directory

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Application configuration, loaded from `~/.bookstand/config/config.toml`.
/// Every field has a default so a missing or partial file still loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui_preferences: UiPreferences,
    #[serde(default)]
    pub booking: BookingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Simulated payment duration in milliseconds.
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_processing_delay_ms() -> u64 {
    1500
}

pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".bookstand").join("config").join("config.toml"))
}

impl AppConfig {
    /// Load the configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_sensible() {
        let config = AppConfig::default();
        assert_eq!(config.ui_preferences.currency_symbol, "₹");
        assert_eq!(config.booking.processing_delay_ms, 1500);
    }

    #[test]
    fn partial_toml_fills_missing_sections_with_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [booking]
            processing_delay_ms = 250
            "#,
        )
        .expect("valid toml");
        assert_eq!(config.booking.processing_delay_ms, 250);
        assert_eq!(config.ui_preferences.currency_symbol, "₹");
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: AppConfig = toml::from_str("").expect("valid toml");
        assert_eq!(config.booking.processing_delay_ms, 1500);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = AppConfig::default();
        config.ui_preferences.currency_symbol = "$".to_string();
        let text = toml::to_string_pretty(&config).expect("serializes");
        let parsed: AppConfig = toml::from_str(&text).expect("parses");
        assert_eq!(parsed.ui_preferences.currency_symbol, "$");
    }
}
