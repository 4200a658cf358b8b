use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::paths;
use crate::error::{Result, TierError};
use crate::locale::Locale;

/// Presentation preferences. Never changes table contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplaySettings {
    #[serde(default)]
    pub format: OutputFormat,
    /// Locale columns to show, in this order.
    #[serde(default = "default_locales")]
    pub locales: Vec<Locale>,
}

fn default_locales() -> Vec<Locale> {
    Locale::ALL.to_vec()
}

impl DisplaySettings {
    /// Configured locales with repeats dropped, first occurrence wins.
    pub fn unique_locales(&self) -> Vec<Locale> {
        let mut seen = Vec::with_capacity(self.locales.len());
        for locale in &self.locales {
            if !seen.contains(locale) {
                seen.push(*locale);
            }
        }
        seen
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            locales: default_locales(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = TierError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(TierError::Config(format!("unknown output format '{}'", other))),
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(paths::CONFIG_DIR)
            .join(paths::CONFIG_FILE)
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_or_default(&Self::config_path())
    }

    /// Load from `path`; a missing or unparseable file yields defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut settings: Settings = toml::from_str(&content)
            .map_err(|e| TierError::Config(e.to_string()))?;
        settings.display.locales = settings.display.unique_locales();
        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| TierError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shows_every_locale_as_text() {
        let settings = Settings::default();
        assert_eq!(settings.display.format, OutputFormat::Text);
        assert_eq!(settings.display.locales, vec![Locale::En, Locale::Tr]);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("[display]\nformat = \"json\"\n").unwrap();
        assert_eq!(settings.display.format, OutputFormat::Json);
        assert_eq!(settings.display.locales, Locale::ALL.to_vec());

        let empty: Settings = toml::from_str("").unwrap();
        assert_eq!(empty, Settings::default());
    }

    #[test]
    fn test_unique_locales_keeps_first_occurrence() {
        let display = DisplaySettings {
            format: OutputFormat::Text,
            locales: vec![Locale::Tr, Locale::En, Locale::Tr, Locale::En],
        };
        assert_eq!(display.unique_locales(), vec![Locale::Tr, Locale::En]);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!("yaml".parse::<OutputFormat>(), Err(TierError::Config(_))));
    }
}
