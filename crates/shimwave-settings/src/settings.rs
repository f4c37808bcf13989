//! Settings file model and persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};
use shimwave_core::ConversionOptions;
use tracing::debug;

use crate::error::{Result, SettingsError};

/// On-disk settings format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Format for `path`, or `UnsupportedFormat` for anything but `.json`
    /// and `.toml`.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// How waveforms are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Indent JSON output.
    pub pretty: bool,
    /// Write `batch_summary.json` in batch mode.
    pub write_summary: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            pretty: false,
            write_summary: true,
        }
    }
}

/// Complete settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub conversion: ConversionOptions,
    pub output: OutputSettings,
}

impl Settings {
    /// Load settings from a `.json` or `.toml` file and validate them.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Validate and save settings to a `.json` or `.toml` file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        debug!("Saved settings to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.conversion.validate()?;
        Ok(())
    }
}
