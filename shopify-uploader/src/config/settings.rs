//! Import settings with defaults, an optional TOML file and CLI overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::DEFAULT_ENCODING;

/// Fabric shown in product descriptions unless configured otherwise
pub const DEFAULT_FABRIC: &str = "Polyester";

/// Pause after each submitted product
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Settings for one import run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSettings {
    /// Encoding label of the uploaded CSV (e.g. "shift_jis", "utf-8")
    pub encoding: String,
    /// Fabric label written into every description
    pub fabric: String,
    /// Pause after every submission, successful or not
    pub delay: Duration,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
            fabric: DEFAULT_FABRIC.to_string(),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }
}

/// On-disk representation; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    encoding: Option<String>,
    fabric: Option<String>,
    delay_ms: Option<u64>,
}

/// Overrides taken from the command line
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub encoding: Option<String>,
    pub fabric: Option<String>,
    pub delay_ms: Option<u64>,
}

impl ImportSettings {
    /// Default config location (~/.config/shopify-uploader/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shopify-uploader").join("config.toml"))
    }

    /// Load settings from `path`, or from the default location when present.
    ///
    /// An explicitly given file must exist; the default one is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: SettingsFile = toml::from_str(content).context("Failed to parse TOML")?;
        let defaults = Self::default();

        Ok(Self {
            encoding: file.encoding.unwrap_or(defaults.encoding),
            fabric: file.fabric.unwrap_or(defaults.fabric),
            delay: file.delay_ms.map(Duration::from_millis).unwrap_or(defaults.delay),
        })
    }

    /// Apply command-line overrides on top of these settings
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(encoding) = overrides.encoding {
            self.encoding = encoding;
        }
        if let Some(fabric) = overrides.fabric {
            self.fabric = fabric;
        }
        if let Some(delay_ms) = overrides.delay_ms {
            self.delay = Duration::from_millis(delay_ms);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ImportSettings::default();
        assert_eq!(settings.encoding, "shift_jis");
        assert_eq!(settings.fabric, "Polyester");
        assert_eq!(settings.delay, Duration::from_secs(1));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = ImportSettings::from_toml_str("fabric = \"Cotton 100%\"\n").unwrap();
        assert_eq!(settings.fabric, "Cotton 100%");
        assert_eq!(settings.encoding, "shift_jis");
        assert_eq!(settings.delay, Duration::from_millis(DEFAULT_DELAY_MS));
    }

    #[test]
    fn test_full_file() {
        let settings = ImportSettings::from_toml_str(
            "encoding = \"utf-8\"\nfabric = \"Linen\"\ndelay_ms = 250\n",
        )
        .unwrap();
        assert_eq!(settings.encoding, "utf-8");
        assert_eq!(settings.fabric, "Linen");
        assert_eq!(settings.delay, Duration::from_millis(250));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(ImportSettings::from_toml_str("fabrik = \"Linen\"\n").is_err());
    }

    #[test]
    fn test_overrides_win() {
        let settings = ImportSettings::from_toml_str("fabric = \"Linen\"\ndelay_ms = 250\n")
            .unwrap()
            .with_overrides(SettingsOverrides {
                encoding: None,
                fabric: Some("Wool".to_string()),
                delay_ms: Some(0),
            });
        assert_eq!(settings.fabric, "Wool");
        assert_eq!(settings.delay, Duration::ZERO);
        assert_eq!(settings.encoding, "shift_jis");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let path = Path::new("/nonexistent/shopify-uploader/config.toml");
        assert!(ImportSettings::load(Some(path)).is_err());
    }
}
