use crate::error::{Result, WardrobeError};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "POCKET_WARDROBE_CONFIG";

/// User configuration, read from `config.toml`.
/// Every field is optional in the file; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated latency between a selfie upload request and the preview
    pub upload_delay_ms: u64,
    /// Keep at most this many outfits (unset = unbounded, zero is rejected)
    pub max_outfits: Option<NonZeroUsize>,
    /// Fixed seed for outfit generation and try-on suggestions
    pub selection_seed: Option<u64>,
    /// Start with the bundled demo wardrobe
    pub load_sample_data: bool,
    /// Max log level: error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_delay_ms: 1000,
            max_outfits: None,
            selection_seed: None,
            load_sample_data: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from the default location; a missing file gives defaults
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// `$POCKET_WARDROBE_CONFIG`, else `<config dir>/pocket-wardrobe/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let mut path = dirs::config_dir().ok_or(WardrobeError::NoConfigDir)?;
        path.push("pocket-wardrobe");
        path.push("config.toml");
        Ok(path)
    }

    pub fn upload_delay(&self) -> Duration {
        Duration::from_millis(self.upload_delay_ms)
    }

    /// Parsed log level, falling back to INFO for unknown names
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.upload_delay(), Duration::from_secs(1));
        assert_eq!(config.max_outfits, None);
        assert!(config.load_sample_data);
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_overrides_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "max_outfits = 10\nselection_seed = 7\nlog_level = \"debug\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.max_outfits, NonZeroUsize::new(10));
        assert_eq!(config.selection_seed, Some(7));
        assert_eq!(config.upload_delay_ms, 1000);
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_zero_outfit_limit_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "max_outfits = 0").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(WardrobeError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "upload_delay_ms = \"soon\"").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(WardrobeError::ConfigParse(_))
        ));
    }
}
