//! # Configuration
//!
//! Settings live in `config.json` inside the configuration directory. A
//! missing file means defaults; a missing key means that key's default.
//!
//! ## Directory Resolution
//!
//! 1. `--config-dir` on the command line
//! 2. `DRUGAI_HOME`
//! 3. The OS-appropriate config directory (via the `directories` crate)
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `api-url` | unset | Base URL of the hosted services (`DRUGAI_API_URL` overrides) |
//! | `catalog-path` | unset | JSON catalog to use instead of the built-in one |
//! | `narrow-below` | `100` | Terminal width under which the narrow layout is used |
//! | `page-size-narrow` | `3` | Records per page on narrow layouts |
//! | `page-size-wide` | `6` | Records per page otherwise |
//! | `default-sort` | `Trending` | Sort used when none is given |
//! | `request-timeout-secs` | `30` | Timeout for service calls |

use crate::error::{DrugaiError, Result};
use crate::layout::{
    PageSizes, DEFAULT_NARROW_BELOW, DEFAULT_NARROW_PAGE_SIZE, DEFAULT_WIDE_PAGE_SIZE,
};
use crate::pipeline::SortOption;
use crate::service::DEFAULT_TIMEOUT_SECS;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
pub const HOME_ENV: &str = "DRUGAI_HOME";
pub const API_URL_ENV: &str = "DRUGAI_API_URL";

pub const KEYS: [&str; 7] = [
    "api-url",
    "catalog-path",
    "narrow-below",
    "page-size-narrow",
    "page-size-wide",
    "default-sort",
    "request-timeout-secs",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrugaiConfig {
    #[serde(default)]
    pub api_url: Option<String>,

    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    #[serde(default = "default_narrow_below")]
    pub narrow_below: u16,

    #[serde(default = "default_page_size_narrow")]
    pub page_size_narrow: usize,

    #[serde(default = "default_page_size_wide")]
    pub page_size_wide: usize,

    #[serde(default = "default_sort")]
    pub default_sort: String,

    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

fn default_narrow_below() -> u16 {
    DEFAULT_NARROW_BELOW
}

fn default_page_size_narrow() -> usize {
    DEFAULT_NARROW_PAGE_SIZE
}

fn default_page_size_wide() -> usize {
    DEFAULT_WIDE_PAGE_SIZE
}

fn default_sort() -> String {
    SortOption::Trending.label().to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for DrugaiConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            catalog_path: None,
            narrow_below: default_narrow_below(),
            page_size_narrow: default_page_size_narrow(),
            page_size_wide: default_page_size_wide(),
            default_sort: default_sort(),
            request_timeout_secs: default_timeout(),
        }
    }
}

impl DrugaiConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DrugaiError::Io)?;
        let config: DrugaiConfig =
            serde_json::from_str(&content).map_err(DrugaiError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DrugaiError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(DrugaiError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(DrugaiError::Io)?;
        Ok(())
    }

    /// Applies `DRUGAI_API_URL` on top of the stored value.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_url = Some(url);
            }
        }
        self
    }

    pub fn page_sizes(&self) -> PageSizes {
        PageSizes {
            narrow: self.page_size_narrow.max(1),
            wide: self.page_size_wide.max(1),
        }
    }

    pub fn sort(&self) -> SortOption {
        SortOption::from_label(&self.default_sort)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "api-url" => self.api_url.clone().unwrap_or_default(),
            "catalog-path" => self
                .catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "narrow-below" => self.narrow_below.to_string(),
            "page-size-narrow" => self.page_size_narrow.to_string(),
            "page-size-wide" => self.page_size_wide.to_string(),
            "default-sort" => self.default_sort.clone(),
            "request-timeout-secs" => self.request_timeout_secs.to_string(),
            other => return Err(unknown_key(other)),
        };
        Ok(value)
    }

    /// Sets `key` from its string form. An empty value clears optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api-url" => self.api_url = non_empty(value),
            "catalog-path" => self.catalog_path = non_empty(value).map(PathBuf::from),
            "narrow-below" => self.narrow_below = parse_number(key, value)?,
            "page-size-narrow" => self.page_size_narrow = parse_page_size(key, value)?,
            "page-size-wide" => self.page_size_wide = parse_page_size(key, value)?,
            "default-sort" => self.default_sort = SortOption::from_label(value).label().into(),
            "request-timeout-secs" => self.request_timeout_secs = parse_number(key, value)?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

/// Picks the configuration directory, highest priority first.
pub fn resolve_config_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Ok(home) = std::env::var(HOME_ENV) {
        if !home.trim().is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    ProjectDirs::from("com", "drugai", "drugai")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DrugaiError::Config("Could not determine config dir".into()))
}

fn unknown_key(key: &str) -> DrugaiError {
    DrugaiError::Config(format!(
        "Unknown config key: {} (expected one of {})",
        key,
        KEYS.join(", ")
    ))
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_number<N: std::str::FromStr>(key: &str, value: &str) -> Result<N> {
    value
        .trim()
        .parse()
        .map_err(|_| DrugaiError::Config(format!("{} expects a number, got \"{}\"", key, value)))
}

fn parse_page_size(key: &str, value: &str) -> Result<usize> {
    match parse_number::<usize>(key, value)? {
        0 => Err(DrugaiError::Config(format!("{} must be at least 1", key))),
        n => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DrugaiConfig::default();
        assert_eq!(config.api_url, None);
        assert_eq!(config.page_sizes(), PageSizes { narrow: 3, wide: 6 });
        assert_eq!(config.sort(), SortOption::Trending);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = DrugaiConfig::load(dir.path()).unwrap();
        assert_eq!(config, DrugaiConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = DrugaiConfig::default();
        config.set("api-url", "https://api.example.com").unwrap();
        config.set("page-size-wide", "9").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = DrugaiConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.api_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(loaded.page_size_wide, 9);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.json"), r#"{"narrow_below": 80}"#).unwrap();
        let config = DrugaiConfig::load(dir.path()).unwrap();
        assert_eq!(config.narrow_below, 80);
        assert_eq!(config.page_size_wide, 6);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.json"), "{not json").unwrap();
        assert!(matches!(
            DrugaiConfig::load(dir.path()),
            Err(DrugaiError::Serialization(_))
        ));
    }

    #[test]
    fn test_set_normalizes_sort_labels() {
        let mut config = DrugaiConfig::default();
        config.set("default-sort", "citations").unwrap();
        assert_eq!(config.get("default-sort").unwrap(), "Most citations");
        config.set("default-sort", "whatever").unwrap();
        assert_eq!(config.sort(), SortOption::ByRecency);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = DrugaiConfig::default();
        assert!(config.set("page-size-narrow", "0").is_err());
        assert!(config.set("narrow-below", "wide").is_err());
        assert!(config.set("colour", "blue").is_err());
    }

    #[test]
    fn test_empty_value_clears_optional_keys() {
        let mut config = DrugaiConfig::default();
        config.set("catalog-path", "/tmp/models.json").unwrap();
        assert_eq!(config.get("catalog-path").unwrap(), "/tmp/models.json");
        config.set("catalog-path", "").unwrap();
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_every_key_is_readable() {
        let config = DrugaiConfig::default();
        for key in KEYS {
            assert!(config.get(key).is_ok(), "{}", key);
        }
    }

    #[test]
    fn test_flag_wins_over_env() {
        let dir = PathBuf::from("/tmp/drugai-flag");
        assert_eq!(resolve_config_dir(Some(dir.clone())).unwrap(), dir);
    }
}
