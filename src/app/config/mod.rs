// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Thumbnail size, spacing, cache capacity and remote fetching
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_GALLERY_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.gallery.thumbnail_size = Some(192);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery and thumbnail settings.
///
/// Values are stored as written; use the `effective_*` accessors to read them
/// clamped to their supported range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Tile edge length in logical pixels.
    #[serde(
        default = "default_thumbnail_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_size: Option<u32>,

    /// Gap between tiles and between sections.
    #[serde(
        default = "default_tile_spacing",
        skip_serializing_if = "Option::is_none"
    )]
    pub tile_spacing: Option<u16>,

    /// Maximum number of thumbnails kept in memory.
    #[serde(
        default = "default_cache_max_thumbnails",
        skip_serializing_if = "Option::is_none"
    )]
    pub cache_max_thumbnails: Option<usize>,

    /// Origin prepended to server-relative thumbnail URLs
    /// (e.g. `http://localhost:8888`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Timeout for remote thumbnail requests.
    #[serde(
        default = "default_fetch_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub fetch_timeout_secs: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            thumbnail_size: default_thumbnail_size(),
            tile_spacing: default_tile_spacing(),
            cache_max_thumbnails: default_cache_max_thumbnails(),
            base_url: None,
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn effective_thumbnail_size(&self) -> u32 {
        self.thumbnail_size
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }

    #[must_use]
    pub fn effective_tile_spacing(&self) -> u16 {
        self.tile_spacing
            .unwrap_or(DEFAULT_TILE_SPACING)
            .min(MAX_TILE_SPACING)
    }

    #[must_use]
    pub fn effective_cache_max_thumbnails(&self) -> usize {
        self.cache_max_thumbnails
            .unwrap_or(DEFAULT_MAX_THUMBNAILS)
            .clamp(MIN_MAX_THUMBNAILS, MAX_MAX_THUMBNAILS)
    }

    #[must_use]
    pub fn effective_fetch_timeout(&self) -> Duration {
        Duration::from_secs(
            self.fetch_timeout_secs
                .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS)
                .clamp(MIN_FETCH_TIMEOUT_SECS, MAX_FETCH_TIMEOUT_SECS),
        )
    }

    /// Base URL with surrounding whitespace removed; empty strings count as unset.
    #[must_use]
    pub fn effective_base_url(&self) -> Option<String> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery and thumbnail settings.
    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_thumbnail_size() -> Option<u32> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

fn default_tile_spacing() -> Option<u16> {
    Some(DEFAULT_TILE_SPACING)
}

fn default_cache_max_thumbnails() -> Option<usize> {
    Some(DEFAULT_MAX_THUMBNAILS)
}

fn default_fetch_timeout_secs() -> Option<u64> {
    Some(DEFAULT_FETCH_TIMEOUT_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                thumbnail_size: Some(128),
                tile_spacing: Some(4),
                cache_max_thumbnails: Some(64),
                base_url: Some("http://localhost:8888".to_string()),
                fetch_timeout_secs: Some(30),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_theme_mode_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n")
            .expect("failed to write config");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("invalid theme_mode")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("config should parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.gallery.thumbnail_size, Some(DEFAULT_THUMBNAIL_SIZE));
        assert_eq!(config.gallery.tile_spacing, Some(DEFAULT_TILE_SPACING));
        assert_eq!(
            config.gallery.cache_max_thumbnails,
            Some(DEFAULT_MAX_THUMBNAILS)
        );
        assert_eq!(config.gallery.base_url, None);
        assert_eq!(
            config.gallery.fetch_timeout_secs,
            Some(DEFAULT_FETCH_TIMEOUT_SECS)
        );
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config =
            toml::from_str("[general]\nlanguage = \"fr\"\n").expect("config should parse");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.gallery, GalleryConfig::default());
    }

    #[test]
    fn effective_values_are_clamped() {
        let gallery = GalleryConfig {
            thumbnail_size: Some(4),
            tile_spacing: Some(500),
            cache_max_thumbnails: Some(1),
            base_url: Some("   ".to_string()),
            fetch_timeout_secs: Some(0),
        };
        assert_eq!(gallery.effective_thumbnail_size(), MIN_THUMBNAIL_SIZE);
        assert_eq!(gallery.effective_tile_spacing(), MAX_TILE_SPACING);
        assert_eq!(gallery.effective_cache_max_thumbnails(), MIN_MAX_THUMBNAILS);
        assert_eq!(gallery.effective_base_url(), None);
        assert_eq!(
            gallery.effective_fetch_timeout(),
            Duration::from_secs(MIN_FETCH_TIMEOUT_SECS)
        );

        let gallery = GalleryConfig {
            thumbnail_size: Some(10_000),
            cache_max_thumbnails: Some(1_000_000),
            fetch_timeout_secs: Some(3600),
            ..GalleryConfig::default()
        };
        assert_eq!(gallery.effective_thumbnail_size(), MAX_THUMBNAIL_SIZE);
        assert_eq!(gallery.effective_cache_max_thumbnails(), MAX_MAX_THUMBNAILS);
        assert_eq!(
            gallery.effective_fetch_timeout(),
            Duration::from_secs(MAX_FETCH_TIMEOUT_SECS)
        );
    }

    #[test]
    fn unset_values_use_defaults() {
        let gallery = GalleryConfig {
            thumbnail_size: None,
            tile_spacing: None,
            cache_max_thumbnails: None,
            base_url: None,
            fetch_timeout_secs: None,
        };
        assert_eq!(gallery.effective_thumbnail_size(), DEFAULT_THUMBNAIL_SIZE);
        assert_eq!(gallery.effective_tile_spacing(), DEFAULT_TILE_SPACING);
        assert_eq!(
            gallery.effective_cache_max_thumbnails(),
            DEFAULT_MAX_THUMBNAILS
        );
    }

    #[test]
    fn base_url_is_trimmed() {
        let gallery = GalleryConfig {
            base_url: Some(" http://localhost:8888 ".to_string()),
            ..GalleryConfig::default()
        };
        assert_eq!(
            gallery.effective_base_url().as_deref(),
            Some("http://localhost:8888")
        );
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        config.gallery.thumbnail_size = Some(192);

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(CONFIG_FILE), "this is [not valid toml")
            .expect("failed to write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("failed to save config");
        let content = fs::read_to_string(&config_path).expect("failed to read config");

        assert!(content.contains("[general]"));
        assert!(content.contains("[gallery]"));
        assert!(content.contains("thumbnail_size = 256"));
    }
}
