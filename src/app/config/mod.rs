// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode and the section shown at startup
//! - `[icons]` - Icon directory behavior (copy acknowledgment delay)
//! - `[catalog]` - Directory with catalog files that replace the bundled ones
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `STYLEBOOK_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use stylebook::app::config;
//! use stylebook::ui::theming::ThemeMode;
//!
//! let (mut config, _warning) = config::load();
//! config.general.theme_mode = ThemeMode::Dark;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::icon_directory::CopyDelay;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,

    /// Menu label opened at startup instead of the catalog default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_section: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            default_section: None,
        }
    }
}

/// Icon directory settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IconsConfig {
    /// How long "Copied!" stays visible, in milliseconds.
    #[serde(
        default = "default_copy_ack_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub copy_ack_ms: Option<u64>,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            copy_ack_ms: default_copy_ack_ms(),
        }
    }
}

impl IconsConfig {
    /// The configured delay, clamped into range.
    pub fn copy_delay(&self) -> CopyDelay {
        self.copy_ack_ms.map(CopyDelay::new).unwrap_or_default()
    }
}

/// Catalog source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub icons: IconsConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_copy_ack_ms() -> Option<u64> {
    Some(DEFAULT_COPY_ACK_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
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
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "could not read {}, using defaults: {err}",
                            path.display()
                        )),
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

/// Saves configuration to a specific path, creating parent directories.
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
                default_section: Some("Buttons".to_string()),
            },
            icons: IconsConfig {
                copy_ack_ms: Some(900),
            },
            catalog: CatalogConfig {
                dir: Some(PathBuf::from("/srv/catalog")),
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
        fs::write(&config_path, "[general\ntheme_mode = ").expect("write");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_from_path_missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"dark\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.general.default_section, None);
        assert_eq!(config.icons.copy_ack_ms, Some(DEFAULT_COPY_ACK_MS));
        assert_eq!(config.catalog.dir, None);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"Light\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn copy_delay_is_clamped() {
        let icons = IconsConfig {
            copy_ack_ms: Some(5),
        };
        assert_eq!(icons.copy_delay().value(), MIN_COPY_ACK_MS);

        let icons = IconsConfig { copy_ack_ms: None };
        assert_eq!(icons.copy_delay().value(), DEFAULT_COPY_ACK_MS);
    }

    #[test]
    fn broken_file_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[icons]\ncopy_ack_ms = \"soon\"\n")
            .expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some_and(|message| message.contains("using defaults")));
    }

    #[test]
    fn absent_file_loads_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;

        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }
}
