// SPDX-License-Identifier: MPL-2.0
//! Loading and saving presenter preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast duration and transition windows
//! - `[dialog]` - Confirmation overlay transition windows
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_NOTIFY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_notify::config;
//! use std::path::Path;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save_to_path(&config, Path::new("settings.toml")).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use crate::ui::lifecycle::Transition;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when the file exists but cannot be read.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Theme mode (light, dark, or system).
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

/// Toast timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    /// Default display time before auto-dismiss, in milliseconds.
    #[serde(default = "default_duration_ms", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    /// Delay before a freshly inserted toast turns visible.
    #[serde(
        default = "default_notification_enter_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub enter_delay_ms: Option<u64>,

    /// Exit window before a dismissed toast is removed.
    #[serde(
        default = "default_notification_exit_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_transition_ms: Option<u64>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            enter_delay_ms: default_notification_enter_delay_ms(),
            exit_transition_ms: default_notification_exit_ms(),
        }
    }
}

impl NotificationConfig {
    /// Default display duration, clamped to the supported range.
    #[must_use]
    pub fn duration(&self) -> Duration {
        let ms = self
            .duration_ms
            .unwrap_or(DEFAULT_NOTIFICATION_DURATION_MS)
            .clamp(MIN_NOTIFICATION_DURATION_MS, MAX_NOTIFICATION_DURATION_MS);
        Duration::from_millis(ms)
    }

    /// Enter delay and exit window for toasts.
    #[must_use]
    pub fn transition(&self) -> Transition {
        transition_from(
            self.enter_delay_ms
                .unwrap_or(DEFAULT_NOTIFICATION_ENTER_DELAY_MS),
            self.exit_transition_ms
                .unwrap_or(DEFAULT_NOTIFICATION_EXIT_MS),
        )
    }
}

/// Confirmation overlay timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogConfig {
    #[serde(
        default = "default_dialog_enter_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub enter_delay_ms: Option<u64>,

    #[serde(
        default = "default_dialog_exit_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_transition_ms: Option<u64>,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: default_dialog_enter_delay_ms(),
            exit_transition_ms: default_dialog_exit_ms(),
        }
    }
}

impl DialogConfig {
    /// Enter delay and exit window for confirmation overlays.
    #[must_use]
    pub fn transition(&self) -> Transition {
        transition_from(
            self.enter_delay_ms.unwrap_or(DEFAULT_DIALOG_ENTER_DELAY_MS),
            self.exit_transition_ms.unwrap_or(DEFAULT_DIALOG_EXIT_MS),
        )
    }
}

fn transition_from(enter_delay_ms: u64, exit_ms: u64) -> Transition {
    Transition {
        enter_delay: Duration::from_millis(
            enter_delay_ms.clamp(MIN_ENTER_DELAY_MS, MAX_ENTER_DELAY_MS),
        ),
        exit: Duration::from_millis(exit_ms.min(MAX_TRANSITION_MS)),
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub dialog: DialogConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_DURATION_MS)
}

fn default_notification_enter_delay_ms() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_ENTER_DELAY_MS)
}

fn default_notification_exit_ms() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_EXIT_MS)
}

fn default_dialog_enter_delay_ms() -> Option<u64> {
    Some(DEFAULT_DIALOG_ENTER_DELAY_MS)
}

fn default_dialog_exit_ms() -> Option<u64> {
    Some(DEFAULT_DIALOG_EXIT_MS)
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
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), "falling back to default config: {err}");
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
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

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
