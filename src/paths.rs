// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first of these wins: an explicit directory, `--config-dir`,
//! `ICED_NOTIFY_CONFIG_DIR`, then `<platform config dir>/IcedNotify`.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR: &str = "IcedNotify";

pub const ENV_CONFIG_DIR: &str = "ICED_NOTIFY_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records `--config-dir`. Only the first call counts.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized, ignoring");
    }
}

/// Resolves the config directory, preferring `explicit` when given.
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(|| {
            std::env::var_os(ENV_CONFIG_DIR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR)))
}
