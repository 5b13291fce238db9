// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::presenter;
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Presenter(presenter::Message),
    ShowSuccess,
    ShowError,
    ShowWarning,
    ShowInfo,
    ShowAlert,
    DeleteRequested,
    /// The future returned by `confirm` settled.
    DeleteAnswered {
        item: String,
        confirmed: bool,
    },
    ToggleDarkMode,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_NOTIFY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// `--dark` or `--light`; the configured mode otherwise.
    pub theme_mode: Option<ThemeMode>,
}
