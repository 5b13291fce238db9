// SPDX-License-Identifier: MPL-2.0
use iced_notify::app::{self, Flags};
use iced_notify::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();

    let theme_mode = if args.contains("--dark") {
        Some(ThemeMode::Dark)
    } else if args.contains("--light") {
        Some(ThemeMode::Light)
    } else {
        None
    };

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --lang");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --config-dir");
            None
        }),
        theme_mode,
    };

    let leftover = args.finish();
    if !leftover.is_empty() {
        tracing::warn!(?leftover, "unrecognized arguments");
    }

    app::run(flags)
}
