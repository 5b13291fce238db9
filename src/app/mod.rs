// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a [`Presenter`].
//!
//! The `App` owns the presenter, forwards its messages, layers its overlay
//! above a small screen of trigger buttons, and turns confirmation futures
//! into messages with `Task::perform`.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::I18n;
use crate::paths;
use crate::presenter::{DialogService, Presenter};
use crate::ui::dialog::ConfirmRequest;
use crate::ui::theming::{self, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 600;

/// Names cycled through by the delete demo.
const DEMO_ITEMS: [&str; 3] = ["report.pdf", "holiday.png", "notes.txt"];

#[derive(Debug, Default)]
pub struct App {
    presenter: Presenter,
    theme_mode: ThemeMode,
    next_item: usize,
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let theme_mode = flags.theme_mode.unwrap_or(config.general.theme_mode);
        let mut presenter = Presenter::new(i18n, &config);
        presenter.set_dark_mode(theme_mode.is_dark());

        if let Some(key) = config_warning {
            let message = presenter.i18n().tr(&key);
            presenter.warning(&message, None);
        }

        let app = Self {
            presenter,
            theme_mode,
            next_item: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.presenter.i18n().tr("demo-window-title")
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.presenter.is_dark())
    }

    fn subscription(&self) -> Subscription<Message> {
        self.presenter.subscription().map(Message::Presenter)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Presenter(message) => self.presenter.update(message),
            Message::ShowSuccess => {
                let text = self.tr("demo-message-saved");
                self.presenter.success(&text, None);
            }
            Message::ShowError => {
                let text = self.tr("demo-message-upload-failed");
                self.presenter.error(&text, None);
            }
            Message::ShowWarning => {
                let text = self.tr("demo-message-storage");
                self.presenter.warning(&text, None);
            }
            Message::ShowInfo => {
                let text = self.tr("demo-message-tip");
                self.presenter.info(&text, None);
            }
            Message::ShowAlert => {
                let text = self.tr("demo-message-alert");
                self.presenter.alert(&text);
            }
            Message::DeleteRequested => return self.request_delete(),
            Message::DeleteAnswered { item, confirmed } => {
                let key = if confirmed {
                    "demo-message-deleted"
                } else {
                    "demo-message-kept"
                };
                let text = self
                    .presenter
                    .i18n()
                    .tr_with_args(key, &[("item", item.as_str())]);
                if confirmed {
                    self.presenter.success(&text, None);
                } else {
                    self.presenter.info(&text, None);
                }
            }
            Message::ToggleDarkMode => {
                let dark = !self.presenter.is_dark();
                self.theme_mode = if dark { ThemeMode::Dark } else { ThemeMode::Light };
                self.presenter.set_dark_mode(dark);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn request_delete(&mut self) -> Task<Message> {
        let item = DEMO_ITEMS[self.next_item % DEMO_ITEMS.len()].to_owned();
        self.next_item += 1;

        let message = self
            .presenter
            .i18n()
            .tr_with_args("demo-message-delete", &[("item", item.as_str())]);
        let pending = self.presenter.confirm(ConfirmRequest::new(message));

        Task::perform(pending, move |confirmed| Message::DeleteAnswered {
            item: item.clone(),
            confirmed,
        })
    }

    fn tr(&self, key: &str) -> String {
        self.presenter.i18n().tr(key)
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }
}
