// SPDX-License-Identifier: MPL-2.0
//! The presenter: one owner for toasts and confirmation dialogs.
//!
//! The host application keeps a [`Presenter`] in its state, forwards
//! [`Message`]s to [`Presenter::update`], layers [`Presenter::view`] over its
//! own content and batches [`Presenter::subscription`] into its own.
//!
//! ```no_run
//! use iced_notify::presenter::Presenter;
//!
//! let mut presenter = Presenter::default();
//! presenter.success("Profile saved", None);
//! let pending = presenter.confirm("Delete this item?");
//! ```
//!
//! All timing is read from the injected [`Clock`], so a test can hand the
//! presenter a [`crate::clock::ManualClock`] and step through transitions.

mod message;
mod service;

pub use message::Message;
pub use service::DialogService;

use crate::clock::{Clock, SystemClock};
use crate::config::{Config, DEFAULT_NOTIFICATION_DURATION_MS};
use crate::error::Result;
use crate::i18n::I18n;
use crate::ui::dialog::{
    self, ConfirmRequest, Dialog, DialogStack, DialogText, PendingConfirm, Resolution,
};
use crate::ui::lifecycle::Transition;
use crate::ui::notifications::{
    Category, Entry, Notification, NotificationId, Toast, ToastContainer,
};
use crate::ui::styles::StyleRegistry;
use iced::widget::Stack;
use iced::{event, keyboard, time, Element, Length, Subscription};
use std::time::{Duration, Instant};

/// Display time used by the per-category shortcuts.
const SHORTCUT_DURATION: Duration = Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS);

/// Frame interval while a transition is running.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Tick interval while only dismiss timers and progress bars are pending.
const PROGRESS_INTERVAL: Duration = Duration::from_millis(50);

const DIALOG_TITLE_KEY: &str = "dialog-confirm-title";
const DIALOG_CONFIRM_KEY: &str = "dialog-confirm-label";
const DIALOG_CANCEL_KEY: &str = "dialog-cancel-label";

/// Timings resolved from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub toast_duration: Duration,
    pub toast_transition: Transition,
    pub dialog_transition: Transition,
}

impl Timings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            toast_duration: config.notifications.duration(),
            toast_transition: config.notifications.transition(),
            dialog_transition: config.dialog.transition(),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug)]
pub struct Presenter {
    clock: Box<dyn Clock>,
    i18n: I18n,
    timings: Timings,
    styles: StyleRegistry,
    /// Created by the first notification.
    toasts: Option<ToastContainer>,
    dialogs: DialogStack,
    dark: bool,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(I18n::default(), &Config::default())
    }
}

impl Presenter {
    /// Creates a presenter on wall-clock time.
    #[must_use]
    pub fn new(i18n: I18n, config: &Config) -> Self {
        Self::with_clock(SystemClock, i18n, config)
    }

    /// Creates a presenter reading time from `clock`.
    #[must_use]
    pub fn with_clock(clock: impl Clock + 'static, i18n: I18n, config: &Config) -> Self {
        Self {
            clock: Box::new(clock),
            i18n,
            timings: Timings::from_config(config),
            styles: StyleRegistry::new(),
            toasts: None,
            dialogs: DialogStack::new(),
            dark: config.general.theme_mode.is_dark(),
        }
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Shows a toast and returns its handle.
    pub fn notify(&mut self, notification: Notification) -> NotificationId {
        self.styles.ensure();
        let now = self.clock.now();

        let category = notification.category();
        let title = notification
            .title()
            .map_or_else(|| self.i18n.tr(category.title_key()), str::to_owned);
        let duration = notification
            .duration()
            .unwrap_or(self.timings.toast_duration);

        let entry = Entry::new(
            notification,
            title,
            duration,
            now,
            self.timings.toast_transition,
        );
        let id = self.toasts.get_or_insert_with(ToastContainer::new).push(entry);

        tracing::debug!(?id, %category, ?duration, "notification shown");
        id
    }

    /// Shows a toast whose category is given by name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidCategory`] when `kind` is not one
    /// of `success`, `error`, `warning` or `info`. Nothing is shown.
    pub fn try_notify(&mut self, message: &str, kind: &str) -> Result<NotificationId> {
        let category = kind.parse::<Category>().inspect_err(|err| {
            tracing::warn!(%err, "notification rejected");
        })?;
        Ok(self.notify(Notification::new(category, message)))
    }

    pub fn success(&mut self, message: &str, title: Option<&str>) -> NotificationId {
        self.shortcut(Category::Success, message, title)
    }

    pub fn error(&mut self, message: &str, title: Option<&str>) -> NotificationId {
        self.shortcut(Category::Error, message, title)
    }

    pub fn warning(&mut self, message: &str, title: Option<&str>) -> NotificationId {
        self.shortcut(Category::Warning, message, title)
    }

    pub fn info(&mut self, message: &str, title: Option<&str>) -> NotificationId {
        self.shortcut(Category::Info, message, title)
    }

    fn shortcut(&mut self, category: Category, message: &str, title: Option<&str>) -> NotificationId {
        let mut notification = Notification::new(category, message).auto_dismiss(SHORTCUT_DURATION);
        if let Some(title) = title {
            notification = notification.with_title(title);
        }
        self.notify(notification)
    }

    /// Starts closing a toast. Returns `false` if it was already closing or
    /// is unknown.
    pub fn close(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        let closed = self
            .toasts
            .as_mut()
            .is_some_and(|toasts| toasts.close(id, now));
        if closed {
            tracing::debug!(?id, "notification closed");
        }
        closed
    }

    // =========================================================================
    // Dialogs
    // =========================================================================

    /// Opens a confirmation dialog.
    pub fn confirm(&mut self, request: impl Into<ConfirmRequest>) -> PendingConfirm {
        let request = request.into();
        self.styles.ensure();
        let now = self.clock.now();

        let resolve = |value: Option<&str>, key: &str| {
            value.map_or_else(|| self.i18n.tr(key), str::to_owned)
        };
        let text = DialogText {
            title: resolve(request.title(), DIALOG_TITLE_KEY),
            message: request.message().to_owned(),
            confirm_label: resolve(request.confirm_label(), DIALOG_CONFIRM_KEY),
            cancel_label: resolve(request.cancel_label(), DIALOG_CANCEL_KEY),
        };

        let (dialog, pending) = Dialog::open(text, now, self.timings.dialog_transition);
        let id = self.dialogs.push(dialog);
        tracing::debug!(?id, "dialog opened");
        pending
    }

    // =========================================================================
    // Host integration
    // =========================================================================

    pub fn update(&mut self, message: Message) {
        let now = self.clock.now();
        match message {
            Message::CloseNotification(id) => {
                self.close(id);
            }
            Message::Confirm(id) => {
                self.dialogs.resolve(id, Resolution::Confirmed, now);
            }
            Message::Cancel(id) => {
                self.dialogs.resolve(id, Resolution::Cancelled, now);
            }
            Message::Backdrop(id) => {
                self.dialogs.resolve(id, Resolution::Backdrop, now);
            }
            Message::Escape => {
                self.dialogs.escape(now);
            }
            Message::Tick(_) => self.tick(),
        }
    }

    /// Applies every transition that is due now and drops finished
    /// instances.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        if let Some(toasts) = self.toasts.as_mut() {
            for id in toasts.tick(now) {
                tracing::debug!(?id, "notification removed");
            }
        }
        for id in self.dialogs.tick(now) {
            tracing::debug!(?id, "dialog removed");
        }
    }

    /// Whether any toast or dialog is fading in or out.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        let now = self.clock.now();
        self.toasts
            .as_ref()
            .is_some_and(|toasts| toasts.is_animating(now))
            || self.dialogs.is_animating(now)
    }

    /// How often [`Presenter::tick`] needs to run, or `None` when nothing
    /// is pending.
    #[must_use]
    pub fn tick_interval(&self) -> Option<Duration> {
        if self.is_animating() {
            Some(FRAME_INTERVAL)
        } else if self
            .toasts
            .as_ref()
            .is_some_and(ToastContainer::has_pending_dismiss)
        {
            Some(PROGRESS_INTERVAL)
        } else {
            None
        }
    }

    /// Escape routing while a dialog listens, ticks at [`Presenter::tick_interval`].
    pub fn subscription(&self) -> Subscription<Message> {
        let escape = if self.dialogs.listeners().is_empty() {
            Subscription::none()
        } else {
            event::listen_with(|event, _status, _window| match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) => Some(Message::Escape),
                _ => None,
            })
        };

        let frames = self
            .tick_interval()
            .map_or_else(Subscription::none, |interval| {
                time::every(interval).map(Message::Tick)
            });

        Subscription::batch([escape, frames])
    }

    /// Toasts and dialogs as one overlay layer, dialogs on top.
    pub fn view(&self) -> Element<'_, Message> {
        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        let Some(sheet) = self.styles.get() else {
            return layers.into();
        };
        let surfaces = sheet.surfaces(self.dark);
        let now = self.clock.now();

        if let Some(toasts) = &self.toasts {
            layers = layers.push(Toast::view_overlay(toasts, surfaces, now));
        }
        if let Some(dialogs) = dialog::view::view_overlay(&self.dialogs, surfaces, now) {
            layers = layers.push(dialogs);
        }
        layers.into()
    }

    /// Settles every open dialog as `false` and clears all toasts.
    ///
    /// Dropping the presenter has the same effect on outstanding dialogs.
    pub fn teardown(&mut self) -> usize {
        let now = self.clock.now();
        let settled = self.dialogs.teardown(now);
        if let Some(toasts) = self.toasts.as_mut() {
            toasts.clear();
        }
        tracing::debug!(settled, "presenter torn down");
        settled
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark = dark;
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Number of stylesheet registrations so far (0 or 1).
    #[must_use]
    pub fn styles_registered(&self) -> usize {
        self.styles.registrations()
    }

    /// The toast container, once the first notification created it.
    #[must_use]
    pub fn toasts(&self) -> Option<&ToastContainer> {
        self.toasts.as_ref()
    }

    #[must_use]
    pub fn toast(&self, id: NotificationId) -> Option<&Entry> {
        self.toasts.as_ref().and_then(|toasts| toasts.get(id))
    }

    #[must_use]
    pub fn dialogs(&self) -> &DialogStack {
        &self.dialogs
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn i18n_mut(&mut self) -> &mut I18n {
        &mut self.i18n
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }
}
