// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] is what callers hand to the presenter. Once shown it
//! becomes an [`Entry`] with its own lifecycle and dismiss deadline.

use super::category::Category;
use crate::ui::lifecycle::{Lifecycle, Phase, Transition};
use std::time::{Duration, Instant};

/// Unique identifier for a notification; the handle returned by `notify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// A notification request.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    category: Category,
    message: String,
    title: Option<String>,
    duration: Option<Duration>,
}

impl Notification {
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            title: None,
            duration: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Category::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Category::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Category::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Category::Info, message)
    }

    /// Overrides the category's default title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets how long the toast stays before auto-dismissing.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }
}

/// A notification that is on screen (or on its way in or out).
#[derive(Debug, Clone)]
pub struct Entry {
    id: NotificationId,
    category: Category,
    title: String,
    message: String,
    duration: Duration,
    lifecycle: Lifecycle,
    /// The pending auto-dismiss timer. `None` once fired or cancelled, or
    /// when the duration is too long to be represented as an `Instant`.
    dismiss_at: Option<Instant>,
}

impl Entry {
    /// Builds an entry from a request whose title and duration have been
    /// resolved by the caller.
    pub(crate) fn new(
        notification: Notification,
        title: String,
        duration: Duration,
        now: Instant,
        transition: Transition,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            category: notification.category,
            title,
            message: notification.message,
            duration,
            lifecycle: Lifecycle::new(now, transition),
            dismiss_at: now.checked_add(duration),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.category.icon()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    #[must_use]
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Whether the auto-dismiss timer is still armed.
    #[must_use]
    pub fn has_pending_dismiss(&self) -> bool {
        self.dismiss_at.is_some()
    }

    /// Remaining share of the display time, for the progress bar.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.lifecycle.created_at());
        (1.0 - elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Advances the lifecycle, firing the dismiss timer if it is due.
    pub(crate) fn tick(&mut self, now: Instant) -> Phase {
        self.lifecycle.advance(now);
        if let Some(deadline) = self.dismiss_at.filter(|deadline| now >= *deadline) {
            self.dismiss_at = None;
            // Exit starts at the deadline, not at the (possibly late) tick.
            self.lifecycle.begin_exit(deadline);
        }
        self.lifecycle.advance(now)
    }

    /// Manual close: cancels the timer and plays the exit transition.
    ///
    /// Returns `false` if the entry was already closing.
    pub(crate) fn close(&mut self, now: Instant) -> bool {
        self.dismiss_at = None;
        self.lifecycle.begin_exit(now)
    }
}
