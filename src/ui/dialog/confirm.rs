// SPDX-License-Identifier: MPL-2.0
//! An open confirmation dialog and its one-shot responder.

use super::pending::PendingConfirm;
use crate::ui::lifecycle::{Lifecycle, Phase, Transition};
use iced::futures::channel::oneshot;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DialogId(u64);

impl DialogId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for DialogId {
    fn default() -> Self {
        Self::new()
    }
}

/// How a dialog was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Confirmed,
    Cancelled,
    Backdrop,
    Escape,
    /// The presenter was torn down with the dialog still open.
    Dismissed,
}

impl Resolution {
    #[must_use]
    pub fn outcome(self) -> bool {
        matches!(self, Resolution::Confirmed)
    }
}

/// Strings shown by a dialog, defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogText {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

#[derive(Debug)]
pub struct Dialog {
    id: DialogId,
    text: DialogText,
    lifecycle: Lifecycle,
    responder: Option<oneshot::Sender<bool>>,
    resolution: Option<Resolution>,
}

impl Dialog {
    /// Opens a dialog and hands back the caller's end of the outcome.
    pub(crate) fn open(
        text: DialogText,
        now: Instant,
        transition: Transition,
    ) -> (Self, PendingConfirm) {
        let id = DialogId::new();
        let (sender, receiver) = oneshot::channel();
        let dialog = Self {
            id,
            text,
            lifecycle: Lifecycle::new(now, transition),
            responder: Some(sender),
            resolution: None,
        };
        (dialog, PendingConfirm::new(id, receiver))
    }

    #[must_use]
    pub fn id(&self) -> DialogId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &DialogText {
        &self.text
    }

    #[must_use]
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    #[must_use]
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.responder.is_some()
    }

    /// Settles the outcome and starts the exit transition.
    ///
    /// Only the first call has any effect; it returns `true`.
    pub(crate) fn resolve(&mut self, resolution: Resolution, now: Instant) -> bool {
        let Some(responder) = self.responder.take() else {
            return false;
        };
        if responder.send(resolution.outcome()).is_err() {
            tracing::debug!(dialog = ?self.id, "confirm outcome dropped by caller");
        }
        self.resolution = Some(resolution);
        self.lifecycle.begin_exit(now);
        tracing::debug!(dialog = ?self.id, ?resolution, "dialog resolved");
        true
    }

    pub(crate) fn tick(&mut self, now: Instant) -> Phase {
        self.lifecycle.advance(now)
    }
}
