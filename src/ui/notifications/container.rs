// SPDX-License-Identifier: MPL-2.0
//! The toast container: ordered storage and lifecycle sweeping.
//!
//! Entries are kept in insertion order (newest last) and drawn top-down.
//! There is no visible limit; every toast is independent.

use super::notification::{Entry, NotificationId};
use crate::ui::lifecycle::Phase;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct ToastContainer {
    entries: Vec<Entry>,
}

impl ToastContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: Entry) -> NotificationId {
        let id = entry.id();
        self.entries.push(entry);
        id
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Manually closes a toast.
    ///
    /// Returns `true` only for the call that started the exit; closing an
    /// unknown, exiting or removed toast is a no-op.
    pub fn close(&mut self, id: NotificationId, now: Instant) -> bool {
        self.entries
            .iter_mut()
            .find(|entry| entry.id() == id)
            .is_some_and(|entry| entry.close(now))
    }

    /// Advances every entry and drops the ones that finished exiting.
    ///
    /// Returns the IDs removed by this sweep.
    pub fn tick(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut removed = Vec::new();
        self.entries.retain_mut(|entry| {
            if entry.tick(now) == Phase::Removed {
                removed.push(entry.id());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any entry is fading in or out.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.lifecycle().is_animating(now))
    }

    /// Whether any auto-dismiss timer is still armed.
    #[must_use]
    pub fn has_pending_dismiss(&self) -> bool {
        self.entries.iter().any(Entry::has_pending_dismiss)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
