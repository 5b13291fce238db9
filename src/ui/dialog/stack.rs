// SPDX-License-Identifier: MPL-2.0
//! Open dialogs in opening order, with their Escape listeners.

use super::confirm::{Dialog, DialogId, Resolution};
use super::listeners::KeyListeners;
use crate::ui::lifecycle::Phase;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct DialogStack {
    dialogs: Vec<Dialog>,
    listeners: KeyListeners,
}

impl DialogStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, dialog: Dialog) -> DialogId {
        let id = dialog.id();
        self.listeners.register(id);
        self.dialogs.push(dialog);
        id
    }

    #[must_use]
    pub fn get(&self, id: DialogId) -> Option<&Dialog> {
        self.dialogs.iter().find(|dialog| dialog.id() == id)
    }

    /// Resolves one dialog; unknown or already-resolved IDs are a no-op.
    pub fn resolve(&mut self, id: DialogId, resolution: Resolution, now: Instant) -> bool {
        let resolved = self
            .dialogs
            .iter_mut()
            .find(|dialog| dialog.id() == id)
            .is_some_and(|dialog| dialog.resolve(resolution, now));
        if resolved {
            self.listeners.deregister(id);
        }
        resolved
    }

    /// Delivers Escape to the topmost listener, returning the dialog it
    /// resolved.
    pub fn escape(&mut self, now: Instant) -> Option<DialogId> {
        let id = self.listeners.topmost()?;
        self.resolve(id, Resolution::Escape, now).then_some(id)
    }

    /// Advances every dialog and drops the ones that finished exiting.
    pub fn tick(&mut self, now: Instant) -> Vec<DialogId> {
        let mut removed = Vec::new();
        self.dialogs.retain_mut(|dialog| {
            if dialog.tick(now) == Phase::Removed {
                removed.push(dialog.id());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Settles every outstanding dialog as `false` and drops them all.
    pub fn teardown(&mut self, now: Instant) -> usize {
        let settled = self
            .dialogs
            .iter_mut()
            .map(|dialog| dialog.resolve(Resolution::Dismissed, now))
            .filter(|settled| *settled)
            .count();
        self.dialogs.clear();
        self.listeners.clear();
        settled
    }

    #[must_use]
    pub fn listeners(&self) -> &KeyListeners {
        &self.listeners
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dialog> {
        self.dialogs.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.dialogs
            .iter()
            .any(|dialog| dialog.lifecycle().is_animating(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dialog::confirm::DialogText;
    use crate::ui::dialog::PendingConfirm;
    use crate::ui::lifecycle::Transition;
    use std::time::Duration;

    const TRANSITION: Transition = Transition {
        enter_delay: Duration::from_millis(10),
        exit: Duration::from_millis(300),
    };

    fn open(stack: &mut DialogStack, message: &str, now: Instant) -> PendingConfirm {
        let (dialog, pending) = Dialog::open(
            DialogText {
                title: "Confirm Action".into(),
                message: message.into(),
                confirm_label: "Confirm".into(),
                cancel_label: "Cancel".into(),
            },
            now,
            TRANSITION,
        );
        stack.push(dialog);
        pending
    }

    #[test]
    fn escape_hits_latest_dialog_only() {
        let now = Instant::now();
        let mut stack = DialogStack::new();
        let mut first = open(&mut stack, "first", now);
        let mut second = open(&mut stack, "second", now);

        assert_eq!(stack.escape(now), Some(second.id()));
        assert_eq!(second.try_outcome(), Some(false));
        assert_eq!(first.try_outcome(), None);

        assert_eq!(stack.escape(now), Some(first.id()));
        assert_eq!(stack.escape(now), None);
    }

    #[test]
    fn resolving_second_leaves_first_open() {
        let now = Instant::now();
        let mut stack = DialogStack::new();
        let mut first = open(&mut stack, "first", now);
        let mut second = open(&mut stack, "second", now);

        assert!(stack.resolve(second.id(), Resolution::Confirmed, now));
        stack.tick(now + Duration::from_secs(1));

        assert_eq!(second.try_outcome(), Some(true));
        assert_eq!(first.try_outcome(), None);
        assert!(stack.get(first.id()).is_some_and(Dialog::is_pending));
        assert!(stack.get(second.id()).is_none());
    }

    #[test]
    fn escape_then_backdrop_resolves_once() {
        let now = Instant::now();
        let mut stack = DialogStack::new();
        let mut pending = open(&mut stack, "race", now);
        let id = pending.id();

        assert_eq!(stack.escape(now), Some(id));
        assert!(!stack.resolve(id, Resolution::Backdrop, now));
        assert_eq!(stack.get(id).and_then(Dialog::resolution), Some(Resolution::Escape));
        assert_eq!(pending.try_outcome(), Some(false));
    }

    #[test]
    fn resolved_dialog_deregisters_listener() {
        let now = Instant::now();
        let mut stack = DialogStack::new();
        let pending = open(&mut stack, "bye", now);

        assert!(stack.listeners().is_registered(pending.id()));
        stack.resolve(pending.id(), Resolution::Cancelled, now);
        assert!(stack.listeners().is_empty());
    }

    #[test]
    fn teardown_settles_outstanding_as_false() {
        let now = Instant::now();
        let mut stack = DialogStack::new();
        let mut answered = open(&mut stack, "answered", now);
        let mut open_one = open(&mut stack, "open", now);
        stack.resolve(answered.id(), Resolution::Confirmed, now);

        assert_eq!(stack.teardown(now), 1);
        assert!(stack.is_empty());
        assert_eq!(answered.try_outcome(), Some(true));
        assert_eq!(open_one.try_outcome(), Some(false));
    }

    #[test]
    fn teardown_counts_every_open_dialog_once() {
        let now = Instant::now();
        let mut stack = DialogStack::new();
        let mut first = open(&mut stack, "first", now);
        let mut second = open(&mut stack, "second", now);

        assert_eq!(stack.teardown(now), 2);
        assert!(stack.listeners().is_empty());
        assert_eq!(stack.teardown(now), 0);
        assert_eq!(first.try_outcome(), Some(false));
        assert_eq!(second.try_outcome(), Some(false));
    }
}
