// SPDX-License-Identifier: MPL-2.0
//! Escape-key listener registry.
//!
//! Every open dialog registers one listener. Escape goes to the most
//! recently registered listener only.

use super::confirm::DialogId;

#[derive(Debug, Default)]
pub struct KeyListeners {
    stack: Vec<DialogId>,
}

impl KeyListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: DialogId) {
        if !self.stack.contains(&id) {
            self.stack.push(id);
        }
    }

    /// Returns `false` if `id` had no listener.
    pub fn deregister(&mut self, id: DialogId) -> bool {
        let before = self.stack.len();
        self.stack.retain(|registered| *registered != id);
        self.stack.len() != before
    }

    /// The listener that receives the next Escape.
    #[must_use]
    pub fn topmost(&self) -> Option<DialogId> {
        self.stack.last().copied()
    }

    #[must_use]
    pub fn is_registered(&self, id: DialogId) -> bool {
        self.stack.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topmost_is_latest_registration() {
        let mut listeners = KeyListeners::new();
        let first = DialogId::new();
        let second = DialogId::new();
        listeners.register(first);
        listeners.register(second);

        assert_eq!(listeners.topmost(), Some(second));
        assert!(listeners.deregister(second));
        assert_eq!(listeners.topmost(), Some(first));
    }

    #[test]
    fn deregistering_lower_listener_keeps_top() {
        let mut listeners = KeyListeners::new();
        let first = DialogId::new();
        let second = DialogId::new();
        listeners.register(first);
        listeners.register(second);

        assert!(listeners.deregister(first));
        assert_eq!(listeners.topmost(), Some(second));
        assert!(!listeners.deregister(first));
    }

    #[test]
    fn duplicate_registration_is_ignored() {
        let mut listeners = KeyListeners::new();
        let id = DialogId::new();
        listeners.register(id);
        listeners.register(id);
        assert_eq!(listeners.len(), 1);
    }
}
