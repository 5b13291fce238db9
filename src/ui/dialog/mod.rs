// SPDX-License-Identifier: MPL-2.0
//! Modal confirmation dialogs.
//!
//! Opening a dialog yields a [`PendingConfirm`], a future that resolves to
//! `true` on confirm and `false` on cancel, backdrop click or Escape. The
//! outcome is delivered exactly once, then the dialog plays its exit
//! transition and leaves the stack.

pub mod confirm;
pub mod listeners;
pub mod pending;
pub mod request;
pub mod stack;
pub mod view;

pub use confirm::{Dialog, DialogId, DialogText, Resolution};
pub use listeners::KeyListeners;
pub use pending::PendingConfirm;
pub use request::ConfirmRequest;
pub use stack::DialogStack;
