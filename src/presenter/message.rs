// SPDX-License-Identifier: MPL-2.0
//! Messages the presenter reacts to.

use crate::ui::dialog::DialogId;
use crate::ui::notifications::NotificationId;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// The "×" button of a toast.
    CloseNotification(NotificationId),
    Confirm(DialogId),
    Cancel(DialogId),
    /// A click on the dim area around a dialog card.
    Backdrop(DialogId),
    /// Escape pressed anywhere in the window.
    Escape,
    /// Animation frame.
    Tick(Instant),
}
