// SPDX-License-Identifier: MPL-2.0
//! Non-blocking stand-ins for `alert` and `confirm`.
//!
//! Code that used to block on a system dialog takes a `&mut impl
//! DialogService` instead. `alert` returns as soon as the toast is queued and
//! `confirm` hands back a future, so the wait is visible at the call site.

use super::Presenter;
use crate::config::DEFAULT_NOTIFICATION_DURATION_MS;
use crate::ui::dialog::PendingConfirm;
use crate::ui::notifications::{Notification, NotificationId};
use std::time::Duration;

const ALERT_TITLE_KEY: &str = "notification-title-alert";

pub trait DialogService {
    /// Shows `message` as an error toast titled "Alert".
    fn alert(&mut self, message: &str) -> NotificationId;

    /// Opens a confirmation with the default title and labels.
    fn confirm(&mut self, message: &str) -> PendingConfirm;
}

impl DialogService for Presenter {
    fn alert(&mut self, message: &str) -> NotificationId {
        let title = self.i18n().tr(ALERT_TITLE_KEY);
        self.notify(
            Notification::error(message)
                .with_title(title)
                .auto_dismiss(Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS)),
        )
    }

    fn confirm(&mut self, message: &str) -> PendingConfirm {
        Presenter::confirm(self, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::Config;
    use crate::i18n::I18n;
    use crate::ui::notifications::Category;

    fn presenter() -> Presenter {
        let config = Config::default();
        let i18n = I18n::new(Some("en-US".into()), &config);
        Presenter::with_clock(ManualClock::new(), i18n, &config)
    }

    fn ask(service: &mut impl DialogService) -> PendingConfirm {
        service.confirm("Proceed?")
    }

    #[test]
    fn alert_is_an_error_toast_titled_alert() {
        let mut presenter = presenter();
        let id = DialogService::alert(&mut presenter, "Disk full");

        let entry = presenter.toast(id).expect("alert toast");
        assert_eq!(entry.category(), Category::Error);
        assert_eq!(entry.title(), "Alert");
        assert_eq!(entry.message(), "Disk full");
    }

    #[test]
    fn confirm_through_service_uses_defaults() {
        let mut presenter = presenter();
        let pending = ask(&mut presenter);

        let dialog = presenter.dialogs().get(pending.id()).expect("dialog");
        assert_eq!(dialog.text().title, "Confirm Action");
        assert_eq!(dialog.text().confirm_label, "Confirm");
        assert_eq!(dialog.text().cancel_label, "Cancel");
    }
}
