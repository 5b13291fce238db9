// SPDX-License-Identifier: MPL-2.0
//! `iced_notify` renders toast notifications and modal confirmation dialogs
//! for Iced applications.
//!
//! A [`presenter::Presenter`] owns both. Toasts auto-dismiss after their
//! duration and can be closed early; confirmations return a future that
//! resolves to the user's answer. [`presenter::DialogService`] offers the
//! same two entry points as a non-blocking `alert`/`confirm` pair.

#![doc(html_root_url = "https://docs.rs/iced_notify/0.1.0")]

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod i18n;
pub mod paths;
pub mod presenter;
pub mod ui;
