// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Default toast titles and dialog labels are Fluent messages, so a
//! presenter built for `fr` says "Succès" where `en-US` says "Success".
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Translation files embedded at compile time
//! - Runtime language switching
//! - Fallback to `en-US` when a locale is unavailable

pub mod fluent;

pub use fluent::I18n;
