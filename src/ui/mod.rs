// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`notifications`] - Toast notifications
//! - [`dialog`] - Modal confirmation dialogs
//! - [`lifecycle`] - Enter/exit state machine shared by both
//! - [`styles`] - Stylesheet and style functions
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod dialog;
pub mod lifecycle;
pub mod notifications;
pub mod styles;
pub mod theming;
