// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast display duration and transition windows
//! - **Dialogs**: Confirmation overlay transition windows

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a toast stays on screen before auto-dismissing (ms).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 7000;

/// Minimum toast display duration (ms).
pub const MIN_NOTIFICATION_DURATION_MS: u64 = 500;

/// Maximum toast display duration (ms).
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 120_000;

/// Delay between inserting a toast and flipping it visible (ms).
///
/// Must stay non-zero so the entrance transition has a hidden frame to
/// start from.
pub const DEFAULT_NOTIFICATION_ENTER_DELAY_MS: u64 = 10;

/// Slide/fade window a toast plays when leaving (ms).
pub const DEFAULT_NOTIFICATION_EXIT_MS: u64 = 400;

// ==========================================================================
// Dialog Defaults
// ==========================================================================

/// Delay between inserting a confirmation overlay and showing it (ms).
pub const DEFAULT_DIALOG_ENTER_DELAY_MS: u64 = 10;

/// Fade window a confirmation overlay plays when closing (ms).
pub const DEFAULT_DIALOG_EXIT_MS: u64 = 300;

// ==========================================================================
// Shared Bounds
// ==========================================================================

/// Smallest enter delay accepted from the config file (ms).
pub const MIN_ENTER_DELAY_MS: u64 = 1;

/// Largest enter delay accepted from the config file (ms).
pub const MAX_ENTER_DELAY_MS: u64 = 250;

/// Largest transition window accepted from the config file (ms).
pub const MAX_TRANSITION_MS: u64 = 2000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_NOTIFICATION_DURATION_MS > 0);
    assert!(MAX_NOTIFICATION_DURATION_MS > MIN_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS >= MIN_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);

    assert!(MIN_ENTER_DELAY_MS > 0);
    assert!(DEFAULT_NOTIFICATION_ENTER_DELAY_MS >= MIN_ENTER_DELAY_MS);
    assert!(DEFAULT_NOTIFICATION_ENTER_DELAY_MS <= MAX_ENTER_DELAY_MS);
    assert!(DEFAULT_DIALOG_ENTER_DELAY_MS >= MIN_ENTER_DELAY_MS);
    assert!(DEFAULT_DIALOG_ENTER_DELAY_MS <= MAX_ENTER_DELAY_MS);

    assert!(DEFAULT_NOTIFICATION_EXIT_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_DIALOG_EXIT_MS <= MAX_TRANSITION_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_defaults_match_reference_timings() {
        assert_eq!(DEFAULT_NOTIFICATION_DURATION_MS, 7000);
        assert_eq!(DEFAULT_NOTIFICATION_EXIT_MS, 400);
        assert_eq!(DEFAULT_NOTIFICATION_ENTER_DELAY_MS, 10);
    }

    #[test]
    fn dialog_defaults_match_reference_timings() {
        assert_eq!(DEFAULT_DIALOG_EXIT_MS, 300);
        assert!(DEFAULT_DIALOG_ENTER_DELAY_MS > 0);
    }
}
