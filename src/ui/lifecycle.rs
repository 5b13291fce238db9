// SPDX-License-Identifier: MPL-2.0
//! Per-instance transition state machine shared by toasts and dialogs.
//!
//! ```text
//! Entering ──(enter delay)──▶ Visible ──(dismiss)──▶ Exiting ──(exit window)──▶ Removed
//!     └───────────────(dismiss)──────────────────────────▲
//! ```
//!
//! Phases only move forward. Transitions are evaluated lazily by
//! [`Lifecycle::advance`] against an instant supplied by the caller.

use std::time::{Duration, Instant};

/// Timing windows for one kind of overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Time spent hidden after insertion before the visible state is applied.
    pub enter_delay: Duration,
    /// Time between starting the exit and removal from the tree.
    pub exit: Duration,
}

/// Where an instance is in its on-screen life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Inserted but still in its hidden, offset state.
    Entering,
    /// Fully shown.
    Visible,
    /// Playing the exit transition.
    Exiting,
    /// Gone; the owner drops it on the next sweep.
    Removed,
}

#[derive(Debug, Clone)]
pub struct Lifecycle {
    phase: Phase,
    transition: Transition,
    created_at: Instant,
    exit_started_at: Option<Instant>,
}

impl Lifecycle {
    #[must_use]
    pub fn new(created_at: Instant, transition: Transition) -> Self {
        Self {
            phase: Phase::Entering,
            transition,
            created_at,
            exit_started_at: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Instant at which the entrance delay elapses.
    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.created_at + self.transition.enter_delay
    }

    /// Instant at which an exiting instance will be removed.
    #[must_use]
    pub fn removal_due(&self) -> Option<Instant> {
        self.exit_started_at.map(|at| at + self.transition.exit)
    }

    /// Applies every transition that is due at `now` and returns the
    /// resulting phase.
    pub fn advance(&mut self, now: Instant) -> Phase {
        if self.phase == Phase::Entering && now >= self.shown_at() {
            self.phase = Phase::Visible;
        }
        if self.phase == Phase::Exiting && self.removal_due().is_some_and(|due| now >= due) {
            self.phase = Phase::Removed;
        }
        self.phase
    }

    /// Starts the exit transition at `at`.
    ///
    /// Returns `false` if the instance is already exiting or removed, so
    /// every dismissal path can call this without double-removal.
    pub fn begin_exit(&mut self, at: Instant) -> bool {
        match self.phase {
            Phase::Entering | Phase::Visible => {
                self.phase = Phase::Exiting;
                self.exit_started_at = Some(at);
                true
            }
            Phase::Exiting | Phase::Removed => false,
        }
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.phase == Phase::Removed
    }

    /// Whether the instance is closing or gone.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.phase >= Phase::Exiting
    }

    /// Visual presence in `0.0..=1.0`.
    ///
    /// Ramps up over an exit-length window after the entrance delay and back
    /// down while exiting.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let window = self.transition.exit;
        match self.phase {
            Phase::Entering => 0.0,
            Phase::Visible => ramp(now.saturating_duration_since(self.shown_at()), window),
            Phase::Exiting => {
                let since = self
                    .exit_started_at
                    .map_or(window, |at| now.saturating_duration_since(at));
                1.0 - ramp(since, window)
            }
            Phase::Removed => 0.0,
        }
    }

    /// Whether the instance still needs animation frames at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Entering | Phase::Exiting => true,
            Phase::Visible => now < self.shown_at() + self.transition.exit,
            Phase::Removed => false,
        }
    }
}

fn ramp(elapsed: Duration, window: Duration) -> f32 {
    if window.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / window.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSITION: Transition = Transition {
        enter_delay: Duration::from_millis(10),
        exit: Duration::from_millis(400),
    };

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn starts_hidden() {
        let start = Instant::now();
        let lifecycle = Lifecycle::new(start, TRANSITION);
        assert_eq!(lifecycle.phase(), Phase::Entering);
        assert_eq!(lifecycle.opacity(start), 0.0);
    }

    #[test]
    fn becomes_visible_only_after_enter_delay() {
        let start = Instant::now();
        let mut lifecycle = Lifecycle::new(start, TRANSITION);

        assert_eq!(lifecycle.advance(start + ms(9)), Phase::Entering);
        assert_eq!(lifecycle.advance(start + ms(10)), Phase::Visible);
    }

    #[test]
    fn exit_then_removal_after_window() {
        let start = Instant::now();
        let mut lifecycle = Lifecycle::new(start, TRANSITION);
        lifecycle.advance(start + ms(20));

        assert!(lifecycle.begin_exit(start + ms(100)));
        assert_eq!(lifecycle.advance(start + ms(499)), Phase::Exiting);
        assert_eq!(lifecycle.advance(start + ms(500)), Phase::Removed);
    }

    #[test]
    fn begin_exit_is_idempotent() {
        let start = Instant::now();
        let mut lifecycle = Lifecycle::new(start, TRANSITION);

        assert!(lifecycle.begin_exit(start + ms(50)));
        assert!(!lifecycle.begin_exit(start + ms(60)));
        // The first exit keeps its schedule.
        assert_eq!(lifecycle.removal_due(), Some(start + ms(450)));
    }

    #[test]
    fn can_exit_before_becoming_visible() {
        let start = Instant::now();
        let mut lifecycle = Lifecycle::new(start, TRANSITION);

        assert!(lifecycle.begin_exit(start + ms(1)));
        assert_eq!(lifecycle.advance(start + ms(401)), Phase::Removed);
    }

    #[test]
    fn late_advance_applies_all_due_transitions() {
        let start = Instant::now();
        let mut lifecycle = Lifecycle::new(start, TRANSITION);
        lifecycle.begin_exit(start + ms(5));

        assert_eq!(lifecycle.advance(start + ms(10_000)), Phase::Removed);
        assert!(!lifecycle.begin_exit(start + ms(10_001)));
    }

    #[test]
    fn opacity_fades_in_and_out() {
        let start = Instant::now();
        let mut lifecycle = Lifecycle::new(start, TRANSITION);
        lifecycle.advance(start + ms(10));

        let halfway = lifecycle.opacity(start + ms(210));
        assert!((halfway - 0.5).abs() < 0.01);
        assert_eq!(lifecycle.opacity(start + ms(1000)), 1.0);

        lifecycle.begin_exit(start + ms(1000));
        assert!((lifecycle.opacity(start + ms(1200)) - 0.5).abs() < 0.01);
    }

    #[test]
    fn settles_after_entrance() {
        let start = Instant::now();
        let mut lifecycle = Lifecycle::new(start, TRANSITION);
        assert!(lifecycle.is_animating(start));

        lifecycle.advance(start + ms(10));
        assert!(lifecycle.is_animating(start + ms(100)));
        assert!(!lifecycle.is_animating(start + ms(410)));
    }
}
