// SPDX-License-Identifier: MPL-2.0
//! Stylesheet for toasts and dialogs, and its once-only registration.
//!
//! The [`Stylesheet`] carries both light and dark surfaces; the dark-mode
//! flag picks one at render time, so switching modes never re-registers.

pub mod dialog;
pub mod toast;

use crate::ui::design_tokens::opacity;
use crate::ui::theming::ColorScheme;
use iced::Color;

/// Resolved colors for one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surfaces {
    pub toast_background: Color,
    pub toast_title: Color,
    pub toast_message: Color,
    pub close_idle: Color,
    pub close_hover: Color,
    pub close_hover_background: Color,
    pub progress_track: Color,

    pub backdrop: Color,
    pub dialog_background: Color,
    pub dialog_title: Color,
    pub dialog_message: Color,

    pub primary_button: Color,
    pub primary_button_hover: Color,
    pub primary_text: Color,
    pub secondary_button: Color,
    pub secondary_button_hover: Color,
    pub secondary_text: Color,
}

impl Surfaces {
    fn from_scheme(scheme: &ColorScheme) -> Self {
        let black = Color::BLACK;
        Self {
            toast_background: Color {
                a: opacity::SURFACE,
                ..scheme.surface_primary
            },
            toast_title: scheme.text_primary,
            toast_message: scheme.text_secondary,
            close_idle: scheme.text_muted,
            close_hover: scheme.text_secondary,
            close_hover_background: Color {
                a: opacity::TINT,
                ..black
            },
            progress_track: Color {
                a: opacity::TINT,
                ..black
            },

            backdrop: scheme.overlay_background,
            dialog_background: scheme.surface_primary,
            dialog_title: scheme.text_primary,
            dialog_message: scheme.text_secondary,

            primary_button: scheme.brand_primary,
            primary_button_hover: scheme.brand_secondary,
            primary_text: Color::WHITE,
            secondary_button: scheme.surface_secondary,
            secondary_button_hover: scheme.surface_hover,
            secondary_text: scheme.text_secondary,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    light: Surfaces,
    dark: Surfaces,
}

impl Stylesheet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            light: Surfaces::from_scheme(&ColorScheme::light()),
            dark: Surfaces::from_scheme(&ColorScheme::dark()),
        }
    }

    #[must_use]
    pub fn surfaces(&self, dark: bool) -> Surfaces {
        if dark {
            self.dark
        } else {
            self.light
        }
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds the stylesheet once it has been registered.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    sheet: Option<Stylesheet>,
    registrations: usize,
}

impl StyleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the stylesheet on first call; later calls are no-ops.
    pub fn ensure(&mut self) -> &Stylesheet {
        if self.sheet.is_none() {
            self.registrations += 1;
            tracing::debug!("registering notification stylesheet");
        }
        self.sheet.get_or_insert_with(Stylesheet::new)
    }

    #[must_use]
    pub fn get(&self) -> Option<&Stylesheet> {
        self.sheet.as_ref()
    }

    /// How many times a stylesheet was actually registered (0 or 1).
    #[must_use]
    pub fn registrations(&self) -> usize {
        self.registrations
    }
}

/// Scales a color's alpha by the transition opacity.
#[must_use]
pub fn faded(color: Color, presence: f32) -> Color {
    Color {
        a: color.a * presence.clamp(0.0, 1.0),
        ..color
    }
}

/// Blends `accent` over `base` by `amount`, keeping `base` alpha.
#[must_use]
pub fn tint(base: Color, accent: Color, amount: f32) -> Color {
    let mix = |b: f32, a: f32| b + (a - b) * amount;
    Color {
        r: mix(base.r, accent.r),
        g: mix(base.g, accent.g),
        b: mix(base.b, accent.b),
        a: base.a,
    }
}
