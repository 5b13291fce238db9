// SPDX-License-Identifier: MPL-2.0
//! Confirm dialog styles.

use super::{faded, Surfaces};
use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow};

/// Full-window dimming layer behind the card.
pub fn backdrop(surfaces: &Surfaces, presence: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(surfaces.backdrop, presence))),
        ..Default::default()
    }
}

pub fn card(surfaces: &Surfaces, presence: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(
            surfaces.dialog_background,
            presence,
        ))),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::LG.into(),
        },
        shadow: Shadow {
            color: faded(shadow::LG.color, presence),
            ..shadow::LG
        },
        text_color: Some(faded(surfaces.dialog_title, presence)),
        ..Default::default()
    }
}

/// Filled confirm button in the brand accent.
pub fn primary_button(surfaces: &Surfaces, status: button::Status, presence: f32) -> button::Style {
    let fill = match status {
        button::Status::Hovered | button::Status::Pressed => surfaces.primary_button_hover,
        button::Status::Active => surfaces.primary_button,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..surfaces.primary_button
        },
    };

    button::Style {
        background: Some(Background::Color(faded(fill, presence))),
        text_color: faded(surfaces.primary_text, presence),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Neutral cancel button.
pub fn secondary_button(
    surfaces: &Surfaces,
    status: button::Status,
    presence: f32,
) -> button::Style {
    let fill = match status {
        button::Status::Hovered | button::Status::Pressed => surfaces.secondary_button_hover,
        button::Status::Active | button::Status::Disabled => surfaces.secondary_button,
    };

    button::Style {
        background: Some(Background::Color(faded(fill, presence))),
        text_color: faded(surfaces.secondary_text, presence),
        border: Border {
            color: faded(surfaces.secondary_button_hover, presence),
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
