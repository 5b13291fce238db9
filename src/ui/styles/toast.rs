// SPDX-License-Identifier: MPL-2.0
//! Toast card styles.

use super::{faded, tint, Surfaces};
use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow};

/// Card with a category-tinted background and accent border.
pub fn card(surfaces: &Surfaces, accent: Color, presence: f32) -> container::Style {
    let background = tint(surfaces.toast_background, accent, opacity::TINT);

    container::Style {
        background: Some(Background::Color(faded(background, presence))),
        border: Border {
            color: faded(accent, presence),
            width: border::WIDTH_ACCENT,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: faded(shadow::MD.color, presence),
            ..shadow::MD
        },
        text_color: Some(faded(surfaces.toast_title, presence)),
        ..Default::default()
    }
}

pub fn progress_track(surfaces: &Surfaces, presence: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(surfaces.progress_track, presence))),
        ..Default::default()
    }
}

pub fn progress_bar(accent: Color, presence: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(accent, presence))),
        ..Default::default()
    }
}

/// Borderless "×" button.
pub fn close_button(surfaces: &Surfaces, status: button::Status, presence: f32) -> button::Style {
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(faded(
                surfaces.close_hover_background,
                presence,
            ))),
            text_color: faded(surfaces.close_hover, presence),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: faded(surfaces.close_idle, presence),
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
