// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! A toast is a card with a category accent: a header row (icon, title,
//! close button), the message, and a progress bar that drains over the
//! display duration.

use super::container::ToastContainer;
use super::notification::Entry;
use crate::presenter::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{self, Surfaces};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, font, Element, Font, Length, Theme};
use std::time::Instant;

/// Progress bar resolution, in fill portions.
const PROGRESS_STEPS: u16 = 1000;

pub struct Toast;

impl Toast {
    /// Renders a single toast at `now`.
    pub fn view<'a>(entry: &'a Entry, surfaces: Surfaces, now: Instant) -> Element<'a, Message> {
        let accent = entry.category().color();
        let presence = entry.lifecycle().opacity(now);

        let icon = Text::new(entry.icon()).size(sizing::ICON_MD);

        let title = Text::new(entry.title())
            .size(typography::BODY)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::default()
            })
            .style(move |_theme: &Theme| text::Style {
                color: Some(styles::faded(surfaces.toast_title, presence)),
            });

        let close = button(
            Text::new("×")
                .size(typography::TITLE_MD)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .width(Length::Fixed(sizing::CLOSE_BUTTON))
        .height(Length::Fixed(sizing::CLOSE_BUTTON))
        .padding(0)
        .on_press(Message::CloseNotification(entry.id()))
        .style(move |_theme: &Theme, status| styles::toast::close_button(&surfaces, status, presence));

        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon)
            .push(Container::new(title).width(Length::Fill))
            .push(close);

        let message = Text::new(entry.message())
            .size(typography::BODY_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(styles::faded(surfaces.toast_message, presence)),
            });

        let body = Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(message)
            .padding([spacing::MD, spacing::LG]);

        let content = Column::new()
            .push(body)
            .push(progress(entry.remaining(now), surfaces, accent, presence));

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .style(move |_theme: &Theme| styles::toast::card(&surfaces, accent, presence))
            .into()
    }

    /// Renders every toast, stacked downward from the top-right corner.
    pub fn view_overlay<'a>(
        toasts: &'a ToastContainer,
        surfaces: Surfaces,
        now: Instant,
    ) -> Element<'a, Message> {
        let cards: Vec<Element<'a, Message>> = toasts
            .iter()
            .map(|entry| Self::view(entry, surfaces, now))
            .collect();

        if cards.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        Container::new(
            Column::with_children(cards)
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::LG)
        .into()
    }
}

fn progress<'a>(
    remaining: f32,
    surfaces: Surfaces,
    accent: iced::Color,
    presence: f32,
) -> Element<'a, Message> {
    let filled = fill_portion(remaining);
    let mut bar = Row::new().height(Length::Fixed(sizing::PROGRESS_HEIGHT));

    if filled > 0 {
        bar = bar.push(
            container(text(""))
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(move |_theme: &Theme| styles::toast::progress_bar(accent, presence)),
        );
    }
    if filled < PROGRESS_STEPS {
        bar = bar.push(
            container(text(""))
                .width(Length::FillPortion(PROGRESS_STEPS - filled))
                .height(Length::Fill)
                .style(move |_theme: &Theme| styles::toast::progress_track(&surfaces, presence)),
        );
    }

    bar.into()
}

fn fill_portion(remaining: f32) -> u16 {
    (remaining.clamp(0.0, 1.0) * f32::from(PROGRESS_STEPS)).round() as u16
}
