// SPDX-License-Identifier: MPL-2.0
//! Modal rendering: a dim backdrop with a centered card.

use super::confirm::Dialog;
use super::stack::DialogStack;
use crate::presenter::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{self, Surfaces};
use iced::widget::{button, center, mouse_area, opaque, text, Column, Container, Row, Stack, Text};
use iced::{alignment, font, Element, Font, Length, Theme};
use std::time::Instant;

const WARNING_ICON: &str = "⚠️";

/// Renders one dialog as a full-window layer.
///
/// Clicks on the backdrop resolve the dialog; clicks on the card do not
/// reach it.
pub fn layer<'a>(dialog: &'a Dialog, surfaces: Surfaces, now: Instant) -> Element<'a, Message> {
    let id = dialog.id();
    let presence = dialog.lifecycle().opacity(now);
    let strings = dialog.text();

    let icon = Text::new(WARNING_ICON)
        .size(sizing::ICON_XL)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let title = Text::new(strings.title.as_str())
        .size(typography::TITLE_MD)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::default()
        })
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .style(move |_theme: &Theme| text::Style {
            color: Some(styles::faded(surfaces.dialog_title, presence)),
        });

    let message = Text::new(strings.message.as_str())
        .size(typography::BODY)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .style(move |_theme: &Theme| text::Style {
            color: Some(styles::faded(surfaces.dialog_message, presence)),
        });

    // Exiting dialogs keep their layout but stop emitting messages.
    let live = dialog.is_pending();

    let cancel = button(label(&strings.cancel_label))
        .padding([spacing::SM, spacing::XL])
        .width(Length::Shrink)
        .on_press_maybe(live.then_some(Message::Cancel(id)))
        .style(move |_theme: &Theme, status| {
            styles::dialog::secondary_button(&surfaces, status, presence)
        });

    let confirm = button(label(&strings.confirm_label))
        .padding([spacing::SM, spacing::XL])
        .width(Length::Shrink)
        .on_press_maybe(live.then_some(Message::Confirm(id)))
        .style(move |_theme: &Theme, status| {
            styles::dialog::primary_button(&surfaces, status, presence)
        });

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(cancel)
        .push(confirm);

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(icon)
            .push(title)
            .push(message)
            .push(buttons),
    )
    .width(Length::Fixed(sizing::DIALOG_WIDTH))
    .padding(spacing::XL)
    .style(move |_theme: &Theme| styles::dialog::card(&surfaces, presence));

    let backdrop = mouse_area(
        center(opaque(card)).style(move |_theme: &Theme| styles::dialog::backdrop(&surfaces, presence)),
    );
    let backdrop = if live {
        backdrop.on_press(Message::Backdrop(id))
    } else {
        backdrop
    };

    opaque(backdrop)
}

/// Stacks every open dialog, latest on top.
pub fn view_overlay<'a>(
    dialogs: &'a DialogStack,
    surfaces: Surfaces,
    now: Instant,
) -> Option<Element<'a, Message>> {
    if dialogs.is_empty() {
        return None;
    }
    let layers = dialogs
        .iter()
        .map(|dialog| layer(dialog, surfaces, now));
    Some(
        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    )
}

fn label(content: &str) -> Text<'_> {
    Text::new(content)
        .size(typography::BODY)
        .width(Length::Shrink)
        .align_x(alignment::Horizontal::Center)
}
