// SPDX-License-Identifier: MPL-2.0
//! Demo screen: one button per presenter entry point.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, center, Button, Column, Row, Stack, Text};
use iced::{alignment, Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let i18n = app.presenter.i18n();
    let action = |key: &str, message: Message| trigger(i18n.tr(key), message);

    let toasts = Row::new()
        .spacing(spacing::SM)
        .push(action("demo-button-success", Message::ShowSuccess))
        .push(action("demo-button-error", Message::ShowError))
        .push(action("demo-button-warning", Message::ShowWarning))
        .push(action("demo-button-info", Message::ShowInfo));

    let dialogs = Row::new()
        .spacing(spacing::SM)
        .push(action("demo-button-alert", Message::ShowAlert))
        .push(action("demo-button-delete", Message::DeleteRequested))
        .push(action("demo-button-theme", Message::ToggleDarkMode));

    let content = center(
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(i18n.tr("demo-heading")).size(typography::TITLE_MD))
            .push(toasts)
            .push(dialogs),
    );

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(app.presenter.view().map(Message::Presenter))
        .into()
}

fn trigger<'a>(label: String, message: Message) -> Button<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .on_press(message)
}
