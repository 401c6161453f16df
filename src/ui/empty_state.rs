// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when no sections file is loaded.
//!
//! Offers a button to pick a sections file through the system dialog and
//! reminds the user that files can be dropped on the window.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the empty state; `on_open` is emitted by the open button.
pub fn view<'a, Message: Clone + 'a>(i18n: &I18n, on_open: Message) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("empty-state-title"))
        .size(typography::TITLE_LG)
        .style(styles::text::hint);

    let subtitle = Text::new(i18n.tr("empty-state-subtitle"))
        .size(typography::BODY)
        .style(styles::text::hint);

    let open_button = button(Text::new(i18n.tr("empty-state-button")))
        .height(sizing::BUTTON_HEIGHT)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(on_open);

    let drop_hint = Text::new(i18n.tr("empty-state-drop-hint"))
        .size(typography::CAPTION)
        .style(styles::text::hint);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open_button)
        .push(drop_hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
