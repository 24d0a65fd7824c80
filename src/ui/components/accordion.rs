// SPDX-License-Identifier: MPL-2.0
//! Collapsible section with a clickable header.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::glyphs;
use crate::ui::styles;
use iced::widget::{button, rule, Column, Container, Row};
use iced::{alignment::Vertical, Element, Length};

/// One accordion item. `body` is only laid out while `open`.
pub fn item<'a, Message: Clone + 'a>(
    title: Element<'a, Message>,
    open: bool,
    on_toggle: Message,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let chevron = glyphs::sized(
        if open { "chevron-down" } else { "chevron-right" },
        sizing::ICON_SM,
    );

    let header = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Container::new(title).width(Length::Fill))
            .push(chevron),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::accordion_header)
    .on_press(on_toggle);

    let mut column = Column::new().spacing(spacing::XS).push(header);

    if open {
        column = column.push(
            Container::new(body)
                .padding([spacing::XS, spacing::SM])
                .width(Length::Fill),
        );
    }

    column.push(rule::horizontal(1)).into()
}
