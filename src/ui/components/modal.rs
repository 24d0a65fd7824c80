// SPDX-License-Identifier: MPL-2.0
//! Modal dialog layered over the page.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, center, mouse_area, opaque, Column, Container, Row, Stack, Text};
use iced::{alignment::Vertical, Element, Font, Length};

/// Titled dialog with a close button.
pub fn dialog<'a, Message: Clone + 'a>(
    title: &'a str,
    body: &'a str,
    on_close: Message,
) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(title).size(typography::TITLE_SM).font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            }))
            .width(Length::Fill),
        )
        .push(button(Text::new("✕")).on_press(on_close).style(styles::button::table_row));

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(Text::new(body).size(typography::BODY)),
    )
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::modal_card)
    .into()
}

/// Shows `content` centered over `base`; clicking the backdrop sends `on_blur`.
pub fn overlay<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    Stack::new()
        .push(base)
        .push(opaque(
            mouse_area(center(opaque(content)).style(styles::container::backdrop))
                .on_press(on_blur),
        ))
        .into()
}
