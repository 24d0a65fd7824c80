// SPDX-License-Identifier: MPL-2.0
//! Simple equal-width table.

use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{rule, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Font, Length};

/// Bold header cell.
pub fn header_cell<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    Text::new(label)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        })
        .into()
}

pub fn view<'a, Message: 'a>(
    headers: Vec<Element<'a, Message>>,
    rows: Vec<Vec<Element<'a, Message>>>,
) -> Element<'a, Message> {
    let header = Container::new(cells(headers))
        .width(Length::Fill)
        .style(styles::container::table_header);

    rows.into_iter()
        .fold(
            Column::new().width(Length::Fill).push(header),
            |table, row| table.push(cells(row)).push(rule::horizontal(1)),
        )
        .into()
}

fn cells<'a, Message: 'a>(cells: Vec<Element<'a, Message>>) -> Row<'a, Message> {
    cells.into_iter().fold(
        Row::new().width(Length::Fill).align_y(Vertical::Center),
        |row, cell| {
            row.push(
                Container::new(cell)
                    .padding([spacing::XS, spacing::SM])
                    .width(Length::FillPortion(1)),
            )
        },
    )
}
