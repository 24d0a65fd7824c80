// SPDX-License-Identifier: MPL-2.0
//! Do/don't example panels laid out in a grid.

use crate::catalog::ExampleKind;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

/// A framed demo with its caption underneath.
pub fn panel<'a, Message: 'a>(
    kind: ExampleKind,
    caption: &'a str,
    demo: Element<'a, Message>,
) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(
            Container::new(demo)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .push(Text::new(caption).size(typography::BODY_SM));

    Container::new(body)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::example(kind))
        .into()
}

/// Arranges panels in rows of `columns`.
pub fn grid<'a, Message: 'a>(
    panels: Vec<Element<'a, Message>>,
    columns: usize,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut grid = Column::new().spacing(spacing::MD).width(Length::Fill);
    let mut row = Row::new().spacing(spacing::MD).width(Length::Fill);
    let mut filled = 0;

    for panel in panels {
        row = row.push(Container::new(panel).width(Length::FillPortion(1)));
        filled += 1;
        if filled == columns {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::MD).width(Length::Fill);
            filled = 0;
        }
    }

    if filled > 0 {
        // Pad the last row so panels keep their width
        for _ in filled..columns {
            row = row.push(Container::new(Text::new("")).width(Length::FillPortion(1)));
        }
        grid = grid.push(row);
    }

    grid.into()
}
