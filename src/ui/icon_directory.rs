// SPDX-License-Identifier: MPL-2.0
//! Searchable, sortable icon table. Clicking a row copies the icon name.

use crate::catalog::IconCatalog;
use crate::icon_directory::{CopyTicket, DirectoryRow, DirectoryView, IconDirectoryState};
use crate::ui::components::{table, wip_banner};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::glyphs;
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Font, Length};

pub const SEARCH_PLACEHOLDER: &str = "Search icons...";
pub const COPIED_LABEL: &str = "Copied!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SearchChanged(String),
    ToggleSort,
    Copy(String),
    CopyExpired(CopyTicket),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The clipboard should receive the ticket's name and the ticket
    /// should come back as [`Message::CopyExpired`] after its delay.
    Copied(CopyTicket),
}

pub fn update(state: &mut IconDirectoryState, catalog: &IconCatalog, message: Message) -> Event {
    match message {
        Message::SearchChanged(query) => {
            state.set_search_query(query);
            Event::None
        }
        Message::ToggleSort => {
            state.toggle_sort();
            Event::None
        }
        Message::Copy(name) => state
            .copy(catalog, &name)
            .map_or(Event::None, Event::Copied),
        Message::CopyExpired(ticket) => {
            state.expire(&ticket);
            Event::None
        }
    }
}

/// Header label of the sortable column.
pub fn name_header(sort_ascending: bool) -> String {
    format!("Name {}", if sort_ascending { '↑' } else { '↓' })
}

pub fn view<'a>(state: &'a IconDirectoryState, catalog: &'a IconCatalog) -> Element<'a, Message> {
    let directory = state.view(catalog);

    let search = text_input(SEARCH_PLACEHOLDER, state.search_query())
        .on_input(Message::SearchChanged)
        .padding(spacing::XS)
        .size(typography::BODY);

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(wip_banner::view())
        .push(search)
        .push(icon_table(directory))
        .into()
}

fn icon_table(directory: DirectoryView<'_>) -> Element<'_, Message> {
    let sort = button(
        Text::new(name_header(directory.sort_ascending)).font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        }),
    )
    .padding(0)
    .style(styles::button::link)
    .on_press(Message::ToggleSort);

    let header = table::view(
        vec![table::header_cell("Icon"), sort.into(), table::header_cell("Use Case")],
        Vec::new(),
    );

    directory
        .rows
        .into_iter()
        .fold(Column::new().width(Length::Fill).push(header), |column, row| {
            column.push(icon_row(row))
        })
        .into()
}

fn icon_row(row: DirectoryRow<'_>) -> Element<'_, Message> {
    let mut name = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(row.record.name.as_str()).size(typography::BODY));
    if row.showing_copied {
        name = name.push(
            Container::new(Text::new(COPIED_LABEL).size(typography::CAPTION).font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            }))
            .padding([spacing::XXXS, spacing::XS])
            .style(styles::container::copied_badge),
        );
    }

    let cells = Row::new()
        .align_y(Vertical::Center)
        .push(
            Container::new(glyphs::sized(&row.record.glyph, sizing::ICON_MD))
                .width(Length::FillPortion(1)),
        )
        .push(Container::new(name).width(Length::FillPortion(1)))
        .push(
            Container::new(Text::new(row.record.use_case.as_str()).size(typography::BODY))
                .width(Length::FillPortion(1)),
        );

    button(cells)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::table_row)
        .on_press(Message::Copy(row.record.name.clone()))
        .into()
}
