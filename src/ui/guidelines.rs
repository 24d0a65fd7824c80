// SPDX-License-Identifier: MPL-2.0
//! Renders a guideline page from its content blocks.

use crate::catalog::{Block, ColorCatalog, Demo, Example, GuidelinePage};
use crate::ui::components::demo::{self, DemoContext};
use crate::ui::components::{accordion, example, modal, rich_text, table, wip_banner};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::page::{Message, State};
use iced::font::Weight;
use iced::widget::{button, Column, Text};
use iced::{Element, Font, Length};

/// Contextual data needed to render a guideline page.
pub struct ViewContext<'a> {
    pub page: &'a GuidelinePage,
    pub colors: &'a ColorCatalog,
    pub state: &'a State,
    /// Loader animation phase in seconds.
    pub phase: f32,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let demo_ctx = DemoContext {
        colors: ctx.colors,
        phase: ctx.phase,
    };

    let mut column = Column::new().spacing(spacing::MD).width(Length::Fill);
    if ctx.page.wip {
        column = column.push(wip_banner::view());
    }

    blocks(column, &ctx.page.blocks, ctx.state, demo_ctx).into()
}

/// The page's dialog, when it has one and it is open.
pub fn open_dialog<'a>(page: &'a GuidelinePage, state: &State) -> Option<Element<'a, Message>> {
    if !state.modal_open() {
        return None;
    }

    find_modal(&page.blocks).map(|(title, body)| modal::dialog(title, body, Message::CloseModal))
}

fn find_modal(blocks: &[Block]) -> Option<(&str, &str)> {
    blocks.iter().find_map(|block| match block {
        Block::Modal { title, body, .. } => Some((title.as_str(), body.as_str())),
        Block::Accordion { sections } => sections
            .iter()
            .find_map(|section| find_modal(&section.blocks)),
        _ => None,
    })
}

/// Whether the page shows an animated loader.
pub fn animates(page: &GuidelinePage) -> bool {
    has_loader(&page.blocks)
}

fn has_loader(blocks: &[Block]) -> bool {
    blocks.iter().any(|block| match block {
        Block::Examples { items, .. } => items
            .iter()
            .any(|item| matches!(item.demo, Demo::Loader { .. })),
        Block::Accordion { sections } => sections
            .iter()
            .any(|section| has_loader(&section.blocks)),
        _ => false,
    })
}

fn blocks<'a>(
    column: Column<'a, Message>,
    items: &'a [Block],
    state: &'a State,
    ctx: DemoContext<'a>,
) -> Column<'a, Message> {
    items
        .iter()
        .fold(column, |column, item| column.push(block(item, state, ctx)))
}

fn block<'a>(item: &'a Block, state: &'a State, ctx: DemoContext<'a>) -> Element<'a, Message> {
    match item {
        Block::Paragraph { text } => Text::new(text.as_str()).size(typography::BODY).into(),
        Block::Rich { spans } => rich_text::view(spans, ctx.colors),
        Block::Table { headers, rows } => table::view(
            headers.iter().map(|h| table::header_cell(h)).collect(),
            rows.iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| Text::new(cell.as_str()).size(typography::BODY).into())
                        .collect()
                })
                .collect(),
        ),
        Block::Examples { columns, items } => examples(items, *columns, ctx),
        Block::Accordion { sections } => sections
            .iter()
            .fold(Column::new().width(Length::Fill), |column, section| {
                let body = blocks(
                    Column::new().spacing(spacing::MD),
                    &section.blocks,
                    state,
                    ctx,
                );
                column.push(accordion::item(
                    section_title(&section.title),
                    state.is_open(&section.key),
                    Message::ToggleSection(section.key.clone()),
                    body.into(),
                ))
            })
            .into(),
        Block::Modal { trigger, .. } => button(Text::new(trigger.as_str()))
            .padding([spacing::XS, spacing::MD])
            .on_press(Message::OpenModal)
            .into(),
    }
}

/// Do/don't grid for a list of examples.
pub fn examples<'a>(
    items: &'a [Example],
    columns: usize,
    ctx: DemoContext<'a>,
) -> Element<'a, Message> {
    example::grid(
        items
            .iter()
            .map(|item| example::panel(item.kind, &item.caption, demo::view(&item.demo, ctx)))
            .collect(),
        columns,
    )
}

fn section_title<'a>(title: &'a str) -> Element<'a, Message> {
    Text::new(title)
        .size(typography::TITLE_SM)
        .font(Font {
            weight: Weight::Semibold,
            ..Font::DEFAULT
        })
        .into()
}
