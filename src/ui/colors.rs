// SPDX-License-Identifier: MPL-2.0
//! Colors page: usage table, per-color guidance and decorative scales.

use crate::catalog::{ColorCatalog, ColorScale, SwatchGuide, SHADES};
use crate::ui::components::demo::DemoContext;
use crate::ui::components::{accordion, table, wip_banner};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::guidelines;
use crate::ui::page::{Message, State};
use crate::ui::styles;
use crate::ui::theming::primary_shade;
use iced::font::Weight;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment::Horizontal, alignment::Vertical, Element, Font, Length, Theme};

/// Accordion key of the decorative colors item.
pub const DECORATIVE_KEY: &str = "decorative";

pub struct ViewContext<'a> {
    pub colors: &'a ColorCatalog,
    pub state: &'a State,
    pub phase: f32,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let demo_ctx = DemoContext {
        colors: ctx.colors,
        phase: ctx.phase,
    };

    let swatches = ctx
        .colors
        .swatches()
        .iter()
        .fold(Column::new().width(Length::Fill), |column, guide| {
            column.push(swatch_item(guide, ctx.colors, ctx.state, demo_ctx))
        })
        .push(decorative_item(ctx.colors, ctx.state, demo_ctx));

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(wip_banner::view())
        .push(usage_table(ctx.colors))
        .push(swatches)
        .into()
}

fn usage_table<'a>(colors: &'a ColorCatalog) -> Element<'a, Message> {
    let headers = ["Purpose", "Color", "Usage", "Example"]
        .into_iter()
        .map(table::header_cell)
        .collect();

    let rows = colors
        .usage()
        .iter()
        .map(|row| {
            let color_cell: Element<'a, Message> = match colors.scale(&row.color) {
                Some(scale) => Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(chip(scale))
                    .push(Text::new(row.color.as_str()).size(typography::BODY))
                    .into(),
                None => Text::new(row.color.as_str()).size(typography::BODY).into(),
            };
            vec![
                Text::new(row.purpose.as_str()).size(typography::BODY).into(),
                color_cell,
                Text::new(row.usage.as_str()).size(typography::BODY).into(),
                Text::new(row.example.as_str()).size(typography::BODY).into(),
            ]
        })
        .collect();

    table::view(headers, rows)
}

/// Small square in the scale's primary shade.
fn chip<'a>(scale: &'a ColorScale) -> Element<'a, Message> {
    let shades = *scale.shades();
    Container::new(Text::new(""))
        .width(Length::Fixed(sizing::ICON_SM))
        .height(Length::Fixed(sizing::ICON_SM))
        .style(move |theme: &Theme| styles::container::swatch(shades[primary_shade(theme)])(theme))
        .into()
}

fn swatch_item<'a>(
    guide: &'a SwatchGuide,
    colors: &'a ColorCatalog,
    state: &'a State,
    ctx: DemoContext<'a>,
) -> Element<'a, Message> {
    let title = Text::new(guide.name.as_str())
        .size(typography::TITLE_SM)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        });
    let title = match colors.scale(&guide.name) {
        Some(scale) => title.style(styles::shade_text(*scale.shades())),
        None => title,
    };

    let body = guide
        .description
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, line| {
            column.push(Text::new(line.as_str()).size(typography::BODY))
        })
        .push(guidelines::examples(&guide.examples, 2, ctx));

    accordion::item(
        title.into(),
        state.is_open(&guide.name),
        Message::ToggleSection(guide.name.clone()),
        body.into(),
    )
}

fn decorative_item<'a>(
    colors: &'a ColorCatalog,
    state: &'a State,
    ctx: DemoContext<'a>,
) -> Element<'a, Message> {
    let guide = colors.decorative_guide();

    let body = colors
        .decorative()
        .fold(
            Column::new()
                .spacing(spacing::MD)
                .push(Text::new(guide.description.as_str()).size(typography::BODY)),
            |column, scale| column.push(scale_strip(scale)),
        )
        .push(guidelines::examples(&guide.examples, 2, ctx));

    accordion::item(
        Text::new(guide.title.as_str())
            .size(typography::TITLE_SM)
            .font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            })
            .into(),
        state.is_open(DECORATIVE_KEY),
        Message::ToggleSection(DECORATIVE_KEY.to_string()),
        body.into(),
    )
}

/// Scale name above its ten shades, each labelled with its index.
fn scale_strip<'a>(scale: &'a ColorScale) -> Element<'a, Message> {
    let shades = (0..SHADES).fold(Row::new().spacing(spacing::XXS), |row, index| {
        row.push(
            Column::new()
                .spacing(spacing::XXXS)
                .align_x(Horizontal::Center)
                .push(
                    Container::new(Text::new(""))
                        .width(Length::Fixed(sizing::SWATCH))
                        .height(Length::Fixed(sizing::SWATCH))
                        .style(styles::container::swatch(scale.shade(index))),
                )
                .push(Text::new(index.to_string()).size(typography::CAPTION)),
        )
    });

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(scale.name()).size(typography::BODY_LG))
        .push(shades)
        .into()
}

