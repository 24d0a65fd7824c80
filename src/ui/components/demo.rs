// SPDX-License-Identifier: MPL-2.0
//! Live widgets rendered inside example panels.

use crate::catalog::{BadgeDemo, ButtonDemo, ColorCatalog, Demo, LoaderKind, Size, SHADES};
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::glyphs;
use crate::ui::page::Message;
use crate::ui::styles;
use crate::ui::theming::PRIMARY_SHADE_LIGHT;
use crate::ui::widgets::Loader;
use iced::font::Weight;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment::Vertical, Color, Element, Font, Length};

/// Everything a demo needs besides its own description.
#[derive(Clone, Copy)]
pub struct DemoContext<'a> {
    pub colors: &'a ColorCatalog,
    /// Loader animation phase in seconds.
    pub phase: f32,
}

impl DemoContext<'_> {
    fn shades(&self, name: &str) -> [Color; SHADES] {
        self.colors
            .scale(name)
            .map(|scale| *scale.shades())
            .unwrap_or(palette::BLUE)
    }
}

/// Badge font size and height for a size token.
pub fn badge_metrics(size: Size) -> (f32, f32) {
    match size {
        Size::Xs => (9.0, 16.0),
        Size::Sm => (10.0, 18.0),
        Size::Md => (11.0, 20.0),
        Size::Lg => (13.0, 26.0),
        Size::Xl => (16.0, 32.0),
    }
}

pub fn view<'a>(demo: &'a Demo, ctx: DemoContext<'a>) -> Element<'a, Message> {
    match demo {
        Demo::Button(item) => demo_button(item, ctx),
        Demo::ButtonRow { buttons } => buttons
            .iter()
            .fold(Row::new().spacing(spacing::SM), |row, item| {
                row.push(demo_button(item, ctx))
            })
            .into(),
        Demo::Badge(item) => badge(item, ctx),
        Demo::ActionIcon {
            glyph,
            variant,
            color,
        } => button(
            Container::new(
                glyphs::sized(glyph, sizing::ICON_SM)
                    .style(styles::variant_svg(ctx.shades(color), *variant)),
            )
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        )
        .width(Length::Fixed(sizing::ACTION_ICON))
        .height(Length::Fixed(sizing::ACTION_ICON))
        .padding(0)
        .style(styles::button::variant(ctx.shades(color), *variant))
        .on_press(Message::DemoPressed)
        .into(),
        Demo::TextInput { label, placeholder } => {
            let mut column = Column::new().spacing(spacing::XXS);
            if let Some(label) = label {
                column = column.push(Text::new(label.as_str()).font(Font {
                    weight: Weight::Semibold,
                    ..Font::DEFAULT
                }));
            }
            column
                .push(
                    text_input(placeholder, "")
                        .on_input(Message::DemoInput)
                        .padding(spacing::XS),
                )
                .into()
        }
        Demo::Loader { kind } => loader(*kind, ctx),
    }
}

fn demo_button<'a>(item: &'a ButtonDemo, ctx: DemoContext<'a>) -> Element<'a, Message> {
    let shades = ctx.shades(&item.color);
    let glyph = |name: &str| {
        glyphs::sized(name, sizing::ICON_SM).style(styles::variant_svg(shades, item.variant))
    };

    let mut content = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    if let Some(name) = &item.left {
        content = content.push(glyph(name));
    }
    content = content.push(Text::new(item.label.as_str()).font(Font {
        weight: Weight::Semibold,
        ..Font::DEFAULT
    }));
    if let Some(name) = &item.right {
        content = content.push(glyph(name));
    }

    button(content)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::variant(shades, item.variant))
        .on_press(Message::DemoPressed)
        .into()
}

/// Uppercase bold label on a colored pill.
pub fn badge<'a>(item: &'a BadgeDemo, ctx: DemoContext<'a>) -> Element<'a, Message> {
    let (font_size, height) = badge_metrics(item.size);
    Container::new(
        Text::new(item.label.to_uppercase())
            .size(font_size)
            .font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            }),
    )
    .height(Length::Fixed(height))
    .center_y(Length::Fixed(height))
    .padding([0.0, height / 2.5])
    .style(styles::container::badge(
        ctx.shades(&item.color),
        item.variant,
        item.radius,
    ))
    .into()
}

fn loader<'a>(kind: LoaderKind, ctx: DemoContext<'a>) -> Element<'a, Message> {
    let color = ctx.shades("blue")[PRIMARY_SHADE_LIGHT + 1];
    Loader::new(kind, color, ctx.phase).into_element()
}
