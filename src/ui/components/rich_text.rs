// SPDX-License-Identifier: MPL-2.0
//! Paragraphs made of styled spans and inline links.

use crate::catalog::{ColorCatalog, Span};
use crate::ui::design_tokens::typography;
use crate::ui::page::Message;
use crate::ui::styles;
use iced::font::{Style, Weight};
use iced::widget::{button, Row, Text};
use iced::{Element, Font};

/// Font for a span's emphasis flags.
pub fn span_font(span: &Span) -> Font {
    Font {
        weight: if span.bold {
            Weight::Bold
        } else {
            Weight::Normal
        },
        style: if span.italic {
            Style::Italic
        } else {
            Style::Normal
        },
        ..Font::DEFAULT
    }
}

pub fn view<'a>(spans: &'a [Span], colors: &'a ColorCatalog) -> Element<'a, Message> {
    spans
        .iter()
        .fold(Row::new(), |row, span| row.push(span_element(span, colors)))
        .wrap()
        .into()
}

fn span_element<'a>(span: &'a Span, colors: &'a ColorCatalog) -> Element<'a, Message> {
    let label = Text::new(span.text.as_str())
        .size(typography::BODY)
        .font(span_font(span));

    if let Some(target) = &span.link {
        return button(label)
            .padding(0)
            .style(styles::button::link)
            .on_press(Message::FollowLink(target.clone()))
            .into();
    }

    match span
        .color
        .as_deref()
        .and_then(|name| colors.scale(name))
        .map(|scale| *scale.shades())
    {
        Some(shades) => label.style(styles::shade_text(shades)).into(),
        None => label.into(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_span_uses_default_font() {
        assert_eq!(span_font(&Span::default()), Font::DEFAULT);
    }

    #[test]
    fn emphasis_flags_map_to_font() {
        let span = Span {
            text: "Links".into(),
            italic: true,
            bold: true,
            ..Span::default()
        };
        let font = span_font(&span);
        assert_eq!(font.weight, Weight::Bold);
        assert_eq!(font.style, Style::Italic);
    }
}
