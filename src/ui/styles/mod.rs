// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button;
pub mod container;
pub mod variant;

use crate::catalog::{Variant, SHADES};
use crate::ui::styles::variant::paint;
use crate::ui::theming::primary_shade;
use iced::widget::{svg, text};
use iced::{Color, Theme};

/// Tints a monochrome SVG glyph with the current text color.
pub fn tinted_svg(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.extended_palette().background.base.text),
    }
}

/// Glyph inside a variant widget, in the variant's text color.
pub fn variant_svg(
    shades: [Color; SHADES],
    variant: Variant,
) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |theme: &Theme, status: svg::Status| svg::Style {
        color: Some(
            paint(
                &shades,
                variant,
                theme,
                matches!(status, svg::Status::Hovered),
            )
            .text,
        ),
    }
}

/// Text in the primary shade of a color scale.
pub fn shade_text(shades: [Color; SHADES]) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(shades[primary_shade(theme)]),
    }
}
