// SPDX-License-Identifier: MPL-2.0
//! Colors for the widget variants shown in demos.
//!
//! Buttons, badges and action icons share one mapping from a ten-shade scale
//! and a [`Variant`] to background, text and border colors.

use crate::catalog::{Variant, SHADES};
use crate::ui::design_tokens::{opacity, palette};
use crate::ui::theming::{primary_shade, ColorScheme};
use iced::{Color, Theme};

/// Resolved colors for one widget state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub background: Option<Color>,
    pub text: Color,
    pub border: Option<Color>,
}

pub fn paint(shades: &[Color; SHADES], variant: Variant, theme: &Theme, hovered: bool) -> Paint {
    let shade = primary_shade(theme);
    let main = shades[shade];
    let darker = shades[(shade + 1).min(SHADES - 1)];
    let tint = |alpha: f32| Color { a: alpha, ..main };

    match variant {
        Variant::Filled => Paint {
            background: Some(if hovered { darker } else { main }),
            text: palette::WHITE,
            border: None,
        },
        Variant::Light => Paint {
            background: Some(tint(if hovered {
                opacity::TINT_HOVER
            } else {
                opacity::TINT
            })),
            text: main,
            border: None,
        },
        Variant::Outline => Paint {
            background: hovered.then(|| tint(opacity::TINT)),
            text: main,
            border: Some(main),
        },
        Variant::Subtle => Paint {
            background: hovered.then(|| tint(opacity::TINT)),
            text: main,
            border: None,
        },
        Variant::Transparent => Paint {
            background: None,
            text: main,
            border: None,
        },
        Variant::Default => {
            let scheme = ColorScheme::for_theme(theme);
            Paint {
                background: Some(if hovered {
                    scheme.surface_secondary
                } else {
                    scheme.surface_primary
                }),
                text: scheme.text_primary,
                border: Some(if theme.extended_palette().is_dark {
                    palette::DARK_4
                } else {
                    palette::GRAY_4
                }),
            }
        }
    }
}
