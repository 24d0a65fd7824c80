// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::catalog::{Variant, SHADES};
use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::styles::variant::paint;
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Demo button in one of the documented variants.
pub fn variant(
    shades: [Color; SHADES],
    variant: Variant,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let paint = paint(&shades, variant, theme, hovered);
        let fade = if matches!(status, button::Status::Disabled) {
            opacity::OVERLAY_MEDIUM
        } else {
            opacity::OPAQUE
        };

        button::Style {
            background: paint
                .background
                .map(|color| Background::Color(Color { a: color.a * fade, ..color })),
            text_color: Color {
                a: fade,
                ..paint.text
            },
            border: Border {
                color: paint.border.unwrap_or(Color::TRANSPARENT),
                width: if paint.border.is_some() { 1.0 } else { 0.0 },
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Sidebar entry; active entries are tinted with the brand color.
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        let background = if active {
            Some(Color {
                a: opacity::TINT,
                ..scheme.brand_primary
            })
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Some(scheme.surface_secondary)
                }
                _ => None,
            }
        };

        button::Style {
            background: background.map(Background::Color),
            text_color: if active {
                scheme.brand_primary
            } else {
                scheme.text_primary
            },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Collapsible section header.
pub fn accordion_header(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(scheme.surface_secondary),
        _ => None,
    };

    button::Style {
        background: background.map(Background::Color),
        text_color: scheme.text_primary,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Inline text link.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => scheme.brand_hover,
            _ => scheme.brand_primary,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Clickable table row or header cell.
pub fn table_row(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(scheme.surface_secondary),
        _ => None,
    };

    button::Style {
        background: background.map(Background::Color),
        text_color: scheme.text_primary,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
