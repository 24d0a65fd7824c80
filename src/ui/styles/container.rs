// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::catalog::{ExampleKind, Size, Variant, SHADES};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::styles::variant::paint;
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Sidebar surface with a separating border.
pub fn sidebar(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_primary)),
        border: Border {
            color: scheme.border,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Main content surface.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_primary)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// "Work in progress" notice.
pub fn wip_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::YELLOW_1)),
        text_color: Some(palette::YELLOW_9),
        border: Border {
            color: palette::YELLOW_5,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Do/don't panel framed in teal or red.
pub fn example(kind: ExampleKind) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        border: Border {
            color: match kind {
                ExampleKind::Do => palette::TEAL_6,
                ExampleKind::Dont => palette::RED_6,
            },
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Badge corner radius for a size token.
pub fn badge_radius(size: Size) -> f32 {
    match size {
        Size::Xs => radius::XS,
        Size::Sm => radius::SM,
        Size::Md => radius::MD,
        Size::Lg => radius::LG,
        Size::Xl => radius::XL,
    }
}

/// Badge in one of the documented variants.
pub fn badge(
    shades: [Color; SHADES],
    variant: Variant,
    corner: Size,
) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let paint = paint(&shades, variant, theme, false);
        container::Style {
            background: paint.background.map(Background::Color),
            text_color: Some(paint.text),
            border: Border {
                color: paint.border.unwrap_or(Color::TRANSPARENT),
                width: if paint.border.is_some() {
                    border::WIDTH_SM
                } else {
                    0.0
                },
                radius: badge_radius(corner).into(),
            },
            ..Default::default()
        }
    }
}

/// Green acknowledgment badge next to a copied icon.
pub fn copied_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GREEN_6)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: badge_radius(Size::Xl).into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Solid color square.
pub fn swatch(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Table header row.
pub fn table_header(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_secondary)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Modal dialog body.
pub fn modal_card(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_primary)),
        text_color: Some(scheme.text_primary),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Dimmed layer behind the modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}
