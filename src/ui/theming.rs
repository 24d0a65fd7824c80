// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming for the page chrome.

use crate::ui::design_tokens::{palette, rgb};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Colors of the page chrome for one mode.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub border: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub brand_hover: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_0,
            border: palette::GRAY_3,

            text_primary: rgb(0x21, 0x25, 0x29),
            text_secondary: palette::GRAY_6,

            brand_primary: palette::BLUE[PRIMARY_SHADE_LIGHT],
            brand_hover: palette::BLUE[PRIMARY_SHADE_LIGHT + 1],
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::DARK_7,
            surface_secondary: palette::DARK_6,
            border: palette::DARK_4,

            text_primary: rgb(0xC9, 0xC9, 0xC9),
            text_secondary: palette::GRAY_6,

            brand_primary: palette::BLUE[PRIMARY_SHADE_DARK],
            brand_hover: palette::BLUE[PRIMARY_SHADE_DARK + 1],
        }
    }

    /// Scheme for an `iced` theme.
    #[must_use]
    pub fn for_theme(theme: &iced::Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Shade used for filled widgets in light mode.
pub const PRIMARY_SHADE_LIGHT: usize = 6;
/// Shade used for filled widgets in dark mode.
pub const PRIMARY_SHADE_DARK: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to light on detection error
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }

    /// Next mode in the sidebar toggle cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn to_iced(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("invalid theme_mode: {other}")),
        }
    }
}

/// Index of the primary shade for a theme.
#[must_use]
pub fn primary_shade(theme: &iced::Theme) -> usize {
    if theme.extended_palette().is_dark {
        PRIMARY_SHADE_DARK
    } else {
        PRIMARY_SHADE_LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn both_themes_have_same_brand_hue() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();
        assert!(light.brand_primary.b > light.brand_primary.r);
        assert!(dark.brand_primary.b > dark.brand_primary.r);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_cycle_visits_every_mode() {
        let start = ThemeMode::Light;
        assert_eq!(start.next(), ThemeMode::Dark);
        assert_eq!(start.next().next(), ThemeMode::System);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn theme_mode_parses_and_displays() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(mode.to_string().parse::<ThemeMode>(), Ok(mode));
        }
        assert_eq!("DARK".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn primary_shade_depends_on_theme() {
        assert_eq!(primary_shade(&iced::Theme::Light), PRIMARY_SHADE_LIGHT);
        assert_eq!(primary_shade(&iced::Theme::Dark), PRIMARY_SHADE_DARK);
    }
}
