// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Tokens used by the reference page chrome. The documented color scales live in
the catalog; the two scales the page itself is themed with are mirrored here
as constants.

## Organization

- **Palette**: Brand and neutral colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii, including the badge radius scale
- **Shadow**: Shadow definitions

## Examples

```
use stylebook::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

/// Builds a color from 8-bit channels in const context.
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

pub mod palette {
    use super::{rgb, Color};

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Neutral scale
    pub const GRAY_0: Color = rgb(0xF8, 0xF9, 0xFA);
    pub const GRAY_3: Color = rgb(0xDE, 0xE2, 0xE6);
    pub const GRAY_4: Color = rgb(0xCE, 0xD4, 0xDA);
    pub const GRAY_6: Color = rgb(0x86, 0x8E, 0x96);
    pub const DARK_4: Color = rgb(0x3B, 0x3B, 0x3B);
    pub const DARK_6: Color = rgb(0x2E, 0x2E, 0x2E);
    pub const DARK_7: Color = rgb(0x24, 0x24, 0x24);

    /// HireScore blue, lightest first.
    pub const BLUE: [Color; 10] = [
        rgb(0xF8, 0xFC, 0xFF),
        rgb(0xCF, 0xED, 0xFF),
        rgb(0xA8, 0xDF, 0xFF),
        rgb(0x86, 0xD2, 0xFF),
        rgb(0x65, 0xC6, 0xFF),
        rgb(0x48, 0xBB, 0xFF),
        rgb(0x2D, 0xB1, 0xFF),
        rgb(0x00, 0x8E, 0xE2),
        rgb(0x00, 0x76, 0xBB),
        rgb(0x00, 0x6B, 0xAA),
    ];

    // Work-in-progress banner
    pub const YELLOW_1: Color = rgb(0xFF, 0xF3, 0xBF);
    pub const YELLOW_5: Color = rgb(0xFC, 0xC4, 0x19);
    pub const YELLOW_9: Color = rgb(0xE6, 0x77, 0x00);

    // Example panel borders
    pub const TEAL_6: Color = rgb(0x12, 0xB8, 0x86);
    pub const RED_6: Color = rgb(0xFA, 0x52, 0x52);

    pub const GREEN_6: Color = rgb(0x40, 0xC0, 0x57);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Tint behind "light" variant widgets.
    pub const TINT: f32 = 0.1;
    pub const TINT_HOVER: f32 = 0.15;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXXS: f32 = 2.0;
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 40.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const ACTION_ICON: f32 = 28.0;

    pub const SIDEBAR_WIDTH: f32 = 240.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1000.0;
    pub const MODAL_WIDTH: f32 = 440.0;

    /// Side of one decorative color swatch.
    pub const SWATCH: f32 = 50.0;

    pub const LOADER: f32 = 36.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale:
    //! - Titles: page and section headings
    //! - Body: primary content text
    //! - Caption: secondary, supporting text

    /// Page heading (the active section label)
    pub const TITLE_LG: f32 = 30.0;

    /// Modal titles, app name
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const BODY_SM: f32 = 13.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const XS: f32 = 2.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TINT > 0.0 && opacity::TINT < opacity::TINT_HOVER);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);

    assert!(radius::SM > radius::XS);
    assert!(radius::MD > radius::SM);
    assert!(radius::LG > radius::MD);
    assert!(radius::XL > radius::LG);
};
