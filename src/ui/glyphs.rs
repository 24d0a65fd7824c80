// SPDX-License-Identifier: MPL-2.0
//! SVG glyphs for icons, with cached handles.
//!
//! Handles are created once from [`GlyphAssets`] on first access and cloned
//! afterwards.

use crate::catalog::GlyphAssets;
use crate::ui::styles;
use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::collections::HashMap;
use std::sync::OnceLock;

fn handles() -> &'static HashMap<String, Handle> {
    static HANDLES: OnceLock<HashMap<String, Handle>> = OnceLock::new();
    HANDLES.get_or_init(|| {
        GlyphAssets::iter()
            .filter_map(|file| {
                let stem = file.strip_suffix(".svg")?.to_string();
                let data = GlyphAssets::get(&file)?;
                Some((stem, Handle::from_memory(data.data)))
            })
            .collect()
    })
}

/// Handle for a named glyph, if it is bundled.
pub fn handle(name: &str) -> Option<Handle> {
    handles().get(name).cloned()
}

/// A glyph tinted with the current text color, at `size` pixels square.
///
/// Unknown names render as an empty image.
pub fn sized<'a>(name: &str, size: f32) -> Svg<'a> {
    let handle = handle(name).unwrap_or_else(|| {
        tracing::debug!(glyph = name, "missing glyph");
        Handle::from_memory(&b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>"[..])
    });
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(styles::tinted_svg)
}
