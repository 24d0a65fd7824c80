// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the bundled SVG mark at runtime to produce an RGBA icon for the
//! window title bar. Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon in pixels.
pub const ICON_SIZE: u32 = 128;

const SVG_SOURCE: &str = include_str!("../assets/branding/stylebook.svg");

/// Rasterize the embedded SVG mark to a square RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let (rgba, size) = rasterize(ICON_SIZE)?;
    match icon::from_rgba(rgba, size, size) {
        Ok(icon) => Some(icon),
        Err(err) => {
            tracing::warn!(%err, "window icon rejected");
            None
        }
    }
}

/// Renders the mark into a `target` x `target` pixmap.
fn rasterize(target: u32) -> Option<(Vec<u8>, u32)> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::warn!(%err, "window icon could not be parsed");
            return None;
        }
    };

    let orig_size = tree.size();
    let scale_x = target as f32 / orig_size.width();
    let scale_y = target as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(target, target)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some((pixmap.data().to_vec(), target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_rasterizes_to_square_rgba() {
        let (rgba, size) = rasterize(ICON_SIZE).expect("bundled mark renders");
        assert_eq!(size, ICON_SIZE);
        assert_eq!(rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
        assert!(rgba.chunks(4).any(|pixel| pixel[3] > 0));
    }

    #[test]
    fn window_icon_is_available() {
        assert!(load_window_icon().is_some());
    }
}
