// SPDX-License-Identifier: MPL-2.0
//! Animated loader demos drawn on a canvas.
//!
//! Both loaders are pure functions of a phase in seconds supplied by the
//! caller, so the animation advances only while ticks arrive.

use crate::catalog::LoaderKind;
use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};
use std::f32::consts::{PI, TAU};

/// Seconds per full cycle of either loader.
const PERIOD: f32 = 1.2;

const BARS: usize = 3;

/// A loader of a given kind at a given animation phase.
pub struct Loader {
    cache: Cache,
    kind: LoaderKind,
    phase: f32,
    color: Color,
    size: f32,
}

impl Loader {
    #[must_use]
    pub fn new(kind: LoaderKind, color: Color, phase: f32) -> Self {
        Self {
            cache: Cache::default(),
            kind,
            phase,
            color,
            size: sizing::LOADER,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Height factor in `0.2..=1.0` for bar `index` at `phase` seconds.
pub fn bar_scale(index: usize, phase: f32) -> f32 {
    let offset = index as f32 * PERIOD / (BARS as f32 * 2.0);
    let t = ((phase - offset) / PERIOD).rem_euclid(1.0);
    0.2 + 0.8 * (0.5 - 0.5 * (t * TAU).cos())
}

/// Leading angle of the oval arc in radians, in `0..TAU`.
pub fn arc_angle(phase: f32) -> f32 {
    (phase / PERIOD).rem_euclid(1.0) * TAU
}

impl<Message> canvas::Program<Message> for Loader {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| match self.kind {
                LoaderKind::Bars => self.draw_bars(frame),
                LoaderKind::Oval => self.draw_oval(frame),
            });

        vec![geometry]
    }
}

impl Loader {
    fn draw_bars(&self, frame: &mut Frame) {
        let slot = frame.width() / BARS as f32;
        let bar_width = slot * 0.6;
        let full = frame.height();

        for index in 0..BARS {
            let height = full * bar_scale(index, self.phase);
            let x = slot * index as f32 + (slot - bar_width) / 2.0;
            let y = (full - height) / 2.0;
            let bar = Path::rectangle(Point::new(x, y), Size::new(bar_width, height));
            frame.fill(&bar, self.color);
        }
    }

    fn draw_oval(&self, frame: &mut Frame) {
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - 3.0;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(3.0).with_color(Color {
                a: 0.25,
                ..self.color
            }),
        );

        // Quarter arc starting at the top
        let start = arc_angle(self.phase) - PI / 2.0;
        let sweep = PI / 2.0;
        let segments = 24;

        let mut arc = canvas::path::Builder::new();
        arc.move_to(Point::new(
            center.x + radius * start.cos(),
            center.y + radius * start.sin(),
        ));
        for i in 1..=segments {
            let angle = start + sweep * (i as f32 / segments as f32);
            arc.line_to(Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }

        frame.stroke(
            &arc.build(),
            Stroke::default()
                .with_width(3.0)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scale_stays_in_range() {
        for step in 0..100 {
            let phase = step as f32 * 0.037;
            for index in 0..BARS {
                let scale = bar_scale(index, phase);
                assert!((0.2..=1.0001).contains(&scale), "{scale}");
            }
        }
    }

    #[test]
    fn bars_are_staggered() {
        assert!((bar_scale(0, 0.3) - bar_scale(1, 0.3)).abs() > 0.01);
    }

    #[test]
    fn arc_angle_wraps_each_period() {
        assert!(arc_angle(0.0).abs() < 1e-5);
        assert!((arc_angle(PERIOD * 0.25) - PI / 2.0).abs() < 1e-4);
        assert!((arc_angle(PERIOD * 3.0)).abs() < 1e-3 || (arc_angle(PERIOD * 3.0) - TAU).abs() < 1e-3);
    }
}
