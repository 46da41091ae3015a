//! Two-stop linear gradients painted one strip at a time.

use crate::canvas::{Canvas, Rect};
use image::Rgba;

/// Axis along which the gradient ratio changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Top row is the first color, bottom row approaches the second.
    Vertical,
    /// Left column is the first color, right column approaches the second.
    Horizontal,
}

/// Linear mix of two colors, `ratio` 0.0 being `from` and 1.0 being `to`.
pub fn blend(from: Rgba<u8>, to: Rgba<u8>, ratio: f32) -> Rgba<u8> {
    let ratio = ratio.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 * (1.0 - ratio) + b as f32 * ratio).round() as u8;

    Rgba([
        mix(from[0], to[0]),
        mix(from[1], to[1]),
        mix(from[2], to[2]),
        mix(from[3], to[3]),
    ])
}

impl Canvas {
    /// Fill `rect` with a gradient from `from` to `to` along `direction`.
    ///
    /// Strip `i` of `extent` gets `blend(from, to, i / extent)`, so the last
    /// strip stops one step short of `to`. A zero extent paints nothing.
    pub fn fill_linear_gradient(
        &mut self,
        rect: Rect,
        from: Rgba<u8>,
        to: Rgba<u8>,
        direction: Direction,
    ) {
        let extent = match direction {
            Direction::Vertical => rect.height,
            Direction::Horizontal => rect.width,
        };

        for i in 0..extent {
            let color = blend(from, to, i as f32 / extent as f32);
            let strip = match direction {
                Direction::Vertical => Rect::new(rect.x, rect.y + i as i32, rect.width, 1),
                Direction::Horizontal => Rect::new(rect.x + i as i32, rect.y, 1, rect.height),
            };
            self.fill_rect(strip, color);
        }
    }
}
