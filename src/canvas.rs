//! In-memory RGBA drawing surface.

use crate::{
    font::{FontRequest, FontResolver, LoadedFont},
    theme::TRANSPARENT,
};
use image::{GrayImage, Luma, Pixel, Rgba, RgbaImage};

/// Axis-aligned rectangle with an exclusive extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning `(x0, y0)` up to, but not including, `(x1, y1)`.
    pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(
            x0,
            y0,
            x1.saturating_sub(x0).max(0) as u32,
            y1.saturating_sub(y0).max(0) as u32,
        )
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Whether the center of pixel `(px, py)` falls inside this rectangle
    /// with its corners rounded off by `radius`.
    pub fn covers_rounded(&self, px: i32, py: i32, radius: f32) -> bool {
        let (fx, fy) = (px as f32 + 0.5, py as f32 + 0.5);
        let (left, top) = (self.x as f32, self.y as f32);
        let (right, bottom) = (self.right() as f32, self.bottom() as f32);

        if fx < left || fx > right || fy < top || fy > bottom {
            return false;
        }

        let radius = radius
            .min(self.width as f32 / 2.0)
            .min(self.height as f32 / 2.0)
            .max(0.0);
        let dx = (left + radius - fx).max(fx - (right - radius)).max(0.0);
        let dy = (top + radius - fy).max(fy - (bottom - radius)).max(0.0);

        dx * dx + dy * dy <= radius * radius
    }
}

/// Pixel buffer plus the handful of shapes the generators need.
///
/// Coordinates are signed and every operation clips to the canvas, so
/// layout constants that spill past an edge are harmless.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, color: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, color),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width(), self.height())
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Source-over composite of `color` at `(x, y)`, with its alpha scaled
    /// by `coverage`.
    pub fn blend(&mut self, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }

        let alpha = (color[3] as f32 * coverage.clamp(0.0, 1.0)).round() as u8;
        if alpha == 0 {
            return;
        }

        let source = Rgba([color[0], color[1], color[2], alpha]);
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        if alpha == u8::MAX {
            *pixel = source;
        } else {
            pixel.blend(&source);
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, color, 1.0);
            }
        }
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: u32, color: Rgba<u8>) {
        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                if rect.covers_rounded(x, y, radius as f32) {
                    self.blend(x, y, color, 1.0);
                }
            }
        }
    }

    pub fn fill_circle(&mut self, center_x: i32, center_y: i32, radius: u32, color: Rgba<u8>) {
        let r = radius as i32;
        let bounding = Rect::from_corners(center_x - r, center_y - r, center_x + r, center_y + r);
        let (x0, y0, x1, y1) = self.clip(bounding);
        let (cx, cy, r) = (center_x as f32, center_y as f32, radius as f32);

        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.blend(x, y, color, 1.0);
                }
            }
        }
    }

    /// Multiply every pixel's alpha by the matching mask value.
    pub fn apply_mask(&mut self, mask: &GrayImage) {
        for (x, y, pixel) in self.image.enumerate_pixels_mut() {
            let coverage = if x < mask.width() && y < mask.height() {
                mask.get_pixel(x, y)[0]
            } else {
                0
            };
            pixel[3] = (pixel[3] as u16 * coverage as u16 / 255) as u8;
        }
    }

    /// Draw `text` with its layout origin (left edge, top of the line) at `(x, y)`.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, font: &LoadedFont, color: Rgba<u8>) {
        font.rasterize(text, |gx, gy, coverage| {
            self.blend(x + gx, y + gy, color, coverage)
        });
    }

    /// Resolve a font for `request` and draw `text` with it.
    pub fn draw_label(
        &mut self,
        fonts: &FontResolver,
        request: FontRequest,
        (x, y): (i32, i32),
        text: &str,
        color: Rgba<u8>,
    ) {
        let font = fonts.resolve(request.style, request.px);
        self.draw_text(x, y, text, &font, color);
    }

    fn clip(&self, rect: Rect) -> (i32, i32, i32, i32) {
        (
            rect.x.max(0),
            rect.y.max(0),
            rect.right().min(self.width() as i32),
            rect.bottom().min(self.height() as i32),
        )
    }
}

/// Coverage mask that is opaque inside a `width`×`height` rectangle with
/// corners rounded by `radius`, and transparent outside it.
pub fn rounded_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let shape = Rect::new(0, 0, width, height);
    GrayImage::from_fn(width, height, |x, y| {
        if shape.covers_rounded(x as i32, y as i32, radius as f32) {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}
