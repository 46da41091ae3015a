//! Manifest icons: gradient tile, centered initials, accent bar, wordmark.

use crate::{
    canvas::{rounded_mask, Canvas, Rect},
    font::{FontResolver, FontStyle},
    gradient::Direction,
    output::{ensure_dir, save_png},
    theme::Theme,
    GenerateOptions,
};
use anyhow::Result;
use image::{DynamicImage, RgbaImage};
use std::path::PathBuf;

/// Corner radius of regular icons, as a fraction of the icon size.
pub const CORNER_RADIUS_RATIO: f32 = 0.15;
/// Safe-zone margin on each side of maskable icons, as a fraction of the icon size.
pub const MASKABLE_PADDING_RATIO: f32 = 0.1;
/// Icons at least this large also carry the wordmark.
pub const WORDMARK_MIN_SIZE: u32 = 192;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub file_name: &'static str,
    /// Full-bleed variant that the platform crops to its own shape.
    pub maskable: bool,
}

impl IconSpec {
    pub fn padding(&self) -> u32 {
        if self.maskable {
            (self.size as f32 * MASKABLE_PADDING_RATIO) as u32
        } else {
            0
        }
    }

    pub fn corner_radius(&self) -> u32 {
        (self.size as f32 * CORNER_RADIUS_RATIO) as u32
    }
}

pub const ICONS: [IconSpec; 4] = [
    IconSpec {
        size: 64,
        file_name: "pwa-64x64.png",
        maskable: false,
    },
    IconSpec {
        size: 192,
        file_name: "pwa-192x192.png",
        maskable: false,
    },
    IconSpec {
        size: 512,
        file_name: "pwa-512x512.png",
        maskable: false,
    },
    IconSpec {
        size: 512,
        file_name: "pwa-maskable-512x512.png",
        maskable: true,
    },
];

/// Draw every icon in [`ICONS`] into `options.output`.
pub fn generate_icons(options: &GenerateOptions) -> Result<Vec<PathBuf>> {
    ensure_dir(&options.output)?;

    let mut written = Vec::new();
    for spec in &ICONS {
        let icon = render_icon(spec, &options.theme, &options.fonts);
        let output_path = options.output.join(spec.file_name);
        save_png(&DynamicImage::ImageRgba8(icon), &output_path)?;
        println!(
            "✅ Generated: {} ({}x{})",
            output_path.display(),
            spec.size,
            spec.size
        );
        written.push(output_path);
    }

    Ok(written)
}

/// Paint one icon in memory.
///
/// Text problems never fail the icon: the emblem is replaced by a plain
/// circle and a warning is logged.
pub fn render_icon(spec: &IconSpec, theme: &Theme, fonts: &FontResolver) -> RgbaImage {
    let size = spec.size;
    let mut canvas = Canvas::new(size, size);

    canvas.fill_linear_gradient(
        canvas.bounds(),
        theme.primary,
        theme.primary_dark,
        Direction::Vertical,
    );

    if !spec.maskable {
        canvas.apply_mask(&rounded_mask(size, size, spec.corner_radius()));
    }

    if let Err(err) = draw_emblem(&mut canvas, spec, theme, fonts) {
        log::warn!("⚠️  Font rendering issue in {}: {err:#}", spec.file_name);
        draw_placeholder(&mut canvas, spec, theme);
    }

    canvas.into_image()
}

fn draw_emblem(
    canvas: &mut Canvas,
    spec: &IconSpec,
    theme: &Theme,
    fonts: &FontResolver,
) -> Result<()> {
    let size = spec.size as f32;
    let center = (spec.size / 2) as i32;
    let safe_size = (spec.size - spec.padding() * 2) as f32;

    let font_size = if spec.maskable {
        safe_size * 0.35
    } else {
        size * 0.4
    };
    let font_size = font_size.trunc();

    let font = fonts.resolve(FontStyle::Bold, font_size);
    font.ensure_glyphs(&theme.initials)?;

    // Center the ink, not the layout box: outline glyphs start after a side bearing.
    let bounds = font.measure(&theme.initials);
    let text_x = center - bounds.width() / 2 - bounds.min_x;
    let text_y = center - bounds.height() / 2 - (font_size * 0.05) as i32;
    canvas.draw_text(text_x, text_y, &theme.initials, &font, theme.foreground);

    let bar_width = (font_size * 1.2) as u32;
    let bar_height = ((font_size * 0.08) as u32).max(1);
    canvas.fill_rect(
        Rect::new(
            center - (bar_width / 2) as i32,
            center + (font_size * 0.35) as i32,
            bar_width,
            bar_height,
        ),
        theme.accent,
    );

    if spec.size >= WORDMARK_MIN_SIZE {
        let small = fonts.resolve(FontStyle::Regular, (size * 0.08).trunc());
        small.ensure_glyphs(&theme.wordmark)?;

        let bounds = small.measure(&theme.wordmark);
        canvas.draw_text(
            center - bounds.width() / 2 - bounds.min_x,
            center + (font_size * 0.55) as i32,
            &theme.wordmark,
            &small,
            theme.foreground,
        );
    }

    Ok(())
}

fn draw_placeholder(canvas: &mut Canvas, spec: &IconSpec, theme: &Theme) {
    let center = (spec.size / 2) as i32;
    canvas.fill_circle(center, center, spec.size / 3, theme.foreground);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_only_for_maskable() {
        assert_eq!(ICONS[2].padding(), 0);
        assert_eq!(ICONS[3].padding(), 51);
        assert_eq!(ICONS[0].corner_radius(), 9);
    }

    #[test]
    fn regular_icon_has_transparent_corners() {
        let icon = render_icon(&ICONS[1], &Theme::default(), &FontResolver::builtin_only());

        for (x, y) in [(0, 0), (191, 0), (0, 191), (191, 191)] {
            assert_eq!(icon.get_pixel(x, y)[3], 0, "corner ({x}, {y})");
        }
        assert_eq!(icon.get_pixel(96, 2)[3], 255);
    }

    #[test]
    fn missing_glyph_draws_placeholder_circle() {
        let theme = Theme {
            initials: "E\u{2603}S".to_string(),
            ..Theme::default()
        };
        let icon = render_icon(&ICONS[0], &theme, &FontResolver::builtin_only());

        assert_eq!(*icon.get_pixel(32, 32), theme.foreground);
        assert_eq!(*icon.get_pixel(32, 14), theme.foreground);
    }

    #[test]
    fn accent_bar_sits_below_center() {
        let theme = Theme::default();
        let icon = render_icon(&ICONS[2], &theme, &FontResolver::builtin_only());

        // 512 * 0.4 = 204px font: bar starts 71px below center, 16px tall.
        assert_eq!(*icon.get_pixel(256, 256 + 71 + 8), theme.accent);
        assert_ne!(*icon.get_pixel(256, 256 + 71 - 2), theme.accent);
    }

    #[test]
    fn outline_initials_are_centered() {
        let theme = Theme::default();
        let bold = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/DejaVuSans-Bold.ttf");
        let fonts = FontResolver::new(vec![], vec![bold.into()]);

        for spec in [&ICONS[0], &ICONS[2]] {
            let icon = render_icon(spec, &theme, &fonts);
            // Rows above the accent bar hold only the initials.
            let rows = 0..spec.size / 2 + spec.size / 8;
            let inked: Vec<u32> = rows
                .flat_map(|y| (0..spec.size).map(move |x| (x, y)))
                .filter(|&(x, y)| {
                    let p = icon.get_pixel(x, y);
                    p[3] == 255 && p[0].min(p[1]).min(p[2]) >= 200
                })
                .map(|(x, _)| x)
                .collect();

            let (Some(&left), Some(&right)) = (inked.iter().min(), inked.iter().max()) else {
                panic!("{} has no initials", spec.file_name);
            };
            let ink_center = (left + right + 1) as f32 / 2.0;
            let center = spec.size as f32 / 2.0;
            assert!(
                (ink_center - center).abs() <= 2.0,
                "{}: ink spans {left}..={right}",
                spec.file_name
            );
        }
    }
}
