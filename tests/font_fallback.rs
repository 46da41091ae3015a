use image::{Rgba, RgbaImage};
use pwa_assets::{
    gradient::blend,
    icons::{self, render_icon, ICONS},
    screenshots::{self, render_screenshot, SCREENSHOTS},
    FontResolver, GenerateOptions, Theme,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn unresolvable_fonts() -> FontResolver {
    FontResolver::new(
        vec![PathBuf::from("/nonexistent/arial.ttf")],
        vec![PathBuf::from("/nonexistent/arialbd.ttf")],
    )
    .with_search_dir("/nonexistent")
}

fn count_pixels(img: &RgbaImage, color: Rgba<u8>, region: (u32, u32, u32, u32)) -> usize {
    let (x0, y0, x1, y1) = region;
    (y0..y1)
        .flat_map(|y| (x0..x1).map(move |x| (x, y)))
        .filter(|&(x, y)| *img.get_pixel(x, y) == color)
        .count()
}

/// With every font candidate failing, all six targets still generate.
#[test]
fn test_generation_completes_without_fonts() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let options = GenerateOptions {
        output: temp_dir.path().join("public"),
        theme: Theme::default(),
        fonts: unresolvable_fonts(),
    };

    let icons = icons::generate_icons(&options).expect("icons should generate");
    let shots = screenshots::generate_screenshots(&options).expect("screenshots should generate");

    assert_eq!(icons.len(), 4);
    assert_eq!(shots.len(), 2);
    for path in icons.iter().chain(&shots) {
        image::open(path).expect("generated file should be a valid image");
    }
}

/// The built-in font still puts the initials near the center of every icon.
#[test]
fn test_builtin_label_is_drawn() {
    let theme = Theme::default();
    let fonts = unresolvable_fonts();

    for spec in &ICONS {
        let icon = render_icon(spec, &theme, &fonts);
        let quarter = spec.size / 4;
        let center = (quarter, quarter, spec.size - quarter, spec.size - quarter);

        assert!(
            count_pixels(&icon, theme.foreground, center) > 0,
            "{} should carry a label",
            spec.file_name
        );
        assert!(
            count_pixels(&icon, theme.accent, center) > 0,
            "{} should carry the accent bar",
            spec.file_name
        );
    }
}

/// The maskable icon is full-bleed, and nothing but the background gradient
/// is drawn inside its safe-zone padding.
#[test]
fn test_maskable_padding_is_clean() {
    let theme = Theme::default();
    let spec = ICONS.iter().find(|spec| spec.maskable).unwrap();
    let icon = render_icon(spec, &theme, &unresolvable_fonts());

    let size = spec.size;
    let padding = spec.padding();
    // 10% of 512 is 51.2; the padding is truncated to whole pixels.
    assert_eq!(padding, (size as f32 * 0.1) as u32);
    assert!(
        padding as f32 > size as f32 * 0.1 - 1.0,
        "padding {padding} should be 10% of {size}, truncated to whole pixels"
    );

    for (x, y) in [(0, 0), (size - 1, 0), (0, size - 1), (size - 1, size - 1)] {
        assert_eq!(icon.get_pixel(x, y)[3], 255, "corner ({x}, {y}) must be opaque");
    }

    for y in 0..size {
        let expected = blend(theme.primary, theme.primary_dark, y as f32 / size as f32);
        for x in 0..size {
            let in_band = x < padding || y < padding || x >= size - padding || y >= size - padding;
            if in_band {
                assert_eq!(*icon.get_pixel(x, y), expected, "padding pixel ({x}, {y})");
            }
        }
    }
}

/// Screenshots rendered without fonts match those rendered by a resolver
/// that has no candidates at all: both use the built-in font.
#[test]
fn test_builtin_rendering_is_deterministic() {
    let theme = Theme::default();

    for spec in &SCREENSHOTS {
        let a = render_screenshot(spec, &theme, &unresolvable_fonts());
        let b = render_screenshot(spec, &theme, &FontResolver::builtin_only());
        assert!(a == b, "{} should not depend on failed candidates", spec.file_name);
    }
}
