//! Store screenshots: mock dashboard pages in desktop and mobile layouts.

use crate::{
    canvas::{Canvas, Rect},
    card::{draw_card, Card, CardStyle},
    font::{FontRequest, FontResolver},
    gradient::Direction,
    output::{ensure_dir, save_png},
    theme::Theme,
    GenerateOptions,
};
use anyhow::Result;
use image::{DynamicImage, RgbImage};
use serde::Serialize;
use std::path::PathBuf;

/// Manifest `form_factor` of a screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    Wide,
    Narrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenshotSpec {
    pub width: u32,
    pub height: u32,
    pub file_name: &'static str,
    pub form_factor: FormFactor,
    pub label: &'static str,
}

pub const DESKTOP: ScreenshotSpec = ScreenshotSpec {
    width: 1280,
    height: 720,
    file_name: "screenshot-desktop.png",
    form_factor: FormFactor::Wide,
    label: "ElevateGS dashboard on desktop",
};

pub const MOBILE: ScreenshotSpec = ScreenshotSpec {
    width: 750,
    height: 1334,
    file_name: "screenshot-mobile.png",
    form_factor: FormFactor::Narrow,
    label: "ElevateGS dashboard on mobile",
};

pub const SCREENSHOTS: [ScreenshotSpec; 2] = [DESKTOP, MOBILE];

/// Draw every screenshot in [`SCREENSHOTS`] into `options.output`.
pub fn generate_screenshots(options: &GenerateOptions) -> Result<Vec<PathBuf>> {
    ensure_dir(&options.output)?;

    let mut written = Vec::new();
    for spec in &SCREENSHOTS {
        let screenshot = render_screenshot(spec, &options.theme, &options.fonts);
        let output_path = options.output.join(spec.file_name);
        save_png(&DynamicImage::ImageRgb8(screenshot), &output_path)?;
        println!(
            "✅ Generated: {} ({}x{})",
            output_path.display(),
            spec.width,
            spec.height
        );
        written.push(output_path);
    }

    Ok(written)
}

/// Paint one screenshot in memory, flattened to opaque RGB.
pub fn render_screenshot(spec: &ScreenshotSpec, theme: &Theme, fonts: &FontResolver) -> RgbImage {
    let mut canvas = Canvas::filled(spec.width, spec.height, theme.background);

    match spec.form_factor {
        FormFactor::Wide => draw_desktop(&mut canvas, theme, fonts),
        FormFactor::Narrow => draw_mobile(&mut canvas, theme, fonts),
    }

    DynamicImage::ImageRgba8(canvas.into_image()).to_rgb8()
}

fn draw_desktop(canvas: &mut Canvas, theme: &Theme, fonts: &FontResolver) {
    let width = canvas.width() as i32;
    let height = canvas.height() as i32;

    let logo = FontRequest::bold(32.0);
    let nav = FontRequest::regular(16.0);
    let title = FontRequest::bold(28.0);
    let text = FontRequest::regular(16.0);

    // Header
    canvas.fill_linear_gradient(
        Rect::new(0, 0, canvas.width(), 80),
        theme.primary,
        theme.primary_light,
        Direction::Horizontal,
    );
    canvas.draw_label(fonts, logo, (40, 24), &theme.product_name, theme.foreground);
    canvas.draw_label(
        fonts,
        nav,
        (width - 300, 32),
        "Dashboard | Courses | Profile",
        theme.foreground,
    );

    // Welcome
    let content_y = 100;
    canvas.draw_label(fonts, title, (40, content_y), "Welcome back, Teacher!", theme.primary);
    canvas.draw_label(
        fonts,
        text,
        (40, content_y + 40),
        "Your dashboard overview for today",
        theme.muted_text,
    );

    // Stats, side by side
    let card_y = content_y + 90;
    let (card_width, card_height, gap) = (280, 120, 20);
    let cards = [
        ("12 Active Courses", "All courses running", theme.info),
        ("245 Students", "Enrolled this semester", theme.success),
        ("18 Pending", "Tasks to review", theme.accent),
        ("94% Complete", "Average completion", theme.success),
    ];
    for (i, (heading, detail, accent)) in cards.into_iter().enumerate() {
        let x = 40 + (card_width + gap) * i as i32;
        let card = Card::new(
            Rect::new(x, card_y, card_width as u32, card_height as u32),
            heading,
            detail,
            accent,
        );
        draw_card(canvas, &card, &CardStyle::DESKTOP, theme, fonts);
    }

    // Recent activity
    let activity_y = card_y + card_height + 40;
    canvas.draw_label(fonts, title, (40, activity_y), "Recent Activity", theme.primary);

    let items_y = activity_y + 50;
    canvas.fill_rounded_rect(
        Rect::from_corners(40, items_y, width - 40, items_y + 180),
        8,
        theme.panel,
    );
    let items = [
        (20, "• New submission in Web Development"),
        (55, "• Grade completed for Database Management"),
        (90, "• 3 new messages from students"),
        (125, "• Assignment deadline tomorrow"),
    ];
    for (offset, line) in items {
        canvas.draw_label(fonts, text, (60, items_y + offset), line, theme.muted_text);
    }

    // Badge
    canvas.fill_rounded_rect(
        Rect::from_corners(width - 200, height - 60, width - 20, height - 20),
        20,
        theme.primary,
    );
    canvas.draw_label(
        fonts,
        text,
        (width - 170, height - 48),
        "PWA Enabled ✓",
        theme.foreground,
    );
}

fn draw_mobile(canvas: &mut Canvas, theme: &Theme, fonts: &FontResolver) {
    let width = canvas.width() as i32;
    let height = canvas.height() as i32;

    let logo = FontRequest::bold(36.0);
    let text = FontRequest::regular(18.0);
    let title = FontRequest::bold(24.0);
    let small = FontRequest::regular(16.0);

    // Header
    canvas.fill_linear_gradient(
        Rect::new(0, 0, canvas.width(), 120),
        theme.primary,
        theme.primary_light,
        Direction::Horizontal,
    );
    canvas.draw_label(fonts, logo, (30, 40), &theme.product_name, theme.foreground);
    canvas.draw_label(
        fonts,
        small,
        (30, 85),
        "Learning Management System",
        theme.foreground,
    );

    let content_y = 150;
    canvas.draw_label(fonts, title, (30, content_y), "Dashboard", theme.primary);

    // Stats, stacked
    let (card_width, card_height, gap) = (width - 60, 100, 20);
    let cards = [
        ("Active Courses", "12 courses", theme.info),
        ("Total Students", "245 enrolled", theme.success),
        ("Pending Tasks", "18 to review", theme.accent),
        ("Completion Rate", "94% average", theme.success),
    ];
    let mut card_y = content_y + 60;
    for (i, (heading, detail, accent)) in cards.into_iter().enumerate() {
        if i > 0 {
            card_y += card_height + gap;
        }
        let card = Card::new(
            Rect::new(30, card_y, card_width as u32, card_height as u32),
            heading,
            detail,
            accent,
        );
        draw_card(canvas, &card, &CardStyle::MOBILE, theme, fonts);
    }

    // Recent activity
    let activity_y = card_y + card_height + 40;
    canvas.draw_label(fonts, title, (30, activity_y), "Recent Activity", theme.primary);

    let items_y = activity_y + 50;
    canvas.fill_rounded_rect(
        Rect::from_corners(30, items_y, width - 30, items_y + 250),
        8,
        theme.panel,
    );
    let items = [
        (20, "• New submission"),
        (50, "  Web Development"),
        (90, "• Grade completed"),
        (120, "  Database Management"),
        (160, "• 3 new messages"),
        (200, "• Deadline tomorrow"),
    ];
    for (offset, line) in items {
        canvas.draw_label(fonts, small, (50, items_y + offset), line, theme.muted_text);
    }

    // Badge
    let badge_y = height - 100;
    canvas.fill_rounded_rect(
        Rect::from_corners(width / 2 - 100, badge_y, width / 2 + 100, badge_y + 50),
        25,
        theme.primary,
    );
    canvas.draw_label(
        fonts,
        text,
        (width / 2 - 75, badge_y + 15),
        "Works Offline ✓",
        theme.foreground,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn rgb(color: image::Rgba<u8>) -> Rgb<u8> {
        Rgb([color[0], color[1], color[2]])
    }

    #[test]
    fn desktop_layout_landmarks() {
        let theme = Theme::default();
        let shot = render_screenshot(&DESKTOP, &theme, &FontResolver::builtin_only());

        assert_eq!(shot.dimensions(), (1280, 720));
        assert_eq!(*shot.get_pixel(0, 40), rgb(theme.primary), "header starts at primary");
        assert_eq!(*shot.get_pixel(640, 85), rgb(theme.background), "below the header");
        assert_eq!(*shot.get_pixel(41, 250), rgb(theme.info), "first card strip");
        assert_eq!(*shot.get_pixel(941, 250), rgb(theme.success), "fourth card strip");
        assert_eq!(*shot.get_pixel(1100, 690), rgb(theme.primary), "badge");
        assert_eq!(*shot.get_pixel(640, 570), rgb(theme.panel), "activity panel");
    }

    #[test]
    fn mobile_layout_landmarks() {
        let theme = Theme::default();
        let shot = render_screenshot(&MOBILE, &theme, &FontResolver::builtin_only());

        assert_eq!(shot.dimensions(), (750, 1334));
        assert_eq!(*shot.get_pixel(0, 60), rgb(theme.primary));
        for (y, accent) in [(260, theme.info), (380, theme.success), (500, theme.accent), (620, theme.success)] {
            assert_eq!(*shot.get_pixel(31, y), rgb(accent), "card strip at y={y}");
        }
        assert_eq!(*shot.get_pixel(375, 1262), rgb(theme.primary), "badge");
        assert_eq!(*shot.get_pixel(700, 1000), rgb(theme.panel), "activity panel");
    }
}
