//! Stat cards for the screenshot mockups.

use crate::{
    canvas::{Canvas, Rect},
    font::{FontRequest, FontResolver},
    theme::Theme,
};
use image::Rgba;

/// Placement and typography shared by every card in one layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub radius: u32,
    pub accent_width: u32,
    pub title_offset: (i32, i32),
    pub title_font: FontRequest,
    pub subtitle_offset: (i32, i32),
    pub subtitle_font: FontRequest,
}

impl CardStyle {
    pub const DESKTOP: CardStyle = CardStyle {
        radius: 8,
        accent_width: 4,
        title_offset: (20, 15),
        title_font: FontRequest::bold(20.0),
        subtitle_offset: (20, 45),
        subtitle_font: FontRequest::regular(14.0),
    };

    pub const MOBILE: CardStyle = CardStyle {
        radius: 8,
        accent_width: 4,
        title_offset: (20, 25),
        title_font: FontRequest::regular(18.0),
        subtitle_offset: (20, 55),
        subtitle_font: FontRequest::regular(16.0),
    };
}

/// A stat card: rounded panel, colored strip on the left, two lines of text.
#[derive(Debug, Clone, Copy)]
pub struct Card<'a> {
    pub bounds: Rect,
    pub title: &'a str,
    pub subtitle: &'a str,
    pub accent: Rgba<u8>,
}

impl<'a> Card<'a> {
    pub fn new(bounds: Rect, title: &'a str, subtitle: &'a str, accent: Rgba<u8>) -> Self {
        Self {
            bounds,
            title,
            subtitle,
            accent,
        }
    }
}

pub fn draw_card(
    canvas: &mut Canvas,
    card: &Card<'_>,
    style: &CardStyle,
    theme: &Theme,
    fonts: &FontResolver,
) {
    let Rect { x, y, height, .. } = card.bounds;

    canvas.fill_rounded_rect(card.bounds, style.radius, theme.panel);
    canvas.fill_rect(Rect::new(x, y, style.accent_width, height), card.accent);

    let (dx, dy) = style.title_offset;
    canvas.draw_label(fonts, style.title_font, (x + dx, y + dy), card.title, theme.muted_text);

    let (dx, dy) = style.subtitle_offset;
    canvas.draw_label(
        fonts,
        style.subtitle_font,
        (x + dx, y + dy),
        card.subtitle,
        theme.muted_text,
    );
}
