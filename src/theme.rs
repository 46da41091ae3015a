//! Brand palette and strings shared by both generators.

use image::Rgba;
use std::str::FromStr;

pub const MAROON: Rgba<u8> = Rgba([127, 29, 29, 255]);
pub const MAROON_DARK: Rgba<u8> = Rgba([95, 22, 22, 255]);
pub const MAROON_LIGHT: Rgba<u8> = Rgba([153, 27, 27, 255]);
pub const GOLD: Rgba<u8> = Rgba([251, 191, 36, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const GRAY_100: Rgba<u8> = Rgba([243, 244, 246, 255]);
pub const GRAY_600: Rgba<u8> = Rgba([75, 85, 99, 255]);
pub const GREEN: Rgba<u8> = Rgba([34, 197, 94, 255]);
pub const BLUE: Rgba<u8> = Rgba([59, 130, 246, 255]);

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Colors and labels the generators draw with.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub primary: Rgba<u8>,
    pub primary_dark: Rgba<u8>,
    pub primary_light: Rgba<u8>,
    pub accent: Rgba<u8>,
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
    pub panel: Rgba<u8>,
    pub muted_text: Rgba<u8>,
    pub success: Rgba<u8>,
    pub info: Rgba<u8>,

    /// Short label centered on every icon
    pub initials: String,
    /// Smaller label under the accent bar on large icons
    pub wordmark: String,
    /// Product name in the screenshot headers
    pub product_name: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: MAROON,
            primary_dark: MAROON_DARK,
            primary_light: MAROON_LIGHT,
            accent: GOLD,
            foreground: WHITE,
            background: GRAY_100,
            panel: WHITE,
            muted_text: GRAY_600,
            success: GREEN,
            info: BLUE,
            initials: "EGS".to_string(),
            wordmark: "ELEVATE".to_string(),
            product_name: "ElevateGS".to_string(),
        }
    }
}

impl Theme {
    /// Replace the primary color, deriving the dark and light variants from it.
    pub fn with_primary(mut self, primary: Rgba<u8>) -> Self {
        self.primary = primary;
        self.primary_dark = scale(primary, 0.75);
        self.primary_light = scale(primary, 1.2);
        self
    }

    pub fn with_accent(mut self, accent: Rgba<u8>) -> Self {
        self.accent = accent;
        self
    }
}

/// Parse a CSS color (`#fbbf24`, `rgb(…)`, `gold`, …) into an opaque pixel.
pub fn parse_css_color(color: &str) -> Option<Rgba<u8>> {
    css_color::Srgb::from_str(color).ok().map(|color| {
        Rgba([
            (color.red * 255.).round() as u8,
            (color.green * 255.).round() as u8,
            (color.blue * 255.).round() as u8,
            255,
        ])
    })
}

fn scale(color: Rgba<u8>, factor: f32) -> Rgba<u8> {
    let [r, g, b, a] = color.0;
    let apply = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
    Rgba([apply(r), apply(g), apply(b), a])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_css_colors() {
        assert_eq!(parse_css_color("#fbbf24"), Some(GOLD));
        assert_eq!(parse_css_color("#fff"), Some(WHITE));
        assert_eq!(parse_css_color("not-a-color"), None);
    }

    #[test]
    fn primary_override_derives_variants() {
        let theme = Theme::default().with_primary(Rgba([100, 40, 200, 255]));
        assert_eq!(theme.primary_dark, Rgba([75, 30, 150, 255]));
        assert_eq!(theme.primary_light, Rgba([120, 48, 240, 255]));
    }
}
