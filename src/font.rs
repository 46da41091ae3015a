//! Font lookup with a guaranteed fallback.
//!
//! Font availability differs between machines, so every text request walks
//! an ordered list of candidate files and takes the first one that loads.
//! When none do, the embedded bitmap font is used instead. Nothing is cached:
//! each call resolves again.

use crate::builtin_font;
use anyhow::{bail, Context, Result};
use rusttype::{point, Font, GlyphId, Scale};
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Bold candidates, most preferred first.
pub const BOLD_CANDIDATES: &[&str] = &[
    "arialbd.ttf",
    "Arial Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
];

/// Regular-weight candidates, most preferred first.
pub const REGULAR_CANDIDATES: &[&str] = &[
    "arial.ttf",
    "Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

/// Where bare candidate names are looked up, after the working directory.
pub const SYSTEM_FONT_DIRS: &[&str] = &[
    "C:\\Windows\\Fonts",
    "/Library/Fonts",
    "/System/Library/Fonts/Supplemental",
    "/usr/share/fonts/truetype/msttcorefonts",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// A style plus a pixel size, as the layouts ask for text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontRequest {
    pub style: FontStyle,
    pub px: f32,
}

impl FontRequest {
    pub const fn regular(px: f32) -> Self {
        Self {
            style: FontStyle::Regular,
            px,
        }
    }

    pub const fn bold(px: f32) -> Self {
        Self {
            style: FontStyle::Bold,
            px,
        }
    }
}

/// Ink extent of a piece of text, relative to its layout origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    fn union(self, other: TextBounds) -> TextBounds {
        TextBounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// The font a text request resolved to.
pub enum LoadedFont {
    /// A TrueType/OpenType file rasterized at the requested size.
    Outline {
        font: Font<'static>,
        scale: Scale,
        source: PathBuf,
    },
    /// The embedded 5x7 bitmap font. Ignores the requested size.
    Builtin,
}

impl fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadedFont::Outline { scale, source, .. } => f
                .debug_struct("Outline")
                .field("source", source)
                .field("px", &scale.y)
                .finish(),
            LoadedFont::Builtin => f.write_str("Builtin"),
        }
    }
}

impl LoadedFont {
    pub fn is_builtin(&self) -> bool {
        matches!(self, LoadedFont::Builtin)
    }

    /// File the font was loaded from; `None` for the built-in font.
    pub fn source(&self) -> Option<&Path> {
        match self {
            LoadedFont::Outline { source, .. } => Some(source),
            LoadedFont::Builtin => None,
        }
    }

    /// Bounding box of the ink `text` would put down at origin `(0, 0)`.
    pub fn measure(&self, text: &str) -> TextBounds {
        let mut bounds: Option<TextBounds> = None;
        self.rasterize_boxes(text, |glyph| {
            bounds = Some(match bounds {
                Some(bounds) => bounds.union(glyph),
                None => glyph,
            });
        });
        bounds.unwrap_or_default()
    }

    /// Fail if any non-whitespace character of `text` has no glyph.
    pub fn ensure_glyphs(&self, text: &str) -> Result<()> {
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            let missing = match self {
                LoadedFont::Outline { font, .. } => font.glyph(c).id() == GlyphId(0),
                LoadedFont::Builtin => builtin_font::glyph(c).is_none(),
            };
            if missing {
                bail!("{:?} has no glyph for {:?}", self, c);
            }
        }
        Ok(())
    }

    /// Call `plot(x, y, coverage)` for every pixel `text` covers, relative
    /// to the layout origin (left edge, top of the line).
    ///
    /// Characters the font lacks come out as its replacement glyph.
    pub fn rasterize(&self, text: &str, mut plot: impl FnMut(i32, i32, f32)) {
        match self {
            LoadedFont::Outline { font, scale, .. } => {
                let ascent = font.v_metrics(*scale).ascent;
                for glyph in font.layout(text, *scale, point(0.0, ascent)) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        glyph.draw(|gx, gy, coverage| {
                            plot(bb.min.x + gx as i32, bb.min.y + gy as i32, coverage)
                        });
                    }
                }
            }
            LoadedFont::Builtin => {
                for (index, c) in text.chars().enumerate() {
                    let columns = builtin_font::glyph(c).unwrap_or(builtin_font::REPLACEMENT);
                    let left = index as i32 * builtin_font::ADVANCE;
                    for (col, row) in builtin_font::pixels(columns) {
                        plot(left + col, row, 1.0);
                    }
                }
            }
        }
    }

    fn rasterize_boxes(&self, text: &str, mut each: impl FnMut(TextBounds)) {
        match self {
            LoadedFont::Outline { font, scale, .. } => {
                let ascent = font.v_metrics(*scale).ascent;
                for glyph in font.layout(text, *scale, point(0.0, ascent)) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        each(TextBounds {
                            min_x: bb.min.x,
                            min_y: bb.min.y,
                            max_x: bb.max.x,
                            max_y: bb.max.y,
                        });
                    }
                }
            }
            LoadedFont::Builtin => {
                let count = text.chars().count() as i32;
                if count > 0 {
                    each(TextBounds {
                        min_x: 0,
                        min_y: 0,
                        max_x: count * builtin_font::ADVANCE - 1,
                        max_y: builtin_font::GLYPH_HEIGHT,
                    });
                }
            }
        }
    }
}

/// Ordered font candidates per style, plus where to look for bare names.
#[derive(Debug, Clone, Default)]
pub struct FontResolver {
    overrides: Vec<PathBuf>,
    search_dirs: Vec<PathBuf>,
    regular: Vec<PathBuf>,
    bold: Vec<PathBuf>,
}

impl FontResolver {
    /// The stock candidate lists searched in the usual system locations.
    pub fn system() -> Self {
        Self {
            overrides: Vec::new(),
            search_dirs: SYSTEM_FONT_DIRS.iter().map(PathBuf::from).collect(),
            regular: REGULAR_CANDIDATES.iter().map(PathBuf::from).collect(),
            bold: BOLD_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }

    /// A resolver with no candidates at all; every request gets the built-in font.
    pub fn builtin_only() -> Self {
        Self::default()
    }

    pub fn new(regular: Vec<PathBuf>, bold: Vec<PathBuf>) -> Self {
        Self {
            regular,
            bold,
            ..Self::default()
        }
    }

    /// Try `path` first, for every style.
    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.overrides.push(path.into());
        self
    }

    /// Also look for bare candidate names in `dir`, ahead of the system directories.
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.insert(0, dir.into());
        self
    }

    /// Every path `resolve` would try for `style`, in order.
    pub fn candidates(&self, style: FontStyle) -> Vec<PathBuf> {
        let named = match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
        };

        let mut paths = self.overrides.clone();
        for name in named {
            paths.push(name.clone());
            if is_bare_name(name) {
                paths.extend(self.search_dirs.iter().map(|dir| dir.join(name)));
            }
        }
        paths
    }

    /// First candidate that reads and parses, or the built-in font.
    pub fn resolve(&self, style: FontStyle, px: f32) -> LoadedFont {
        for path in self.candidates(style) {
            match load_outline(&path) {
                Ok(font) => {
                    log::trace!("{style:?} {px}px text uses {}", path.display());
                    return LoadedFont::Outline {
                        font,
                        scale: Scale::uniform(px),
                        source: path,
                    };
                }
                Err(err) => log::trace!("skipping font candidate: {err:#}"),
            }
        }

        log::debug!("no {style:?} font candidate loaded, using the built-in bitmap font");
        LoadedFont::Builtin
    }
}

fn is_bare_name(path: &Path) -> bool {
    path.components().count() == 1 && !path.is_absolute()
}

fn load_outline(path: &Path) -> Result<Font<'static>> {
    let data = std::fs::read(path).with_context(|| format!("Can't read {}", path.display()))?;
    Font::try_from_vec(data).with_context(|| format!("{} is not a usable font", path.display()))
}
