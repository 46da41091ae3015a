//! Procedural PNG assets for the ElevateGS installable web app.
//!
//! Two generators live here: [`icons`] draws the manifest icons and
//! [`screenshots`] draws the store screenshots. Both paint onto a [`Canvas`]
//! and hand the result to [`output::save_png`].

pub mod canvas;
pub mod card;
pub mod font;
pub mod gradient;
pub mod icons;
pub mod manifest;
pub mod output;
pub mod screenshots;
pub mod theme;

mod builtin_font;

pub use canvas::{Canvas, Rect};
pub use font::{FontResolver, FontStyle, LoadedFont};
pub use gradient::Direction;
pub use theme::Theme;

use std::path::PathBuf;

/// Directory the generators write to when nothing else is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Everything a generator needs besides its fixed layout.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output: PathBuf,
    pub theme: Theme,
    pub fonts: FontResolver,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            theme: Theme::default(),
            fonts: FontResolver::system(),
        }
    }
}

/// Print `log` records at `level` and above to the console.
pub fn init_logging(level: log::LevelFilter) {
    let logger = simple_logger::SimpleLogger::new()
        .with_level(level)
        .without_timestamps();
    if let Err(err) = logger.init() {
        eprintln!("Logging unavailable: {err}");
    }
}
