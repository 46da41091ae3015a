use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use pwa_assets::{
    icons::{self, ICONS},
    manifest::ManifestFragment,
    screenshots::{self, SCREENSHOTS},
    theme::parse_css_color,
    FontResolver, FontStyle, GenerateOptions, Theme, DEFAULT_OUTPUT_DIR,
};
use std::{path::PathBuf, process::ExitCode};

#[derive(Debug, Parser)]
#[clap(
    name = "pwa-assets",
    about = "Generate the PWA icons and store screenshots for ElevateGS"
)]
struct Args {
    #[clap(subcommand)]
    command: Option<Command>,

    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Font file to try before the stock candidates. Can be repeated.
    #[clap(long = "font", value_name = "FILE")]
    fonts: Vec<PathBuf>,

    /// Extra directory to search for the stock font names. Can be repeated.
    #[clap(long, value_name = "DIR")]
    font_dir: Vec<PathBuf>,

    /// Primary brand color (CSS color format)
    #[clap(long, value_name = "COLOR")]
    primary: Option<String>,

    /// Accent color for the icon underline (CSS color format)
    #[clap(long, value_name = "COLOR")]
    accent: Option<String>,

    /// Also write pwa-assets.json describing the generated files
    #[clap(long)]
    manifest: bool,

    /// Exit with status 1 when generation fails
    #[clap(long)]
    strict: bool,

    /// Log font resolution details
    #[clap(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand)]
enum Command {
    /// Generate the four manifest icons
    Icons,
    /// Generate the desktop and mobile screenshots
    Screenshots,
    /// Generate icons and screenshots
    #[default]
    All,
}

fn main() -> ExitCode {
    let args = Args::parse();
    pwa_assets::init_logging(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    let strict = args.strict;
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("\n❌ Error: {err:#}");
            eprintln!("💡 Check that the output directory is writable and try again");
            if strict {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

fn run(args: Args) -> Result<()> {
    let command = args.command.unwrap_or_default();
    let options = build_options(&args);

    match options.fonts.resolve(FontStyle::Bold, 12.0).source() {
        Some(source) => log::info!("Using font {}", source.display()),
        None => log::warn!("No TrueType font found; text will use the built-in bitmap font"),
    }

    let mut fragment = ManifestFragment::new();

    if matches!(command, Command::Icons | Command::All) {
        println!("🎨 Generating {} PWA Icons...\n", options.theme.product_name);
        icons::generate_icons(&options)?;
        ICONS.iter().for_each(|spec| fragment.add_icon(spec));
        println!();
    }

    if matches!(command, Command::Screenshots | Command::All) {
        println!("📸 Generating {} PWA Screenshots...\n", options.theme.product_name);
        screenshots::generate_screenshots(&options)?;
        SCREENSHOTS.iter().for_each(|spec| fragment.add_screenshot(spec));
        println!();
    }

    if args.manifest {
        fragment.write(&options.output)?;
    }

    println!("🎉 All assets generated successfully!");
    println!("📁 Location: {}/", options.output.display());
    Ok(())
}

fn build_options(args: &Args) -> GenerateOptions {
    let mut theme = Theme::default();
    if let Some(primary) = &args.primary {
        match parse_css_color(primary) {
            Some(color) => theme = theme.with_primary(color),
            None => log::warn!("Ignoring invalid --primary color {primary:?}"),
        }
    }
    if let Some(accent) = &args.accent {
        match parse_css_color(accent) {
            Some(color) => theme = theme.with_accent(color),
            None => log::warn!("Ignoring invalid --accent color {accent:?}"),
        }
    }

    let mut fonts = FontResolver::system();
    for dir in &args.font_dir {
        fonts = fonts.with_search_dir(dir);
    }
    for font in &args.fonts {
        fonts = fonts.with_font(font);
    }

    GenerateOptions {
        output: args.output.clone(),
        theme,
        fonts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_into_public() {
        let args = Args::try_parse_from(["pwa-assets"]).unwrap();
        assert_eq!(args.command.unwrap_or_default(), Command::All);
        assert_eq!(args.output, PathBuf::from("public"));
        assert!(!args.manifest);
        assert!(!args.strict);
    }

    #[test]
    fn repeated_font_flags_keep_order() {
        let args = Args::try_parse_from([
            "pwa-assets",
            "icons",
            "--font",
            "a.ttf",
            "--font",
            "b.ttf",
        ])
        .unwrap();
        assert_eq!(args.command, Some(Command::Icons));

        let options = build_options(&args);
        let candidates = options.fonts.candidates(FontStyle::Bold);
        assert_eq!(candidates[..2], [PathBuf::from("a.ttf"), PathBuf::from("b.ttf")]);
    }

    #[test]
    fn invalid_colors_keep_the_brand() {
        let args =
            Args::try_parse_from(["pwa-assets", "--primary", "nope", "--accent", "#22c55e"])
                .unwrap();
        let theme = build_options(&args).theme;

        assert_eq!(theme.primary, Theme::default().primary);
        assert_eq!(theme.accent, image::Rgba([34, 197, 94, 255]));
    }
}
