use anyhow::{ensure, Context, Result};
use image::ColorType;
use pwa_assets::{icons::ICONS, screenshots::SCREENSHOTS, DEFAULT_OUTPUT_DIR};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    println!("Checking PWA assets in: {}", dir.display());

    for spec in &ICONS {
        let path = dir.join(spec.file_name);
        let img = open(&path, spec.size, spec.size, ColorType::Rgba8)?;
        let rgba_img = img.to_rgba8();

        let last = spec.size - 1;
        let corners = [(0, 0), (last, 0), (0, last), (last, last)];
        let corner_alpha: Vec<u8> = corners
            .iter()
            .map(|&(x, y)| rgba_img.get_pixel(x, y)[3])
            .collect();
        println!("  Corner alpha: {:?}", corner_alpha);

        if spec.maskable {
            ensure!(
                corner_alpha.iter().all(|&a| a == 255),
                "{} is maskable and must be full-bleed",
                path.display()
            );
        } else {
            ensure!(
                corner_alpha.iter().all(|&a| a == 0),
                "{} should have transparent rounded corners",
                path.display()
            );
        }
    }

    for spec in &SCREENSHOTS {
        let path = dir.join(spec.file_name);
        open(&path, spec.width, spec.height, ColorType::Rgb8)?;
    }

    println!("\n✓ All assets look right");
    Ok(())
}

fn open(path: &Path, width: u32, height: u32, color: ColorType) -> Result<image::DynamicImage> {
    let img = image::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    println!("\n{}", path.display());
    println!("  Dimensions: {}x{}", img.width(), img.height());
    println!("  Color type: {:?}", img.color());

    ensure!(
        (img.width(), img.height()) == (width, height),
        "{} should be {}x{}",
        path.display(),
        width,
        height
    );
    ensure!(
        img.color() == color,
        "{} should be {:?}, found {:?}",
        path.display(),
        color,
        img.color()
    );
    Ok(img)
}
