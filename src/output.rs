use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    DynamicImage, ImageEncoder,
};
use std::{
    fs::create_dir_all,
    io::{BufWriter, Write},
    path::Path,
};
use tempfile::NamedTempFile;

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    create_dir_all(dir)
        .with_context(|| format!("Can't create output directory {}", dir.display()))
}

/// Encode `image` as PNG and atomically replace `path` with it.
///
/// The color type of `image` is kept, so RGBA stays RGBA and RGB stays RGB.
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    write_atomic(path, |w| write_png(image, w))
        .with_context(|| format!("Failed to write PNG {}", path.display()))
}

// Encode image data as PNG with compression
pub fn write_png<W: Write>(image: &DynamicImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_bytes(), image.width(), image.height(), image.color())?;
    Ok(())
}

/// Write into a temporary file next to `path`, then rename it over `path`.
///
/// A crash part-way through leaves the previous file untouched.
pub fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Can't create a temporary file in {}", dir.display()))?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }

    // Temporary files are created owner-only; generated assets are served publicly.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    temp.persist(path)
        .with_context(|| format!("Can't move the temporary file onto {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn keeps_color_type() {
        let dir = TempDir::new().unwrap();

        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 4])));
        let rgb = DynamicImage::ImageRgb8(RgbImage::from_pixel(5, 4, Rgb([9, 8, 7])));
        save_png(&rgba, &dir.path().join("a.png")).unwrap();
        save_png(&rgb, &dir.path().join("b.png")).unwrap();

        let a = image::open(dir.path().join("a.png")).unwrap();
        let b = image::open(dir.path().join("b.png")).unwrap();
        assert_eq!(a.color(), ColorType::Rgba8);
        assert_eq!((a.width(), a.height()), (3, 2));
        assert_eq!(b.color(), ColorType::Rgb8);
        assert_eq!((b.width(), b.height()), (5, 4));
    }

    #[test]
    fn overwrites_and_leaves_no_temporaries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        write_atomic(&path, |w| Ok(w.write_all(b"first")?)).unwrap();
        write_atomic(&path, |w| Ok(w.write_all(b"second")?)).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn failed_write_keeps_previous_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        write_atomic(&path, |w| Ok(w.write_all(b"good")?)).unwrap();
        let result = write_atomic(&path, |_| anyhow::bail!("encoder exploded"));

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "good");
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("public").join("img");

        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
