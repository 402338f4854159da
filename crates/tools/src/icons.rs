//! PWA icon copies.
//!
//! One source PNG is copied verbatim under every file name the web app
//! manifest and HTML head refer to. No resizing happens here.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use image::ImageFormat;

/// File names written into the output directory.
pub const PWA_ICON_NAMES: [&str; 5] = [
    "icon-192x192.png",
    "icon-512x512.png",
    "apple-touch-icon.png",
    "favicon-32x32.png",
    "favicon-16x16.png",
];

/// Default source image, relative to the web project root.
pub const DEFAULT_SOURCE: &str = "public/icon.png";

/// Default output directory, relative to the web project root.
pub const DEFAULT_OUT_DIR: &str = "public/icons";

/// Copy `source` to every name in [`PWA_ICON_NAMES`] under `out_dir`.
///
/// The source must decode as a PNG. Existing files are overwritten, so
/// repeated runs leave identical output.
pub fn copy_pwa_icons(source: &Path, out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let bytes = std::fs::read(source)
        .with_context(|| format!("Failed to read source icon {}", source.display()))?;

    if image::guess_format(&bytes).ok() != Some(ImageFormat::Png) {
        bail!("{} is not a PNG file", source.display());
    }
    let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
        .with_context(|| format!("{} does not decode as PNG", source.display()))?;
    tracing::info!(
        source = %source.display(),
        width = decoded.width(),
        height = decoded.height(),
        "Source icon loaded"
    );

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(PWA_ICON_NAMES.len());
    for name in PWA_ICON_NAMES {
        let dest = out_dir.join(name);
        std::fs::write(&dest, &bytes)
            .with_context(|| format!("Failed to write {}", dest.display()))?;
        tracing::info!(path = %dest.display(), bytes = bytes.len(), "Icon written");
        written.push(dest);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_png(path: &Path) {
        RgbaImage::from_pixel(8, 8, Rgba([200, 30, 80, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn writes_every_icon_name() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("icon.png");
        write_png(&source);
        let out = tmp.path().join("icons");

        let written = copy_pwa_icons(&source, &out).unwrap();

        assert_eq!(written.len(), PWA_ICON_NAMES.len());
        let original = std::fs::read(&source).unwrap();
        for name in PWA_ICON_NAMES {
            assert_eq!(std::fs::read(out.join(name)).unwrap(), original);
        }
    }

    #[test]
    fn second_run_is_byte_identical() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("icon.png");
        write_png(&source);
        let out = tmp.path().join("icons");

        copy_pwa_icons(&source, &out).unwrap();
        let first: Vec<Vec<u8>> = PWA_ICON_NAMES
            .iter()
            .map(|n| std::fs::read(out.join(n)).unwrap())
            .collect();

        copy_pwa_icons(&source, &out).unwrap();
        let second: Vec<Vec<u8>> = PWA_ICON_NAMES
            .iter()
            .map(|n| std::fs::read(out.join(n)).unwrap())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn rejects_non_png_source() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("icon.png");
        std::fs::write(&source, b"definitely not an image").unwrap();

        let err = copy_pwa_icons(&source, &tmp.path().join("icons")).unwrap_err();

        assert!(err.to_string().contains("not a PNG"));
        assert!(!tmp.path().join("icons").exists());
    }

    #[test]
    fn missing_source_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let result = copy_pwa_icons(&tmp.path().join("missing.png"), tmp.path());
        assert!(result.is_err());
    }
}
