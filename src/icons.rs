//! Android launcher icon generation
//!
//! Resizes a source icon into the mipmap densities the Android packaging
//! layout expects (`Resources/mipmap-*/ic_launcher.png`).

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;

/// Android density buckets and their launcher icon edge sizes in pixels
pub const ICON_SIZES: [(&str, u32); 5] = [
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

/// Output filename inside each density directory
pub const ICON_NAME: &str = "ic_launcher.png";

/// Errors from icon generation
#[derive(Debug)]
pub enum IconError {
    /// Source image does not exist
    MissingInput(PathBuf),
    /// Decode, resize or encode failure
    Image(String),
    /// Filesystem failure creating directories
    Io(String),
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::MissingInput(path) => {
                write!(f, "source icon not found: {}", path.display())
            }
            IconError::Image(msg) => write!(f, "image error: {}", msg),
            IconError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for IconError {}

impl From<std::io::Error> for IconError {
    fn from(e: std::io::Error) -> Self {
        IconError::Io(e.to_string())
    }
}

impl From<image::ImageError> for IconError {
    fn from(e: image::ImageError) -> Self {
        IconError::Image(e.to_string())
    }
}

/// Source dimensions plus the generated density files, for reporting
#[derive(Debug)]
pub struct Report {
    pub source_width: u32,
    pub source_height: u32,
    pub generated: Vec<(&'static str, u32)>,
}

/// Resize the icon at `input` into every Android density under
/// `output_dir`, creating the `mipmap-*` directories as needed and
/// overwriting existing icons. Alpha is preserved (everything is converted
/// to RGBA8 before resampling).
pub fn generate_mipmaps(input: &Path, output_dir: &Path) -> Result<Report, IconError> {
    if !input.exists() {
        return Err(IconError::MissingInput(input.to_path_buf()));
    }

    let original = image::open(input)?.to_rgba8();
    let (source_width, source_height) = original.dimensions();

    let mut generated = Vec::with_capacity(ICON_SIZES.len());
    for (density, size) in ICON_SIZES {
        let dir = output_dir.join(density);
        fs::create_dir_all(&dir)?;

        let resized = image::imageops::resize(&original, size, size, FilterType::Lanczos3);
        resized.save(dir.join(ICON_NAME))?;
        generated.push((density, size));
    }

    Ok(Report {
        source_width,
        source_height,
        generated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_source_icon(dir: &Path) -> PathBuf {
        let path = dir.join("icon.png");
        let img = image::RgbaImage::from_pixel(64, 64, image::Rgba([200, 40, 40, 255]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_generates_all_densities() {
        let dir = TempDir::new().unwrap();
        let input = write_source_icon(dir.path());
        let out = dir.path().join("Resources");

        let report = generate_mipmaps(&input, &out).unwrap();

        assert_eq!(report.source_width, 64);
        assert_eq!(report.source_height, 64);
        assert_eq!(report.generated.len(), ICON_SIZES.len());

        for (density, size) in ICON_SIZES {
            let icon_path = out.join(density).join(ICON_NAME);
            let icon = image::open(&icon_path).unwrap().to_rgba8();
            assert_eq!(icon.dimensions(), (size, size), "{}", density);
        }
    }

    #[test]
    fn test_missing_input_fails_without_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("nope.png");
        let out = dir.path().join("Resources");

        let err = generate_mipmaps(&input, &out).unwrap_err();
        assert!(matches!(err, IconError::MissingInput(_)));
        assert!(!out.exists());
    }

    #[test]
    fn test_overwrites_existing_icons() {
        let dir = TempDir::new().unwrap();
        let input = write_source_icon(dir.path());
        let out = dir.path().join("Resources");

        let stale = out.join("mipmap-mdpi");
        fs::create_dir_all(&stale).unwrap();
        fs::write(stale.join(ICON_NAME), b"not a png").unwrap();

        generate_mipmaps(&input, &out).unwrap();

        let icon = image::open(stale.join(ICON_NAME)).unwrap().to_rgba8();
        assert_eq!(icon.dimensions(), (48, 48));
    }
}
