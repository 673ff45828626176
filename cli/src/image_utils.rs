use std::path::{Path, PathBuf};

use anyhow::Context;
use image::DynamicImage;
use splitter::image_splitter::ImageSplitter;
use splitter::{CropBox, OverlapFraction, PartCount};

pub const DEFAULT_EXTENSION: &str = "jpg";

pub fn load_image<T: AsRef<Path>>(p: T) -> anyhow::Result<DynamicImage> {
    image::open(&p).with_context(|| format!("Cannot read image: {}", p.as_ref().display()))
}

pub fn save_image(image: &DynamicImage, path: impl AsRef<Path>) -> anyhow::Result<()> {
    match image.save(&path) {
        Err(image::ImageError::Unsupported(_)) => {
            // The encoder cannot store this pixel layout (alpha or 16 bit data in a JPEG for
            // example), so we fall back to 8 bit RGB.
            log::debug!(
                "Converting {} to 8 bit RGB",
                path.as_ref().to_string_lossy()
            );
            DynamicImage::ImageRgb8(image.to_rgb8())
                .save(&path)
                .with_context(|| format!("Could not write image {}", path.as_ref().display()))
        }
        result => result
            .with_context(|| format!("Could not write image {}", path.as_ref().display())),
    }
}

/// File name of the part at `index`, e.g. `part_00.jpg`
pub fn part_file_name(index: usize, extension: &str) -> String {
    format!("part_{:02}.{}", index, extension)
}

#[derive(Debug, Clone)]
pub struct SplitOptions {
    pub overlap: OverlapFraction,
    pub part_count: Option<PartCount>,
    pub extension: String,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            overlap: OverlapFraction::default(),
            part_count: None,
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SavedPart {
    pub index: usize,
    pub crop_box: CropBox,
    pub path: PathBuf,
}

/// Splits the image at `input` and writes the parts to `out_dir` in reading order.
pub fn save_parts<T: AsRef<Path>, U: AsRef<Path>>(
    input: T,
    out_dir: U,
    options: &SplitOptions,
) -> anyhow::Result<Vec<SavedPart>> {
    let out_dir = out_dir.as_ref();
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Cannot create output directory {}", out_dir.display()))?;

    let image = load_image(&input)?;

    let mut splitter = ImageSplitter::new(options.overlap);
    if let Some(part_count) = options.part_count {
        splitter = splitter.with_part_count(part_count);
    }
    let parts = splitter
        .split(&image)
        .with_context(|| format!("Cannot split {}", input.as_ref().display()))?;

    let mut saved = Vec::with_capacity(parts.len());
    for part in parts {
        let path = out_dir.join(part_file_name(part.index, &options.extension));
        save_image(&part.image, &path)?;
        log::info!(
            "Saved part {} ({}) to {}",
            part.index,
            part.crop_box,
            path.to_string_lossy()
        );
        saved.push(SavedPart {
            index: part.index,
            crop_box: part.crop_box,
            path,
        });
    }
    Ok(saved)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_part_file_name() {
        assert_eq!(part_file_name(0, "jpg"), "part_00.jpg");
        assert_eq!(part_file_name(4, "png"), "part_04.png");
        assert_eq!(part_file_name(12, "tif"), "part_12.tif");
    }

    #[test]
    fn test_missing_input() {
        let err = load_image("/nonexistent/input.jpg").unwrap_err();
        assert!(err.to_string().contains("Cannot read image"));
    }
}
