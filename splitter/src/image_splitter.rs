use image::{DynamicImage, GenericImageView};
use thiserror::Error;

use crate::geometry::{Axis, CropBox, ImageExtent};
use crate::overlap::OverlapFraction;
use crate::part_count::PartCount;
use crate::split_plan::SplitPlanBuilder;

#[derive(Debug, Error)]
pub enum ImageSplittingError {
    #[error("The split plan could not be created")]
    SplitPlanError(#[from] super::split_plan::SplitPlanError),
    #[error("Crop box {0} does not fit into a {1}x{2} image")]
    InvalidCropBox(CropBox, u32, u32),
}

/// A single crop of the input image together with its position
pub struct ImagePart {
    pub index: usize,
    pub crop_box: CropBox,
    pub image: DynamicImage,
}

#[derive(Debug, Clone, Default)]
pub struct ImageSplitter {
    overlap: OverlapFraction,
    part_count: Option<PartCount>,
    axis: Option<Axis>,
}

impl ImageSplitter {
    pub fn new(overlap: OverlapFraction) -> Self {
        Self {
            overlap,
            part_count: None,
            axis: None,
        }
    }

    pub fn with_part_count(mut self, part_count: PartCount) -> Self {
        self.part_count = Some(part_count);
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Cuts `image` into overlapping parts, ordered left to right for wide images
    /// and top to bottom for tall ones.
    pub fn split(&self, image: &DynamicImage) -> Result<Vec<ImagePart>, ImageSplittingError> {
        let (width, height) = image.dimensions();
        let extent = ImageExtent::new(height, width);

        let mut builder = SplitPlanBuilder::new(extent).with_overlap(self.overlap);
        if let Some(part_count) = self.part_count {
            builder.set_part_count(part_count);
        }
        if let Some(axis) = self.axis {
            builder.set_axis(axis);
        }
        let plan = builder.finalize()?;

        plan.iter()
            .map(|(index, crop_box)| {
                if !crop_box.contains_in(&extent) {
                    return Err(ImageSplittingError::InvalidCropBox(*crop_box, width, height));
                }
                log::debug!("Cropping part {} at {}", index, crop_box);
                Ok(ImagePart {
                    index,
                    crop_box: *crop_box,
                    image: image.crop_imm(
                        crop_box.x0,
                        crop_box.y0,
                        crop_box.width(),
                        crop_box.height(),
                    ),
                })
            })
            .collect()
    }
}
