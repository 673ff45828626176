use std::marker::PhantomData;

use thiserror::Error;

use crate::geometry::{Axis, CropBox, ImageExtent};
use crate::overlap::OverlapFraction;
use crate::part_count::{select_part_count, PartCount};
use crate::partition::partition;

pub struct Finalized;

pub struct SplitPlan<M> {
    extent: ImageExtent,
    overlap: OverlapFraction,
    part_count: Option<PartCount>,
    axis: Option<Axis>,
    boxes: Vec<CropBox>,
    _marker: PhantomData<M>,
}

pub type SplitPlanBuilder = SplitPlan<()>;
pub type FinalizedSplitPlan = SplitPlan<Finalized>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SplitPlanError {
    #[error("Image of {0}x{1} pixels has no area to split")]
    EmptyImage(u32, u32),
}

pub struct SplitPlanIterator<'a> {
    boxes: std::iter::Enumerate<std::slice::Iter<'a, CropBox>>,
}

impl<'a> Iterator for SplitPlanIterator<'a> {
    type Item = (usize, &'a CropBox);

    fn next(&mut self) -> Option<Self::Item> {
        self.boxes.next()
    }
}

impl SplitPlanBuilder {
    pub fn new(extent: ImageExtent) -> Self {
        Self {
            extent,
            overlap: OverlapFraction::default(),
            part_count: None, // Derived from the longer image side unless set explicitly
            axis: None,
            boxes: Vec::new(),
            _marker: PhantomData,
        }
    }

    pub fn set_overlap(&mut self, overlap: OverlapFraction) {
        self.overlap = overlap;
    }

    pub fn with_overlap(mut self, overlap: OverlapFraction) -> Self {
        self.set_overlap(overlap);
        self
    }

    pub fn set_part_count(&mut self, part_count: PartCount) {
        self.part_count = Some(part_count);
    }

    pub fn with_part_count(mut self, part_count: PartCount) -> Self {
        self.set_part_count(part_count);
        self
    }

    pub fn set_axis(&mut self, axis: Axis) {
        self.axis = Some(axis);
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.set_axis(axis);
        self
    }

    pub fn finalize(self) -> Result<FinalizedSplitPlan, SplitPlanError> {
        if self.extent.is_empty() {
            return Err(SplitPlanError::EmptyImage(
                self.extent.width,
                self.extent.height,
            ));
        }

        let axis = self.axis.unwrap_or_else(|| self.extent.split_axis());
        let part_count = self
            .part_count
            .unwrap_or_else(|| select_part_count(self.extent.long_dim()));
        let boxes = partition(&self.extent, part_count, self.overlap, axis);
        log::debug!(
            "Splitting {}x{} image into {} parts along {:?}: {:?}",
            self.extent.width,
            self.extent.height,
            part_count.get(),
            axis,
            boxes
        );

        Ok(FinalizedSplitPlan {
            extent: self.extent,
            overlap: self.overlap,
            part_count: Some(part_count),
            axis: Some(axis),
            boxes,
            _marker: PhantomData,
        })
    }
}

impl FinalizedSplitPlan {
    pub fn extent(&self) -> ImageExtent {
        self.extent
    }

    pub fn overlap(&self) -> OverlapFraction {
        self.overlap
    }

    pub fn axis(&self) -> Axis {
        self.axis.unwrap_or_else(|| self.extent.split_axis())
    }

    pub fn part_count(&self) -> PartCount {
        self.part_count
            .unwrap_or_else(|| select_part_count(self.extent.long_dim()))
    }

    /// The crop boxes in reading order (left to right or top to bottom)
    pub fn boxes(&self) -> &[CropBox] {
        &self.boxes
    }

    pub fn iter(&self) -> SplitPlanIterator {
        SplitPlanIterator {
            boxes: self.boxes.iter().enumerate(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_wide_image_defaults() {
        let plan = SplitPlanBuilder::new(ImageExtent::new(2448, 3264))
            .finalize()
            .unwrap();
        assert_eq!(plan.extent(), ImageExtent::new(2448, 3264));
        assert_eq!(plan.axis(), Axis::Columns);
        assert_eq!(plan.part_count().get(), 3);
        assert_eq!(plan.overlap(), OverlapFraction::default());
        assert_eq!(plan.boxes().len(), 3);
        assert_eq!(plan.boxes()[0].x0, 0);
        assert_eq!(plan.boxes()[2].x1, 3264);
    }

    #[test]
    fn test_tall_image_splits_rows() {
        let plan = SplitPlanBuilder::new(ImageExtent::new(6000, 4000))
            .with_overlap(OverlapFraction::new(0.1).unwrap())
            .finalize()
            .unwrap();
        assert_eq!(plan.axis(), Axis::Rows);
        assert_eq!(plan.part_count().get(), 5);
        for (_, b) in plan.iter() {
            assert_eq!((b.x0, b.x1), (0, 4000));
        }
    }

    #[test]
    fn test_overrides() {
        let plan = SplitPlanBuilder::new(ImageExtent::new(500, 800))
            .with_part_count(PartCount::new(4).unwrap())
            .with_axis(Axis::Rows)
            .finalize()
            .unwrap();
        assert_eq!(plan.axis(), Axis::Rows);
        assert_eq!(plan.part_count().get(), 4);
        assert_eq!(plan.boxes()[3].y1, 500);
    }

    #[test]
    fn test_iter_is_ordered() {
        let plan = SplitPlanBuilder::new(ImageExtent::new(1000, 4000))
            .finalize()
            .unwrap();
        let indices: Vec<usize> = plan.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        let starts: Vec<u32> = plan.iter().map(|(_, b)| b.x0).collect();
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let result = SplitPlanBuilder::new(ImageExtent::new(0, 100)).finalize();
        assert_eq!(result.err(), Some(SplitPlanError::EmptyImage(100, 0)));
    }
}
