pub mod geometry;
pub mod image_splitter;
pub mod overlap;
pub mod partition;
pub mod split_plan;

mod part_count;
pub use geometry::{Axis, CropBox, ImageExtent, Span};
pub use overlap::OverlapFraction;
pub use part_count::{select_part_count, PartCount, PartCountError};
pub use partition::{partition, partition_spans};
