use std::str::FromStr;

use thiserror::Error;

/// Thresholds on the longer image side, checked top-down
const PART_COUNT_THRESHOLDS: [(u32, usize); 4] = [(5000, 5), (3500, 4), (2200, 3), (1000, 2)];

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PartCountError {
    #[error("Part count {0} is outside of [{min}, {max}]", min = PartCount::MIN, max = PartCount::MAX)]
    OutOfRange(usize),
    #[error("Part count is not a number")]
    Parse(#[from] std::num::ParseIntError),
}

/// Number of parts an image is split into, always within `[MIN, MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PartCount(usize);

impl PartCount {
    pub const MIN: usize = 2;
    pub const MAX: usize = 5;

    pub fn new(count: usize) -> Result<Self, PartCountError> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(PartCountError::OutOfRange(count))
        }
    }

    pub fn clamped(count: usize) -> Self {
        Self(count.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl FromStr for PartCount {
    type Err = PartCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim().parse()?)
    }
}

/// Picks how many parts to produce from the longer side of the image.
///
/// Images below the smallest threshold still get two parts so there is
/// something to stitch.
pub fn select_part_count(long_dim: u32) -> PartCount {
    let count = PART_COUNT_THRESHOLDS
        .iter()
        .find(|(min_dim, _)| long_dim >= *min_dim)
        .map(|(_, count)| *count)
        .unwrap_or(PartCount::MIN);

    PartCount::clamped(count)
}
