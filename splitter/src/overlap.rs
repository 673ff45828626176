use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OverlapFractionError {
    #[error("Overlap must be between {min} and {max}, got {0}", min = OverlapFraction::MIN, max = OverlapFraction::MAX)]
    OutOfRange(f64),
    #[error("Overlap is not a number")]
    Parse(#[from] std::num::ParseFloatError),
}

/// Fraction of a nominal part length that consecutive parts share
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct OverlapFraction(f64);

impl OverlapFraction {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 0.5;

    pub fn new(fraction: f64) -> Result<Self, OverlapFractionError> {
        // NaN fails the range check as well
        if (Self::MIN..=Self::MAX).contains(&fraction) {
            Ok(Self(fraction))
        } else {
            Err(OverlapFractionError::OutOfRange(fraction))
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for OverlapFraction {
    fn default() -> Self {
        Self(0.2)
    }
}

impl fmt::Display for OverlapFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OverlapFraction {
    type Err = OverlapFractionError;

    /// Accepts a plain fraction ("0.2") or a percentage ("20%")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let fraction = match s.strip_suffix('%') {
            Some(percent) => percent.trim_end().parse::<f64>()? / 100.0,
            None => s.parse()?,
        };
        Self::new(fraction)
    }
}
