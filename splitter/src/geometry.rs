use std::fmt;

/// The axis along which an image is cut into parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal cuts, parts are stacked top to bottom
    Rows,
    /// Vertical cuts, parts run left to right
    Columns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageExtent {
    pub height: u32,
    pub width: u32,
}

impl ImageExtent {
    pub fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    pub fn long_dim(&self) -> u32 {
        std::cmp::max(self.height, self.width)
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    /// Tall images are split into rows, everything else (including squares) into columns.
    pub fn split_axis(&self) -> Axis {
        if self.height > self.width {
            Axis::Rows
        } else {
            Axis::Columns
        }
    }

    /// Length of the image along `axis`
    pub fn along(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Rows => self.height,
            Axis::Columns => self.width,
        }
    }

    /// Length of the image orthogonal to `axis`
    pub fn across(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Rows => self.width,
            Axis::Columns => self.height,
        }
    }
}

/// A half-open range `[start, end)` along a single axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Number of pixels shared with `next`, zero if the spans are disjoint
    pub fn overlap_with(&self, next: &Span) -> u32 {
        let start = std::cmp::max(self.start, next.start);
        let end = std::cmp::min(self.end, next.end);
        end.saturating_sub(start)
    }
}

/// A crop rectangle in image coordinates.
///
/// Both pairs are half-open: rows `y0..y1` and columns `x0..x1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub y0: u32,
    pub y1: u32,
    pub x0: u32,
    pub x1: u32,
}

impl CropBox {
    /// Builds a box that covers `span` along `axis` and the full extent across it.
    pub fn from_span(span: Span, axis: Axis, extent: &ImageExtent) -> Self {
        match axis {
            Axis::Rows => Self {
                y0: span.start,
                y1: span.end,
                x0: 0,
                x1: extent.width,
            },
            Axis::Columns => Self {
                y0: 0,
                y1: extent.height,
                x0: span.start,
                x1: span.end,
            },
        }
    }

    pub fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    pub fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }

    pub fn span(&self, axis: Axis) -> Span {
        match axis {
            Axis::Rows => Span::new(self.y0, self.y1),
            Axis::Columns => Span::new(self.x0, self.x1),
        }
    }

    /// True if the box is non-empty and lies completely inside `extent`
    pub fn contains_in(&self, extent: &ImageExtent) -> bool {
        self.y0 < self.y1 && self.y1 <= extent.height && self.x0 < self.x1 && self.x1 <= extent.width
    }

    /// Clamps the box into `extent` and grows empty ranges to one pixel.
    ///
    /// `extent` must not be empty.
    pub fn repaired(&self, extent: &ImageExtent) -> Self {
        let y0 = self.y0.min(extent.height.saturating_sub(1));
        let y1 = std::cmp::max(y0 + 1, self.y1.min(extent.height));
        let x0 = self.x0.min(extent.width.saturating_sub(1));
        let x1 = std::cmp::max(x0 + 1, self.x1.min(extent.width));
        Self { y0, y1, x0, x1 }
    }
}

impl fmt::Display for CropBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y({},{}) x({},{})", self.y0, self.y1, self.x0, self.x1)
    }
}
