//! Overlapping partition of an image extent along a single axis.
//!
//! Parts are laid out with a stride shorter than the nominal part length so that
//! neighbours share roughly `overlap * nominal` pixels. The last part always ends
//! at the image border. If rounding or an aggressive overlap makes the stride
//! walk run out of pixels before all parts are placed, the partition falls back
//! to evenly spaced parts without any overlap, so the caller always gets exactly
//! the requested number of parts.

use crate::geometry::{Axis, CropBox, ImageExtent, Span};
use crate::overlap::OverlapFraction;
use crate::part_count::PartCount;

/// Pixel positions round half to even
fn round_px(value: f64) -> u32 {
    value.round_ties_even() as u32
}

/// Splits `[0, total)` into `num_parts` spans with the given overlap.
///
/// The returned spans are ordered by start position, the first starts at 0 and
/// the last ends at `total`. For very small `total` some spans may be empty;
/// [`partition`] grows those to one pixel.
pub fn partition_spans(total: u32, num_parts: PartCount, overlap: OverlapFraction) -> Vec<Span> {
    let num_parts = num_parts.get();
    let spans = overlapping_spans(total, num_parts, overlap.get());
    if spans.len() == num_parts {
        return spans;
    }

    log::warn!(
        "Only {} of {} overlapping parts fit into {} px with overlap {}, using even spacing without overlap",
        spans.len(),
        num_parts,
        total,
        overlap
    );
    uniform_spans(total, num_parts)
}

fn overlapping_spans(total: u32, num_parts: usize, overlap: f64) -> Vec<Span> {
    let part_nominal = total as f64 / num_parts as f64;
    let part_len = round_px(part_nominal);
    let step = std::cmp::max(1, round_px(part_nominal * (1.0 - overlap)));
    log::debug!(
        "Nominal part length {} px, stride {} px for {} parts over {} px",
        part_nominal,
        step,
        num_parts,
        total
    );

    let mut spans = Vec::with_capacity(num_parts);
    let mut start = 0u32;
    for i in 0..num_parts {
        let end = if i == num_parts - 1 {
            total
        } else {
            start.saturating_add(part_len)
        };
        spans.push(Span::new(
            start.min(total.saturating_sub(1)),
            end.min(total).max(1),
        ));

        start = start.saturating_add(step);
        if start >= total {
            break;
        }
    }
    spans
}

fn uniform_spans(total: u32, num_parts: usize) -> Vec<Span> {
    let part_nominal = total as f64 / num_parts as f64;
    (0..num_parts)
        .map(|i| {
            Span::new(
                round_px(i as f64 * part_nominal),
                round_px((i + 1) as f64 * part_nominal),
            )
        })
        .collect()
}

/// Computes the crop boxes for splitting an image of `extent` into `num_parts`
/// along `axis`.
///
/// Every box spans the full image across `axis`, is non-empty and lies inside
/// `extent`. `extent` must not be empty.
pub fn partition(
    extent: &ImageExtent,
    num_parts: PartCount,
    overlap: OverlapFraction,
    axis: Axis,
) -> Vec<CropBox> {
    partition_spans(extent.along(axis), num_parts, overlap)
        .into_iter()
        .map(|span| CropBox::from_span(span, axis, extent).repaired(extent))
        .collect()
}
