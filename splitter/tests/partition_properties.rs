//! Property-based tests for the partition geometry.
//!
//! Every property is checked against the public API only.

use proptest::prelude::*;
use splitter::{partition, select_part_count, Axis, ImageExtent, OverlapFraction, PartCount};

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::Rows), Just(Axis::Columns)]
}

/// Property: exactly `num_parts` valid boxes, ordered, covering the whole axis
#[test]
fn proptest_boxes_cover_extent() {
    proptest!(|(
        height in 1u32..12_000,
        width in 1u32..12_000,
        num_parts in 2usize..=5,
        overlap in 0.0f64..=0.5,
        axis in axis_strategy()
    )| {
        let extent = ImageExtent::new(height, width);
        let boxes = partition(
            &extent,
            PartCount::new(num_parts).unwrap(),
            OverlapFraction::new(overlap).unwrap(),
            axis,
        );
        prop_assert_eq!(boxes.len(), num_parts);

        for b in &boxes {
            prop_assert!(b.contains_in(&extent), "box {} outside of {:?}", b, extent);
            let across = match axis {
                Axis::Rows => (b.x0, b.x1),
                Axis::Columns => (b.y0, b.y1),
            };
            prop_assert_eq!(across, (0, extent.across(axis)));
        }

        let spans: Vec<_> = boxes.iter().map(|b| b.span(axis)).collect();
        prop_assert_eq!(spans[0].start, 0);
        prop_assert_eq!(spans[num_parts - 1].end, extent.along(axis));
        for pair in spans.windows(2) {
            prop_assert!(pair[0].start <= pair[1].start, "unordered spans {:?}", pair);
            prop_assert!(pair[1].start <= pair[0].end, "gap between {:?}", pair);
        }
    });
}

/// Property: neighbours overlap by about `overlap * total / num_parts` pixels
#[test]
fn proptest_overlap_matches_fraction() {
    proptest!(|(
        total in 200u32..20_000,
        num_parts in 2usize..=5,
        overlap in 0.05f64..=0.5
    )| {
        let extent = ImageExtent::new(100, total);
        let boxes = partition(
            &extent,
            PartCount::new(num_parts).unwrap(),
            OverlapFraction::new(overlap).unwrap(),
            Axis::Columns,
        );
        let expected = overlap * total as f64 / num_parts as f64;

        for pair in boxes.windows(2) {
            let shared = pair[0].span(Axis::Columns).overlap_with(&pair[1].span(Axis::Columns));
            prop_assert!(shared > 0, "no overlap between {} and {}", pair[0], pair[1]);
            prop_assert!(
                (shared as f64 - expected).abs() <= 1.0,
                "overlap {} too far from {}",
                shared,
                expected
            );
        }
    });
}

/// Property: identical inputs give identical output
#[test]
fn proptest_partition_is_repeatable() {
    proptest!(|(
        total in 1u32..10_000,
        num_parts in 2usize..=5,
        overlap in 0.0f64..=0.5
    )| {
        let extent = ImageExtent::new(total, 10);
        let parts = PartCount::new(num_parts).unwrap();
        let overlap = OverlapFraction::new(overlap).unwrap();
        prop_assert_eq!(
            partition(&extent, parts, overlap, Axis::Rows),
            partition(&extent, parts, overlap, Axis::Rows)
        );
    });
}

/// Property: the part count stays in range and never decreases for larger images
#[test]
fn proptest_part_count_is_monotonic() {
    proptest!(|(long_dim in 1u32..100_000, delta in 0u32..10_000)| {
        let small = select_part_count(long_dim).get();
        let large = select_part_count(long_dim + delta).get();
        prop_assert!((PartCount::MIN..=PartCount::MAX).contains(&small));
        prop_assert!(small <= large);
    });
}

#[test]
fn test_fallback_for_two_pixels_and_five_parts() {
    let extent = ImageExtent::new(2, 50);
    let boxes = partition(
        &extent,
        PartCount::new(5).unwrap(),
        OverlapFraction::new(0.5).unwrap(),
        Axis::Rows,
    );
    assert_eq!(boxes.len(), 5);
    for b in &boxes {
        assert!(b.contains_in(&extent));
        assert_eq!(b.height(), 1);
    }
    assert_eq!(boxes[0].y0, 0);
    assert_eq!(boxes[4].y1, 2);
}
