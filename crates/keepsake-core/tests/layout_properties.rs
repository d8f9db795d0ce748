//! Property-based tests for the masonry layout
//!
//! Uses proptest to verify placement and clamping invariants over arbitrary
//! aspect-ratio sequences and column configurations.

use proptest::prelude::*;

use keepsake_core::masonry::{columns_for_width, MasonryLayout, ITEM_GAP};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Aspect ratios covering extreme panoramas through extreme portraits,
/// with a few non-finite values mixed in (the errored-image path).
fn aspect_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => 0.05f64..20.0,
        1 => Just(f64::NAN),
        1 => Just(0.0),
    ]
}

fn aspects_strategy(max: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(aspect_strategy(), 1..max)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every photo is assigned to exactly one in-range column.
    #[test]
    fn every_photo_lands_in_one_column(
        aspects in aspects_strategy(60),
        columns in 1usize..6,
    ) {
        let mut layout = MasonryLayout::new(columns, 300.0, ITEM_GAP);
        for aspect in &aspects {
            let column = layout.place(*aspect);
            prop_assert!(column < layout.column_count());
        }
    }

    /// Total accumulated height is conserved: the sum of column heights
    /// equals the sum of each photo's scaled height plus gaps.
    #[test]
    fn heights_are_conserved(aspects in prop::collection::vec(0.1f64..10.0, 1..40)) {
        let width = 250.0;
        let mut layout = MasonryLayout::new(3, width, ITEM_GAP);
        let mut expected = 0.0;
        for aspect in &aspects {
            layout.place(*aspect);
            expected += width / aspect + ITEM_GAP;
        }
        let total: f64 = layout.heights().iter().sum();
        prop_assert!((total - expected).abs() < 1e-6);
    }

    /// Greedy balance bound: no column exceeds the shortest column by more
    /// than one item's worth of height, so clamping to the minimum trims at
    /// most the last-placed photo per column.
    #[test]
    fn clamp_trims_at_most_one_item_per_column(
        aspects in prop::collection::vec(0.2f64..5.0, 1..50),
        columns in 2usize..5,
    ) {
        let width = 300.0;
        let mut layout = MasonryLayout::new(columns, width, ITEM_GAP);
        let tallest_item = aspects
            .iter()
            .map(|a| width / a + ITEM_GAP)
            .fold(0.0f64, f64::max);
        for aspect in &aspects {
            layout.place(*aspect);
        }

        let clamp = layout.clamp_height();
        for height in layout.heights() {
            prop_assert!(*height >= clamp);
            prop_assert!(*height - clamp <= tallest_item + 1e-6);
        }
    }

    /// Placement always picks a column that was minimal at placement time.
    #[test]
    fn placement_is_greedy(aspects in prop::collection::vec(0.2f64..5.0, 1..40)) {
        let mut layout = MasonryLayout::new(4, 300.0, ITEM_GAP);
        for aspect in &aspects {
            let before = layout.heights().to_vec();
            let min = before.iter().copied().fold(f64::INFINITY, f64::min);
            let column = layout.place(*aspect);
            prop_assert_eq!(before[column], min);
        }
    }

    /// The breakpoint mapping is monotone: wider viewports never get fewer
    /// columns.
    #[test]
    fn breakpoints_are_monotone(a in 0.0f64..3000.0, b in 0.0f64..3000.0) {
        let (narrow, wide) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(columns_for_width(narrow) <= columns_for_width(wide));
    }
}
