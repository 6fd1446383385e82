//! Property tests for the page window.
//!
//! However the input is split into batches, a `(limit, offset)` window fed
//! batch by batch must equal the corresponding slice of the flattened
//! input.

use proptest::prelude::*;
use sluice_pipeline::PageWindow;

proptest! {
    #[test]
    fn window_equals_slice_of_flattened_input(
        batches in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..12), 0..12),
        limit in 0usize..40,
        offset in 0usize..40,
    ) {
        let flattened: Vec<i32> = batches.iter().flatten().copied().collect();

        let mut window = PageWindow::new(limit, offset);
        for batch in batches {
            window.admit(batch);
        }

        let start = offset.min(flattened.len());
        let end = (offset + limit).min(flattened.len());
        prop_assert_eq!(window.rows(), &flattened[start..end]);

        // Full exactly when `limit` rows fit past the offset.
        let expected_full = flattened.len().saturating_sub(offset) >= limit;
        prop_assert_eq!(window.is_full(), expected_full);
    }

    #[test]
    fn feed_granularity_is_irrelevant(
        rows in prop::collection::vec(any::<i32>(), 0..60),
        split in 1usize..8,
        limit in 0usize..20,
        offset in 0usize..20,
    ) {
        let mut all_at_once = PageWindow::new(limit, offset);
        all_at_once.admit(rows.clone());

        let mut piecewise = PageWindow::new(limit, offset);
        for piece in rows.chunks(split) {
            piecewise.admit(piece.to_vec());
        }

        prop_assert_eq!(all_at_once.rows(), piecewise.rows());
        prop_assert_eq!(all_at_once.is_full(), piecewise.is_full());
    }
}
