//! Property tests for the generic range classifier.

use proptest::prelude::*;
use wqindex::{ClassRange, RangeClassifier};

/// Contiguous scale from `bounds` (sorted, deduplicated cut points)
fn contiguous_scale(bounds: &[f64]) -> Vec<ClassRange> {
    bounds
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            ClassRange::new(
                Some(pair[0]),
                Some(pair[1]),
                format!("class-{i}"),
                i as u8 + 1,
            )
        })
        .collect()
}

fn cut_points() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::btree_set(0u32..10_000, 2..8)
        .prop_map(|set| set.into_iter().map(|v| v as f64 / 10.0).collect())
}

proptest! {
    #[test]
    fn unsorted_input_classifies_like_sorted(
        bounds in cut_points(),
        value in -100.0f64..1100.0,
        seed in any::<u64>(),
    ) {
        let sorted = contiguous_scale(&bounds);
        let mut shuffled = sorted.clone();
        // Deterministic rotation plus reversal stands in for a shuffle.
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        if seed % 2 == 0 {
            shuffled.reverse();
        }

        let a = RangeClassifier::new(sorted);
        let b = RangeClassifier::new(shuffled);
        prop_assert_eq!(a.label(value), b.label(value));
    }

    #[test]
    fn values_above_every_range_fall_back_to_last(bounds in cut_points(), excess in 0.001f64..1e6) {
        let scale = contiguous_scale(&bounds);
        let last_label = scale.last().map(|r| r.label.clone());
        let top = bounds[bounds.len() - 1];

        let classifier = RangeClassifier::new(scale);
        prop_assert_eq!(classifier.label(top + excess).map(str::to_string), last_label);
    }

    #[test]
    fn shared_boundary_goes_to_lower_range(bounds in cut_points()) {
        prop_assume!(bounds.len() >= 3);
        let classifier = RangeClassifier::new(contiguous_scale(&bounds));
        // bounds[1] closes class-0 and opens class-1.
        prop_assert_eq!(classifier.label(bounds[1]), Some("class-0"));
    }

    #[test]
    fn single_unbounded_range_matches_everything(value in prop::num::f64::NORMAL) {
        let classifier = RangeClassifier::new(vec![ClassRange::unbounded("All", 1)]);
        prop_assert_eq!(classifier.label(value), Some("All"));
    }

    #[test]
    fn classification_is_deterministic(bounds in cut_points(), value in -10.0f64..1010.0) {
        let classifier = RangeClassifier::new(contiguous_scale(&bounds));
        prop_assert_eq!(classifier.classify(value), classifier.classify(value));
    }
}

#[test]
fn above_all_ranges_returns_last_sorted_label() {
    let classifier = RangeClassifier::new(vec![
        ClassRange::new(Some(25.0), Some(50.0), "Good", 2),
        ClassRange::new(Some(0.0), Some(25.0), "Excellent", 1),
    ]);
    assert_eq!(classifier.label(100.0), Some("Good"));
    assert_eq!(classifier.label(25.0), Some("Excellent"));
}

#[test]
fn empty_classifier_has_no_label() {
    let classifier = RangeClassifier::new(Vec::new());
    assert!(classifier.is_empty());
    assert_eq!(classifier.label(1.0), None);
}
