//! Invariant checkers shared by test modules.
//!
//! Each `assert_*` panics with a descriptive message on the first
//! violation, so a failing property test points at the broken invariant
//! rather than at a downstream symptom.

use std::collections::BTreeSet;

use gridwalk_core::{Point, Vector};
use gridwalk_range::Range;

/// Every integer covered by at least one range.
pub fn covered_points(ranges: &[Range]) -> BTreeSet<i64> {
    ranges
        .iter()
        .flat_map(|range| range.lower()..=range.upper())
        .collect()
}

/// Assert `ranges` is sorted by `lower` with a gap of at least one integer
/// between neighbours.
pub fn assert_consolidated(ranges: &[Range]) {
    for pair in ranges.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            a.upper() + 1 < b.lower(),
            "{a} and {b} overlap, touch or are out of order"
        );
    }
}

/// Assert `points` never repeats a point and every step moves by one of
/// `steps`.
pub fn assert_simple_path(points: &[Point], steps: &[Vector]) {
    let unique: BTreeSet<&Point> = points.iter().collect();
    assert_eq!(
        unique.len(),
        points.len(),
        "path revisits a point: {points:?}"
    );
    for pair in points.windows(2) {
        let step = pair[0].vector_to(pair[1]);
        assert!(
            steps.contains(&step),
            "step {} -> {} moves by {step}, not an allowed direction",
            pair[0],
            pair[1]
        );
    }
}
