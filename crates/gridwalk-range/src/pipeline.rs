//! Chains of transform maps applied stage by stage.

use crate::range::{consolidate_ranges, Range};
use crate::transform::TransformMap;

/// An ordered chain of [`TransformMap`] stages.
///
/// Ranges fed through [`map_ranges`](Self::map_ranges) are consolidated
/// before the first stage and after every stage, so each stage sees a
/// minimal sorted set.
///
/// # Examples
///
/// ```
/// use gridwalk_range::{Range, RangePipeline, TransformMap};
///
/// let mut double_digits = TransformMap::new("a", "b");
/// double_digits.add_range(110, 10, 90).unwrap(); // 10..=99 -> 110..=199
/// let mut shift_down = TransformMap::new("b", "c");
/// shift_down.add_range(0, 150, 100).unwrap(); // 150..=249 -> 0..=99
///
/// let pipeline: RangePipeline = [double_digits, shift_down].into_iter().collect();
/// assert_eq!(pipeline.map_value(60), 10);
/// assert_eq!(pipeline.lowest([Range::new(5, 10).unwrap()]), Some(5));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RangePipeline {
    stages: Vec<TransformMap>,
}

impl RangePipeline {
    /// A pipeline with no stages (the identity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage.
    pub fn push(&mut self, stage: TransformMap) {
        self.stages.push(stage);
    }

    /// Builder form of [`push`](Self::push).
    pub fn with_stage(mut self, stage: TransformMap) -> Self {
        self.push(stage);
        self
    }

    /// The stages in application order.
    pub fn stages(&self) -> &[TransformMap] {
        &self.stages
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether there are no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Fold one value through every stage.
    pub fn map_value(&self, value: i64) -> i64 {
        self.stages
            .iter()
            .fold(value, |value, stage| stage.map_value(value))
    }

    /// Map a set of ranges through every stage, consolidating in between.
    ///
    /// The result is consolidated: sorted, non-overlapping, non-adjacent.
    pub fn map_ranges(&self, ranges: impl IntoIterator<Item = Range>) -> Vec<Range> {
        let mut current = consolidate_ranges(ranges);
        for stage in &self.stages {
            let split: Vec<Range> = current
                .iter()
                .flat_map(|range| stage.map_range(*range))
                .collect();
            let split_len = split.len();
            let next = consolidate_ranges(split);
            tracing::debug!(
                stage = %stage.name(),
                ranges_in = current.len(),
                pieces = split_len,
                ranges_out = next.len(),
                "range stage mapped"
            );
            current = next;
        }
        current
    }

    /// The smallest value any input range maps to; `None` for no input.
    pub fn lowest(&self, ranges: impl IntoIterator<Item = Range>) -> Option<i64> {
        self.map_ranges(ranges).first().map(Range::lower)
    }
}

impl FromIterator<TransformMap> for RangePipeline {
    fn from_iter<I: IntoIterator<Item = TransformMap>>(iter: I) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}

impl Extend<TransformMap> for RangePipeline {
    fn extend<I: IntoIterator<Item = TransformMap>>(&mut self, iter: I) {
        self.stages.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn r(lower: i64, upper: i64) -> Range {
        Range::from_bounds(lower, upper).unwrap()
    }

    fn map(source: &str, dest: &str, triples: &[(i64, i64, i64)]) -> TransformMap {
        let mut map = TransformMap::new(source, dest);
        for &(dest_start, source_start, length) in triples {
            map.add_range(dest_start, source_start, length).unwrap();
        }
        map
    }

    fn two_stage() -> RangePipeline {
        RangePipeline::new()
            .with_stage(map("seed", "soil", &[(50, 98, 2), (52, 50, 48)]))
            .with_stage(map("soil", "fertilizer", &[(0, 15, 37), (37, 52, 2), (39, 0, 15)]))
    }

    // ── Values ──────────────────────────────────────────────────

    #[test]
    fn empty_pipeline_is_identity() {
        let pipeline = RangePipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.map_value(42), 42);
        assert_eq!(pipeline.map_ranges([r(3, 5), r(1, 2)]), vec![r(1, 5)]);
    }

    #[test]
    fn map_value_folds_stages_in_order() {
        let pipeline = two_stage();
        assert_eq!(pipeline.len(), 2);
        // seed 79 -> soil 81 -> fertilizer 81
        assert_eq!(pipeline.map_value(79), 81);
        // seed 14 -> soil 14 -> fertilizer 53
        assert_eq!(pipeline.map_value(14), 53);
        // seed 55 -> soil 57 -> fertilizer 57
        assert_eq!(pipeline.map_value(55), 57);
        // seed 13 -> soil 13 -> fertilizer 52
        assert_eq!(pipeline.map_value(13), 52);
    }

    // ── Ranges ──────────────────────────────────────────────────

    #[test]
    fn map_ranges_consolidates_each_stage() {
        let pipeline = RangePipeline::new().with_stage(map("a", "b", &[(10, 0, 5), (15, 5, 5)]));
        // 0..=4 -> 10..=14 and 5..=9 -> 15..=19 meet again after mapping.
        assert_eq!(pipeline.map_ranges([r(0, 9)]), vec![r(10, 19)]);
    }

    #[test]
    fn lowest_of_nothing_is_none() {
        assert_eq!(two_stage().lowest(Vec::new()), None);
    }

    #[test]
    fn collect_and_extend_build_stages() {
        let mut pipeline: RangePipeline = [map("a", "b", &[])].into_iter().collect();
        pipeline.extend([map("b", "c", &[(0, 100, 1)])]);
        let names: Vec<String> = pipeline.stages().iter().map(TransformMap::name).collect();
        assert_eq!(names, vec!["a to b", "b to c"]);
        assert_eq!(pipeline.map_value(100), 0);
    }

    proptest! {
        #[test]
        fn lowest_matches_brute_force(lower in 0i64..110, length in 1i64..40) {
            let pipeline = two_stage();
            let input = Range::new(lower, length).unwrap();
            let brute = (input.lower()..=input.upper()).map(|v| pipeline.map_value(v)).min();
            prop_assert_eq!(pipeline.lowest([input]), brute);
        }
    }
}
