//! Piecewise offset maps between two numeric spaces.

use std::fmt;

use crate::error::RangeError;
use crate::range::Range;

/// One piece of a [`TransformMap`]: source values in `[min, max]` move by
/// `offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MappingRange {
    /// First covered source value.
    pub min: i64,
    /// Last covered source value.
    pub max: i64,
    /// `dest_start - source_start`.
    pub offset: i64,
}

impl MappingRange {
    /// Whether `value` lies in `[min, max]`.
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// A named piecewise translation from a source space to a destination space.
///
/// Built from `(dest_start, source_start, length)` triples. Values covered by
/// a sub-range move by that sub-range's offset; every other value maps to
/// itself.
///
/// Sub-ranges must not overlap. This is not checked: overlapping input gives
/// silently wrong results, not an error.
///
/// # Examples
///
/// ```
/// use gridwalk_range::{Range, TransformMap};
///
/// let mut soil = TransformMap::new("seed", "soil");
/// soil.add_range(50, 98, 2).unwrap();
/// soil.add_range(52, 50, 48).unwrap();
///
/// assert_eq!(soil.name(), "seed to soil");
/// assert_eq!(soil.map_value(98), 50);
/// assert_eq!(soil.map_value(79), 81);
/// assert_eq!(soil.map_value(10), 10);
///
/// // 95..=100 straddles two sub-ranges and the unmapped tail.
/// let split = soil.map_range(Range::from_bounds(95, 100).unwrap());
/// let bounds: Vec<(i64, i64)> = split.iter().map(|r| (r.lower(), r.upper())).collect();
/// assert_eq!(bounds, vec![(97, 99), (50, 51), (100, 100)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformMap {
    source: String,
    dest: String,
    ranges: Vec<MappingRange>,
}

impl TransformMap {
    /// An empty (identity) map between two named spaces.
    pub fn new(source: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            ranges: Vec::new(),
        }
    }

    /// `"{source} to {dest}"`.
    pub fn name(&self) -> String {
        format!("{} to {}", self.source, self.dest)
    }

    /// Name of the source space.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Name of the destination space.
    pub fn dest(&self) -> &str {
        &self.dest
    }

    /// Add the sub-range mapping `source_start..source_start + length` onto
    /// `dest_start..`. Sub-ranges stay sorted by `min`.
    ///
    /// # Errors
    ///
    /// [`RangeError::NonPositiveLength`] if `length < 1`, and
    /// [`RangeError::Overflow`] if the sub-range or its offset does not fit
    /// in an `i64`.
    pub fn add_range(
        &mut self,
        dest_start: i64,
        source_start: i64,
        length: i64,
    ) -> Result<(), RangeError> {
        let source = Range::new(source_start, length)?;
        let overflow = RangeError::Overflow {
            lower: dest_start,
            upper: source_start,
        };
        let offset = dest_start.checked_sub(source_start).ok_or(overflow.clone())?;
        Range::new(dest_start, length).map_err(|_| overflow)?;

        self.ranges.push(MappingRange {
            min: source.lower(),
            max: source.upper(),
            offset,
        });
        self.ranges.sort_by_key(|range| range.min);
        Ok(())
    }

    /// The sub-ranges, sorted by `min`.
    pub fn mapping_ranges(&self) -> &[MappingRange] {
        &self.ranges
    }

    /// Number of sub-ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the map has no sub-ranges (and so is the identity).
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Translate one value; identity when no sub-range covers it.
    pub fn map_value(&self, value: i64) -> i64 {
        self.ranges
            .iter()
            .find(|range| range.contains(value))
            .map_or(value, |range| value + range.offset)
    }

    /// Split `input` along sub-range boundaries and translate each piece.
    ///
    /// Covered pieces move by their sub-range's offset; uncovered pieces
    /// (before, between or after the sub-ranges) pass through unchanged.
    /// The lengths of the returned ranges always sum to `input.len()`.
    ///
    /// The output is in source order, which is generally not sorted in the
    /// destination space; run it through
    /// [`consolidate_ranges`](crate::consolidate_ranges) before the next stage.
    pub fn map_range(&self, input: Range) -> Vec<Range> {
        let mut mapped = Vec::new();
        let mut start = input.lower();
        let end = input.upper();

        for sub in &self.ranges {
            if end < sub.min {
                break;
            }
            if start > sub.max {
                continue;
            }
            if start < sub.min {
                mapped.push(Range::spanning(start, sub.min - 1));
                start = sub.min;
            }
            if end <= sub.max {
                mapped.push(Range::spanning(start + sub.offset, end + sub.offset));
                return mapped;
            }
            mapped.push(Range::spanning(start + sub.offset, sub.max + sub.offset));
            start = sub.max + 1;
        }

        // Whatever is left lies outside every sub-range.
        mapped.push(Range::spanning(start, end));
        mapped
    }
}

impl fmt::Display for TransformMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        for range in &self.ranges {
            write!(f, "\n  [{}..={}] {:+}", range.min, range.max, range.offset)?;
        }
        Ok(())
    }
}
