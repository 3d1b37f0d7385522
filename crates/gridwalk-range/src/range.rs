//! Closed integer ranges and their consolidation.

use std::fmt;

use crate::error::RangeError;

/// A closed interval `[lower, upper]` covering at least one integer.
///
/// Stored as a lower bound and a length; `upper = lower + len - 1` is
/// derived. Every constructor rejects lengths below 1, so `lower <= upper`
/// always holds.
///
/// # Examples
///
/// ```
/// use gridwalk_range::Range;
///
/// let seeds = Range::new(79, 14).unwrap();
/// assert_eq!(seeds.upper(), 92);
/// assert!(seeds.contains(85));
/// assert_eq!(seeds.to_string(), "[79..=92]");
/// assert_eq!(Range::from_bounds(79, 92).unwrap(), seeds);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range {
    lower: i64,
    length: i64,
}

impl Range {
    /// A range of `length` integers starting at `lower`.
    ///
    /// # Errors
    ///
    /// [`RangeError::NonPositiveLength`] if `length < 1`, and
    /// [`RangeError::Overflow`] if the upper bound does not fit in an `i64`.
    pub fn new(lower: i64, length: i64) -> Result<Self, RangeError> {
        if length < 1 {
            return Err(RangeError::NonPositiveLength { length });
        }
        if lower.checked_add(length - 1).is_none() {
            return Err(RangeError::Overflow {
                lower,
                upper: i64::MAX,
            });
        }
        Ok(Self { lower, length })
    }

    /// The range `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// [`RangeError::InvertedBounds`] if `lower > upper`, and
    /// [`RangeError::Overflow`] if the length does not fit in an `i64`.
    pub fn from_bounds(lower: i64, upper: i64) -> Result<Self, RangeError> {
        if lower > upper {
            return Err(RangeError::InvertedBounds { lower, upper });
        }
        let length = span_length(lower, upper).ok_or(RangeError::Overflow { lower, upper })?;
        Ok(Self { lower, length })
    }

    /// `[lower, upper]` for bounds already known to be ordered.
    ///
    /// Only used where the surrounding algorithm guarantees `lower <= upper`
    /// and a representable length.
    pub(crate) fn spanning(lower: i64, upper: i64) -> Self {
        debug_assert!(lower <= upper, "spanning({lower}, {upper})");
        Self {
            lower,
            length: upper - lower + 1,
        }
    }

    /// Smallest covered integer.
    pub fn lower(&self) -> i64 {
        self.lower
    }

    /// Largest covered integer.
    pub fn upper(&self) -> i64 {
        self.lower + self.length - 1
    }

    /// Number of covered integers; always at least 1.
    pub fn len(&self) -> i64 {
        self.length
    }

    /// Always `false`: a range covers at least one integer.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `value` lies within `[lower, upper]`.
    pub fn contains(&self, value: i64) -> bool {
        self.lower <= value && value <= self.upper()
    }

    /// Move the upper bound to `new_upper`, keeping `lower` fixed.
    ///
    /// # Errors
    ///
    /// [`RangeError::UpperBelowLower`] if the range would be left empty.
    /// The range is unchanged on error.
    pub fn set_new_upper(&mut self, new_upper: i64) -> Result<(), RangeError> {
        if new_upper < self.lower {
            return Err(RangeError::UpperBelowLower {
                lower: self.lower,
                new_upper,
            });
        }
        self.length = span_length(self.lower, new_upper).ok_or(RangeError::Overflow {
            lower: self.lower,
            upper: new_upper,
        })?;
        Ok(())
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..={}]", self.lower, self.upper())
    }
}

fn span_length(lower: i64, upper: i64) -> Option<i64> {
    upper.checked_sub(lower)?.checked_add(1)
}

/// Merge overlapping and adjacent ranges into a minimal sorted set.
///
/// The output is sorted by `lower`, consecutive ranges are separated by a
/// gap of at least one integer, and exactly the integers covered by the
/// input are covered by the output. The one exception to the gap rule is a
/// union too long for an `i64` length, which stays split into adjacent
/// ranges.
///
/// ```
/// use gridwalk_range::{consolidate_ranges, Range};
///
/// let merged = consolidate_ranges([
///     Range::new(8, 2).unwrap(), // 8..=9
///     Range::new(1, 3).unwrap(), // 1..=3
///     Range::new(3, 2).unwrap(), // 3..=4
///     Range::new(5, 3).unwrap(), // 5..=7
/// ]);
/// assert_eq!(merged, vec![Range::from_bounds(1, 9).unwrap()]);
/// ```
pub fn consolidate_ranges(ranges: impl IntoIterator<Item = Range>) -> Vec<Range> {
    let mut sorted: Vec<Range> = ranges.into_iter().collect();
    sorted.sort_by_key(Range::lower);

    let mut consolidated = Vec::with_capacity(sorted.len());
    let mut sorted = sorted.into_iter();
    let Some(mut working) = sorted.next() else {
        return consolidated;
    };
    for next in sorted {
        let touches = next.lower <= working.upper()
            || working.upper().checked_add(1) == Some(next.lower);
        if touches {
            if next.upper() <= working.upper() {
                continue;
            }
            if working.set_new_upper(next.upper()).is_err() {
                // The union is longer than i64::MAX: keep the tail as its own range.
                let tail = Range::spanning(working.upper() + 1, next.upper());
                consolidated.push(working);
                working = tail;
            }
        } else {
            consolidated.push(working);
            working = next;
        }
    }
    consolidated.push(working);
    consolidated
}
