//! Binary search over monotone predicates.
//!
//! "Find the first index where this starts being true" comes up whenever a
//! puzzle asks how many steps it takes before something breaks: the
//! predicate is expensive (re-run a simulation) but monotone, so bisecting
//! the index window beats scanning it.

use crate::error::RangeError;

/// The midpoint of `[start, end]`, rounded towards negative infinity.
///
/// # Errors
///
/// [`RangeError::InvalidWindow`] if `start > end`.
///
/// ```
/// use gridwalk_range::binary_midpoint;
///
/// assert_eq!(binary_midpoint(0, 9).unwrap(), 4);
/// assert_eq!(binary_midpoint(-3, -2).unwrap(), -3);
/// assert!(binary_midpoint(5, 4).is_err());
/// ```
pub fn binary_midpoint(start: i64, end: i64) -> Result<i64, RangeError> {
    if start > end {
        return Err(RangeError::InvalidWindow { start, end });
    }
    let mid = (i128::from(start) + i128::from(end)).div_euclid(2);
    // The midpoint of two i64 values is an i64.
    Ok(mid as i64)
}

/// The first index in `[lower, upper]` where `predicate` is true.
///
/// `predicate` must be monotone over the window: false up to some index,
/// true from there on. Returns `Ok(None)` when it is never true.
///
/// # Errors
///
/// [`RangeError::InvalidWindow`] if `lower > upper`.
///
/// ```
/// use gridwalk_range::find_transition;
///
/// // First n with n * n >= 2000.
/// assert_eq!(find_transition(0, 1000, |n| n * n >= 2000).unwrap(), Some(45));
/// assert_eq!(find_transition(0, 10, |_| false).unwrap(), None);
/// ```
pub fn find_transition(
    lower: i64,
    upper: i64,
    mut predicate: impl FnMut(i64) -> bool,
) -> Result<Option<i64>, RangeError> {
    if lower > upper {
        return Err(RangeError::InvalidWindow {
            start: lower,
            end: upper,
        });
    }

    let (mut start, mut end) = (lower, upper);
    let mut transition = None;
    while start <= end {
        let mid = binary_midpoint(start, end)?;
        if predicate(mid) {
            transition = Some(mid);
            match mid.checked_sub(1) {
                Some(next) => end = next,
                None => break,
            }
        } else {
            match mid.checked_add(1) {
                Some(next) => start = next,
                None => break,
            }
        }
    }
    Ok(transition)
}

/// Index of the first `true` in a slice that is all `false` then all `true`.
///
/// ```
/// use gridwalk_range::first_true;
///
/// assert_eq!(first_true(&[false, false, true, true]), Some(2));
/// assert_eq!(first_true(&[false, false]), None);
/// assert_eq!(first_true(&[]), None);
/// ```
pub fn first_true(flags: &[bool]) -> Option<usize> {
    let index = flags.partition_point(|&flag| !flag);
    (index < flags.len()).then_some(index)
}
