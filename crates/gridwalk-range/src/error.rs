//! Error types for range construction and searching.

/// Errors arising from building or reshaping ranges.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// A range must cover at least one point.
    #[error("range length must be at least 1, got {length}")]
    NonPositiveLength {
        /// The rejected length.
        length: i64,
    },
    /// The lower bound lies above the upper bound.
    #[error("inverted range bounds: lower {lower} > upper {upper}")]
    InvertedBounds {
        /// The requested lower bound.
        lower: i64,
        /// The requested upper bound.
        upper: i64,
    },
    /// Moving the upper bound would leave the range empty.
    #[error("new upper {new_upper} is below lower bound {lower}")]
    UpperBelowLower {
        /// The fixed lower bound.
        lower: i64,
        /// The rejected upper bound.
        new_upper: i64,
    },
    /// A binary-search window with `start > end`.
    #[error("search window invalid (start={start}, end={end})")]
    InvalidWindow {
        /// Window start.
        start: i64,
        /// Window end.
        end: i64,
    },
    /// The bounds do not fit in an `i64` length.
    #[error("range [{lower}, {upper}] is too large to represent")]
    Overflow {
        /// The requested lower bound.
        lower: i64,
        /// The requested upper bound.
        upper: i64,
    },
}
