//! Error types for grid construction and mutation.

use gridwalk_core::Point;

/// Errors arising from grid parsing or cell writes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A point lies outside `[0, rows) x [0, cols)`.
    #[error("point {point} out of bounds: [0, {rows}) x [0, {cols})")]
    OutOfBounds {
        /// The offending point.
        point: Point,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
    /// A character in the input could not be turned into a cell value.
    #[error("invalid cell {ch:?} at {point}")]
    InvalidCell {
        /// Where the character sits.
        point: Point,
        /// The character that failed to parse.
        ch: char,
    },
    /// A dimension has more entries than an `i32` coordinate can address.
    #[error("grid of {rows} x {cols} exceeds the i32 coordinate range")]
    TooLarge {
        /// Number of rows requested.
        rows: usize,
        /// Number of columns requested.
        cols: usize,
    },
}
