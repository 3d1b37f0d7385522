//! Error types for geometry construction and parsing.

use std::num::ParseIntError;

use crate::vector::Vector;

/// Errors arising from parsing the canonical `"row,col"` form of a
/// [`Point`](crate::Point).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParsePointError {
    /// The input is not two comma-separated components.
    #[error("cannot convert {input:?} to a point: expected \"row,col\"")]
    Malformed {
        /// The offending input text.
        input: String,
    },
    /// One of the two components is not a valid integer.
    #[error("cannot convert {input:?} to a point: invalid {axis} component")]
    InvalidComponent {
        /// Which component failed (`"row"` or `"col"`).
        axis: &'static str,
        /// The offending input text.
        input: String,
        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
}

/// Errors arising from building direction sets.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// A direction set must contain at least one vector.
    #[error("direction set must contain at least one vector")]
    EmptyDirections,
    /// The zero vector never moves and is rejected as a direction.
    #[error("direction set contains the zero vector")]
    ZeroVector,
    /// The same vector was supplied twice.
    #[error("direction set contains {vector} more than once")]
    DuplicateDirection {
        /// The repeated vector.
        vector: Vector,
    },
}
