//! Immutable 2D lattice coordinates.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::ParsePointError;
use crate::vector::Vector;

/// A `(row, col)` coordinate.
///
/// Pure value type: equality, hashing and ordering all go through the two
/// components, so two points with the same coordinates are interchangeable
/// as set or map keys. Ordering is row-major (row first, then col).
///
/// A point carries no bounds. Negative components are legal and appear
/// whenever a vector steps off the edge of a grid; only
/// `Grid` decides what is in range.
///
/// # Examples
///
/// ```
/// use gridwalk_core::{Point, Vector};
///
/// let p = Point::new(2, 3);
/// assert_eq!(p.to_string(), "2,3");
/// assert_eq!("2,3".parse::<Point>().unwrap(), p);
/// assert_eq!(p + Vector::N, Point::new(1, 3));
/// assert_eq!(Point::new(0, 0) - Vector::E, Point::new(0, -1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Row index (grows downwards).
    pub row: i32,
    /// Column index (grows to the right).
    pub col: i32,
}

impl Point {
    /// The origin, `0,0`.
    pub const ORIGIN: Point = Point::new(0, 0);

    /// Create a point from its row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Translate this point by `vector`.
    ///
    /// Components follow `i32` addition, so stepping past `i32::MAX` or
    /// `i32::MIN` overflows. Use [`checked_apply`](Self::checked_apply) when
    /// the point may sit at the edge of the coordinate space.
    pub const fn apply(self, vector: Vector) -> Self {
        Self::new(self.row + vector.row, self.col + vector.col)
    }

    /// Translate this point by the inverse of `vector`.
    pub const fn reverse_apply(self, vector: Vector) -> Self {
        Self::new(self.row - vector.row, self.col - vector.col)
    }

    /// Translate this point by `vector`, or `None` if a component would
    /// leave the `i32` range.
    pub const fn checked_apply(self, vector: Vector) -> Option<Self> {
        match (
            self.row.checked_add(vector.row),
            self.col.checked_add(vector.col),
        ) {
            (Some(row), Some(col)) => Some(Self::new(row, col)),
            _ => None,
        }
    }

    /// Translate this point by the inverse of `vector`, or `None` if a
    /// component would leave the `i32` range.
    pub const fn checked_reverse_apply(self, vector: Vector) -> Option<Self> {
        match (
            self.row.checked_sub(vector.row),
            self.col.checked_sub(vector.col),
        ) {
            (Some(row), Some(col)) => Some(Self::new(row, col)),
            _ => None,
        }
    }

    /// Translate by `vector`, or by its inverse when `reverse` is set.
    pub const fn apply_vector(self, vector: Vector, reverse: bool) -> Self {
        if reverse {
            self.reverse_apply(vector)
        } else {
            self.apply(vector)
        }
    }

    /// The vector that carries `self` onto `other`.
    pub const fn vector_to(self, other: Point) -> Vector {
        Vector::new(other.row - self.row, other.col - self.col)
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        self.vector_to(other).length()
    }

    /// L1 distance, `|Δrow| + |Δcol|`.
    ///
    /// Widened to `u64`: the sum of two `i32` spans can exceed `u32::MAX`.
    pub fn manhattan_distance(self, other: Point) -> u64 {
        u64::from(self.row.abs_diff(other.row)) + u64::from(self.col.abs_diff(other.col))
    }

    /// L∞ distance, the number of king moves between the points.
    pub fn chebyshev_distance(self, other: Point) -> u64 {
        u64::from(self.row.abs_diff(other.row).max(self.col.abs_diff(other.col)))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParsePointError::Malformed {
            input: s.to_string(),
        };
        let (row, col) = s.split_once(',').ok_or_else(malformed)?;
        if col.contains(',') {
            return Err(malformed());
        }
        let component = |axis: &'static str, text: &str| {
            // i32::from_str accepts a leading '+', the canonical form never emits one.
            if text.starts_with('+') {
                return Err(malformed());
            }
            text.parse::<i32>()
                .map_err(|source| ParsePointError::InvalidComponent {
                    axis,
                    input: s.to_string(),
                    source,
                })
        };
        Ok(Self::new(component("row", row)?, component("col", col)?))
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        self.apply(rhs)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Point {
        self.reverse_apply(rhs)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
