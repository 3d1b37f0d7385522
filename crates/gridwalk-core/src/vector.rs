//! Directional deltas over the 2D integer lattice.

use std::fmt;
use std::ops::{Add, Mul, Neg};

/// A `(row, col)` delta applied to a [`Point`](crate::Point).
///
/// Row grows downwards and column grows to the right, matching the
/// row-major layout of a parsed grid. So [`Vector::N`] is `(-1, 0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector {
    /// Row delta.
    pub row: i32,
    /// Column delta.
    pub col: i32,
}

impl Vector {
    /// North (up one row).
    pub const N: Vector = Vector::new(-1, 0);
    /// North-east.
    pub const NE: Vector = Vector::new(-1, 1);
    /// East (right one column).
    pub const E: Vector = Vector::new(0, 1);
    /// South-east.
    pub const SE: Vector = Vector::new(1, 1);
    /// South (down one row).
    pub const S: Vector = Vector::new(1, 0);
    /// South-west.
    pub const SW: Vector = Vector::new(1, -1);
    /// West (left one column).
    pub const W: Vector = Vector::new(0, -1);
    /// North-west.
    pub const NW: Vector = Vector::new(-1, -1);
    /// The zero vector.
    pub const ZERO: Vector = Vector::new(0, 0);

    /// Create a vector from its row and column deltas.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether this vector moves nowhere.
    pub const fn is_zero(self) -> bool {
        self.row == 0 && self.col == 0
    }

    /// Rotate a quarter turn clockwise: N becomes E, E becomes S.
    pub const fn turn_right(self) -> Self {
        Self::new(self.col, -self.row)
    }

    /// Rotate a quarter turn anticlockwise: N becomes W, W becomes S.
    pub const fn turn_left(self) -> Self {
        Self::new(-self.col, self.row)
    }

    /// L1 length, `|row| + |col|`.
    pub fn manhattan_len(self) -> u64 {
        u64::from(self.row.unsigned_abs()) + u64::from(self.col.unsigned_abs())
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        f64::from(self.row).hypot(f64::from(self.col))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.row, -self.col)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Mul<i32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i32) -> Vector {
        Vector::new(self.row * rhs, self.col * rhs)
    }
}

impl From<(i32, i32)> for Vector {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
