//! Ordered sets of unit directions used for neighbourhood expansion.

use smallvec::SmallVec;

use crate::error::GeometryError;
use crate::vector::Vector;

/// Cardinal offsets in clockwise order: N, E, S, W.
const CARDINAL: [Vector; 4] = [Vector::N, Vector::E, Vector::S, Vector::W];

/// Diagonal offsets in clockwise order: NE, SE, SW, NW.
const DIAGONAL: [Vector; 4] = [Vector::NE, Vector::SE, Vector::SW, Vector::NW];

/// All 8 offsets in clockwise order starting north.
const OCTILE: [Vector; 8] = [
    Vector::N,
    Vector::NE,
    Vector::E,
    Vector::SE,
    Vector::S,
    Vector::SW,
    Vector::W,
    Vector::NW,
];

/// An ordered, duplicate-free, non-empty set of direction vectors.
///
/// Order matters: traversal enqueues successors in this order, which fixes
/// the visiting order for both BFS and DFS. The `SmallVec<[Vector; 8]>`
/// keeps the common 4- and 8-connected sets off the heap.
///
/// # Examples
///
/// ```
/// use gridwalk_core::{DirectionSet, Vector};
///
/// assert_eq!(DirectionSet::cardinal().len(), 4);
/// assert_eq!(DirectionSet::octile().len(), 8);
///
/// // Knight moves are just another direction set.
/// let knight = DirectionSet::new([Vector::new(2, 1), Vector::new(1, 2)]).unwrap();
/// assert_eq!(knight.len(), 2);
/// assert!(DirectionSet::new([Vector::ZERO]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirectionSet {
    vectors: SmallVec<[Vector; 8]>,
}

impl DirectionSet {
    /// Build a set from arbitrary vectors, preserving their order.
    ///
    /// Returns `Err(GeometryError::EmptyDirections)` for an empty input,
    /// `Err(GeometryError::ZeroVector)` if any vector is `(0, 0)`, and
    /// `Err(GeometryError::DuplicateDirection)` if a vector repeats.
    pub fn new(vectors: impl IntoIterator<Item = Vector>) -> Result<Self, GeometryError> {
        let mut out: SmallVec<[Vector; 8]> = SmallVec::new();
        for vector in vectors {
            if vector.is_zero() {
                return Err(GeometryError::ZeroVector);
            }
            if out.contains(&vector) {
                return Err(GeometryError::DuplicateDirection { vector });
            }
            out.push(vector);
        }
        if out.is_empty() {
            return Err(GeometryError::EmptyDirections);
        }
        Ok(Self { vectors: out })
    }

    /// The four cardinal directions: N, E, S, W.
    pub fn cardinal() -> Self {
        Self {
            vectors: SmallVec::from_slice(&CARDINAL),
        }
    }

    /// The four diagonal directions: NE, SE, SW, NW.
    pub fn diagonal() -> Self {
        Self {
            vectors: SmallVec::from_slice(&DIAGONAL),
        }
    }

    /// All eight directions, clockwise from north.
    pub fn octile() -> Self {
        Self {
            vectors: SmallVec::from_slice(&OCTILE),
        }
    }

    /// Number of directions in the set.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Always returns `false`: construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `vector` belongs to the set.
    pub fn contains(&self, vector: Vector) -> bool {
        self.vectors.contains(&vector)
    }

    /// Iterate the directions in set order.
    pub fn iter(&self) -> impl Iterator<Item = Vector> + '_ {
        self.vectors.iter().copied()
    }

    /// The directions as a slice.
    pub fn as_slice(&self) -> &[Vector] {
        &self.vectors
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::cardinal()
    }
}

impl<'a> IntoIterator for &'a DirectionSet {
    type Item = Vector;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Vector>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter().copied()
    }
}
