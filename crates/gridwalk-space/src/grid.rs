//! Dense row-major grid storage.

use std::fmt;

use gridwalk_core::{DirectionSet, Point, Vector};
use smallvec::SmallVec;

use crate::error::GridError;
use crate::ray::Ray;

/// A rectangular table of cells addressed by [`Point`].
///
/// Each cell holds `Some(value)` or is absent. Absent cells only arise from
/// ragged construction input: `cols` is the length of the longest row and
/// shorter rows leave their tail empty. So [`exists`](Self::exists) can be
/// `false` for a point where [`bounds_contain`](Self::bounds_contain) is
/// `true`. Equal-length rows are the expected input; raggedness is not
/// reported as an error.
///
/// Shape is fixed at construction. Cell values may be rewritten through
/// [`set`](Self::set) and [`at_mut`](Self::at_mut); traversal never does.
///
/// # Examples
///
/// ```
/// use gridwalk_core::Point;
/// use gridwalk_space::Grid;
///
/// let grid = Grid::new(vec![vec![1, 2, 3], vec![4, 5, 6]]);
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.at(Point::new(1, 2)), Some(&6));
/// assert_eq!(grid.at(Point::new(2, 0)), None);
///
/// let order: Vec<i32> = grid.iter().map(|(_, v)| *v).collect();
/// assert_eq!(order, vec![1, 2, 3, 4, 5, 6]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// Build a grid from rows of values.
    ///
    /// Rows are expected to share one length. A shorter row is padded with
    /// absent cells up to the longest row.
    ///
    /// # Panics
    ///
    /// If either dimension exceeds `i32::MAX`. See [`try_new`](Self::try_new).
    pub fn new(data: Vec<Vec<T>>) -> Self {
        match Self::try_new(data) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// Build a grid from rows of values, rejecting shapes that [`Point`]
    /// cannot address.
    ///
    /// # Errors
    ///
    /// [`GridError::TooLarge`] if the row count or the longest row exceeds
    /// `i32::MAX`.
    pub fn try_new(data: Vec<Vec<T>>) -> Result<Self, GridError> {
        let rows = data.len();
        let cols = data.iter().map(Vec::len).max().unwrap_or(0);
        check_shape(rows, cols)?;
        let mut cells = Vec::with_capacity(rows * cols);
        for row in data {
            let width = row.len();
            cells.extend(row.into_iter().map(Some));
            cells.extend((width..cols).map(|_| None));
        }
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored (non-absent) cells.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether the grid stores no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// `true` iff `0 <= row < rows` and `0 <= col < cols`.
    pub fn bounds_contain(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    /// `true` iff a value is stored at `point`.
    pub fn exists(&self, point: Point) -> bool {
        self.at(point).is_some()
    }

    /// The value at `point`, or `None` when out of bounds or absent.
    pub fn at(&self, point: Point) -> Option<&T> {
        self.index(point).and_then(|i| self.cells[i].as_ref())
    }

    /// Mutable access to the value at `point`.
    pub fn at_mut(&mut self, point: Point) -> Option<&mut T> {
        self.index(point).and_then(|i| self.cells[i].as_mut())
    }

    /// Store `value` at `point`, returning the previous value.
    ///
    /// Returns `Err(GridError::OutOfBounds)` if `point` lies outside the
    /// grid; writing into an absent cell inside the bounds fills it.
    pub fn set(&mut self, point: Point, value: T) -> Result<Option<T>, GridError> {
        let i = self.index(point).ok_or(GridError::OutOfBounds {
            point,
            rows: self.rows,
            cols: self.cols,
        })?;
        Ok(self.cells[i].replace(value))
    }

    /// Iterate stored `(point, value)` pairs in row-major order.
    ///
    /// Each call starts a fresh pass.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cols: self.cols,
            inner: self.cells.iter().enumerate(),
        }
    }

    /// Points whose value satisfies `predicate`, in row-major order.
    pub fn positions<'a>(
        &'a self,
        mut predicate: impl FnMut(&T) -> bool + 'a,
    ) -> impl Iterator<Item = Point> + 'a {
        self.iter()
            .filter_map(move |(point, value)| predicate(value).then_some(point))
    }

    /// The first point (row-major) whose value satisfies `predicate`.
    pub fn find(&self, predicate: impl FnMut(&T) -> bool) -> Option<Point> {
        self.positions(predicate).next()
    }

    /// Stored neighbours of `point` along each of `directions`, in set order.
    ///
    /// Neighbours outside the grid or in absent cells are omitted.
    pub fn neighbours(
        &self,
        point: Point,
        directions: &DirectionSet,
    ) -> SmallVec<[(Point, &T); 8]> {
        directions
            .iter()
            .filter_map(|v| {
                let next = point.checked_apply(v)?;
                self.at(next).map(|value| (next, value))
            })
            .collect()
    }

    /// Cast a ray from `start` along `vector`.
    ///
    /// Yields `start + vector`, `start + 2*vector`, ... for as long as the
    /// points stay inside the grid. See [`Ray`].
    pub fn ray(&self, start: Point, vector: Vector) -> Ray<'_, T> {
        Ray::new(self, start, vector)
    }

    /// Apply `f` to every stored value, keeping the shape.
    pub fn map<U>(&self, mut f: impl FnMut(Point, &T) -> U) -> Grid<U> {
        let cols = self.cols;
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| cell.as_ref().map(|v| f(point_at(i, cols), v)))
            .collect();
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Flat index of an in-bounds point.
    fn index(&self, point: Point) -> Option<usize> {
        let row = usize::try_from(point.row).ok()?;
        let col = usize::try_from(point.col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

/// Fails unless every row and column index fits in an `i32`.
pub(crate) fn check_shape(rows: usize, cols: usize) -> Result<(), GridError> {
    let limit = i32::MAX as usize;
    if rows > limit || cols > limit {
        return Err(GridError::TooLarge { rows, cols });
    }
    Ok(())
}

/// Point for flat index `i` in a grid `cols` wide.
fn point_at(i: usize, cols: usize) -> Point {
    // Shapes are checked at construction, so both indices fit.
    Point::new((i / cols) as i32, (i % cols) as i32)
}

/// Row-major iterator over the stored cells of a [`Grid`].
///
/// Created by [`Grid::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    cols: usize,
    inner: std::iter::Enumerate<std::slice::Iter<'a, Option<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Point, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        for (i, cell) in self.inner.by_ref() {
            if let Some(value) = cell {
                return Some((point_at(i, self.cols), value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = (Point, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One bracketed, comma-separated row per line.
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            let mut first = true;
            for value in row.iter().flatten() {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
                first = false;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
