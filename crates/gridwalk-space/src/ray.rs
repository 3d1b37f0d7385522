//! Ray casting across a grid.

use gridwalk_core::{Point, Vector};

use crate::grid::Grid;

/// Iterator over the in-bounds points along a ray.
///
/// Starting at `start` (which is not yielded), repeatedly steps by
/// `vector` and yields each point together with its stored value, stopping
/// at the first point outside the grid bounds. Absent cells inside the
/// bounds are yielded with a `None` value and do not stop the ray. A zero
/// vector yields nothing.
///
/// # Examples
///
/// ```
/// use gridwalk_core::{Point, Vector};
/// use gridwalk_space::Grid;
///
/// let grid = Grid::new(vec![vec!['.'; 5]; 5]);
/// let diagonal: Vec<Point> = grid
///     .ray(Point::new(1, 1), Vector::SE)
///     .map(|(p, _)| p)
///     .collect();
/// assert_eq!(diagonal, vec![Point::new(2, 2), Point::new(3, 3), Point::new(4, 4)]);
/// ```
#[derive(Clone, Debug)]
pub struct Ray<'a, T> {
    grid: &'a Grid<T>,
    current: Point,
    vector: Vector,
    done: bool,
}

impl<'a, T> Ray<'a, T> {
    pub(crate) fn new(grid: &'a Grid<T>, start: Point, vector: Vector) -> Self {
        Self {
            grid,
            current: start,
            vector,
            done: vector.is_zero(),
        }
    }
}

impl<'a, T> Iterator for Ray<'a, T> {
    type Item = (Point, Option<&'a T>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.current.checked_apply(self.vector)?;
        if !self.grid.bounds_contain(next) {
            self.done = true;
            return None;
        }
        self.current = next;
        Some((next, self.grid.at(next)))
    }
}

impl<T> std::iter::FusedIterator for Ray<'_, T> {}
