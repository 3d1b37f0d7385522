//! Building grids from puzzle text.
//!
//! Puzzle inputs are a block of lines, one grid row per line. Row `r`,
//! column `c` of the grid is the `c`-th `char` of the `r`-th line.

use gridwalk_core::Point;

use crate::error::GridError;
use crate::grid::Grid;

impl Grid<char> {
    /// One cell per character, one row per line.
    ///
    /// ```
    /// use gridwalk_core::Point;
    /// use gridwalk_space::Grid;
    ///
    /// let grid = Grid::from_lines("#.\n.#".lines());
    /// assert_eq!(grid.at(Point::new(1, 1)), Some(&'#'));
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            lines
                .into_iter()
                .map(|line| line.as_ref().chars().collect())
                .collect(),
        )
    }
}

impl Grid<u32> {
    /// One decimal digit per cell.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidCell`] for the first character that is not an
    /// ASCII digit, in row-major order.
    pub fn digits_from_lines<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_lines_with(lines, |point, ch| {
            ch.to_digit(10).ok_or(GridError::InvalidCell { point, ch })
        })
    }
}

impl<T> Grid<T> {
    /// Parse every character through `parse`, stopping at the first error.
    ///
    /// Input with more lines, or longer lines, than an `i32` can index
    /// fails with [`GridError::TooLarge`] converted into `E`.
    ///
    /// `parse` receives the cell's point along with the character, so it can
    /// report precise errors or record positions of interest.
    ///
    /// ```
    /// use gridwalk_core::Point;
    /// use gridwalk_space::{Grid, GridError};
    ///
    /// let walls = Grid::from_lines_with(["#.", ".#"], |point, ch| match ch {
    ///     '#' => Ok(true),
    ///     '.' => Ok(false),
    ///     _ => Err(GridError::InvalidCell { point, ch }),
    /// })
    /// .unwrap();
    /// assert_eq!(walls.at(Point::new(0, 0)), Some(&true));
    /// ```
    pub fn from_lines_with<I, S, E, F>(lines: I, mut parse: F) -> Result<Self, E>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        E: From<GridError>,
        F: FnMut(Point, char) -> Result<T, E>,
    {
        let mut data = Vec::new();
        for (row, line) in lines.into_iter().enumerate() {
            let cells = line
                .as_ref()
                .chars()
                .enumerate()
                .map(|(col, ch)| parse(point_from_indices(row, col)?, ch))
                .collect::<Result<Vec<T>, E>>()?;
            data.push(cells);
        }
        Ok(Self::try_new(data)?)
    }
}

fn point_from_indices(row: usize, col: usize) -> Result<Point, GridError> {
    match (i32::try_from(row), i32::try_from(col)) {
        (Ok(r), Ok(c)) => Ok(Point::new(r, c)),
        _ => Err(GridError::TooLarge {
            rows: row.saturating_add(1),
            cols: col.saturating_add(1),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Characters ──────────────────────────────────────────────

    #[test]
    fn char_grid_matches_lines() {
        let grid = Grid::from_lines(["abc", "def"]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.at(Point::new(1, 0)), Some(&'d'));
        assert_eq!(grid.to_string(), "[a, b, c]\n[d, e, f]");
    }

    #[test]
    fn ragged_lines_leave_absent_cells() {
        let grid = Grid::from_lines(vec![String::from("ab"), String::from("c")]);
        assert!(grid.bounds_contain(Point::new(1, 1)));
        assert!(!grid.exists(Point::new(1, 1)));
    }

    #[test]
    fn no_lines_is_empty() {
        let grid = Grid::from_lines(Vec::<&str>::new());
        assert!(grid.is_empty());
        assert_eq!(grid.rows(), 0);
    }

    // ── Digits ──────────────────────────────────────────────────

    #[test]
    fn digit_grid_parses() {
        let grid = Grid::digits_from_lines("0123\n9876".lines()).unwrap();
        assert_eq!(grid.at(Point::new(0, 3)), Some(&3));
        assert_eq!(grid.at(Point::new(1, 0)), Some(&9));
    }

    #[test]
    fn digit_grid_reports_first_bad_cell() {
        let err = Grid::digits_from_lines(["01", "2x", "y3"]).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidCell {
                point: Point::new(1, 1),
                ch: 'x'
            }
        );
        assert_eq!(err.to_string(), "invalid cell 'x' at 1,1");
    }

    // ── Custom parsers ──────────────────────────────────────────

    #[test]
    fn custom_parser_sees_points() {
        let mut starts = Vec::new();
        let grid = Grid::from_lines_with([".S", "S."], |point, ch| {
            if ch == 'S' {
                starts.push(point);
            }
            Ok::<_, GridError>(ch == '.')
        })
        .unwrap();
        assert_eq!(starts, vec![Point::new(0, 1), Point::new(1, 0)]);
        assert_eq!(grid.at(Point::new(0, 0)), Some(&true));
    }

    #[test]
    fn indices_beyond_i32_are_an_error() {
        let limit = i32::MAX as usize;
        assert_eq!(point_from_indices(limit, 0), Ok(Point::new(i32::MAX, 0)));
        assert_eq!(
            point_from_indices(3, limit + 1),
            Err(GridError::TooLarge {
                rows: 4,
                cols: limit + 2
            })
        );
    }
}
