//! Persistent traversal paths with structural sharing.

use std::fmt;
use std::rc::Rc;

use gridwalk_core::Point;

/// One step of a traversal path: a point and the grid value found there.
///
/// `value` is `None` for a start point outside the grid or an absent cell.
pub struct Step<'g, T> {
    /// Where the step landed.
    pub point: Point,
    /// The grid value at `point`, borrowed from the grid.
    pub value: Option<&'g T>,
}

impl<T> Clone for Step<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Step<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Step<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("point", &self.point)
            .field("value", &self.value)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Step<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point && self.value == other.value
    }
}

impl<T: Eq> Eq for Step<'_, T> {}

struct Node<'g, T> {
    step: Step<'g, T>,
    parent: Option<Rc<Node<'g, T>>>,
}

/// An immutable path of [`Step`]s from a traversal's start.
///
/// Extending a path shares the existing prefix instead of copying it, so
/// sibling branches of a traversal hold one common ancestry and cloning a
/// path is O(1). Lookups walk the chain from the newest step backwards:
/// [`last`](Self::last) is O(1), [`contains`](Self::contains) is O(len).
pub struct Path<'g, T> {
    head: Option<Rc<Node<'g, T>>>,
    len: usize,
}

impl<'g, T> Path<'g, T> {
    /// The empty path.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// A new path equal to `self` followed by `step`. `self` is unchanged.
    pub fn push(&self, step: Step<'g, T>) -> Self {
        Self {
            head: Some(Rc::new(Node {
                step,
                parent: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the path has no steps.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The most recent step.
    pub fn last(&self) -> Option<&Step<'g, T>> {
        self.head.as_deref().map(|node| &node.step)
    }

    /// The first step.
    pub fn first(&self) -> Option<&Step<'g, T>> {
        self.iter_rev().last()
    }

    /// Whether any step landed on `point`.
    pub fn contains(&self, point: Point) -> bool {
        self.iter_rev().any(|step| step.point == point)
    }

    /// Iterate steps from the most recent back to the first.
    pub fn iter_rev(&self) -> IterRev<'_, 'g, T> {
        IterRev {
            next: self.head.as_deref(),
        }
    }

    /// The steps in travel order, first to most recent.
    pub fn to_vec(&self) -> Vec<Step<'g, T>> {
        let mut steps: Vec<Step<'g, T>> = self.iter_rev().copied().collect();
        steps.reverse();
        steps
    }

    /// The points in travel order, first to most recent.
    pub fn points(&self) -> Vec<Point> {
        let mut points: Vec<Point> = self.iter_rev().map(|step| step.point).collect();
        points.reverse();
        points
    }
}

impl<T> Default for Path<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Path<'_, T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Path<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}

// Unlink iteratively: the default recursive drop overflows the stack on
// paths a few tens of thousands of steps long.
impl<T> Drop for Path<'_, T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator over a [`Path`] from newest to oldest step.
///
/// Created by [`Path::iter_rev`].
pub struct IterRev<'a, 'g, T> {
    next: Option<&'a Node<'g, T>>,
}

impl<'a, 'g, T> Iterator for IterRev<'a, 'g, T> {
    type Item = &'a Step<'g, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent.as_deref();
        Some(&node.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(row: i32, col: i32, value: &u8) -> Step<'_, u8> {
        Step {
            point: Point::new(row, col),
            value: Some(value),
        }
    }

    #[test]
    fn push_leaves_original_untouched() {
        let v = 7u8;
        let base = Path::new().push(step(0, 0, &v));
        let left = base.push(step(0, 1, &v));
        let right = base.push(step(1, 0, &v));
        assert_eq!(base.len(), 1);
        assert_eq!(left.points(), vec![Point::new(0, 0), Point::new(0, 1)]);
        assert_eq!(right.points(), vec![Point::new(0, 0), Point::new(1, 0)]);
        assert!(!left.contains(Point::new(1, 0)));
        assert!(right.contains(Point::new(1, 0)));
    }

    #[test]
    fn last_and_first() {
        let (a, b) = (1u8, 2u8);
        let path = Path::new().push(step(0, 0, &a)).push(step(0, 1, &b));
        assert_eq!(path.last().and_then(|s| s.value), Some(&2));
        assert_eq!(path.first().and_then(|s| s.value), Some(&1));
        assert!(Path::<u8>::new().last().is_none());
    }

    #[test]
    fn to_vec_is_in_travel_order() {
        let v = 0u8;
        let mut path = Path::new();
        for col in 0..5 {
            path = path.push(step(0, col, &v));
        }
        let cols: Vec<i32> = path.to_vec().iter().map(|s| s.point.col).collect();
        assert_eq!(cols, vec![0, 1, 2, 3, 4]);
        let rev: Vec<i32> = path.iter_rev().map(|s| s.point.col).collect();
        assert_eq!(rev, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn dropping_a_very_long_path_does_not_overflow() {
        let v = 0u8;
        let mut path = Path::new();
        for i in 0..200_000 {
            path = path.push(step(i, 0, &v));
        }
        assert_eq!(path.len(), 200_000);
        drop(path);
    }

    #[test]
    fn dropping_a_branch_keeps_shared_prefix_alive() {
        let v = 0u8;
        let base = Path::new().push(step(0, 0, &v)).push(step(0, 1, &v));
        let branch = base.push(step(0, 2, &v));
        drop(branch);
        assert_eq!(base.len(), 2);
        assert_eq!(base.points(), vec![Point::new(0, 0), Point::new(0, 1)]);
    }
}
