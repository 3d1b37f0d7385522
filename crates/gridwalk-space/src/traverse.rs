//! Generic BFS/DFS traversal driven by a visit policy.
//!
//! [`Grid::traverse`] pops pending visits from a frontier (a queue for
//! [`TraverseMode::Bfs`], a stack for [`TraverseMode::Dfs`]), hands each
//! one to the caller's `on_visit` callback and acts on the returned
//! [`VisitDecision`]:
//!
//! - `abort` ends the whole traversal immediately.
//! - `visit_neighbours` marks the point visited and enqueues one successor
//!   per configured direction, skipping successors that are out of bounds
//!   or already visited.
//! - neither: this branch stops, other pending branches carry on.
//!
//! # Visited sets
//!
//! Under [`VisitedScope::PerBranch`] (the default) each pending visit owns
//! the set of points on its own path, so two different routes may both pass
//! through a cell. The path is a persistent [`Path`], so this costs one
//! shared node per expansion rather than a set copy. Under
//! [`VisitedScope::Global`] a point expanded once is never expanded again.
//!
//! # Example
//!
//! ```
//! use gridwalk_core::Point;
//! use gridwalk_space::{Grid, TraverseOptions, VisitDecision};
//!
//! // Count the cells reachable from the top-left corner through '.' cells.
//! let grid = Grid::new(vec![
//!     vec!['.', '.', '#'],
//!     vec!['#', '.', '#'],
//!     vec!['.', '.', '.'],
//! ]);
//! let options = TraverseOptions::bfs().with_scope(gridwalk_space::VisitedScope::Global);
//! let result = grid.traverse(Point::ORIGIN, &options, 0usize, |reached, visit| {
//!     if visit.value != Some(&'.') {
//!         return VisitDecision::prune();
//!     }
//!     *reached += 1;
//!     VisitDecision::expand()
//! });
//! assert_eq!(result.custom, 6);
//! assert!(!result.stats.aborted);
//! ```

use std::collections::VecDeque;

use gridwalk_core::{DirectionSet, Point};
use indexmap::IndexSet;

use crate::grid::Grid;
use crate::path::{Path, Step};

/// Frontier discipline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TraverseMode {
    /// Breadth-first: the frontier is a FIFO queue.
    #[default]
    Bfs,
    /// Depth-first: the frontier is a LIFO stack.
    Dfs,
}

/// Which visited set a pending visit is checked against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisitedScope {
    /// Each branch tracks the points on its own path.
    #[default]
    PerBranch,
    /// One set shared by the whole traversal.
    Global,
}

/// Traversal configuration.
///
/// Defaults: BFS, the four cardinal directions, per-branch visited sets.
///
/// ```
/// use gridwalk_core::DirectionSet;
/// use gridwalk_space::{TraverseMode, TraverseOptions, VisitedScope};
///
/// let options = TraverseOptions::dfs()
///     .with_directions(DirectionSet::octile())
///     .with_scope(VisitedScope::Global);
/// assert_eq!(options.mode(), TraverseMode::Dfs);
/// assert_eq!(options.directions().len(), 8);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraverseOptions {
    mode: TraverseMode,
    directions: DirectionSet,
    scope: VisitedScope,
}

impl TraverseOptions {
    /// Default options with the given mode.
    pub fn new(mode: TraverseMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Default breadth-first options.
    pub fn bfs() -> Self {
        Self::new(TraverseMode::Bfs)
    }

    /// Default depth-first options.
    pub fn dfs() -> Self {
        Self::new(TraverseMode::Dfs)
    }

    /// Replace the direction set used to generate successors.
    pub fn with_directions(mut self, directions: DirectionSet) -> Self {
        self.directions = directions;
        self
    }

    /// Replace the visited-set scope.
    pub fn with_scope(mut self, scope: VisitedScope) -> Self {
        self.scope = scope;
        self
    }

    /// Frontier discipline.
    pub fn mode(&self) -> TraverseMode {
        self.mode
    }

    /// Successor directions, in enqueue order.
    pub fn directions(&self) -> &DirectionSet {
        &self.directions
    }

    /// Visited-set scope.
    pub fn scope(&self) -> VisitedScope {
        self.scope
    }
}

/// What the traversal should do after a visit.
///
/// There is no `Default`: both fields are always spelled out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct VisitDecision {
    /// Stop the entire traversal now.
    pub abort: bool,
    /// Mark this point visited and enqueue its neighbours.
    pub visit_neighbours: bool,
}

impl VisitDecision {
    /// Keep going through this point's neighbours.
    pub const fn expand() -> Self {
        Self {
            abort: false,
            visit_neighbours: true,
        }
    }

    /// Stop this branch only.
    pub const fn prune() -> Self {
        Self {
            abort: false,
            visit_neighbours: false,
        }
    }

    /// Stop the whole traversal.
    pub const fn abort() -> Self {
        Self {
            abort: true,
            visit_neighbours: false,
        }
    }
}

/// Everything the callback learns about the visit in progress.
pub struct Visit<'v, 'g, T> {
    /// The point being visited.
    pub point: Point,
    /// The grid value at `point` (`None` if absent or out of bounds).
    pub value: Option<&'g T>,
    /// The steps taken to get here, not including `point` itself.
    pub path: &'v Path<'g, T>,
}

impl<T> Visit<'_, '_, T> {
    /// Number of steps from the start; `0` for the start itself.
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

/// Counters collected during one traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Callback invocations.
    pub visits: usize,
    /// Pending visits dropped because their point was already visited.
    pub skipped: usize,
    /// Pending visits pushed onto the frontier, the start included.
    pub enqueued: usize,
    /// Whether a callback requested an abort.
    pub aborted: bool,
}

/// The result of [`Grid::traverse`].
///
/// `custom` is the caller's context as the last callback left it.
#[derive(Clone, Debug)]
pub struct Traversal<C> {
    /// Caller-defined context threaded through every visit.
    pub custom: C,
    /// The directions the traversal expanded along.
    pub directions: DirectionSet,
    /// Visit counters.
    pub stats: TraversalStats,
}

struct Pending<'g, T> {
    point: Point,
    value: Option<&'g T>,
    path: Path<'g, T>,
}

impl<T> Grid<T> {
    /// Explore the grid from `start`.
    ///
    /// `custom` is moved into the traversal, lent to every `on_visit` call
    /// and handed back in the returned [`Traversal`]. The callback runs once
    /// per dequeued, not-yet-visited candidate, `start` included even when
    /// it lies outside the grid. Successors are only enqueued inside the
    /// grid bounds, so on a finite grid the traversal always terminates.
    pub fn traverse<'g, C, F>(
        &'g self,
        start: Point,
        options: &TraverseOptions,
        custom: C,
        mut on_visit: F,
    ) -> Traversal<C>
    where
        F: FnMut(&mut C, &Visit<'_, 'g, T>) -> VisitDecision,
    {
        let mut custom = custom;
        let mut stats = TraversalStats::default();
        let mut expanded: IndexSet<Point> = IndexSet::new();
        let mut frontier: VecDeque<Pending<'g, T>> = VecDeque::new();

        frontier.push_back(Pending {
            point: start,
            value: self.at(start),
            path: Path::new(),
        });
        stats.enqueued += 1;

        loop {
            let pending = match options.mode {
                TraverseMode::Bfs => frontier.pop_front(),
                TraverseMode::Dfs => frontier.pop_back(),
            };
            let Some(pending) = pending else { break };

            let already_visited = match options.scope {
                VisitedScope::PerBranch => pending.path.contains(pending.point),
                VisitedScope::Global => expanded.contains(&pending.point),
            };
            if already_visited {
                stats.skipped += 1;
                continue;
            }

            stats.visits += 1;
            let decision = on_visit(
                &mut custom,
                &Visit {
                    point: pending.point,
                    value: pending.value,
                    path: &pending.path,
                },
            );
            if decision.abort {
                stats.aborted = true;
                tracing::trace!(point = %pending.point, "traversal aborted by visit policy");
                break;
            }
            if !decision.visit_neighbours {
                continue;
            }

            if options.scope == VisitedScope::Global {
                expanded.insert(pending.point);
            }
            let path = pending.path.push(Step {
                point: pending.point,
                value: pending.value,
            });
            tracing::trace!(point = %pending.point, depth = pending.path.len(), "expanding");

            for vector in options.directions() {
                let Some(point) = pending.point.checked_apply(vector) else {
                    continue;
                };
                if !self.bounds_contain(point) {
                    continue;
                }
                let seen = match options.scope {
                    VisitedScope::PerBranch => path.contains(point),
                    VisitedScope::Global => expanded.contains(&point),
                };
                if seen {
                    continue;
                }
                frontier.push_back(Pending {
                    point,
                    value: self.at(point),
                    path: path.clone(),
                });
                stats.enqueued += 1;
            }
        }

        tracing::debug!(
            mode = ?options.mode,
            scope = ?options.scope,
            start = %start,
            visits = stats.visits,
            skipped = stats.skipped,
            enqueued = stats.enqueued,
            aborted = stats.aborted,
            "traversal finished"
        );

        Traversal {
            custom,
            directions: options.directions.clone(),
            stats,
        }
    }
}
