//! Gridwalk: grid geometry, BFS/DFS traversal and integer range remapping.
//!
//! This is the facade crate that re-exports the public API of every
//! gridwalk sub-crate.
//!
//! # Quick start
//!
//! ```rust
//! use gridwalk::prelude::*;
//!
//! // Count trails that climb by one from a 0 to a 4.
//! let grid = Grid::new(vec![vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, 4]]);
//! let result = grid.traverse(Point::ORIGIN, &TraverseOptions::dfs(), 0, |trails, visit| {
//!     let climbs = match (visit.path.last().and_then(|s| s.value), visit.value) {
//!         (None, Some(&h)) => h == 0,
//!         (Some(&prev), Some(&h)) => h == prev + 1,
//!         _ => false,
//!     };
//!     if !climbs {
//!         return VisitDecision::prune();
//!     }
//!     if visit.value == Some(&4) {
//!         *trails += 1;
//!         return VisitDecision::prune();
//!     }
//!     VisitDecision::expand()
//! });
//! assert_eq!(result.custom, 6);
//!
//! // Map a seed range through one stage.
//! let mut soil = TransformMap::new("seed", "soil");
//! soil.add_range(52, 50, 48).unwrap();
//! assert_eq!(soil.map_range(Range::new(79, 14).unwrap()), vec![Range::new(81, 14).unwrap()]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridwalk-core` | `Point`, `Vector`, direction sets, IDs, memoization, integer math |
//! | [`space`] | `gridwalk-space` | `Grid<T>`, parsing, rays, BFS/DFS traversal |
//! | [`range`] | `gridwalk-range` | `Range`, consolidation, transform maps, binary search |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate algebra and small helpers (`gridwalk-core`).
pub use gridwalk_core as types;

/// Grids and traversal (`gridwalk-space`).
///
/// [`space::Grid::traverse`] is the BFS/DFS walker; configure it with
/// [`space::TraverseOptions`].
pub use gridwalk_space as space;

/// Ranges and range remapping (`gridwalk-range`).
pub use gridwalk_range as range;

/// Common imports for typical gridwalk usage.
///
/// ```rust
/// use gridwalk::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use gridwalk_core::{DirectionSet, Point, Vector};

    // Helpers
    pub use gridwalk_core::{EntityId, IdCounter, Memo};

    // Grid and traversal
    pub use gridwalk_space::{
        Grid, Path, Step, TraverseMode, TraverseOptions, Visit, VisitDecision, VisitedScope,
    };

    // Ranges
    pub use gridwalk_range::{consolidate_ranges, Range, RangePipeline, TransformMap};

    // Errors
    pub use gridwalk_core::{GeometryError, ParsePointError};
    pub use gridwalk_range::RangeError;
    pub use gridwalk_space::GridError;
}
