//! Dense 2D grids and the traversal machinery built on them.
//!
//! [`Grid<T>`] maps [`Point`](gridwalk_core::Point)s to values, answers
//! bounds and existence queries, and iterates its cells in row-major order.
//! [`Grid::traverse`] is a single BFS/DFS walker whose behaviour is decided
//! by a caller-supplied visit policy.
//!
//! # Traversal
//!
//! Every pending visit carries its own [`Path`], and the path doubles as
//! that branch's visited set. Two branches may therefore pass through the
//! same cell, which path-dependent searches (strictly ascending trails,
//! for example) rely on. [`VisitedScope::Global`] switches to a single
//! shared visited set when plain reachability is all that matters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod parse;
pub mod path;
pub mod ray;
pub mod traverse;

pub use error::GridError;
pub use grid::Grid;
pub use path::{Path, Step};
pub use ray::Ray;
pub use traverse::{
    Traversal, TraversalStats, TraverseMode, TraverseOptions, Visit, VisitDecision, VisitedScope,
};
