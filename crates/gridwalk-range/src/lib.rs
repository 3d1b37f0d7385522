//! Closed integer intervals and the piecewise remapping built on them.
//!
//! A [`Range`] covers `[lower, upper]` with at least one point.
//! [`consolidate_ranges`] reduces any collection of ranges to the minimal
//! sorted set with the same coverage. A [`TransformMap`] translates values
//! through disjoint offset sub-ranges, identity elsewhere, and
//! [`TransformMap::map_range`] splits whole ranges along sub-range
//! boundaries. [`RangePipeline`] chains maps, consolidating between stages.
//!
//! The [`search`] module holds the binary-search helpers used to locate the
//! transition point of a monotone predicate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pipeline;
pub mod range;
pub mod search;
pub mod transform;

pub use error::RangeError;
pub use pipeline::RangePipeline;
pub use range::{consolidate_ranges, Range};
pub use search::{binary_midpoint, find_transition, first_true};
pub use transform::{MappingRange, TransformMap};
