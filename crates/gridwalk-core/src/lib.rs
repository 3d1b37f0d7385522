//! Core types and helpers for the gridwalk toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the coordinate algebra shared by every other crate: [`Point`],
//! [`Vector`], [`DirectionSet`], plus a few small helpers puzzle code
//! reaches for repeatedly (explicit ID counters, memoization, integer
//! math).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod id;
pub mod math;
pub mod memo;
pub mod point;
pub mod vector;

pub use direction::DirectionSet;
pub use error::{GeometryError, ParsePointError};
pub use id::{EntityId, IdCounter};
pub use math::{gcd, lcm, lcm_of};
pub use memo::Memo;
pub use point::Point;
pub use vector::Vector;
