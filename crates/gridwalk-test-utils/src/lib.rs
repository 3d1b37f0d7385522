//! Test fixtures and invariant checkers for gridwalk development.
//!
//! [`fixtures`] holds small puzzle inputs with known answers; [`checks`]
//! holds reusable assertions for the invariants every range set and
//! traversal path must satisfy.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod checks;
pub mod fixtures;

pub use checks::{assert_consolidated, assert_simple_path, covered_points};
pub use fixtures::{Almanac, AlmanacError};
