//! Set-based exact cover search with pentomino rectangle tilings as its client
//!
//! The core is Knuth's Algorithm X written over plain ordered sets: given a
//! universe and a family of subsets, [`exact_covers`] lazily yields every way
//! to partition the universe with sets from the family. The remaining modules
//! turn rectangle tiling into exact cover and present the results.

#![forbid(unsafe_code)]

/// Exact cover search, pivot selection and the choice bitset
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Polyomino shapes, rectangle tiling problems and their results
pub mod spatial;

pub use algorithm::exact_cover::{ExactCovers, Solution, exact_covers};
pub use io::error::{CoverError, Result};
