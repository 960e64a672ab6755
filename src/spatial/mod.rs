//! Geometry of the tiling client
//!
//! This module contains:
//! - Polyomino shapes and their orientations
//! - Rectangle tiling problems expressed as exact cover
//! - Tilings recovered from covers

/// Polyomino shapes, rotations and reflections
pub mod polyomino;
/// Rectangle tiling problem setup
pub mod rectangle;
/// Tilings recovered from exact covers
pub mod tiling;

pub use rectangle::{Item, RectangleProblem};
pub use tiling::Tiling;
