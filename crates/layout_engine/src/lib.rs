//! Layout Engine - Snapping and row fitting
//!
//! This crate holds the pure geometry of the media wall: grid and neighbor
//! snapping for single tiles, and the fit-and-scale algorithm that packs a
//! selection of tiles into one row.

mod error;
mod geometry;
mod row_fit;

pub use error::*;
pub use geometry::*;
pub use row_fit::*;
