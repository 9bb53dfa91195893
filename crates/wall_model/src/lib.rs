//! Wall Model - Tiles, selection, and the tile store
//!
//! This crate provides the in-memory model of a media wall: an ordered
//! collection of placed media tiles plus an order-preserving selection of
//! tile indices. All mutations go through [`TileStore`].

mod error;
mod selection;
mod tile;
mod tile_id;
mod tile_store;

pub use error::*;
pub use selection::*;
pub use tile::*;
pub use tile_id::*;
pub use tile_store::*;
