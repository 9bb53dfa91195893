//! Internal tile identifiers

use uuid::Uuid;

/// Stable identifier for a stored tile.
///
/// Tiles are addressed by index everywhere in the public API; the id only
/// survives re-indexing so per-tile gesture state can follow a tile after
/// an earlier tile is removed. It is never written to a layout file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(Uuid);

impl TileId {
    /// Create a new random TileId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TileId {
    fn default() -> Self {
        Self::new()
    }
}
