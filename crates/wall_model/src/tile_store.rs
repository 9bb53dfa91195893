//! The authoritative tile collection and its selection
//!
//! Tiles are identified by their position in the collection. Removing a
//! tile shifts every later tile down by one, and the selection is re-mapped
//! in the same call so it never points at the wrong tile.

use crate::{ModelError, Result, Selection, Tile, TileId, TilePatch};

/// Extra scroll space below the lowest tile
pub const CANVAS_BOTTOM_PADDING: f64 = 200.0;

#[derive(Debug, Clone)]
struct StoredTile {
    id: TileId,
    tile: Tile,
}

impl StoredTile {
    fn new(tile: Tile) -> Self {
        Self {
            id: TileId::new(),
            tile,
        }
    }
}

/// Ordered tile collection plus selection set for one editing session
#[derive(Debug, Clone, Default)]
pub struct TileStore {
    tiles: Vec<StoredTile>,
    selection: Selection,
}

impl TileStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `tiles`, with nothing selected
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self {
            tiles: tiles.into_iter().map(StoredTile::new).collect(),
            selection: Selection::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index).map(|stored| &stored.tile)
    }

    /// Like [`TileStore::get`], failing with `IndexOutOfRange`
    pub fn tile(&self, index: usize) -> Result<&Tile> {
        self.get(index).ok_or(self.out_of_range(index))
    }

    /// Tiles in collection order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter().map(|stored| &stored.tile)
    }

    /// Owned copy of the collection, for handing to persistence
    pub fn snapshot(&self) -> Vec<Tile> {
        self.tiles().cloned().collect()
    }

    pub fn id_of(&self, index: usize) -> Option<TileId> {
        self.tiles.get(index).map(|stored| stored.id)
    }

    pub fn index_of(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|stored| stored.id == id)
    }

    /// Append a tile. Returns its index.
    pub fn add(&mut self, tile: Tile) -> usize {
        self.tiles.push(StoredTile::new(tile));
        let index = self.tiles.len() - 1;
        tracing::debug!("Added tile {} ({})", index, self.tiles[index].tile.media.src);
        index
    }

    /// Remove the tile at `index` and re-map the selection
    pub fn remove(&mut self, index: usize) -> Result<Tile> {
        if index >= self.tiles.len() {
            return Err(self.out_of_range(index));
        }
        let stored = self.tiles.remove(index);
        self.selection.reindex_after_removal(index);
        tracing::debug!("Removed tile {}", index);
        Ok(stored.tile)
    }

    /// Merge `patch` into the tile at `index`
    pub fn update(&mut self, index: usize, patch: &TilePatch) -> Result<()> {
        let len = self.tiles.len();
        let stored = self
            .tiles
            .get_mut(index)
            .ok_or(ModelError::IndexOutOfRange { index, len })?;
        patch.apply_to(&mut stored.tile);
        Ok(())
    }

    /// Replace the whole collection (loading a layout); clears the selection
    pub fn replace_all(&mut self, tiles: Vec<Tile>) {
        tracing::debug!("Replacing collection with {} tiles", tiles.len());
        *self = Self::from_tiles(tiles);
    }

    /// Empty the collection and the selection
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.selection.clear();
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Toggle selection of `index`. Returns whether it is now selected.
    pub fn toggle_selection(&mut self, index: usize) -> Result<bool> {
        if index >= self.tiles.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.selection.toggle(index))
    }

    /// Select every tile in collection order
    pub fn select_all(&mut self) {
        self.selection = Selection::all(self.tiles.len());
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Shift every selected tile down by `offset` pixels (up when negative)
    pub fn move_selected_vertically(&mut self, offset: f64) {
        for index in self.selection.iter() {
            if let Some(stored) = self.tiles.get_mut(index) {
                stored.tile.y += offset;
            }
        }
    }

    /// Height of the scrollable canvas needed to show every tile
    pub fn content_height(&self) -> Option<f64> {
        self.tiles()
            .map(Tile::bottom)
            .reduce(f64::max)
            .map(|bottom| bottom + CANVAS_BOTTOM_PADDING)
    }

    fn out_of_range(&self, index: usize) -> ModelError {
        ModelError::IndexOutOfRange {
            index,
            len: self.tiles.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MediaSource;

    fn tile(name: &str, x: f64, y: f64) -> Tile {
        Tile::new(MediaSource::new(name), x, y, 100.0, 80.0)
    }

    fn store_with(count: usize) -> TileStore {
        let mut store = TileStore::new();
        for i in 0..count {
            store.add(tile(&format!("{i}.png"), i as f64 * 10.0, 0.0));
        }
        store
    }

    #[test]
    fn test_add_appends() {
        let mut store = TileStore::new();
        assert_eq!(store.add(tile("a.png", 0.0, 0.0)), 0);
        assert_eq!(store.add(tile("a.png", 0.0, 0.0)), 1);
        assert_eq!(store.len(), 2);
        assert_ne!(store.id_of(0), store.id_of(1));
    }

    #[test]
    fn test_remove_reindexes_selection() {
        let mut store = store_with(5);
        for i in [1, 3, 4] {
            store.toggle_selection(i).unwrap();
        }
        let removed = store.remove(2).unwrap();
        assert_eq!(removed.media.src, "2.png");
        assert_eq!(store.selection().indices(), &[1, 2, 3]);
        assert_eq!(store.get(2).unwrap().media.src, "3.png");
    }

    #[test]
    fn test_remove_out_of_range_is_rejected() {
        let mut store = store_with(2);
        store.toggle_selection(1).unwrap();
        assert_eq!(
            store.remove(2),
            Err(ModelError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(store.len(), 2);
        assert_eq!(store.selection().indices(), &[1]);
    }

    #[test]
    fn test_ids_follow_tiles_across_removal() {
        let mut store = store_with(3);
        let id = store.id_of(2).unwrap();
        store.remove(0).unwrap();
        assert_eq!(store.index_of(id), Some(1));
    }

    #[test]
    fn test_update_merges_fields() {
        let mut store = store_with(2);
        store.update(1, &TilePatch::position(5.0, 6.0)).unwrap();
        let updated = store.get(1).unwrap();
        assert_eq!((updated.x, updated.y), (5.0, 6.0));
        assert_eq!((updated.width, updated.height), (100.0, 80.0));

        assert_eq!(
            store.update(7, &TilePatch::position(0.0, 0.0)),
            Err(ModelError::IndexOutOfRange { index: 7, len: 2 })
        );
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut store = store_with(3);
        store.toggle_selection(2).unwrap();
        store.select_all();
        assert_eq!(store.selection().indices(), &[0, 1, 2]);
        store.clear_selection();
        assert!(store.selection().is_empty());

        store.select_all();
        store.clear();
        assert!(store.is_empty());
        assert!(store.selection().is_empty());
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut store = store_with(1);
        assert!(store.toggle_selection(1).is_err());
        assert!(store.selection().is_empty());
    }

    #[test]
    fn test_move_selected_vertically() {
        let mut store = store_with(3);
        store.toggle_selection(0).unwrap();
        store.toggle_selection(2).unwrap();
        store.move_selected_vertically(-25.0);

        assert_eq!(store.get(0).unwrap().y, -25.0);
        assert_eq!(store.get(1).unwrap().y, 0.0);
        assert_eq!(store.get(2).unwrap().y, -25.0);
        assert_eq!(store.get(2).unwrap().x, 20.0);
        assert_eq!(store.get(2).unwrap().width, 100.0);
    }

    #[test]
    fn test_replace_all_clears_selection() {
        let mut store = store_with(3);
        store.select_all();
        store.replace_all(vec![tile("new.mp4", 0.0, 0.0)]);
        assert_eq!(store.len(), 1);
        assert!(store.selection().is_empty());
    }

    #[test]
    fn test_content_height() {
        let mut store = TileStore::new();
        assert_eq!(store.content_height(), None);
        store.add(tile("a.png", 0.0, 10.0));
        store.add(tile("b.png", 0.0, 300.0));
        assert_eq!(store.content_height(), Some(300.0 + 80.0 + 200.0));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut store = store_with(2);
        let snapshot = store.snapshot();
        store.update(0, &TilePatch::position(99.0, 99.0)).unwrap();
        assert_eq!(snapshot[0].x, 0.0);
        assert_eq!(snapshot.len(), 2);
    }
}
