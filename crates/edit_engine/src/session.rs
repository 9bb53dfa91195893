//! Editing session
//!
//! One [`EditorSession`] exists per open wall. It owns the tile store and
//! the gesture state, and every user command goes through it so that a
//! rejected command leaves the store exactly as it was.

use crate::{GestureInterpreter, PositionEdit, Result, ScaleEdit, SizeEdit, SnapSettings};
use layout_engine::{apply_row_fit, Point, Rect, RowFitMode, RowFitRequest, RowPlacement};
use wall_model::{Tile, TileStore};

/// Mutable state of one media wall being edited
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    store: TileStore,
    gestures: GestureInterpreter,
    row_fit_mode: RowFitMode,
}

impl EditorSession {
    pub fn new(snap: SnapSettings, row_fit_mode: RowFitMode) -> Self {
        Self {
            store: TileStore::new(),
            gestures: GestureInterpreter::new(snap),
            row_fit_mode,
        }
    }

    pub fn store(&self) -> &TileStore {
        &self.store
    }

    pub fn snap_settings(&self) -> &SnapSettings {
        self.gestures.snap_settings()
    }

    pub fn set_snap_settings(&mut self, snap: SnapSettings) {
        self.gestures.set_snap_settings(snap);
    }

    pub fn row_fit_mode(&self) -> RowFitMode {
        self.row_fit_mode
    }

    pub fn set_row_fit_mode(&mut self, mode: RowFitMode) {
        self.row_fit_mode = mode;
    }

    /// Owned copy of the tiles, taken before handing them to a save
    pub fn snapshot(&self) -> Vec<Tile> {
        self.store.snapshot()
    }

    /// Replace the wall with the tiles of a loaded layout
    pub fn load_tiles(&mut self, tiles: Vec<Tile>) {
        self.store.replace_all(tiles);
        self.gestures.reset();
    }

    /// Add imported media at the default position. Returns its index.
    pub fn import_media(&mut self, src: impl Into<String>, natural_size: Option<(f64, f64)>) -> usize {
        self.store.add(Tile::imported(src, natural_size))
    }

    pub fn remove_tile(&mut self, index: usize) -> Result<Tile> {
        let removed = self.store.remove(index)?;
        self.gestures.forget_missing(&self.store);
        Ok(removed)
    }

    /// Remove every tile ("clear page")
    pub fn clear(&mut self) {
        self.store.clear();
        self.gestures.reset();
    }

    pub fn toggle_selection(&mut self, index: usize) -> Result<bool> {
        Ok(self.store.toggle_selection(index)?)
    }

    pub fn select_all(&mut self) {
        self.store.select_all();
    }

    pub fn clear_selection(&mut self) {
        self.store.clear_selection();
    }

    pub fn move_selected_vertically(&mut self, offset: f64) {
        self.store.move_selected_vertically(offset);
    }

    /// Pack the selection into a row across `canvas_width`.
    ///
    /// Uses the snap spacing as the gap between tiles and the session's
    /// row fit mode.
    pub fn fit_selected_row(&mut self, canvas_width: f64) -> Result<Vec<RowPlacement>> {
        self.fit_selected_row_spaced(canvas_width, self.snap_settings().spacing)
    }

    /// Like [`EditorSession::fit_selected_row`] with an explicit gap; zero packs tiles edge to edge
    pub fn fit_selected_row_spaced(&mut self, canvas_width: f64, spacing: f64) -> Result<Vec<RowPlacement>> {
        let request = RowFitRequest::new(spacing, canvas_width, self.row_fit_mode);
        match apply_row_fit(&mut self.store, &request) {
            Ok(placements) => Ok(placements),
            Err(e) => {
                tracing::warn!("Row fit rejected: {}", e);
                Err(e.into())
            }
        }
    }

    pub fn preview_drag(&self, index: usize, x: f64, y: f64) -> Result<Point> {
        self.gestures.preview_drag(&self.store, index, x, y)
    }

    pub fn commit_drag(&mut self, index: usize, x: f64, y: f64) -> Result<Point> {
        self.gestures.commit_drag(&mut self.store, index, x, y)
    }

    pub fn commit_resize(&mut self, index: usize, width: f64, height: f64, x: f64, y: f64) -> Result<Rect> {
        self.gestures.commit_resize(&mut self.store, index, width, height, x, y)
    }

    /// Apply a typed position. Invalid text leaves the tile untouched.
    pub fn edit_position(&mut self, index: usize, edit: &PositionEdit) -> Result<()> {
        self.store.tile(index)?;
        let patch = edit.resolve().inspect_err(|e| tracing::warn!("Position edit discarded: {}", e))?;
        Ok(self.store.update(index, &patch)?)
    }

    /// Apply a typed size. Invalid or non-positive sizes are discarded.
    pub fn edit_size(&mut self, index: usize, edit: &SizeEdit) -> Result<()> {
        self.store.tile(index)?;
        let patch = edit.resolve().inspect_err(|e| tracing::warn!("Size edit discarded: {}", e))?;
        Ok(self.store.update(index, &patch)?)
    }

    /// Multiply a tile's size by a typed factor
    pub fn scale_tile(&mut self, index: usize, edit: &ScaleEdit) -> Result<()> {
        let patch = edit
            .resolve(self.store.tile(index)?)
            .inspect_err(|e| tracing::warn!("Scale discarded: {}", e))?;
        Ok(self.store.update(index, &patch)?)
    }
}
