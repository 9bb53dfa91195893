//! Gesture interpretation
//!
//! Turns the end state of pointer gestures into tile geometry. Grid
//! snapping happens on commit; neighbor snapping is only offered as a live
//! preview while a drag is in progress.

use crate::{EditError, Result};
use layout_engine::{snap_point_to_grid, snap_to_neighbors, Point, Rect};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wall_model::{TileId, TilePatch, TileStore, MIN_TILE_SIZE};

/// Grid spacing used when none is configured or the entered one is unusable
pub const DEFAULT_SNAP_SPACING: f64 = 50.0;

/// Snapping behaviour for gestures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    pub enabled: bool,
    /// Grid pitch, also used as the margin between snapped neighbors
    pub spacing: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            spacing: DEFAULT_SNAP_SPACING,
        }
    }
}

impl SnapSettings {
    pub fn new(enabled: bool, spacing: f64) -> Result<Self> {
        let mut settings = Self {
            enabled,
            ..Default::default()
        };
        settings.set_spacing(spacing)?;
        Ok(settings)
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Change the grid pitch; it must be a positive number
    pub fn set_spacing(&mut self, spacing: f64) -> Result<()> {
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(EditError::InvalidNumericInput(format!(
                "snap spacing must be positive, got {spacing}"
            )));
        }
        self.spacing = spacing;
        Ok(())
    }

    /// Read a spacing typed into a text field.
    ///
    /// The integer part is used; anything unusable falls back to the default.
    pub fn parse_spacing(text: &str) -> f64 {
        match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value.trunc() > 0.0 => value.trunc(),
            _ => DEFAULT_SNAP_SPACING,
        }
    }
}

/// Applies snap-on-commit rules and remembers where each tile was last dropped
#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    snap: SnapSettings,
    last_drop: HashMap<TileId, Point>,
}

impl GestureInterpreter {
    pub fn new(snap: SnapSettings) -> Self {
        Self {
            snap,
            last_drop: HashMap::new(),
        }
    }

    pub fn snap_settings(&self) -> &SnapSettings {
        &self.snap
    }

    pub fn set_snap_settings(&mut self, snap: SnapSettings) {
        self.snap = snap;
    }

    /// Drop remembered state for tiles no longer in `store`
    pub fn forget_missing(&mut self, store: &TileStore) {
        self.last_drop.retain(|id, _| store.index_of(*id).is_some());
    }

    pub fn reset(&mut self) {
        self.last_drop.clear();
    }

    /// Where a tile dragged to `(x, y)` would land if released now.
    ///
    /// With snapping on, the tile is pulled onto neighbor edges `spacing`
    /// away. The store is not modified.
    pub fn preview_drag(&self, store: &TileStore, index: usize, x: f64, y: f64) -> Result<Point> {
        let moving = Rect::from(store.tile(index)?);
        let candidate = Point::new(x, y);
        if !self.snap.enabled {
            return Ok(candidate);
        }

        let others: Vec<Rect> = store
            .tiles()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, tile)| Rect::from(tile))
            .collect();
        Ok(snap_to_neighbors(candidate, &moving, &others, self.snap.spacing))
    }

    /// Commit the end of a move gesture.
    ///
    /// The grid only applies when the tile actually moved since its last
    /// drop; a click without movement stores the position as given.
    pub fn commit_drag(&mut self, store: &mut TileStore, index: usize, x: f64, y: f64) -> Result<Point> {
        let tile = store.tile(index)?;
        let id = store.id_of(index).ok_or(wall_model::ModelError::IndexOutOfRange {
            index,
            len: store.len(),
        })?;
        let last = self
            .last_drop
            .get(&id)
            .copied()
            .unwrap_or(Point::new(tile.x, tile.y));

        let dropped = Point::new(x, y);
        let position = if self.snap.enabled && dropped != last {
            snap_point_to_grid(dropped, self.snap.spacing)
        } else {
            dropped
        };

        store.update(index, &TilePatch::position(position.x, position.y))?;
        self.last_drop.insert(id, position);
        tracing::debug!("Drag commit on tile {}: ({}, {})", index, position.x, position.y);
        Ok(position)
    }

    /// Commit the end of a resize gesture.
    ///
    /// The size is kept as given (never below the minimum tile size); only
    /// the resulting position is snapped to the grid.
    pub fn commit_resize(
        &mut self,
        store: &mut TileStore,
        index: usize,
        width: f64,
        height: f64,
        x: f64,
        y: f64,
    ) -> Result<Rect> {
        store.tile(index)?;
        let position = if self.snap.enabled {
            snap_point_to_grid(Point::new(x, y), self.snap.spacing)
        } else {
            Point::new(x, y)
        };
        let rect = Rect::new(
            position.x,
            position.y,
            width.max(MIN_TILE_SIZE),
            height.max(MIN_TILE_SIZE),
        );

        store.update(index, &TilePatch::geometry(rect.x, rect.y, rect.width, rect.height))?;
        tracing::debug!("Resize commit on tile {}: {:?}", index, rect);
        Ok(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wall_model::{MediaSource, Tile};

    fn store() -> TileStore {
        TileStore::from_tiles(vec![
            Tile::new(MediaSource::new("a.png"), 0.0, 0.0, 100.0, 100.0),
            Tile::new(MediaSource::new("b.png"), 400.0, 0.0, 100.0, 100.0),
        ])
    }

    #[test]
    fn test_drag_commit_snaps_to_grid() {
        let mut store = store();
        let mut gestures = GestureInterpreter::new(SnapSettings::default());
        let position = gestures.commit_drag(&mut store, 0, 73.0, 128.0).unwrap();
        assert_eq!(position, Point::new(50.0, 150.0));
        assert_eq!(store.get(0).unwrap().x, 50.0);
        assert_eq!(store.get(0).unwrap().y, 150.0);
    }

    #[test]
    fn test_drag_commit_without_movement_is_raw() {
        let mut store = TileStore::from_tiles(vec![Tile::new(
            MediaSource::new("a.png"),
            13.0,
            17.0,
            100.0,
            100.0,
        )]);
        let mut gestures = GestureInterpreter::new(SnapSettings::default());
        let position = gestures.commit_drag(&mut store, 0, 13.0, 17.0).unwrap();
        assert_eq!(position, Point::new(13.0, 17.0));
    }

    #[test]
    fn test_drag_commit_compares_with_last_drop() {
        let mut store = store();
        let mut gestures = GestureInterpreter::new(SnapSettings::default());
        gestures.commit_drag(&mut store, 0, 98.0, 0.0).unwrap();
        // moved elsewhere by a numeric edit; dropping at the remembered
        // position again counts as no movement
        store.update(0, &TilePatch::position(7.0, 7.0)).unwrap();
        let position = gestures.commit_drag(&mut store, 0, 100.0, 0.0).unwrap();
        assert_eq!(position, Point::new(100.0, 0.0));
    }

    #[test]
    fn test_drag_commit_snap_disabled() {
        let mut store = store();
        let mut gestures = GestureInterpreter::new(SnapSettings::disabled());
        let position = gestures.commit_drag(&mut store, 1, 401.5, 3.25).unwrap();
        assert_eq!(position, Point::new(401.5, 3.25));
    }

    #[test]
    fn test_drag_memory_follows_tile_after_removal() {
        let mut store = TileStore::from_tiles(vec![
            Tile::new(MediaSource::new("a.png"), 0.0, 0.0, 100.0, 100.0),
            Tile::new(MediaSource::new("b.png"), 413.0, 0.0, 100.0, 100.0),
        ]);
        let mut gestures = GestureInterpreter::new(SnapSettings::default());
        // released without moving: remembered off-grid
        gestures.commit_drag(&mut store, 1, 413.0, 0.0).unwrap();
        store.update(1, &TilePatch::position(7.0, 7.0)).unwrap();
        store.remove(0).unwrap();
        gestures.forget_missing(&store);

        let position = gestures.commit_drag(&mut store, 0, 413.0, 0.0).unwrap();
        assert_eq!(position, Point::new(413.0, 0.0));
    }

    #[test]
    fn test_resize_commit_snaps_position_only() {
        let mut store = store();
        let mut gestures = GestureInterpreter::new(SnapSettings::default());
        let rect = gestures
            .commit_resize(&mut store, 0, 133.0, 87.0, 26.0, -24.0)
            .unwrap();
        assert_eq!(rect, Rect::new(50.0, 0.0, 133.0, 87.0));
        let tile = store.get(0).unwrap();
        assert_eq!((tile.width, tile.height), (133.0, 87.0));
    }

    #[test]
    fn test_resize_commit_enforces_minimum_size() {
        let mut store = store();
        let mut gestures = GestureInterpreter::new(SnapSettings::disabled());
        let rect = gestures.commit_resize(&mut store, 0, 10.0, 60.0, 5.0, 5.0).unwrap();
        assert_eq!(rect, Rect::new(5.0, 5.0, 50.0, 60.0));
    }

    #[test]
    fn test_gesture_on_missing_tile() {
        let mut store = store();
        let mut gestures = GestureInterpreter::default();
        assert!(matches!(
            gestures.commit_drag(&mut store, 5, 0.0, 0.0),
            Err(EditError::Model(_))
        ));
        assert!(gestures.commit_resize(&mut store, 5, 60.0, 60.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_preview_drag_snaps_to_neighbor() {
        let store = store();
        let gestures = GestureInterpreter::new(SnapSettings::default());
        // right edge of tile 0 plus the 50 margin
        let point = gestures.preview_drag(&store, 1, 152.0, 300.0).unwrap();
        assert_eq!(point, Point::new(150.0, 300.0));
        // store untouched
        assert_eq!(store.get(1).unwrap().x, 400.0);
    }

    #[test]
    fn test_preview_drag_ignores_self_and_disabled() {
        let store = store();
        let gestures = GestureInterpreter::new(SnapSettings::disabled());
        let point = gestures.preview_drag(&store, 1, 152.0, 300.0).unwrap();
        assert_eq!(point, Point::new(152.0, 300.0));
    }

    #[test]
    fn test_snap_settings_spacing() {
        assert!(SnapSettings::new(true, 0.0).is_err());
        assert!(SnapSettings::new(true, f64::NAN).is_err());
        assert_eq!(SnapSettings::new(false, 25.0).unwrap().spacing, 25.0);

        assert_eq!(SnapSettings::parse_spacing("40"), 40.0);
        assert_eq!(SnapSettings::parse_spacing("12.9"), 12.0);
        assert_eq!(SnapSettings::parse_spacing(""), 50.0);
        assert_eq!(SnapSettings::parse_spacing("0"), 50.0);
        assert_eq!(SnapSettings::parse_spacing("-10"), 50.0);
    }

    proptest! {
        #[test]
        fn prop_resize_commit_stays_on_grid_and_above_minimum(
            width in -100.0f64..2000.0,
            height in -100.0f64..2000.0,
            x in -5000.0f64..5000.0,
            y in -5000.0f64..5000.0,
        ) {
            let mut store = store();
            let mut gestures = GestureInterpreter::new(SnapSettings::default());
            let rect = gestures.commit_resize(&mut store, 1, width, height, x, y).unwrap();
            prop_assert!(rect.width >= MIN_TILE_SIZE);
            prop_assert!(rect.height >= MIN_TILE_SIZE);
            prop_assert_eq!(rect.x % 50.0, 0.0);
            prop_assert_eq!(rect.y % 50.0, 0.0);
        }
    }
}
