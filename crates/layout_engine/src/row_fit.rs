//! Row fit-and-scale
//!
//! Repacks a selection of tiles into a single left-to-right row that fills
//! the canvas width to the right of the first selected tile. The row
//! starts at the first selected tile's position and tiles are placed in
//! selection order with `spacing` between neighbors.

use crate::{LayoutError, Rect, Result};
use serde::{Deserialize, Serialize};
use wall_model::{TilePatch, TileStore};

/// How the available width is shared between the tiles of a row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowFitMode {
    /// One scale factor for every tile; relative sizes are preserved
    #[default]
    UniformScale,
    /// Every tile ends at the same width; heights follow each aspect ratio
    UniformWidth,
}

impl RowFitMode {
    pub fn from_uniform_width(uniform_width: bool) -> Self {
        if uniform_width {
            Self::UniformWidth
        } else {
            Self::UniformScale
        }
    }
}

/// Parameters of a row fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowFitRequest {
    /// Gap between neighbors, also kept free at the right canvas edge
    pub spacing: f64,
    /// Width of the visible canvas, measured by the caller
    pub canvas_width: f64,
    pub mode: RowFitMode,
}

impl RowFitRequest {
    pub fn new(spacing: f64, canvas_width: f64, mode: RowFitMode) -> Self {
        Self {
            spacing,
            canvas_width,
            mode,
        }
    }
}

/// Computed geometry for one tile of the row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPlacement {
    /// Index of the tile in the collection
    pub index: usize,
    pub rect: Rect,
    /// Factor applied to the tile's previous size
    pub scale: f64,
}

impl RowPlacement {
    fn patch(&self) -> TilePatch {
        TilePatch::geometry(self.rect.x, self.rect.y, self.rect.width, self.rect.height)
    }
}

/// Compute the row placement for `items`, given in selection order.
///
/// Each item is a collection index and the tile's current geometry.
/// Rejects fewer than two items, negative spacing, tiles without positive
/// width, and any layout whose scale would not be positive.
pub fn compute_row_fit(items: &[(usize, Rect)], request: &RowFitRequest) -> Result<Vec<RowPlacement>> {
    let count = items.len();
    if count < 2 {
        return Err(LayoutError::NotEnoughTiles { count });
    }
    if !(request.spacing.is_finite() && request.spacing >= 0.0) {
        return Err(LayoutError::InvalidSpacing(request.spacing));
    }
    if let Some(&(index, _)) = items.iter().find(|(_, rect)| !(rect.width > 0.0)) {
        return Err(LayoutError::NonPositiveWidth { index });
    }

    let start = items[0].1.origin();
    let spacing = request.spacing;
    let available_width = request.canvas_width - start.x - spacing;
    let total_spacing = spacing * (count - 1) as f64;
    let fill_width = available_width - total_spacing;

    let scales: Vec<f64> = match request.mode {
        RowFitMode::UniformScale => {
            let total_width: f64 = items.iter().map(|(_, rect)| rect.width).sum();
            vec![fill_width / total_width; count]
        }
        RowFitMode::UniformWidth => {
            let target_width = fill_width / count as f64;
            items.iter().map(|(_, rect)| target_width / rect.width).collect()
        }
    };

    if let Some(&scale) = scales.iter().find(|scale| !(scale.is_finite() && **scale > 0.0)) {
        return Err(LayoutError::NonPositiveScale { scale });
    }

    let mut placements = Vec::with_capacity(count);
    let mut current_x = start.x;
    for (&(index, rect), &scale) in items.iter().zip(&scales) {
        let width = rect.width * scale;
        let height = rect.height * scale;
        placements.push(RowPlacement {
            index,
            rect: Rect::new(current_x, start.y, width, height),
            scale,
        });
        current_x += width + spacing;
    }

    Ok(placements)
}

/// Fit the store's current selection into a row and write the result back.
///
/// Fewer than two selected tiles is a no-op that returns no placements. On
/// success the selection is cleared; on error nothing changes.
pub fn apply_row_fit(store: &mut TileStore, request: &RowFitRequest) -> Result<Vec<RowPlacement>> {
    if store.selection().len() < 2 {
        tracing::debug!("Row fit skipped: {} tiles selected", store.selection().len());
        return Ok(Vec::new());
    }

    let items = store
        .selection()
        .iter()
        .map(|index| store.tile(index).map(|tile| (index, Rect::from(tile))))
        .collect::<wall_model::Result<Vec<_>>>()?;

    let placements = compute_row_fit(&items, request)?;
    for placement in &placements {
        store.update(placement.index, &placement.patch())?;
    }
    store.clear_selection();

    tracing::debug!(
        "Row fit placed {} tiles ({:?}, spacing {})",
        placements.len(),
        request.mode,
        request.spacing
    );
    Ok(placements)
}
