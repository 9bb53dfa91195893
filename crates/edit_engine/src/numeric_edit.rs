//! Numeric field edits
//!
//! Position, size, and scale fields arrive as free text. An edit either
//! resolves completely into a [`TilePatch`] or is rejected; a half-valid
//! edit never changes anything.

use crate::{EditError, Result};
use wall_model::{Tile, TilePatch};

/// Parse a numeric field, rejecting empty, unparsable, and non-finite text
pub fn parse_numeric(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EditError::InvalidNumericInput(format!(
            "{field}: {text:?} is not a number"
        ))),
    }
}

/// Parse a numeric field, falling back to `default` when it is not a number
pub fn parse_numeric_or(text: &str, default: f64) -> f64 {
    parse_numeric("value", text).unwrap_or(default)
}

/// Direct edit of a tile's top-left corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionEdit {
    pub x: String,
    pub y: String,
}

impl PositionEdit {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Any finite position is accepted, negative values included
    pub fn resolve(&self) -> Result<TilePatch> {
        let x = parse_numeric("x", &self.x)?;
        let y = parse_numeric("y", &self.y)?;
        Ok(TilePatch::position(x, y))
    }
}

/// Direct edit of a tile's width and height
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeEdit {
    pub width: String,
    pub height: String,
}

impl SizeEdit {
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Both dimensions must be positive
    pub fn resolve(&self) -> Result<TilePatch> {
        let width = parse_numeric("width", &self.width)?;
        let height = parse_numeric("height", &self.height)?;
        if width <= 0.0 || height <= 0.0 {
            return Err(EditError::InvalidNumericInput(format!(
                "size must be positive, got {width} x {height}"
            )));
        }
        Ok(TilePatch::size(width, height))
    }
}

/// Multiply a tile's size by a factor, keeping its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleEdit {
    pub factor: String,
}

impl ScaleEdit {
    pub fn new(factor: impl Into<String>) -> Self {
        Self {
            factor: factor.into(),
        }
    }

    pub fn resolve(&self, tile: &Tile) -> Result<TilePatch> {
        let factor = parse_numeric("scale", &self.factor)?;
        if factor <= 0.0 {
            return Err(EditError::InvalidNumericInput(format!(
                "scale factor must be positive, got {factor}"
            )));
        }
        Ok(TilePatch::size(tile.width * factor, tile.height * factor))
    }
}
