//! Error types for layout engine

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Row fit needs at least two tiles, got {count}")]
    NotEnoughTiles { count: usize },

    #[error("Invalid spacing: {0}")]
    InvalidSpacing(f64),

    #[error("Tile {index} has no positive width to scale from")]
    NonPositiveWidth { index: usize },

    #[error("Row does not fit the canvas (scale {scale})")]
    NonPositiveScale { scale: f64 },

    #[error("Tile model error: {0}")]
    Model(#[from] wall_model::ModelError),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
