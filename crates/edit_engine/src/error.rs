//! Error types for editing operations

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("Invalid numeric input: {0}")]
    InvalidNumericInput(String),

    #[error("Tile model error: {0}")]
    Model(#[from] wall_model::ModelError),

    #[error("Layout error: {0}")]
    Layout(#[from] layout_engine::LayoutError),
}

pub type Result<T> = std::result::Result<T, EditError>;
