//! Scripted wall commands
//!
//! A serializable form of every session operation, so a sequence of edits
//! can be replayed from JSON.

use crate::{EditorSession, PositionEdit, Result, ScaleEdit, SizeEdit, SnapSettings};
use layout_engine::RowFitMode;
use serde::{Deserialize, Serialize};

/// One editing command, tagged by `"op"` in JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum WallCommand {
    AddMedia {
        src: String,
        #[serde(default)]
        width: Option<f64>,
        #[serde(default)]
        height: Option<f64>,
    },
    Remove {
        index: usize,
    },
    Clear,
    ToggleSelection {
        index: usize,
    },
    SelectAll,
    ClearSelection,
    MoveSelectedVertically {
        offset: f64,
    },
    FitRow {
        canvas_width: f64,
        #[serde(default)]
        uniform_width: Option<bool>,
    },
    DragCommit {
        index: usize,
        x: f64,
        y: f64,
    },
    ResizeCommit {
        index: usize,
        width: f64,
        height: f64,
        x: f64,
        y: f64,
    },
    EditPosition {
        index: usize,
        x: String,
        y: String,
    },
    EditSize {
        index: usize,
        width: String,
        height: String,
    },
    Scale {
        index: usize,
        factor: String,
    },
    SetSnap {
        enabled: bool,
        #[serde(default)]
        spacing: Option<f64>,
    },
}

impl WallCommand {
    /// Parse a JSON array of commands
    pub fn list_from_json(json: &str) -> serde_json::Result<Vec<WallCommand>> {
        serde_json::from_str(json)
    }

    /// Human readable name for logs
    pub fn display_name(&self) -> &str {
        match self {
            WallCommand::AddMedia { .. } => "Add Media",
            WallCommand::Remove { .. } => "Remove Tile",
            WallCommand::Clear => "Clear Page",
            WallCommand::ToggleSelection { .. } => "Toggle Selection",
            WallCommand::SelectAll => "Select All",
            WallCommand::ClearSelection => "Clear Selection",
            WallCommand::MoveSelectedVertically { .. } => "Move Selected Vertically",
            WallCommand::FitRow { .. } => "Fit & Scale Row",
            WallCommand::DragCommit { .. } => "Move Tile",
            WallCommand::ResizeCommit { .. } => "Resize Tile",
            WallCommand::EditPosition { .. } => "Edit Position",
            WallCommand::EditSize { .. } => "Edit Size",
            WallCommand::Scale { .. } => "Scale Tile",
            WallCommand::SetSnap { .. } => "Set Snap",
        }
    }

    /// Run this command against `session`
    pub fn apply(&self, session: &mut EditorSession) -> Result<()> {
        tracing::debug!("Applying command: {}", self.display_name());
        match self {
            WallCommand::AddMedia { src, width, height } => {
                let natural_size = (*width).zip(*height);
                session.import_media(src.clone(), natural_size);
            }
            WallCommand::Remove { index } => {
                session.remove_tile(*index)?;
            }
            WallCommand::Clear => session.clear(),
            WallCommand::ToggleSelection { index } => {
                session.toggle_selection(*index)?;
            }
            WallCommand::SelectAll => session.select_all(),
            WallCommand::ClearSelection => session.clear_selection(),
            WallCommand::MoveSelectedVertically { offset } => {
                session.move_selected_vertically(*offset)
            }
            WallCommand::FitRow {
                canvas_width,
                uniform_width,
            } => {
                let previous = session.row_fit_mode();
                if let Some(uniform_width) = uniform_width {
                    session.set_row_fit_mode(RowFitMode::from_uniform_width(*uniform_width));
                }
                if let Err(e) = session.fit_selected_row(*canvas_width) {
                    session.set_row_fit_mode(previous);
                    return Err(e);
                }
            }
            WallCommand::DragCommit { index, x, y } => {
                session.commit_drag(*index, *x, *y)?;
            }
            WallCommand::ResizeCommit {
                index,
                width,
                height,
                x,
                y,
            } => {
                session.commit_resize(*index, *width, *height, *x, *y)?;
            }
            WallCommand::EditPosition { index, x, y } => {
                session.edit_position(*index, &PositionEdit::new(x.as_str(), y.as_str()))?
            }
            WallCommand::EditSize {
                index,
                width,
                height,
            } => session.edit_size(*index, &SizeEdit::new(width.as_str(), height.as_str()))?,
            WallCommand::Scale { index, factor } => {
                session.scale_tile(*index, &ScaleEdit::new(factor.as_str()))?
            }
            WallCommand::SetSnap { enabled, spacing } => {
                let spacing = spacing.unwrap_or(session.snap_settings().spacing);
                session.set_snap_settings(SnapSettings::new(*enabled, spacing)?);
            }
        }
        Ok(())
    }
}
