//! Layout file format

use serde::{Deserialize, Serialize};
use wall_model::Tile;

/// File extension of layout files
pub const FILE_EXTENSION: &str = "json";

/// Name of the folder index kept at the root of a layout library
pub const INDEX_FILE_NAME: &str = "index.json";

/// A named snapshot of the whole wall.
///
/// On disk: `{ "layoutName": "...", "windows": [ tile, ... ] }`. There is no
/// version field; an absent `windows` list reads as an empty wall.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutFile {
    #[serde(default)]
    pub layout_name: String,
    #[serde(default)]
    pub windows: Vec<Tile>,
}

impl LayoutFile {
    pub fn new(layout_name: impl Into<String>, windows: Vec<Tile>) -> Self {
        Self {
            layout_name: layout_name.into(),
            windows,
        }
    }

    /// File name a layout called `layout_name` is stored under
    pub fn file_name(layout_name: &str) -> String {
        format!("{layout_name}.{FILE_EXTENSION}")
    }
}
