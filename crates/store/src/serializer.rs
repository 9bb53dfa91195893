//! Layout serialization
//!
//! Writing is strict; reading is lenient. A layout that cannot be read is
//! logged and treated as an empty wall rather than failing the load.

use crate::{LayoutFile, Result};
use serde_json::Value;
use wall_model::Tile;

/// Serialize a layout as pretty printed JSON
pub fn serialize_layout(layout: &LayoutFile) -> Result<String> {
    Ok(serde_json::to_string_pretty(layout)?)
}

/// Parse layout JSON, recovering from anything malformed.
///
/// Invalid JSON yields an empty, unnamed layout. A missing, null, or
/// malformed `windows` list yields an empty wall with the name kept.
pub fn parse_layout(json: &str) -> LayoutFile {
    let value: Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to parse layout JSON, using an empty layout: {}", e);
            return LayoutFile::default();
        }
    };

    let layout_name = value
        .get("layoutName")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let windows = match value.get("windows") {
        None | Some(Value::Null) => Vec::new(),
        Some(windows) => match serde_json::from_value::<Vec<Tile>>(windows.clone()) {
            Ok(tiles) => tiles,
            Err(e) => {
                tracing::warn!("Layout {:?} has malformed windows, using none: {}", layout_name, e);
                Vec::new()
            }
        },
    };

    LayoutFile {
        layout_name,
        windows,
    }
}
