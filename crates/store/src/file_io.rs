//! File I/O operations for single layout files

use crate::{parse_layout, serialize_layout, LayoutFile, Result, StoreError};
use std::path::Path;

/// Write a layout file
pub async fn save_layout_file(layout: &LayoutFile, path: impl AsRef<Path>) -> Result<()> {
    let json = serialize_layout(layout)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

/// Read a layout file. Unreadable contents load as an empty wall.
pub async fn load_layout_file(path: impl AsRef<Path>) -> Result<LayoutFile> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(StoreError::FileNotFound(path.display().to_string()));
    }

    let json = tokio::fs::read_to_string(path).await?;
    Ok(parse_layout(&json))
}

/// Write a layout file synchronously
pub fn save_layout_file_sync(layout: &LayoutFile, path: impl AsRef<Path>) -> Result<()> {
    let json = serialize_layout(layout)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read a layout file synchronously
pub fn load_layout_file_sync(path: impl AsRef<Path>) -> Result<LayoutFile> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(StoreError::FileNotFound(path.display().to_string()));
    }

    let json = std::fs::read_to_string(path)?;
    Ok(parse_layout(&json))
}
