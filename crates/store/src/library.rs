//! Layout library on disk
//!
//! A library is a root folder holding layout files in nested subfolders
//! plus an `index.json` describing the tree. Saving writes the layout file
//! first and then registers it in the index.

use crate::{
    load_layout_file, load_layout_file_sync, save_layout_file, save_layout_file_sync, FolderIndex,
    IndexEntry, LayoutFile, PathStack, Result, StoreError, INDEX_FILE_NAME,
};
use std::path::{Path, PathBuf};
use wall_model::Tile;

/// A folder tree of saved layouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutLibrary {
    root: PathBuf,
}

impl LayoutLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE_NAME)
    }

    /// Directory for `path`, refusing segments that would leave the library
    pub fn folder_path(&self, path: &PathStack) -> Result<PathBuf> {
        let mut dir = self.root.clone();
        for segment in path.segments() {
            validate_segment(segment).map_err(StoreError::InvalidPath)?;
            dir.push(segment);
        }
        Ok(dir)
    }

    /// Location of the layout file `file_name` inside `path`
    pub fn layout_path(&self, path: &PathStack, file_name: &str) -> Result<PathBuf> {
        validate_segment(file_name).map_err(StoreError::InvalidPath)?;
        Ok(self.folder_path(path)?.join(file_name))
    }

    /// Read the folder index; a missing index is an empty one
    pub fn read_index_sync(&self) -> Result<FolderIndex> {
        let path = self.index_path();
        if !path.exists() {
            return Ok(FolderIndex::new());
        }
        Ok(FolderIndex::parse(&std::fs::read_to_string(path)?))
    }

    pub async fn read_index(&self) -> Result<FolderIndex> {
        let path = self.index_path();
        if !path.exists() {
            return Ok(FolderIndex::new());
        }
        Ok(FolderIndex::parse(&tokio::fs::read_to_string(path).await?))
    }

    /// List the folder at `path`; an unknown folder lists nothing
    pub fn entries(&self, path: &PathStack) -> Result<Vec<IndexEntry>> {
        Ok(self.read_index_sync()?.entries(path).unwrap_or_default())
    }

    /// Save `tiles` as `<layout_name>.json` inside `path` and index it
    pub fn save_layout_sync(&self, path: &PathStack, layout_name: &str, tiles: Vec<Tile>) -> Result<PathBuf> {
        check_layout_name(layout_name)?;
        self.write_layout_sync(path, &LayoutFile::file_name(layout_name), &LayoutFile::new(layout_name, tiles))
    }

    pub async fn save_layout(&self, path: &PathStack, layout_name: &str, tiles: Vec<Tile>) -> Result<PathBuf> {
        check_layout_name(layout_name)?;
        self.write_layout(path, &LayoutFile::file_name(layout_name), &LayoutFile::new(layout_name, tiles))
            .await
    }

    /// Write `layout` to `file_name` inside `path` and index it.
    ///
    /// The file name is independent of the layout name stored inside the
    /// file. The index is checked before anything touches the disk, so a
    /// rejected path leaves no stray file.
    pub fn write_layout_sync(&self, path: &PathStack, file_name: &str, layout: &LayoutFile) -> Result<PathBuf> {
        let (dir, index) = self.prepare_write(path, file_name, self.read_index_sync()?)?;
        std::fs::create_dir_all(&dir)?;

        let file_path = dir.join(file_name);
        save_layout_file_sync(layout, &file_path)?;
        std::fs::write(self.index_path(), index.to_json()?)?;

        tracing::info!("Layout saved in {:?} as {}", path.to_string(), file_name);
        Ok(file_path)
    }

    pub async fn write_layout(&self, path: &PathStack, file_name: &str, layout: &LayoutFile) -> Result<PathBuf> {
        let (dir, index) = self.prepare_write(path, file_name, self.read_index().await?)?;
        tokio::fs::create_dir_all(&dir).await?;

        let file_path = dir.join(file_name);
        save_layout_file(layout, &file_path).await?;
        tokio::fs::write(self.index_path(), index.to_json()?).await?;

        tracing::info!("Layout saved in {:?} as {}", path.to_string(), file_name);
        Ok(file_path)
    }

    /// Load the layout file `file_name` from `path`
    pub fn load_layout_sync(&self, path: &PathStack, file_name: &str) -> Result<LayoutFile> {
        let file_path = self.layout_path(path, file_name)?;
        let layout = load_layout_file_sync(&file_path)?;
        tracing::info!("Loaded layout {} ({} tiles)", file_path.display(), layout.windows.len());
        Ok(layout)
    }

    pub async fn load_layout(&self, path: &PathStack, file_name: &str) -> Result<LayoutFile> {
        let file_path = self.layout_path(path, file_name)?;
        let layout = load_layout_file(&file_path).await?;
        tracing::info!("Loaded layout {} ({} tiles)", file_path.display(), layout.windows.len());
        Ok(layout)
    }

    /// Target directory and the index with `file_name` registered
    fn prepare_write(
        &self,
        path: &PathStack,
        file_name: &str,
        mut index: FolderIndex,
    ) -> Result<(PathBuf, FolderIndex)> {
        validate_segment(file_name).map_err(|_| StoreError::InvalidLayoutName(file_name.to_string()))?;
        let dir = self.folder_path(path)?;
        index.register_layout(path, file_name)?;
        Ok((dir, index))
    }
}

/// Reject layout names that cannot become a file name
pub fn check_layout_name(layout_name: &str) -> Result<()> {
    if layout_name.trim().is_empty() || validate_segment(layout_name).is_err() {
        return Err(StoreError::InvalidLayoutName(layout_name.to_string()));
    }
    Ok(())
}

/// A single path component: non-empty, no separators, not `.` or `..`
fn validate_segment(segment: &str) -> std::result::Result<(), String> {
    if segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment.contains(['/', '\\'])
    {
        return Err(format!("{segment:?} is not a valid folder or file name"));
    }
    Ok(())
}
