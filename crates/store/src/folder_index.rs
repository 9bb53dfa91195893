//! Folder index for layout navigation
//!
//! The index mirrors the folder tree of a layout library: an object key is
//! a subfolder, a `null` key is a layout file. It only drives navigation;
//! layouts are read from disk by path.

use crate::{Result, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of an index entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    Layout,
}

/// One entry of a folder listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// Breadcrumb of folder names from the library root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStack {
    segments: Vec<String>,
}

impl PathStack {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Descend into `folder`
    pub fn push(&mut self, folder: impl Into<String>) {
        self.segments.push(folder.into());
    }

    /// Jump back to the breadcrumb at `index`, keeping it as the last segment
    pub fn truncate_to(&mut self, index: usize) {
        self.segments.truncate(index + 1);
    }

    /// Go back to the library root
    pub fn clear(&mut self) {
        self.segments.clear();
    }
}

impl std::fmt::Display for PathStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// In-memory copy of `index.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderIndex {
    root: Map<String, Value>,
}

impl FolderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse index JSON; anything that is not a JSON object starts fresh
    pub fn parse(json: &str) -> Self {
        match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(root)) => Self { root },
            Ok(_) => {
                tracing::warn!("Folder index is not an object, starting fresh");
                Self::new()
            }
            Err(e) => {
                tracing::warn!("Folder index invalid, starting fresh: {}", e);
                Self::new()
            }
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    /// The folder at `path`, if every segment names a subfolder
    pub fn folder(&self, path: &PathStack) -> Option<&Map<String, Value>> {
        path.segments()
            .iter()
            .try_fold(&self.root, |node, segment| node.get(segment)?.as_object())
    }

    /// Listing of the folder at `path`, in key order
    pub fn entries(&self, path: &PathStack) -> Option<Vec<IndexEntry>> {
        let folder = self.folder(path)?;
        Some(
            folder
                .iter()
                .map(|(name, value)| IndexEntry {
                    name: name.clone(),
                    kind: if value.is_object() {
                        EntryKind::Folder
                    } else {
                        EntryKind::Layout
                    },
                })
                .collect(),
        )
    }

    /// Whether `name` inside the folder at `path` is a subfolder
    pub fn is_folder(&self, path: &PathStack, name: &str) -> bool {
        self.folder(path)
            .and_then(|folder| folder.get(name))
            .is_some_and(Value::is_object)
    }

    /// Record `file_name` under `path`, creating missing folders.
    ///
    /// An existing entry is left as is. Fails when a path segment is
    /// already taken by a layout file.
    pub fn register_layout(&mut self, path: &PathStack, file_name: &str) -> Result<()> {
        let mut node = &mut self.root;
        for segment in path.segments() {
            let child = node
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            node = child.as_object_mut().ok_or_else(|| {
                StoreError::InvalidPath(format!("{segment} in {path} is a layout, not a folder"))
            })?;
        }
        node.entry(file_name.to_string()).or_insert(Value::Null);
        Ok(())
    }
}
