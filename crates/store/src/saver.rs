//! Background layout saving
//!
//! Saving must not block editing. The caller takes an owned snapshot of the
//! tiles synchronously and hands it over; later edits cannot leak into a
//! save already in flight. Index updates from overlapping saves are
//! serialized so none of them is lost.

use crate::{LayoutFile, LayoutLibrary, PathStack, Result, StoreError};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use wall_model::Tile;

/// Everything needed to write one layout
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub path: PathStack,
    pub layout_name: String,
    /// Existing file to overwrite; `None` derives `<layout_name>.json`
    pub file_name: Option<String>,
    pub tiles: Vec<Tile>,
}

impl SaveRequest {
    pub fn new(path: PathStack, layout_name: impl Into<String>, tiles: Vec<Tile>) -> Self {
        Self {
            path,
            layout_name: layout_name.into(),
            file_name: None,
            tiles,
        }
    }

    /// Write back to `file_name` whatever the layout is called
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }
}

/// Runs layout saves on the tokio runtime
#[derive(Debug, Clone)]
pub struct LayoutSaver {
    library: Arc<LayoutLibrary>,
    index_lock: Arc<Mutex<()>>,
}

impl LayoutSaver {
    pub fn new(library: LayoutLibrary) -> Self {
        Self {
            library: Arc::new(library),
            index_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn library(&self) -> &LayoutLibrary {
        &self.library
    }

    /// Save in the background and report the outcome to `on_complete`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(&self, request: SaveRequest, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<PathBuf>) + Send + 'static,
    {
        let library = Arc::clone(&self.library);
        let index_lock = Arc::clone(&self.index_lock);

        tokio::spawn(async move {
            let result = {
                let _guard = index_lock.lock().await;
                match &request.file_name {
                    Some(file_name) => {
                        let layout = LayoutFile::new(request.layout_name.clone(), request.tiles);
                        library.write_layout(&request.path, file_name, &layout).await
                    }
                    None => {
                        library
                            .save_layout(&request.path, &request.layout_name, request.tiles)
                            .await
                    }
                }
            };
            if let Err(e) = &result {
                tracing::warn!("Failed to save layout {:?}: {}", request.layout_name, e);
            }
            on_complete(result);
        })
    }

    /// Save in the background and wait for the written path
    pub async fn save(&self, request: SaveRequest) -> Result<PathBuf> {
        let (tx, rx) = tokio::sync::oneshot::channel();
        self.spawn(request, move |result| {
            let _ = tx.send(result);
        });
        rx.await.map_err(|e| StoreError::Task(e.to_string()))?
    }
}
