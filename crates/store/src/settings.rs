//! Editor settings
//!
//! Snapping, row fit mode, and the layout library location, stored as JSON
//! in the app data directory.

use crate::Result;
use edit_engine::SnapSettings;
use layout_engine::RowFitMode;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Main editor settings container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EditorSettings {
    /// Grid and neighbor snapping
    #[serde(default)]
    pub snap: SnapSettings,
    /// Row fit-and-scale behaviour
    #[serde(default)]
    pub row_fit: RowFitSettings,
    /// Where layouts are kept
    #[serde(default)]
    pub library: LibrarySettings,
}

/// Row fit-and-scale settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RowFitSettings {
    /// Give every tile in a fitted row the same width
    pub uniform_width: bool,
}

impl RowFitSettings {
    pub fn mode(&self) -> RowFitMode {
        RowFitMode::from_uniform_width(self.uniform_width)
    }
}

/// Layout library settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LibrarySettings {
    /// Root folder of the layout library
    pub root: PathBuf,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("layouts"),
        }
    }
}

/// File the editor settings live in, inside the app data directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Owns the editor settings and the file they persist to.
///
/// A missing file means defaults. A file that cannot be parsed is logged
/// and replaced by defaults on the next write.
pub struct SettingsManager {
    path: PathBuf,
    current: EditorSettings,
}

impl SettingsManager {
    pub fn new(app_data_dir: PathBuf) -> Self {
        Self {
            path: app_data_dir.join(SETTINGS_FILE_NAME),
            current: EditorSettings::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> &EditorSettings {
        &self.current
    }

    /// Reload from disk
    pub async fn load(&mut self) -> Result<&EditorSettings> {
        self.current = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => parse_settings(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => EditorSettings::default(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!("Settings loaded from {:?}", self.path);
        Ok(&self.current)
    }

    /// Reload from disk, blocking; used before the runtime starts
    pub fn load_sync(&mut self) -> Result<&EditorSettings> {
        self.current = match std::fs::read_to_string(&self.path) {
            Ok(content) => parse_settings(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => EditorSettings::default(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!("Settings loaded from {:?}", self.path);
        Ok(&self.current)
    }

    pub async fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.current)?;
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    pub fn save_sync(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.current)?;
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Replace the settings and persist them
    pub async fn update(&mut self, settings: EditorSettings) -> Result<()> {
        self.current = settings;
        self.save().await
    }

    pub fn update_sync(&mut self, settings: EditorSettings) -> Result<()> {
        self.current = settings;
        self.save_sync()
    }

    /// Back to defaults, persisted
    pub fn reset_sync(&mut self) -> Result<&EditorSettings> {
        self.update_sync(EditorSettings::default())?;
        Ok(&self.current)
    }
}

fn parse_settings(content: &str) -> EditorSettings {
    match serde_json::from_str::<EditorSettings>(content) {
        Ok(settings) if settings.snap.spacing.is_finite() && settings.snap.spacing > 0.0 => settings,
        Ok(mut settings) => {
            tracing::warn!(
                "Snap spacing {} in settings is not usable, using the default",
                settings.snap.spacing
            );
            settings.snap.spacing = SnapSettings::default().spacing;
            settings
        }
        Err(e) => {
            tracing::warn!("Failed to parse settings file, using defaults: {}", e);
            EditorSettings::default()
        }
    }
}
