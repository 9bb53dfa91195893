//! Application state shared by the commands

use edit_engine::EditorSession;
use std::path::PathBuf;
use std::str::FromStr;
use store::{LayoutLibrary, LayoutSaver, PathStack, SettingsManager};

/// Settings and layout library for one run of the tool
pub struct AppState {
    pub settings: SettingsManager,
    pub saver: LayoutSaver,
}

impl AppState {
    /// Load settings from `app_data_dir`; `library_root` overrides the configured library
    pub fn new(app_data_dir: PathBuf, library_root: Option<PathBuf>) -> Self {
        let mut settings = SettingsManager::new(app_data_dir);
        if let Err(e) = settings.load_sync() {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
        }

        let root = library_root.unwrap_or_else(|| settings.get().library.root.clone());
        tracing::info!("Layout library: {:?}", root);

        Self {
            saver: LayoutSaver::new(LayoutLibrary::new(root)),
            settings,
        }
    }

    pub fn library(&self) -> &LayoutLibrary {
        self.saver.library()
    }

    /// Fresh session configured from the settings
    pub fn new_session(&self) -> EditorSession {
        let settings = self.settings.get();
        EditorSession::new(settings.snap, settings.row_fit.mode())
    }
}

/// A layout file addressed as `folder/sub/name.json` inside the library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRef {
    pub path: PathStack,
    pub file_name: String,
}

impl LayoutRef {
    /// Layout name implied by the file name
    pub fn stem(&self) -> &str {
        self.file_name
            .strip_suffix(&format!(".{}", store::FILE_EXTENSION))
            .unwrap_or(&self.file_name)
    }
}

impl FromStr for LayoutRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments: Vec<&str> = s.split('/').filter(|segment| !segment.is_empty()).collect();
        let file_name = segments
            .pop()
            .ok_or_else(|| format!("{s:?} does not name a layout file"))?
            .to_string();
        Ok(Self {
            path: PathStack::from_segments(segments),
            file_name,
        })
    }
}

impl std::fmt::Display for LayoutRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_root() {
            write!(f, "{}", self.file_name)
        } else {
            write!(f, "{}/{}", self.path, self.file_name)
        }
    }
}
