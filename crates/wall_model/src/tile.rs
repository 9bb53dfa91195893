//! Placed media tiles and partial tile updates

use serde::{Deserialize, Serialize};

/// Smallest width or height the interaction layer lets a tile be resized to
pub const MIN_TILE_SIZE: f64 = 50.0;

/// Position given to newly imported media
pub const DEFAULT_IMPORT_POSITION: (f64, f64) = (50.0, 50.0);

/// Size used when the natural size of imported media is unknown
pub const FALLBACK_TILE_SIZE: (f64, f64) = (300.0, 200.0);

/// File extensions offered by the media picker
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "mp4"];

const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];
const VIDEO_EXTENSIONS: [&str; 1] = ["mp4"];

/// Locator for the media shown in a tile (usually an absolute file path)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaSource {
    pub src: String,
}

impl MediaSource {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }

    /// Lowercased text after the last `.` of the locator
    pub fn extension(&self) -> String {
        self.src
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Whether the media picker offers files of this type
    pub fn is_supported(&self) -> bool {
        SUPPORTED_EXTENSIONS.contains(&self.extension().as_str())
    }

    /// How a renderer should treat this media
    pub fn kind(&self) -> MediaKind {
        let ext = self.extension();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Image
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Video
        } else {
            MediaKind::Unsupported
        }
    }
}

/// Broad media category, dispatched on file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Unsupported,
}

impl MediaKind {
    /// Only still images get the fullscreen preview
    pub fn supports_fullscreen(&self) -> bool {
        matches!(self, MediaKind::Image)
    }
}

/// One placed media item on the canvas.
///
/// Serialized as `{ "media": { "src": .. }, "width", "height", "x", "y" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub media: MediaSource,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

impl Tile {
    pub fn new(media: MediaSource, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            media,
            width,
            height,
            x,
            y,
        }
    }

    /// Create a tile for freshly imported media.
    ///
    /// `natural_size` is the decoded pixel size of the media, when the
    /// caller could determine it.
    pub fn imported(src: impl Into<String>, natural_size: Option<(f64, f64)>) -> Self {
        let (width, height) = natural_size.unwrap_or(FALLBACK_TILE_SIZE);
        let (x, y) = DEFAULT_IMPORT_POSITION;
        Self::new(MediaSource::new(src), x, y, width, height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A partial update merged into an existing tile
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TilePatch {
    pub media: Option<MediaSource>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl TilePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that moves a tile
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    /// Patch that resizes a tile in place
    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    /// Patch that sets the full geometry of a tile
    pub fn geometry(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            media: None,
        }
    }

    pub fn with_media(mut self, media: MediaSource) -> Self {
        self.media = Some(media);
        self
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.media.is_none()
            && self.x.is_none()
            && self.y.is_none()
            && self.width.is_none()
            && self.height.is_none()
    }

    /// Merge the present fields into `tile`
    pub fn apply_to(&self, tile: &mut Tile) {
        if let Some(media) = &self.media {
            tile.media = media.clone();
        }
        if let Some(x) = self.x {
            tile.x = x;
        }
        if let Some(y) = self.y {
            tile.y = y;
        }
        if let Some(width) = self.width {
            tile.width = width;
        }
        if let Some(height) = self.height {
            tile.height = height;
        }
    }
}
