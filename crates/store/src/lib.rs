//! Store - Layout persistence and settings
//!
//! This crate handles layout file serialization, the folder index used to
//! browse saved layouts, the on-disk layout library, background saving,
//! and editor settings.

mod error;
mod file_io;
mod folder_index;
mod format;
mod library;
mod saver;
mod serializer;
mod settings;

pub use error::*;
pub use file_io::*;
pub use folder_index::*;
pub use format::*;
pub use library::*;
pub use saver::*;
pub use serializer::*;
pub use settings::*;
