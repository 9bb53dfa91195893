//! Edit Engine - Gestures, field edits, and the editing session
//!
//! This crate interprets user input (finished drags and resizes, typed
//! position/size/scale values, toolbar commands) and applies it to the
//! tile store through an [`EditorSession`].

mod command;
mod error;
mod gesture;
mod numeric_edit;
mod session;

pub use command::*;
pub use error::*;
pub use gesture::*;
pub use numeric_edit::*;
pub use session::*;
