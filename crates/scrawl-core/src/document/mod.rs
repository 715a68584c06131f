//! Document model combining text buffer, cursor, and viewport.
//!
//! A `Document` owns the editing triad and the file metadata. It is the
//! single context the dispatcher mutates; file I/O is in the `io` submodule.

mod io;

use std::path::PathBuf;

use crate::buffer::TextBuffer;
use crate::cursor::Cursor;
use crate::window::Window;

/// A single open file with its buffer, cursor, and window.
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer.
    pub buffer: TextBuffer,
    /// The cursor state.
    pub cursor: Cursor,
    /// The viewport onto the buffer.
    pub window: Window,
    /// File path on disk, if any.
    pub file_path: Option<PathBuf>,
    /// Display name for the status row.
    pub title: String,
    /// Whether the document has been modified since it was loaded or saved.
    pub modified: bool,
}

impl Document {
    /// Creates an empty, unnamed document viewed through `window`.
    pub fn new(window: Window) -> Self {
        Self::from_text("", window)
    }

    /// Creates an unnamed document from raw text.
    pub fn from_text(text: &str, window: Window) -> Self {
        Self {
            buffer: TextBuffer::from(text),
            cursor: Cursor::new(),
            window,
            file_path: None,
            title: "Untitled".to_string(),
            modified: false,
        }
    }
}
