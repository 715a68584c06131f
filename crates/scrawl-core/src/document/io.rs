//! File I/O operations for documents.
//!
//! Loading splits the file into lines and drops the terminators; saving
//! joins the lines with `\n` and overwrites the file.

use std::path::Path;

use anyhow::{Context, Result};

use crate::buffer::TextBuffer;
use crate::cursor::Cursor;
use crate::window::Window;

use super::Document;

impl Document {
    /// Opens a document from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    pub fn open(path: &Path, window: Window) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read file: {}", path.display()))?;
        let buffer = TextBuffer::from(text.as_str());
        tracing::info!(
            "Opened {} ({} lines)",
            path.display(),
            buffer.len_lines()
        );

        Ok(Self {
            buffer,
            cursor: Cursor::new(),
            window,
            file_path: Some(path.to_path_buf()),
            title: title_for(path),
            modified: false,
        })
    }

    /// Saves the document to its file path.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is set or the file cannot be written.
    pub fn save(&mut self) -> Result<()> {
        let path = self
            .file_path
            .as_ref()
            .context("no file path set for this document")?
            .clone();
        self.save_to(&path)
    }

    /// Saves the document to a specific path, truncating any previous content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        let text = self.buffer.to_string();
        std::fs::write(path, text.as_bytes())
            .with_context(|| format!("failed to write file: {}", path.display()))?;

        tracing::info!("Saved {} ({} bytes)", path.display(), text.len());
        self.file_path = Some(path.to_path_buf());
        self.title = title_for(path);
        self.modified = false;
        Ok(())
    }
}

fn title_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}
