/// Line-oriented text buffer wrapping `ropey::Rope`.
use std::fmt;

use anyhow::Result;
use ropey::Rope;

use crate::cursor::Cursor;

/// The document's ordered sequence of lines, stored as a rope joined by `\n`.
///
/// A buffer always holds at least one line: the empty document is a single
/// empty line.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TextBuffer {
    /// Builds a buffer from raw file content, splitting on `\n` and `\r\n`.
    ///
    /// Line terminators are not kept, so a trailing newline does not produce
    /// an extra empty line.
    fn from(text: &str) -> Self {
        Self::from_lines(text.lines())
    }
}

impl fmt::Display for TextBuffer {
    /// Writes the lines joined by a single `\n`, with no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rope)
    }
}

impl TextBuffer {
    /// Creates a buffer holding one empty line.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Creates a buffer from already split lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                joined.push('\n');
            }
            joined.push_str(line.as_ref());
        }
        Self {
            rope: Rope::from_str(&joined),
        }
    }

    /// Returns the number of lines. Never zero.
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Index of the last line.
    pub fn last_row(&self) -> usize {
        self.len_lines() - 1
    }

    /// Total number of characters, counting the `\n` separators.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns true if the document is a single empty line.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the length of a line in characters, excluding the separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the row is out of bounds.
    pub fn line_len(&self, row: usize) -> Result<usize> {
        let line = self.line_slice(row)?;
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            return Ok(len - 1);
        }
        Ok(len)
    }

    /// Returns the text of a line without its separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the row is out of bounds.
    pub fn line_text(&self, row: usize) -> Result<String> {
        let mut text = self.line_slice(row)?.to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        Ok(text)
    }

    /// Returns every line as an owned string, in document order.
    pub fn lines(&self) -> Vec<String> {
        (0..self.len_lines())
            .filter_map(|row| self.line_text(row).ok())
            .collect()
    }

    /// Inserts `text` into the cursor's line at the cursor's column.
    ///
    /// The cursor is not moved; the caller advances it per inserted char.
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor is outside the buffer or if `text`
    /// contains a line break (use [`TextBuffer::line_break`] for that).
    pub fn write(&mut self, cursor: &Cursor, text: &str) -> Result<()> {
        if text.contains('\n') {
            anyhow::bail!("text written at {} must not contain a line break", cursor.position());
        }
        let char_idx = self.char_index(cursor)?;
        self.rope.insert(char_idx, text);
        Ok(())
    }

    /// Splits the cursor's line in two at the cursor's column.
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor is outside the buffer.
    pub fn line_break(&mut self, cursor: &Cursor) -> Result<()> {
        let char_idx = self.char_index(cursor)?;
        self.rope.insert_char(char_idx, '\n');
        Ok(())
    }

    /// Forward-deletes the character under the cursor.
    ///
    /// At the end of a line that is not the last one, the next line is
    /// joined onto the current one. At the end of the document this is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor is outside the buffer.
    pub fn delete(&mut self, cursor: &Cursor) -> Result<()> {
        let char_idx = self.char_index(cursor)?;
        if char_idx >= self.rope.len_chars() {
            return Ok(());
        }
        // On a line end the char removed is the `\n` separator, which merges the lines.
        self.rope.remove(char_idx..char_idx + 1);
        Ok(())
    }

    /// Converts the cursor position to a char index into the rope.
    fn char_index(&self, cursor: &Cursor) -> Result<usize> {
        let (row, col) = (cursor.row(), cursor.col());
        let line_len = self.line_len(row)?;
        if col > line_len {
            anyhow::bail!("column {col} out of bounds (line {row} has {line_len} chars)");
        }
        Ok(self.rope.line_to_char(row) + col)
    }

    fn line_slice(&self, row: usize) -> Result<ropey::RopeSlice<'_>> {
        if row >= self.rope.len_lines() {
            anyhow::bail!(
                "line index {} out of bounds (buffer has {} lines)",
                row,
                self.rope.len_lines()
            );
        }
        Ok(self.rope.line(row))
    }
}
