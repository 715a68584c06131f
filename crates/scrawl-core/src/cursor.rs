/// Cursor model with a sticky column for vertical movement.
use std::fmt;

use crate::buffer::TextBuffer;

/// Represents a position in the text as row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// 0-indexed line number.
    pub row: usize,
    /// 0-indexed column (char offset within the line).
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The cursor in buffer coordinates.
///
/// `sticky_col` remembers the last column set by a horizontal move or an
/// edit. Vertical moves read it to restore the column after crossing
/// shorter lines, but never write it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cursor {
    row: usize,
    col: usize,
    sticky_col: usize,
}

impl Cursor {
    /// Creates a new cursor at position (0, 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cursor at the given position, with the sticky column set to `col`.
    pub fn at(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            sticky_col: col,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn sticky_col(&self) -> usize {
        self.sticky_col
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Sets the column.
    ///
    /// Postcondition: `col() == sticky_col() == col`.
    pub fn set_col(&mut self, col: usize) {
        self.col = col;
        self.sticky_col = col;
    }

    /// Moves the cursor up one line. No-op on the first line.
    pub fn move_up(&mut self, buffer: &TextBuffer) {
        if self.row == 0 {
            return;
        }
        self.row -= 1;
        self.restore_sticky_col(buffer);
    }

    /// Moves the cursor down one line. No-op on the last line.
    pub fn move_down(&mut self, buffer: &TextBuffer) {
        if self.row >= buffer.last_row() {
            return;
        }
        self.row += 1;
        self.restore_sticky_col(buffer);
    }

    /// Moves the cursor left by one character, wrapping to the end of the
    /// previous line.
    pub fn move_left(&mut self, buffer: &TextBuffer) {
        if self.col > 0 {
            self.set_col(self.col - 1);
        } else if self.row > 0 {
            self.row -= 1;
            self.set_col(buffer.line_len(self.row).unwrap_or(0));
        }
    }

    /// Moves the cursor right by one character, wrapping to the start of the
    /// next line.
    pub fn move_right(&mut self, buffer: &TextBuffer) {
        let line_len = buffer.line_len(self.row).unwrap_or(0);
        if self.col < line_len {
            self.set_col(self.col + 1);
        } else if self.row < buffer.last_row() {
            self.row += 1;
            self.set_col(0);
        }
    }

    /// Snaps the column to the sticky column or the line length, whichever is smaller.
    fn restore_sticky_col(&mut self, buffer: &TextBuffer) {
        let line_len = buffer.line_len(self.row).unwrap_or(0);
        self.col = self.sticky_col.min(line_len);
    }
}
