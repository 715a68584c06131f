//! Viewport onto the buffer.
//!
//! The window is a fixed-size rectangle whose top-left corner
//! (`current_row`, `current_col`) is expressed in buffer coordinates.
//! Vertical scrolling follows the cursor one row at a time; horizontal
//! scrolling snaps to pages.

use crate::buffer::TextBuffer;
use crate::cursor::{Cursor, Position};

/// Columns kept visible to the left of the cursor after a horizontal jump.
pub const DEFAULT_LEFT_MARGIN: usize = 5;

/// Columns reserved at the right edge before the view jumps to the next page.
pub const DEFAULT_RIGHT_MARGIN: usize = 2;

/// The visible sub-rectangle of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    row_count: usize,
    col_count: usize,
    current_row: usize,
    current_col: usize,
    left_margin: usize,
    right_margin: usize,
}

impl Window {
    /// Creates a window of the given size, scrolled to the origin.
    ///
    /// Sizes below one are raised to one.
    pub fn new(row_count: usize, col_count: usize) -> Self {
        Self {
            row_count: row_count.max(1),
            col_count: col_count.max(1),
            current_row: 0,
            current_col: 0,
            left_margin: DEFAULT_LEFT_MARGIN,
            right_margin: DEFAULT_RIGHT_MARGIN,
        }
    }

    /// Overrides the horizontal paging margins.
    pub fn with_margins(mut self, left_margin: usize, right_margin: usize) -> Self {
        self.left_margin = left_margin;
        self.right_margin = right_margin;
        self
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn col_count(&self) -> usize {
        self.col_count
    }

    pub fn current_row(&self) -> usize {
        self.current_row
    }

    pub fn current_col(&self) -> usize {
        self.current_col
    }

    /// Buffer row shown on the bottom line of the window.
    pub fn last_row(&self) -> usize {
        self.current_row + self.row_count - 1
    }

    /// Scrolls up one row when the cursor has just left through the top edge.
    pub fn up(&mut self, cursor: &Cursor) {
        if self.current_row > 0 && cursor.row() + 1 == self.current_row {
            self.current_row -= 1;
        }
    }

    /// Scrolls down one row when the cursor has just left through the bottom edge.
    pub fn down(&mut self, cursor: &Cursor, buffer: &TextBuffer) {
        if cursor.row() == self.last_row() + 1 && self.last_row() < buffer.last_row() {
            self.current_row += 1;
        }
    }

    /// Recomputes `current_col` from the cursor column.
    ///
    /// The usable width (`col_count - right_margin`) splits the line into
    /// pages, and the view jumps to `page * col_count - right_margin -
    /// left_margin`. On far pages that offset can overshoot the cursor in
    /// either direction, so the result is clamped to keep the cursor right
    /// of the scroll marker and inside the window.
    pub fn horizontal_scroll(&mut self, cursor: &Cursor) {
        let col = cursor.col();
        let page_width = self.col_count.saturating_sub(self.right_margin).max(1);
        let page = col / page_width;
        let paged = (page * self.col_count)
            .saturating_sub(self.right_margin)
            .saturating_sub(self.left_margin);
        self.current_col = paged
            .min(col.saturating_sub(1))
            .max(col.saturating_sub(self.col_count - 1));
    }

    /// Returns the cursor position relative to the window's top-left corner.
    ///
    /// `None` means the cursor is outside the window, which the scroll
    /// rules above should never allow.
    pub fn place_cursor_in_window(&self, cursor: &Cursor) -> Option<Position> {
        let row = cursor.row().checked_sub(self.current_row)?;
        let col = cursor.col().checked_sub(self.current_col)?;
        if row >= self.row_count || col >= self.col_count {
            return None;
        }
        Some(Position::new(row, col))
    }

    /// Buffer rows currently on screen, clipped to the buffer.
    pub fn visible_rows(&self, buffer: &TextBuffer) -> std::ops::Range<usize> {
        let end = (self.current_row + self.row_count).min(buffer.len_lines());
        self.current_row.min(end)..end
    }
}
