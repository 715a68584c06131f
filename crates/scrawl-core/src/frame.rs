//! The visible slice of a document, ready to paint.

use crate::cursor::Position;
use crate::document::Document;

/// Glyphs used when a line does not fit the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    /// Leads the cursor's row while the view is scrolled horizontally.
    pub scroll: char,
    /// Ends a line that is wider than the window.
    pub overflow: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            scroll: '↞',
            overflow: '↠',
        }
    }
}

/// One frame of screen content, in window coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Text for each screen row, top to bottom.
    pub lines: Vec<String>,
    /// Where to put the hardware cursor. `None` if the cursor fell outside
    /// the window.
    pub cursor: Option<Position>,
}

impl Frame {
    /// Builds the frame for the document's current window.
    ///
    /// Only the cursor's row is shifted by the horizontal offset; it gets the
    /// scroll marker in its first column. Lines wider than the window are cut
    /// one column short and end with the overflow marker.
    pub fn compose(doc: &Document, markers: &Markers) -> Self {
        let window = &doc.window;
        let col_count = window.col_count();
        let current_col = window.current_col();

        let lines = window
            .visible_rows(&doc.buffer)
            .map(|row| {
                let text = doc.buffer.line_text(row).unwrap_or_default();
                let mut chars: Vec<char> = text.chars().collect();
                if row == doc.cursor.row() && current_col > 0 {
                    let rest = chars.get(current_col + 1..).unwrap_or_default();
                    chars = std::iter::once(markers.scroll)
                        .chain(rest.iter().copied())
                        .collect();
                }
                if chars.len() > col_count {
                    chars.truncate(col_count - 1);
                    chars.push(markers.overflow);
                }
                chars.into_iter().collect()
            })
            .collect();

        let cursor = window.place_cursor_in_window(&doc.cursor);
        if cursor.is_none() {
            tracing::warn!(
                "cursor {} is outside the window at ({}, {})",
                doc.cursor.position(),
                window.current_row(),
                current_col
            );
        }

        Self { lines, cursor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::dispatch::{dispatch, InputEvent};
    use crate::window::Window;

    fn compose(doc: &Document) -> Frame {
        Frame::compose(doc, &Markers::default())
    }

    #[test]
    fn test_short_lines_are_shown_verbatim() {
        let doc = Document::from_text("ab\ncd", Window::new(5, 10));
        let frame = compose(&doc);
        assert_eq!(frame.lines, vec!["ab", "cd"]);
        assert_eq!(frame.cursor, Some(Position::new(0, 0)));
    }

    #[test]
    fn test_empty_document_has_one_empty_row() {
        let doc = Document::new(Window::new(5, 10));
        let frame = compose(&doc);
        assert_eq!(frame.lines, vec![""]);
    }

    #[test]
    fn test_rows_limited_to_window_height() {
        let doc = Document::from_text("0\n1\n2\n3\n4", Window::new(2, 10));
        assert_eq!(compose(&doc).lines, vec!["0", "1"]);
    }

    #[test]
    fn test_long_line_gets_overflow_marker() {
        let doc = Document::from_text("abcdefghijkl", Window::new(5, 10));
        assert_eq!(compose(&doc).lines, vec!["abcdefghi↠"]);
    }

    #[test]
    fn test_line_of_exact_width_is_not_marked() {
        let doc = Document::from_text("abcdefghij", Window::new(5, 10));
        assert_eq!(compose(&doc).lines, vec!["abcdefghij"]);
    }

    #[test]
    fn test_scrolled_cursor_row_gets_scroll_marker() {
        let text = "0123456789abcdefghij\n0123456789abcdefghij";
        let mut doc = Document::from_text(text, Window::new(5, 10));
        doc.cursor = Cursor::at(0, 7);
        dispatch(&mut doc, InputEvent::Right).unwrap();
        assert_eq!(doc.window.current_col(), 3);

        let frame = compose(&doc);
        // Cursor row starts at char current_col + 1 behind the marker.
        assert_eq!(frame.lines[0], "↞456789ab↠");
        assert_eq!(frame.lines[1], "012345678↠");
        assert_eq!(frame.cursor, Some(Position::new(0, 5)));
    }

    #[test]
    fn test_custom_markers() {
        let doc = Document::from_text("abcdefghijkl", Window::new(5, 10));
        let markers = Markers {
            scroll: '<',
            overflow: '>',
        };
        assert_eq!(Frame::compose(&doc, &markers).lines, vec!["abcdefghi>"]);
    }
}
