//! Key-event state machine.
//!
//! [`dispatch`] applies one [`InputEvent`] to a [`Document`]. It holds no
//! state of its own. Every cursor move goes through the arms below or the
//! [`left`] / [`right`] composites, so the window always follows the cursor.

use anyhow::Result;

use crate::cursor::Position;
use crate::document::Document;

/// A decoded input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Leave without saving.
    Quit,
    /// Save, then leave.
    Save,
    Up,
    Down,
    Left,
    Right,
    /// Split the line at the cursor.
    Newline,
    /// Delete the character before the cursor.
    Backspace,
    /// Printable text; may hold several chars for composed or pasted input.
    Text(String),
    /// Anything the decoder could not classify. Ignored.
    Unrecognized,
}

/// What the render loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Applies one input event to the document.
///
/// # Errors
///
/// Returns an error if saving fails, or if a buffer edit is rejected
/// because the cursor is out of range.
pub fn dispatch(doc: &mut Document, event: InputEvent) -> Result<Outcome> {
    tracing::debug!("dispatch {:?} at {}", event, doc.cursor.position());
    match event {
        InputEvent::Quit => return Ok(Outcome::Quit),
        InputEvent::Save => {
            doc.save()?;
            return Ok(Outcome::Quit);
        }
        InputEvent::Up => {
            doc.cursor.move_up(&doc.buffer);
            doc.window.up(&doc.cursor);
            doc.window.horizontal_scroll(&doc.cursor);
        }
        InputEvent::Down => {
            doc.cursor.move_down(&doc.buffer);
            doc.window.down(&doc.cursor, &doc.buffer);
            doc.window.horizontal_scroll(&doc.cursor);
        }
        InputEvent::Left => left(doc),
        InputEvent::Right => right(doc),
        InputEvent::Newline => {
            doc.buffer.line_break(&doc.cursor)?;
            doc.modified = true;
            right(doc);
        }
        InputEvent::Backspace => {
            if doc.cursor.position() > Position::default() {
                left(doc);
                doc.buffer.delete(&doc.cursor)?;
                doc.modified = true;
            }
        }
        InputEvent::Text(text) => {
            if !text.is_empty() {
                doc.buffer.write(&doc.cursor, &text)?;
                doc.modified = true;
                for _ in text.chars() {
                    right(doc);
                }
            }
        }
        InputEvent::Unrecognized => {}
    }
    Ok(Outcome::Continue)
}

/// Moves the cursor left and keeps the window in sync.
pub fn left(doc: &mut Document) {
    doc.cursor.move_left(&doc.buffer);
    doc.window.up(&doc.cursor);
    doc.window.horizontal_scroll(&doc.cursor);
}

/// Moves the cursor right and keeps the window in sync.
pub fn right(doc: &mut Document) {
    doc.cursor.move_right(&doc.buffer);
    doc.window.down(&doc.cursor, &doc.buffer);
    doc.window.horizontal_scroll(&doc.cursor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::window::Window;

    fn doc(text: &str) -> Document {
        Document::from_text(text, Window::new(3, 10))
    }

    fn run(doc: &mut Document, events: &[InputEvent]) {
        for event in events {
            assert_eq!(dispatch(doc, event.clone()).unwrap(), Outcome::Continue);
        }
    }

    #[test]
    fn test_quit_does_not_save() {
        let mut d = doc("abc");
        assert_eq!(dispatch(&mut d, InputEvent::Quit).unwrap(), Outcome::Quit);
    }

    #[test]
    fn test_save_without_path_is_an_error() {
        let mut d = doc("abc");
        assert!(dispatch(&mut d, InputEvent::Save).is_err());
    }

    #[test]
    fn test_text_inserts_and_advances_per_char() {
        let mut d = doc("ad");
        d.cursor = Cursor::at(0, 1);
        run(&mut d, &[InputEvent::Text("bc".to_string())]);
        assert_eq!(d.buffer.to_string(), "abcd");
        assert_eq!(d.cursor.position(), Position::new(0, 3));
        assert!(d.modified);
    }

    #[test]
    fn test_empty_text_is_noop() {
        let mut d = doc("ab");
        run(&mut d, &[InputEvent::Text(String::new())]);
        assert!(!d.modified);
        assert_eq!(d.cursor.position(), Position::new(0, 0));
    }

    #[test]
    fn test_newline_moves_to_start_of_new_line() {
        let mut d = doc("hello");
        d.cursor = Cursor::at(0, 3);
        run(&mut d, &[InputEvent::Newline]);
        assert_eq!(d.buffer.lines(), vec!["hel", "lo"]);
        assert_eq!(d.cursor.position(), Position::new(1, 0));
    }

    #[test]
    fn test_backspace_deletes_previous_char() {
        let mut d = doc("abc");
        d.cursor = Cursor::at(0, 2);
        run(&mut d, &[InputEvent::Backspace]);
        assert_eq!(d.buffer.to_string(), "ac");
        assert_eq!(d.cursor.position(), Position::new(0, 1));
    }

    #[test]
    fn test_backspace_at_line_start_joins_lines() {
        let mut d = doc("ab\ncd");
        d.cursor = Cursor::at(1, 0);
        run(&mut d, &[InputEvent::Backspace]);
        assert_eq!(d.buffer.lines(), vec!["abcd"]);
        assert_eq!(d.cursor.position(), Position::new(0, 2));
    }

    #[test]
    fn test_backspace_at_origin_is_noop() {
        let mut d = doc("abc");
        run(&mut d, &[InputEvent::Backspace]);
        assert_eq!(d.buffer.to_string(), "abc");
        assert!(!d.modified);
    }

    #[test]
    fn test_unrecognized_is_ignored() {
        let mut d = doc("abc");
        let before = d.clone();
        run(&mut d, &[InputEvent::Unrecognized]);
        assert_eq!(d.buffer.to_string(), before.buffer.to_string());
        assert_eq!(d.cursor, before.cursor);
        assert_eq!(d.window, before.window);
    }

    #[test]
    fn test_down_scrolls_window() {
        let mut d = doc("0\n1\n2\n3\n4");
        run(&mut d, &[InputEvent::Down, InputEvent::Down, InputEvent::Down]);
        assert_eq!(d.cursor.row(), 3);
        assert_eq!(d.window.current_row(), 1);
        run(&mut d, &[InputEvent::Up, InputEvent::Up, InputEvent::Up]);
        assert_eq!(d.cursor.row(), 0);
        assert_eq!(d.window.current_row(), 0);
    }

    #[test]
    fn test_right_wraps_and_scrolls_window() {
        let mut d = doc("a\nb\nc\nd");
        run(&mut d, &vec![InputEvent::Right; 6]);
        assert_eq!(d.cursor.position(), Position::new(3, 0));
        assert_eq!(d.window.current_row(), 1);
    }

    #[test]
    fn test_typing_past_page_scrolls_horizontally() {
        let mut d = doc("");
        run(&mut d, &[InputEvent::Text("abcdefgh".to_string())]);
        assert_eq!(d.cursor.col(), 8);
        assert_eq!(d.window.current_col(), 3);
        assert_eq!(
            d.window.place_cursor_in_window(&d.cursor),
            Some(Position::new(0, 5))
        );
    }
}
