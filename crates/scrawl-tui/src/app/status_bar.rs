//! Status row shown under the document.
//!
//! Shows the file name, a modified marker, and the cursor position on the
//! left and the key hints on the right. A pending message replaces the
//! whole row until the next key.

use scrawl_core::Document;

const KEY_HINTS: &str = "Esc save+quit  Ctrl-Q quit";

/// Formats the status row, padded or cut to exactly `width` chars.
pub(super) fn status_text(doc: &Document, message: Option<&str>, width: usize) -> String {
    let text = match message {
        Some(message) => message.to_string(),
        None => {
            let pos = doc.cursor.position();
            let modified = if doc.modified { " [+]" } else { "" };
            let left = format!(
                "{}{modified}  Ln {}, Col {}",
                doc.title,
                pos.row + 1,
                pos.col + 1
            );
            let used = left.chars().count() + KEY_HINTS.chars().count();
            if used < width {
                format!("{left}{}{KEY_HINTS}", " ".repeat(width - used))
            } else {
                left
            }
        }
    };
    fit(&text, width)
}

fn fit(text: &str, width: usize) -> String {
    let mut fitted: String = text.chars().take(width).collect();
    let len = fitted.chars().count();
    fitted.extend(std::iter::repeat(' ').take(width - len));
    fitted
}
