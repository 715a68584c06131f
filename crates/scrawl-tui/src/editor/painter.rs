//! Paints a composed frame onto the terminal.
//!
//! Works on any `io::Write` so the output can be captured in tests.

use std::io::Write;

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use scrawl_core::Frame;

/// A line of text pinned to a screen row below the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub row: usize,
    pub text: String,
}

/// Clears the screen, draws the frame and status line, then places the
/// hardware cursor.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn paint<W: Write>(out: &mut W, frame: &Frame, status: Option<&StatusLine>) -> Result<()> {
    queue!(out, Clear(ClearType::All)).context("failed to clear screen")?;

    for (row, line) in frame.lines.iter().enumerate() {
        queue!(out, MoveTo(0, to_u16(row)), Print(line)).context("failed to draw line")?;
    }

    if let Some(status) = status {
        queue!(out, MoveTo(0, to_u16(status.row)), Print(&status.text))
            .context("failed to draw status line")?;
    }

    // Out-of-window cursor is already logged by the frame; park it at the origin.
    let cursor = frame.cursor.unwrap_or_default();
    queue!(out, MoveTo(to_u16(cursor.col), to_u16(cursor.row)))
        .context("failed to place cursor")?;

    out.flush().context("failed to flush terminal output")
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
