//! Top-level application tying together the document, input, and painter.

mod status_bar;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use scrawl_config::EditorConfig;
use scrawl_core::{dispatch, Document, Frame, Markers, Outcome, Window};

use crate::editor::{paint, InputDecoder, StatusLine};
use crate::terminal::TerminalGuard;

/// Arguments passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    /// File to edit.
    pub file: PathBuf,
}

/// The running editor: one document plus the terminal-facing state.
#[derive(Debug)]
pub struct App {
    doc: Document,
    decoder: InputDecoder,
    markers: Markers,
    show_status_bar: bool,
    screen_cols: usize,
    /// Transient status message, cleared on the next event.
    message: Option<String>,
}

impl App {
    /// Loads the file and sizes the window from the current terminal.
    ///
    /// Runs before the terminal enters raw mode, so a load error reaches the
    /// user on a normal screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size cannot be read or the file
    /// cannot be opened.
    pub fn open(args: &StartupArgs, config: &EditorConfig) -> Result<Self> {
        let (cols, rows) = crossterm::terminal::size().context("failed to read terminal size")?;
        Self::with_size(args, config, cols, rows)
    }

    /// Loads the file for a terminal of `cols` x `rows` cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn with_size(
        args: &StartupArgs,
        config: &EditorConfig,
        cols: u16,
        rows: u16,
    ) -> Result<Self> {
        let (cols, rows) = (usize::from(cols), usize::from(rows));
        let text_rows = if config.show_status_bar {
            rows.saturating_sub(1)
        } else {
            rows
        };
        // The last column stays free so the cursor can sit after a full-width line.
        let window = Window::new(text_rows, cols.saturating_sub(1))
            .with_margins(config.left_margin, config.right_margin);
        tracing::debug!("terminal {cols}x{rows}, window {:?}", window);

        let doc = Document::open(&args.file, window)?;
        Ok(Self {
            doc,
            decoder: InputDecoder::new(config.tab_width),
            markers: Markers {
                scroll: config.scroll_marker,
                overflow: config.overflow_marker,
            },
            show_status_bar: config.show_status_bar,
            screen_cols: cols,
            message: None,
        })
    }

    /// Returns the document being edited.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Runs the edit loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up, read, or drawn to.
    pub fn run(&mut self) -> Result<()> {
        let _guard = TerminalGuard::enter()?;
        let mut stdout = io::stdout();

        loop {
            self.draw(&mut stdout)?;
            let event = event::read().context("failed to read terminal event")?;
            if self.handle_event(event) == Outcome::Quit {
                break;
            }
        }

        tracing::info!("Leaving editor");
        Ok(())
    }

    /// Paints the current frame and status row.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        let frame = Frame::compose(&self.doc, &self.markers);
        let status = self.show_status_bar.then(|| StatusLine {
            row: self.doc.window.row_count(),
            text: status_bar::status_text(&self.doc, self.message.as_deref(), self.screen_cols),
        });
        paint(out, &frame, status.as_ref())
    }

    /// Applies one terminal event to the document.
    ///
    /// A failed edit or save is reported on the status row and the loop
    /// keeps going, so unsaved edits are not lost.
    pub fn handle_event(&mut self, event: Event) -> Outcome {
        self.message = None;
        for input in self.decoder.decode(event) {
            match dispatch(&mut self.doc, input) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Quit) => return Outcome::Quit,
                Err(e) => {
                    tracing::error!("{e:#}");
                    self.message = Some(format!("Error: {e:#}"));
                    break;
                }
            }
        }
        Outcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use scrawl_core::Position;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app_for(path: PathBuf, config: &EditorConfig) -> App {
        App::with_size(&StartupArgs { file: path }, config, 20, 6).unwrap()
    }

    #[test]
    fn test_window_sized_from_terminal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "x").unwrap();

        let app = app_for(path.clone(), &EditorConfig::default());
        assert_eq!(app.document().window.row_count(), 5);
        assert_eq!(app.document().window.col_count(), 19);

        let config = EditorConfig {
            show_status_bar: false,
            ..Default::default()
        };
        let app = app_for(path, &config);
        assert_eq!(app.document().window.row_count(), 6);
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = StartupArgs {
            file: dir.path().join("missing.txt"),
        };
        assert!(App::with_size(&args, &EditorConfig::default(), 80, 24).is_err());
    }

    #[test]
    fn test_typing_and_quit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "bc").unwrap();

        let mut app = app_for(path.clone(), &EditorConfig::default());
        assert_eq!(app.handle_event(key(KeyCode::Char('a'))), Outcome::Continue);
        assert_eq!(app.document().buffer.to_string(), "abc");
        assert_eq!(app.document().cursor.position(), Position::new(0, 1));

        let quit = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(app.handle_event(quit), Outcome::Quit);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "bc");
    }

    #[test]
    fn test_escape_saves_and_quits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "line\n").unwrap();

        let mut app = app_for(path.clone(), &EditorConfig::default());
        for _ in 0..4 {
            app.handle_event(key(KeyCode::Right));
        }
        app.handle_event(key(KeyCode::Enter));
        app.handle_event(Event::Paste("two\nthree".to_string()));
        assert_eq!(app.handle_event(key(KeyCode::Esc)), Outcome::Quit);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line\ntwo\nthree");
    }

    #[test]
    fn test_failed_save_reports_and_keeps_running() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        let path = sub.join("a.txt");
        std::fs::write(&path, "draft").unwrap();

        let mut app = app_for(path, &EditorConfig::default());
        app.handle_event(key(KeyCode::Char('!')));
        std::fs::remove_dir_all(&sub).unwrap();

        assert_eq!(app.handle_event(key(KeyCode::Esc)), Outcome::Continue);
        let message = app.message.clone().unwrap();
        assert!(message.contains("failed to write file"));
        assert_eq!(app.document().buffer.to_string(), "!draft");

        // The message lasts until the next key.
        app.handle_event(key(KeyCode::Right));
        assert!(app.message.is_none());
    }

    #[test]
    fn test_draw_paints_text_and_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let app = app_for(path, &EditorConfig::default());
        let mut out = Vec::new();
        app.draw(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("hello"));
        assert!(output.contains("notes.txt"));
    }

    #[test]
    fn test_draw_without_status_bar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let config = EditorConfig {
            show_status_bar: false,
            ..Default::default()
        };
        let app = app_for(path, &config);
        let mut out = Vec::new();
        app.draw(&mut out).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains("notes.txt"));
    }
}
