//! Keyboard input handling for the editor.
//!
//! Translates crossterm events into the core's [`InputEvent`]s. The
//! dispatcher never sees raw key codes.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use scrawl_core::InputEvent;

/// Maps terminal events to editor input events.
#[derive(Debug, Clone)]
pub struct InputDecoder {
    tab_width: usize,
}

impl InputDecoder {
    /// Creates a decoder whose Tab key inserts `tab_width` spaces.
    pub fn new(tab_width: usize) -> Self {
        Self { tab_width }
    }

    /// Decodes one terminal event.
    ///
    /// Most events yield a single input event; a bracketed paste yields a
    /// run of text and newline events.
    pub fn decode(&self, event: Event) -> Vec<InputEvent> {
        match event {
            Event::Key(key) => vec![self.decode_key(key)],
            Event::Paste(text) => self.decode_paste(&text),
            _ => vec![InputEvent::Unrecognized],
        }
    }

    /// Handles a single key press.
    fn decode_key(&self, key: KeyEvent) -> InputEvent {
        if key.kind == KeyEventKind::Release {
            return InputEvent::Unrecognized;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') if ctrl => InputEvent::Quit,
            // Ctrl/Alt chords are not text.
            KeyCode::Char(_) if ctrl || alt => InputEvent::Unrecognized,
            KeyCode::Char(c) if c.is_control() => InputEvent::Unrecognized,
            KeyCode::Char(c) => InputEvent::Text(c.to_string()),
            KeyCode::Esc => InputEvent::Save,
            KeyCode::Up => InputEvent::Up,
            KeyCode::Down => InputEvent::Down,
            KeyCode::Left => InputEvent::Left,
            KeyCode::Right => InputEvent::Right,
            KeyCode::Enter => InputEvent::Newline,
            KeyCode::Backspace | KeyCode::Delete => InputEvent::Backspace,
            KeyCode::Tab => InputEvent::Text(" ".repeat(self.tab_width)),
            _ => InputEvent::Unrecognized,
        }
    }

    /// Splits pasted text into line runs joined by newline events.
    fn decode_paste(&self, text: &str) -> Vec<InputEvent> {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let tab = " ".repeat(self.tab_width);

        let mut events = Vec::new();
        for (i, segment) in normalized.split('\n').enumerate() {
            if i > 0 {
                events.push(InputEvent::Newline);
            }
            let mut run = String::new();
            for c in segment.chars() {
                match c {
                    '\t' => run.push_str(&tab),
                    c if c.is_control() => {}
                    c => run.push(c),
                }
            }
            if !run.is_empty() {
                events.push(InputEvent::Text(run));
            }
        }
        events
    }
}
