//! Terminal front-end for scrawl.
//!
//! Owns the crossterm session: decodes key events for the core dispatcher,
//! paints each frame, and runs the blocking edit loop.

mod app;
pub mod editor;
mod terminal;

pub use app::{App, StartupArgs};
