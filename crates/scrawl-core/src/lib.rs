/// Editing core for the scrawl terminal editor.
///
/// Holds the text buffer, the cursor, the viewport window, and the
/// dispatcher that applies one input event at a time to a `Document`.
/// Nothing here touches the terminal.
pub mod buffer;
pub mod cursor;
pub mod dispatch;
pub mod document;
pub mod frame;
pub mod window;

pub use buffer::TextBuffer;
pub use cursor::{Cursor, Position};
pub use dispatch::{dispatch, InputEvent, Outcome};
pub use document::Document;
pub use frame::{Frame, Markers};
pub use window::Window;
