pub mod input;
pub mod painter;

pub use input::InputDecoder;
pub use painter::{paint, StatusLine};
