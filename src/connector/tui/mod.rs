//! Terminal front end: palette, key bindings, rendering and the event loop.

mod interactive;
mod keys;
mod palette;
pub mod render;

pub use interactive::*;
pub use keys::*;
pub use palette::*;
