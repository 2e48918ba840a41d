mod prediction;
mod theme;
mod view_state;

pub use prediction::*;
pub use theme::*;
pub use view_state::*;
