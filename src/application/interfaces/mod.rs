mod prediction_client;
mod theme_sink;

pub use prediction_client::*;
pub use theme_sink::*;
