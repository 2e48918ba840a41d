mod fetch_predictions;
mod view_controller;

pub use fetch_predictions::*;
pub use view_controller::*;
