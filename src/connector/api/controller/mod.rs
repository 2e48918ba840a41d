pub mod interactive_controller;
pub mod predict_controller;

pub use interactive_controller::InteractiveController;
pub use predict_controller::PredictController;
