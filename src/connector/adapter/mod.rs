mod gemini_client;
mod mock_prediction_client;
pub mod prediction_prompt;

pub use gemini_client::*;
pub use mock_prediction_client::*;
