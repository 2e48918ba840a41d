use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{InteractiveController, PredictController};

pub struct Router<'a> {
    predict_controller: PredictController<'a>,
    interactive_controller: InteractiveController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            predict_controller: PredictController::new(container),
            interactive_controller: InteractiveController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Predict { topic, format } => {
                self.predict_controller.predict(topic, format).await
            }
            Commands::Tui => self.interactive_controller.run().await,
        }
    }
}
