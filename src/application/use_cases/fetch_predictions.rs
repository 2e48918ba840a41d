use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::application::PredictionClient;
use crate::domain::{DomainError, Prediction};

pub struct FetchPredictionsUseCase {
    client: Arc<dyn PredictionClient>,
}

impl FetchPredictionsUseCase {
    pub fn new(client: Arc<dyn PredictionClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, topic: &str) -> Result<Vec<Prediction>, DomainError> {
        info!("Forecasting for topic: {} (backend={})", topic, self.client.name());

        let start_time = Instant::now();
        let result = self.client.fetch_predictions(topic).await;
        let elapsed = start_time.elapsed();

        match &result {
            Ok(predictions) => info!(
                "Received {} predictions in {:.2?}",
                predictions.len(),
                elapsed
            ),
            Err(e) => warn!(
                category = e.category(),
                "Prediction fetch failed after {:.2?}: {}",
                elapsed,
                e
            ),
        }

        result
    }
}
