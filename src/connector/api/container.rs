use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::application::{FetchPredictionsUseCase, PredictionClient};
use crate::connector::adapter::{GeminiPredictionClient, MockPredictionClient};
use crate::domain::Theme;

/// Simulated round trip for the mock backend, so the loading state is visible.
const MOCK_LATENCY: Duration = Duration::from_millis(800);

pub struct ContainerConfig {
    /// Answer from canned predictions instead of calling the Gemini API.
    /// No credential is required in this mode.
    pub mock: bool,
    /// Theme the view starts in.
    pub theme: Theme,
}

pub struct Container {
    client: Arc<dyn PredictionClient>,
    fetch_use_case: Arc<FetchPredictionsUseCase>,
    theme: Theme,
}

impl Container {
    /// Wire up the prediction backend.
    ///
    /// Fails when the Gemini credential is missing: the application must not
    /// start without it.
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let client: Arc<dyn PredictionClient> = if config.mock {
            debug!("Using mock prediction client");
            Arc::new(MockPredictionClient::new().with_latency(MOCK_LATENCY))
        } else {
            let gemini = GeminiPredictionClient::from_env()?;
            info!(
                "Using Gemini model {} at {}",
                gemini.settings().model(),
                gemini.settings().base_url()
            );
            Arc::new(gemini)
        };

        Ok(Self::with_client(client, config.theme))
    }

    /// Build around an already constructed client.
    pub fn with_client(client: Arc<dyn PredictionClient>, theme: Theme) -> Self {
        let fetch_use_case = Arc::new(FetchPredictionsUseCase::new(Arc::clone(&client)));
        Self {
            client,
            fetch_use_case,
            theme,
        }
    }

    pub fn fetch_use_case(&self) -> Arc<FetchPredictionsUseCase> {
        Arc::clone(&self.fetch_use_case)
    }

    pub fn client_name(&self) -> &str {
        self.client.name()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}
