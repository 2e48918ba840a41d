use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::application::PredictionClient;
use crate::domain::{DomainError, Prediction};

/// What a [`MockPredictionClient`] answers with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockBehavior {
    /// Three canned predictions mentioning the topic.
    Canned,
    Fixed(Vec<Prediction>),
    TransportFailure,
    MalformedResponse,
    EmptyPredictions,
}

/// Offline [`PredictionClient`] for demos (`--mock`) and tests.
///
/// Records every topic it is asked about so tests can assert that no request
/// was made.
pub struct MockPredictionClient {
    behavior: MockBehavior,
    latency: Duration,
    calls: AtomicUsize,
    topics: Mutex<Vec<String>>,
}

impl MockPredictionClient {
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::Canned)
    }

    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            latency: Duration::ZERO,
            calls: AtomicUsize::new(0),
            topics: Mutex::new(Vec::new()),
        }
    }

    pub fn with_predictions(predictions: Vec<Prediction>) -> Self {
        Self::with_behavior(MockBehavior::Fixed(predictions))
    }

    /// Delay every answer, so the loading state is visible in the UI.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn topics(&self) -> Vec<String> {
        self.topics.lock().map(|t| t.clone()).unwrap_or_default()
    }

    fn canned(topic: &str) -> Vec<Prediction> {
        vec![
            Prediction::new(
                format!("Build an audience around {topic}"),
                format!("Communities around {topic} compound. Start publishing before incumbents."),
            ),
            Prediction::new(
                format!("Automate the {topic} workflow"),
                format!("Tooling for {topic} is still manual. Package the repetitive steps."),
            ),
            Prediction::new(
                format!("Bet on {topic} infrastructure"),
                format!("When {topic} goes mainstream the tooling layer captures the value."),
            ),
        ]
    }
}

impl Default for MockPredictionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionClient for MockPredictionClient {
    async fn fetch_predictions(&self, topic: &str) -> Result<Vec<Prediction>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut topics) = self.topics.lock() {
            topics.push(topic.to_string());
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        debug!("MockPredictionClient answering {:?} for {}", self.behavior, topic);

        match &self.behavior {
            MockBehavior::Canned => Ok(Self::canned(topic)),
            MockBehavior::Fixed(predictions) => Ok(predictions.clone()),
            MockBehavior::TransportFailure => {
                Err(DomainError::transport("mock: connection refused"))
            }
            MockBehavior::MalformedResponse => {
                Err(DomainError::malformed("mock: expected value at line 1 column 1"))
            }
            MockBehavior::EmptyPredictions => Err(DomainError::EmptyPredictions),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
