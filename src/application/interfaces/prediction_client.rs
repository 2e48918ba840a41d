use async_trait::async_trait;

use crate::domain::{DomainError, Prediction};

/// Turns a topic into strategic predictions by asking a generation service.
///
/// Implementors own prompt construction, transport and response parsing.
/// Callers are expected to reject blank topics before calling; implementations
/// do not re-validate.
#[async_trait]
pub trait PredictionClient: Send + Sync {
    /// Issue exactly one request for `topic` and return the parsed predictions.
    ///
    /// Never retries. Every failure on the request/parse path is reported as a
    /// recoverable [`DomainError`].
    async fn fetch_predictions(&self, topic: &str) -> Result<Vec<Prediction>, DomainError>;

    /// Human-readable backend name, for logging.
    fn name(&self) -> &str;
}
