use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::domain::{DomainError, Prediction, PREDICTION_COUNT};

/// Sampling temperature; high on purpose, the forecasts should be varied.
pub const TEMPERATURE: f32 = 0.8;
/// Nucleus-sampling threshold.
pub const TOP_P: f32 = 0.9;

/// Build the forecasting instruction for `topic`.
pub fn build_prompt(topic: &str) -> String {
    format!(
        "Act as a world-class Future Trend Forecaster. Your expertise is in identifying \
nascent trends and predicting market shifts.

Analyze the trajectory of the following industry, platform, or niche: \"{topic}\".

Based on current data, technological advancements, consumer behavior shifts, and \
socio-economic factors, identify the {PREDICTION_COUNT} most critical and actionable moves \
someone can make *now* to be significantly ahead of the curve when the mainstream catches on.

For each move, provide a clear title and a detailed description. The description should \
explain the 'why' behind the prediction and the 'how' for taking action.

Generate exactly {PREDICTION_COUNT} predictions."
    )
}

/// Structured-output schema sent alongside the prompt, in the service's
/// OpenAPI-subset notation.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "predictions": {
                "type": "ARRAY",
                "description": "A list of three strategic moves or predictions.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": {
                            "type": "STRING",
                            "description": "A short, catchy title for the strategic move."
                        },
                        "description": {
                            "type": "STRING",
                            "description": "A detailed explanation of the move, its rationale, and how to implement it."
                        }
                    },
                    "required": ["title", "description"]
                }
            }
        },
        "required": ["predictions"]
    })
}

#[derive(Deserialize)]
struct PredictionEnvelope {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

/// Parse the model's text output into predictions.
///
/// The service is asked for bare JSON, so the trimmed text must parse as a
/// whole; prose or code fences around it are a malformed response. A missing
/// or empty `predictions` array is an error. At most [`PREDICTION_COUNT`]
/// entries are kept.
pub fn parse_predictions(text: &str) -> Result<Vec<Prediction>, DomainError> {
    let trimmed = text.trim();

    let envelope: PredictionEnvelope = serde_json::from_str(trimmed).map_err(|e| {
        debug!("Unparseable model output: {trimmed}");
        DomainError::malformed(format!("model output is not a prediction list: {e}"))
    })?;

    let mut predictions = envelope.predictions;
    if predictions.is_empty() {
        return Err(DomainError::EmptyPredictions);
    }
    if predictions.len() != PREDICTION_COUNT {
        warn!(
            "Expected {} predictions, model returned {}",
            PREDICTION_COUNT,
            predictions.len()
        );
        predictions.truncate(PREDICTION_COUNT);
    }

    Ok(predictions)
}
