use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::prediction_prompt::{
    build_prompt, parse_predictions, response_schema, TEMPERATURE, TOP_P,
};
use crate::application::PredictionClient;
use crate::domain::{DomainError, Prediction};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings for the Gemini API.
#[derive(Clone)]
pub struct GeminiSettings {
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiSettings {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    /// Read settings from the environment:
    ///
    /// | Variable          | Default                                     |
    /// |-------------------|---------------------------------------------|
    /// | `API_KEY`         | required (`GEMINI_API_KEY` also accepted)   |
    /// | `GEMINI_MODEL`    | `gemini-2.5-pro`                            |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com` |
    ///
    /// A missing or blank key is fatal.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let api_key = ["API_KEY", "GEMINI_API_KEY"]
            .into_iter()
            .filter_map(&lookup)
            .find(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                DomainError::missing_credential("API_KEY environment variable not set")
            })?;
        let model = lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(api_key, model, base_url))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
    temperature: f32,
    top_p: f32,
}

/// The subset of the `generateContent` response we read.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    fn into_text(self) -> Result<String, DomainError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(match self.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => DomainError::service(200, format!("prompt blocked: {reason}")),
                None => DomainError::malformed("response has no candidates"),
            });
        };

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.trim().is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
            return Err(DomainError::malformed(format!(
                "candidate has no text (finish reason: {reason})"
            )));
        }

        Ok(text)
    }
}

/// [`PredictionClient`] backed by the Gemini `generateContent` endpoint with
/// structured JSON output.
///
/// One request per call: no retries, no caching and no client-side timeout.
pub struct GeminiPredictionClient {
    client: reqwest::Client,
    settings: GeminiSettings,
    url: String,
}

impl GeminiPredictionClient {
    pub fn new(settings: GeminiSettings) -> Self {
        let url = settings.endpoint();
        Self {
            client: reqwest::Client::new(),
            settings,
            url,
        }
    }

    pub fn from_env() -> Result<Self, DomainError> {
        Ok(Self::new(GeminiSettings::from_env()?))
    }

    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }
}

#[async_trait]
impl PredictionClient for GeminiPredictionClient {
    async fn fetch_predictions(&self, topic: &str) -> Result<Vec<Prediction>, DomainError> {
        let prompt = build_prompt(topic);
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
                temperature: TEMPERATURE,
                top_p: TOP_P,
            },
        };

        let response = self
            .client
            .post(&self.url)
            .header(API_KEY_HEADER, &self.settings.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DomainError::transport(format!("GeminiPredictionClient: request failed: {e}"))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| {
                DomainError::transport(format!("GeminiPredictionClient: unreadable body: {e}"))
            })?;

        if !status.is_success() {
            warn!("GeminiPredictionClient: API returned {status}: {body}");
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| status.to_string());
            return Err(DomainError::service(status.as_u16(), message));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            DomainError::malformed(format!("GeminiPredictionClient: failed to parse response: {e}"))
        })?;

        let text = parsed.into_text()?;
        debug!("GeminiPredictionClient raw response: {text}");
        parse_predictions(&text)
    }

    fn name(&self) -> &str {
        &self.settings.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn settings_require_api_key() {
        let err = GeminiSettings::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.is_fatal());

        let err = GeminiSettings::from_lookup(lookup(&[("API_KEY", "  ")])).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn settings_apply_defaults() {
        let settings = GeminiSettings::from_lookup(lookup(&[("API_KEY", "k")])).unwrap();
        assert_eq!(settings.model(), DEFAULT_MODEL);
        assert_eq!(settings.base_url(), DEFAULT_BASE_URL);
        assert_eq!(
            settings.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-pro:generateContent"
        );
    }

    #[test]
    fn settings_fall_back_to_gemini_api_key() {
        let settings = GeminiSettings::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-2.5-flash"),
            ("GEMINI_BASE_URL", "http://localhost:9000/"),
        ]))
        .unwrap();
        assert_eq!(settings.api_key, "secret");
        assert_eq!(
            settings.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn settings_debug_redacts_key() {
        let settings = GeminiSettings::new("super-secret", DEFAULT_MODEL, DEFAULT_BASE_URL);
        let debug = format!("{settings:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn request_serializes_in_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: "hi" }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
                temperature: TEMPERATURE,
                top_p: TOP_P,
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        let config = &value["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert!(config["responseSchema"].is_object());
        assert!(config["topP"].as_f64().unwrap() > 0.89);
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
    }

    #[test]
    fn into_text_joins_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":"},{"text":"1}"}]},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_text().unwrap(), "{\"a\":1}");
    }

    #[test]
    fn into_text_reports_blocked_prompt_as_service_error() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        let err = response.into_text().unwrap_err();
        assert_eq!(err.category(), "service");
    }

    #[test]
    fn into_text_rejects_empty_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[]},"finishReason":"MAX_TOKENS"}]}"#,
        )
        .unwrap();
        let err = response.into_text().unwrap_err();
        assert!(err.to_string().contains("MAX_TOKENS"));
    }
}
