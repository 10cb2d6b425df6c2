//! Gemini `generateContent` client.

use std::time::Duration;

use lumen_config::CoachConfig;
use serde::{Deserialize, Serialize};

use crate::error::CoachError;
use crate::http::check_response;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// HTTP client for one Gemini model.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client from config.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::NotConfigured`] without an API key, or
    /// [`CoachError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &CoachConfig) -> Result<Self, CoachError> {
        if !config.is_configured() {
            return Err(CoachError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("lumen/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.trim().to_string(),
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full request URL, key included.
    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint,
            urlencoding::encode(&self.model),
            urlencoding::encode(&self.api_key)
        )
    }

    /// Send `prompt` as a single user turn and return the first candidate's text.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError`] if the request fails, the API returns a
    /// non-success status, or the response holds no text.
    pub async fn generate(&self, prompt: &str) -> Result<String, CoachError> {
        let body = GenerateRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: prompt }],
            }],
        };
        tracing::debug!(model = %self.model, chars = prompt.len(), "requesting insight");
        let resp = check_response(self.http.post(self.url()).json(&body).send().await?).await?;
        let raw = resp.text().await?;
        parse_response(&raw)
    }
}

/// First non-empty candidate text in a `generateContent` response body.
pub(crate) fn parse_response(raw: &str) -> Result<String, CoachError> {
    let data: GenerateResponse =
        serde_json::from_str(raw).map_err(|e| CoachError::Parse(e.to_string()))?;
    data.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or(CoachError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"{
        "candidates": [
            {
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "  We've noticed a rapid pace. A glass of water now can help.\n" }
                    ]
                },
                "finishReason": "STOP"
            }
        ],
        "usageMetadata": { "promptTokenCount": 310, "candidatesTokenCount": 18 }
    }"#;

    fn configured() -> CoachConfig {
        CoachConfig {
            api_key: "AIza key".into(),
            endpoint: "https://example.test/v1beta/".into(),
            ..CoachConfig::default()
        }
    }

    #[test]
    fn parses_first_candidate_text() {
        assert_eq!(
            parse_response(FIXTURE).unwrap(),
            "We've noticed a rapid pace. A glass of water now can help."
        );
    }

    #[test]
    fn no_candidates_is_empty_response() {
        let err = parse_response(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap_err();
        assert!(matches!(err, CoachError::EmptyResponse));
        let err = parse_response(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap_err();
        assert!(matches!(err, CoachError::EmptyResponse));
    }

    #[test]
    fn malformed_body_is_parse_error() {
        assert!(matches!(parse_response("<html>"), Err(CoachError::Parse(_))));
    }

    #[test]
    fn request_body_shape() {
        let body = GenerateRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: "hi" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"contents":[{"role":"user","parts":[{"text":"hi"}]}]})
        );
    }

    #[test]
    fn url_includes_model_and_encoded_key() {
        let client = GeminiClient::new(&configured()).unwrap();
        assert_eq!(
            client.url(),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent?key=AIza%20key"
        );
    }

    #[test]
    fn missing_key_is_not_configured() {
        let err = GeminiClient::new(&CoachConfig::default()).unwrap_err();
        assert!(matches!(err, CoachError::NotConfigured));
    }
}
