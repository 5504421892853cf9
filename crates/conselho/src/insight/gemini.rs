use std::time::Duration;

use serde_json::{json, Value};

use super::{AnalysisClient, AnalysisError};
use crate::config::InsightConfig;

/// Synchronous Gemini `generateContent` client. Callers on an async runtime
/// are expected to run it on the blocking pool.
pub struct GeminiClient {
    api_key: String,
    model: String,
    endpoint: String,
    agent: ureq::Agent,
}

impl GeminiClient {
    /// Builds a client from config; `None` when no API key is present.
    pub fn from_config(config: &InsightConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(Self::new(api_key, &config.model, &config.endpoint))
    }

    pub fn new(api_key: String, model: &str, endpoint: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();
        Self {
            api_key,
            model: model.to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            agent,
        }
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }
}

impl AnalysisClient for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .agent
            .post(&self.request_url())
            .set("content-type", "application/json")
            .send_json(body)
            .map_err(|err| AnalysisError::Transport(err.to_string()))?;

        let payload: Value = response
            .into_json()
            .map_err(|err| AnalysisError::Malformed(err.to_string()))?;

        extract_text(&payload).ok_or(AnalysisError::EmptyResponse)
    }
}

fn extract_text(payload: &Value) -> Option<String> {
    let text = payload
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()?;

    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
