//! Generative-text collaborator: prompt in, narrative (or JSON) out.
//!
//! The engine never depends on a model call succeeding; callers persisting
//! assessment records must degrade to [`ANALYSIS_UNAVAILABLE`] when the
//! backend errors instead of failing the save.

mod gemini;

pub use gemini::GeminiClient;

/// Placeholder narrative stored whenever the model call fails or is disabled.
pub const ANALYSIS_UNAVAILABLE: &str = "Analysis unavailable.";

/// Outbound text-generation hook.
pub trait AnalysisClient: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, AnalysisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("no API key configured; analysis disabled")]
    Disabled,
    #[error("analysis backend unreachable: {0}")]
    Transport(String),
    #[error("analysis backend returned no text")]
    EmptyResponse,
    #[error("malformed analysis response: {0}")]
    Malformed(String),
}

/// Client used when no API key is configured: every call reports `Disabled`
/// so saves fall through to the placeholder narrative.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledClient;

impl AnalysisClient for DisabledClient {
    fn generate(&self, _prompt: &str) -> Result<String, AnalysisError> {
        Err(AnalysisError::Disabled)
    }
}

/// Strips markdown code fences the model likes to wrap JSON payloads in.
pub fn extract_json(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the language tag (e.g. "json") on the opening fence line.
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
