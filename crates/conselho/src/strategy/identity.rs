use serde::{Deserialize, Serialize};

/// Singleton document id for the identity canvas.
pub const IDENTITY_DOC: &str = "main";

/// Organizational identity canvas. Every field defaults so documents written
/// by older clients with missing keys still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyIdentity {
    #[serde(default)]
    pub dream: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub mission: String,
    #[serde(default)]
    pub vision: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub value_proposition: ValueProposition,
    #[serde(default)]
    pub competitive_advantage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueProposition {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}
