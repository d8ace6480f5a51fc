use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Perplexity chat completion response (success shape)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PerplexityChatResponse {
    pub id: String,
    pub model: String,
    pub object: String,
    pub created: u64,

    /// Search citations; an extension over the reference chat schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<String>>,

    pub choices: Vec<PerplexityChoice>,
    pub usage: PerplexityUsage,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PerplexityChoice {
    /// Present on non-streaming responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<PerplexityMessage>,

    /// Present on stream chunks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<PerplexityDelta>,

    #[serde(default)]
    pub index: u32,

    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PerplexityMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PerplexityDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PerplexityUsage {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}

/// Perplexity native error envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PerplexityErrorResponse {
    pub error: PerplexityErrorBody,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PerplexityErrorBody {
    pub message: String,

    #[serde(rename = "type")]
    pub error_type: String,

    /// Numeric on the wire today; kept loose so a string code still decodes
    pub code: Value,
}

/// One parsed SSE chunk of a Perplexity chat stream.
///
/// `id` is optional: some chunks arrive without one and the transformer
/// substitutes the caller-supplied fallback id.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PerplexityStreamChunk {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub object: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<PerplexityUsage>,

    #[serde(default)]
    pub choices: Vec<PerplexityChoice>,
}
