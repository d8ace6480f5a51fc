use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::provider::{Endpoint, Provider};

/// Token-count placeholder meaning "not reported by this provider".
/// Distinct from a real zero count and preserved verbatim by callers.
pub const UNKNOWN_TOKENS: i64 = -1;

/// Gateway-facing request: unified field names only, tagged with the
/// endpoint kind it targets. Parsing the public API request into this
/// shape is the caller's job.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UnifiedRequest {
    pub endpoint: Endpoint,
    pub fields: Map<String, Value>,
}

impl UnifiedRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            fields: Map::new(),
        }
    }

    /// Builder-style field insertion
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Provider-shaped request body, ready for serialization onto the wire
pub type ProviderRequest = Map<String, Value>;

/// Unified success response for both chat and embedding endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub object: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<u64>,

    pub model: String,

    pub provider: Provider,

    /// Chat endpoints populate `choices`, embedding endpoints `data`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<UnifiedChoice>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<EmbeddingObject>>,

    pub usage: Usage,

    /// Provider extension fields, keyed by the provider's wire id.
    /// Empty (and absent on the wire) in strict compliance mode.
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedChoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<UnifiedMessage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<UnifiedDelta>,

    pub index: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<Value>,

    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedMessage {
    pub role: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingObject {
    pub object: String,
    pub embedding: Vec<f64>,
    pub index: u32,
}

/// Token counts; `-1` in any field means the provider did not report it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_tokens: Option<i64>,

    pub total_tokens: i64,
}

impl Usage {
    /// Usage for providers that report nothing
    pub fn unknown() -> Self {
        Self {
            prompt_tokens: UNKNOWN_TOKENS,
            completion_tokens: None,
            total_tokens: UNKNOWN_TOKENS,
        }
    }
}

/// Unified error envelope: one shape regardless of which provider
/// produced it, so callers never branch on provider identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedError {
    pub error: UnifiedErrorDetail,
    pub provider: Provider,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedErrorDetail {
    pub message: String,

    #[serde(rename = "type")]
    pub error_type: Option<String>,

    pub param: Option<Value>,

    /// Always a string, regardless of the provider's native type
    pub code: Option<String>,
}

/// Outcome of a response transformation. Serializes untagged so callers
/// can relay whichever envelope came out without re-wrapping.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UnifiedResult {
    Success(UnifiedResponse),
    Failure(UnifiedError),
}

impl UnifiedResult {
    pub fn is_error(&self) -> bool {
        matches!(self, UnifiedResult::Failure(_))
    }

    pub fn success(self) -> Option<UnifiedResponse> {
        match self {
            UnifiedResult::Success(r) => Some(r),
            UnifiedResult::Failure(_) => None,
        }
    }

    pub fn failure(self) -> Option<UnifiedError> {
        match self {
            UnifiedResult::Success(_) => None,
            UnifiedResult::Failure(e) => Some(e),
        }
    }
}

/// One unified streaming chunk, re-serialized as a `data: <json>` frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedStreamChunk {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    pub created: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    pub provider: Provider,

    pub choices: Vec<UnifiedChoice>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,

    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}
