use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Google embedContent response (success shape)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoogleEmbedResponse {
    pub embedding: GoogleEmbedding,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoogleEmbedding {
    pub values: Vec<f64>,
}

/// Google native error envelope, shared across Google endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoogleErrorResponse {
    pub error: GoogleErrorBody,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoogleErrorBody {
    /// Numeric HTTP-style code; kept loose so a string code still decodes
    #[serde(default)]
    pub code: Value,

    pub message: String,

    /// Canonical status string (e.g. "INVALID_ARGUMENT"); mapped onto the
    /// unified error `type`
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_embed_response() {
        let json = r#"{"embedding": {"values": [0.1, -0.2, 0.3]}}"#;
        let resp: GoogleEmbedResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.embedding.values.len(), 3);
        assert_eq!(resp.embedding.values[1], -0.2);
    }

    #[test]
    fn test_parse_error_response() {
        let json = r#"{
            "error": {
                "code": 400,
                "message": "Invalid JSON payload received.",
                "status": "INVALID_ARGUMENT"
            }
        }"#;

        let err: GoogleErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(err.error.status.as_deref(), Some("INVALID_ARGUMENT"));
        assert_eq!(err.error.code, serde_json::json!(400));
    }
}
