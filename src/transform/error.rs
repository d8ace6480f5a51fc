use serde_json::Value;

use crate::models::unified::{UnifiedError, UnifiedErrorDetail};
use crate::provider::Provider;

/// Provider-declared error fields, as extracted from its native envelope
#[derive(Debug, Clone, Default)]
pub struct ProviderErrorFields {
    pub message: String,
    pub error_type: Option<String>,
    pub param: Option<Value>,
    pub code: Option<Value>,
}

/// Build a unified error from provider-declared fields. The native code
/// is coerced to a string unconditionally so callers have one comparison
/// type regardless of the provider's numeric-or-string choice.
pub fn normalize_error(fields: ProviderErrorFields, provider: Provider) -> UnifiedError {
    UnifiedError {
        error: UnifiedErrorDetail {
            message: fields.message,
            error_type: fields.error_type,
            param: fields.param,
            code: fields.code.as_ref().and_then(stringify_code),
        },
        provider,
    }
}

/// Universal fallback for responses matching neither the documented
/// success nor error shape. Embeds a truncated rendering of the raw body
/// so the failure is debuggable without echoing whole payloads.
pub fn invalid_response_error(raw: &Value, provider: Provider) -> UnifiedError {
    UnifiedError {
        error: UnifiedErrorDetail {
            message: format!(
                "Invalid response received from {}: {}",
                provider,
                truncated(raw, 512)
            ),
            error_type: None,
            param: None,
            code: None,
        },
        provider,
    }
}

fn stringify_code(code: &Value) -> Option<String> {
    match code {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn truncated(raw: &Value, limit: usize) -> String {
    let mut rendered = raw.to_string();
    if rendered.len() > limit {
        // Truncate on a char boundary
        let mut cut = limit;
        while !rendered.is_char_boundary(cut) {
            cut -= 1;
        }
        rendered.truncate(cut);
        rendered.push_str("...");
    }
    rendered
}
