use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use crate::models::google::{GoogleEmbedResponse, GoogleErrorResponse};
use crate::models::perplexity::{PerplexityChatResponse, PerplexityErrorResponse};
use crate::models::unified::{
    EmbeddingObject, UnifiedChoice, UnifiedError, UnifiedMessage, UnifiedResponse, UnifiedResult,
    Usage,
};
use crate::provider::{Endpoint, Provider};
use crate::transform::error::{ProviderErrorFields, invalid_response_error, normalize_error};

/// Caller-side context for one response transformation.
///
/// `request_model` carries the gateway request's model for providers
/// whose responses omit it; `headers` are accepted for interface
/// symmetry and unused by the modeled providers.
#[derive(Debug, Clone, Default)]
pub struct ResponseContext {
    pub strict_compliance: bool,
    pub request_model: Option<String>,
    pub headers: BTreeMap<String, String>,
}

impl ResponseContext {
    pub fn new(strict_compliance: bool) -> Self {
        Self {
            strict_compliance,
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.request_model = Some(model.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Three-way decode outcome for one provider response
#[derive(Debug)]
pub enum Decoded {
    Success(UnifiedResponse),
    Error(UnifiedError),
    Unrecognized,
}

/// Decode a raw provider response into the explicit three-way outcome.
///
/// Decision order: a non-200 status is probed for the provider's native
/// error shape first; then the documented success discriminator; any
/// response matching neither is `Unrecognized`.
pub fn decode_response(
    provider: Provider,
    endpoint: Endpoint,
    raw: &Value,
    status: u16,
    ctx: &ResponseContext,
) -> Decoded {
    match (provider, endpoint) {
        (Provider::Perplexity, Endpoint::ChatComplete) => decode_perplexity_chat(raw, status, ctx),
        (Provider::Google, Endpoint::Embed) => decode_google_embed(raw, status, ctx),
        _ => Decoded::Unrecognized,
    }
}

/// Translate a raw provider response into the unified envelope.
///
/// Thin wrapper over [`decode_response`] that lowers `Unrecognized` onto
/// the invalid-provider-response fallback, so a provider-shaped object
/// never reaches the caller.
pub fn transform_response(
    provider: Provider,
    endpoint: Endpoint,
    raw: &Value,
    status: u16,
    ctx: &ResponseContext,
) -> UnifiedResult {
    match decode_response(provider, endpoint, raw, status, ctx) {
        Decoded::Success(response) => UnifiedResult::Success(response),
        Decoded::Error(error) => UnifiedResult::Failure(error),
        Decoded::Unrecognized => {
            tracing::warn!(
                provider = %provider,
                endpoint = %endpoint,
                status,
                "Unrecognized provider response shape"
            );
            UnifiedResult::Failure(invalid_response_error(raw, provider))
        }
    }
}

fn decode_perplexity_chat(raw: &Value, status: u16, ctx: &ResponseContext) -> Decoded {
    if status != 200
        && let Ok(err) = serde_json::from_value::<PerplexityErrorResponse>(raw.clone())
    {
        return Decoded::Error(normalize_error(
            ProviderErrorFields {
                message: err.error.message,
                error_type: Some(err.error.error_type),
                param: None,
                code: Some(err.error.code),
            },
            Provider::Perplexity,
        ));
    }

    if raw.get("choices").is_some() {
        let Ok(resp) = serde_json::from_value::<PerplexityChatResponse>(raw.clone()) else {
            return Decoded::Unrecognized;
        };

        let mut extensions = Map::new();
        if !ctx.strict_compliance
            && let Some(citations) = &resp.citations
        {
            extensions.insert(
                Provider::Perplexity.as_str().to_string(),
                json!({ "citations": citations }),
            );
        }

        let content = resp
            .choices
            .first()
            .and_then(|c| c.message.as_ref())
            .map(|m| m.content.clone());

        return Decoded::Success(UnifiedResponse {
            id: Some(resp.id),
            object: resp.object,
            created: Some(resp.created),
            model: resp.model,
            provider: Provider::Perplexity,
            choices: Some(vec![UnifiedChoice {
                message: Some(UnifiedMessage {
                    role: "assistant".to_string(),
                    content,
                }),
                delta: None,
                index: 0,
                logprobs: Some(Value::Null),
                finish_reason: Some(String::new()),
            }]),
            data: None,
            usage: Usage {
                prompt_tokens: resp.usage.prompt_tokens,
                completion_tokens: Some(resp.usage.completion_tokens),
                total_tokens: resp.usage.total_tokens,
            },
            extensions,
        });
    }

    Decoded::Unrecognized
}

fn decode_google_embed(raw: &Value, status: u16, ctx: &ResponseContext) -> Decoded {
    if status != 200
        && let Ok(err) = serde_json::from_value::<GoogleErrorResponse>(raw.clone())
    {
        return Decoded::Error(normalize_error(
            ProviderErrorFields {
                message: err.error.message,
                error_type: err.error.status,
                param: None,
                code: Some(err.error.code),
            },
            Provider::Google,
        ));
    }

    if raw.get("embedding").is_some() {
        let Ok(resp) = serde_json::from_value::<GoogleEmbedResponse>(raw.clone()) else {
            return Decoded::Unrecognized;
        };

        return Decoded::Success(UnifiedResponse {
            id: None,
            object: "list".to_string(),
            created: None,
            model: ctx.request_model.clone().unwrap_or_default(),
            provider: Provider::Google,
            choices: None,
            data: Some(vec![EmbeddingObject {
                object: "embedding".to_string(),
                embedding: resp.embedding.values,
                index: 0,
            }]),
            usage: Usage::unknown(),
            extensions: Map::new(),
        });
    }

    Decoded::Unrecognized
}

/// Convenience wrapper parsing a raw body before transforming. A body
/// that is not JSON at all falls straight to the fallback error.
pub fn transform_response_body(
    provider: Provider,
    endpoint: Endpoint,
    body: &[u8],
    status: u16,
    ctx: &ResponseContext,
) -> UnifiedResult {
    match serde_json::from_slice::<Value>(body) {
        Ok(raw) => transform_response(provider, endpoint, &raw, status, ctx),
        Err(e) => {
            tracing::warn!(provider = %provider, status, error = %e, "Non-JSON provider body");
            UnifiedResult::Failure(invalid_response_error(
                &Value::String(String::from_utf8_lossy(body).into_owned()),
                provider,
            ))
        }
    }
}
