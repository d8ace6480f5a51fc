use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{Map, json};

use crate::error::{AdapterError, Result};
use crate::models::perplexity::PerplexityStreamChunk;
use crate::models::unified::{UnifiedChoice, UnifiedDelta, UnifiedStreamChunk, Usage};
use crate::provider::Provider;
use crate::state::StreamState;

/// Terminal sentinel frame; callers close the stream on the first one
pub const DONE_FRAME: &str = "data: [DONE]\n\n";

/// Mint a stream-scoped fallback id. Callers generate one per logical
/// response and pass the same value to every [`transform_chunk`] call,
/// so chunks missing a native id all land on one id.
pub fn mint_fallback_id() -> String {
    format!("chatcmpl-{}", uuid::Uuid::new_v4())
}

/// Re-frame one raw SSE data line from an in-flight provider stream into
/// unified SSE framing.
///
/// Operates strictly line-by-line; the only cross-call state is the
/// caller-owned opaque accumulator, untouched by the providers modeled
/// here. The returned string is one `data: <json>\n\n` frame, followed
/// by the `[DONE]` sentinel when the provider chunk reports a finish
/// reason.
pub fn transform_chunk(
    provider: Provider,
    raw_line: &str,
    fallback_id: &str,
    state: &StreamState,
    strict_compliance: bool,
) -> Result<String> {
    match provider {
        Provider::Perplexity => {
            transform_perplexity_chunk(raw_line, fallback_id, state, strict_compliance)
        }
        Provider::Google => Err(AdapterError::UnsupportedStream(
            provider.as_str().to_string(),
        )),
    }
}

fn transform_perplexity_chunk(
    raw_line: &str,
    fallback_id: &str,
    _state: &StreamState,
    strict_compliance: bool,
) -> Result<String> {
    let mut payload = raw_line.trim();
    payload = payload.strip_prefix("data: ").unwrap_or(payload);
    let payload = payload.trim();

    // Provider-sent terminal sentinel passes through unchanged
    if payload == "[DONE]" {
        return Ok(DONE_FRAME.to_string());
    }

    let parsed: PerplexityStreamChunk = serde_json::from_str(payload).map_err(|e| {
        AdapterError::ChunkParse(format!("{e}: {}", snippet(payload, 256)))
    })?;

    let first = parsed.choices.first();
    let finish_reason = first.and_then(|c| c.finish_reason.clone());

    let mut extensions = Map::new();
    if !strict_compliance
        && let Some(citations) = &parsed.citations
    {
        extensions.insert(
            Provider::Perplexity.as_str().to_string(),
            json!({ "citations": citations }),
        );
    }

    // Usage only rides on the finish chunk, never on intermediate deltas
    let usage = match (&parsed.usage, &finish_reason) {
        (Some(u), Some(_)) => Some(Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: Some(u.completion_tokens),
            total_tokens: u.total_tokens,
        }),
        _ => None,
    };

    let unified = UnifiedStreamChunk {
        id: parsed.id.unwrap_or_else(|| fallback_id.to_string()),
        object: parsed.object,
        created: unix_now(),
        model: parsed.model,
        provider: Provider::Perplexity,
        choices: vec![UnifiedChoice {
            message: None,
            delta: Some(UnifiedDelta {
                role: first.and_then(|c| c.delta.as_ref()).and_then(|d| d.role.clone()),
                content: first
                    .and_then(|c| c.delta.as_ref())
                    .and_then(|d| d.content.clone()),
            }),
            index: 0,
            logprobs: None,
            finish_reason: finish_reason.clone(),
        }],
        usage,
        extensions,
    };

    let mut frame = format!("data: {}\n\n", serde_json::to_string(&unified)?);
    if finish_reason.is_some() {
        frame.push_str(DONE_FRAME);
    }

    Ok(frame)
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn snippet(text: &str, limit: usize) -> &str {
    let mut cut = limit.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    &text[..cut]
}
