//! Process-wide registries for parameter tables and named value
//! transforms.
//!
//! Both are written rarely (at process start) and read on every request,
//! so they use `ArcSwap` for lock-free reads with copy-on-write updates.

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use lazy_static::lazy_static;
use serde_json::{Value, json};

use crate::config::{ParameterConfig, ProviderConfig};
use crate::error::Result;
use crate::models::unified::UnifiedRequest;
use crate::provider::{Endpoint, Provider};

/// A registered pure mapping: receives the whole unified request plus the
/// value resolved by the rename/default rules, returns the provider value.
///
/// Plain function pointers only, no captured state, so tables stay
/// serializable and transforms stay testable in isolation.
pub type ValueTransformFn = fn(&UnifiedRequest, &Value) -> Result<Value>;

lazy_static! {
    static ref VALUE_TRANSFORMS: ArcSwap<HashMap<String, ValueTransformFn>> = {
        let mut map: HashMap<String, ValueTransformFn> = HashMap::new();
        map.insert(
            "embedding_input_to_content_parts".to_string(),
            embedding_input_to_content_parts,
        );
        map.insert(
            "rewrite_developer_role".to_string(),
            rewrite_developer_role,
        );
        ArcSwap::from_pointee(map)
    };
    static ref TABLES: ArcSwap<HashMap<(Provider, Endpoint), Arc<ProviderConfig>>> = {
        let mut map = HashMap::new();
        map.insert(
            (Provider::Perplexity, Endpoint::ChatComplete),
            Arc::new(perplexity_chat_complete()),
        );
        map.insert(
            (Provider::Google, Endpoint::Embed),
            Arc::new(google_embed()),
        );
        ArcSwap::from_pointee(map)
    };
}

/// Look up a registered value transform by name
pub fn value_transform(name: &str) -> Option<ValueTransformFn> {
    VALUE_TRANSFORMS.load().get(name).copied()
}

pub fn has_value_transform(name: &str) -> bool {
    VALUE_TRANSFORMS.load().contains_key(name)
}

/// Register (or replace) a named value transform
pub fn register_value_transform(name: impl Into<String>, transform: ValueTransformFn) {
    let name = name.into();
    tracing::debug!(name = %name, "Registering value transform");
    VALUE_TRANSFORMS.rcu(|current| {
        let mut next = (**current).clone();
        next.insert(name.clone(), transform);
        next
    });
}

/// Fetch the installed parameter table for a (provider, endpoint) pair
pub fn config_for(provider: Provider, endpoint: Endpoint) -> Option<Arc<ProviderConfig>> {
    TABLES.load().get(&(provider, endpoint)).cloned()
}

/// Install a parameter table, replacing any previous one for the same
/// (provider, endpoint) pair. The table is validated first.
pub fn install(config: ProviderConfig) -> Result<()> {
    config.validate()?;
    tracing::debug!(
        provider = %config.provider,
        endpoint = %config.endpoint,
        params = config.params.len(),
        "Installing parameter table"
    );
    let key = (config.provider, config.endpoint);
    let config = Arc::new(config);
    TABLES.rcu(|current| {
        let mut next = (**current).clone();
        next.insert(key, config.clone());
        next
    });
    Ok(())
}

/// Built-in Perplexity chat completion table
pub fn perplexity_chat_complete() -> ProviderConfig {
    ProviderConfig::new(Provider::Perplexity, Endpoint::ChatComplete)
        .param(
            ParameterConfig::new("model", "model")
                .required()
                .default_value(json!("mistral-7b-instruct")),
        )
        .param(
            ParameterConfig::new("messages", "messages")
                .required()
                .default_value(json!([]))
                .transform("rewrite_developer_role"),
        )
        .param(ParameterConfig::new("max_tokens", "max_tokens").required().min(1.0))
        .param(ParameterConfig::new("max_completion_tokens", "max_tokens").min(1.0))
        .param(ParameterConfig::new("temperature", "temperature").min(0.0).max(2.0))
        .param(ParameterConfig::new("top_p", "top_p").min(0.0).max(1.0))
        .param(ParameterConfig::new("search_domain_filter", "search_domain_filter"))
        .param(ParameterConfig::new("top_k", "top_k").min(0.0).max(2048.0))
        .param(ParameterConfig::new("stream", "stream").default_value(json!(false)))
        .param(
            ParameterConfig::new("presence_penalty", "presence_penalty")
                .min(-2.0)
                .max(2.0),
        )
        .param(ParameterConfig::new("frequency_penalty", "repetition_penalty"))
        .param(ParameterConfig::new("n", "n").min(1.0).max(1.0))
        .param(ParameterConfig::new("web_search_options", "web_search_options"))
        .param(ParameterConfig::new("response_format", "response_format"))
        .param(ParameterConfig::new("search_recency_filter", "search_recency_filter"))
}

/// Built-in Google embedContent table
pub fn google_embed() -> ProviderConfig {
    ProviderConfig::new(Provider::Google, Endpoint::Embed)
        .param(
            ParameterConfig::new("input", "content")
                .required()
                .transform("embedding_input_to_content_parts"),
        )
        .param(
            ParameterConfig::new("model", "model")
                .required()
                .default_value(json!("embedding-001")),
        )
}

/// Wrap the unified embedding input into Google's content-parts shape:
/// a single string becomes one `{text}` part, a list becomes one part
/// per element in input order.
fn embedding_input_to_content_parts(_req: &UnifiedRequest, resolved: &Value) -> Result<Value> {
    let parts: Vec<Value> = match resolved {
        Value::Array(items) => items.iter().map(|i| json!({ "text": i })).collect(),
        other => vec![json!({ "text": other })],
    };
    Ok(json!({ "parts": parts }))
}

/// Rewrite `developer` message roles to `system`; everything else passes
/// through unchanged, order preserved.
fn rewrite_developer_role(_req: &UnifiedRequest, resolved: &Value) -> Result<Value> {
    let Value::Array(messages) = resolved else {
        return Ok(resolved.clone());
    };

    let rewritten = messages
        .iter()
        .map(|message| {
            if message.get("role").and_then(Value::as_str) == Some("developer") {
                let mut out = message.clone();
                out["role"] = json!("system");
                out
            } else {
                message.clone()
            }
        })
        .collect();

    Ok(Value::Array(rewritten))
}
