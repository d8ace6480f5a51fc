use std::fs;

use gateway_adapters::provider::{Endpoint, Provider};
use gateway_adapters::transform::{ResponseContext, transform_response};
use serde_json::{Value, json};

#[test]
fn test_perplexity_fixture_success() {
    let raw: Value = serde_json::from_str(
        &fs::read_to_string("tests/fixtures/perplexity_chat_response.json").unwrap(),
    )
    .unwrap();

    let result = transform_response(
        Provider::Perplexity,
        Endpoint::ChatComplete,
        &raw,
        200,
        &ResponseContext::new(false),
    );

    let resp = result.success().unwrap();
    assert_eq!(resp.id.as_deref(), Some("ppl-42"));
    assert_eq!(resp.model, "sonar-pro");
    assert_eq!(resp.provider, Provider::Perplexity);

    let choices = resp.choices.as_ref().unwrap();
    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0].index, 0);
    assert_eq!(choices[0].message.as_ref().unwrap().role, "assistant");
    assert!(
        choices[0]
            .message
            .as_ref()
            .unwrap()
            .content
            .as_deref()
            .unwrap()
            .contains("systems programming")
    );
    assert_eq!(resp.usage.prompt_tokens, 14);
    assert_eq!(resp.usage.completion_tokens, Some(13));
    assert_eq!(resp.usage.total_tokens, 27);
}

#[test]
fn test_citations_namespaced_when_not_strict() {
    let raw: Value = serde_json::from_str(
        &fs::read_to_string("tests/fixtures/perplexity_chat_response.json").unwrap(),
    )
    .unwrap();

    let lax = transform_response(
        Provider::Perplexity,
        Endpoint::ChatComplete,
        &raw,
        200,
        &ResponseContext::new(false),
    )
    .success()
    .unwrap();
    let serialized = serde_json::to_value(&lax).unwrap();
    assert_eq!(
        serialized["perplexity-ai"]["citations"][0],
        json!("https://www.rust-lang.org")
    );

    let strict = transform_response(
        Provider::Perplexity,
        Endpoint::ChatComplete,
        &raw,
        200,
        &ResponseContext::new(true),
    )
    .success()
    .unwrap();
    let serialized = serde_json::to_value(&strict).unwrap();
    assert!(serialized.get("perplexity-ai").is_none());
}

#[test]
fn test_google_embed_preserves_values_and_sentinel_usage() {
    let values: Vec<f64> = (0..64).map(|i| i as f64 / 64.0).collect();
    let raw = json!({"embedding": {"values": values}});

    let result = transform_response(
        Provider::Google,
        Endpoint::Embed,
        &raw,
        200,
        &ResponseContext::new(true).with_model("embedding-001"),
    );

    let resp = result.success().unwrap();
    let data = resp.data.as_ref().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].embedding.len(), 64);
    assert_eq!(data[0].object, "embedding");
    assert_eq!(resp.usage.prompt_tokens, -1);
    assert_eq!(resp.usage.total_tokens, -1);

    // The sentinel survives serialization untouched
    let serialized = serde_json::to_value(&resp).unwrap();
    assert_eq!(serialized["usage"]["prompt_tokens"], json!(-1));
}

#[test]
fn test_provider_error_passthrough() {
    let raw = json!({"error": {"message": "bad key", "type": "auth", "code": 401}});
    let result = transform_response(
        Provider::Perplexity,
        Endpoint::ChatComplete,
        &raw,
        401,
        &ResponseContext::new(false),
    );

    let err = result.failure().unwrap();
    let serialized = serde_json::to_value(&err).unwrap();
    assert_eq!(serialized["error"]["message"], "bad key");
    assert_eq!(serialized["error"]["type"], "auth");
    assert_eq!(serialized["error"]["code"], "401");
    assert_eq!(serialized["error"]["param"], Value::Null);
    assert_eq!(serialized["provider"], "perplexity-ai");
}

#[test]
fn test_unrecognized_bodies_always_yield_fallback_error() {
    let bodies = [
        json!({}),
        json!({"candidates": []}),
        json!("plain string"),
        json!(42),
        json!(null),
    ];

    for raw in &bodies {
        for status in [200u16, 400, 503] {
            let result = transform_response(
                Provider::Perplexity,
                Endpoint::ChatComplete,
                raw,
                status,
                &ResponseContext::new(false),
            );
            let err = result.failure().unwrap();
            assert_eq!(err.provider, Provider::Perplexity);
            assert!(err.error.message.contains("perplexity-ai"));
        }
    }
}

#[test]
fn test_headers_accepted_but_ignored() {
    let raw = json!({"embedding": {"values": [0.5]}});
    let ctx = ResponseContext::new(false)
        .with_model("embedding-001")
        .with_header("x-request-id", "abc123");

    let result = transform_response(Provider::Google, Endpoint::Embed, &raw, 200, &ctx);
    assert!(!result.is_error());
}
