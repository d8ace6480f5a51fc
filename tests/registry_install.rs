use gateway_adapters::config::ProviderConfig;
use gateway_adapters::error::AdapterError;
use gateway_adapters::models::unified::UnifiedRequest;
use gateway_adapters::provider::{Endpoint, Provider};
use gateway_adapters::registry;
use gateway_adapters::transform::transform_request_for;
use serde_json::json;

// Installs a table for a pair no built-in table claims, so parallel
// tests against the built-ins are unaffected.

#[test]
fn test_install_table_from_toml() {
    let req = UnifiedRequest::new(Endpoint::ChatComplete)
        .with_field("model", json!("gemini-pro"))
        .with_field("messages", json!([{"role": "user", "content": "hi"}]));

    // Nothing installed yet for Google chat
    let err = transform_request_for(&req, Provider::Google).unwrap_err();
    assert!(matches!(err, AdapterError::Config(_)));

    let table = ProviderConfig::from_toml_str(
        r#"
            provider = "google"
            endpoint = "chat_complete"

            [[params]]
            unified = "model"
            param = "model"
            required = true

            [[params]]
            unified = "messages"
            param = "contents"
            required = true

            [[params]]
            unified = "temperature"
            param = "temperature"
            min = 0.0
            max = 2.0
        "#,
    )
    .unwrap();

    registry::install(table).unwrap();

    let body = transform_request_for(&req, Provider::Google).unwrap();
    assert_eq!(body.get("model"), Some(&json!("gemini-pro")));
    assert!(body.get("contents").is_some());
    assert!(body.get("messages").is_none());
}

#[test]
fn test_install_rejects_inconsistent_table() {
    let err = ProviderConfig::from_toml_str(
        r#"
            provider = "google"
            endpoint = "chat_complete"

            [[params]]
            unified = "model"
            param = "model"

            [[params]]
            unified = "model"
            param = "model_name"
        "#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("Duplicate unified field"));
}
