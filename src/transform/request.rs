use crate::config::ProviderConfig;
use crate::error::{AdapterError, Result};
use crate::models::unified::{ProviderRequest, UnifiedRequest};
use crate::provider::Provider;
use crate::registry;
use crate::transform::validation::check_range;

/// Lower a unified request onto a provider-shaped request body.
///
/// Entries apply in table declaration order. A field resolves from the
/// request, then the entry default; a still-missing required field fails
/// validation, a still-missing optional field emits nothing. Unified
/// fields with no table entry are dropped; the provider body contains
/// only declared fields.
pub fn transform_request(req: &UnifiedRequest, table: &ProviderConfig) -> Result<ProviderRequest> {
    let mut body = ProviderRequest::new();

    for entry in &table.params {
        let resolved = match req.get(&entry.unified) {
            Some(value) => Some(value.clone()),
            None => entry.default.clone(),
        };

        let Some(resolved) = resolved else {
            if entry.required {
                return Err(AdapterError::Validation(format!(
                    "Missing required field '{}'",
                    entry.unified
                )));
            }
            continue;
        };

        check_range(entry, &resolved)?;

        let value = match &entry.transform {
            Some(name) => {
                let transform = registry::value_transform(name)
                    .ok_or_else(|| AdapterError::UnknownTransform(name.clone()))?;
                transform(req, &resolved)?
            }
            None => resolved,
        };

        body.insert(entry.param.clone(), value);
    }

    tracing::debug!(
        provider = %table.provider,
        endpoint = %table.endpoint,
        unified_fields = req.fields.len(),
        provider_fields = body.len(),
        "Transformed request"
    );

    Ok(body)
}

/// Like [`transform_request`], resolving the installed table for the
/// request's endpoint from the registry.
pub fn transform_request_for(req: &UnifiedRequest, provider: Provider) -> Result<ProviderRequest> {
    let table = registry::config_for(provider, req.endpoint).ok_or_else(|| {
        AdapterError::Config(format!(
            "No parameter table installed for {}/{}",
            provider, req.endpoint
        ))
    })?;
    transform_request(req, &table)
}
