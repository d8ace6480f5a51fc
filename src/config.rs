use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AdapterError, Result};
use crate::provider::{Endpoint, Provider};

/// Mapping rule for one unified field on one (provider, endpoint) pair.
///
/// `transform`, when set, names a registered pure mapping (see
/// [`crate::registry`]) that receives the whole unified request and
/// produces the provider value. Everything else is plain data, so whole
/// tables round-trip through TOML.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParameterConfig {
    /// Field name as it appears in the gateway-facing request
    pub unified: String,

    /// Field name to emit in the provider-specific request
    pub param: String,

    #[serde(default)]
    pub required: bool,

    /// Substituted when the unified field is absent and not required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Inclusive numeric bounds; out-of-range is a validation failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Name of a registered value transform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

impl ParameterConfig {
    pub fn new(unified: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            unified: unified.into(),
            param: param.into(),
            required: false,
            default: None,
            min: None,
            max: None,
            transform: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn transform(mut self, name: impl Into<String>) -> Self {
        self.transform = Some(name.into());
        self
    }
}

/// Declarative parameter table for one provider endpoint.
///
/// Immutable after construction; built once per provider at process
/// start and installed into the registry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    pub provider: Provider,
    pub endpoint: Endpoint,
    pub params: Vec<ParameterConfig>,
}

impl ProviderConfig {
    pub fn new(provider: Provider, endpoint: Endpoint) -> Self {
        Self {
            provider,
            endpoint,
            params: Vec::new(),
        }
    }

    /// Builder-style entry appending, in emission order
    pub fn param(mut self, param: ParameterConfig) -> Self {
        self.params.push(param);
        self
    }

    /// Load a table from a TOML file, then validate it
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| AdapterError::Config(format!("Failed to read config file: {e}")))?;
        Self::from_toml_str(&contents)
    }

    /// Parse a table from TOML text, then validate it
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ProviderConfig = toml::from_str(contents)
            .map_err(|e| AdapterError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check table-internal consistency:
    /// - at most one entry per unified field
    /// - aliases lowering onto one provider field may include at most
    ///   one `required` entry
    /// - `min <= max` where both are present
    /// - referenced value transforms must be registered
    pub fn validate(&self) -> Result<()> {
        let mut seen_unified: HashSet<&str> = HashSet::new();
        let mut required_per_param: HashMap<&str, &str> = HashMap::new();

        for entry in &self.params {
            if !seen_unified.insert(entry.unified.as_str()) {
                return Err(AdapterError::Config(format!(
                    "Duplicate unified field '{}' in {}/{} table",
                    entry.unified, self.provider, self.endpoint
                )));
            }

            if entry.required {
                if let Some(other) =
                    required_per_param.insert(entry.param.as_str(), entry.unified.as_str())
                {
                    return Err(AdapterError::Config(format!(
                        "Provider field '{}' has two required aliases: '{}' and '{}'",
                        entry.param, other, entry.unified
                    )));
                }
            }

            if let (Some(min), Some(max)) = (entry.min, entry.max)
                && min > max
            {
                return Err(AdapterError::Config(format!(
                    "Field '{}': min {} exceeds max {}",
                    entry.unified, min, max
                )));
            }

            if let Some(name) = &entry.transform
                && !crate::registry::has_value_transform(name)
            {
                return Err(AdapterError::UnknownTransform(name.clone()));
            }
        }

        Ok(())
    }

    pub fn find(&self, unified: &str) -> Option<&ParameterConfig> {
        self.params.iter().find(|p| p.unified == unified)
    }
}
