use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdapterError;

/// Closed set of upstream providers this layer knows how to translate.
///
/// Passed explicitly through every transformer signature so each
/// component's dependency on "which provider" is visible at the call
/// site rather than imported as an ambient global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provider {
    #[serde(rename = "perplexity-ai")]
    Perplexity,
    Google,
}

impl Provider {
    /// Wire identifier carried in unified responses and errors
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Perplexity => "perplexity-ai",
            Provider::Google => "google",
        }
    }

    /// Whether the provider emits SSE chat streams this layer re-frames
    pub fn supports_streaming(&self) -> bool {
        matches!(self, Provider::Perplexity)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perplexity-ai" => Ok(Provider::Perplexity),
            "google" => Ok(Provider::Google),
            other => Err(AdapterError::Config(format!("Unknown provider: {other}"))),
        }
    }
}

/// Endpoint kind a unified request is tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    ChatComplete,
    Embed,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::ChatComplete => "chat_complete",
            Endpoint::Embed => "embed",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
