use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;

/// Caller-owned accumulator threaded through a stream's chunk
/// transforms.
///
/// Opaque to this layer: transforms only write here when a provider's
/// chunk format requires coalescing across chunks, which none of the
/// built-in providers do. Cheap to clone and safe to share with the
/// async task driving the stream.
#[derive(Debug, Clone, Default)]
pub struct StreamState {
    scratch: Arc<DashMap<String, Value>>,
}

impl StreamState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.scratch.get(key).map(|v| v.value().clone())
    }

    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.scratch.insert(key.into(), value);
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.scratch.remove(key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.scratch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scratch.is_empty()
    }
}
