//! # Gateway Adapters
//!
//! Provider adapter layer for a multi-provider AI gateway: declarative
//! parameter mappings and pure transform functions that translate
//! between one unified request/response schema and the wire schemas of
//! individual upstream inference providers.
//!
//! ## Overview
//!
//! Each provider exposes its own parameter names, validation ranges,
//! response envelopes, error shapes, and SSE chunk framing. This layer
//! hides those differences behind one contract:
//!
//! - Request lowering driven by per-provider parameter tables
//! - Success/error/unrecognized disambiguation on raw provider JSON
//! - Chunk-by-chunk re-framing of live SSE streams, preserving
//!   termination semantics
//! - One error shape regardless of which provider failed
//!
//! Transport, authentication, routing, and retry policy live outside
//! this crate; callers hand it an already-selected provider and a fully
//! received (or chunk-delivered) response.
//!
//! ## Quick Start
//!
//! ```rust
//! use gateway_adapters::models::unified::UnifiedRequest;
//! use gateway_adapters::provider::{Endpoint, Provider};
//! use gateway_adapters::transform::transform_request_for;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = UnifiedRequest::new(Endpoint::Embed)
//!     .with_field("input", json!(["first", "second"]));
//!
//! let body = transform_request_for(&request, Provider::Google)?;
//! assert!(body.contains_key("content"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Parameter tables: declaration, TOML loading, validation
//! - [`registry`] - Installed tables and named value transforms
//! - [`models`] - Unified and per-provider wire types
//! - [`transform`] - Request and response transformation
//! - [`streaming`] - SSE line framing and chunk re-framing
//! - [`state`] - Opaque per-stream accumulator
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod registry;
pub mod state;
pub mod streaming;
pub mod transform;

pub use error::{AdapterError, Result};
pub use provider::{Endpoint, Provider};
