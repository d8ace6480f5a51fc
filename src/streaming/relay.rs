use bytes::{BufMut, Bytes, BytesMut};
use futures::{Stream, StreamExt};

use crate::error::{AdapterError, Result};
use crate::provider::Provider;
use crate::state::StreamState;
use crate::streaming::chunk::{DONE_FRAME, transform_chunk};
use crate::streaming::line::SseLineSplitter;

/// Adapt an upstream byte stream into unified SSE frames.
///
/// Each arriving network chunk is split into complete SSE lines and each
/// line re-framed through [`transform_chunk`], in arrival order. A
/// malformed line is logged and dropped rather than aborting the whole
/// stream; everything after the terminal sentinel is ignored. Transport
/// errors pass through as IO errors.
pub fn unified_sse_stream<S, E>(
    upstream: S,
    provider: Provider,
    fallback_id: String,
    state: StreamState,
    strict_compliance: bool,
) -> impl Stream<Item = Result<Bytes>>
where
    S: Stream<Item = std::result::Result<Bytes, E>>,
    E: std::fmt::Display,
{
    let mut splitter = SseLineSplitter::new();
    let mut done = false;

    upstream.map(move |chunk_result| match chunk_result {
        Ok(chunk) => {
            let mut out = BytesMut::new();

            for line in splitter.feed(&chunk) {
                if done {
                    break;
                }
                match transform_chunk(provider, &line, &fallback_id, &state, strict_compliance) {
                    Ok(frame) => {
                        if frame.ends_with(DONE_FRAME) {
                            done = true;
                        }
                        out.put(frame.as_bytes());
                    }
                    Err(e) => {
                        tracing::warn!(
                            provider = %provider,
                            error = %e,
                            "Dropping malformed stream chunk"
                        );
                    }
                }
            }

            Ok(out.freeze())
        }
        Err(e) => Err(AdapterError::IoError(std::io::Error::other(e.to_string()))),
    })
}
