pub mod chunk;
pub mod line;
pub mod relay;

pub use chunk::{DONE_FRAME, mint_fallback_id, transform_chunk};
pub use line::SseLineSplitter;
pub use relay::unified_sse_stream;
