use bytes::{Buf, BytesMut};

/// Incremental splitter turning transport byte chunks into complete SSE
/// lines.
///
/// Network chunks split lines at arbitrary byte boundaries; this buffers
/// the tail until its newline arrives. Blank separator lines between SSE
/// events are swallowed, so the output is exactly the sequence of
/// payload-bearing lines to hand to the chunk transformer.
#[derive(Debug)]
pub struct SseLineSplitter {
    buffer: BytesMut,
}

impl SseLineSplitter {
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(8192),
        }
    }

    /// Feed new bytes and extract the lines completed by them
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let mut line = self.buffer.split_to(pos + 1);
            line.truncate(pos);
            if line.last() == Some(&b'\r') {
                line.truncate(line.len() - 1);
            }
            if line.is_empty() {
                continue;
            }
            lines.push(String::from_utf8_lossy(&line).into_owned());
        }

        lines
    }

    /// Drain any unterminated tail once the transport signals end of
    /// stream. Providers normally terminate the last line, but a
    /// truncated stream should still surface its final partial payload.
    pub fn finish(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let tail = self.buffer.split();
        let line = String::from_utf8_lossy(&tail).trim().to_string();
        (!line.is_empty()).then_some(line)
    }

    /// Reset for reuse across streams
    pub fn reset(&mut self) {
        self.buffer.clear();
        if self.buffer.capacity() > 65536 {
            self.buffer = BytesMut::with_capacity(8192);
        }
    }

    pub fn buffered(&self) -> usize {
        self.buffer.remaining()
    }
}

impl Default for SseLineSplitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_lines() {
        let mut splitter = SseLineSplitter::new();
        let lines = splitter.feed(b"data: {\"a\":1}\n\ndata: {\"b\":2}\n\n");
        assert_eq!(lines, vec!["data: {\"a\":1}", "data: {\"b\":2}"]);
    }

    #[test]
    fn test_split_across_feeds() {
        let mut splitter = SseLineSplitter::new();
        assert!(splitter.feed(b"data: {\"text\":\"hel").is_empty());
        let lines = splitter.feed(b"lo\"}\n\n");
        assert_eq!(lines, vec!["data: {\"text\":\"hello\"}"]);
        assert_eq!(splitter.buffered(), 0);
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut splitter = SseLineSplitter::new();
        let lines = splitter.feed(b"data: one\r\n\r\ndata: two\r\n");
        assert_eq!(lines, vec!["data: one", "data: two"]);
    }

    #[test]
    fn test_blank_separators_swallowed() {
        let mut splitter = SseLineSplitter::new();
        let lines = splitter.feed(b"\n\n\ndata: x\n\n\n");
        assert_eq!(lines, vec!["data: x"]);
    }

    #[test]
    fn test_done_line() {
        let mut splitter = SseLineSplitter::new();
        let lines = splitter.feed(b"data: [DONE]\n\n");
        assert_eq!(lines, vec!["data: [DONE]"]);
    }

    #[test]
    fn test_finish_drains_tail() {
        let mut splitter = SseLineSplitter::new();
        assert!(splitter.feed(b"data: {\"truncated\":true}").is_empty());
        assert_eq!(
            splitter.finish().as_deref(),
            Some("data: {\"truncated\":true}")
        );
        assert!(splitter.finish().is_none());
    }

    #[test]
    fn test_byte_boundary_reassembly_matches_whole_feed() {
        let payload = b"data: {\"n\":1}\n\ndata: {\"n\":2}\n\ndata: [DONE]\n\n";

        let mut whole = SseLineSplitter::new();
        let expected = whole.feed(payload);

        for chunk_size in [1, 3, 7] {
            let mut split = SseLineSplitter::new();
            let mut got = Vec::new();
            for chunk in payload.chunks(chunk_size) {
                got.extend(split.feed(chunk));
            }
            assert_eq!(got, expected, "chunk_size {chunk_size}");
        }
    }

    #[test]
    fn test_reset() {
        let mut splitter = SseLineSplitter::new();
        splitter.feed(b"data: partial");
        splitter.reset();
        assert_eq!(splitter.buffered(), 0);
        assert!(splitter.finish().is_none());
    }
}
