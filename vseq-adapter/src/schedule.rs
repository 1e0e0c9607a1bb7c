/// A pending chunked load, expressed in host milliseconds.
///
/// The first chunk is due immediately; each applied chunk pushes the next one `delay_ms`
/// into the future.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkSchedule {
    pub chunk_size: usize,
    pub delay_ms: u64,
    pub next_due_ms: u64,
}

impl ChunkSchedule {
    pub fn new(chunk_size: usize, delay_ms: u64, now_ms: u64) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            delay_ms,
            next_due_ms: now_ms,
        }
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.next_due_ms
    }

    /// Records that a chunk was applied at `now_ms`.
    pub fn advance(&mut self, now_ms: u64) {
        self.next_due_ms = now_ms.saturating_add(self.delay_ms);
    }
}
