use vseq::{WindowOptions, WindowedSeq};

use crate::ChunkSchedule;

/// How close (in rows) the visible end may get to the loaded end before
/// [`WindowController::on_visible_end`] grows the window.
pub const DEFAULT_PREFETCH_THRESHOLD: usize = 10;

/// A framework-neutral controller that wraps a [`WindowedSeq`] and drives chunked loading
/// from a host frame loop.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `start_load_all(..)` when the user asks for everything
/// - `tick(now_ms)` each frame/timer tick (applies at most one chunk per call)
/// - `on_visible_end(end)` when the visible range changes (scroll-driven growth)
///
/// Replacing or clearing the data through the controller cancels a pending load, so chunks
/// of an old dataset are never applied to a new one.
#[derive(Debug)]
pub struct WindowController<T> {
    seq: WindowedSeq<T>,
    load: Option<ChunkSchedule>,
    prefetch_threshold: usize,
}

impl<T: Clone> WindowController<T> {
    pub fn new(options: WindowOptions) -> Self {
        Self::from_seq(WindowedSeq::new(options))
    }

    pub fn from_seq(seq: WindowedSeq<T>) -> Self {
        Self {
            seq,
            load: None,
            prefetch_threshold: DEFAULT_PREFETCH_THRESHOLD,
        }
    }

    pub fn with_prefetch_threshold(mut self, prefetch_threshold: usize) -> Self {
        self.prefetch_threshold = prefetch_threshold;
        self
    }

    pub fn prefetch_threshold(&self) -> usize {
        self.prefetch_threshold
    }

    pub fn seq(&self) -> &WindowedSeq<T> {
        &self.seq
    }

    /// Direct access to the sequence.
    ///
    /// Mutating the backing data this way does not cancel a pending load; prefer
    /// [`Self::set_all`] and [`Self::clear`].
    pub fn seq_mut(&mut self) -> &mut WindowedSeq<T> {
        &mut self.seq
    }

    pub fn into_seq(self) -> WindowedSeq<T> {
        self.seq
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_some()
    }

    pub fn schedule(&self) -> Option<ChunkSchedule> {
        self.load
    }

    pub fn cancel_load(&mut self) {
        if self.load.take().is_some() {
            adebug!(
                loaded = self.seq.loaded_count(),
                total = self.seq.total_count(),
                "WindowController: load cancelled"
            );
        }
    }

    /// Replaces the data. Cancels any pending load.
    pub fn set_all(&mut self, items: impl IntoIterator<Item = T>) {
        self.cancel_load();
        self.seq.set_all(items);
    }

    /// Appends data. A pending load keeps running and will include the new items.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = T>) -> usize {
        self.seq.add_items(items)
    }

    /// Drops all data. Cancels any pending load.
    pub fn clear(&mut self) {
        self.cancel_load();
        self.seq.clear();
    }

    /// Schedules a chunked load of the remaining items. The first chunk is due at `now_ms`.
    ///
    /// `chunk_size < 1` falls back to the sequence's configured chunk size. Restarting
    /// replaces the previous schedule. Does nothing if the window is already fully loaded.
    pub fn start_load_all(&mut self, chunk_size: usize, delay_ms: u64, now_ms: u64) {
        if self.seq.is_fully_loaded() {
            self.load = None;
            return;
        }
        let chunk_size = self.seq.options().effective_chunk_size(chunk_size);
        self.load = Some(ChunkSchedule::new(chunk_size, delay_ms, now_ms));
        adebug!(chunk_size, delay_ms, now_ms, "WindowController::start_load_all");
    }

    /// [`Self::start_load_all`] with the sequence's configured `chunk_size` and
    /// `chunk_delay` (in whole milliseconds).
    pub fn start_load_all_default(&mut self, now_ms: u64) {
        let delay_ms =
            u64::try_from(self.seq.options().chunk_delay.as_millis()).unwrap_or(u64::MAX);
        self.start_load_all(0, delay_ms, now_ms);
    }

    /// Advances a pending load.
    ///
    /// - If a chunk is due, applies it and returns the new loaded count.
    /// - Otherwise returns `None`.
    ///
    /// The load ends once the window is fully loaded.
    pub fn tick(&mut self, now_ms: u64) -> Option<usize> {
        let mut schedule = self.load?;
        if self.seq.is_fully_loaded() {
            self.load = None;
            return None;
        }
        if !schedule.is_due(now_ms) {
            return None;
        }

        self.seq.load_next_chunk(schedule.chunk_size);
        schedule.advance(now_ms);
        self.load = if self.seq.is_fully_loaded() {
            None
        } else {
            Some(schedule)
        };
        atrace!(
            now_ms,
            chunk_size = schedule.chunk_size,
            loaded = self.seq.loaded_count(),
            "WindowController::tick"
        );
        Some(self.seq.loaded_count())
    }

    /// Call this when the visible range changes; `end_index` is its exclusive end.
    ///
    /// Grows the window by one `load_more` step when at most `prefetch_threshold` loaded
    /// rows remain below the visible end. Returns `true` if the window grew.
    pub fn on_visible_end(&mut self, end_index: usize) -> bool {
        let loaded = self.seq.loaded_count();
        if loaded.saturating_sub(end_index) > self.prefetch_threshold {
            return false;
        }
        self.seq.load_more() > 0
    }
}

impl<T: Clone> Default for WindowController<T> {
    fn default() -> Self {
        Self::new(WindowOptions::default())
    }
}
