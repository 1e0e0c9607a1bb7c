use alloc::vec::Vec;
use core::future::Future;
use core::time::Duration;

use crate::future::yield_now;
use crate::{BulkSeq, ListenerId, SeqEvent, WindowOptions, WindowState};

/// A full backing list exposed through a growable, observable prefix ("window").
///
/// The window starts at `initial_window_size` items and only ever grows by taking the next
/// unloaded items in backing order, so rows that are already visible never move. Every
/// growth step is one `BulkSeq::add_range`, which means listeners see one aggregate reset
/// per step regardless of how many items the step adds.
///
/// Invariant: `loaded_count() <= total_count()` and the window always equals
/// `backing()[..loaded_count()]`.
pub struct WindowedSeq<T> {
    options: WindowOptions,
    backing: Vec<T>,
    window: BulkSeq<T>,
}

impl<T: Clone> WindowedSeq<T> {
    pub fn new(options: WindowOptions) -> Self {
        vdebug!(
            initial_window_size = options.initial_window_size,
            load_more_increment = options.load_more_increment,
            "WindowedSeq::new"
        );
        Self {
            options,
            backing: Vec::new(),
            window: BulkSeq::new(),
        }
    }

    /// Shorthand for `WindowedSeq::new(WindowOptions::new(initial, increment))`.
    pub fn with_sizes(initial_window_size: usize, load_more_increment: usize) -> Self {
        Self::new(WindowOptions::new(initial_window_size, load_more_increment))
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    /// Replaces the options. The current window is kept; new sizes apply to later growth.
    pub fn set_options(&mut self, options: WindowOptions) {
        self.options = options;
    }

    pub fn total_count(&self) -> usize {
        self.backing.len()
    }

    pub fn loaded_count(&self) -> usize {
        self.window.len()
    }

    pub fn is_fully_loaded(&self) -> bool {
        self.loaded_count() >= self.total_count()
    }

    pub fn state(&self) -> WindowState {
        WindowState {
            loaded_count: self.loaded_count(),
            total_count: self.total_count(),
        }
    }

    /// The observable window.
    pub fn window(&self) -> &BulkSeq<T> {
        &self.window
    }

    pub fn backing(&self) -> &[T] {
        &self.backing
    }

    pub fn as_slice(&self) -> &[T] {
        self.window.as_slice()
    }

    /// Reads inside the window; indexes past the window return `None`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.window.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.window.iter()
    }

    pub fn subscribe(&mut self, listener: impl Fn(&SeqEvent) + Send + Sync + 'static) -> ListenerId {
        self.window.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.window.unsubscribe(id)
    }

    /// Replaces the backing data and resets the window to its initial size.
    ///
    /// Fires exactly one aggregate reset.
    pub fn set_all(&mut self, items: impl IntoIterator<Item = T>) {
        self.backing.clear();
        self.backing.extend(items);
        let initial = self.options.initial_window_size.min(self.backing.len());
        self.window
            .replace_all(self.backing[..initial].iter().cloned());
        vdebug!(
            total = self.backing.len(),
            loaded = initial,
            "WindowedSeq::set_all"
        );
    }

    /// Appends to the backing data and grows the window by
    /// `max(load_more_increment, appended)`, capped at the total.
    ///
    /// Returns the number of appended items. Empty input changes nothing.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = T>) -> usize {
        let before = self.backing.len();
        self.backing.extend(items);
        let appended = self.backing.len() - before;
        if appended == 0 {
            return 0;
        }
        let step = self.options.load_more_increment.max(appended);
        let target = self.loaded_count().saturating_add(step);
        self.grow_to(target);
        appended
    }

    /// Grows the window by `load_more_increment`. Returns how many items became visible.
    pub fn load_more(&mut self) -> usize {
        if self.is_fully_loaded() {
            return 0;
        }
        let target = self
            .loaded_count()
            .saturating_add(self.options.load_more_increment);
        self.grow_to(target)
    }

    /// Grows the window to the whole backing list in one step.
    pub fn load_all(&mut self) -> usize {
        if self.is_fully_loaded() {
            return 0;
        }
        self.grow_to(self.total_count())
    }

    /// Grows the window by at most one chunk.
    ///
    /// `chunk_size < 1` falls back to `options().chunk_size`. Returns how many items became
    /// visible (`0` once fully loaded).
    pub fn load_next_chunk(&mut self, chunk_size: usize) -> usize {
        if self.is_fully_loaded() {
            return 0;
        }
        let chunk_size = self.options.effective_chunk_size(chunk_size);
        let target = self.loaded_count().saturating_add(chunk_size);
        self.grow_to(target)
    }

    /// Loads everything in chunks, awaiting `pause(delay)` between chunks.
    ///
    /// `pause` is the host's suspension primitive: a runtime timer, a frame callback, or
    /// [`crate::yield_now`]. Chunks apply strictly in backing order and a chunk is never
    /// split by a suspension. The end state is the same as [`Self::load_all`].
    ///
    /// Dropping the returned future stops loading after the last completed chunk. Returns
    /// the number of chunks applied.
    pub async fn load_all_async<P, F>(
        &mut self,
        chunk_size: usize,
        delay: Duration,
        mut pause: P,
    ) -> usize
    where
        P: FnMut(Duration) -> F,
        F: Future<Output = ()>,
    {
        let chunk_size = self.options.effective_chunk_size(chunk_size);
        let mut chunks = 0usize;
        while !self.is_fully_loaded() {
            if chunks > 0 {
                pause(delay).await;
            }
            self.load_next_chunk(chunk_size);
            chunks += 1;
        }
        vdebug!(
            chunks,
            chunk_size,
            total = self.total_count(),
            "WindowedSeq::load_all_async done"
        );
        chunks
    }

    /// [`Self::load_all_async`] with the configured `chunk_size` and `chunk_delay`.
    pub async fn load_all_async_default<P, F>(&mut self, pause: P) -> usize
    where
        P: FnMut(Duration) -> F,
        F: Future<Output = ()>,
    {
        let delay = self.options.chunk_delay;
        self.load_all_async(0, delay, pause).await
    }

    /// [`Self::load_all_async`] that only yields to the executor between chunks.
    pub async fn load_all_yielding(&mut self, chunk_size: usize) -> usize {
        self.load_all_async(chunk_size, Duration::ZERO, |_| yield_now())
            .await
    }

    /// Drops the backing data and the window. Fires one aggregate reset.
    pub fn clear(&mut self) {
        self.backing.clear();
        self.window.clear();
    }

    fn grow_to(&mut self, target: usize) -> usize {
        let loaded = self.window.len();
        let target = target.min(self.backing.len());
        if target <= loaded {
            return 0;
        }
        self.window
            .add_range(self.backing[loaded..target].iter().cloned());
        vtrace!(
            from = loaded,
            to = target,
            total = self.backing.len(),
            "WindowedSeq: window grown"
        );
        debug_assert!(self.window.len() <= self.backing.len());
        target - loaded
    }
}

impl<T: Clone> Default for WindowedSeq<T> {
    fn default() -> Self {
        Self::new(WindowOptions::default())
    }
}

impl<T> core::fmt::Debug for WindowedSeq<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowedSeq")
            .field("options", &self.options)
            .field("loaded_count", &self.window.len())
            .field("total_count", &self.backing.len())
            .finish_non_exhaustive()
    }
}
