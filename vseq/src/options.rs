use alloc::sync::Arc;
use core::time::Duration;

/// Builds an entity for a key. Returning `None` is allowed and is not cached.
pub type EntityFactory<K, E> = Arc<dyn Fn(&K) -> Option<E> + Send + Sync>;

pub const DEFAULT_INITIAL_WINDOW_SIZE: usize = 100;
pub const DEFAULT_LOAD_MORE_INCREMENT: usize = 50;
pub const DEFAULT_CHUNK_SIZE: usize = 200;
/// Roughly one frame at 60 Hz.
pub const DEFAULT_CHUNK_DELAY: Duration = Duration::from_millis(16);
pub const DEFAULT_RECENCY_CAPACITY: usize = 200;

/// Configuration for [`crate::WindowedSeq`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowOptions {
    /// Window length right after `set_all` (capped at the backing length).
    pub initial_window_size: usize,
    /// How far `load_more` grows the window.
    pub load_more_increment: usize,
    /// Chunk length used by chunked loads when the caller passes `0`.
    pub chunk_size: usize,
    /// Pause between chunks of a chunked load.
    pub chunk_delay: Duration,
}

impl WindowOptions {
    pub fn new(initial_window_size: usize, load_more_increment: usize) -> Self {
        Self::default()
            .with_initial_window_size(initial_window_size)
            .with_load_more_increment(load_more_increment)
    }

    pub fn with_initial_window_size(mut self, initial_window_size: usize) -> Self {
        self.initial_window_size = initial_window_size;
        self
    }

    /// Sets the `load_more` step. Values below 1 are raised to 1.
    pub fn with_load_more_increment(mut self, load_more_increment: usize) -> Self {
        self.load_more_increment = load_more_increment.max(1);
        self
    }

    /// Sets the fallback chunk length. Values below 1 are raised to 1.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn with_chunk_delay(mut self, chunk_delay: Duration) -> Self {
        self.chunk_delay = chunk_delay;
        self
    }

    /// Resolves a caller-supplied chunk length, falling back to `chunk_size` below 1.
    pub fn effective_chunk_size(&self, requested: usize) -> usize {
        if requested < 1 {
            self.chunk_size.max(1)
        } else {
            requested
        }
    }
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            initial_window_size: DEFAULT_INITIAL_WINDOW_SIZE,
            load_more_increment: DEFAULT_LOAD_MORE_INCREMENT,
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_delay: DEFAULT_CHUNK_DELAY,
        }
    }
}

/// Configuration for [`crate::KeyedVirtualList`].
///
/// This type is cheap to clone: the factory lives in an `Arc`.
pub struct KeyedListOptions<K, E> {
    pub factory: EntityFactory<K, E>,
    /// How many recently read entities are kept alive by strong references.
    ///
    /// Size this to a few viewports worth of rows: larger values use more memory, smaller
    /// values rebuild entities more often while scrolling back and forth. `0` disables
    /// retention so entities live only as long as callers hold them.
    pub recency_capacity: usize,
}

impl<K, E> KeyedListOptions<K, E> {
    pub fn new(factory: impl Fn(&K) -> Option<E> + Send + Sync + 'static) -> Self {
        Self {
            factory: Arc::new(factory),
            recency_capacity: DEFAULT_RECENCY_CAPACITY,
        }
    }

    /// Wraps an infallible factory.
    pub fn from_fn(factory: impl Fn(&K) -> E + Send + Sync + 'static) -> Self {
        Self::new(move |k| Some(factory(k)))
    }

    pub fn with_factory(mut self, factory: impl Fn(&K) -> Option<E> + Send + Sync + 'static) -> Self {
        self.factory = Arc::new(factory);
        self
    }

    pub fn with_recency_capacity(mut self, recency_capacity: usize) -> Self {
        self.recency_capacity = recency_capacity;
        self
    }
}

impl<K, E> Clone for KeyedListOptions<K, E> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
            recency_capacity: self.recency_capacity,
        }
    }
}

impl<K, E> core::fmt::Debug for KeyedListOptions<K, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyedListOptions")
            .field("recency_capacity", &self.recency_capacity)
            .finish_non_exhaustive()
    }
}
