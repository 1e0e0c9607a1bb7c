/// A lightweight, serializable snapshot of a [`crate::WindowedSeq`] window.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub loaded_count: usize,
    pub total_count: usize,
}

impl WindowState {
    pub fn is_fully_loaded(&self) -> bool {
        self.loaded_count >= self.total_count
    }

    /// Items still waiting behind the window.
    pub fn remaining(&self) -> usize {
        self.total_count.saturating_sub(self.loaded_count)
    }
}

/// Counters describing how a [`crate::KeyedVirtualList`] cache has been used.
///
/// Counters survive `set_keys`/`clear` so hosts can observe behavior across dataset swaps;
/// call `KeyedVirtualList::reset_stats` to start over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheStats {
    /// Reads served from a live weak slot.
    pub hits: u64,
    /// Reads that had to call the factory.
    pub misses: u64,
    /// Factory calls that produced nothing (not cached).
    pub factory_nulls: u64,
    /// Whole-cache invalidations caused by structural mutation or dataset replacement.
    pub invalidations: u64,
}

impl CacheStats {
    pub fn reads(&self) -> u64 {
        self.hits.saturating_add(self.misses)
    }
}
