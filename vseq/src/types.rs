/// A structural change to an observable sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollectionChange {
    /// The sequence changed too much to describe incrementally; re-read everything.
    Reset,
    Added {
        index: usize,
        len: usize,
    },
    Removed {
        index: usize,
        len: usize,
    },
    Replaced {
        index: usize,
    },
}

/// A derived property of an observable sequence that may have changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyChange {
    /// The element count.
    Count,
    /// Index-based reads may now return different values.
    Indexer,
}

/// A notification delivered to sequence listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeqEvent {
    Collection(CollectionChange),
    Property(PropertyChange),
}

impl SeqEvent {
    pub const RESET: Self = Self::Collection(CollectionChange::Reset);
    pub const COUNT: Self = Self::Property(PropertyChange::Count);
    pub const INDEXER: Self = Self::Property(PropertyChange::Indexer);

    pub fn is_reset(&self) -> bool {
        matches!(self, Self::Collection(CollectionChange::Reset))
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Collection(_))
    }
}

/// Identifies a registered listener so it can be removed again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);
