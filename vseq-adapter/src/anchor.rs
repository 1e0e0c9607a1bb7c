use core::fmt;

use vseq::{KeyedVirtualList, LookupKey};

/// A row remembered by identity, used to keep the viewport on the same item across key
/// list changes.
///
/// Typical use cases:
/// - prepend older records above the current viewport
/// - re-sort or filter the key list and scroll back to the row the user was reading
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyAnchor<K> {
    pub key: K,
    /// Index of the row when the anchor was captured.
    pub index: usize,
}

impl<K: fmt::Debug> fmt::Debug for KeyAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyAnchor")
            .field("key", &self.key)
            .field("index", &self.index)
            .finish()
    }
}

/// Captures an anchor for the row at `index`.
///
/// Returns `None` if `index` is out of range.
pub fn capture_anchor<K: Clone, E>(
    list: &KeyedVirtualList<K, E>,
    index: usize,
) -> Option<KeyAnchor<K>> {
    let key = list.key_at(index)?.clone();
    Some(KeyAnchor { key, index })
}

/// Finds the anchored row in the current key list.
///
/// If the key still sits at the captured index, that index is returned. Otherwise the first
/// index holding the key is returned, or `None` if the key is gone.
pub fn restore_anchor<K: LookupKey, E>(
    list: &KeyedVirtualList<K, E>,
    anchor: &KeyAnchor<K>,
) -> Option<usize> {
    // Fast path: nothing moved.
    if list.key_at(anchor.index) == Some(&anchor.key) {
        return Some(anchor.index);
    }
    let index = list.position_of(&anchor.key);
    atrace!(from = anchor.index, to = ?index, "restore_anchor");
    index
}
