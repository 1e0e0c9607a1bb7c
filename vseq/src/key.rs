#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

// Reverse lookup (key -> first index). Built lazily and dropped on structural mutation.
#[cfg(feature = "std")]
pub(crate) type KeyIndexMap<K> = HashMap<K, usize>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyIndexMap<K> = BTreeMap<K, usize>;

/// Bound for keys that support `KeyedVirtualList::position_of`.
///
/// `Hash + Eq` with `std`, `Ord` without.
#[cfg(feature = "std")]
pub trait LookupKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> LookupKey for K {}

#[cfg(not(feature = "std"))]
pub trait LookupKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> LookupKey for K {}
