use alloc::sync::{Arc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::ops::Range;

use crate::key::{KeyIndexMap, LookupKey};
use crate::notifier::Notifier;
use crate::{CacheStats, Error, KeyedListOptions, ListenerId, RecencyBuffer, Result, SeqEvent};

struct EntityCache<E> {
    // One slot per key index. Always `keys.len()` long.
    slots: Vec<Option<Weak<E>>>,
    recent: RecencyBuffer<Arc<E>>,
    stats: CacheStats,
}

impl<E> EntityCache<E> {
    fn new(recency_capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            recent: RecencyBuffer::new(recency_capacity),
            stats: CacheStats::default(),
        }
    }

    fn invalidate(&mut self, len: usize) {
        self.slots.clear();
        self.slots.resize_with(len, || None);
        self.stats.invalidations = self.stats.invalidations.saturating_add(1);
    }

    fn reset(&mut self, len: usize) {
        self.invalidate(len);
        self.recent.clear();
    }
}

/// Index-addressed access to entities that are built on demand from a key list.
///
/// The key list is the only stored data. `get(i)` builds the entity for `keys[i]` through
/// the factory on first access and remembers it in a weak per-index slot; every read also
/// pushes the entity into a bounded [`RecencyBuffer`] so the last few hundred rows the user
/// scrolled past stay alive and are not rebuilt.
///
/// Any structural change (`insert`, `remove_at`, `set_keys`) drops every slot instead of
/// shifting them. `push` only adds a trailing slot.
///
/// Reads take `&self`; the cache uses interior mutability and is not `Sync`. The factory
/// is called without any internal borrow held.
pub struct KeyedVirtualList<K, E> {
    options: KeyedListOptions<K, E>,
    keys: Vec<K>,
    cache: RefCell<EntityCache<E>>,
    key_index: RefCell<Option<KeyIndexMap<K>>>,
    notifier: Notifier,
}

impl<K, E> KeyedVirtualList<K, E> {
    pub fn new(options: KeyedListOptions<K, E>) -> Self {
        let cache = EntityCache::new(options.recency_capacity);
        Self {
            options,
            keys: Vec::new(),
            cache: RefCell::new(cache),
            key_index: RefCell::new(None),
            notifier: Notifier::new(),
        }
    }

    pub fn with_keys(options: KeyedListOptions<K, E>, keys: impl IntoIterator<Item = K>) -> Self {
        let mut list = Self::new(options);
        list.set_keys(keys);
        list
    }

    pub fn options(&self) -> &KeyedListOptions<K, E> {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn key_at(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn subscribe(&mut self, listener: impl Fn(&SeqEvent) + Send + Sync + 'static) -> ListenerId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Returns the entity at `index`, building and caching it on a miss.
    ///
    /// Out-of-range indexes return `None` (UI callers may race with mutations). A factory
    /// that yields nothing also returns `None`, and that result is not cached.
    pub fn get(&self, index: usize) -> Option<Arc<E>> {
        let Some(key) = self.keys.get(index) else {
            vtrace!(
                index,
                len = self.keys.len(),
                "KeyedVirtualList::get: index out of range"
            );
            return None;
        };

        let cached = self
            .cache
            .borrow()
            .slots
            .get(index)
            .and_then(Option::as_ref)
            .and_then(Weak::upgrade);

        let entity = match cached {
            Some(entity) => {
                let mut cache = self.cache.borrow_mut();
                cache.stats.hits = cache.stats.hits.saturating_add(1);
                cache.recent.push(Arc::clone(&entity));
                entity
            }
            None => {
                let built = (self.options.factory)(key);
                let mut cache = self.cache.borrow_mut();
                cache.stats.misses = cache.stats.misses.saturating_add(1);
                let Some(built) = built else {
                    cache.stats.factory_nulls = cache.stats.factory_nulls.saturating_add(1);
                    vtrace!(index, "KeyedVirtualList::get: factory produced nothing");
                    return None;
                };
                let entity = Arc::new(built);
                if let Some(slot) = cache.slots.get_mut(index) {
                    *slot = Some(Arc::downgrade(&entity));
                }
                cache.recent.push(Arc::clone(&entity));
                entity
            }
        };
        Some(entity)
    }

    /// Materializes every entity in `range` (clamped to the list) in index order.
    ///
    /// Indexes whose factory yields nothing are skipped.
    pub fn for_each_in(&self, range: Range<usize>, mut f: impl FnMut(usize, Arc<E>)) {
        let end = range.end.min(self.keys.len());
        for index in range.start..end {
            if let Some(entity) = self.get(index) {
                f(index, entity);
            }
        }
    }

    /// Whether `index` currently has a live cached entity.
    pub fn is_cached(&self, index: usize) -> bool {
        self.cache
            .borrow()
            .slots
            .get(index)
            .and_then(Option::as_ref)
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Number of slots whose entity is still alive.
    pub fn live_slots(&self) -> usize {
        self.cache
            .borrow()
            .slots
            .iter()
            .flatten()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    pub fn recency_len(&self) -> usize {
        self.cache.borrow().recent.len()
    }

    pub fn set_recency_capacity(&mut self, capacity: usize) {
        self.options.recency_capacity = capacity;
        self.cache.get_mut().recent.set_capacity(capacity);
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.borrow().stats
    }

    pub fn reset_stats(&mut self) {
        self.cache.get_mut().stats = CacheStats::default();
    }

    /// Appends a key whose entity is already built.
    ///
    /// Existing slots are kept. The new trailing slot refers to `entity`, which also enters
    /// the recency buffer, so the next `get` returns it even if the caller drops its handle.
    pub fn push(&mut self, key: K, entity: Arc<E>) {
        let index = self.keys.len();
        self.keys.push(key);
        *self.key_index.get_mut() = None;
        let cache = self.cache.get_mut();
        cache.slots.push(Some(Arc::downgrade(&entity)));
        cache.recent.push(entity);
        self.notifier.emit_added(index);
    }

    /// Inserts a key at `index` (`index == len` appends) and drops every cached slot.
    ///
    /// The inserted entity is then associated with its new slot and enters the recency
    /// buffer, like a freshly read one.
    pub fn insert(&mut self, index: usize, key: K, entity: Arc<E>) -> Result<()> {
        let len = self.keys.len();
        if index > len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        self.keys.insert(index, key);
        self.invalidate_slots();
        let cache = self.cache.get_mut();
        if let Some(slot) = cache.slots.get_mut(index) {
            *slot = Some(Arc::downgrade(&entity));
        }
        cache.recent.push(entity);
        self.notifier.emit_added(index);
        Ok(())
    }

    /// Removes the key at `index` and drops every cached slot.
    ///
    /// Out-of-range indexes return `None` and change nothing.
    pub fn remove_at(&mut self, index: usize) -> Option<K> {
        if index >= self.keys.len() {
            return None;
        }
        let key = self.keys.remove(index);
        self.invalidate_slots();
        self.notifier.emit_removed(index);
        Some(key)
    }

    /// Always fails: entities are derived from keys and cannot be assigned.
    ///
    /// Replace the key list (or insert/remove keys) instead.
    pub fn set(&mut self, index: usize, _entity: Arc<E>) -> Result<()> {
        vwarn!(index, "KeyedVirtualList::set: entities cannot be assigned by index");
        Err(Error::ReadOnlyIndexer { index })
    }

    /// Replaces the key list, dropping the slot cache and the recency buffer.
    ///
    /// Fires exactly one aggregate reset.
    pub fn set_keys(&mut self, keys: impl IntoIterator<Item = K>) {
        let _guard = self.notifier.suppress();
        self.keys.clear();
        self.keys.extend(keys);
        *self.key_index.get_mut() = None;
        self.cache.get_mut().reset(self.keys.len());
        vdebug!(len = self.keys.len(), "KeyedVirtualList::set_keys");
    }

    /// Drops every cached entity (slots and recency buffer) while keeping the keys.
    ///
    /// Use this when the factory's inputs changed. Fires one aggregate reset.
    pub fn refresh(&mut self) {
        let _guard = self.notifier.suppress();
        self.cache.get_mut().reset(self.keys.len());
        vdebug!(len = self.keys.len(), "KeyedVirtualList::refresh");
    }

    pub fn clear(&mut self) {
        self.set_keys(core::iter::empty());
    }

    fn invalidate_slots(&mut self) {
        *self.key_index.get_mut() = None;
        self.cache.get_mut().invalidate(self.keys.len());
        vtrace!(len = self.keys.len(), "KeyedVirtualList: slot cache invalidated");
    }
}

impl<K: LookupKey, E> KeyedVirtualList<K, E> {
    /// Returns the first index holding `key`.
    ///
    /// The reverse map is built on first use and discarded on every structural mutation.
    pub fn position_of(&self, key: &K) -> Option<usize> {
        let mut index = self.key_index.borrow_mut();
        let map = index.get_or_insert_with(|| {
            let mut map = KeyIndexMap::<K>::new();
            for (i, k) in self.keys.iter().enumerate() {
                map.entry(k.clone()).or_insert(i);
            }
            map
        });
        map.get(key).copied()
    }
}

impl<K, E> core::fmt::Debug for KeyedVirtualList<K, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let cache = self.cache.borrow();
        f.debug_struct("KeyedVirtualList")
            .field("len", &self.keys.len())
            .field("recency_len", &cache.recent.len())
            .field("stats", &cache.stats)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
