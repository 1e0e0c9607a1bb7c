use alloc::vec::Vec;

use crate::notifier::{Notifier, SuppressGuard};
use crate::{CollectionChange, Error, ListenerId, Result, SeqEvent};

/// An observable sequence whose multi-item mutations collapse into one notification.
///
/// Single-item mutations (`push`, `insert`, `remove_at`, `set`) notify per call. Bulk
/// mutations (`add_range`, `replace_all`, `clear`, `batch_update`) run under a suppressed
/// [`Notifier`] and deliver exactly one aggregate `Count`, `Indexer`, `Reset` sequence when
/// they finish, no matter how many items were touched or how the batch exited.
pub struct BulkSeq<T> {
    items: Vec<T>,
    notifier: Notifier,
}

impl<T> BulkSeq<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            notifier: Notifier::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            notifier: Notifier::new(),
        }
    }

    /// Wraps existing items without notifying (there are no listeners yet).
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items,
            notifier: Notifier::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
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

    pub fn push(&mut self, item: T) {
        let index = self.items.len();
        self.items.push(item);
        self.notifier.emit_added(index);
    }

    /// Inserts at `index` (`index == len` appends).
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        let len = self.items.len();
        if index > len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        self.items.insert(index, item);
        self.notifier.emit_added(index);
        Ok(())
    }

    /// Removes and returns the item at `index`; out-of-range indexes return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.notifier.emit_removed(index);
        Some(item)
    }

    /// Removes the first item equal to `item`. Returns whether one was found.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.items.iter().position(|it| it == item) {
            Some(index) => self.remove_at(index).is_some(),
            None => false,
        }
    }

    /// Replaces the item at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: T) -> Result<T> {
        let len = self.items.len();
        let Some(slot) = self.items.get_mut(index) else {
            return Err(Error::IndexOutOfBounds { index, len });
        };
        let prev = core::mem::replace(slot, item);
        self.notifier.emit_replaced(index);
        Ok(prev)
    }

    /// Runs `f` against a suppressed view of the sequence.
    ///
    /// Listeners see nothing while `f` runs and exactly one aggregate reset afterwards. The
    /// reset also fires if `f` returns early or panics.
    pub fn batch_update<R>(&mut self, f: impl FnOnce(&mut Batch<'_, T>) -> R) -> R {
        let mut batch = Batch {
            items: &mut self.items,
            notifier: &self.notifier,
            _guard: self.notifier.suppress(),
        };
        let out = f(&mut batch);
        drop(batch);
        vtrace!(len = self.items.len(), "BulkSeq::batch_update");
        out
    }

    /// Appends all `items` in order with a single aggregate notification.
    ///
    /// An empty iterator is a no-op and notifies nobody. Callers holding an
    /// `Option<Vec<T>>` can pass `opt.into_iter().flatten()`.
    pub fn add_range(&mut self, items: impl IntoIterator<Item = T>) {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            return;
        }
        self.batch_update(|batch| batch.extend(items));
    }

    /// Fallible form of [`Self::add_range`].
    ///
    /// Stops at the first error. Items appended before the error stay in the sequence and
    /// the aggregate notification still fires.
    pub fn try_add_range<E>(
        &mut self,
        items: impl IntoIterator<Item = core::result::Result<T, E>>,
    ) -> core::result::Result<(), E> {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            return Ok(());
        }
        self.batch_update(|batch| -> core::result::Result<(), E> {
            batch.reserve(items.size_hint().0);
            for item in items {
                batch.push(item?);
            }
            Ok(())
        })
    }

    /// Replaces the whole content with a single aggregate notification.
    ///
    /// `replace_all` with an empty iterator behaves exactly like [`Self::clear`].
    pub fn replace_all(&mut self, items: impl IntoIterator<Item = T>) {
        self.batch_update(|batch| {
            batch.clear();
            batch.extend(items);
        });
    }

    pub fn clear(&mut self) {
        self.batch_update(|batch| batch.clear());
    }
}

impl<T> Default for BulkSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for BulkSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a BulkSeq<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for BulkSeq<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BulkSeq")
            .field("items", &self.items)
            .field("notifier", &self.notifier)
            .finish()
    }
}

/// A suppressed, mutable view of a [`BulkSeq`] handed to `batch_update` closures.
///
/// Per-item changes made through a batch are not delivered; the owning sequence fires one
/// aggregate reset when the batch is dropped.
pub struct Batch<'a, T> {
    items: &'a mut Vec<T>,
    notifier: &'a Notifier,
    _guard: SuppressGuard<'a>,
}

impl<T> Batch<'_, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        self.items
    }

    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    pub fn push(&mut self, item: T) {
        let index = self.items.len();
        self.items.push(item);
        self.notifier.emit_added(index);
    }

    /// Appends every item, reserving for the iterator's lower size bound first.
    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) {
        let items = items.into_iter();
        self.items.reserve(items.size_hint().0);
        for item in items {
            self.push(item);
        }
    }

    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        let len = self.items.len();
        if index > len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        self.items.insert(index, item);
        self.notifier.emit_added(index);
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.notifier.emit_removed(index);
        Some(item)
    }

    pub fn truncate(&mut self, len: usize) {
        let cur = self.items.len();
        if len >= cur {
            return;
        }
        self.items.truncate(len);
        self.notifier.emit(SeqEvent::COUNT);
        self.notifier.emit(SeqEvent::INDEXER);
        self.notifier.emit(SeqEvent::Collection(CollectionChange::Removed {
            index: len,
            len: cur - len,
        }));
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.notifier.emit_reset();
    }
}
