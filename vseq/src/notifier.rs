use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::{CollectionChange, ListenerId, SeqEvent};

/// A callback invoked for every delivered [`SeqEvent`].
pub type ChangeListener = Arc<dyn Fn(&SeqEvent) + Send + Sync>;

/// Listener registry with scoped notification suppression.
///
/// Every observable sequence in this crate owns one `Notifier`. Mutations report what changed
/// through it; while a [`SuppressGuard`] is alive those reports are swallowed, and when the
/// outermost guard is dropped a single aggregate `Count`, `Indexer`, `Reset` sequence is
/// delivered instead.
///
/// The suppression depth is a plain per-instance counter. It is released from `Drop`, so a
/// batch that returns early with `?` or unwinds still restores notifications.
///
/// Only the sequences create notifiers; outside code reaches one through `seq.notifier()`.
pub struct Notifier {
    listeners: Vec<(ListenerId, ChangeListener)>,
    next_id: u64,
    suppress_depth: Cell<usize>,
    suppressed: Cell<usize>,
}

impl Notifier {
    pub(crate) fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
            suppress_depth: Cell::new(0),
            suppressed: Cell::new(0),
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(&SeqEvent) + Send + Sync + 'static) -> ListenerId {
        self.subscribe_arc(Arc::new(listener))
    }

    /// Registers an already shared listener (e.g. one callback bound to several sequences).
    pub fn subscribe_arc(&mut self, listener: ChangeListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, listener));
        id
    }

    /// Removes a listener. Returns `false` when `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppress_depth.get() > 0
    }

    /// Starts (or nests into) a suppressed batch.
    pub fn suppress(&self) -> SuppressGuard<'_> {
        self.suppress_depth
            .set(self.suppress_depth.get().saturating_add(1));
        SuppressGuard { notifier: self }
    }

    pub(crate) fn emit(&self, event: SeqEvent) {
        if self.is_suppressed() {
            self.suppressed.set(self.suppressed.get().saturating_add(1));
            return;
        }
        for (_, listener) in &self.listeners {
            listener(&event);
        }
    }

    pub(crate) fn emit_reset(&self) {
        self.emit(SeqEvent::COUNT);
        self.emit(SeqEvent::INDEXER);
        self.emit(SeqEvent::RESET);
    }

    pub(crate) fn emit_added(&self, index: usize) {
        self.emit(SeqEvent::COUNT);
        self.emit(SeqEvent::INDEXER);
        self.emit(SeqEvent::Collection(CollectionChange::Added { index, len: 1 }));
    }

    pub(crate) fn emit_removed(&self, index: usize) {
        self.emit(SeqEvent::COUNT);
        self.emit(SeqEvent::INDEXER);
        self.emit(SeqEvent::Collection(CollectionChange::Removed { index, len: 1 }));
    }

    pub(crate) fn emit_replaced(&self, index: usize) {
        self.emit(SeqEvent::INDEXER);
        self.emit(SeqEvent::Collection(CollectionChange::Replaced { index }));
    }

    fn release(&self) {
        let depth = self.suppress_depth.get();
        debug_assert!(depth > 0, "suppress_depth underflow");
        let next = depth.saturating_sub(1);
        self.suppress_depth.set(next);
        if next > 0 {
            return;
        }
        vtrace!(
            suppressed = self.suppressed.get(),
            listeners = self.listeners.len(),
            "Notifier: batch released"
        );
        self.suppressed.set(0);
        self.emit_reset();
    }
}

impl core::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.len())
            .field("suppress_depth", &self.suppress_depth.get())
            .finish_non_exhaustive()
    }
}

/// Keeps a [`Notifier`] suppressed until dropped.
///
/// Dropping the outermost guard fires the aggregate reset, including during unwinding.
#[must_use = "notifications resume as soon as the guard is dropped"]
pub struct SuppressGuard<'a> {
    notifier: &'a Notifier,
}

impl Drop for SuppressGuard<'_> {
    fn drop(&mut self) {
        self.notifier.release();
    }
}

impl core::fmt::Debug for SuppressGuard<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SuppressGuard")
            .field("depth", &self.notifier.suppress_depth.get())
            .finish()
    }
}
