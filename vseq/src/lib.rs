//! Observable, windowed and keyed virtual sequences for UIs bound to huge datasets.
//!
//! For frame-loop driven loading and position anchors, see the `vseq-adapter` crate.
//!
//! The crate provides three building blocks, leaf to root:
//! - [`BulkSeq`]: an observable sequence whose multi-item mutations collapse into exactly
//!   one aggregate notification.
//! - [`WindowedSeq`]: a full backing list exposed through a growable prefix, with
//!   incremental, eager and chunked asynchronous growth.
//! - [`KeyedVirtualList`]: index-addressed entities built on demand from a key list, cached
//!   in weak per-index slots plus a bounded buffer of recently read entities.
//!
//! It is UI-agnostic. A data-binding layer is expected to:
//! - subscribe to [`SeqEvent`] notifications
//! - read by index as rows scroll into view
//! - supply key lists, backing items and the entity factory
//!
//! Everything here assumes a single owner (the UI thread). Mutations take `&mut self` and
//! the notification/caching state is not `Sync`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod bulk;
mod error;
mod future;
mod key;
mod keyed;
mod notifier;
mod options;
mod recency;
mod state;
mod types;
mod windowed;


pub use bulk::{Batch, BulkSeq};
pub use error::{Error, Result};
pub use future::{YieldNow, yield_now};
pub use keyed::KeyedVirtualList;
pub use notifier::{ChangeListener, Notifier, SuppressGuard};
pub use options::{
    DEFAULT_CHUNK_DELAY, DEFAULT_CHUNK_SIZE, DEFAULT_INITIAL_WINDOW_SIZE,
    DEFAULT_LOAD_MORE_INCREMENT, DEFAULT_RECENCY_CAPACITY, EntityFactory, KeyedListOptions,
    WindowOptions,
};
pub use recency::RecencyBuffer;
pub use state::{CacheStats, WindowState};
pub use types::{CollectionChange, ListenerId, PropertyChange, SeqEvent};
pub use windowed::WindowedSeq;

#[doc(hidden)]
pub use key::LookupKey;
