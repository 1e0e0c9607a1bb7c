//! Frame-loop helpers for the `vseq` crate.
//!
//! `vseq` exposes chunked loading as an `async fn`. Hosts without an executor (immediate-mode
//! UIs, game loops, terminal apps) usually drive work from a timer tick instead. This crate
//! provides small, framework-neutral helpers for that style:
//!
//! - [`WindowController`]: chunked loading of a [`vseq::WindowedSeq`] driven by `tick(now_ms)`,
//!   plus prefetch when the visible range nears the end of the window
//! - [`KeyAnchor`]: remember a row by key and find it again after the key list changes
//!
//! No UI objects are held here.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod schedule;


pub use anchor::{KeyAnchor, capture_anchor, restore_anchor};
pub use controller::{DEFAULT_PREFETCH_THRESHOLD, WindowController};
pub use schedule::ChunkSchedule;
