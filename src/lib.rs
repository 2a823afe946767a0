//! A headless windowing engine for fixed-height virtualized lists.
//!
//! Given `count` rows of a fixed `item_height`, a viewport height and a scroll offset, the engine
//! computes the contiguous range of rows that must be materialized (plus `overscan` rows on each
//! side), each row's offset on the scroll track, and the track's total extent.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport height
//! - scroll offset
//! - a per-row render callback, applied to the emitted window
//!
//! The [`calculator`] module holds the pure math. [`ScrollController`] owns one list's scroll
//! offset and keeps a derived [`VirtualWindow`] current as the host reports scroll and geometry
//! changes.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod calculator;
mod controller;
mod options;
mod state;
mod types;


pub use calculator::{DEFAULT_OVERSCAN, compute};
pub use controller::ScrollController;
pub use options::{OnChangeCallback, WindowOptions};
pub use state::{FrameState, LayoutState, ScrollState};
pub use types::{Align, ScrollDirection, VirtualWindow, WindowItem, WindowRange};
