//! Adapter utilities for the `pager-indicator` crate.
//!
//! The `pager-indicator` crate only normalizes the signals a paging view reports. This crate
//! provides a framework-neutral model of the paging view itself, for hosts that do not have one
//! (TUIs, immediate-mode GUIs, tests):
//!
//! - [`PagerController`]: turns drags, releases and animation ticks into scroll samples,
//!   page-selected and scroll-state signals
//! - Tween-based settle animations (adapter-driven, no timers)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod tween;


pub use controller::{DEFAULT_SNAP_THRESHOLD, PagerController};
pub use tween::{Easing, Tween};
