//! A headless event normalizer for pager indicators (tab strips, page dots).
//!
//! Paging views report scrolling as a stream of `(position, offset)` samples plus discrete
//! "page selected" and "scroll state changed" signals. Indicators want something else: per item,
//! how far it has entered or left, and which item is selected. [`ScrollEventNormalizer`] does that
//! translation and guarantees that:
//! - pages skipped by a fast swipe still receive a terminal leave,
//! - duplicate samples do not produce duplicate notifications,
//! - exactly one item is selected at a time.
//!
//! It is UI-agnostic. The host layer is expected to provide the three input signals and a
//! [`NavigatorListener`] that drives the indicator visuals.
//!
//! For a framework-neutral pager model that generates those signals from drags and animation
//! ticks, see the `pager-indicator-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod key;
mod listener;
mod normalizer;
mod options;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use listener::{EventLog, FnListener, NavigatorListener, from_fn};
pub use normalizer::ScrollEventNormalizer;
pub use options::NormalizerOptions;
pub use state::NormalizerState;
pub use types::{IndexState, IndicatorEvent, ScrollPhase};
