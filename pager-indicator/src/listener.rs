use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::IndicatorEvent;

/// Receives the normalized indicator events.
///
/// `total_count` is the configured item count at dispatch time. At the trailing edge of the pager
/// the normalizer may report `index == total_count` (the page after the last one); implementations
/// should ignore indexes they do not render.
pub trait NavigatorListener {
    fn on_selected(&mut self, index: usize, total_count: usize);

    fn on_deselected(&mut self, index: usize, total_count: usize);

    /// `enter_fraction` goes from `0.0` (not visible) to `1.0` (fully entered).
    fn on_enter(
        &mut self,
        index: usize,
        total_count: usize,
        enter_fraction: f32,
        left_to_right: bool,
    );

    /// `leave_fraction` goes from `0.0` (fully entered) to `1.0` (fully left).
    fn on_leave(
        &mut self,
        index: usize,
        total_count: usize,
        leave_fraction: f32,
        left_to_right: bool,
    );
}

impl<T: NavigatorListener + ?Sized> NavigatorListener for Box<T> {
    fn on_selected(&mut self, index: usize, total_count: usize) {
        (**self).on_selected(index, total_count);
    }

    fn on_deselected(&mut self, index: usize, total_count: usize) {
        (**self).on_deselected(index, total_count);
    }

    fn on_enter(
        &mut self,
        index: usize,
        total_count: usize,
        enter_fraction: f32,
        left_to_right: bool,
    ) {
        (**self).on_enter(index, total_count, enter_fraction, left_to_right);
    }

    fn on_leave(
        &mut self,
        index: usize,
        total_count: usize,
        leave_fraction: f32,
        left_to_right: bool,
    ) {
        (**self).on_leave(index, total_count, leave_fraction, left_to_right);
    }
}

impl<T: NavigatorListener + ?Sized> NavigatorListener for &mut T {
    fn on_selected(&mut self, index: usize, total_count: usize) {
        (**self).on_selected(index, total_count);
    }

    fn on_deselected(&mut self, index: usize, total_count: usize) {
        (**self).on_deselected(index, total_count);
    }

    fn on_enter(
        &mut self,
        index: usize,
        total_count: usize,
        enter_fraction: f32,
        left_to_right: bool,
    ) {
        (**self).on_enter(index, total_count, enter_fraction, left_to_right);
    }

    fn on_leave(
        &mut self,
        index: usize,
        total_count: usize,
        leave_fraction: f32,
        left_to_right: bool,
    ) {
        (**self).on_leave(index, total_count, leave_fraction, left_to_right);
    }
}

/// A listener that records every event in dispatch order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventLog {
    events: Vec<IndicatorEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[IndicatorEvent] {
        &self.events
    }

    /// Returns the recorded events and leaves the log empty.
    pub fn take(&mut self) -> Vec<IndicatorEvent> {
        core::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl NavigatorListener for EventLog {
    fn on_selected(&mut self, index: usize, total_count: usize) {
        self.events.push(IndicatorEvent::Selected { index, total_count });
    }

    fn on_deselected(&mut self, index: usize, total_count: usize) {
        self.events.push(IndicatorEvent::Deselected { index, total_count });
    }

    fn on_enter(
        &mut self,
        index: usize,
        total_count: usize,
        enter_fraction: f32,
        left_to_right: bool,
    ) {
        self.events.push(IndicatorEvent::Enter {
            index,
            total_count,
            fraction: enter_fraction,
            left_to_right,
        });
    }

    fn on_leave(
        &mut self,
        index: usize,
        total_count: usize,
        leave_fraction: f32,
        left_to_right: bool,
    ) {
        self.events.push(IndicatorEvent::Leave {
            index,
            total_count,
            fraction: leave_fraction,
            left_to_right,
        });
    }
}

/// A listener backed by a closure. See [`from_fn`].
pub struct FnListener<F> {
    f: F,
}

/// Creates a listener that forwards every event to `f` as an [`IndicatorEvent`].
pub fn from_fn<F: FnMut(IndicatorEvent)>(f: F) -> FnListener<F> {
    FnListener { f }
}

impl<F: FnMut(IndicatorEvent)> NavigatorListener for FnListener<F> {
    fn on_selected(&mut self, index: usize, total_count: usize) {
        (self.f)(IndicatorEvent::Selected { index, total_count });
    }

    fn on_deselected(&mut self, index: usize, total_count: usize) {
        (self.f)(IndicatorEvent::Deselected { index, total_count });
    }

    fn on_enter(
        &mut self,
        index: usize,
        total_count: usize,
        enter_fraction: f32,
        left_to_right: bool,
    ) {
        (self.f)(IndicatorEvent::Enter {
            index,
            total_count,
            fraction: enter_fraction,
            left_to_right,
        });
    }

    fn on_leave(
        &mut self,
        index: usize,
        total_count: usize,
        leave_fraction: f32,
        left_to_right: bool,
    ) {
        (self.f)(IndicatorEvent::Leave {
            index,
            total_count,
            fraction: leave_fraction,
            left_to_right,
        });
    }
}

impl<F> fmt::Debug for FnListener<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnListener(..)")
    }
}
