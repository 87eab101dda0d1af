use alloc::boxed::Box;
use core::fmt;

use crate::key::IndexStateMap;
use crate::{IndexState, NavigatorListener, NormalizerOptions, NormalizerState, ScrollPhase};

/// Returns the scroll direction for a sample. Equal sums count as left-to-right.
pub(crate) fn is_left_to_right(last_position_sum: f32, position_sum: f32) -> bool {
    last_position_sum <= position_sum
}

/// Turns pager scroll callbacks into indicator enter/leave/select/deselect events.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects.
/// - The host pager drives it through [`Self::on_scroll`], [`Self::on_page_selected`] and
///   [`Self::on_scroll_state_changed`].
/// - Output goes to a single optional [`NavigatorListener`].
///
/// Per index it tracks how much of the leave transition has been reported and whether the index
/// was deselected, so terminal states are always delivered (even for pages skipped by a fast
/// swipe) and completed transitions are not repeated.
///
/// For a host-pager model that generates the input signals, see the `pager-indicator-adapter`
/// crate.
#[derive(Clone)]
pub struct ScrollEventNormalizer<L = Box<dyn NavigatorListener>> {
    total_count: usize,
    current_index: usize,
    previous_index: usize,
    last_position_sum: f32,
    scroll_phase: ScrollPhase,
    skim_over: bool,

    indexes: IndexStateMap,
    listener: Option<L>,
}

impl<L> Default for ScrollEventNormalizer<L> {
    fn default() -> Self {
        Self::new(NormalizerOptions::default())
    }
}

impl<L> ScrollEventNormalizer<L> {
    pub fn new(options: NormalizerOptions) -> Self {
        ndebug!(
            total_count = options.total_count,
            skim_over = options.skim_over,
            "ScrollEventNormalizer::new"
        );
        Self {
            total_count: options.total_count,
            current_index: 0,
            previous_index: 0,
            last_position_sum: 0.0,
            scroll_phase: ScrollPhase::Idle,
            skim_over: options.skim_over,
            indexes: IndexStateMap::new(),
            listener: None,
        }
    }

    pub fn with_listener(options: NormalizerOptions, listener: L) -> Self {
        let mut n = Self::new(options);
        n.listener = Some(listener);
        n
    }

    pub fn options(&self) -> NormalizerOptions {
        NormalizerOptions {
            total_count: self.total_count,
            skim_over: self.skim_over,
        }
    }

    /// Applies `options`. Per-index tracking is only reset when the total count changes.
    pub fn set_options(&mut self, options: NormalizerOptions) {
        self.set_skim_over(options.skim_over);
        if options.total_count != self.total_count {
            self.configure(options.total_count);
        }
    }

    /// Copies the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut NormalizerOptions)) {
        let mut next = self.options();
        f(&mut next);
        self.set_options(next);
    }

    /// Sets the number of indicator items and forgets all per-index tracking.
    pub fn configure(&mut self, total_count: usize) {
        ndebug!(
            total_count,
            prev_total_count = self.total_count,
            "ScrollEventNormalizer::configure"
        );
        self.total_count = total_count;
        self.indexes.clear();
    }

    pub fn set_skim_over(&mut self, skim_over: bool) {
        self.skim_over = skim_over;
    }

    /// Replaces the listener and returns the previous one. `None` silences output; state
    /// tracking continues either way.
    pub fn set_listener(&mut self, listener: Option<L>) -> Option<L> {
        core::mem::replace(&mut self.listener, listener)
    }

    pub fn take_listener(&mut self) -> Option<L> {
        self.listener.take()
    }

    pub fn listener(&self) -> Option<&L> {
        self.listener.as_ref()
    }

    pub fn listener_mut(&mut self) -> Option<&mut L> {
        self.listener.as_mut()
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn previous_index(&self) -> usize {
        self.previous_index
    }

    pub fn scroll_phase(&self) -> ScrollPhase {
        self.scroll_phase
    }

    pub fn skim_over(&self) -> bool {
        self.skim_over
    }

    pub fn last_position_sum(&self) -> f32 {
        self.last_position_sum
    }

    /// Tracking for `index`; untouched indexes report the default (not deselected, nothing left).
    pub fn index_state(&self, index: usize) -> IndexState {
        self.indexes.get(&index).copied().unwrap_or_default()
    }

    pub fn is_deselected(&self, index: usize) -> bool {
        self.index_state(index).deselected
    }

    pub fn leave_fraction(&self, index: usize) -> f32 {
        self.index_state(index).leave_fraction
    }

    pub fn state(&self) -> NormalizerState {
        NormalizerState {
            total_count: self.total_count,
            current_index: self.current_index,
            previous_index: self.previous_index,
            last_position_sum: self.last_position_sum,
            scroll_phase: self.scroll_phase,
            skim_over: self.skim_over,
        }
    }

    /// Restores a snapshot taken with [`Self::state`]. Per-index tracking starts fresh.
    pub fn restore_state(&mut self, state: NormalizerState) {
        ndebug!(
            total_count = state.total_count,
            current_index = state.current_index,
            "ScrollEventNormalizer::restore_state"
        );
        self.total_count = state.total_count;
        self.current_index = state.current_index;
        self.previous_index = state.previous_index;
        self.last_position_sum = state.last_position_sum;
        self.scroll_phase = state.scroll_phase;
        self.skim_over = state.skim_over;
        self.indexes.clear();
    }
}

impl<L: NavigatorListener> ScrollEventNormalizer<L> {
    /// Feeds one scroll sample from the host pager.
    ///
    /// `position` is the page at the left edge of the viewport and `position_offset` the fraction
    /// in `[0, 1)` scrolled towards `position + 1`. The pixel offset is accepted for parity with
    /// host callbacks and not used.
    pub fn on_scroll(
        &mut self,
        position: usize,
        position_offset: f32,
        _position_offset_pixels: i32,
    ) {
        let position_sum = position as f32 + position_offset;
        let left_to_right = is_left_to_right(self.last_position_sum, position_sum);

        if self.scroll_phase.is_idle() {
            ntrace!(position, position_offset, "on_scroll: settle sample");
            self.settle_on_current();
        } else {
            if position_sum == self.last_position_sum {
                ntrace!(position, position_offset, "on_scroll: duplicate sample");
                return;
            }
            ntrace!(
                position,
                position_offset,
                left_to_right,
                phase = ?self.scroll_phase,
                "on_scroll"
            );

            let next_position = position + 1;
            // An offset of exactly 0.0 while moving forward is the page edge: the page we just
            // arrived at enters fully and its successor leaves.
            let boundary = position_offset == 0.0 && left_to_right;

            for index in 0..self.total_count {
                if index == position || index == next_position {
                    continue;
                }
                if self.leave_fraction(index) != 1.0 {
                    self.try_leave(index, 1.0, left_to_right, true);
                }
            }

            if boundary {
                self.try_leave(next_position, 1.0 - position_offset, true, false);
                self.try_enter(position, 1.0 - position_offset, true, false);
            } else if left_to_right {
                self.try_leave(position, position_offset, true, false);
                self.try_enter(next_position, position_offset, true, false);
            } else {
                self.try_leave(next_position, 1.0 - position_offset, false, false);
                self.try_enter(position, 1.0 - position_offset, false, false);
            }
        }

        self.last_position_sum = position_sum;
    }

    /// Marks `position` as the selected page and deselects every other page.
    pub fn on_page_selected(&mut self, position: usize) {
        if position >= self.total_count {
            nwarn!(
                position,
                total_count = self.total_count,
                "on_page_selected: position out of range"
            );
        }
        ndebug!(position, previous = self.current_index, "on_page_selected");
        self.previous_index = self.current_index;
        self.current_index = position;
        self.dispatch_selected(position);
        for index in 0..self.total_count {
            if index == self.current_index {
                continue;
            }
            if !self.is_deselected(index) {
                self.dispatch_deselected(index);
            }
        }
    }

    pub fn on_scroll_state_changed(&mut self, phase: ScrollPhase) {
        ndebug!(phase = ?phase, prev = ?self.scroll_phase, "on_scroll_state_changed");
        self.scroll_phase = phase;
    }

    /// Like [`Self::on_scroll_state_changed`], for hosts reporting the phase as an integer code
    /// (see [`ScrollPhase::from_raw`]). Unknown codes are ignored.
    pub fn on_scroll_state_changed_raw(&mut self, raw: i32) {
        match ScrollPhase::from_raw(raw) {
            Some(phase) => self.on_scroll_state_changed(phase),
            None => {
                nwarn!(raw, "on_scroll_state_changed_raw: unknown scroll phase");
            }
        }
    }

    /// Re-asserts the terminal states: every other page deselected and fully left, the current
    /// page fully entered and selected.
    fn settle_on_current(&mut self) {
        for index in 0..self.total_count {
            if index == self.current_index {
                continue;
            }
            if !self.is_deselected(index) {
                self.dispatch_deselected(index);
            }
            if self.leave_fraction(index) != 1.0 {
                self.try_leave(index, 1.0, false, true);
            }
        }
        self.try_enter(self.current_index, 1.0, false, true);
        self.dispatch_selected(self.current_index);
    }

    fn entry(&mut self, index: usize) -> &mut IndexState {
        self.indexes.entry(index).or_default()
    }

    fn is_adjacent_to_current(&self, index: usize) -> bool {
        self.current_index.checked_sub(1) == Some(index)
            || self.current_index.checked_add(1) == Some(index)
    }

    fn dispatch_selected(&mut self, index: usize) {
        if let Some(l) = self.listener.as_mut() {
            l.on_selected(index, self.total_count);
        }
        self.entry(index).deselected = false;
    }

    fn dispatch_deselected(&mut self, index: usize) {
        if let Some(l) = self.listener.as_mut() {
            l.on_deselected(index, self.total_count);
        }
        self.entry(index).deselected = true;
    }

    fn try_enter(&mut self, index: usize, enter_fraction: f32, left_to_right: bool, forced: bool) {
        let allowed = self.skim_over
            || index == self.current_index
            || self.scroll_phase == ScrollPhase::Dragging
            || forced;
        if !allowed {
            return;
        }
        ntrace!(index, enter_fraction, left_to_right, forced, "enter");
        if let Some(l) = self.listener.as_mut() {
            l.on_enter(index, self.total_count, enter_fraction, left_to_right);
        }
        self.entry(index).leave_fraction = 1.0 - enter_fraction;
    }

    fn try_leave(&mut self, index: usize, leave_fraction: f32, left_to_right: bool, forced: bool) {
        let allowed = self.skim_over
            || index == self.previous_index
            || self.scroll_phase == ScrollPhase::Dragging
            || forced
            || (self.is_adjacent_to_current(index) && self.leave_fraction(index) != 1.0);
        if !allowed {
            return;
        }
        ntrace!(index, leave_fraction, left_to_right, forced, "leave");
        if let Some(l) = self.listener.as_mut() {
            l.on_leave(index, self.total_count, leave_fraction, left_to_right);
        }
        self.entry(index).leave_fraction = leave_fraction;
    }
}

impl<L> fmt::Debug for ScrollEventNormalizer<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollEventNormalizer")
            .field("total_count", &self.total_count)
            .field("current_index", &self.current_index)
            .field("previous_index", &self.previous_index)
            .field("last_position_sum", &self.last_position_sum)
            .field("scroll_phase", &self.scroll_phase)
            .field("skim_over", &self.skim_over)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}
