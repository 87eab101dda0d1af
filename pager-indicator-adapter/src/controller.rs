use alloc::boxed::Box;
use core::fmt;

use pager_indicator::{NavigatorListener, NormalizerOptions, ScrollEventNormalizer, ScrollPhase};

use crate::{Easing, Tween};

/// Fraction of a page that must be crossed on release to settle on the next page.
pub const DEFAULT_SNAP_THRESHOLD: f32 = 0.5;

/// A framework-neutral paging view that drives a [`ScrollEventNormalizer`].
///
/// This type does not hold any UI objects. It keeps the scroll position in pages and emits the
/// same signals a native paging view would. Adapters drive it by calling:
/// - `begin_drag` / `drag_by` / `release` for pointer gestures
/// - `tick(now_ms)` each frame/timer tick while a settle animation runs
/// - `set_current_page` / `scroll_to_page` for programmatic navigation
///
/// Positive drag deltas move towards higher page indexes.
#[derive(Clone)]
pub struct PagerController<L = Box<dyn NavigatorListener>> {
    n: ScrollEventNormalizer<L>,
    page_width_px: u32,
    snap_threshold: f32,
    position: f32,
    tween: Option<Tween>,
}

impl<L> PagerController<L> {
    pub fn new(options: NormalizerOptions, page_width_px: u32) -> Self {
        Self::from_normalizer(ScrollEventNormalizer::new(options), page_width_px)
    }

    pub fn with_listener(options: NormalizerOptions, page_width_px: u32, listener: L) -> Self {
        Self::from_normalizer(
            ScrollEventNormalizer::with_listener(options, listener),
            page_width_px,
        )
    }

    /// Wraps an existing normalizer; the scroll position starts at its current index.
    pub fn from_normalizer(n: ScrollEventNormalizer<L>, page_width_px: u32) -> Self {
        let position = n.current_index() as f32;
        Self {
            n,
            page_width_px,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            position,
            tween: None,
        }
    }

    /// Sets the release snap threshold, clamped to `[0, 1]`.
    pub fn with_snap_threshold(mut self, snap_threshold: f32) -> Self {
        self.snap_threshold = snap_threshold.clamp(0.0, 1.0);
        self
    }

    pub fn normalizer(&self) -> &ScrollEventNormalizer<L> {
        &self.n
    }

    pub fn normalizer_mut(&mut self) -> &mut ScrollEventNormalizer<L> {
        &mut self.n
    }

    pub fn into_normalizer(self) -> ScrollEventNormalizer<L> {
        self.n
    }

    pub fn page_count(&self) -> usize {
        self.n.total_count()
    }

    pub fn current_page(&self) -> usize {
        self.n.current_index()
    }

    pub fn page_width_px(&self) -> u32 {
        self.page_width_px
    }

    pub fn set_page_width(&mut self, page_width_px: u32) {
        self.page_width_px = page_width_px;
    }

    pub fn snap_threshold(&self) -> f32 {
        self.snap_threshold
    }

    /// Scroll position in pages (`1.5` is halfway between page 1 and page 2).
    pub fn scroll_position(&self) -> f32 {
        self.position
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    fn max_position(&self) -> f32 {
        self.n.total_count().saturating_sub(1) as f32
    }

    fn clamp_position(&self, position: f32) -> f32 {
        position.clamp(0.0, self.max_position())
    }

    /// The page the pager settles on when released at the current position.
    pub fn snap_target(&self) -> usize {
        let base = self.position as usize;
        let fraction = self.position - base as f32;
        let target = if fraction >= self.snap_threshold {
            base + 1
        } else {
            base
        };
        target.min(self.n.total_count().saturating_sub(1))
    }

    /// Splits the position into the host sample `(position, offset, offset_pixels)`.
    fn sample(&self) -> (usize, f32, i32) {
        let position = self.position as usize;
        let offset = self.position - position as f32;
        let offset_pixels = (offset * self.page_width_px as f32) as i32;
        (position, offset, offset_pixels)
    }
}

impl<L: NavigatorListener> PagerController<L> {
    fn set_phase(&mut self, phase: ScrollPhase) {
        if self.n.scroll_phase() != phase {
            self.n.on_scroll_state_changed(phase);
        }
    }

    fn emit_sample(&mut self) {
        let (position, offset, offset_pixels) = self.sample();
        ntrace!(position, offset, offset_pixels, "emit_sample");
        self.n.on_scroll(position, offset, offset_pixels);
    }

    /// Changes the page count.
    ///
    /// Cancels any animation, reselects the last page if the current one no longer exists, and
    /// snaps to the current page with a settle sample.
    pub fn set_page_count(&mut self, page_count: usize) {
        ndebug!(page_count, "PagerController::set_page_count");
        self.tween = None;
        self.n.configure(page_count);
        if page_count > 0 && self.n.current_index() >= page_count {
            self.n.on_page_selected(page_count - 1);
        }
        self.position = self.clamp_position(self.n.current_index() as f32);
        self.set_phase(ScrollPhase::Idle);
        if page_count > 0 {
            self.emit_sample();
        }
    }

    /// Call this when a drag gesture starts. Cancels any active animation.
    pub fn begin_drag(&mut self) {
        self.cancel_animation();
        self.set_phase(ScrollPhase::Dragging);
    }

    /// Moves the pager by `delta_px` pixels. Ignored unless a drag is in progress.
    pub fn drag_by(&mut self, delta_px: f32) {
        if self.page_width_px == 0 {
            return;
        }
        let position = self.position + delta_px / self.page_width_px as f32;
        self.drag_to(position);
    }

    /// Moves the pager to `position` (in pages). Ignored unless a drag is in progress.
    pub fn drag_to(&mut self, position: f32) {
        if self.n.scroll_phase() != ScrollPhase::Dragging {
            return;
        }
        self.position = self.clamp_position(position);
        self.emit_sample();
    }

    /// Ends the drag and starts settling on the snap target.
    ///
    /// Returns the target page.
    pub fn release(&mut self, now_ms: u64, duration_ms: u64, easing: Easing) -> usize {
        if self.n.scroll_phase() != ScrollPhase::Dragging {
            return self.n.current_index();
        }
        let target = self.snap_target();
        ndebug!(position = self.position, target, "PagerController::release");
        self.settle_to(target, now_ms, duration_ms, easing);
        target
    }

    /// Starts a smooth scroll to `page` (clamped to the last page).
    ///
    /// Returns the target page.
    pub fn scroll_to_page(
        &mut self,
        page: usize,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> usize {
        if self.n.total_count() == 0 {
            return 0;
        }
        let target = page.min(self.n.total_count() - 1);
        ndebug!(target, "PagerController::scroll_to_page");
        self.settle_to(target, now_ms, duration_ms, easing);
        target
    }

    /// Jumps to `page` (clamped to the last page) without animation.
    pub fn set_current_page(&mut self, page: usize) {
        if self.n.total_count() == 0 {
            return;
        }
        let target = page.min(self.n.total_count() - 1);
        ndebug!(target, "PagerController::set_current_page");
        self.tween = None;
        if target != self.n.current_index() {
            self.n.on_page_selected(target);
        }
        self.position = target as f32;
        self.set_phase(ScrollPhase::Idle);
        self.emit_sample();
    }

    fn settle_to(&mut self, target: usize, now_ms: u64, duration_ms: u64, easing: Easing) {
        self.tween = None;
        self.set_phase(ScrollPhase::Settling);
        if target != self.n.current_index() {
            self.n.on_page_selected(target);
        }
        let to = target as f32;
        if self.position == to {
            self.finish_settle(to);
            return;
        }
        self.tween = Some(Tween::new(self.position, to, now_ms, duration_ms, easing));
    }

    fn finish_settle(&mut self, to: f32) {
        self.tween = None;
        self.position = self.clamp_position(to);
        self.emit_sample();
        self.set_phase(ScrollPhase::Idle);
    }

    /// Advances the settle animation.
    ///
    /// Returns the new scroll position while animating, `None` when idle.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.tween?;
        if tween.is_done(now_ms) {
            self.finish_settle(tween.to);
        } else {
            self.position = self.clamp_position(tween.sample(now_ms));
            self.emit_sample();
        }
        Some(self.position)
    }
}

impl<L> fmt::Debug for PagerController<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagerController")
            .field("n", &self.n)
            .field("page_width_px", &self.page_width_px)
            .field("snap_threshold", &self.snap_threshold)
            .field("position", &self.position)
            .field("tween", &self.tween)
            .finish()
    }
}
