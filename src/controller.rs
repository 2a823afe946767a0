use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::calculator;
use crate::{
    Align, FrameState, LayoutState, ScrollDirection, ScrollState, VirtualWindow, WindowItem,
    WindowOptions, WindowRange,
};

/// Scroll state for one mounted list.
///
/// The controller owns the current scroll offset and the layout, and keeps a derived
/// [`VirtualWindow`] up to date: every setter that changes an input recomputes the window
/// immediately, setters that do not change anything are no-ops. It holds no UI objects; your
/// adapter drives it with scroll offsets and geometry, then renders [`Self::window`].
#[derive(Clone, Debug)]
pub struct ScrollController {
    options: WindowOptions,
    scroll_offset: f64,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,

    window: VirtualWindow,
    revision: u64,

    notify_depth: usize,
    notify_pending: bool,
}

impl ScrollController {
    /// Creates a controller and computes the initial window at `options.initial_offset`.
    pub fn new(options: WindowOptions) -> Self {
        vdebug!(
            count = options.count,
            item_height = options.item_height,
            viewport_height = options.viewport_height,
            overscan = options.overscan,
            "ScrollController::new"
        );
        let mut c = Self {
            scroll_offset: options.initial_offset,
            options,
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
            window: VirtualWindow::empty(),
            revision: 0,
            notify_depth: 0,
            notify_pending: false,
        };
        c.recompute();
        c
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    /// Replaces the options. The window is only recomputed when the layout actually changed.
    ///
    /// `initial_offset` is not re-applied; the current scroll offset is kept.
    pub fn set_options(&mut self, options: WindowOptions) {
        let layout_changed = self.options.layout_differs(&options);
        self.options = options;
        vtrace!(
            count = self.options.count,
            overscan = self.options.overscan,
            layout_changed,
            "ScrollController::set_options"
        );
        if layout_changed {
            self.recompute();
        }
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&ScrollController, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn notify(&mut self) {
        if self.notify_depth > 0 {
            self.notify_pending = true;
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// The window itself is still recomputed by each setter, so [`Self::window`] is current
    /// inside `f` as well.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.notify_depth = self.notify_depth.saturating_add(1);

        f(self);

        debug_assert!(self.notify_depth > 0, "notify_depth underflow");
        self.notify_depth = self.notify_depth.saturating_sub(1);

        if self.notify_depth == 0 && core::mem::take(&mut self.notify_pending) {
            self.notify_now();
        }
    }

    fn recompute(&mut self) {
        let o = &self.options;
        let range = calculator::compute_into(
            o.count,
            o.item_height,
            o.viewport_height,
            self.scroll_offset,
            o.overscan,
            &mut self.window.items,
        );
        self.window.visible_range = range;
        self.window.total_extent = calculator::total_extent(o.count, o.item_height);
        self.revision = self.revision.wrapping_add(1);
        vtrace!(
            scroll_offset = self.scroll_offset,
            start = range.map(|r| r.start),
            end = range.map(|r| r.end),
            "recompute"
        );
    }

    /// The current window. Never stale: every input change recomputes it before returning.
    pub fn window(&self) -> &VirtualWindow {
        &self.window
    }

    pub fn visible_range(&self) -> Option<WindowRange> {
        self.window.visible_range
    }

    pub fn total_extent(&self) -> f64 {
        self.window.total_extent
    }

    /// Incremented every time the window is recomputed.
    ///
    /// Renderers can compare revisions to skip work when nothing changed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Runs the per-row render callback over the current window, in ascending index order.
    pub fn for_each_item(&self, mut f: impl FnMut(WindowItem)) {
        for &item in &self.window.items {
            f(item);
        }
    }

    /// Collects the current window's rows into `out` (clears `out` first).
    pub fn collect_items(&self, out: &mut Vec<WindowItem>) {
        out.clear();
        out.extend_from_slice(&self.window.items);
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn item_height(&self) -> f64 {
        self.options.item_height
    }

    pub fn viewport_height(&self) -> f64 {
        self.options.viewport_height
    }

    pub fn overscan(&self) -> usize {
        self.options.overscan
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: f64) {
        if self.scroll_offset == offset {
            return;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = match offset.partial_cmp(&prev) {
            Some(Ordering::Greater) => Some(ScrollDirection::Forward),
            Some(Ordering::Less) => Some(ScrollDirection::Backward),
            _ => self.scroll_direction,
        };
        self.recompute();
        self.notify();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: f64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    pub fn max_scroll_offset(&self) -> f64 {
        calculator::max_scroll_offset(
            self.options.count,
            self.options.item_height,
            self.options.viewport_height,
        )
    }

    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll_offset())
    }

    /// Updates the layout in one step. No-op when nothing changed.
    pub fn set_layout(&mut self, item_height: f64, viewport_height: f64, count: usize) {
        if self.options.item_height == item_height
            && self.options.viewport_height == viewport_height
            && self.options.count == count
        {
            return;
        }
        if !calculator::is_valid_item_height(item_height) {
            vwarn!(item_height, "set_layout: invalid item height, window will be empty");
        }
        vtrace!(item_height, viewport_height, count, "set_layout");
        self.options.item_height = item_height;
        self.options.viewport_height = viewport_height;
        self.options.count = count;
        self.recompute();
        self.notify();
    }

    pub fn set_count(&mut self, count: usize) {
        let (item_height, viewport_height) =
            (self.options.item_height, self.options.viewport_height);
        self.set_layout(item_height, viewport_height, count);
    }

    pub fn set_item_height(&mut self, item_height: f64) {
        let (viewport_height, count) = (self.options.viewport_height, self.options.count);
        self.set_layout(item_height, viewport_height, count);
    }

    pub fn set_viewport_height(&mut self, viewport_height: f64) {
        let (item_height, count) = (self.options.item_height, self.options.count);
        self.set_layout(item_height, viewport_height, count);
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.options.overscan == overscan {
            return;
        }
        self.options.overscan = overscan;
        self.recompute();
        self.notify();
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.scroll_direction = None;
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Clears `is_scrolling` once `is_scrolling_reset_delay_ms` has passed since the last
    /// scroll event. Call this from your frame/timer tick.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    /// Applies a scroll offset reported by your UI layer (wheel/drag/touch) and marks the list
    /// as scrolling. Fires `on_change` at most once.
    pub fn apply_scroll_event(&mut self, offset: f64, now_ms: u64) {
        vtrace!(offset, now_ms, "apply_scroll_event");
        self.batch_update(|c| {
            c.set_scroll_offset(offset);
            c.notify_scroll_event(now_ms);
        });
    }

    /// Same as `apply_scroll_event`, but clamps the offset.
    pub fn apply_scroll_event_clamped(&mut self, offset: f64, now_ms: u64) {
        vtrace!(offset, now_ms, "apply_scroll_event_clamped");
        self.batch_update(|c| {
            c.set_scroll_offset_clamped(offset);
            c.notify_scroll_event(now_ms);
        });
    }

    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        calculator::index_at_offset(self.options.count, self.options.item_height, offset)
    }

    pub fn item(&self, index: usize) -> Option<WindowItem> {
        calculator::item_at(self.options.count, self.options.item_height, index)
    }

    /// Computes the (clamped) offset that brings `index` into view with the given alignment.
    ///
    /// Out-of-range indexes are clamped to the last row.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> f64 {
        let count = self.options.count;
        if count == 0 {
            return 0.0;
        }
        let Some(item) = self.item(index.min(count - 1)) else {
            return 0.0;
        };
        let view = self.options.viewport_height.max(0.0);

        let target = match align {
            Align::Start => item.start,
            Align::End => item.end - view,
            Align::Center => item.start + item.size() / 2.0 - view / 2.0,
            Align::Auto => {
                let cur = self.scroll_offset;
                if item.start >= cur && item.end <= cur + view {
                    cur
                } else if item.start < cur {
                    item.start
                } else {
                    item.end - view
                }
            }
        };

        self.clamp_scroll_offset(target)
    }

    /// Programmatically scrolls to an index (no animation, does not mark as scrolling).
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> f64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }

    pub fn layout_state(&self) -> LayoutState {
        LayoutState {
            count: self.options.count,
            item_height: self.options.item_height,
            viewport_height: self.options.viewport_height,
            overscan: self.options.overscan,
        }
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            is_scrolling: self.is_scrolling,
        }
    }

    /// Returns a combined snapshot of layout + scroll state.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            layout: self.layout_state(),
            scroll: self.scroll_state(),
        }
    }

    /// Restores layout and scroll state from a previously captured snapshot.
    ///
    /// When `frame.scroll.is_scrolling` is `true`, the scrolling timer restarts at `now_ms`.
    pub fn restore_frame_state(&mut self, frame: FrameState, now_ms: u64) {
        let layout = frame.layout;
        self.batch_update(|c| {
            c.set_layout(layout.item_height, layout.viewport_height, layout.count);
            c.set_overscan(layout.overscan);
            c.set_scroll_offset(frame.scroll.offset);
            if frame.scroll.is_scrolling {
                c.notify_scroll_event(now_ms);
            } else {
                c.set_is_scrolling(false);
            }
        });
    }
}
