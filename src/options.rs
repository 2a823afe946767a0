use alloc::sync::Arc;

use crate::DEFAULT_OVERSCAN;
use crate::controller::ScrollController;

/// A callback fired when a controller state update occurs.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback = Arc<dyn Fn(&ScrollController, bool) + Send + Sync>;

/// Configuration for [`crate::ScrollController`].
///
/// Cheap to clone: the callback is stored in an `Arc`, so adapters can tweak a field and hand the
/// options back via `ScrollController::set_options`.
#[derive(Clone)]
pub struct WindowOptions {
    pub count: usize,
    /// Height of every row. Non-positive or non-finite heights produce an empty window.
    pub item_height: f64,
    pub viewport_height: f64,
    pub overscan: usize,

    /// Scroll offset applied by `ScrollController::new`.
    pub initial_offset: f64,

    /// Optional callback fired when the controller's state changes.
    pub on_change: Option<OnChangeCallback>,

    /// How long after the last scroll event `is_scrolling` stays set.
    pub is_scrolling_reset_delay_ms: u64,
}

impl WindowOptions {
    pub fn new(count: usize, item_height: f64) -> Self {
        Self {
            count,
            item_height,
            viewport_height: 0.0,
            overscan: DEFAULT_OVERSCAN,
            initial_offset: 0.0,
            on_change: None,
            is_scrolling_reset_delay_ms: 150,
        }
    }

    pub fn with_viewport_height(mut self, viewport_height: f64) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: f64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&ScrollController, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    /// Whether `other` would produce a different window for the same scroll offset.
    pub(crate) fn layout_differs(&self, other: &Self) -> bool {
        self.count != other.count
            || self.item_height != other.item_height
            || self.viewport_height != other.viewport_height
            || self.overscan != other.overscan
    }
}

impl core::fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("count", &self.count)
            .field("item_height", &self.item_height)
            .field("viewport_height", &self.viewport_height)
            .field("overscan", &self.overscan)
            .field("initial_offset", &self.initial_offset)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}
