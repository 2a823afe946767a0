//! Pure window math for fixed-height rows.
//!
//! Every function here is a pure function of its arguments and runs in O(window size): the full
//! sequence is never walked. Degenerate inputs are clamped to the nearest valid window instead of
//! being reported, since these run on every scroll event.
use alloc::vec::Vec;

use crate::{VirtualWindow, WindowItem, WindowRange};

/// Rows rendered past each edge of the viewport when no overscan is configured.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Returns `true` when rows of this height can be laid out at all.
pub fn is_valid_item_height(item_height: f64) -> bool {
    item_height.is_finite() && item_height > 0.0
}

// NaN and negative extents (elastic overscroll, host bugs) count as zero.
fn sanitize(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}

// `floor` for the non-negative domain, saturating at `usize::MAX`. Float-to-int `as` casts
// truncate and saturate, which keeps this usable without `std`.
fn floor_to_usize(value: f64) -> usize {
    let value = sanitize(value);
    value as usize
}

fn ceil_to_usize(value: f64) -> usize {
    let value = sanitize(value);
    let truncated = value as usize;
    if (truncated as f64) < value {
        truncated.saturating_add(1)
    } else {
        truncated
    }
}

/// Full height of the scroll track, or `0` when nothing can be laid out.
pub fn total_extent(count: usize, item_height: f64) -> f64 {
    if count == 0 || !is_valid_item_height(item_height) {
        return 0.0;
    }
    count as f64 * item_height
}

/// Largest meaningful scroll offset: `max(0, total_extent - viewport_height)`.
pub fn max_scroll_offset(count: usize, item_height: f64, viewport_height: f64) -> f64 {
    let total = total_extent(count, item_height);
    (total - sanitize(viewport_height)).max(0.0)
}

/// Index of the row covering `offset`, clamped to the valid index range.
///
/// Returns `None` when there are no rows or the item height is degenerate.
pub fn index_at_offset(count: usize, item_height: f64, offset: f64) -> Option<usize> {
    if count == 0 || !is_valid_item_height(item_height) {
        return None;
    }
    Some(floor_to_usize(offset / item_height).min(count - 1))
}

/// Geometry of a single row, or `None` when `index` is out of bounds.
pub fn item_at(count: usize, item_height: f64, index: usize) -> Option<WindowItem> {
    if index >= count || !is_valid_item_height(item_height) {
        return None;
    }
    Some(item(index, item_height))
}

fn item(index: usize, item_height: f64) -> WindowItem {
    WindowItem {
        index,
        start: index as f64 * item_height,
        end: (index as f64 + 1.0) * item_height,
    }
}

/// Computes the window bounds without materializing any rows.
pub fn compute_range(
    count: usize,
    item_height: f64,
    viewport_height: f64,
    scroll_offset: f64,
    overscan: usize,
) -> Option<WindowRange> {
    if count == 0 || !is_valid_item_height(item_height) {
        return None;
    }

    let last_index = count - 1;
    let first_visible = floor_to_usize(scroll_offset / item_height).min(last_index);
    let rows = ceil_to_usize(viewport_height / item_height);
    let last_visible = first_visible.saturating_add(rows).min(last_index);

    let start = first_visible.saturating_sub(overscan);
    let end = last_visible.saturating_add(overscan).min(last_index);

    debug_assert!(start <= first_visible && first_visible <= last_visible);
    debug_assert!(last_visible <= end && end < count);

    Some(WindowRange {
        first_visible,
        last_visible,
        start,
        end,
        count,
    })
}

/// Runs `f` over every row of the window, in ascending index order.
///
/// This is the allocation-free path for renderers: `f` is the per-row render callback. Returns
/// the window bounds, or `None` (without calling `f`) when the window is empty.
pub fn for_each_item(
    count: usize,
    item_height: f64,
    viewport_height: f64,
    scroll_offset: f64,
    overscan: usize,
    mut f: impl FnMut(WindowItem),
) -> Option<WindowRange> {
    let range = compute_range(count, item_height, viewport_height, scroll_offset, overscan)?;
    for index in range.indexes() {
        f(item(index, item_height));
    }
    Some(range)
}

/// Collects the window's rows into `out` (cleared first), reusing its allocation.
pub fn compute_into(
    count: usize,
    item_height: f64,
    viewport_height: f64,
    scroll_offset: f64,
    overscan: usize,
    out: &mut Vec<WindowItem>,
) -> Option<WindowRange> {
    out.clear();
    let range = compute_range(count, item_height, viewport_height, scroll_offset, overscan)?;
    out.reserve(range.len());
    out.extend(range.indexes().map(|index| item(index, item_height)));
    Some(range)
}

/// Computes the full window for the given layout and scroll offset.
pub fn compute(
    count: usize,
    item_height: f64,
    viewport_height: f64,
    scroll_offset: f64,
    overscan: usize,
) -> VirtualWindow {
    let mut items = Vec::new();
    let visible_range = compute_into(
        count,
        item_height,
        viewport_height,
        scroll_offset,
        overscan,
        &mut items,
    );
    VirtualWindow {
        visible_range,
        items,
        total_extent: total_extent(count, item_height),
    }
}
