use alloc::vec::Vec;
use core::ops::RangeInclusive;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// One materialized row of the window.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowItem {
    pub index: usize,
    /// Offset of the row's top edge from the top of the scroll track.
    pub start: f64,
    /// Offset of the row's bottom edge (`start + item_height`).
    pub end: f64,
}

impl WindowItem {
    pub fn size(&self) -> f64 {
        self.end - self.start
    }
}

/// Index bounds of a non-empty window. All bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    /// First row intersecting the viewport (no overscan).
    pub first_visible: usize,
    /// Last row intersecting the viewport (no overscan).
    pub last_visible: usize,
    /// First materialized row (overscan applied).
    pub start: usize,
    /// Last materialized row (overscan applied).
    pub end: usize,
    pub count: usize,
}

impl WindowRange {
    /// Number of materialized rows.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Number of rows in the strictly visible part of the window.
    pub fn visible_len(&self) -> usize {
        self.last_visible - self.first_visible + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    pub fn indexes(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    pub fn visible(&self) -> RangeInclusive<usize> {
        self.first_visible..=self.last_visible
    }
}

/// The derived result of a window computation.
///
/// `visible_range` is `None` and `items` is empty when nothing can be shown (no items, or a
/// degenerate item height). With `feature = "serde"`, this type implements
/// `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualWindow {
    pub visible_range: Option<WindowRange>,
    /// Rows to render, in ascending index order.
    pub items: Vec<WindowItem>,
    /// Height of the whole scroll track (`count * item_height`).
    pub total_extent: f64,
}

impl VirtualWindow {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn first(&self) -> Option<WindowItem> {
        self.items.first().copied()
    }

    pub fn last(&self) -> Option<WindowItem> {
        self.items.last().copied()
    }
}
