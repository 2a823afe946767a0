/// A lightweight, serializable snapshot of a list's layout parameters.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutState {
    pub count: usize,
    pub item_height: f64,
    pub viewport_height: f64,
    pub overscan: usize,
}

/// A lightweight, serializable snapshot of the current scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: f64,
    pub is_scrolling: bool,
}

/// A combined snapshot of layout + scroll state.
///
/// Useful for restoring a list's position across frames or sessions without coupling the
/// controller to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub layout: LayoutState,
    pub scroll: ScrollState,
}
