use crate::{AutoScrollConfig, DragPhase};

/// A lightweight, serializable snapshot of a carousel.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, so hosts can keep
/// the current page across sessions without coupling the engine to a storage layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub subview_count: usize,
    pub position: Option<i64>,
    pub page: usize,
    pub drag_phase: DragPhase,
    pub is_scroll_enabled: bool,
    pub is_auto_scrolling: bool,
    pub auto_scroll: AutoScrollConfig,
}
