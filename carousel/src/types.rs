/// Gesture lifecycle phase of the host's scroll surface.
///
/// Only `Idle`, `Interacting` and `Decelerating` drive the position model. `Tracking` and
/// `Animating` are accepted so adapters can forward every phase their toolkit reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragPhase {
    /// No active touch and the surface is settled.
    #[default]
    Idle,
    /// A touch landed but has not started moving the content yet.
    Tracking,
    /// The user is actively dragging.
    Interacting,
    /// Momentum scrolling after the touch was released.
    Decelerating,
    /// A programmatic (animated) scroll is in flight.
    Animating,
}

/// Application lifecycle phase as seen by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AppPhase {
    #[default]
    Active,
    Inactive,
    Background,
}

impl AppPhase {
    pub fn is_foreground(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Direction of automatic advancement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    #[default]
    Forward,
    Backward,
}

impl ScrollDirection {
    /// The signed physical step taken by one auto-scroll tick.
    pub fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Describes one entry of the physical (tripled) item sequence.
///
/// A host renders `subview_index` at slot `item_index`, and may style it using
/// `subview_count` (e.g. "3 of 5" labels or per-index decorations).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselItem {
    pub item_index: usize,
    pub subview_index: usize,
    pub subview_count: usize,
}

impl CarouselItem {
    /// Which of the three copies (`0`, `1` or `2`) this item belongs to.
    pub fn loop_index(&self) -> usize {
        if self.subview_count == 0 {
            return 0;
        }
        self.item_index / self.subview_count
    }

    pub fn is_in_middle_loop(&self) -> bool {
        self.loop_index() == 1
    }
}
