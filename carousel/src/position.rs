use crate::index::{self, count_i64};
use crate::{DragPhase, ScrollDirection};

/// What a drag-phase transition changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhaseTransition {
    /// `Some(allowed)` when the phase gates auto-scrolling on or off.
    pub auto_scroll_allowed: Option<bool>,
    /// `Some((from, to))` when the settle rewrapped the position.
    pub rewrapped: Option<(Option<i64>, i64)>,
}

/// Physical scroll position over the tripled index space, plus the drag-phase state machine.
///
/// The host writes the subview count, the scroll position it observes and every gesture phase;
/// the model keeps the position in the middle loop whenever the surface comes to rest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionModel {
    subview_count: usize,
    position: Option<i64>,
    drag_phase: DragPhase,
    is_drag_active: bool,
}

impl Default for PositionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionModel {
    pub fn new() -> Self {
        Self {
            subview_count: 0,
            position: None,
            drag_phase: DragPhase::Idle,
            is_drag_active: true,
        }
    }

    pub fn subview_count(&self) -> usize {
        self.subview_count
    }

    /// The physical position, `None` until the first subview count is observed.
    pub fn position(&self) -> Option<i64> {
        self.position
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag_phase
    }

    /// `false` while the surface is decelerating after a fling.
    pub fn is_drag_active(&self) -> bool {
        self.is_drag_active
    }

    /// Whether the host should let the user scroll.
    ///
    /// Scrolling is disabled with fewer than two items (nothing to loop to) and while a fling is
    /// settling.
    pub fn is_scroll_enabled(&self) -> bool {
        self.subview_count > 1 && self.is_drag_active
    }

    /// The logical item currently shown; `0` when there are no items.
    pub fn logical_position(&self) -> usize {
        index::logical_index(self.position.unwrap_or(0), self.subview_count)
    }

    /// Host scroll binding write: the surface reports the item it settled on.
    pub fn set_position(&mut self, position: Option<i64>) {
        self.position = position;
    }

    /// Restores a saved count and position. The position is rewrapped into the middle loop.
    pub fn restore(&mut self, subview_count: usize, position: Option<i64>) {
        self.subview_count = subview_count;
        self.position = position;
        self.drag_phase = DragPhase::Idle;
        self.is_drag_active = true;
        self.rewrap();
    }

    /// Stores a new subview count and re-seeds the position in the middle loop.
    ///
    /// The logical index is derived under the previous count and kept when it still exists;
    /// otherwise the first item of the middle loop is used. Returns the seeded position.
    pub fn on_subview_count_change(&mut self, subview_count: usize) -> i64 {
        let previous = self.subview_count;
        let logical = index::logical_index(self.position.unwrap_or(0), previous);
        self.subview_count = subview_count;
        let seeded = index::physical_index_for_logical(logical, subview_count);
        cdebug!(
            previous,
            subview_count,
            logical,
            seeded,
            "PositionModel::on_subview_count_change"
        );
        self.position = Some(seeded);
        seeded
    }

    /// Places a logical index in the middle loop. Returns the new position.
    pub fn jump_to_logical(&mut self, logical_index: usize) -> i64 {
        let target = index::physical_index_for_logical(logical_index, self.subview_count);
        self.position = Some(target);
        target
    }

    /// Applies a gesture phase transition.
    ///
    /// - `Idle`: the drag becomes active again, auto-scrolling is allowed and the position is
    ///   rewrapped into the middle loop.
    /// - `Decelerating`: the drag becomes inactive until the fling settles; no rewrap yet.
    /// - `Interacting`: auto-scrolling is disallowed so it never fights the user's gesture.
    /// - anything else: no effect besides recording the phase.
    pub fn on_drag_phase_change(&mut self, phase: DragPhase) -> PhaseTransition {
        ctrace!(?phase, position = ?self.position, "PositionModel::on_drag_phase_change");
        self.drag_phase = phase;
        match phase {
            DragPhase::Idle => {
                self.is_drag_active = true;
                PhaseTransition {
                    auto_scroll_allowed: Some(true),
                    rewrapped: self.rewrap(),
                }
            }
            DragPhase::Decelerating => {
                self.is_drag_active = false;
                PhaseTransition::default()
            }
            DragPhase::Interacting => PhaseTransition {
                auto_scroll_allowed: Some(false),
                rewrapped: None,
            },
            DragPhase::Tracking | DragPhase::Animating => PhaseTransition::default(),
        }
    }

    /// Moves the position back into the middle loop.
    ///
    /// An unset position is seeded to the first middle-loop slot. Does nothing without items.
    /// Returns `Some((from, to))` when the position changed.
    pub fn rewrap(&mut self) -> Option<(Option<i64>, i64)> {
        if self.subview_count == 0 {
            return None;
        }
        let from = self.position;
        let to = match from {
            Some(position) => index::rewrap(position, self.subview_count),
            None => count_i64(self.subview_count),
        };
        if from == Some(to) {
            return None;
        }
        cdebug!(?from, to, subview_count = self.subview_count, "rewrap");
        self.position = Some(to);
        Some((from, to))
    }

    /// Steps the position by one item in `direction`.
    ///
    /// An unset position lands on the first middle-loop slot. Does nothing with fewer than two
    /// items. Returns the new position.
    pub fn advance(&mut self, direction: ScrollDirection) -> Option<i64> {
        if self.subview_count <= 1 {
            return None;
        }
        let to = match self.position {
            Some(from) => from.saturating_add(direction.step()),
            None => count_i64(self.subview_count),
        };
        self.position = Some(to);
        Some(to)
    }
}
