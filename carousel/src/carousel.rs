use core::cell::Cell;
use core::ops::Range;

use crate::auto_scroll::{AutoScrollController, AutoScrollUpdate, RunStateChange};
use crate::index;
use crate::position::PositionModel;
use crate::{AppPhase, CarouselItem, CarouselOptions, CarouselState, DragPhase, ScrollDirection};

/// A headless infinite carousel.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter reports the subview count, gesture phases, app phases and configuration.
/// - Your adapter reads back the physical position (to drive the scroll surface) and the
///   logical page (for dots or an external page binding).
/// - Auto-scrolling is driven by calling [`Carousel::tick`] with the current time. For a
///   background-thread driver, see the `carousel-adapter` crate.
#[derive(Debug)]
pub struct Carousel {
    options: CarouselOptions,
    model: PositionModel,
    auto_scroll: AutoScrollController,

    last_page: Cell<usize>,
    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(CarouselOptions::default())
    }
}

impl Carousel {
    pub fn new(options: CarouselOptions) -> Self {
        cdebug!(
            auto_scroll = ?options.auto_scroll,
            initial_page = ?options.initial_page,
            "Carousel::new"
        );
        Self {
            auto_scroll: AutoScrollController::new(options.auto_scroll),
            model: PositionModel::new(),
            options,
            last_page: Cell::new(0),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Replaces the options and re-evaluates auto-scrolling against the new configuration.
    pub fn set_options(&mut self, options: CarouselOptions, now_ms: u64) -> RunStateChange {
        self.options = options;
        let change = self.auto_scroll.set_config(self.options.auto_scroll, now_ms);
        self.options.auto_scroll = self.auto_scroll.config();
        self.notify();
        change
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        now_ms: u64,
        f: impl FnOnce(&mut CarouselOptions),
    ) -> RunStateChange {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next, now_ms)
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) {
        self.options = core::mem::take(&mut self.options).with_on_change(on_change);
    }

    pub fn set_on_page_change(
        &mut self,
        on_page_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) {
        self.options = core::mem::take(&mut self.options).with_on_page_change(on_page_change);
    }

    fn notify_now(&self) {
        let page = self.page();
        if self.last_page.replace(page) != page {
            if let Some(cb) = &self.options.on_page_change {
                cb(page);
            }
        }
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single notification.
    ///
    /// A host typically reports a count, a position and a phase in the same frame; without
    /// batching each of them fires the callbacks.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn position_model(&self) -> &PositionModel {
        &self.model
    }

    pub fn auto_scroll(&self) -> &AutoScrollController {
        &self.auto_scroll
    }

    pub fn subview_count(&self) -> usize {
        self.model.subview_count()
    }

    /// The physical position over the tripled index space.
    pub fn position(&self) -> Option<i64> {
        self.model.position()
    }

    /// The logical page currently shown, in `[0, subview_count)` (or `0` without items).
    pub fn page(&self) -> usize {
        self.model.logical_position()
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.model.drag_phase()
    }

    pub fn is_scroll_enabled(&self) -> bool {
        self.model.is_scroll_enabled()
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.auto_scroll.is_running()
    }

    /// The physical item range the host should lay out.
    pub fn item_indices(&self) -> Range<usize> {
        index::index_space(self.model.subview_count())
    }

    /// Describes the physical item at `item_index`, or `None` outside the index space.
    pub fn item(&self, item_index: usize) -> Option<CarouselItem> {
        let subview_count = self.model.subview_count();
        if !index::index_space(subview_count).contains(&item_index) {
            return None;
        }
        Some(CarouselItem {
            item_index,
            subview_index: item_index % subview_count,
            subview_count,
        })
    }

    /// Iterates over every physical item, in order.
    pub fn items(&self) -> impl Iterator<Item = CarouselItem> + '_ {
        let subview_count = self.model.subview_count();
        self.item_indices().map(move |item_index| CarouselItem {
            item_index,
            subview_index: item_index % subview_count,
            subview_count,
        })
    }

    pub fn for_each_item(&self, mut f: impl FnMut(CarouselItem)) {
        for item in self.items() {
            f(item);
        }
    }

    /// Reports the number of child items currently presented.
    ///
    /// The first observation seeds the position in the middle loop, on `initial_page` when one
    /// is configured. Later observations keep the current page when it still exists.
    pub fn set_subview_count(&mut self, subview_count: usize) {
        let first = self.model.position().is_none();
        self.model.on_subview_count_change(subview_count);
        if first {
            if let Some(page) = self.options.initial_page {
                self.model.jump_to_logical(page);
            }
        }
        self.notify();
    }

    /// Host scroll binding write: the surface settled on (or is passing through) `position`.
    pub fn on_scroll_position_change(&mut self, position: Option<i64>) {
        if self.model.position() == position {
            return;
        }
        self.model.set_position(position);
        self.notify();
    }

    /// Reports a gesture phase transition.
    ///
    /// `Idle` rewraps and allows auto-scrolling; `Interacting` cancels it at once so a manual
    /// gesture is never overridden by an automatic step.
    pub fn on_drag_phase_change(&mut self, phase: DragPhase, now_ms: u64) -> RunStateChange {
        let transition = self.model.on_drag_phase_change(phase);
        let change = match transition.auto_scroll_allowed {
            Some(allowed) => self.auto_scroll.set_allowed(allowed, now_ms),
            None => RunStateChange::Unchanged,
        };
        self.notify();
        change
    }

    pub fn on_app_phase_change(&mut self, phase: AppPhase, now_ms: u64) -> RunStateChange {
        let change = self.auto_scroll.on_app_phase_change(phase, now_ms);
        self.notify();
        change
    }

    /// Applies a partial auto-scroll reconfiguration.
    pub fn reconfigure(&mut self, update: AutoScrollUpdate, now_ms: u64) -> RunStateChange {
        let change = self.auto_scroll.reconfigure(update, now_ms);
        self.options.auto_scroll = self.auto_scroll.config();
        self.notify();
        change
    }

    pub fn set_auto_scroll_enabled(&mut self, enabled: bool, now_ms: u64) -> RunStateChange {
        self.reconfigure(AutoScrollUpdate::new().enabled(enabled), now_ms)
    }

    pub fn set_pause_duration_ms(
        &mut self,
        pause_duration_ms: u64,
        now_ms: u64,
    ) -> RunStateChange {
        self.reconfigure(
            AutoScrollUpdate::new().pause_duration_ms(pause_duration_ms),
            now_ms,
        )
    }

    pub fn set_direction(&mut self, direction: ScrollDirection, now_ms: u64) -> RunStateChange {
        self.reconfigure(AutoScrollUpdate::new().direction(direction), now_ms)
    }

    /// External page-index request (e.g. a dot tap or a bound page index).
    ///
    /// Ignored without items, before the position is seeded, or when `page` is already shown.
    /// Otherwise cancels the in-flight auto-scroll task and moves to `page` in the middle loop.
    /// Pages past the end wrap. Returns the new position.
    pub fn jump_to_page(&mut self, page: usize) -> Option<i64> {
        let subview_count = self.model.subview_count();
        if subview_count == 0 {
            cwarn!(page, "jump_to_page ignored: no items");
            return None;
        }
        let position = self.model.position()?;
        let page = page % subview_count;
        if index::logical_index(position, subview_count) == page {
            return None;
        }

        self.auto_scroll.cancel();
        let target = self.model.jump_to_logical(page);
        cdebug!(page, from = position, to = target, "jump_to_page");
        self.notify();
        Some(target)
    }

    /// Drives the auto-scroll task.
    ///
    /// Returns the new physical position when a step was taken. The host is expected to animate
    /// to it and report the resulting phases (which rewrap once the surface is idle again).
    pub fn tick(&mut self, now_ms: u64) -> Option<i64> {
        let direction = self.auto_scroll.poll(now_ms)?;
        let position = self.model.advance(direction)?;
        ctrace!(?direction, position, now_ms, "auto-scroll step");
        self.notify();
        Some(position)
    }

    /// Cancels any live auto-scroll task. Call when the hosting view goes away.
    pub fn teardown(&mut self) {
        if self.auto_scroll.cancel() {
            self.notify();
        }
    }

    /// Returns a lightweight snapshot of the current state.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            subview_count: self.model.subview_count(),
            position: self.model.position(),
            page: self.page(),
            drag_phase: self.model.drag_phase(),
            is_scroll_enabled: self.model.is_scroll_enabled(),
            is_auto_scrolling: self.auto_scroll.is_running(),
            auto_scroll: self.auto_scroll.config(),
        }
    }

    /// Restores a snapshot taken by [`Carousel::state`].
    ///
    /// The position is rewrapped into the middle loop. Auto-scrolling still waits for the host
    /// to report a settled surface.
    pub fn restore_state(&mut self, state: CarouselState, now_ms: u64) -> RunStateChange {
        self.model.restore(state.subview_count, state.position);
        let change = self.auto_scroll.set_config(state.auto_scroll, now_ms);
        self.options.auto_scroll = self.auto_scroll.config();
        self.notify();
        change
    }
}
