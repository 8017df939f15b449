use std::sync::{Arc, Mutex};

use carousel::{
    AppPhase, AutoScrollUpdate, Carousel, CarouselOptions, CarouselState, DragPhase,
    RunStateChange, ScrollDirection,
};

use crate::Clock;
use crate::worker::{AutoScrollWorker, lock};

/// A framework-neutral controller that owns a `carousel::Carousel` and runs its auto-scroll task
/// on a background thread.
///
/// This type does not hold any UI objects. Adapters drive it by calling the `on_*`/`set_*`
/// methods when UI events occur; the controller stamps each event with its own clock and starts
/// or stops the worker to match the carousel's run state.
///
/// Callbacks configured in [`CarouselOptions`] run on whichever thread updated the carousel
/// (including the worker thread) while the carousel's mutex is held. They must not call back
/// into the controller.
#[derive(Debug)]
pub struct Controller {
    shared: Arc<Mutex<Carousel>>,
    clock: Clock,
    worker: Option<AutoScrollWorker>,
}

impl Controller {
    pub fn new(options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::new(options))
    }

    pub fn from_carousel(carousel: Carousel) -> Self {
        Self {
            shared: Arc::new(Mutex::new(carousel)),
            clock: Clock::new(),
            worker: None,
        }
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Runs `f` with shared access to the carousel.
    pub fn with_carousel<R>(&self, f: impl FnOnce(&Carousel) -> R) -> R {
        let c = lock(&self.shared);
        f(&*c)
    }

    pub fn state(&self) -> CarouselState {
        self.with_carousel(Carousel::state)
    }

    pub fn page(&self) -> usize {
        self.with_carousel(Carousel::page)
    }

    pub fn position(&self) -> Option<i64> {
        self.with_carousel(Carousel::position)
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.with_carousel(Carousel::is_auto_scrolling)
    }

    /// Whether a worker thread is currently alive.
    pub fn has_worker(&self) -> bool {
        self.worker.as_ref().is_some_and(AutoScrollWorker::is_running)
    }

    pub fn set_subview_count(&mut self, subview_count: usize) {
        self.update(|c, _| {
            c.set_subview_count(subview_count);
            RunStateChange::Unchanged
        });
    }

    pub fn on_scroll_position_change(&mut self, position: Option<i64>) {
        self.update(|c, _| {
            c.on_scroll_position_change(position);
            RunStateChange::Unchanged
        });
    }

    pub fn on_drag_phase_change(&mut self, phase: DragPhase) -> RunStateChange {
        self.update(|c, now_ms| c.on_drag_phase_change(phase, now_ms))
    }

    pub fn on_app_phase_change(&mut self, phase: AppPhase) -> RunStateChange {
        self.update(|c, now_ms| c.on_app_phase_change(phase, now_ms))
    }

    pub fn reconfigure(&mut self, update: AutoScrollUpdate) -> RunStateChange {
        self.update(|c, now_ms| c.reconfigure(update, now_ms))
    }

    pub fn set_auto_scroll_enabled(&mut self, enabled: bool) -> RunStateChange {
        self.reconfigure(AutoScrollUpdate::new().enabled(enabled))
    }

    pub fn set_pause_duration_ms(&mut self, pause_duration_ms: u64) -> RunStateChange {
        self.reconfigure(AutoScrollUpdate::new().pause_duration_ms(pause_duration_ms))
    }

    pub fn set_direction(&mut self, direction: ScrollDirection) -> RunStateChange {
        self.reconfigure(AutoScrollUpdate::new().direction(direction))
    }

    /// External page-index request. Cancels the in-flight auto-scroll task when it moves.
    pub fn jump_to_page(&mut self, page: usize) -> Option<i64> {
        let mut target = None;
        self.update(|c, _| {
            target = c.jump_to_page(page);
            RunStateChange::Unchanged
        });
        target
    }

    /// Cancels any live auto-scroll task and waits for the worker to exit.
    pub fn teardown(&mut self) {
        lock(&self.shared).teardown();
        self.stop_worker();
    }

    /// Applies `f` under the carousel's mutex, then starts or stops the worker to match.
    pub fn update(
        &mut self,
        f: impl FnOnce(&mut Carousel, u64) -> RunStateChange,
    ) -> RunStateChange {
        let change = {
            let mut c = lock(&self.shared);
            f(&mut *c, self.clock.now_ms())
        };
        self.sync_worker(&change);
        change
    }

    fn sync_worker(&mut self, change: &RunStateChange) {
        if let RunStateChange::Started(token) = change {
            self.stop_worker();
            adebug!("spawning auto-scroll worker");
            self.worker = Some(AutoScrollWorker::spawn(
                Arc::clone(&self.shared),
                token.clone(),
                self.clock,
            ));
            return;
        }
        if self.worker.as_ref().is_some_and(AutoScrollWorker::is_cancelled) {
            self.stop_worker();
        }
    }

    fn stop_worker(&mut self) {
        if let Some(mut worker) = self.worker.take() {
            worker.stop();
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.teardown();
    }
}
