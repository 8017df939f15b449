use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }

    fn gen_range_i64(&mut self, start: i64, end_exclusive: i64) -> i64 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i64
    }
}

fn settled_model(subview_count: usize, position: i64) -> PositionModel {
    let mut m = PositionModel::new();
    m.on_subview_count_change(subview_count);
    m.set_position(Some(position));
    m
}

fn running_carousel(subview_count: usize, pause_ms: u64) -> Carousel {
    let mut c = Carousel::new(CarouselOptions::new().with_auto_scroll(
        AutoScrollConfig::default().with_pause_duration_ms(pause_ms),
    ));
    c.set_subview_count(subview_count);
    assert!(c.on_drag_phase_change(DragPhase::Idle, 0).is_started());
    c
}

#[test]
fn index_space_has_three_loops() {
    assert_eq!(index_space(0), 0..0);
    assert!(index_space(0).is_empty());
    for n in 1..20usize {
        assert_eq!(index_space(n).len(), 3 * n);
    }
}

#[test]
fn logical_index_is_periodic() {
    let mut rng = Lcg::new(0xC0FFEE);
    for _ in 0..2_000 {
        let n = rng.gen_range_usize(1, 64);
        let i = rng.gen_range_i64(-10_000, 10_000);
        let a = logical_index(i, n);
        assert!(a < n);
        assert_eq!(a, logical_index(i + n as i64, n), "i={i}, n={n}");
        assert_eq!(a, logical_index(i - n as i64, n), "i={i}, n={n}");
    }
}

#[test]
fn logical_index_without_items_is_zero() {
    for i in [i64::MIN, -7, -1, 0, 1, 5, 1_000, i64::MAX] {
        assert_eq!(logical_index(i, 0), 0);
    }
}

#[test]
fn logical_index_wraps_negative_positions() {
    assert_eq!(logical_index(-1, 5), 4);
    assert_eq!(logical_index(-5, 5), 0);
    assert_eq!(logical_index(-6, 5), 4);
    assert_eq!(logical_index(i64::MIN, 3), i64::MIN.rem_euclid(3) as usize);
}

#[test]
fn physical_index_for_logical_targets_middle_loop() {
    assert_eq!(physical_index_for_logical(0, 5), 5);
    assert_eq!(physical_index_for_logical(2, 5), 7);
    assert_eq!(physical_index_for_logical(4, 5), 9);
    // Out of range falls back to the start of the middle loop.
    assert_eq!(physical_index_for_logical(5, 5), 5);
    assert_eq!(physical_index_for_logical(99, 5), 5);
    assert_eq!(physical_index_for_logical(0, 0), 0);
}

#[test]
fn rewrap_matches_single_loop_shift_inside_index_space() {
    for n in 1..12usize {
        let ni = n as i64;
        for p in 0..(3 * ni) {
            let expected = if p < ni {
                p + ni
            } else if p >= 2 * ni {
                p - ni
            } else {
                p
            };
            assert_eq!(rewrap(p, n), expected, "p={p}, n={n}");
        }
    }
}

#[test]
fn rewrap_is_idempotent_and_lands_in_middle_loop() {
    let mut rng = Lcg::new(42);
    for _ in 0..2_000 {
        let n = rng.gen_range_usize(1, 50);
        let p = rng.gen_range_i64(-1_000, 1_000);
        let once = rewrap(p, n);
        assert_eq!(rewrap(once, n), once);
        assert!((n as i64..2 * n as i64).contains(&once));
        assert_eq!(logical_index(once, n), logical_index(p, n));
    }
    assert_eq!(rewrap(17, 0), 17);
    assert!(!index::needs_rewrap(7, 5));
    assert!(index::needs_rewrap(4, 5));
}

#[test]
fn logical_position_follows_physical_position() {
    let mut m = settled_model(5, 5);
    assert_eq!(m.logical_position(), 0);

    m.set_position(Some(7));
    assert_eq!(m.logical_position(), 2);

    m.set_position(Some(9));
    assert_eq!(m.logical_position(), 4);

    m.set_position(Some(2));
    assert_eq!(m.logical_position(), 2);
}

#[test]
fn jump_to_logical_places_target_in_middle_loop() {
    let mut m = settled_model(5, 5);
    assert_eq!(m.jump_to_logical(2), 7);

    m.set_position(Some(7));
    assert_eq!(m.jump_to_logical(0), 5);

    m.set_position(Some(9));
    assert_eq!(m.jump_to_logical(2), 7);

    m.set_position(Some(2));
    assert_eq!(m.jump_to_logical(4), 9);
    assert_eq!(m.position(), Some(9));
}

#[test]
fn idle_rewraps_left_boundary() {
    let mut m = settled_model(5, 4);
    let t = m.on_drag_phase_change(DragPhase::Idle);
    assert_eq!(m.position(), Some(9));
    assert_eq!(t.rewrapped, Some((Some(4), 9)));
    assert_eq!(t.auto_scroll_allowed, Some(true));
}

#[test]
fn idle_rewraps_right_boundary() {
    let mut m = settled_model(5, 10);
    m.on_drag_phase_change(DragPhase::Idle);
    assert_eq!(m.position(), Some(5));
}

#[test]
fn idle_keeps_middle_loop_position() {
    let mut m = settled_model(5, 7);
    let t = m.on_drag_phase_change(DragPhase::Idle);
    assert_eq!(m.position(), Some(7));
    assert_eq!(t.rewrapped, None);
}

#[test]
fn idle_rewrap_twice_is_same_as_once() {
    let mut m = settled_model(5, 12);
    m.on_drag_phase_change(DragPhase::Idle);
    let once = m.position();
    m.on_drag_phase_change(DragPhase::Idle);
    assert_eq!(m.position(), once);
    assert_eq!(once, Some(7));
}

#[test]
fn idle_seeds_unset_position() {
    let mut m = PositionModel::new();
    m.on_subview_count_change(3);
    m.set_position(None);
    m.on_drag_phase_change(DragPhase::Idle);
    assert_eq!(m.position(), Some(3));
}

#[test]
fn drag_phases_toggle_drag_active() {
    let mut m = settled_model(5, 2);
    m.on_drag_phase_change(DragPhase::Decelerating);
    assert!(!m.is_drag_active());
    assert!(!m.is_scroll_enabled());
    // No rewrap mid-fling.
    assert_eq!(m.position(), Some(2));

    m.on_drag_phase_change(DragPhase::Decelerating);
    assert!(!m.is_drag_active());

    m.on_drag_phase_change(DragPhase::Idle);
    assert!(m.is_drag_active());
    assert_eq!(m.position(), Some(7));

    m.on_drag_phase_change(DragPhase::Idle);
    assert!(m.is_drag_active());
}

#[test]
fn interacting_disallows_auto_scroll_without_rewrap() {
    let mut m = settled_model(5, 11);
    let t = m.on_drag_phase_change(DragPhase::Interacting);
    assert_eq!(t.auto_scroll_allowed, Some(false));
    assert_eq!(t.rewrapped, None);
    assert_eq!(m.position(), Some(11));
    assert!(m.is_drag_active());

    for phase in [DragPhase::Tracking, DragPhase::Animating] {
        assert_eq!(m.on_drag_phase_change(phase), PhaseTransition::default());
        assert_eq!(m.drag_phase(), phase);
    }
}

#[test]
fn scrolling_needs_two_items() {
    let mut m = PositionModel::new();
    assert!(!m.is_scroll_enabled());
    assert_eq!(m.logical_position(), 0);

    m.on_subview_count_change(1);
    assert!(!m.is_scroll_enabled());
    assert_eq!(m.logical_position(), 0);
    assert_eq!(m.advance(ScrollDirection::Forward), None);

    m.on_subview_count_change(2);
    assert!(m.is_scroll_enabled());
}

#[test]
fn zero_items_never_rewrap() {
    let mut m = PositionModel::new();
    m.on_subview_count_change(0);
    m.set_position(Some(42));
    assert_eq!(m.rewrap(), None);
    m.on_drag_phase_change(DragPhase::Idle);
    assert_eq!(m.position(), Some(42));
    assert_eq!(m.logical_position(), 0);
}

#[test]
fn subview_count_change_seeds_and_preserves_page() {
    let mut m = PositionModel::new();
    assert_eq!(m.position(), None);
    assert_eq!(m.on_subview_count_change(5), 5);

    m.set_position(Some(13)); // page 3, next loop
    assert_eq!(m.on_subview_count_change(6), 9);
    assert_eq!(m.logical_position(), 3);

    // Page 3 no longer exists: back to the first page of the middle loop.
    assert_eq!(m.on_subview_count_change(2), 2);
    assert_eq!(m.logical_position(), 0);
}

#[test]
fn advance_steps_in_both_directions() {
    let mut m = PositionModel::new();
    m.on_subview_count_change(4);
    m.set_position(None);
    assert_eq!(m.advance(ScrollDirection::Forward), Some(4));
    assert_eq!(m.advance(ScrollDirection::Forward), Some(5));
    assert_eq!(m.advance(ScrollDirection::Backward), Some(4));
    assert_eq!(m.advance(ScrollDirection::Backward), Some(3));
    assert_eq!(m.logical_position(), 3);
}

#[test]
fn restore_rewraps_saved_position() {
    let mut m = PositionModel::new();
    m.on_drag_phase_change(DragPhase::Decelerating);
    m.restore(4, Some(1));
    assert_eq!(m.position(), Some(5));
    assert!(m.is_drag_active());
    assert_eq!(m.drag_phase(), DragPhase::Idle);
}

#[test]
fn auto_scroll_waits_until_allowed() {
    let mut a = AutoScrollController::default();
    assert!(a.is_enabled());
    assert!(!a.is_allowed());
    assert!(matches!(a.evaluate_run_state(0), RunStateChange::Unchanged));
    assert!(!a.is_running());

    assert!(a.set_allowed(true, 0).is_started());
    assert!(a.is_running());

    assert!(a.set_allowed(false, 10).is_cancelled());
    assert!(!a.is_running());
}

#[test]
fn auto_scroll_never_double_starts() {
    let mut a = AutoScrollController::default();
    let RunStateChange::Started(token) = a.set_allowed(true, 0) else {
        panic!("expected a task to start");
    };
    let first_id = a.task().map(AutoScrollTask::id);

    assert!(matches!(a.evaluate_run_state(5), RunStateChange::Unchanged));
    assert!(matches!(
        a.reconfigure(AutoScrollUpdate::new().pause_duration_ms(50), 6),
        RunStateChange::Unchanged
    ));
    assert_eq!(a.task().map(AutoScrollTask::id), first_id);
    assert!(a.task().is_some_and(|t| t.token().same_task(&token)));
    assert!(!token.is_cancelled());
}

#[test]
fn disabling_cancels_and_enabling_restarts() {
    let mut a = AutoScrollController::default();
    let RunStateChange::Started(first) = a.set_allowed(true, 0) else {
        panic!("expected a task to start");
    };
    assert!(a.reconfigure(AutoScrollUpdate::new().enabled(false), 1).is_cancelled());
    assert!(first.is_cancelled());
    assert!(matches!(
        a.reconfigure(AutoScrollUpdate::new().enabled(false), 2),
        RunStateChange::Unchanged
    ));

    let RunStateChange::Started(second) = a.reconfigure(AutoScrollUpdate::new().enabled(true), 3)
    else {
        panic!("expected a task to restart");
    };
    assert!(!second.same_task(&first));
    assert_eq!(a.next_tick_ms(), Some(3 + DEFAULT_PAUSE_DURATION_MS));
}

#[test]
fn reconfigure_leaves_missing_fields_untouched() {
    let mut a = AutoScrollController::new(
        AutoScrollConfig::default()
            .with_pause_duration_ms(500)
            .with_direction(ScrollDirection::Backward),
    );
    assert!(AutoScrollUpdate::new().is_empty());
    a.reconfigure(AutoScrollUpdate::new().enabled(false), 0);
    assert_eq!(a.pause_duration_ms(), 500);
    assert_eq!(a.direction(), ScrollDirection::Backward);

    a.reconfigure(AutoScrollUpdate::new().pause_duration_ms(0), 0);
    assert_eq!(a.pause_duration_ms(), 1, "pause is clamped to at least 1ms");
    assert!(!a.is_enabled());
}

#[test]
fn lifecycle_pauses_and_resumes() {
    let mut a = AutoScrollController::default();
    assert!(a.set_allowed(true, 0).is_started());

    assert!(a.on_app_phase_change(AppPhase::Background, 10).is_cancelled());
    assert!(!a.is_running());
    assert!(matches!(
        a.on_app_phase_change(AppPhase::Inactive, 11),
        RunStateChange::Unchanged
    ));

    // Configuration changes while hidden never restart the task.
    assert!(matches!(
        a.reconfigure(AutoScrollUpdate::new().enabled(true), 12),
        RunStateChange::Unchanged
    ));
    assert!(!a.is_running());

    assert!(a.on_app_phase_change(AppPhase::Active, 20).is_started());
    assert_eq!(a.next_tick_ms(), Some(20 + DEFAULT_PAUSE_DURATION_MS));
}

#[test]
fn foreground_does_not_resume_while_dragging() {
    let mut a = AutoScrollController::default();
    a.on_app_phase_change(AppPhase::Background, 0);
    a.set_allowed(false, 0);
    assert!(matches!(
        a.on_app_phase_change(AppPhase::Active, 1),
        RunStateChange::Unchanged
    ));
    assert!(!a.is_running());
}

#[test]
fn poll_steps_once_per_pause() {
    let mut a = AutoScrollController::new(AutoScrollConfig::default().with_pause_duration_ms(100));
    assert_eq!(a.poll(1_000), None, "no task, no step");

    a.set_allowed(true, 0);
    assert_eq!(a.poll(0), None);
    assert_eq!(a.poll(99), None);
    assert_eq!(a.poll(100), Some(ScrollDirection::Forward));
    assert_eq!(a.next_tick_ms(), Some(200));
    assert_eq!(a.poll(150), None);

    // A late wake takes one step and waits a full pause again.
    assert_eq!(a.poll(450), Some(ScrollDirection::Forward));
    assert_eq!(a.poll(451), None);
    assert_eq!(a.next_tick_ms(), Some(550));
}

#[test]
fn poll_reads_pause_and_direction_live() {
    let mut a = AutoScrollController::new(AutoScrollConfig::default().with_pause_duration_ms(100));
    a.set_allowed(true, 0);

    a.reconfigure(
        AutoScrollUpdate::new()
            .pause_duration_ms(300)
            .direction(ScrollDirection::Backward),
        10,
    );
    // The wait in progress keeps its deadline.
    assert_eq!(a.next_tick_ms(), Some(100));
    assert_eq!(a.poll(100), Some(ScrollDirection::Backward));
    assert_eq!(a.next_tick_ms(), Some(400));
}

#[test]
fn cancelled_token_never_steps() {
    let mut a = AutoScrollController::new(AutoScrollConfig::default().with_pause_duration_ms(10));
    let RunStateChange::Started(token) = a.set_allowed(true, 0) else {
        panic!("expected a task to start");
    };
    token.cancel();
    assert!(!a.is_running());
    assert_eq!(a.poll(1_000), None);
    assert!(a.task().is_none());

    // An externally cancelled task is replaced on the next evaluation.
    assert!(a.evaluate_run_state(1_000).is_started());
}

#[test]
fn dropping_the_controller_cancels_its_task() {
    let mut a = AutoScrollController::default();
    let RunStateChange::Started(token) = a.set_allowed(true, 0) else {
        panic!("expected a task to start");
    };
    drop(a);
    assert!(token.is_cancelled());
}

#[test]
fn carousel_gates_auto_scroll_on_drag_phases() {
    let mut c = Carousel::default();
    c.set_subview_count(5);
    assert!(!c.is_auto_scrolling());

    assert!(c.on_drag_phase_change(DragPhase::Idle, 0).is_started());
    assert!(c.is_auto_scrolling());

    assert!(c.on_drag_phase_change(DragPhase::Interacting, 10).is_cancelled());
    assert!(!c.is_auto_scrolling());

    assert!(matches!(
        c.on_drag_phase_change(DragPhase::Decelerating, 20),
        RunStateChange::Unchanged
    ));
    assert!(!c.is_scroll_enabled());

    assert!(c.on_drag_phase_change(DragPhase::Idle, 30).is_started());
    assert!(c.is_scroll_enabled());
}

#[test]
fn carousel_lifecycle_cancels_and_restarts() {
    let mut c = running_carousel(5, 100);
    assert!(c.on_app_phase_change(AppPhase::Background, 50).is_cancelled());
    assert_eq!(c.tick(1_000), None);

    assert!(c.on_app_phase_change(AppPhase::Active, 1_000).is_started());
    assert_eq!(c.tick(1_100), Some(6));
}

#[test]
fn carousel_tick_advances_and_settle_rewraps() {
    let mut c = running_carousel(3, 100);
    assert_eq!(c.position(), Some(3));

    assert_eq!(c.tick(50), None);
    assert_eq!(c.tick(100), Some(4));
    assert_eq!(c.tick(200), Some(5));
    assert_eq!(c.tick(300), Some(6));
    assert_eq!(c.page(), 0);

    // The host animates, then reports the surface at rest.
    c.on_drag_phase_change(DragPhase::Animating, 300);
    c.on_drag_phase_change(DragPhase::Idle, 350);
    assert_eq!(c.position(), Some(3));
    assert!(c.is_auto_scrolling());
}

#[test]
fn carousel_backward_auto_scroll() {
    let mut c = running_carousel(4, 100);
    c.set_direction(ScrollDirection::Backward, 0);
    assert_eq!(c.tick(100), Some(3));
    assert_eq!(c.page(), 3);
    c.on_drag_phase_change(DragPhase::Idle, 150);
    assert_eq!(c.position(), Some(7));
}

#[test]
fn carousel_single_item_does_not_advance() {
    let mut c = running_carousel(1, 10);
    assert_eq!(c.tick(10), None);
    assert_eq!(c.position(), Some(1));
    assert_eq!(c.page(), 0);
    assert!(!c.is_scroll_enabled());
}

#[test]
fn carousel_initial_page_seeds_middle_loop() {
    let mut c = Carousel::new(CarouselOptions::new().with_initial_page(Some(2)));
    c.set_subview_count(5);
    assert_eq!(c.position(), Some(7));
    assert_eq!(c.page(), 2);

    // Only the first observation uses the initial page.
    c.set_subview_count(4);
    assert_eq!(c.position(), Some(6));
}

#[test]
fn jump_to_page_guards_and_cancels() {
    let mut c = Carousel::default();
    assert_eq!(c.jump_to_page(1), None, "no items yet");

    c.set_subview_count(5);
    c.on_drag_phase_change(DragPhase::Idle, 0);
    assert!(c.is_auto_scrolling());

    assert_eq!(c.jump_to_page(0), None, "already on page 0");
    assert!(c.is_auto_scrolling());

    assert_eq!(c.jump_to_page(3), Some(8));
    assert_eq!(c.page(), 3);
    assert!(!c.is_auto_scrolling());

    // Pages past the end wrap.
    assert_eq!(c.jump_to_page(6), Some(6));
    assert_eq!(c.page(), 1);

    // Settling after the jump resumes auto-scrolling.
    assert!(c.on_drag_phase_change(DragPhase::Idle, 30).is_started());
}

#[test]
fn jump_to_page_ignores_unset_position() {
    let mut c = Carousel::default();
    c.set_subview_count(5);
    c.on_scroll_position_change(None);
    assert_eq!(c.jump_to_page(2), None);
}

#[test]
fn page_change_callback_fires_on_page_changes_only() {
    let pages = Arc::new(Mutex::new(Vec::new()));
    let changes = Arc::new(AtomicUsize::new(0));
    let mut c = Carousel::new(
        CarouselOptions::new()
            .with_on_page_change(Some({
                let pages = Arc::clone(&pages);
                move |page| pages.lock().unwrap().push(page)
            }))
            .with_on_change(Some({
                let changes = Arc::clone(&changes);
                move |_: &Carousel| {
                    changes.fetch_add(1, Ordering::Relaxed);
                }
            })),
    );
    c.set_subview_count(5);
    c.on_scroll_position_change(Some(6));
    c.on_scroll_position_change(Some(6));
    c.on_scroll_position_change(Some(11));
    c.on_drag_phase_change(DragPhase::Idle, 0);
    c.jump_to_page(4);

    assert_eq!(*pages.lock().unwrap(), [1, 4]);
    assert_eq!(changes.load(Ordering::Relaxed), 5);
    assert_eq!(c.position(), Some(9));
}

#[test]
fn batch_update_coalesces_notifications() {
    let changes = Arc::new(AtomicUsize::new(0));
    let mut c = Carousel::default();
    c.set_on_change(Some({
        let changes = Arc::clone(&changes);
        move |_: &Carousel| {
            changes.fetch_add(1, Ordering::Relaxed);
        }
    }));

    c.batch_update(|c| {
        c.set_subview_count(3);
        c.on_scroll_position_change(Some(7));
        c.on_drag_phase_change(DragPhase::Idle, 0);
    });
    assert_eq!(changes.load(Ordering::Relaxed), 1);
    assert_eq!(c.position(), Some(4));

    c.batch_update(|_| {});
    assert_eq!(changes.load(Ordering::Relaxed), 1);
}

#[test]
fn items_describe_three_loops() {
    let mut c = Carousel::default();
    assert_eq!(c.items().count(), 0);
    assert_eq!(c.item(0), None);

    c.set_subview_count(3);
    let items: Vec<CarouselItem> = c.items().collect();
    assert_eq!(items.len(), 9);
    let subviews: Vec<usize> = items.iter().map(|i| i.subview_index).collect();
    assert_eq!(subviews, [0, 1, 2, 0, 1, 2, 0, 1, 2]);
    assert!(items[4].is_in_middle_loop());
    assert_eq!(items[8].loop_index(), 2);

    assert_eq!(
        c.item(5),
        Some(CarouselItem {
            item_index: 5,
            subview_index: 2,
            subview_count: 3,
        })
    );
    assert_eq!(c.item(9), None);

    let mut n = 0;
    c.for_each_item(|_| n += 1);
    assert_eq!(n, c.item_indices().len());
}

#[test]
fn state_round_trips_through_restore() {
    let mut c = running_carousel(5, 250);
    c.on_scroll_position_change(Some(12));
    let s = c.state();
    assert_eq!(s.page, 2);
    assert!(s.is_auto_scrolling);
    assert_eq!(s.auto_scroll.pause_duration_ms, 250);

    let mut restored = Carousel::default();
    restored.restore_state(s, 0);
    assert_eq!(restored.position(), Some(7));
    assert_eq!(restored.page(), 2);
    assert_eq!(restored.auto_scroll().pause_duration_ms(), 250);
    assert!(!restored.is_auto_scrolling(), "waits for a settled surface");
}

#[test]
fn update_options_reconfigures_auto_scroll() {
    let mut c = running_carousel(3, 100);
    assert!(c
        .update_options(5, |o| o.auto_scroll.enabled = false)
        .is_cancelled());
    assert!(!c.options().auto_scroll.enabled);
    assert!(c.set_auto_scroll_enabled(true, 6).is_started());
    c.set_pause_duration_ms(40, 6);
    assert_eq!(c.options().auto_scroll.pause_duration_ms, 40);
}

#[test]
fn teardown_cancels_live_task() {
    let mut c = running_carousel(3, 100);
    let token = c.auto_scroll().task().map(|t| t.token().clone());
    c.teardown();
    assert!(!c.is_auto_scrolling());
    assert!(token.is_some_and(|t| t.is_cancelled()));
    assert_eq!(c.tick(10_000), None);
}

#[test]
fn dots_select_current_page() {
    let dots = DotsIndicator::new(5);
    assert!(dots.is_selected(4, Some(4)));
    assert!(
        !dots.is_selected(4, Some(3)),
        "Scroll position is different than index, so return false"
    );
    assert!(
        !dots.is_selected(5, Some(3)),
        "Index out of bounds, so return false"
    );
    assert!(dots.is_selected(0, None));
    assert!(dots.is_selected(2, Some(7)));
}

#[test]
fn dots_without_items_select_nothing() {
    let dots = DotsIndicator::new(0);
    assert!(!dots.is_selected(0, Some(0)));
    assert_eq!(dots.selected_index(None), None);
    assert_eq!(dots.dots(Some(1)).count(), 0);
    assert_eq!(dots.tap(0), None);
}

#[test]
fn dot_tap_requests_a_page_jump() {
    let mut dots = DotsIndicator::new(3);
    assert_eq!(dots.tap(2), Some(2));
    assert_eq!(dots.tap(3), None);

    let mut c = Carousel::default();
    c.set_subview_count(3);
    let page = dots.tap(2).and_then(|p| c.jump_to_page(p));
    assert_eq!(page, Some(5));

    let selected: Vec<bool> = dots.dots(Some(c.page())).map(|d| d.selected).collect();
    assert_eq!(selected, [false, false, true]);

    dots.set_items_count(4);
    let mut seen = Vec::new();
    dots.for_each_dot(Some(c.page()), |d| seen.push(d));
    assert_eq!(seen.len(), 4);
    assert!(seen[2].selected);
}
