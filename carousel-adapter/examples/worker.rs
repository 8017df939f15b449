use std::thread;
use std::time::Duration;

use carousel::{AutoScrollConfig, CarouselOptions, DragPhase};
use carousel_adapter::Controller;

fn main() {
    // Example: a host that lets the controller run auto-scroll on a background thread.
    //
    // An adapter would:
    // - forward the item count, gesture phases and app phases as they happen
    // - observe `on_change` / `on_page_change` to move the real scroll surface and the dots
    let mut c = Controller::new(
        CarouselOptions::new()
            .with_auto_scroll(AutoScrollConfig::default().with_pause_duration_ms(250))
            .with_on_page_change(Some(|page| println!("page -> {page}"))),
    );
    c.set_subview_count(3);
    c.on_drag_phase_change(DragPhase::Idle);

    thread::sleep(Duration::from_millis(1_100));
    println!("position={:?} page={}", c.position(), c.page());

    // The user grabs the carousel: the worker stops at once.
    c.on_drag_phase_change(DragPhase::Interacting);
    println!("dragging: worker={}", c.has_worker());

    c.on_drag_phase_change(DragPhase::Idle);
    println!(
        "settled: position={:?} worker={}",
        c.position(),
        c.has_worker()
    );

    thread::sleep(Duration::from_millis(600));
    c.teardown();
    println!("done: {:?}", c.state());
}
