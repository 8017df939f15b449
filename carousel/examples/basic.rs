use carousel::{AutoScrollConfig, Carousel, CarouselOptions, DotsIndicator, DragPhase};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new()
            .with_auto_scroll(AutoScrollConfig::default().with_pause_duration_ms(1_000))
            .with_on_page_change(Some(|page| println!("page -> {page}"))),
    );
    c.set_subview_count(4);
    c.on_drag_phase_change(DragPhase::Idle, 0);
    println!("items={:?} position={:?}", c.item_indices(), c.position());

    // Simulate a frame loop at ~60fps for five seconds.
    let dots = DotsIndicator::new(c.subview_count());
    let mut now_ms = 0u64;
    while now_ms < 5_000 {
        now_ms += 16;
        if let Some(position) = c.tick(now_ms) {
            // A real adapter animates to `position`, then reports the settle.
            c.on_drag_phase_change(DragPhase::Animating, now_ms);
            c.on_drag_phase_change(DragPhase::Idle, now_ms);
            let row: String = dots
                .dots(Some(c.page()))
                .map(|d| if d.selected { '●' } else { '○' })
                .collect();
            println!("t={now_ms} stepped_to={position} settled={:?} {row}", c.position());
        }
    }

    // A user drag cancels auto-scrolling until the surface settles again.
    c.on_drag_phase_change(DragPhase::Interacting, now_ms);
    println!("dragging: auto_scrolling={}", c.is_auto_scrolling());
    c.on_scroll_position_change(c.position().map(|p| p - 2));
    c.on_drag_phase_change(DragPhase::Decelerating, now_ms);
    c.on_drag_phase_change(DragPhase::Idle, now_ms);
    println!(
        "settled: position={:?} page={} auto_scrolling={}",
        c.position(),
        c.page(),
        c.is_auto_scrolling()
    );
}
