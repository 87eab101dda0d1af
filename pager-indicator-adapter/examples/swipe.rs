// Example: simulate a swipe gesture with a settle animation driven by a fake frame clock.
use pager_indicator::{NormalizerOptions, from_fn};
use pager_indicator_adapter::{Easing, PagerController};

fn main() {
    let mut c = PagerController::with_listener(
        NormalizerOptions::new(4),
        360,
        from_fn(|e| println!("{e:?}")),
    );

    // First layout pass.
    c.set_current_page(0);

    c.begin_drag();
    for _ in 0..6 {
        c.drag_by(48.0);
    }
    let target = c.release(0, 200, Easing::SmoothStep);
    println!("released at {:.2}, settling on page {target}", c.scroll_position());

    let mut now_ms = 0;
    while let Some(position) = c.tick(now_ms) {
        println!("t={now_ms}ms position={position:.3}");
        now_ms += 16;
    }

    println!("state={:?}", c.normalizer().state());
}
