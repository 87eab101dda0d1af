// Example: feed a short drag across two pages and print the indicator events.
use pager_indicator::{NormalizerOptions, ScrollEventNormalizer, ScrollPhase, from_fn};

fn main() {
    let mut n = ScrollEventNormalizer::with_listener(
        NormalizerOptions::new(4),
        from_fn(|e| println!("{e:?}")),
    );

    // Initial layout: the host reports the resting position once while idle.
    n.on_scroll(0, 0.0, 0);

    n.on_scroll_state_changed(ScrollPhase::Dragging);
    for step in 1..=4 {
        let offset = step as f32 * 0.25;
        if offset < 1.0 {
            n.on_scroll(0, offset, (offset * 360.0) as i32);
        } else {
            n.on_scroll(1, 0.0, 0);
        }
    }

    n.on_scroll_state_changed(ScrollPhase::Settling);
    n.on_page_selected(1);
    n.on_scroll_state_changed(ScrollPhase::Idle);
    n.on_scroll(1, 0.0, 0);

    println!("state={:?}", n.state());
}
