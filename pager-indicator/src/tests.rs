use crate::normalizer::is_left_to_right;
use crate::*;

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

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

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() >> 33) % (end_exclusive - start)
    }
}

fn normalizer(total_count: usize) -> ScrollEventNormalizer<EventLog> {
    ScrollEventNormalizer::with_listener(NormalizerOptions::new(total_count), EventLog::new())
}

fn take(n: &mut ScrollEventNormalizer<EventLog>) -> Vec<IndicatorEvent> {
    n.listener_mut().map(EventLog::take).unwrap_or_default()
}

fn selected(index: usize, total_count: usize) -> IndicatorEvent {
    IndicatorEvent::Selected { index, total_count }
}

fn deselected(index: usize, total_count: usize) -> IndicatorEvent {
    IndicatorEvent::Deselected { index, total_count }
}

fn enter(index: usize, total_count: usize, fraction: f32, left_to_right: bool) -> IndicatorEvent {
    IndicatorEvent::Enter {
        index,
        total_count,
        fraction,
        left_to_right,
    }
}

fn leave(index: usize, total_count: usize, fraction: f32, left_to_right: bool) -> IndicatorEvent {
    IndicatorEvent::Leave {
        index,
        total_count,
        fraction,
        left_to_right,
    }
}

#[test]
fn dragging_half_page_leaves_current_enters_next_and_forces_the_rest() {
    let mut n = normalizer(3);
    n.on_scroll_state_changed(ScrollPhase::Dragging);
    n.on_scroll(0, 0.5, 50);

    assert_eq!(
        take(&mut n),
        vec![
            leave(2, 3, 1.0, true),
            leave(0, 3, 0.5, true),
            enter(1, 3, 0.5, true),
        ]
    );
    assert_eq!(n.leave_fraction(0), 0.5);
    assert_eq!(n.leave_fraction(1), 0.5);
    assert_eq!(n.leave_fraction(2), 1.0);
}

#[test]
fn duplicate_sample_while_scrolling_is_ignored() {
    let mut n = normalizer(3);
    n.on_scroll_state_changed(ScrollPhase::Dragging);
    n.on_scroll(0, 0.5, 50);
    assert_eq!(take(&mut n).len(), 3);

    n.on_scroll(0, 0.5, 50);
    assert!(take(&mut n).is_empty());
    assert_eq!(n.last_position_sum(), 0.5);
}

#[test]
fn idle_sample_settles_on_current_index() {
    let mut n = normalizer(3);
    n.on_scroll(0, 0.0, 0);
    assert_eq!(
        take(&mut n),
        vec![
            deselected(1, 3),
            leave(1, 3, 1.0, false),
            deselected(2, 3),
            leave(2, 3, 1.0, false),
            enter(0, 3, 1.0, false),
            selected(0, 3),
        ]
    );

    // Terminal states already reported: only the current index is re-asserted.
    n.on_scroll(0, 0.0, 0);
    assert_eq!(
        take(&mut n),
        vec![enter(0, 3, 1.0, false), selected(0, 3)]
    );
}

#[test]
fn configure_forgets_per_index_tracking() {
    let mut n = normalizer(3);
    n.on_scroll(0, 0.0, 0);
    assert!(n.is_deselected(1));
    assert_eq!(n.leave_fraction(2), 1.0);
    take(&mut n);

    n.configure(3);
    assert_eq!(n.index_state(1), IndexState::default());
    assert_eq!(n.index_state(2), IndexState::default());

    n.on_scroll(0, 0.0, 0);
    assert_eq!(take(&mut n).len(), 6);

    n.configure(2);
    n.on_scroll(0, 0.0, 0);
    assert_eq!(
        take(&mut n),
        vec![
            deselected(1, 2),
            leave(1, 2, 1.0, false),
            enter(0, 2, 1.0, false),
            selected(0, 2),
        ]
    );
}

#[test]
fn page_selected_selects_and_deselects_the_others_once() {
    let mut n = normalizer(4);
    n.on_page_selected(2);
    assert_eq!(n.current_index(), 2);
    assert_eq!(n.previous_index(), 0);
    assert_eq!(
        take(&mut n),
        vec![
            selected(2, 4),
            deselected(0, 4),
            deselected(1, 4),
            deselected(3, 4),
        ]
    );

    n.on_page_selected(1);
    assert_eq!(n.current_index(), 1);
    assert_eq!(n.previous_index(), 2);
    assert_eq!(take(&mut n), vec![selected(1, 4), deselected(2, 4)]);
    assert!(!n.is_deselected(1));
}

#[test]
fn page_edge_sample_takes_boundary_path() {
    let mut n = normalizer(3);
    n.on_scroll_state_changed(ScrollPhase::Dragging);
    n.on_scroll(0, 0.5, 50);
    take(&mut n);

    n.on_scroll(1, 0.0, 0);
    assert_eq!(
        take(&mut n),
        vec![
            leave(0, 3, 1.0, true),
            leave(2, 3, 1.0, true),
            enter(1, 3, 1.0, true),
        ]
    );
    assert_eq!(n.leave_fraction(1), 0.0);
}

#[test]
fn trailing_edge_reports_index_past_the_end() {
    let mut n = normalizer(3);
    n.on_scroll_state_changed(ScrollPhase::Dragging);
    n.on_scroll(1, 0.5, 50);
    assert_eq!(
        take(&mut n),
        vec![
            leave(0, 3, 1.0, true),
            leave(1, 3, 0.5, true),
            enter(2, 3, 0.5, true),
        ]
    );

    n.on_scroll(2, 0.0, 0);
    assert_eq!(
        take(&mut n),
        vec![
            leave(1, 3, 1.0, true),
            leave(3, 3, 1.0, true),
            enter(2, 3, 1.0, true),
        ]
    );
}

#[test]
fn right_to_left_drag_leaves_next_and_enters_position() {
    let mut n = normalizer(3);
    n.on_page_selected(1);
    n.on_scroll(1, 0.0, 0);
    take(&mut n);

    n.on_scroll_state_changed(ScrollPhase::Dragging);
    n.on_scroll(0, 0.75, 75);
    assert_eq!(
        take(&mut n),
        vec![leave(1, 3, 0.25, false), enter(0, 3, 0.25, false)]
    );
    assert_eq!(n.leave_fraction(1), 0.25);
    assert_eq!(n.leave_fraction(0), 0.75);
}

#[test]
fn settling_drops_partial_transitions_away_from_current() {
    let mut n = normalizer(5);
    n.on_scroll_state_changed(ScrollPhase::Settling);
    n.on_scroll(2, 0.5, 0);
    assert_eq!(
        take(&mut n),
        vec![
            leave(0, 5, 1.0, true),
            leave(1, 5, 1.0, true),
            leave(4, 5, 1.0, true),
        ]
    );
    assert_eq!(n.leave_fraction(2), 0.0);
    assert_eq!(n.leave_fraction(3), 0.0);
}

#[test]
fn skim_over_dispatches_every_transition() {
    let mut n = ScrollEventNormalizer::with_listener(
        NormalizerOptions::new(5).with_skim_over(true),
        EventLog::new(),
    );
    n.on_scroll_state_changed(ScrollPhase::Settling);
    n.on_scroll(2, 0.5, 0);
    assert_eq!(
        take(&mut n),
        vec![
            leave(0, 5, 1.0, true),
            leave(1, 5, 1.0, true),
            leave(4, 5, 1.0, true),
            leave(2, 5, 0.5, true),
            enter(3, 5, 0.5, true),
        ]
    );
}

#[test]
fn neighbor_of_current_keeps_receiving_leave_while_settling() {
    let mut n = normalizer(4);
    n.on_page_selected(2);
    take(&mut n);

    n.on_scroll_state_changed(ScrollPhase::Dragging);
    n.on_scroll(2, 0.4, 0);
    assert_eq!(
        take(&mut n),
        vec![
            leave(0, 4, 1.0, true),
            leave(1, 4, 1.0, true),
            leave(2, 4, 0.4, true),
            enter(3, 4, 0.4, true),
        ]
    );

    // Released before the threshold: the pager settles back to page 2.
    n.on_scroll_state_changed(ScrollPhase::Settling);
    n.on_scroll(2, 0.2, 0);
    assert_eq!(
        take(&mut n),
        vec![leave(3, 4, 1.0 - 0.2, false), enter(2, 4, 1.0 - 0.2, false)]
    );

    n.on_scroll(2, 0.0, 0);
    assert_eq!(
        take(&mut n),
        vec![leave(3, 4, 1.0, false), enter(2, 4, 1.0, false)]
    );

    n.on_scroll(2, 0.0, 0);
    assert!(take(&mut n).is_empty());

    // Page 3 is fully left now, and page 2 is not a neighbor of itself.
    n.on_scroll(2, 0.1, 0);
    assert!(take(&mut n).is_empty());
}

#[test]
fn previous_page_keeps_receiving_leave_while_settling() {
    let mut n = normalizer(5);
    n.on_page_selected(3);
    take(&mut n);

    // Page 0 is neither current nor adjacent to it, only the page we came from.
    n.on_scroll_state_changed(ScrollPhase::Settling);
    n.on_scroll(0, 0.3, 0);
    assert_eq!(
        take(&mut n),
        vec![
            leave(2, 5, 1.0, true),
            leave(3, 5, 1.0, true),
            leave(4, 5, 1.0, true),
            leave(0, 5, 0.3, true),
        ]
    );
    assert_eq!(n.leave_fraction(0), 0.3);
    assert_eq!(n.leave_fraction(1), 0.0);
}

#[test]
fn fully_left_neighbor_gets_no_repeated_leave_while_settling() {
    let mut n = normalizer(3);
    n.on_page_selected(1);
    take(&mut n);

    n.on_scroll_state_changed(ScrollPhase::Settling);
    n.on_scroll(0, 0.5, 0);
    assert_eq!(
        take(&mut n),
        vec![
            leave(2, 3, 1.0, true),
            leave(0, 3, 0.5, true),
            enter(1, 3, 0.5, true),
        ]
    );

    n.on_scroll(1, 0.0, 0);
    assert_eq!(
        take(&mut n),
        vec![leave(0, 3, 1.0, true), enter(1, 3, 1.0, true)]
    );
    assert_eq!(n.leave_fraction(2), 1.0);
}

#[test]
fn equal_sums_count_as_left_to_right() {
    assert!(is_left_to_right(1.5, 1.5));
    assert!(is_left_to_right(1.5, 1.75));
    assert!(!is_left_to_right(1.5, 1.25));
}

#[test]
fn monotonic_drag_ends_every_passed_page_with_one_full_leave() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..50 {
        let mut n = normalizer(6);
        n.on_scroll_state_changed(ScrollPhase::Dragging);

        let mut events = Vec::new();
        let mut hundredths = 0u64;
        loop {
            hundredths += rng.gen_range_u64(1, 100);
            if hundredths % 100 == 0 {
                hundredths += 1;
            }
            let position = (hundredths / 100) as usize;
            let offset = (hundredths % 100) as f32 / 100.0;
            n.on_scroll(position, offset, 0);

            let sum = n.leave_fraction(position) + n.leave_fraction(position + 1);
            assert!(
                (sum - 1.0).abs() < 1e-6,
                "position={position} offset={offset} sum={sum}"
            );
            events.extend(take(&mut n));
            if position >= 4 {
                break;
            }
        }

        let final_position = (hundredths / 100) as usize;
        for index in 0..final_position {
            let touching: Vec<IndicatorEvent> = events
                .iter()
                .copied()
                .filter(|e| e.index() == index)
                .collect();
            let last_partial = touching
                .iter()
                .rposition(|e| e.fraction().is_some_and(|f| f < 1.0))
                .unwrap();
            assert_eq!(&touching[last_partial + 1..], &[leave(index, 6, 1.0, true)]);
            assert_eq!(n.leave_fraction(index), 1.0);
        }
    }
}

#[test]
fn state_is_tracked_without_a_listener() {
    let mut n = ScrollEventNormalizer::<EventLog>::new(NormalizerOptions::new(3));
    n.on_page_selected(1);
    assert!(n.is_deselected(0));
    assert!(!n.is_deselected(1));
    assert!(n.is_deselected(2));

    assert!(n.set_listener(Some(EventLog::new())).is_none());
    n.on_scroll(1, 0.0, 0);
    assert_eq!(
        take(&mut n),
        vec![
            leave(0, 3, 1.0, false),
            leave(2, 3, 1.0, false),
            enter(1, 3, 1.0, false),
            selected(1, 3),
        ]
    );
}

#[test]
fn set_listener_replaces_and_returns_previous() {
    let mut n = normalizer(2);
    n.on_page_selected(1);

    let prev = n.set_listener(Some(EventLog::new())).unwrap();
    assert_eq!(prev.events(), &[selected(1, 2), deselected(0, 2)]);
    assert!(n.listener().is_some_and(EventLog::is_empty));

    assert!(n.take_listener().is_some());
    n.on_page_selected(0);
    assert!(n.listener().is_none());
    assert_eq!(n.current_index(), 0);
}

#[test]
fn closure_and_borrowed_listeners_receive_events() {
    let mut seen = Vec::new();
    {
        let mut n = ScrollEventNormalizer::with_listener(
            NormalizerOptions::new(2),
            from_fn(|e| seen.push(e)),
        );
        n.on_page_selected(1);
    }
    assert_eq!(seen, vec![selected(1, 2), deselected(0, 2)]);

    let mut log = EventLog::new();
    {
        let mut n = ScrollEventNormalizer::with_listener(NormalizerOptions::new(2), &mut log);
        n.on_scroll(0, 0.0, 0);
    }
    assert_eq!(log.len(), 4);
    assert_eq!(log.events()[3], selected(0, 2));
}

#[test]
fn boxed_listener_is_the_default_type() {
    let mut n: ScrollEventNormalizer = ScrollEventNormalizer::new(NormalizerOptions::new(2));
    n.set_listener(Some(Box::new(EventLog::new())));
    n.on_scroll(0, 0.0, 0);
    assert!(n.is_deselected(1));
}

#[test]
fn raw_scroll_phase_codes() {
    assert_eq!(ScrollPhase::from_raw(0), Some(ScrollPhase::Idle));
    assert_eq!(ScrollPhase::from_raw(1), Some(ScrollPhase::Dragging));
    assert_eq!(ScrollPhase::from_raw(2), Some(ScrollPhase::Settling));
    assert_eq!(ScrollPhase::from_raw(3), None);
    assert_eq!(ScrollPhase::Settling.as_raw(), 2);

    let mut n = normalizer(2);
    n.on_scroll_state_changed_raw(2);
    assert_eq!(n.scroll_phase(), ScrollPhase::Settling);
    n.on_scroll_state_changed_raw(9);
    assert_eq!(n.scroll_phase(), ScrollPhase::Settling);
}

#[test]
fn options_update_resets_tracking_only_when_count_changes() {
    let mut n = normalizer(3);
    n.on_scroll(0, 0.0, 0);

    n.update_options(|o| o.skim_over = true);
    assert!(n.skim_over());
    assert!(n.is_deselected(1));

    n.set_options(NormalizerOptions::new(4));
    assert!(!n.skim_over());
    assert_eq!(n.total_count(), 4);
    assert!(!n.is_deselected(1));
}

#[test]
fn restore_state_round_trips_scalars_and_starts_indexes_fresh() {
    let mut n = normalizer(4);
    n.on_page_selected(2);
    n.on_scroll_state_changed(ScrollPhase::Dragging);
    n.on_scroll(2, 0.25, 0);
    let snapshot = n.state();
    assert_eq!(snapshot.current_index, 2);
    assert_eq!(snapshot.scroll_phase, ScrollPhase::Dragging);
    assert_eq!(snapshot.last_position_sum, 2.25);

    let mut m = normalizer(0);
    m.restore_state(snapshot);
    assert_eq!(m.state(), snapshot);
    assert_eq!(m.leave_fraction(2), 0.0);

    // Same sum as before the snapshot: still a duplicate.
    m.on_scroll(2, 0.25, 0);
    assert!(take(&mut m).is_empty());
}

#[test]
fn example_basic_smoke() {
    let mut seen = Vec::new();
    {
        let mut n = ScrollEventNormalizer::with_listener(
            NormalizerOptions::new(4),
            from_fn(|e| seen.push(e)),
        );
        n.on_scroll(0, 0.0, 0);
        n.on_scroll_state_changed(ScrollPhase::Dragging);
        for offset in [0.25, 0.5, 0.75] {
            n.on_scroll(0, offset, 0);
        }
        n.on_scroll(1, 0.0, 0);
        n.on_scroll_state_changed(ScrollPhase::Settling);
        n.on_page_selected(1);
        n.on_scroll_state_changed(ScrollPhase::Idle);
        n.on_scroll(1, 0.0, 0);
        assert_eq!(n.current_index(), 1);
        assert_eq!(n.leave_fraction(0), 1.0);
        assert_eq!(n.leave_fraction(1), 0.0);
    }
    assert_eq!(seen.last(), Some(&selected(1, 4)));
}
