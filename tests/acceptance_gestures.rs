//! Black-box acceptance tests for the drag-selection gesture.
//!
//! Exercises the library API end to end: long-press → drag → release,
//! plain taps, termination, auto-scroll requests, and the anchor-relative
//! coordinate framing the drag math depends on.

use daygrid::config::GestureConfig;
use daygrid::model::{Day, DayGrid};
use daygrid::state::{
    handle_gesture, handle_scroll_notification, manual_scroll_enabled, tick_auto_scroll, AppState,
    GestureEvent, GestureOutput, SelectionMode,
};
use daygrid::view_state::{CellLayout, ScrollDirective};

const CELL_W: f32 = 40.0;
const CELL_H: f32 = 60.0;

/// A 51-row grid of 357 days (the demo size), 7 per row, measured and
/// sized like a phone-ish viewport.
fn app(active: &[usize]) -> AppState {
    let days = (0..357)
        .map(|i| Day::new(i, i + 1, active.contains(&(i as usize))))
        .collect();
    let mut state = AppState::new(
        DayGrid::new(days, 7).unwrap(),
        GestureConfig::default(),
    );
    state.measure_cell(CellLayout::new(CELL_W, CELL_H).unwrap());
    state.resize_viewport(7.0 * CELL_W, 400.0);
    state
}

#[test]
fn scenario_a_drag_two_right_one_down_selects_ten_through_nineteen() {
    let mut state = app(&[]);
    handle_gesture(&mut state, GestureEvent::LongPress { index: 10 });
    handle_gesture(
        &mut state,
        GestureEvent::Move {
            x: 2.0 * CELL_W,
            y: CELL_H,
        },
    );

    for i in 0..30 {
        assert_eq!(
            state.selection.is_selected(i),
            (10..=19).contains(&i),
            "index {i}"
        );
    }
}

#[test]
fn scenario_b_deselect_pass_emits_the_ordered_range() {
    let mut state = app(&[5]);
    assert_eq!(
        handle_gesture(&mut state, GestureEvent::LongPress { index: 5 }),
        Some(GestureOutput::HapticPulse)
    );
    handle_gesture(
        &mut state,
        GestureEvent::Move {
            x: 3.0 * CELL_W,
            y: 0.0,
        },
    );
    let out = handle_gesture(&mut state, GestureEvent::Release);
    assert_eq!(
        out,
        Some(GestureOutput::MultiSelectionEnd {
            mode: SelectionMode::Deselect,
            indices: vec![5, 6, 7, 8],
        })
    );
}

#[test]
fn scenario_c_down_request_clamps_to_max_offset() {
    let mut state = app(&[]);
    handle_scroll_notification(&mut state, 990.0, Some(1000.0));
    state.scroll.set_directive(ScrollDirective::Down);
    assert_eq!(tick_auto_scroll(&state), Some(1000.0));
}

#[test]
fn scenario_d_plain_tap_leaves_the_selection_machine_idle() {
    let mut state = app(&[]);
    let out = handle_gesture(&mut state, GestureEvent::Tap { index: 3 });
    assert_eq!(out, Some(GestureOutput::SingleCellToggle(3)));
    assert!(!state.selection.in_progress());
    assert!(!state.selection.is_selected(3));
    assert!(!state.selection.is_deselected(3));
}

#[test]
fn full_gesture_applies_the_committed_range_to_the_days() {
    let mut state = app(&[]);
    handle_gesture(&mut state, GestureEvent::LongPress { index: 14 });
    handle_gesture(
        &mut state,
        GestureEvent::Move {
            x: 0.0,
            y: 2.0 * CELL_H,
        },
    );
    let Some(GestureOutput::MultiSelectionEnd { mode, indices }) =
        handle_gesture(&mut state, GestureEvent::Release)
    else {
        panic!("drag should commit");
    };
    let (first, last) = (indices[0], *indices.last().unwrap());
    state.days.apply_selection(mode, first..=last);

    for i in 0..40 {
        assert_eq!(state.days.is_active(i), (14..=28).contains(&i), "index {i}");
    }
}

#[test]
fn terminate_commits_exactly_like_release() {
    let mut state = app(&[]);
    handle_gesture(&mut state, GestureEvent::LongPress { index: 0 });
    handle_gesture(&mut state, GestureEvent::Move { x: CELL_W, y: 0.0 });
    let out = handle_gesture(&mut state, GestureEvent::Terminate);
    assert_eq!(
        out,
        Some(GestureOutput::MultiSelectionEnd {
            mode: SelectionMode::Select,
            indices: vec![0, 1],
        })
    );
    assert!(!state.selection.in_progress());
    assert_eq!(state.scroll.directive(), ScrollDirective::None);
}

#[test]
fn anchor_relative_framing_survives_an_auto_scroll() {
    // The drag coordinates are measured from the anchor cell's origin, so
    // a scroll underneath the pointer must not change the mapping: the
    // same (x, y) keeps selecting the same range even after the viewport
    // offset moves. This is deliberate original behavior; do not "fix" it
    // to viewport-absolute framing.
    let mut state = app(&[]);
    handle_gesture(&mut state, GestureEvent::LongPress { index: 10 });
    handle_gesture(
        &mut state,
        GestureEvent::Move {
            x: 2.0 * CELL_W,
            y: CELL_H,
        },
    );
    let before = state.selection.clone();

    // Viewport scrolls 120 units while the pointer stays put.
    handle_scroll_notification(&mut state, 120.0, Some(4000.0));
    handle_gesture(
        &mut state,
        GestureEvent::Move {
            x: 2.0 * CELL_W,
            y: CELL_H,
        },
    );
    assert_eq!(state.selection, before);
}

#[test]
fn scroll_offset_feeds_the_directive_not_the_mapping() {
    let mut state = app(&[]);
    handle_gesture(&mut state, GestureEvent::LongPress { index: 10 });

    // Anchor row 1 at content y 60, drag y 320: projected viewport y is
    // 380 with nothing scrolled away (inside the bottom margin), 180 once
    // 200 units are scrolled away (dead band).
    handle_gesture(&mut state, GestureEvent::Move { x: 0.0, y: 320.0 });
    assert_eq!(state.scroll.directive(), ScrollDirective::Down);

    handle_scroll_notification(&mut state, 200.0, Some(4000.0));
    handle_gesture(&mut state, GestureEvent::Move { x: 0.0, y: 320.0 });
    assert_eq!(state.scroll.directive(), ScrollDirective::None);
}

#[test]
fn auto_scroll_walks_in_steps_and_stops_at_the_bottom() {
    let mut state = app(&[]);
    handle_scroll_notification(&mut state, 975.0, Some(1000.0));
    state.scroll.set_directive(ScrollDirective::Down);

    let mut offsets = Vec::new();
    for _ in 0..5 {
        match tick_auto_scroll(&state) {
            Some(requested) => {
                offsets.push(requested);
                let max = state.scroll.max_offset();
                handle_scroll_notification(&mut state, requested, max);
            }
            None => break,
        }
    }
    assert_eq!(offsets, vec![985.0, 995.0, 1000.0, 1000.0, 1000.0]);
}

#[test]
fn manual_scroll_is_locked_out_for_the_whole_drag() {
    let mut state = app(&[]);
    assert!(manual_scroll_enabled(&state));

    handle_gesture(&mut state, GestureEvent::LongPress { index: 10 });
    assert!(!manual_scroll_enabled(&state));

    handle_gesture(&mut state, GestureEvent::Move { x: 0.0, y: 100.0 });
    assert!(!manual_scroll_enabled(&state));

    handle_gesture(&mut state, GestureEvent::Release);
    assert!(manual_scroll_enabled(&state));
}

#[test]
fn moves_before_any_long_press_change_nothing() {
    let mut state = app(&[]);
    handle_gesture(&mut state, GestureEvent::Move { x: 100.0, y: 380.0 });
    assert!(!state.selection.in_progress());
    assert_eq!(state.scroll.directive(), ScrollDirective::None);
    assert_eq!(handle_gesture(&mut state, GestureEvent::Release), None);
}

#[test]
fn out_of_bounds_anchor_never_starts_a_gesture() {
    let mut state = app(&[]);
    assert_eq!(
        handle_gesture(&mut state, GestureEvent::LongPress { index: 357 }),
        None
    );
    assert!(!state.selection.in_progress());
    assert_eq!(handle_gesture(&mut state, GestureEvent::Release), None);
}

#[test]
fn drag_far_past_the_last_cell_clamps_to_the_end() {
    let mut state = app(&[]);
    handle_gesture(&mut state, GestureEvent::LongPress { index: 350 });
    handle_gesture(
        &mut state,
        GestureEvent::Move {
            x: 0.0,
            y: 100.0 * CELL_H,
        },
    );
    let out = handle_gesture(&mut state, GestureEvent::Release);
    let Some(GestureOutput::MultiSelectionEnd { indices, .. }) = out else {
        panic!("drag should commit");
    };
    assert_eq!(indices, (350..=356).collect::<Vec<_>>());
}
