use super::*;

const DWELL: Duration = Duration::from_millis(500);

fn start() -> (PressTracker, Instant) {
    (PressTracker::new(), Instant::now())
}

#[test]
fn stationary_press_becomes_long_press_after_dwell() {
    let (mut t, t0) = start();
    t.press(10, 100.0, 100.0, t0);
    assert_eq!(t.poll(t0 + Duration::from_millis(499), DWELL), None);
    assert_eq!(
        t.poll(t0 + DWELL, DWELL),
        Some(GestureEvent::LongPress { index: 10 })
    );
    assert!(t.is_held());
}

#[test]
fn long_press_fires_only_once() {
    let (mut t, t0) = start();
    t.press(10, 0.0, 0.0, t0);
    assert!(t.poll(t0 + DWELL, DWELL).is_some());
    assert_eq!(t.poll(t0 + DWELL * 2, DWELL), None);
}

#[test]
fn early_release_degenerates_to_tap() {
    let (mut t, t0) = start();
    t.press(4, 0.0, 0.0, t0);
    assert_eq!(t.release(), Some(GestureEvent::Tap { index: 4 }));
    assert!(!t.is_held());
    // Press fully resolved: nothing further.
    assert_eq!(t.release(), None);
}

#[test]
fn early_movement_cancels_the_dwell_but_still_taps_on_release() {
    let (mut t, t0) = start();
    t.press(4, 100.0, 100.0, t0);
    assert!(!t.pointer_moved(110.0, 100.0));
    // Dwell never fires once cancelled, no matter how long the hold.
    assert_eq!(t.poll(t0 + DWELL * 10, DWELL), None);
    assert_eq!(t.release(), Some(GestureEvent::Tap { index: 4 }));
}

#[test]
fn movement_within_slop_keeps_the_dwell_alive() {
    let (mut t, t0) = start();
    t.press(4, 100.0, 100.0, t0);
    assert!(!t.pointer_moved(101.5, 99.0));
    assert_eq!(
        t.poll(t0 + DWELL, DWELL),
        Some(GestureEvent::LongPress { index: 4 })
    );
}

#[test]
fn held_moves_are_forwarded_and_release_ends_the_drag() {
    let (mut t, t0) = start();
    t.press(7, 0.0, 0.0, t0);
    t.poll(t0 + DWELL, DWELL);
    assert!(t.pointer_moved(50.0, 80.0));
    assert_eq!(t.release(), Some(GestureEvent::Release));
    assert!(!t.is_held());
}

#[test]
fn cancel_terminates_an_active_drag() {
    let (mut t, t0) = start();
    t.press(7, 0.0, 0.0, t0);
    t.poll(t0 + DWELL, DWELL);
    assert_eq!(t.cancel(), Some(GestureEvent::Terminate));
    assert!(!t.is_held());
}

#[test]
fn cancel_of_a_pending_press_emits_nothing() {
    let (mut t, t0) = start();
    t.press(7, 0.0, 0.0, t0);
    assert_eq!(t.cancel(), None);
    // The swallowed press must not tap on a later release.
    assert_eq!(t.release(), None);
}

#[test]
fn press_while_in_flight_is_ignored() {
    let (mut t, t0) = start();
    t.press(1, 0.0, 0.0, t0);
    t.press(2, 50.0, 50.0, t0 + Duration::from_millis(100));
    assert_eq!(
        t.poll(t0 + DWELL, DWELL),
        Some(GestureEvent::LongPress { index: 1 })
    );
}

#[test]
fn moves_while_idle_are_ignored() {
    let (mut t, _) = start();
    assert!(!t.pointer_moved(10.0, 10.0));
    assert_eq!(t.release(), None);
}
