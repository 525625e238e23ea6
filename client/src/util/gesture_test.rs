use super::*;

fn at(x: f64, y: f64, t_ms: f64) -> TouchSample {
    TouchSample { x, y, t_ms }
}

#[test]
fn fast_horizontal_moves_are_swipes() {
    assert_eq!(classify(at(10.0, 100.0, 0.0), at(120.0, 110.0, 150.0)), Some(SwipeDirection::Right));
    assert_eq!(classify(at(300.0, 100.0, 0.0), at(180.0, 95.0, 120.0)), Some(SwipeDirection::Left));
}

#[test]
fn short_travel_is_ignored() {
    assert_eq!(classify(at(0.0, 0.0, 0.0), at(29.0, 0.0, 10.0)), None);
}

#[test]
fn vertical_dominant_moves_are_scrolls() {
    assert_eq!(classify(at(0.0, 0.0, 0.0), at(60.0, 80.0, 100.0)), None);
}

#[test]
fn slow_drags_are_ignored() {
    // 100px over 1s is 0.1 px/ms
    assert_eq!(classify(at(0.0, 0.0, 0.0), at(100.0, 0.0, 1_000.0)), None);
}

#[test]
fn zero_elapsed_time_does_not_divide_by_zero() {
    assert_eq!(classify(at(0.0, 0.0, 5.0), at(-50.0, 0.0, 5.0)), Some(SwipeDirection::Left));
}

#[test]
fn tracker_pairs_start_and_end() {
    let mut tracker = SwipeTracker::default();
    assert_eq!(tracker.finish(at(100.0, 0.0, 50.0)), None);
    tracker.begin(at(0.0, 0.0, 0.0));
    assert_eq!(tracker.finish(at(100.0, 0.0, 50.0)), Some(SwipeDirection::Right));
    assert_eq!(tracker.finish(at(200.0, 0.0, 60.0)), None);
}

#[test]
fn tracker_cancel_discards_start() {
    let mut tracker = SwipeTracker::default();
    tracker.begin(at(0.0, 0.0, 0.0));
    tracker.cancel();
    assert_eq!(tracker.finish(at(100.0, 0.0, 50.0)), None);
}
