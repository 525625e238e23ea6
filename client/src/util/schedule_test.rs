use super::*;

// =============================================================
// Debounce
// =============================================================

#[test]
fn latest_ticket_takes_value() {
    let mut debounce = Debounce::new(150);
    let ticket = debounce.schedule(800.0);
    assert!(debounce.is_pending());
    assert_eq!(debounce.take(ticket), Some(800.0));
    assert!(!debounce.is_pending());
}

#[test]
fn last_call_wins() {
    let mut debounce = Debounce::new(150);
    let first = debounce.schedule(1_200.0);
    let second = debounce.schedule(640.0);
    assert_eq!(debounce.take(first), None);
    assert_eq!(debounce.take(second), Some(640.0));
}

#[test]
fn ticket_is_single_use() {
    let mut debounce = Debounce::new(150);
    let ticket = debounce.schedule(1);
    assert_eq!(debounce.take(ticket), Some(1));
    assert_eq!(debounce.take(ticket), None);
}

#[test]
fn cancel_invalidates_outstanding_ticket() {
    let mut debounce = Debounce::new(150);
    let ticket = debounce.schedule(1);
    debounce.cancel();
    assert_eq!(debounce.take(ticket), None);
    let next = debounce.schedule(2);
    assert_eq!(debounce.take(next), Some(2));
}

#[test]
fn teardown_refuses_future_work() {
    let mut debounce = Debounce::new(150);
    let ticket = debounce.schedule(1);
    debounce.teardown();
    assert!(debounce.is_torn_down());
    assert_eq!(debounce.take(ticket), None);
    let late = debounce.schedule(2);
    assert!(!debounce.is_pending());
    assert_eq!(debounce.take(late), None);
}

#[test]
fn delay_is_reported() {
    let debounce = Debounce::<()>::new(2_000);
    assert_eq!(debounce.delay_ms(), 2_000);
}

// =============================================================
// TaskGuard
// =============================================================

#[test]
fn guard_starts_alive_and_cancel_is_shared() {
    let guard = TaskGuard::new();
    let task_side = guard.clone();
    assert!(task_side.is_alive());
    guard.cancel();
    assert!(!task_side.is_alive());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn after_never_runs_outside_browser() {
    let ran = std::rc::Rc::new(std::cell::Cell::new(false));
    let flag = ran.clone();
    after(&TaskGuard::new(), 0, move || flag.set(true));
    assert!(!ran.get());
}
