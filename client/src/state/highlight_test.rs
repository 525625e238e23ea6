use super::*;

#[test]
fn flash_starts_dark() {
    let flash = Flash::default();
    assert!(!flash.is_lit());
}

#[test]
fn light_then_expire_with_current_token() {
    let mut flash = Flash::default();
    let token = flash.light();
    assert!(flash.is_lit());
    assert!(flash.expire(token));
    assert!(!flash.is_lit());
}

#[test]
fn stale_timer_does_not_cut_a_later_press_short() {
    let mut flash = Flash::default();
    let first = flash.light();
    let second = flash.light();
    assert!(!flash.expire(first));
    assert!(flash.is_lit());
    assert!(flash.expire(second));
    assert!(!flash.is_lit());
}

#[test]
fn expire_twice_is_a_no_op() {
    let mut flash = Flash::default();
    let token = flash.light();
    assert!(flash.expire(token));
    assert!(!flash.expire(token));
}

#[test]
fn clear_turns_off_without_token() {
    let mut cues = ShellCues::default();
    cues.notifications.light();
    cues.recently.light();
    cues.notifications.clear();
    assert!(!cues.notifications.is_lit());
    assert!(cues.recently.is_lit());
}

#[test]
fn recently_highlight_is_shorter_than_trigger() {
    assert!(RECENTLY_HIGHLIGHT_MS < RECENTLY_TRIGGER_MS);
    assert_eq!(NOTIFICATION_HIGHLIGHT_MS, 2_000);
}
