use super::*;

#[test]
fn default_is_idle_with_three_second_hold() {
    let mut button = ResetButton::default();
    assert!(!button.holding());
    button.press(0.0);
    assert!(!button.poll(2_999.0));
    assert!(button.poll(3_000.0));
}

#[test]
fn press_arms_and_release_disarms() {
    let mut button = ResetButton::default();
    button.press(1_000.0);
    assert!(button.holding());
    button.release();
    assert!(!button.holding());
}

#[test]
fn repeated_press_keeps_first_timestamp() {
    let mut button = ResetButton::default();
    button.press(1_000.0);
    button.press(2_500.0);
    assert!(!button.poll(3_999.0));
    assert!(button.poll(4_000.0));
}

#[test]
fn release_before_threshold_never_fires() {
    let mut button = ResetButton::default();
    button.press(0.0);
    assert!(!button.poll(2_900.0));
    button.release();
    assert!(!button.holding());
    assert!(!button.poll(3_000.0));
    assert!(!button.poll(10_000.0));
}

#[test]
fn hold_for_full_duration_fires() {
    let mut button = ResetButton::default();
    button.press(0.0);
    assert!(button.poll(3_000.0));
}

#[test]
fn fires_only_once_per_hold() {
    let mut button = ResetButton::default();
    button.press(100.0);
    assert!(button.poll(3_200.0));
    assert!(!button.holding());
    assert!(!button.poll(6_400.0));
}

#[test]
fn poll_without_press_is_false() {
    let mut button = ResetButton::default();
    assert!(!button.poll(1e9));
}

#[test]
fn new_hold_after_cancel_restarts_timer() {
    let mut button = ResetButton::default();
    button.press(0.0);
    button.release();
    button.press(2_000.0);
    assert!(!button.poll(4_000.0));
    assert!(button.poll(5_000.0));
}
