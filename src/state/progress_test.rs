use super::*;

#[test]
fn default_is_hidden_and_idle() {
    let state = ProgressState::default();
    assert!(!state.visible);
    assert!(!state.running);
    assert_eq!(state.percent, 0);
    assert_eq!(state.step, 10);
}

#[test]
fn start_reveals_and_requests_driver() {
    let mut state = ProgressState::default();
    assert!(state.start());
    assert!(state.visible);
    assert!(state.running);
    assert_eq!(state.percent, 0);
}

#[test]
fn reaches_one_hundred_after_exactly_ten_ticks() {
    let mut state = ProgressState::default();
    state.start();
    for tick in 1..=9_u8 {
        assert!(state.tick(), "tick {tick} should continue");
        assert_eq!(state.percent, tick * 10);
    }
    assert!(!state.tick());
    assert_eq!(state.percent, 100);
    assert!(state.is_complete());
}

#[test]
fn ticks_after_completion_do_not_change_width() {
    let mut state = ProgressState::default();
    state.start();
    while state.tick() {}
    let done = state;
    assert!(!state.tick());
    assert!(!state.tick());
    assert_eq!(state, done);
    assert_eq!(state.width_style(), "width: 100%");
}

#[test]
fn restart_while_running_reuses_existing_driver() {
    let mut state = ProgressState::default();
    assert!(state.start());
    state.tick();
    state.tick();
    assert!(!state.start());
    assert_eq!(state.percent, 0);
    assert!(state.running);
}

#[test]
fn restart_after_completion_needs_new_driver() {
    let mut state = ProgressState::default();
    state.start();
    while state.tick() {}
    assert!(state.start());
    assert_eq!(state.percent, 0);
}

#[test]
fn uneven_step_clamps_at_one_hundred() {
    let mut state = ProgressState::with_step(30);
    state.start();
    assert!(state.tick());
    assert!(state.tick());
    assert!(state.tick());
    assert!(!state.tick());
    assert_eq!(state.percent, 100);
}

#[test]
fn zero_step_is_raised_to_one() {
    assert_eq!(ProgressState::with_step(0).step, 1);
}

#[test]
fn idle_tick_is_noop() {
    let mut state = ProgressState::default();
    assert!(!state.tick());
    assert_eq!(state.percent, 0);
}
