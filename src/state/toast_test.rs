use super::*;

// =============================================================
// ToastKind
// =============================================================

#[test]
fn known_kind_names_parse() {
    assert_eq!(ToastKind::from_name("success"), ToastKind::Success);
    assert_eq!(ToastKind::from_name("error"), ToastKind::Error);
    assert_eq!(ToastKind::from_name("warning"), ToastKind::Warning);
    assert_eq!(ToastKind::from_name("info"), ToastKind::Info);
}

#[test]
fn unknown_kinds_fall_back_to_info_icon_and_title() {
    for name in ["", "notice", "SUCCESS", "danger", "ℹ"] {
        let kind = ToastKind::from_name(name);
        assert_eq!(kind.icon(), "ℹ", "kind {name:?}");
        assert_eq!(kind.title(), "Info", "kind {name:?}");
    }
}

#[test]
fn icon_and_title_lookup_table() {
    let table = [
        (ToastKind::Success, "✓", "Success"),
        (ToastKind::Error, "✕", "Error"),
        (ToastKind::Warning, "⚠", "Warning"),
        (ToastKind::Info, "ℹ", "Info"),
    ];
    for (kind, icon, title) in table {
        assert_eq!(kind.icon(), icon);
        assert_eq!(kind.title(), title);
        assert_eq!(ToastKind::from_name(kind.name()), kind);
    }
}

#[test]
fn default_kind_is_info() {
    assert_eq!(ToastKind::default(), ToastKind::Info);
}

// =============================================================
// ToastStack lifecycle
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut stack = ToastStack::default();
    let a = stack.push("a", ToastKind::Info);
    let b = stack.push("b", ToastKind::Error);
    assert!(b > a);
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.items()[0].message, "a");
    assert_eq!(stack.get(a).map(|t| t.phase), Some(ToastPhase::Visible));
}

#[test]
fn timeline_removes_by_duration_plus_exit() {
    assert_eq!(
        toast_timeline(5_000, 300),
        [(5_000, ToastStep::BeginExit), (5_300, ToastStep::Remove)]
    );
    assert_eq!(toast_timeline(u32::MAX, 300)[1].0, u32::MAX);
}

#[test]
fn timeline_steps_leave_then_remove() {
    let mut stack = ToastStack::default();
    let id = stack.push("saved", ToastKind::Success);
    let [(_, first), (_, second)] = toast_timeline(5_000, 300);

    assert!(stack.apply(id, first));
    assert_eq!(stack.get(id).map(|t| t.phase), Some(ToastPhase::Leaving));

    assert!(stack.apply(id, second));
    assert!(stack.get(id).is_none());
    assert!(stack.is_empty());
}

#[test]
fn removal_does_not_depend_on_clock_reading() {
    // Timers that fire with the wall clock a millisecond behind still remove
    // the toast: steps address the toast by id only.
    let mut stack = ToastStack::default();
    let id = stack.push("saved", ToastKind::Success);
    for (_, step) in toast_timeline(5_000, 300) {
        stack.apply(id, step);
    }
    assert!(stack.get(id).is_none());
}

#[test]
fn remove_step_alone_removes_visible_toast() {
    let mut stack = ToastStack::default();
    let id = stack.push("x", ToastKind::Info);
    assert!(stack.apply(id, ToastStep::Remove));
    assert!(stack.is_empty());
}

#[test]
fn begin_exit_twice_is_noop() {
    let mut stack = ToastStack::default();
    let id = stack.push("x", ToastKind::Info);
    assert!(stack.begin_exit(id));
    assert!(!stack.begin_exit(id));
    assert_eq!(stack.get(id).map(|t| t.phase), Some(ToastPhase::Leaving));
}

#[test]
fn manual_dismiss_removes_immediately_and_later_steps_are_noops() {
    let mut stack = ToastStack::default();
    let id = stack.push("bye", ToastKind::Warning);
    assert!(stack.dismiss(id));
    assert!(stack.get(id).is_none());

    assert!(!stack.dismiss(id));
    assert!(!stack.apply(id, ToastStep::BeginExit));
    assert!(!stack.apply(id, ToastStep::Remove));
    assert!(stack.is_empty());
}

#[test]
fn steps_only_touch_their_own_toast() {
    let mut stack = ToastStack::default();
    let old = stack.push("old", ToastKind::Info);
    let new = stack.push("new", ToastKind::Info);
    stack.apply(old, ToastStep::BeginExit);
    stack.apply(old, ToastStep::Remove);
    assert!(stack.get(old).is_none());
    assert_eq!(stack.get(new).map(|t| t.phase), Some(ToastPhase::Visible));
}

#[test]
fn class_reflects_kind_and_phase() {
    let mut stack = ToastStack::default();
    let id = stack.push("m", ToastKind::Error);
    assert_eq!(stack.get(id).map(Toast::class).as_deref(), Some("toast toast-error"));
    stack.begin_exit(id);
    assert_eq!(
        stack.get(id).map(Toast::class).as_deref(),
        Some("toast toast-error toast--leaving")
    );
}
