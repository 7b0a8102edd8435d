use super::*;

#[test]
fn default_has_no_file_and_no_highlight() {
    let state = UploadState::default();
    assert!(!state.has_file());
    assert!(!state.drag_active);
    assert_eq!(state.drop_zone_class(), "drop-zone");
}

#[test]
fn accept_records_summary() {
    let mut state = UploadState::default();
    state.accept("notes.pdf", "2.0 KB");
    assert_eq!(
        state.selected,
        Some(FileSummary { name: "notes.pdf".to_owned(), size_label: "2.0 KB".to_owned() })
    );
}

#[test]
fn reject_clears_previous_selection() {
    let mut state = UploadState::default();
    state.accept("notes.pdf", "2.0 KB");
    state.reject();
    assert!(!state.has_file());
}

#[test]
fn drag_over_and_leave_toggle_highlight_class() {
    let mut state = UploadState::default();
    state.drag_over();
    assert_eq!(state.drop_zone_class(), "drop-zone drag-over");
    state.drag_leave();
    assert_eq!(state.drop_zone_class(), "drop-zone");
}

#[test]
fn display_style_hides_until_shown() {
    assert_eq!(display_style(false, "block"), "display: none");
    assert_eq!(display_style(true, "block"), "display: block");
    assert_eq!(display_style(true, "inline-block"), "display: inline-block");
}

#[test]
fn selected_name_tracks_accept_and_reject() {
    let mut state = UploadState::default();
    assert_eq!(state.selected_name(), None);
    state.accept("notes.pdf", "2.0 KB");
    assert_eq!(state.selected_name(), Some("notes.pdf"));
    state.reject();
    assert_eq!(state.selected_name(), None);
}
