//! Drop-zone event handling.
//!
//! The page cancels the browser default for `dragover` and `drop` (which
//! would navigate to the dropped file) and hands the dropped list to its file
//! input, which is then validated like a normal pick.

#[cfg(test)]
#[path = "drag_drop_test.rs"]
mod drag_drop_test;

/// A drop is forwarded only when it carries files and the page has an input.
pub fn should_forward_drop(file_count: u32, has_input: bool) -> bool {
    file_count > 0 && has_input
}

/// Move the dropped files onto `input`.
///
/// Returns `true` when `input` now holds the dropped files and should be
/// validated.
#[cfg(feature = "hydrate")]
pub fn handle_drop(ev: &web_sys::DragEvent, input: Option<&web_sys::HtmlInputElement>) -> bool {
    let files = ev.data_transfer().and_then(|dt| dt.files());
    let count = files.as_ref().map_or(0, web_sys::FileList::length);
    if !should_forward_drop(count, input.is_some()) {
        return false;
    }
    let (Some(files), Some(input)) = (files, input) else {
        return false;
    };
    input.set_files(Some(&files));
    true
}
