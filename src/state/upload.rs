//! Upload form state: accepted file summary and drop-zone highlight.
//!
//! DESIGN
//! ======
//! The page renders `fileName`, `fileSize`, `.file-info` and `uploadBtn` from
//! this struct, so "reveal the file-info panel" is just `selected` becoming
//! `Some`.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::consts::DRAG_OVER_CLASS;

/// Display data for an accepted file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSummary {
    pub name: String,
    pub size_label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub selected: Option<FileSummary>,
    pub drag_active: bool,
}

impl UploadState {
    pub fn accept(&mut self, name: &str, size_label: &str) {
        self.selected = Some(FileSummary { name: name.to_owned(), size_label: size_label.to_owned() });
    }

    pub fn reject(&mut self) {
        self.selected = None;
    }

    pub fn drag_over(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    pub fn has_file(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_ref().map(|f| f.name.as_str())
    }

    pub fn drop_zone_class(&self) -> String {
        if self.drag_active {
            format!("drop-zone {DRAG_OVER_CLASS}")
        } else {
            "drop-zone".to_owned()
        }
    }
}

/// Inline `display` value for elements shown only once a file is accepted.
pub fn display_style(shown: bool, display: &str) -> String {
    if shown {
        format!("display: {display}")
    } else {
        "display: none".to_owned()
    }
}
