//! Single-file upload validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The upload page calls [`validate_file`] from the file input's `change`
//! listener and again after a drop. The input, the file-info display, and the
//! error channel are traits so the same steps run against the browser and
//! against test fakes.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;

use crate::config::UploadRules;
use crate::error::ValidationError;
use crate::state::notifier::Notifier;
use crate::state::toast::ToastKind;
use crate::state::upload::UploadState;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// The user's chosen file as reported by the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    /// Declared MIME type; empty when the browser could not tell.
    pub mime: String,
}

/// Source of the current selection.
pub trait FileSelection {
    fn selected_file(&self) -> Option<SelectedFile>;
    fn clear_selection(&self);
}

/// Where an accepted file's name and size are shown.
pub trait FileInfoSink {
    fn show_file_info(&self, name: &str, size_label: &str);
    fn clear_file_info(&self);
}

/// Channel that synchronously tells the user a selection was refused.
pub trait UserNotifier {
    fn notify_error(&self, message: &str);
}

/// Human-readable size: bytes below 1 KiB, then one-decimal KB, then MB.
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// Apply the type and size rules, in that order.
pub fn check_file<'a>(
    file: Option<&'a SelectedFile>,
    rules: &UploadRules,
) -> Result<&'a SelectedFile, ValidationError> {
    let file = file.ok_or(ValidationError::NoFile)?;
    if !rules.allows_type(&file.mime) {
        return Err(ValidationError::UnsupportedType { mime: file.mime.clone() });
    }
    if file.size > rules.max_bytes {
        return Err(ValidationError::TooLarge { size: file.size, max: rules.max_bytes });
    }
    Ok(file)
}

/// Validate the input's current file and update the page accordingly.
///
/// Rejected selections are reported through `notifier` and cleared from the
/// input. An empty selection is refused without a message.
pub fn validate_file<I, D, N>(input: &I, display: &D, notifier: &N, rules: &UploadRules) -> bool
where
    I: FileSelection + ?Sized,
    D: FileInfoSink + ?Sized,
    N: UserNotifier + ?Sized,
{
    let selected = input.selected_file();
    match check_file(selected.as_ref(), rules) {
        Ok(file) => {
            display.show_file_info(&file.name, &format_size(file.size));
            true
        }
        Err(err) => {
            if err.is_reportable() {
                notifier.notify_error(&err.to_string());
                input.clear_selection();
            }
            display.clear_file_info();
            false
        }
    }
}

impl FileInfoSink for RwSignal<UploadState> {
    fn show_file_info(&self, name: &str, size_label: &str) {
        self.try_update(|s| s.accept(name, size_label));
    }

    fn clear_file_info(&self) {
        self.try_update(UploadState::reject);
    }
}

impl UserNotifier for Notifier {
    fn notify_error(&self, message: &str) {
        self.show(message, ToastKind::Error);
    }
}

/// Blocking `window.alert`, the page's original error channel.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl UserNotifier for AlertNotifier {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn notify_error(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(err) = window.alert_with_message(message) {
                crate::util::dom::warn_js("alert", &err);
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl FileSelection for web_sys::HtmlInputElement {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn selected_file(&self) -> Option<SelectedFile> {
        let file = self.files()?.get(0)?;
        Some(SelectedFile { name: file.name(), size: file.size() as u64, mime: file.type_() })
    }

    fn clear_selection(&self) {
        self.set_value("");
    }
}
