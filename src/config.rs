//! Page-level tunables for toasts, progress, and upload validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `UiConfig` through Leptos context. Components read it
//! with [`current`], which falls back to defaults when rendered outside `App`
//! (isolated component tests, embedding in another shell).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::use_context;

use crate::consts::{
    ALLOWED_UPLOAD_TYPES, MAX_UPLOAD_BYTES, PROGRESS_STEP, PROGRESS_TICK_MS, TOAST_DURATION_MS, TOAST_EXIT_MS,
};

/// Acceptance rules for a single uploaded file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadRules {
    pub allowed_types: Vec<String>,
    /// Inclusive upper bound in bytes.
    pub max_bytes: u64,
}

impl Default for UploadRules {
    fn default() -> Self {
        Self {
            allowed_types: ALLOWED_UPLOAD_TYPES.iter().map(|t| (*t).to_owned()).collect(),
            max_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl UploadRules {
    pub fn allows_type(&self, mime: &str) -> bool {
        self.allowed_types.iter().any(|t| t == mime)
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept_attr(&self) -> String {
        self.allowed_types.join(",")
    }
}

/// UI timing and validation settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    pub toast_duration_ms: u32,
    pub toast_exit_ms: u32,
    pub progress_tick_ms: u32,
    pub progress_step: u8,
    pub upload: UploadRules,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: TOAST_DURATION_MS,
            toast_exit_ms: TOAST_EXIT_MS,
            progress_tick_ms: PROGRESS_TICK_MS,
            progress_step: PROGRESS_STEP,
            upload: UploadRules::default(),
        }
    }
}

/// Config from context, or defaults when none was provided.
pub fn current() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}
