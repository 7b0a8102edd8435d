//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and read shared handles (`Notifier`,
//! `Announcer`, `UiConfig`) from Leptos context providers.

pub mod announcer_region;
pub mod toast_host;
pub mod upload_help_dialog;
