//! # studysync-ui
//!
//! Leptos + WASM helpers for the StudySync upload page: toast notifications,
//! busy-state toggling, a dialog focus trap, screen-reader announcements, and
//! single-file upload validation with drag-and-drop and a simulated progress
//! bar.
//!
//! Browser behavior is compiled behind the `hydrate` feature. Without it the
//! DOM touchpoints are no-ops and the decision logic in [`state`] and
//! [`util`] runs natively under `cargo test`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component; owns the toast and announcer singletons |
//! | [`pages`] | The upload page |
//! | [`components`] | Toast container, live region, help dialog |
//! | [`state`] | Toast stack, announcer, progress, upload form state |
//! | [`util`] | Validation, focus trap, loading toggle, drop handling |
//! | [`config`] | `UiConfig` and `UploadRules` |
//! | [`error`] | User-facing validation errors |

pub mod app;
pub mod components;
pub mod config;
pub mod consts;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    log::info!("hydrating studysync-ui");
    leptos::mount::hydrate_body(app::App);
}
