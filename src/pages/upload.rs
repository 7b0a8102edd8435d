//! Study-material upload page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wires the drop zone, file input, file-info panel and progress bar to the
//! upload helpers. Element ids (`fileName`, `fileSize`, `uploadBtn`,
//! `progressBar`) and classes (`.file-info`, `.progress-container`) are the
//! hooks the stylesheet targets.
//!
//! The progress bar is simulated: it advances on a timer and does not reflect
//! bytes sent.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::html::Input;
use leptos::prelude::*;

use crate::components::upload_help_dialog::UploadHelpDialog;
use crate::config::{self, UploadRules};
use crate::consts::UPLOAD_BUTTON_ID;
use crate::state::announcer::Announcer;
use crate::state::notifier::Notifier;
use crate::state::progress::ProgressState;
use crate::state::toast::ToastKind;
use crate::state::upload::{FileSummary, UploadState, display_style};
use crate::util::loading::set_loading;

/// Screen-reader text after a file passes validation.
pub fn selection_announcement(file: &FileSummary) -> String {
    format!("Selected {}, {}", file.name, file.size_label)
}

/// Toast and screen-reader text once the simulated upload finishes.
pub fn completion_message(file_name: Option<&str>) -> String {
    match file_name {
        Some(name) => format!("Upload complete: {name}"),
        None => "Upload complete".to_owned(),
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let config = config::current();
    let notifier = expect_context::<Notifier>();
    let announcer = expect_context::<Announcer>();

    let upload = RwSignal::new(UploadState::default());
    let progress = RwSignal::new(ProgressState::with_step(config.progress_step));
    let show_help = RwSignal::new(false);
    let input_ref = NodeRef::<Input>::new();
    let accept = config.upload.accept_attr();
    let rules = StoredValue::new(config.upload);
    let tick_ms = config.progress_tick_ms;

    let after_validation = move |accepted: bool| {
        if !accepted {
            return;
        }
        if let Some(file) = upload.with_untracked(|u| u.selected.clone()) {
            announcer.announce(selection_announcement(&file));
        }
    };

    let on_change = move |_| {
        let accepted = rules.with_value(|r| validate_input(input_ref, upload, notifier, r));
        after_validation(accepted);
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(UploadState::drag_over);
    };
    let on_drag_leave = move |_| upload.update(UploadState::drag_leave);
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(UploadState::drag_leave);
        if forward_drop(&ev, input_ref) {
            let accepted = rules.with_value(|r| validate_input(input_ref, upload, notifier, r));
            after_validation(accepted);
        }
    };

    let on_upload = move |_| {
        if !upload.with_untracked(UploadState::has_file) {
            return;
        }
        let needs_driver = progress.try_update(ProgressState::start).unwrap_or(false);
        set_loading(UPLOAD_BUTTON_ID, true);
        announcer.announce("Upload started");
        if needs_driver {
            drive_progress(progress, tick_ms, move || {
                set_loading(UPLOAD_BUTTON_ID, false);
                // The selection may have changed while the run was in flight.
                let message = upload
                    .try_with_untracked(|u| completion_message(u.selected_name()))
                    .unwrap_or_else(|| completion_message(None));
                notifier.show(message.clone(), ToastKind::Success);
                announcer.announce(message);
            });
        }
    };

    let has_file = move || upload.with(UploadState::has_file);
    let file_name = move || upload.with(|u| u.selected.as_ref().map(|f| f.name.clone()).unwrap_or_default());
    let file_size = move || upload.with(|u| u.selected.as_ref().map(|f| f.size_label.clone()).unwrap_or_default());

    view! {
        <section class="upload-page">
            <header class="upload-page__header">
                <h1>"Upload study material"</h1>
                <button class="upload-page__help" on:click=move |_| show_help.set(true)>
                    "Help"
                </button>
            </header>

            <div
                class=move || upload.with(UploadState::drop_zone_class)
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <p>"Drag and drop a PDF here, or"</p>
                <label class="btn" for="fileInput">"Browse"</label>
                <input
                    id="fileInput"
                    class="file-input"
                    type="file"
                    accept=accept
                    node_ref=input_ref
                    on:change=on_change
                />
            </div>

            <div class="file-info" style=move || display_style(has_file(), "block")>
                <span id="fileName" class="file-info__name">{file_name}</span>
                <span id="fileSize" class="file-info__size">{file_size}</span>
            </div>

            <button
                id=UPLOAD_BUTTON_ID
                class="btn btn--primary"
                style=move || display_style(has_file(), "inline-block")
                on:click=on_upload
            >
                "Upload"
            </button>

            <div class="progress-container" style=move || display_style(progress.with(|p| p.visible), "block")>
                <div
                    id="progressBar"
                    class="progress-bar"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=move || progress.with(|p| p.percent.to_string())
                    style=move || progress.with(ProgressState::width_style)
                ></div>
            </div>

            <Show when=move || show_help.get()>
                <UploadHelpDialog on_close=Callback::new(move |()| show_help.set(false)) />
            </Show>
        </section>
    }
}

#[cfg(feature = "hydrate")]
fn validate_input(
    input_ref: NodeRef<Input>,
    upload: RwSignal<UploadState>,
    notifier: Notifier,
    rules: &UploadRules,
) -> bool {
    input_ref
        .get_untracked()
        .is_some_and(|input| crate::util::upload::validate_file(&input, &upload, &notifier, rules))
}

#[cfg(not(feature = "hydrate"))]
fn validate_input(
    _input_ref: NodeRef<Input>,
    _upload: RwSignal<UploadState>,
    _notifier: Notifier,
    _rules: &UploadRules,
) -> bool {
    false
}

#[cfg(feature = "hydrate")]
fn forward_drop(ev: &leptos::ev::DragEvent, input_ref: NodeRef<Input>) -> bool {
    let input = input_ref.get_untracked();
    crate::util::drag_drop::handle_drop(ev, input.as_ref())
}

#[cfg(not(feature = "hydrate"))]
fn forward_drop(_ev: &leptos::ev::DragEvent, _input_ref: NodeRef<Input>) -> bool {
    false
}

/// Tick `progress` every `tick_ms` until it completes, then run `on_done`.
/// Stops quietly if the page is torn down first.
#[cfg(feature = "hydrate")]
fn drive_progress(progress: RwSignal<ProgressState>, tick_ms: u32, on_done: impl FnOnce() + 'static) {
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(tick_ms))).await;
            match progress.try_update(ProgressState::tick) {
                Some(true) => {}
                Some(false) => break,
                None => return,
            }
        }
        leptos::logging::log!("simulated upload finished");
        on_done();
    });
}

#[cfg(not(feature = "hydrate"))]
fn drive_progress(_progress: RwSignal<ProgressState>, _tick_ms: u32, _on_done: impl FnOnce() + 'static) {}
