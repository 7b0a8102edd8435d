//! Modal explaining what the upload form accepts.
//!
//! Keyboard focus stays inside the dialog while it is open; Escape or a
//! backdrop click closes it.

use leptos::prelude::*;

use crate::config;
use crate::util::upload::format_size;

/// Help dialog listing accepted file types and the size limit.
#[component]
pub fn UploadHelpDialog(on_close: Callback<()>) -> impl IntoView {
    let rules = config::current().upload;
    let types = rules.allowed_types.join(", ");
    let limit = format_size(rules.max_bytes);
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            crate::util::focus_trap::focus_first(&dialog);
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(dialog) = dialog_ref.get_untracked() {
                crate::util::focus_trap::trap_focus_keydown(&dialog, &ev);
            }
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--upload-help"
                role="dialog"
                aria-modal="true"
                aria-labelledby="upload-help-title"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="dialog__header">
                    <h2 id="upload-help-title">"Uploading material"</h2>
                    <button class="dialog__close" aria-label="Close help" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <ul class="dialog__list">
                    <li>"Accepted types: " {types}</li>
                    <li>"Maximum size: " {limit}</li>
                    <li>"One file at a time. Drop it on the upload area or use Browse."</li>
                </ul>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Got it"
                    </button>
                </div>
            </div>
        </div>
    }
}
