//! The page's single toast container.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by `App`; renders whatever the context `Notifier` holds.
//! Close buttons are wired with `on:click` listeners, and message text is
//! rendered as text, never parsed as markup.

use leptos::prelude::*;

use crate::state::notifier::Notifier;
use crate::state::toast::Toast;

/// Container for all toasts, oldest on top.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let stack = notifier.stack();

    view! {
        <div class="toast-container">
            <For
                each=move || stack.with(|s| s.items().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = move || stack.with(|s| s.get(id).map(Toast::class)).unwrap_or_default();
                    view! {
                        <div class=class role="alert" aria-live="polite">
                            <div class="toast-icon">{toast.kind.icon()}</div>
                            <div class="toast-content">
                                <div class="toast-title">{toast.kind.title()}</div>
                                <div class="toast-message">{toast.message}</div>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Close notification"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
