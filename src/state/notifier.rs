//! Owned handle to the page's notification surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `Notifier` and provides it through context; `ToastHost`
//! renders its stack inside the single `.toast-container`. Anything that needs
//! to tell the user something takes the handle from context instead of
//! looking the container up in the DOM.

#[cfg(test)]
#[path = "notifier_test.rs"]
mod notifier_test;

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::state::toast::{ToastId, ToastKind, ToastStack};

/// Copyable handle shared through Leptos context.
#[derive(Clone, Copy)]
pub struct Notifier {
    stack: RwSignal<ToastStack>,
    duration_ms: u32,
    exit_ms: u32,
}

/// Reference to one shown toast.
#[derive(Clone, Copy)]
pub struct ToastHandle {
    id: ToastId,
    notifier: Notifier,
}

impl ToastHandle {
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Close the toast now. Safe to call after it already expired.
    pub fn dismiss(&self) {
        self.notifier.dismiss(self.id);
    }
}

impl Notifier {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            stack: RwSignal::new(ToastStack::default()),
            duration_ms: config.toast_duration_ms,
            exit_ms: config.toast_exit_ms,
        }
    }

    /// Reactive stack rendered by `ToastHost`.
    pub fn stack(&self) -> RwSignal<ToastStack> {
        self.stack
    }

    pub fn default_duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Show a toast for the configured default duration.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> ToastHandle {
        self.show_for(message, kind, self.duration_ms)
    }

    /// Show a toast that starts its exit transition after `duration_ms`.
    pub fn show_for(&self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> ToastHandle {
        let id = self.stack.try_update(|s| s.push(message, kind)).unwrap_or_default();
        schedule_steps(self.stack, id, duration_ms, self.exit_ms);
        ToastHandle { id, notifier: *self }
    }

    pub fn dismiss(&self, id: ToastId) {
        self.stack.try_update(|s| s.dismiss(id));
    }
}

/// Fire each timeline step against `id`; steps are no-ops once it is gone.
#[cfg(feature = "hydrate")]
fn schedule_steps(stack: RwSignal<ToastStack>, id: ToastId, duration_ms: u32, exit_ms: u32) {
    use gloo_timers::callback::Timeout;

    use crate::state::toast::toast_timeline;

    for (delay, step) in toast_timeline(duration_ms, exit_ms) {
        Timeout::new(delay, move || {
            stack.try_update(|s| s.apply(id, step));
        })
        .forget();
    }
}

#[cfg(not(feature = "hydrate"))]
fn schedule_steps(_stack: RwSignal<ToastStack>, _id: ToastId, _duration_ms: u32, _exit_ms: u32) {}
