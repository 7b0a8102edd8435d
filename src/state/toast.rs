//! Toast notification stack.
//!
//! DESIGN
//! ======
//! Timers address toasts by id and never compare clocks. The browser fires
//! [`ToastStep::BeginExit`] then [`ToastStep::Remove`] for each toast; both
//! steps are no-ops once the toast is gone, so a timer that outlives a manual
//! close finds nothing to do.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Monotonic identifier assigned by [`ToastStack::push`].
pub type ToastId = u64;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Parse a kind name. Unknown names degrade to [`ToastKind::Info`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

/// Timer-driven transition applied to one toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastStep {
    BeginExit,
    Remove,
}

/// Delays, measured from `push`, at which each step fires. The toast is gone
/// from the stack by `duration_ms + exit_ms`.
pub fn toast_timeline(duration_ms: u32, exit_ms: u32) -> [(u32, ToastStep); 2] {
    [
        (duration_ms, ToastStep::BeginExit),
        (duration_ms.saturating_add(exit_ms), ToastStep::Remove),
    ]
}

/// Lifecycle phase of a mounted toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    #[default]
    Visible,
    /// Exit transition running; removal follows.
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub phase: ToastPhase,
}

impl Toast {
    /// CSS classes for the toast element.
    pub fn class(&self) -> String {
        match self.phase {
            ToastPhase::Visible => format!("toast toast-{}", self.kind.name()),
            ToastPhase::Leaving => format!("toast toast-{} toast--leaving", self.kind.name()),
        }
    }
}

/// Ordered toasts currently in the container, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastStack {
    items: Vec<Toast>,
    next_id: ToastId,
}

impl ToastStack {
    /// Append a visible toast.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into(), phase: ToastPhase::Visible });
        id
    }

    /// Start the exit transition. Returns `false` if the toast is gone or
    /// already leaving.
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase == ToastPhase::Visible => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Remove a toast right away. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    /// Apply a timer step to `id`. Returns whether anything changed.
    pub fn apply(&mut self, id: ToastId, step: ToastStep) -> bool {
        match step {
            ToastStep::BeginExit => self.begin_exit(id),
            ToastStep::Remove => self.dismiss(id),
        }
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
