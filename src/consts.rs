//! Shared constants for the upload page helpers.

// ── Toasts ──────────────────────────────────────────────────────

/// How long a toast stays fully visible before its exit transition starts.
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Length of the slide-out transition; matches the `slideOut` CSS animation.
pub const TOAST_EXIT_MS: u32 = 300;

// ── Upload ──────────────────────────────────────────────────────

/// Largest accepted upload, inclusive.
pub const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// MIME types the upload form accepts.
pub const ALLOWED_UPLOAD_TYPES: &[&str] = &["application/pdf"];

// ── Progress ────────────────────────────────────────────────────

/// Interval between simulated progress ticks.
pub const PROGRESS_TICK_MS: u32 = 200;

/// Percentage points added per simulated tick.
pub const PROGRESS_STEP: u8 = 10;

// ── DOM hooks ───────────────────────────────────────────────────

/// Class added while an element is busy.
pub const LOADING_CLASS: &str = "loading";

/// Class marking the drop zone while a drag hovers over it.
pub const DRAG_OVER_CLASS: &str = "drag-over";

/// Element id of the screen-reader live region.
pub const ANNOUNCER_ID: &str = "sr-announcer";

/// Element id of the upload trigger button.
pub const UPLOAD_BUTTON_ID: &str = "uploadBtn";
