//! Page state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Plain structs hold every decision (toast timeline, progress ticks, upload
//! acceptance) so they test natively; the `Notifier` and `Announcer` handles
//! wrap them in signals for the components.

pub mod announcer;
pub mod notifier;
pub mod progress;
pub mod toast;
pub mod upload;
