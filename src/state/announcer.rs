//! Screen-reader announcement state.
//!
//! The live region itself is rendered once by `AnnouncerRegion`; this module
//! only holds what it should say. Assistive technology may skip a message
//! identical to the one already in the region. That is live-region behavior
//! of the host and is not worked around here.

#[cfg(test)]
#[path = "announcer_test.rs"]
mod announcer_test;

use leptos::prelude::*;

/// Current live-region content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnouncerState {
    pub message: String,
    /// Bumped on every announcement, including repeats.
    pub seq: u64,
}

impl AnnouncerState {
    pub fn announce(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.seq += 1;
    }
}

/// Copyable handle provided through context by `App`.
#[derive(Clone, Copy)]
pub struct Announcer {
    state: RwSignal<AnnouncerState>,
}

impl Default for Announcer {
    fn default() -> Self {
        Self::new()
    }
}

impl Announcer {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AnnouncerState::default()) }
    }

    pub fn state(&self) -> RwSignal<AnnouncerState> {
        self.state
    }

    /// Replace the live-region text so assistive technology reads it aloud.
    pub fn announce(&self, message: impl Into<String>) {
        let message = message.into();
        self.state.try_update(|s| s.announce(message));
    }
}
