//! Simulated upload progress.
//!
//! The percentage is cosmetic: it advances on a fixed timer and is not tied
//! to bytes transferred.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Progress bar state for the upload page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressState {
    pub visible: bool,
    pub percent: u8,
    pub running: bool,
    pub step: u8,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::with_step(crate::consts::PROGRESS_STEP)
    }
}

impl ProgressState {
    pub fn with_step(step: u8) -> Self {
        Self { visible: false, percent: 0, running: false, step: step.max(1) }
    }

    /// Reveal the bar and restart from zero.
    ///
    /// Returns `true` when the caller must start a tick loop, `false` when a
    /// loop is already driving this state.
    pub fn start(&mut self) -> bool {
        let needs_driver = !self.running;
        self.visible = true;
        self.percent = 0;
        self.running = true;
        needs_driver
    }

    /// Advance one tick. Returns whether further ticks are wanted.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.percent = self.percent.saturating_add(self.step).min(100);
        if self.percent >= 100 {
            self.running = false;
        }
        self.running
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100 && !self.running
    }

    /// Inline style for the bar element.
    pub fn width_style(&self) -> String {
        format!("width: {}%", self.percent)
    }
}
