//! Press-and-hold reset button.
//!
//! Timestamps are supplied by the caller in milliseconds so the state machine
//! stays independent of any clock.

#[cfg(test)]
#[path = "reset_test.rs"]
mod reset_test;

use crate::consts::RESET_HOLD_MS;

/// Hold state of the reset button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResetButton {
    hold_ms: f64,
    armed_at: Option<f64>,
}

impl Default for ResetButton {
    fn default() -> Self {
        Self::new(RESET_HOLD_MS)
    }
}

impl ResetButton {
    #[must_use]
    pub fn new(hold_ms: f64) -> Self {
        Self { hold_ms, armed_at: None }
    }

    /// Whether the button is currently being held.
    #[must_use]
    pub fn holding(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Start a hold. A repeated press while already holding keeps the
    /// original start time.
    pub fn press(&mut self, now_ms: f64) {
        if self.armed_at.is_none() {
            self.armed_at = Some(now_ms);
        }
    }

    /// Cancel the hold without firing.
    pub fn release(&mut self) {
        self.armed_at = None;
    }

    /// Returns `true` once when the hold has lasted long enough, then disarms.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.armed_at {
            Some(start) if now_ms - start >= self.hold_ms => {
                self.armed_at = None;
                true
            }
            _ => false,
        }
    }
}
