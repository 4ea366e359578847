//! Contact form confirmation lifecycle.

use crate::constants::FEEDBACK_HIDE_DELAY_MS;
use crate::schedule::{TaskSlot, TaskTicket};

/// Presentation of the confirmation region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackView {
    pub visible: bool,
}

/// Tracks whether the confirmation is showing and which auto-hide is current.
///
/// A new submission while the message is visible cancels the pending hide and restarts the
/// full delay.
#[derive(Debug, Clone)]
pub struct FeedbackMachine {
    visible: bool,
    pending: TaskSlot,
    hide_delay_ms: u32,
}

impl Default for FeedbackMachine {
    fn default() -> Self {
        Self::new(FEEDBACK_HIDE_DELAY_MS)
    }
}

impl FeedbackMachine {
    #[must_use]
    pub const fn new(hide_delay_ms: u32) -> Self {
        Self {
            visible: false,
            pending: TaskSlot::new(),
            hide_delay_ms,
        }
    }

    #[must_use]
    pub const fn view(&self) -> FeedbackView {
        FeedbackView {
            visible: self.visible,
        }
    }

    #[must_use]
    pub const fn hide_delay_ms(&self) -> u32 {
        self.hide_delay_ms
    }

    /// The form was submitted: show the confirmation and schedule its auto-hide.
    pub const fn submit(&mut self) -> (FeedbackView, TaskTicket) {
        self.visible = true;
        let ticket = self.pending.arm();
        (self.view(), ticket)
    }

    /// The auto-hide timer fired. Superseded timers return `None`.
    pub const fn expire(&mut self, ticket: TaskTicket) -> Option<FeedbackView> {
        if self.pending.fire(ticket) {
            self.visible = false;
            Some(self.view())
        } else {
            None
        }
    }
}
