//! The one pending browser timer a controller may hold.

use gloo_timers::callback::Timeout;

/// Holds at most one pending [`Timeout`]; scheduling a new one cancels the previous.
#[derive(Default)]
pub struct TimerSlot {
    current: Option<Timeout>,
}

impl TimerSlot {
    /// Schedule `f` after `delay_ms`, replacing whatever was pending.
    pub fn replace<F>(&mut self, delay_ms: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        // Dropping the previous handle clears its browser timer.
        self.current = Some(Timeout::new(delay_ms, f));
    }
}
