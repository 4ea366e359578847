//! One-pending-task bookkeeping for delayed continuations.
//!
//! Each state machine owns a [`TaskSlot`]. Arming the slot hands out a fresh [`TaskTicket`]
//! and invalidates every earlier one, so a timer that fires after being superseded is ignored.

/// Identifies one scheduled continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskTicket(u64);

#[derive(Debug, Default, Clone)]
pub struct TaskSlot {
    generation: u64,
    armed: bool,
}

impl TaskSlot {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: 0,
            armed: false,
        }
    }

    /// Replace any pending task with a new one.
    pub const fn arm(&mut self) -> TaskTicket {
        self.generation = self.generation.wrapping_add(1);
        self.armed = true;
        TaskTicket(self.generation)
    }

    #[cfg(test)]
    const fn cancel(&mut self) {
        self.armed = false;
    }

    #[cfg(test)]
    const fn is_pending(&self) -> bool {
        self.armed
    }

    /// Consume `ticket` if it is the pending task. Returns `false` for stale or cancelled tickets.
    pub const fn fire(&mut self, ticket: TaskTicket) -> bool {
        if self.armed && ticket.0 == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }
}
