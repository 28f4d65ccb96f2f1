use std::time::{Duration, Instant};

/// The single outstanding deferred full-resolution pass.
///
/// Scheduling replaces whatever was pending, so at most one deadline exists at
/// any time and a superseded deadline can never fire.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SettleTimer {
    deadline: Option<Instant>,
}

impl SettleTimer {
    #[must_use]
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer to fire `delay` after `now`. Returns `true` if a
    /// previously pending deadline was replaced.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> bool {
        self.deadline.replace(now + delay).is_some()
    }

    /// Returns `true` if a pending deadline was dropped.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consumes the deadline if it has passed. Fires at most once per
    /// `schedule`.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        if self.deadline.is_some_and(|deadline| now >= deadline) {
            self.deadline = None;
            return true;
        }

        false
    }
}
