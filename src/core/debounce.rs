//! Cancellable one-shot timers on event-loop time
//!
//! Scheduling again replaces whatever was pending (last write wins).

/// A single pending action with a deadline
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<(u64, T)>,
    /// Schedules that replaced a still-pending action
    restarts: u64,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
            restarts: 0,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Arm (or re-arm) the timer to fire `delay_ms` after `now_ms`
    ///
    /// Returns true if a pending action was cancelled.
    pub fn schedule(&mut self, now_ms: u64, payload: T) -> bool {
        let replaced = self.pending.is_some();
        if replaced {
            self.restarts += 1;
        }
        self.pending = Some((now_ms.saturating_add(self.delay_ms), payload));
        replaced
    }

    /// Take the payload if its deadline has been reached
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match self.pending {
            Some((deadline, _)) if now_ms >= deadline => self.pending.take().map(|(_, p)| p),
            _ => None,
        }
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, p)| p)
    }

    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(d, _)| *d)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn restarts(&self) -> u64 {
        self.restarts
    }
}
