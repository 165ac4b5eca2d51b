//! Query debouncing with cancel-and-reschedule semantics.
//!
//! A newly submitted query replaces any pending one and restarts the delay;
//! only the most recent query ever becomes due. There is a single slot, so no
//! concurrency is involved: the owner drives the debouncer with explicit
//! instants, which also keeps it deterministic under test.

use std::time::{Duration, Instant};

/// Default delay before a query is re-evaluated.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(180);

/// Single-slot debouncer for search queries.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    slot: Option<Pending>,
}

#[derive(Debug, Clone)]
struct Pending {
    query: String,
    due_at: Instant,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, slot: None }
    }

    /// Schedule `query` for evaluation `delay` from `now`, cancelling any
    /// pending query.
    pub fn submit(&mut self, query: impl Into<String>, now: Instant) {
        self.slot = Some(Pending {
            query: query.into(),
            due_at: now + self.delay,
        });
    }

    /// Take the pending query if its delay has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.slot {
            Some(pending) if now >= pending.due_at => self.slot.take().map(|p| p.query),
            _ => None,
        }
    }

    /// Drop the pending query without evaluating it.
    pub fn cancel(&mut self) {
        self.slot = None;
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(180);

    #[test]
    fn test_not_due_before_delay() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.submit("abandon", t0);

        assert!(d.poll(t0).is_none());
        assert!(d.poll(t0 + Duration::from_millis(179)).is_none());
        assert!(d.is_pending());
    }

    #[test]
    fn test_due_after_delay() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.submit("abandon", t0);

        assert_eq!(d.poll(t0 + DELAY), Some("abandon".to_string()));
        assert!(!d.is_pending());
        // The slot is consumed.
        assert!(d.poll(t0 + DELAY * 2).is_none());
    }

    #[test]
    fn test_resubmit_cancels_and_reschedules() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.submit("aban", t0);
        // A second keystroke before the delay elapses supersedes the first.
        let t1 = t0 + Duration::from_millis(100);
        d.submit("abandon", t1);

        // The first query's deadline passes without firing.
        assert!(d.poll(t0 + DELAY).is_none());
        // Only the latest query ever becomes due.
        assert_eq!(d.poll(t1 + DELAY), Some("abandon".to_string()));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut d = Debouncer::new(DELAY);
        let t0 = Instant::now();
        d.submit("abandon", t0);
        d.cancel();

        assert!(!d.is_pending());
        assert!(d.poll(t0 + DELAY * 2).is_none());
    }
}
