use std::time::{Duration, Instant};

/// Quiet interval a query must survive before a lookup is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// A single pending lookup with explicit supersede semantics.
///
/// Scheduling a new query cancels the previous pending one; only the entry
/// that survives the quiet interval fires. The clock is passed in so the
/// timing can be tested without sleeping.
pub struct Debouncer {
    quiet: Duration,
    pending: Option<Pending>,
}

struct Pending {
    query: String,
    due_at: Instant,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Schedule a lookup for `query`, superseding any pending one.
    pub fn schedule(&mut self, query: String, now: Instant) {
        self.pending = Some(Pending {
            query,
            due_at: now + self.quiet,
        });
    }

    /// Schedule a lookup that is due immediately.
    pub fn schedule_immediate(&mut self, query: String, now: Instant) {
        self.pending = Some(Pending { query, due_at: now });
    }

    /// Make the pending lookup, if any, due as of `now`.
    pub fn flush(&mut self, now: Instant) {
        if let Some(pending) = &mut self.pending {
            pending.due_at = now;
        }
    }

    /// Drop the pending lookup without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Take the pending query if its quiet interval has elapsed.
    pub fn fire(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now >= p.due_at) {
            self.pending.take().map(|p| p.query)
        } else {
            None
        }
    }

}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
