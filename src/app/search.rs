use crate::domain::models::{filter_records, Record};
use std::time::{Duration, Instant};

pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(800);

/// The single outstanding debounce timer.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDebounce {
    pub query: String,
    pub deadline: Instant,
}

/// Turns raw keystrokes into a debounced filter query.
///
/// Time is passed in by the caller so the state machine stays synchronous;
/// the runtime loop sleeps until [`SearchController::deadline`] and then
/// calls [`SearchController::fire`]. Scheduling a new timer replaces the old
/// one, so at most one is ever pending and only the last keystroke of a burst
/// is committed.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchController {
    query: String,
    debounced_query: String,
    pending: Option<PendingDebounce>,
    interval: Duration,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(DEBOUNCE_INTERVAL)
    }
}

impl SearchController {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            query: String::new(),
            debounced_query: String::new(),
            pending: None,
            interval,
        }
    }

    pub fn on_input(&mut self, text: impl Into<String>, now: Instant) {
        self.query = text.into();
        // Replacing the slot cancels whatever was scheduled before
        self.pending = Some(PendingDebounce {
            query: self.query.clone(),
            deadline: now + self.interval,
        });
    }

    /// Commits the pending query if its deadline has passed.
    ///
    /// Returns `true` when the debounced query was updated.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.pending.take() {
            Some(pending) if pending.deadline <= now => {
                tracing::debug!(query = %pending.query, "debounced query committed");
                self.debounced_query = pending.query;
                true
            }
            not_due => {
                self.pending = not_due;
                false
            }
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn visible_results<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        filter_records(records, &self.debounced_query)
    }
}
