//! Debounce timer for the mobile search screen.
//!
//! Typing arms a fixed 500ms timer; the query only fires once the delay
//! elapses with no newer input. Blank input clears any pending query
//! without firing.

use std::time::{Duration, Instant};

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct Debounce {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Debounce {
    pub fn new() -> Self {
        Self::with_delay(SEARCH_DEBOUNCE)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Record a keystroke. Each input restarts the timer.
    pub fn input(&mut self, query: &str, now: Instant) {
        if query.trim().is_empty() {
            self.pending = None;
            return;
        }
        self.pending = Some((query.to_string(), now));
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending query if its delay has elapsed.
    pub fn fire(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, armed_at)) if now >= *armed_at + self.delay => {
                self.pending.take().map(|(query, _)| query)
            }
            _ => None,
        }
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new()
    }
}
