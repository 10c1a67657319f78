//! Generation tokens for in-flight requests.
//!
//! Every request started for a key gets a [`Ticket`]. Starting a newer request
//! for the same key, or cancelling, makes older tickets stale; a response that
//! arrives with a stale ticket must be dropped.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub key: String,
    pub generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    current: HashMap<String, u64>,
    next: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `key`, superseding any request already in flight for it
    pub fn begin(&mut self, key: &str) -> Ticket {
        self.next += 1;
        self.current.insert(key.to_string(), self.next);
        Ticket {
            key: key.to_string(),
            generation: self.next,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.current.get(&ticket.key) == Some(&ticket.generation)
    }

    /// Mark the request finished. Returns false (and does nothing) for a stale ticket.
    pub fn complete(&mut self, ticket: &Ticket) -> bool {
        if self.is_current(ticket) {
            self.current.remove(&ticket.key);
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self, key: &str) {
        self.current.remove(key);
    }

    /// Invalidate every outstanding ticket (component unmount)
    pub fn cancel_all(&mut self) {
        self.current.clear();
    }

    pub fn in_flight(&self) -> usize {
        self.current.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_supersedes_older() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin("serial_numbers");
        let second = tracker.begin("serial_numbers");

        assert!(!tracker.is_current(&first));
        assert!(!tracker.complete(&first));
        assert!(tracker.complete(&second));
        assert_eq!(tracker.in_flight(), 0);
    }

    #[test]
    fn keys_are_independent() {
        let mut tracker = RequestTracker::new();
        let batch = tracker.begin("batch");
        let _serial = tracker.begin("serial_numbers");
        assert!(tracker.is_current(&batch));
        assert_eq!(tracker.in_flight(), 2);
    }

    #[test]
    fn cancel_all_invalidates_everything() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin("plugins");
        tracker.cancel_all();
        assert!(!tracker.complete(&ticket));
    }
}
