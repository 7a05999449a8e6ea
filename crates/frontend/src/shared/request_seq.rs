use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Ticket taken when a fetch starts.
///
/// Holds its own handle on the sequence counter, so it can be checked from
/// the async task after the page that issued it has been unmounted.
#[derive(Debug, Clone)]
pub struct RequestTicket {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl RequestTicket {
    /// `true` while no newer fetch has been issued on the same sequence
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }
}

/// Orders the fetches of one list so only the newest result is applied.
///
/// Each fetch calls [`RequestSequence::issue`] before sending and checks
/// [`RequestTicket::is_current`] before writing its result; a response that
/// arrives after a newer fetch was issued is dropped.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        RequestTicket {
            id: self.latest.fetch_add(1, Ordering::SeqCst) + 1,
            latest: Arc::clone(&self.latest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::*;

    #[test]
    fn test_newer_ticket_wins() {
        let seq = RequestSequence::new();
        let first = seq.issue();
        assert!(first.is_current());

        let second = seq.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_clones_share_the_counter() {
        let seq = RequestSequence::new();
        let other = seq.clone();
        let ticket = seq.issue();
        other.issue();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_ticket_outlives_disposed_page() {
        let owner = Owner::new();
        let (seq, ticket) = owner.with(|| {
            let seq = StoredValue::new(RequestSequence::new());
            let ticket = seq.with_value(|s| s.issue());
            (seq, ticket)
        });
        owner.cleanup();

        assert!(seq.try_with_value(|_| ()).is_none());
        assert!(ticket.is_current());
    }
}
