//! Guard against out-of-order fetches.
//!
//! Rapid filter or page changes can dispatch a second request while the
//! first is still in flight; whichever resolves last would otherwise win.
//! Each dispatch takes a ticket, and only the latest ticket may commit
//! its response into state.

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket for one dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// One coordinator per logical resource (one per list page).
#[derive(Debug, Default)]
pub struct FetchCoordinator {
    issued: AtomicU64,
}

impl FetchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new dispatch, superseding every earlier one.
    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.issued.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// True when `ticket` is still the latest dispatch. A response whose
    /// ticket is stale must be discarded, not written to state.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.issued.load(Ordering::Relaxed) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_commits() {
        let coordinator = FetchCoordinator::new();
        let ticket = coordinator.begin();
        assert!(coordinator.is_current(ticket));
    }

    #[test]
    fn superseded_ticket_is_stale() {
        let coordinator = FetchCoordinator::new();
        let first = coordinator.begin();
        let second = coordinator.begin();
        assert!(!coordinator.is_current(first));
        assert!(coordinator.is_current(second));
    }

    #[test]
    fn stale_ticket_stays_stale_after_more_dispatches() {
        let coordinator = FetchCoordinator::new();
        let first = coordinator.begin();
        for _ in 0..10 {
            coordinator.begin();
        }
        assert!(!coordinator.is_current(first));
    }
}
