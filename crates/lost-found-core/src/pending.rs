//! Latest-Wins Tracking
//!
//! Photo reads complete asynchronously. Each new selection takes a ticket;
//! a completion is applied only if its ticket is still the latest one, so a
//! slow read never overwrites a newer selection or a cleared input.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one started operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Hands out tickets and remembers which one is current
#[derive(Debug, Default)]
pub struct LatestWins {
    current: AtomicU64,
}

impl LatestWins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new operation, superseding all earlier tickets
    pub fn begin(&self) -> Ticket {
        Ticket(self.current.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Supersede all outstanding tickets without starting anything
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::Relaxed);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.load(Ordering::Relaxed) == ticket.0
    }
}
