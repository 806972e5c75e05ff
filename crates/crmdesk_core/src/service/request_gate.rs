//! Stale-response guard for rapid, overlapping UI requests.
//!
//! # Responsibility
//! - Tag each request with a monotonically increasing ticket.
//! - Let callers drop responses that resolve after a newer request started.
//!
//! # Invariants
//! - Only the most recently issued ticket is current.
//! - In-flight store calls are never cancelled; their results are discarded.

use log::debug;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence number of one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// One gate per logical view (e.g. the contact search box).
#[derive(Debug, Default)]
pub struct RequestGate {
    latest: AtomicU64,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket that supersedes every earlier one.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Runs `request` under a fresh ticket.
    ///
    /// Returns `None` when a newer request was issued before this one
    /// resolved.
    pub async fn run<F, T>(&self, request: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        let ticket = self.issue();
        let response = request.await;
        if self.is_current(ticket) {
            Some(response)
        } else {
            debug!(
                "event=stale_response module=service status=discarded ticket={}",
                ticket.0
            );
            None
        }
    }
}
