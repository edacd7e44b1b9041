//! Async Load State
//!
//! Tagged fetch state for views, and request generations so a response
//! that arrives after a newer request was issued is thrown away.

use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    /// User-facing failure message
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }
}

/// Handed out per request; compare against the generation on completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic request counter owned by one view
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    latest: Arc<AtomicU64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request; every earlier ticket becomes stale
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Make every outstanding ticket stale without starting a request
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let generation = RequestGeneration::new();
        let first = generation.issue();
        let second = generation.issue();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_clones_share_counter() {
        let generation = RequestGeneration::new();
        let ticket = generation.issue();
        let view_copy = generation.clone();

        view_copy.issue();
        assert!(!generation.is_current(ticket));
    }

    #[test]
    fn test_invalidate_discards_pending() {
        let generation = RequestGeneration::new();
        let ticket = generation.issue();
        generation.invalidate();
        assert!(!generation.is_current(ticket));
    }

    #[test]
    fn test_from_result() {
        let ok: LoadState<u32> = LoadState::from_result(Ok::<_, String>(3));
        assert_eq!(ok, LoadState::Loaded(3));

        let failed: LoadState<u32> = LoadState::from_result(Err("boom"));
        assert_eq!(failed, LoadState::Failed("boom".to_string()));
    }
}
