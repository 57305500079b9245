//! Shared application state for Axum routers.

use std::sync::Arc;
use std::time::Instant;

use verdant_ledger::{AwardDispatcher, ProgressionReader, StreakTracker};
use verdant_storage::AccountStore;

/// Application-wide state shared across all routes.
///
/// The store handle is injected once here and fanned out to the ledger
/// components; route handlers never construct storage clients themselves.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
    pub awards: Arc<AwardDispatcher>,
    pub streaks: Arc<StreakTracker>,
    pub progression: Arc<ProgressionReader>,
    pub start_time: Instant,
}

impl AppState {
    /// Wire the ledger components over one injected store handle.
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self {
            awards: Arc::new(AwardDispatcher::new(store.clone())),
            streaks: Arc::new(StreakTracker::new(store.clone())),
            progression: Arc::new(ProgressionReader::new(store.clone())),
            store,
            start_time: Instant::now(),
        }
    }
}
