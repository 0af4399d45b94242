//! Application state for the web layer.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};

use crate::serviceinfo::ServiceInfoClient;
use crate::store::DepartureStore;

/// Shared application state.
///
/// Contains everything needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Departure snapshot
    pub store: Arc<DepartureStore>,

    /// Enrichment client (possibly disabled)
    pub serviceinfo: ServiceInfoClient,

    /// Fixed "now" for replaying an old snapshot; wall clock when unset
    pub replay_time: Option<DateTime<FixedOffset>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: DepartureStore, serviceinfo: ServiceInfoClient) -> Self {
        Self {
            store: Arc::new(store),
            serviceinfo,
            replay_time: None,
        }
    }

    /// Evaluate all requests as if it were `time`.
    pub fn with_replay_time(mut self, time: DateTime<FixedOffset>) -> Self {
        self.replay_time = Some(time);
        self
    }

    /// Current time as seen by the feed.
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.replay_time
            .unwrap_or_else(|| Utc::now().fixed_offset())
    }
}
