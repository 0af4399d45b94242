//! Mock service-info source for testing without a service-info API.
//!
//! Serves canned services per train run and counts lookups, so callers can
//! check that enrichment is fetched once per stop list.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;

use super::ServiceInfoSource;
use super::types::Service;

/// In-memory service-info source.
#[derive(Debug, Default)]
pub struct MockServiceInfo {
    /// Canned lookups, keyed by (train number, service date).
    services: HashMap<(String, NaiveDate), Vec<Service>>,
    lookups: AtomicUsize,
}

impl MockServiceInfo {
    /// A source that knows no trains.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer lookups for one train run with `services`.
    pub fn with_services(
        mut self,
        train_number: impl Into<String>,
        service_date: NaiveDate,
        services: Vec<Service>,
    ) -> Self {
        self.services
            .insert((train_number.into(), service_date), services);
        self
    }

    /// Number of lookups made so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ServiceInfoSource for MockServiceInfo {
    async fn lookup(&self, train_number: &str, service_date: NaiveDate) -> Option<Vec<Service>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.services
            .get(&(train_number.to_string(), service_date))
            .cloned()
    }
}
