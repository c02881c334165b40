//! In-memory tracking record store.
//!
//! Reference implementation of the store contract over a concurrent map.
//! The map key doubles as the unique constraint on `tracking_number`: an
//! insert resolves its existence-check-and-insert pair through a single
//! atomic entry operation, which is what makes it safe for concurrent
//! issuances to race on the same candidate.

use std::{pin::Pin, sync::Arc, task::Poll};

use dashmap::{DashMap, mapref::entry::Entry};
use tower::Service;
#[cfg(feature = "tracknum_tracing")]
use tracing::debug;

use crate::issuance::{
    api::{StoreRequest, StoreResponse},
    error::TrackingError,
    record::TrackingRecord,
};

type RecordMap = DashMap<String, TrackingRecord>;

/// In-memory store service, keyed by tracking number.
///
/// Cloning is cheap and every clone shares the same state, so the store can
/// be handed to arbitrarily many concurrent issuances.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTrackingStore {
    records: Arc<RecordMap>,
}

impl InMemoryTrackingStore {
    pub fn new() -> Self {
        Self { records: Arc::new(DashMap::new()) }
    }

    /// Pre-populates the store, for tests and mocking.
    pub fn with_records(self, records: Vec<TrackingRecord>) -> Self {
        for record in records {
            self.records.insert(record.tracking_number.clone(), record);
        }
        self
    }

    /// Number of persisted records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn exists(&self, tracking_number: &str) -> StoreResponse {
        if self.records.contains_key(tracking_number) {
            StoreResponse::Present
        } else {
            StoreResponse::Absent
        }
    }

    /// Atomic insert-if-absent; the entry guard holds the key's shard lock
    /// across the vacancy check and the write.
    fn insert(&self, record: TrackingRecord) -> Result<StoreResponse, TrackingError> {
        match self.records.entry(record.tracking_number.clone()) {
            Entry::Occupied(_) => {
                #[cfg(feature = "tracknum_tracing")]
                debug!("[store] duplicate insert rejected: {}", record.tracking_number);
                Err(TrackingError::DuplicateTrackingNumber(record.tracking_number))
            }
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(StoreResponse::Inserted)
            }
        }
    }

    fn list(&self) -> Vec<TrackingRecord> {
        let mut records: Vec<TrackingRecord> =
            self.records.iter().map(|entry| entry.value().clone()).collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }
}

impl Service<StoreRequest> for InMemoryTrackingStore {
    type Response = StoreResponse;
    type Error = TrackingError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: StoreRequest) -> Self::Future {
        let store = self.clone();
        Box::pin(async move {
            match request {
                StoreRequest::Exists(tracking_number) => Ok(store.exists(&tracking_number)),
                StoreRequest::Insert(record) => store.insert(record),
                StoreRequest::List => Ok(StoreResponse::Records(store.list())),
            }
        })
    }
}
