//! Tracking API facade service.
//!
//! Entry point for external callers: validates raw issuance parameters,
//! runs the bounded candidate/uniqueness loop against the injected store,
//! and serves the listing pass-through. One `call` is one issuance; the
//! service carries no per-invocation state, so clones can serve arbitrarily
//! many concurrent callers against the same store.

use std::{pin::Pin, task::Poll};

use tower::Service;
#[cfg(feature = "tracknum_tracing")]
use tracing::{debug, info, warn};

use crate::issuance::{
    api::{StoreRequest, StoreResponse, TrackingRequest, TrackingResponse},
    core::candidate,
    error::TrackingError,
    record::{IssuanceRequest, TrackingRecord},
    validation::RequestValidator,
};

/// Upper bound on candidate attempts for one issuance.
///
/// Every attempt consumes one existence check and, when the pre-check
/// passes, one insert; a collision on either side consumes the attempt.
pub const MAX_ISSUANCE_ATTEMPTS: usize = 10;

/// Tracking API facade.
///
/// Generic over the store service so that any persistence engine honoring
/// the [`StoreRequest`] contract can back it; the bundled default is
/// [`crate::issuance::core::store::InMemoryTrackingStore`].
#[derive(Debug, Clone)]
pub struct TrackingApiService<S> {
    /// Gatekeeper applied to every issuance request
    validator: RequestValidator,
    /// Injected store service, the single shared mutable resource
    store: S,
}

impl<S> TrackingApiService<S> {
    /// Creates a new facade on top of the provided store service.
    pub fn new(store: S) -> Self {
        Self { validator: RequestValidator, store }
    }
}

impl<S> Service<TrackingRequest> for TrackingApiService<S>
where
    S: Service<StoreRequest, Response = StoreResponse, Error = TrackingError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = TrackingResponse;
    type Error = TrackingError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: TrackingRequest) -> Self::Future {
        let validator = self.validator;
        let mut store = self.store.clone();
        Box::pin(async move {
            match request {
                TrackingRequest::Issue(params) => {
                    let request = validator.validate(&params)?;
                    #[cfg(feature = "tracknum_tracing")]
                    info!(
                        "[tracking] Issue: route: {}->{}, weight: {}, customer: {}",
                        request.origin_country_id,
                        request.destination_country_id,
                        request.weight,
                        request.customer_id
                    );
                    let record = issue(&mut store, request).await?;
                    Ok(TrackingResponse::Issued {
                        tracking_number: record.tracking_number,
                        created_at: record.created_at,
                    })
                }
                TrackingRequest::List => {
                    match store.call(StoreRequest::List).await? {
                        StoreResponse::Records(records) => Ok(TrackingResponse::Records(records)),
                        _ => Err(TrackingError::InternalIssuanceError),
                    }
                }
            }
        })
    }
}

/// Allocates a unique tracking number for a validated request and persists
/// the record.
///
/// Per attempt: construct a fresh candidate, ask the store whether it is
/// taken, and if not insert atomically. A duplicate reported by the insert
/// despite the pre-check means a concurrent issuance won the race for that
/// number; the attempt is consumed and the loop continues with new
/// randomness, never with the same candidate. Store faults other than the
/// duplicate constraint propagate unchanged.
async fn issue<S>(store: &mut S, request: IssuanceRequest) -> Result<TrackingRecord, TrackingError>
where
    S: Service<StoreRequest, Response = StoreResponse, Error = TrackingError>,
{
    for _attempt in 1..=MAX_ISSUANCE_ATTEMPTS {
        let candidate = candidate::generate(
            &request.origin_country_id,
            &request.destination_country_id,
            request.weight,
        );
        match store.call(StoreRequest::Exists(candidate.clone())).await? {
            StoreResponse::Absent => {}
            StoreResponse::Present => {
                #[cfg(feature = "tracknum_tracing")]
                debug!("[tracking] candidate taken: {candidate} (attempt {_attempt})");
                continue;
            }
            _ => return Err(TrackingError::InternalIssuanceError),
        }
        let record = request.clone().into_record(candidate);
        match store.call(StoreRequest::Insert(record.clone())).await {
            Ok(StoreResponse::Inserted) => return Ok(record),
            Ok(_) => return Err(TrackingError::InternalIssuanceError),
            // Lost the check-then-insert race; the unique constraint is the
            // authoritative arbiter, so this counts as a collision.
            Err(TrackingError::DuplicateTrackingNumber(_taken)) => {
                #[cfg(feature = "tracknum_tracing")]
                debug!("[tracking] insert raced on: {_taken} (attempt {_attempt})");
                continue;
            }
            Err(e) => return Err(e),
        }
    }
    #[cfg(feature = "tracknum_tracing")]
    warn!(
        "[tracking] exhausted {MAX_ISSUANCE_ATTEMPTS} attempts for customer {}",
        request.customer_id
    );
    Err(TrackingError::ExhaustedRetries)
}
