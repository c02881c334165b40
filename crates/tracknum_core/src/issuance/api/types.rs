//! Issuance API type definitions.
//!
//! This module defines all request and response types for the tracknum
//! issuance system.
//!
//! ## Tracking API
//! The external surface: issue a new tracking number for a shipment, or
//! list every persisted record. Issuance input arrives as raw, untyped
//! parameters ([`IssuanceParams`]) exactly as an HTTP edge would collect
//! them; typing and error reporting are the validator's job.
//!
//! ## Store API
//! The persistence contract the issuer is generic over. The store is an
//! external collaborator: any engine that can answer an existence check,
//! perform an atomic insert-if-absent, and enumerate records satisfies it.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::issuance::record::TrackingRecord;

/// Raw issuance parameters, prior to validation.
///
/// Every field is optional and untyped: this is the shape of a query string
/// or form, not of a domain object. [`crate::issuance::validation::RequestValidator`]
/// is the only component that interprets it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssuanceParams {
    /// Origin country code (e.g. "US")
    pub origin_country_id: Option<String>,
    /// Destination country code (e.g. "DE")
    pub destination_country_id: Option<String>,
    /// Shipment weight in kilograms, up to 3 decimal places (e.g. "2.5")
    pub weight: Option<String>,
    /// Customer UUID
    pub customer_id: Option<String>,
    /// Customer display name
    pub customer_name: Option<String>,
    /// Pre-supplied customer slug; derived from the name when absent
    pub customer_slug: Option<String>,
    /// Pre-supplied issuance timestamp (ISO-8601); defaults to "now"
    pub created_at: Option<String>,
}

/// Tracking API request types.
///
/// These requests are initiated by external callers against the tracking
/// facade service.
#[derive(Debug, Clone)]
pub enum TrackingRequest {
    /// Issue a new unique tracking number for a shipment.
    ///
    /// The parameters are validated, a candidate number is generated and
    /// checked against the store (with bounded retry on collision), and the
    /// winning record is persisted atomically.
    Issue(IssuanceParams),

    /// List all persisted tracking records.
    ///
    /// Pure pass-through query; records are returned most recent first.
    List,
}

/// Tracking API response types.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackingResponse {
    /// A tracking number was allocated and its record durably persisted.
    Issued {
        /// The unique identifier, matching `^[A-Z0-9]{1,16}$`
        tracking_number: String,
        /// Timestamp recorded on the persisted entity
        created_at: DateTime<Utc>,
    },

    /// All persisted tracking records, ordered by creation time descending.
    Records(Vec<TrackingRecord>),
}

/// Store request types.
///
/// The persistence contract the issuer is generic over. One request is one
/// atomic operation at the store; in particular [`StoreRequest::Insert`]
/// executes its existence-check-and-insert pair inside a single
/// transactional scope so that no two concurrent issuances can both observe
/// "absent" for the same number and both persist it.
#[derive(Debug, Clone)]
pub enum StoreRequest {
    /// Does a record with this tracking number already exist?
    ///
    /// Advisory pre-check only: a concurrent insert may land between this
    /// answer and a subsequent `Insert`. The unique constraint enforced by
    /// `Insert` is the authoritative backstop.
    Exists(String),

    /// Persist a record if and only if its tracking number is absent.
    ///
    /// Fails with
    /// [`crate::issuance::error::TrackingError::DuplicateTrackingNumber`]
    /// when the number is already taken; the record is not modified in that
    /// case and nothing is persisted.
    Insert(TrackingRecord),

    /// Enumerate all persisted records.
    List,
}

/// Store response types.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreResponse {
    /// The tracking number queried by `Exists` is already taken.
    Present,

    /// The tracking number queried by `Exists` is free.
    Absent,

    /// The record passed to `Insert` was durably persisted.
    Inserted,

    /// Records enumerated by `List`, ordered by creation time descending.
    Records(Vec<TrackingRecord>),
}
